//! # Dependency List Parsing
//!
//! Reads the line-oriented dependency format into [`Declaration`]s. Each
//! non-empty line is `<entity><sep><dep1><sep><dep2>...` where any of `:`,
//! `,` or ASCII whitespace separates tokens.
//!
//! ```text
//! main.c: parser.c, lexer.c
//! parser.c: lexer.c
//! lexer.c:
//! ```
//!
//! Names are kept as raw bytes ([`EntityName`](crate::core::EntityName)), so
//! a list in Latin-1 or any other ASCII-compatible encoding parses the same
//! way a UTF-8 one does.
//!
//! Parsing never resolves names; that happens in
//! [`DependencyGraphBuilder`](crate::graph::DependencyGraphBuilder) once the
//! full set of declared entities is known.
//!
//! ## Example
//!
//! ```
//! use depcycle::parser::DependencyParser;
//!
//! let declarations = DependencyParser::new().parse_str("a: b, c\n\nb: c\n");
//!
//! assert_eq!(declarations.len(), 2);
//! assert_eq!(declarations[0].entity, "a");
//! assert_eq!(declarations[0].dependencies, vec!["b", "c"]);
//! assert_eq!(declarations[1].line, 3);
//! ```

mod parser_impl;
mod tokenizer;

pub use parser_impl::{Declaration, DependencyParser};
pub use tokenizer::{SEPARATORS, tokenize};
