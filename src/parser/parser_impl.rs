use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::tokenizer::tokenize;
use crate::core::EntityName;
use crate::error::DepCycleError;

/// One non-empty line of a dependency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The entity being declared (first token on the line)
    pub entity: EntityName,
    /// Names the entity depends on, in the order written
    pub dependencies: Vec<EntityName>,
    /// 1-based line number in the source
    pub line: usize,
}

impl Declaration {
    /// Build a declaration from a line, or `None` if the line has no tokens
    pub fn from_line(line: &[u8], line_number: usize) -> Option<Self> {
        let mut tokens = tokenize(line);
        let entity = EntityName::from(tokens.next()?);

        Some(Self {
            entity,
            dependencies: tokens.map(EntityName::from).collect(),
            line: line_number,
        })
    }
}

/// Reads dependency lists into declarations
///
/// Lines without tokens are skipped. Nothing about a line's content is ever
/// an error, including bytes that are not valid UTF-8; only failing to read
/// the source is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyParser;

impl DependencyParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every line of `reader`
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Declaration>, DepCycleError> {
        Ok(read_declarations(reader)?)
    }

    /// Parse the dependency list stored at `path`
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Declaration>, DepCycleError> {
        let file_read_error = |source| DepCycleError::FileReadError {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(file_read_error)?;
        read_declarations(BufReader::new(file)).map_err(file_read_error)
    }

    /// Parse dependency list contents held in memory
    pub fn parse_bytes(&self, input: &[u8]) -> Vec<Declaration> {
        input
            .split(|&byte| byte == b'\n')
            .enumerate()
            .filter_map(|(i, line)| Declaration::from_line(line, i + 1))
            .collect()
    }

    /// Parse dependency list text held in memory
    pub fn parse_str(&self, input: &str) -> Vec<Declaration> {
        self.parse_bytes(input.as_bytes())
    }
}

fn read_declarations<R: BufRead>(mut reader: R) -> io::Result<Vec<Declaration>> {
    let mut declarations = Vec::new();
    let mut line = Vec::new();
    let mut line_number = 0;

    while reader.read_until(b'\n', &mut line)? > 0 {
        line_number += 1;
        if let Some(declaration) = Declaration::from_line(&line, line_number) {
            declarations.push(declaration);
        }
        line.clear();
    }

    Ok(declarations)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn decl(entity: &str, deps: &[&str], line: usize) -> Declaration {
        Declaration {
            entity: EntityName::from(entity),
            dependencies: deps.iter().map(|&d| EntityName::from(d)).collect(),
            line,
        }
    }

    #[test]
    fn test_parse_reader_basic() {
        let input = "a: b, c\nb: c\nc:\n";
        let declarations = DependencyParser::new()
            .parse_reader(Cursor::new(input))
            .unwrap();

        assert_eq!(
            declarations,
            vec![decl("a", &["b", "c"], 1), decl("b", &["c"], 2), decl("c", &[], 3)]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped_but_counted() {
        let input = "\n   \na: b\n\t\nb\n";
        let declarations = DependencyParser::new()
            .parse_reader(Cursor::new(input))
            .unwrap();

        assert_eq!(declarations, vec![decl("a", &["b"], 3), decl("b", &[], 5)]);
    }

    #[test]
    fn test_empty_input() {
        let declarations = DependencyParser::new()
            .parse_reader(Cursor::new(""))
            .unwrap();
        assert!(declarations.is_empty());
    }

    #[test]
    fn test_missing_trailing_newline() {
        let declarations = DependencyParser::new().parse_str("a: b\nb: a");
        assert_eq!(declarations, vec![decl("a", &["b"], 1), decl("b", &["a"], 2)]);
    }

    #[test]
    fn test_crlf_input() {
        let declarations = DependencyParser::new().parse_str("a: b\r\nb:\r\n");
        assert_eq!(declarations, vec![decl("a", &["b"], 1), decl("b", &[], 2)]);
    }

    #[test]
    fn test_parse_str_matches_parse_reader() {
        let input = "x: y z\n\ny: z\nz\n";
        let parser = DependencyParser::new();

        assert_eq!(
            parser.parse_str(input),
            parser.parse_reader(Cursor::new(input)).unwrap()
        );
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "main.c: util.c").unwrap();
        writeln!(file, "util.c:").unwrap();

        let declarations = DependencyParser::new().parse_file(file.path()).unwrap();
        assert_eq!(
            declarations,
            vec![decl("main.c", &["util.c"], 1), decl("util.c", &[], 2)]
        );
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");

        let err = DependencyParser::new().parse_file(&path).unwrap_err();
        match err {
            DepCycleError::FileReadError { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected FileReadError, got {other:?}"),
        }
    }

    #[test]
    fn test_latin1_names_are_kept_as_bytes() {
        let bytes: &[u8] = b"a: caf\xe9.c\ncaf\xe9.c: a\n\xff\xfe: c\n";
        let parser = DependencyParser::new();
        let declarations = parser.parse_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(declarations.len(), 3);
        assert_eq!(declarations[0].dependencies[0].as_bytes(), b"caf\xe9.c");
        assert_eq!(declarations[1].entity, declarations[0].dependencies[0]);
        assert_eq!(declarations[2].entity.as_bytes(), b"\xff\xfe");
        assert_eq!(declarations, parser.parse_bytes(bytes));
    }

    #[test]
    fn test_distinct_invalid_bytes_stay_distinct() {
        let declarations = DependencyParser::new().parse_bytes(b"\xe9: \xe8\n\xe8:\n");

        assert_ne!(declarations[0].entity, declarations[1].entity);
        assert_eq!(declarations[0].dependencies[0], declarations[1].entity);
    }
}
