//! Line tokenization for dependency lists

/// Bytes that separate tokens besides ASCII whitespace
pub const SEPARATORS: &[u8] = b":,";

fn is_separator(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || SEPARATORS.contains(byte)
}

/// Split a line into its non-empty tokens
///
/// Colons, commas and ASCII whitespace are all equivalent token
/// boundaries, so `a: b, c`, `a b c` and `a,b,,c` tokenize identically.
/// Every other byte, including non-ASCII ones, belongs to a name.
pub fn tokenize(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(is_separator).filter(|token| !token.is_empty())
}
