/*
[INPUT]:  Raw operator-typed command lines.
[OUTPUT]: Command token and trimmed parameter remainder.
[POS]:    Input layer - command line splitting.
[UPDATE]: When the split contract changes (none expected; no quoting rules).
*/

/// A raw line split into its command token and parameter remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub command: String,
    pub params: String,
}

/// Split a typed line into the first whitespace-delimited token and the rest.
///
/// The remainder is the original line with that prefix removed and surrounding
/// whitespace trimmed; a whitespace-only remainder normalizes to empty. There
/// are no quoting or escaping rules beyond this split.
pub fn parse_line(raw: &str) -> ParsedLine {
    let line = raw.trim_start();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    };

    ParsedLine {
        command: command.to_string(),
        params: rest.trim().to_string(),
    }
}
