//! Edge-list reading operations.
//!
//! Parses text sources where each line declares one directed edge:
//! `<source> -> <destination>`, with the literal `" -> "` arrow as the
//! separator. Line numbers are tracked (1-based) so parse errors point at
//! the offending record.
//!
//! Malformed lines are fatal. A line with no separator, a blank line, or a
//! line with an empty endpoint stops parsing with
//! [`Error::InvalidLine`](crate::Error::InvalidLine) - bad records are
//! never silently skipped.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Literal separator between the two endpoints of an edge record.
pub const SEPARATOR: &str = " -> ";

/// A parsed edge-list source.
///
/// `edges` preserves file order, duplicates included - a record that
/// appears twice is kept twice. `flavors` holds every identifier seen as
/// either endpoint, deduplicated, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Directed `(source, destination)` pairs in file order.
    pub edges: Vec<(String, String)>,
    /// All endpoint identifiers, first-seen order, no duplicates.
    pub flavors: Vec<String>,
}

impl EdgeList {
    /// Number of edge records, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the source contained no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Read and parse an edge-list file.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `path` does not exist, [`Error::Io`] for
/// any other failure opening or reading it, and [`Error::InvalidLine`] for
/// the first malformed record encountered.
pub fn read_edge_list(path: &Path) -> Result<EdgeList> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    parse_edge_list(BufReader::new(file))
}

/// Parse edge-list records from any buffered reader.
///
/// # Errors
///
/// Returns [`Error::Io`] if a line cannot be read and
/// [`Error::InvalidLine`] for the first malformed record.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut list = EdgeList::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let (source, destination) = parse_line(&line, line_number)?;

        for endpoint in [&source, &destination] {
            if seen.insert(endpoint.clone()) {
                list.flavors.push(endpoint.clone());
            }
        }
        list.edges.push((source, destination));
    }

    tracing::debug!(
        edges = list.edges.len(),
        flavors = list.flavors.len(),
        "Edge list parsed"
    );

    Ok(list)
}

/// Parse one `<source> -> <destination>` record.
///
/// Anything after a second separator is ignored, matching the historical
/// behavior of splitting the line and taking the first two fields.
fn parse_line(line: &str, line_number: usize) -> Result<(String, String)> {
    let Some((source, rest)) = line.split_once(SEPARATOR) else {
        return Err(Error::InvalidLine {
            line_number,
            reason: format!("expected `{SEPARATOR}` separator in {line:?}"),
        });
    };

    let destination = match rest.split_once(SEPARATOR) {
        Some((destination, _ignored)) => destination,
        None => rest,
    };

    if source.is_empty() || destination.is_empty() {
        return Err(Error::InvalidLine {
            line_number,
            reason: format!("empty endpoint in {line:?}"),
        });
    }

    Ok((source.to_string(), destination.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_line_splits_on_arrow() {
        let (source, destination) = parse_line("chocolate -> vanilla", 1).unwrap();
        assert_eq!(source, "chocolate");
        assert_eq!(destination, "vanilla");
    }

    #[test]
    fn parse_line_ignores_fields_after_second_separator() {
        let (source, destination) = parse_line("a -> b -> c", 1).unwrap();
        assert_eq!(source, "a");
        assert_eq!(destination, "b");
    }

    #[test]
    fn parse_line_rejects_missing_separator() {
        let err = parse_line("chocolate vanilla", 3).unwrap_err();
        match err {
            Error::InvalidLine { line_number, .. } => assert_eq!(line_number, 3),
            other => panic!("expected InvalidLine, got {other:?}"),
        }
    }

    #[test]
    fn parse_line_rejects_blank_line() {
        assert!(parse_line("", 1).is_err());
    }

    #[test]
    fn parse_line_rejects_empty_endpoints() {
        assert!(parse_line(" -> vanilla", 1).is_err());
        assert!(parse_line("chocolate -> ", 1).is_err());
    }

    #[test]
    fn parse_edge_list_preserves_order_and_duplicates() {
        let input = Cursor::new("a -> b\nb -> c\na -> b\n");
        let list = parse_edge_list(input).unwrap();

        assert_eq!(
            list.edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string()),
                ("a".to_string(), "b".to_string()),
            ]
        );
        assert_eq!(list.flavors, vec!["a", "b", "c"]);
        assert_eq!(list.edge_count(), 3);
    }

    #[test]
    fn parse_edge_list_handles_crlf_input() {
        let input = Cursor::new("a -> b\r\nc -> d\r\n");
        let list = parse_edge_list(input).unwrap();

        assert_eq!(list.flavors, vec!["a", "b", "c", "d"]);
        assert_eq!(list.edges[1], ("c".to_string(), "d".to_string()));
    }

    #[test]
    fn parse_edge_list_empty_input_is_empty() {
        let list = parse_edge_list(Cursor::new("")).unwrap();
        assert!(list.is_empty());
        assert!(list.flavors.is_empty());
    }

    #[test]
    fn parse_edge_list_reports_line_number_of_bad_record() {
        let input = Cursor::new("a -> b\nnot an edge\n");
        let err = parse_edge_list(input).unwrap_err();
        match err {
            Error::InvalidLine { line_number, .. } => assert_eq!(line_number, 2),
            other => panic!("expected InvalidLine, got {other:?}"),
        }
    }
}
