//! # Parfait Edge List: arrow-separated edge records
//!
//! A small reader for the edge-list text format used by parfait menus:
//! one directed edge per line, written `<source> -> <destination>` with
//! the literal `" -> "` arrow as the separator.
//!
//! Parsing yields both the ordered edge records (duplicates preserved)
//! and the deduplicated set of endpoint identifiers in first-seen order,
//! so callers can register nodes before wiring edges between them.
//!
//! ## Quick Start
//!
//! ```
//! use parfait_edgelist::parse_edge_list;
//!
//! let menu = "chocolate -> vanilla\nvanilla -> mint\n";
//! let list = parse_edge_list(menu.as_bytes())?;
//!
//! assert_eq!(list.edges.len(), 2);
//! assert_eq!(list.flavors, vec!["chocolate", "vanilla", "mint"]);
//! # Ok::<(), parfait_edgelist::Error>(())
//! ```
//!
//! Malformed input is a hard error, never skipped: a line without the
//! separator (blank lines included) or with an empty endpoint fails with
//! the 1-based line number of the offending record.

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::{parse_edge_list, read_edge_list, EdgeList, SEPARATOR};
