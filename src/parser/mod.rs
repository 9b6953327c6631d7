//! Format parsers turning raw tree dumps into the canonical node list.
//!
//! Three input encodings are supported: the indented-text MLPDT format,
//! the Graphviz graph-description format, and the structured JSON
//! document format used for persistence. [parse_tree] dispatches on
//! [TreeFormat] and gives every invocation a fresh [ParseContext], so
//! parallel callers never share identifier state.

pub mod graphviz;
pub mod json;
pub mod linker;
pub mod mlpdt;

use crate::node::Node;
use crate::utils::ParseError;

/// The three recognized input encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Mlpdt,
    Graphviz,
    Json,
}

impl TreeFormat {
    /// Resolve a format name, e.g. from a file-type selection
    ///
    /// Recognized names are `MLPDT`, `Graphviz` and `JSON`, compared
    /// ASCII-case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        if name.eq_ignore_ascii_case("MLPDT") {
            Ok(Self::Mlpdt)
        } else if name.eq_ignore_ascii_case("Graphviz") {
            Ok(Self::Graphviz)
        } else if name.eq_ignore_ascii_case("JSON") {
            Ok(Self::Json)
        } else {
            Err(ParseError::UnsupportedFormat(name.to_string()))
        }
    }

    /// Canonical display name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mlpdt => "MLPDT",
            Self::Graphviz => "Graphviz",
            Self::Json => "JSON",
        }
    }
}

/// Per-parse state owning the node identifier counter
///
/// Every parse pass gets its own context; identifiers restart at `Node1`
/// and never leak between passes or engine instances.
#[derive(Debug, Default)]
pub struct ParseContext {
    counter: usize,
}

impl ParseContext {
    /// Create a context with a fresh identifier counter
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Produce the next node identifier, `Node1`, `Node2`, ...
    pub fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("Node{}", self.counter)
    }
}

/// Parse `content` in the given format into the canonical node list
///
/// Line-oriented formats are split on newlines here; the JSON format
/// consumes the document whole. A fresh [ParseContext] backs each call.
pub fn parse_tree(format: TreeFormat, content: &str) -> Result<Vec<Node>, ParseError> {
    let mut ctx = ParseContext::new();
    match format {
        TreeFormat::Mlpdt => {
            let lines: Vec<&str> = content.lines().collect();
            mlpdt::parse(&mut ctx, &lines)
        }
        TreeFormat::Graphviz => {
            let lines: Vec<&str> = content.lines().collect();
            graphviz::parse(&lines)
        }
        TreeFormat::Json => json::parse(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(TreeFormat::from_name("MLPDT").unwrap(), TreeFormat::Mlpdt);
        assert_eq!(TreeFormat::from_name("mlpdt").unwrap(), TreeFormat::Mlpdt);
        assert_eq!(
            TreeFormat::from_name("Graphviz").unwrap(),
            TreeFormat::Graphviz
        );
        assert_eq!(TreeFormat::from_name("JSON").unwrap(), TreeFormat::Json);
    }

    #[test]
    fn test_format_from_name_unsupported() {
        let err = TreeFormat::from_name("XML").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(_)));
        assert_eq!(err.to_string(), "UnsupportedFormat: XML");
    }

    #[test]
    fn test_format_round_trips_through_name() {
        for format in [TreeFormat::Mlpdt, TreeFormat::Graphviz, TreeFormat::Json] {
            assert_eq!(TreeFormat::from_name(format.as_str()).unwrap(), format);
        }
    }

    #[test]
    fn test_context_ids_are_sequential() {
        let mut ctx = ParseContext::new();
        assert_eq!(ctx.next_id(), "Node1");
        assert_eq!(ctx.next_id(), "Node2");
        assert_eq!(ctx.next_id(), "Node3");
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut first = ParseContext::new();
        first.next_id();
        first.next_id();

        let mut second = ParseContext::new();
        assert_eq!(second.next_id(), "Node1");
    }

    #[test]
    fn test_parse_tree_dispatch() {
        let mlpdt = "a <= 1\n|  b <= 2 : 1 (c1) (10/0)";
        let nodes = parse_tree(TreeFormat::Mlpdt, mlpdt).unwrap();
        assert_eq!(nodes.len(), 3);

        let empty = parse_tree(TreeFormat::Mlpdt, "");
        assert!(matches!(empty, Err(ParseError::InputEmpty(_))));
    }
}
