//! Decision Tree Engine - multi-format tree ingestion and normalization
//!
//! This library parses machine-learning decision-tree dumps written in
//! three textual encodings and normalizes them into one canonical,
//! index-linked tree representation suitable for rendering, editing, and
//! lossless re-export:
//! - MLPDT: indented text, one node per line, depth from `|` markers
//! - Graphviz: sklearn-style digraph dumps with labeled declarations
//! - JSON: the engine's own structured document format
//!
//! Parsed trees are flat node lists with index-based child references,
//! plus deterministic class-to-color assignment from a fixed palette.

pub mod color;
pub mod engine;
pub mod export;
pub mod node;
pub mod parser;
pub mod utils;

pub use color::{color_by_name, Color, ColorAssigner};
pub use engine::{TreeEngine, TreeSummary};
pub use node::{Node, SplitStats};
pub use parser::{parse_tree, TreeFormat};
pub use utils::ParseError;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;
