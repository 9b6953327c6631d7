use std::path::Path;

use log::info;

use crate::color::{assign_colors, ColorAssigner};
use crate::export;
use crate::node::Node;
use crate::parser::{parse_tree, TreeFormat};
use crate::utils::ParseError;

/// The main engine holding one parsed tree and its session state
///
/// Loading a dump replaces the previous tree wholesale; identifiers and
/// linking state are fresh on every load. Concurrent parses must each use
/// their own engine instance - nothing here is shared.
#[derive(Debug, Default)]
pub struct TreeEngine {
    nodes: Vec<Node>,
    format: Option<TreeFormat>,
    assigner: ColorAssigner,
}

impl TreeEngine {
    /// Create an engine with no tree loaded
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            format: None,
            assigner: ColorAssigner::new(),
        }
    }

    /// Parse `content` in the given format, replacing any loaded tree
    pub fn load(&mut self, format: TreeFormat, content: &str) -> Result<&[Node], ParseError> {
        let nodes = parse_tree(format, content)?;
        info!("loaded {} tree with {} nodes", format.as_str(), nodes.len());
        self.nodes = nodes;
        self.format = Some(format);
        self.assigner = ColorAssigner::new();
        Ok(&self.nodes)
    }

    /// Resolve a format name, then load
    pub fn load_named(&mut self, format_name: &str, content: &str) -> Result<&[Node], ParseError> {
        let format = TreeFormat::from_name(format_name)?;
        self.load(format, content)
    }

    /// The currently loaded node list
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Format of the currently loaded tree
    pub fn format(&self) -> Option<TreeFormat> {
        self.format
    }

    /// Assign palette colors to class leaves, returning how many
    pub fn assign_colors(&mut self) -> usize {
        assign_colors(&mut self.nodes, &mut self.assigner)
    }

    /// Replace the display label of the node at `index`
    pub fn relabel(&mut self, index: usize, label: impl Into<String>) -> Result<(), ParseError> {
        let node = self.node_mut(index)?;
        node.label = label.into();
        Ok(())
    }

    /// Replace the color name of the node at `index`
    pub fn recolor(&mut self, index: usize, color_name: impl Into<String>) -> Result<(), ParseError> {
        let node = self.node_mut(index)?;
        node.color_name = Some(color_name.into());
        Ok(())
    }

    /// Serialize the loaded tree, backfilling missing labels first
    pub fn export_json(&mut self) -> crate::Result<String> {
        export::backfill_labels(&mut self.nodes);
        export::serialize(&self.nodes)
    }

    /// Export the loaded tree to a structured document on disk
    pub fn export_to_file<P: AsRef<Path>>(&mut self, path: P) -> crate::Result<()> {
        export::write_json(&mut self.nodes, path)
    }

    /// Summarize the loaded tree
    pub fn summary(&self) -> TreeSummary {
        TreeSummary {
            node_count: self.nodes.len(),
            leaf_count: self.nodes.iter().filter(|n| n.is_leaf).count(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
        }
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut Node, ParseError> {
        let len = self.nodes.len();
        self.nodes.get_mut(index).ok_or_else(|| {
            ParseError::StructuralViolation(format!(
                "node index {} out of range ({} nodes loaded)",
                index, len
            ))
        })
    }
}

/// Summary information about a loaded tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSummary {
    pub node_count: usize,
    pub leaf_count: usize,
    pub max_depth: usize,
}
