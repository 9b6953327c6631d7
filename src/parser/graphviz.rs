use std::collections::HashMap;

use log::debug;
use regex::Regex;

use crate::node::{Node, SplitStats};
use crate::utils::ParseError;

/// Marker separating sub-fields inside a declaration label payload
const FIELD_SEPARATOR: &str = "\\n";

/// Parse a graph-description (Graphviz) decision tree dump
///
/// Two statement shapes are recognized: node declarations carrying a
/// quoted label payload, and `parent -> child` edge statements. Everything
/// else - the `digraph` header, styling directives, closing brace - is
/// skipped, as are declarations and edges that fail to match. Children are
/// linked in edge discovery order and depths are assigned by walking down
/// from the first declared node.
pub fn parse(lines: &[&str]) -> Result<Vec<Node>, ParseError> {
    if lines.is_empty() {
        return Err(ParseError::InputEmpty(
            "no lines to parse for Graphviz format".to_string(),
        ));
    }

    let matcher = LineMatcher::new();
    let mut nodes: Vec<Node> = Vec::new();
    let mut edges: Vec<(String, String)> = Vec::new();

    for line in lines {
        if line.contains("[label=") {
            match matcher.parse_declaration(line) {
                Some(node) => nodes.push(node),
                None => debug!("skipping malformed node declaration: {}", line),
            }
        } else if line.contains("->") {
            match matcher.parse_edge(line) {
                Some(edge) => edges.push(edge),
                None => debug!("skipping malformed edge statement: {}", line),
            }
        } else {
            debug!("skipping unrecognized line: {}", line);
        }
    }

    if nodes.is_empty() {
        return Err(ParseError::InputEmpty(
            "no node declarations recognized in Graphviz input".to_string(),
        ));
    }

    link_edges(&mut nodes, &edges)?;
    assign_depths(&mut nodes);

    debug!("parsed {} Graphviz nodes, {} edges", nodes.len(), edges.len());
    Ok(nodes)
}

/// Compiled statement and field patterns for one parse pass
struct LineMatcher {
    node_re: Regex,
    edge_re: Regex,
    decimal_re: Regex,
    integer_re: Regex,
}

impl LineMatcher {
    fn new() -> Self {
        Self {
            node_re: Regex::new(r#"(\d+) \[label="(.+?)"\]"#).expect("valid node pattern"),
            edge_re: Regex::new(r"(\d+) -> (\d+)").expect("valid edge pattern"),
            decimal_re: Regex::new(r"\d+\.\d+").expect("valid decimal pattern"),
            integer_re: Regex::new(r"\d+").expect("valid integer pattern"),
        }
    }

    /// Parse one node declaration, `None` if any field fails to decode
    ///
    /// A payload with more than four sub-fields is an internal node whose
    /// first field is the split test; four sub-fields form a leaf. The
    /// label itself stays empty until export backfills it.
    fn parse_declaration(&self, line: &str) -> Option<Node> {
        let caps = self.node_re.captures(line)?;
        let id = caps[1].to_string();
        let payload = caps.get(2)?.as_str();
        let fields: Vec<&str> = payload.split(FIELD_SEPARATOR).collect();

        let stats = if fields.len() > 4 {
            SplitStats {
                test: Some(fields[0].to_string()),
                impurity: self.decimal(fields[1])?,
                samples: self.integer(fields[2])?,
                value: value_list(fields[3])?,
                class_name: class_annotation(fields[4])?,
            }
        } else if fields.len() == 4 {
            SplitStats {
                test: None,
                impurity: self.decimal(fields[0])?,
                samples: self.integer(fields[1])?,
                value: value_list(fields[2])?,
                class_name: class_annotation(fields[3])?,
            }
        } else {
            return None;
        };

        let mut node = if stats.test.is_some() {
            Node::internal(id, "", 0)
        } else {
            Node::leaf(id, "", 0)
        };
        node.stats = Some(stats);
        Some(node)
    }

    /// Parse one edge statement into `(parent_id, child_id)`
    fn parse_edge(&self, line: &str) -> Option<(String, String)> {
        let caps = self.edge_re.captures(line)?;
        Some((caps[1].to_string(), caps[2].to_string()))
    }

    /// First decimal run in `text`, e.g. `0.667` out of `"gini = 0.667"`
    fn decimal(&self, text: &str) -> Option<f64> {
        self.decimal_re.find(text)?.as_str().parse().ok()
    }

    /// First integer run in `text`, e.g. `100` out of `"samples = 100.0%"`
    fn integer(&self, text: &str) -> Option<u64> {
        self.integer_re.find(text)?.as_str().parse().ok()
    }
}

/// Parse a bracketed per-class count list, truncating decimals to integers
fn value_list(text: &str) -> Option<Vec<i64>> {
    let inner = text.split_once('[')?.1;
    let inner = inner.split_once(']').map_or(inner, |(body, _)| body);

    let mut values = Vec::new();
    for part in inner.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        values.push(part.parse::<f64>().ok()? as i64);
    }
    Some(values)
}

/// Extract the class name from a `class = name` annotation
fn class_annotation(text: &str) -> Option<String> {
    text.split_once('=')
        .map(|(_, name)| name.trim().to_string())
}

/// Attach every edge's child to its parent in discovery order
///
/// The first edge seen for a parent fills the right slot and the second
/// fills the left, matching the source dumps; a third edge is a
/// structural error, as is an edge naming an undeclared node.
fn link_edges(nodes: &mut [Node], edges: &[(String, String)]) -> Result<(), ParseError> {
    let positions: HashMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id.clone(), index))
        .collect();

    for (parent_id, child_id) in edges {
        let &parent_index = positions.get(parent_id).ok_or_else(|| {
            ParseError::StructuralViolation(format!(
                "edge references undeclared node {}",
                parent_id
            ))
        })?;
        let &child_index = positions.get(child_id).ok_or_else(|| {
            ParseError::StructuralViolation(format!(
                "edge references undeclared node {}",
                child_id
            ))
        })?;

        let parent = &mut nodes[parent_index];
        if parent.right_child.is_none() {
            parent.right_child = Some(child_index);
        } else if parent.left_child.is_none() {
            parent.left_child = Some(child_index);
        } else {
            return Err(ParseError::StructuralViolation(format!(
                "node {} already has two children",
                parent.id
            )));
        }
    }
    Ok(())
}

/// Assign depths transitively from the root (first declared node)
fn assign_depths(nodes: &mut [Node]) {
    let mut visited = vec![false; nodes.len()];
    let mut stack = vec![(0usize, 0usize)];

    while let Some((index, depth)) = stack.pop() {
        if visited[index] {
            continue;
        }
        visited[index] = true;
        nodes[index].depth = depth;
        if let Some(left) = nodes[index].left_child {
            stack.push((left, depth + 1));
        }
        if let Some(right) = nodes[index].right_child {
            stack.push((right, depth + 1));
        }
    }
}
