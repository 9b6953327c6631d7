use log::debug;

use crate::node::Node;
use crate::utils::ParseError;

/// Neutral color given to records that arrive without one
const DEFAULT_COLOR: &str = "White";

/// Parse a structured JSON document into the canonical node list
///
/// The document is an ordered array of node records with fixed,
/// case-sensitive field names. Unknown fields are ignored; missing
/// required fields or undecodable JSON are malformed-record errors, and
/// inconsistent child indices or depths are structural errors.
pub fn parse(content: &str) -> Result<Vec<Node>, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::InputEmpty(
            "no document content to parse for JSON format".to_string(),
        ));
    }

    let mut nodes: Vec<Node> = serde_json::from_str(content)
        .map_err(|e| ParseError::MalformedRecord(format!("failed to decode document: {}", e)))?;

    if nodes.is_empty() {
        return Err(ParseError::InputEmpty(
            "JSON document contains no node records".to_string(),
        ));
    }

    validate(&nodes)?;

    for node in &mut nodes {
        if node.color_name.is_none() {
            node.color_name = Some(DEFAULT_COLOR.to_string());
        }
    }

    debug!("parsed {} JSON node records", nodes.len());
    Ok(nodes)
}

/// Check child indices and depths for mutual consistency
fn validate(nodes: &[Node]) -> Result<(), ParseError> {
    for (index, node) in nodes.iter().enumerate() {
        for child in [node.left_child, node.right_child].into_iter().flatten() {
            if child >= nodes.len() {
                return Err(ParseError::StructuralViolation(format!(
                    "node {} references child index {} beyond document end ({} records)",
                    node.id,
                    child,
                    nodes.len()
                )));
            }
            if child == index {
                return Err(ParseError::StructuralViolation(format!(
                    "node {} references itself as a child",
                    node.id
                )));
            }
            if nodes[child].depth != node.depth + 1 {
                return Err(ParseError::StructuralViolation(format!(
                    "node {} at depth {} has child {} at depth {}",
                    node.id, node.depth, nodes[child].id, nodes[child].depth
                )));
            }
        }
    }
    Ok(())
}
