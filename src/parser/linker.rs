use std::collections::HashMap;

use crate::node::Node;
use crate::utils::ParseError;

/// Level-indexed linker that attaches nodes produced in document order
///
/// Tracks the most recently added node at every depth. A new node at depth
/// `d` becomes a child of the current node at depth `d - 1`, filling the
/// left slot before the right one. The pending edge condition is recorded
/// on the parent only when the left slot is taken.
///
/// One linker instance serves exactly one parse pass; state is never
/// shared between passes.
#[derive(Debug, Default)]
pub struct TreeLinker {
    level_index: HashMap<usize, usize>,
}

impl TreeLinker {
    /// Create a linker with empty level state
    pub fn new() -> Self {
        Self {
            level_index: HashMap::new(),
        }
    }

    /// Append `node` to the list and link it under the current node one
    /// level up
    ///
    /// # Arguments
    /// * `nodes` - The node list being built, in arrival order
    /// * `node` - The finalized node to place
    /// * `condition` - Edge condition leading into this node, if any
    ///
    /// # Returns
    /// * `Ok(index)` of the placed node
    /// * `Err(ParseError::StructuralViolation)` if the parent already has
    ///   two children
    pub fn attach(
        &mut self,
        nodes: &mut Vec<Node>,
        node: Node,
        condition: Option<String>,
    ) -> Result<usize, ParseError> {
        let depth = node.depth;
        nodes.push(node);
        let index = nodes.len() - 1;

        if depth > 0 {
            if let Some(&parent_index) = self.level_index.get(&(depth - 1)) {
                let parent = &mut nodes[parent_index];
                if parent.left_child.is_none() {
                    parent.left_child = Some(index);
                    parent.test_info = condition;
                } else if parent.right_child.is_none() {
                    parent.right_child = Some(index);
                } else {
                    return Err(ParseError::StructuralViolation(format!(
                        "node {} already has two children",
                        parent.id
                    )));
                }
            }
        }

        self.level_index.insert(depth, index);
        Ok(index)
    }
}
