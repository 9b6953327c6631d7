use std::fs;
use std::path::Path;

use log::info;

use crate::node::Node;

/// Serialize the node list to a pretty-printed structured document
///
/// Every §-fixed record field is written, including explicit nulls, so a
/// document parses back into an equivalent node list.
pub fn serialize(nodes: &[Node]) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

/// Fill in a display label for every node that still lacks one
///
/// Graph-description nodes get their statistic summary; any other node
/// falls back to its edge-condition text. Returns the number of labels
/// synthesized.
pub fn backfill_labels(nodes: &mut [Node]) -> usize {
    let mut filled = 0;
    for node in nodes.iter_mut() {
        if !node.label.is_empty() {
            continue;
        }
        if let Some(stats) = &node.stats {
            node.label = stats.summary();
            filled += 1;
        } else if let Some(test) = &node.test_info {
            node.label = test.clone();
            filled += 1;
        }
    }
    filled
}

/// Backfill labels and write the structured document to `path`
pub fn write_json<P: AsRef<Path>>(nodes: &mut [Node], path: P) -> crate::Result<()> {
    let filled = backfill_labels(nodes);
    let json = serialize(nodes)?;
    fs::write(path.as_ref(), json)?;
    info!(
        "exported {} nodes to {} ({} labels synthesized)",
        nodes.len(),
        path.as_ref().display(),
        filled
    );
    Ok(())
}
