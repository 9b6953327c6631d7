use log::debug;

use crate::node::Node;
use crate::parser::linker::TreeLinker;
use crate::parser::ParseContext;
use crate::utils::{condition_suffix, feature_name, strip_operator, ParseError};

/// Parse an indented-text (MLPDT) decision tree dump
///
/// Each line is one node. Depth is the number of `'|'` markers in the raw
/// line, shifted by one because a synthetic root is prepended at depth 0.
/// A line containing `':'` is a leaf whose label follows the colon;
/// everything before it is the edge condition into that leaf. Any other
/// line is an internal feature node. Blank lines are skipped.
///
/// The format writes each split condition on the child line describing the
/// outcome, so the feature tested *at* a node arrives one line late;
/// `hoist_label` moves it up onto the ancestor after every placement.
pub fn parse(ctx: &mut ParseContext, lines: &[&str]) -> Result<Vec<Node>, ParseError> {
    if lines.is_empty() {
        return Err(ParseError::InputEmpty(
            "no lines to parse for MLPDT format".to_string(),
        ));
    }

    let mut nodes = Vec::new();
    let mut linker = TreeLinker::new();

    let root = Node::internal(ctx.next_id(), "Root", 0);
    linker.attach(&mut nodes, root, None)?;

    for line in lines {
        if line.trim().is_empty() {
            debug!("skipping blank line");
            continue;
        }

        let depth = line.chars().filter(|&c| c == '|').count() + 1;
        let cleaned = line.replace('|', " ");
        let cleaned = cleaned.trim();

        if let Some((condition_part, label_part)) = cleaned.split_once(':') {
            let condition_part = condition_part.trim();
            let test = condition_suffix(condition_part);
            let leaf = Node::leaf(ctx.next_id(), label_part.trim(), depth);
            linker.attach(&mut nodes, leaf, test)?;
            hoist_label(condition_part, &mut nodes);
        } else {
            let test = condition_suffix(cleaned);
            let node = Node::internal(ctx.next_id(), feature_name(cleaned), depth);
            linker.attach(&mut nodes, node, test)?;
            hoist_label(feature_name(cleaned), &mut nodes);
        }
    }

    debug!("parsed {} MLPDT nodes", nodes.len());
    Ok(nodes)
}

/// Hoist a feature name onto the nearest eligible ancestor label
///
/// The dump names the tested feature on the outcome lines below a node,
/// so after placing a node the (operator-stripped) text is written onto
/// the node two positions back in arrival order - unless that label is
/// already a parenthesized leaf label, in which case the node three
/// positions back is used, and left alone too if also parenthesized.
fn hoist_label(text: &str, nodes: &mut [Node]) {
    let len = nodes.len();
    if len < 2 {
        return;
    }
    if !nodes[len - 2].label.contains('(') {
        nodes[len - 2].label = strip_operator(text).to_string();
    } else {
        if len < 3 || nodes[len - 3].label.contains('(') {
            return;
        }
        nodes[len - 3].label = strip_operator(text).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_lines(lines: &[&str]) -> Result<Vec<Node>, ParseError> {
        let mut ctx = ParseContext::new();
        parse(&mut ctx, lines)
    }

    #[test]
    fn test_parse_small_tree() {
        let lines = [
            "x11 <= -0.01",
            "|  x9 <= -0.02",
            "|  |  x8 <= -0.04 : 10 (c11) (500/4)",
        ];
        let nodes = parse_lines(&lines).unwrap();

        assert_eq!(nodes.len(), 4);

        assert_eq!(nodes[0].label, "x11");
        assert_eq!(nodes[0].depth, 0);
        assert_eq!(nodes[0].test_info, Some("<= -0.01".to_string()));
        assert!(!nodes[0].is_leaf);

        assert_eq!(nodes[1].label, "x9");
        assert_eq!(nodes[1].depth, 1);
        assert_eq!(nodes[1].test_info, Some("<= -0.02".to_string()));

        assert_eq!(nodes[2].label, "x8");
        assert_eq!(nodes[2].depth, 2);

        assert_eq!(nodes[3].label, "10 (c11) (500/4)");
        assert_eq!(nodes[3].depth, 3);
        assert!(nodes[3].is_leaf);
        assert_eq!(nodes[3].test_info, None);
    }

    #[test]
    fn test_parse_full_tree() {
        let lines = [
            "x11 <= -0.0097629",
            "|  x9 <= -0.0182785",
            "|  |  x8 <= -0.0430855 : 10 (c11) (5271/44)",
            "|  |  x8 > -0.0430855",
            "|  |  |  x10 <= -0.022732 : 1 (c2) (4965/921)",
            "|  |  |  x10 > -0.022732 : 9 (c10) (4647/694)",
            "|  x9 > -0.0182785",
        ];
        let nodes = parse_lines(&lines).unwrap();

        // one node per line plus the synthetic root
        assert_eq!(nodes.len(), lines.len() + 1);

        assert_eq!(nodes[0].label, "x11");
        assert_eq!(nodes[0].depth, 0);
        assert_eq!(nodes[0].test_info, Some("<= -0.0097629".to_string()));

        assert_eq!(nodes[1].label, "x9");
        assert_eq!(nodes[1].depth, 1);
        assert_eq!(nodes[1].test_info, Some("<= -0.0182785".to_string()));

        assert_eq!(nodes[2].label, "x8");
        assert_eq!(nodes[2].depth, 2);

        assert_eq!(nodes[3].label, "10 (c11) (5271/44)");
        assert!(nodes[3].is_leaf);
        assert_eq!(nodes[3].depth, 3);
        assert_eq!(nodes[3].test_info, None);

        assert_eq!(nodes[4].label, "x10");
        assert_eq!(nodes[4].depth, 3);

        // branch structure around the x8 split
        assert_eq!(nodes[2].left_child, Some(3));
        assert_eq!(nodes[2].right_child, Some(4));
        assert_eq!(nodes[4].left_child, Some(5));
        assert_eq!(nodes[4].right_child, Some(6));
        assert_eq!(nodes[1].right_child, Some(7));
    }

    #[test]
    fn test_parse_depth_is_marker_count_plus_one() {
        let lines = ["a <= 1", "|  b <= 2", "|  |  c <= 3", "|  |  |  d <= 4 : X (c1) (1/0)"];
        let nodes = parse_lines(&lines).unwrap();

        assert_eq!(nodes[0].depth, 0);
        for (i, line) in lines.iter().enumerate() {
            let markers = line.chars().filter(|&c| c == '|').count();
            assert_eq!(nodes[i + 1].depth, markers + 1);
        }
    }

    #[test]
    fn test_parse_ids_assigned_in_order() {
        let lines = ["a <= 1", "|  b <= 2"];
        let nodes = parse_lines(&lines).unwrap();
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["Node1", "Node2", "Node3"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_lines(&[]).unwrap_err();
        assert!(matches!(err, ParseError::InputEmpty(_)));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let lines = ["a <= 1", "", "   ", "|  b <= 2"];
        let nodes = parse_lines(&lines).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2].label, "b");
    }

    #[test]
    fn test_hoist_skips_parenthesized_labels() {
        // two leaves in a row: both two-back and three-back targets carry
        // parenthesized labels, so the final hoist is a no-op
        let lines = [
            "a <= 1",
            "|  b <= 2 : 1 (c1) (10/0)",
            "|  b > 2 : 2 (c2) (8/1)",
            "a > 1 : 3 (c3) (5/0)",
        ];
        let nodes = parse_lines(&lines).unwrap();

        assert_eq!(nodes[2].label, "1 (c1) (10/0)");
        assert_eq!(nodes[3].label, "2 (c2) (8/1)");
        // hoist from the last leaf found only parenthesized ancestors
        assert_eq!(nodes[4].label, "3 (c3) (5/0)");
    }

    #[test]
    fn test_third_child_is_structural_violation() {
        let lines = ["a <= 1", "a > 1", "a = 1"];
        let err = parse_lines(&lines).unwrap_err();
        assert!(matches!(err, ParseError::StructuralViolation(_)));
    }
}
