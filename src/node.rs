use serde::{Deserialize, Serialize};

/// A single node of the canonical decision tree
///
/// Nodes are owned by position in one ordered list; children are referenced
/// by index into that same list, never by separate identity. Structural
/// fields (depth, child indices) are fixed once a parse pass completes;
/// `label` and `color_name` stay editable for interactive relabeling and
/// recoloring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "color")]
    pub color_name: Option<String>,
    pub is_leaf: bool,
    pub depth: usize,
    pub left_child: Option<usize>,
    pub right_child: Option<usize>,
    pub test_info: Option<String>,
    /// Extra statistical payload carried only by graph-description nodes
    #[serde(skip)]
    pub stats: Option<SplitStats>,
}

impl Node {
    /// Create a new internal (decision) node
    pub fn internal(id: String, label: impl Into<String>, depth: usize) -> Self {
        Self {
            id,
            label: label.into(),
            color_name: None,
            is_leaf: false,
            depth,
            left_child: None,
            right_child: None,
            test_info: None,
            stats: None,
        }
    }

    /// Create a new leaf (class) node
    pub fn leaf(id: String, label: impl Into<String>, depth: usize) -> Self {
        let mut node = Self::internal(id, label, depth);
        node.is_leaf = true;
        node
    }

    /// Number of children currently attached
    pub fn child_count(&self) -> usize {
        self.left_child.iter().count() + self.right_child.iter().count()
    }
}

/// Split statistics parsed from a graph-description node declaration
///
/// Internal nodes carry the split test text; leaves carry only the
/// impurity, sample count, per-class counts and class annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitStats {
    pub test: Option<String>,
    pub impurity: f64,
    pub samples: u64,
    pub value: Vec<i64>,
    pub class_name: String,
}

impl SplitStats {
    /// Render the multi-line statistic summary used as a display label
    pub fn summary(&self) -> String {
        let values = self
            .value
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let body = format!(
            "gini = {}\nsamples = {}\nvalue = [{}]\nclass = {}",
            self.impurity, self.samples, values, self.class_name
        );
        match &self.test {
            Some(test) => format!("{}\n{}", test, body),
            None => body,
        }
    }
}
