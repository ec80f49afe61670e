//! Diagnostic rendering of a tree's shape.
//!
//! Nothing here affects lookups. The outline (`Display`), the `|`-joined segment
//! listing and the serde snapshot exist for debugging, test assertions and the
//! `xtask lookup` command.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::Node;
use super::tree::RadixTree;

/// An owned, serializable mirror of a node and its subtree.
///
/// Labels are decoded as lossy UTF-8, so a snapshot is for inspection only and
/// cannot be turned back into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Node label.
    pub label: String,
    /// Leaf flag.
    #[serde(default)]
    pub leaf: bool,
    /// Children in first-byte order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl From<&Node> for NodeSnapshot {
    fn from(node: &Node) -> Self {
        Self {
            label: String::from_utf8_lossy(node.label()).into_owned(),
            leaf: node.is_leaf(),
            children: node.children().iter().map(NodeSnapshot::from).collect(),
        }
    }
}

impl RadixTree {
    /// Captures the current shape as a [`NodeSnapshot`] rooted at the root node.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot::from(self.root())
    }

    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures from `serde_json`.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Lists every stored key with its node labels joined by `|`, in key order.
    ///
    /// `{"help", "helo"}` renders as `["hel|o", "hel|p"]`; the root's empty label is
    /// left out, so the empty key renders as `""`.
    pub fn segments(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        let mut path = Vec::new();
        collect_segments(self.root(), &mut path, &mut out);
        out
    }
}

fn collect_segments<'a>(node: &'a Node, path: &mut Vec<&'a [u8]>, out: &mut Vec<String>) {
    if node.is_leaf() {
        let parts: Vec<String> = path
            .iter()
            .map(|label| label.escape_ascii().to_string())
            .collect();
        out.push(parts.join("|"));
    }
    for child in node.children() {
        path.push(child.label());
        collect_segments(child, path, out);
        path.pop();
    }
}

fn write_outline(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    write!(f, "{:indent$}\"{}\"", "", node.label().escape_ascii(), indent = depth * 2)?;
    if node.is_leaf() {
        f.write_str(" *")?;
    }
    writeln!(f)?;
    for child in node.children() {
        write_outline(f, child, depth + 1)?;
    }
    Ok(())
}

/// One line per node, children indented two spaces below their parent, leaves
/// marked with a trailing `*`.
impl fmt::Display for RadixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outline(f, self.root(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline() {
        let tree = RadixTree::build(["help", "helo", "in", "input"]);
        let expected = "\
\"\"
  \"hel\"
    \"o\" *
    \"p\" *
  \"in\" *
    \"put\" *
";
        assert_eq!(tree.to_string(), expected);

        let with_empty = RadixTree::build(["", "in"]);
        assert_eq!(with_empty.to_string(), "\"\" *\n  \"in\" *\n");
    }

    #[test]
    fn test_outline_escapes_bytes() {
        let tree = RadixTree::build([&b"a\n\xff"[..]]);
        assert_eq!(tree.to_string(), "\"\"\n  \"a\\n\\xff\" *\n");
    }

    #[test]
    fn test_segments() {
        let tree = RadixTree::build(["help", "hel", "helo", "version", ""]);
        assert_eq!(tree.segments(), vec!["", "hel", "hel|o", "hel|p", "version"]);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let tree = RadixTree::build(["in", "input"]);
        let json = tree.to_json_pretty().unwrap();
        let parsed: NodeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tree.snapshot());
        assert_eq!(parsed.children[0].label, "in");
        assert!(parsed.children[0].leaf);
        assert_eq!(parsed.children[0].children[0].label, "put");
    }
}
