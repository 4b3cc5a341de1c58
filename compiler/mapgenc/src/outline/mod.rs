//! Document outline.
//!
//! Lists every node of a JSON document under the path a mapping would use to
//! address it: `root`, `root.user`, `root.user.name`, `root.items.0`, ...

use serde_json::Value;

use mapgen_ir::ROOT_MARKER;

/// Shape of a document node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    Scalar,
}

/// One node of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPath {
    pub path: String,
    pub kind: NodeKind,
    /// Number of direct children; zero for scalars.
    pub children: usize,
}

impl DocumentPath {
    /// A node with nothing below it, i.e. a mappable value.
    pub fn is_leaf(&self) -> bool {
        self.children == 0
    }
}

/// Collect all node paths of `document` in pre-order.
///
/// Object members keep their document order; array elements use their index
/// as the segment.
pub fn collect_paths(document: &Value) -> Vec<DocumentPath> {
    let mut out = Vec::new();
    let mut path = String::from(ROOT_MARKER);
    visit(document, &mut path, &mut out);
    out
}

fn visit(value: &Value, path: &mut String, out: &mut Vec<DocumentPath>) {
    let (kind, children) = match value {
        Value::Object(map) => (NodeKind::Object, map.len()),
        Value::Array(items) => (NodeKind::Array, items.len()),
        _ => (NodeKind::Scalar, 0),
    };
    out.push(DocumentPath {
        path: path.clone(),
        kind,
        children,
    });

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                descend(child, key, path, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                descend(child, &index.to_string(), path, out);
            }
        }
        _ => {}
    }
}

fn descend(child: &Value, segment: &str, path: &mut String, out: &mut Vec<DocumentPath>) {
    let len = path.len();
    path.push('.');
    path.push_str(segment);
    visit(child, path, out);
    path.truncate(len);
}
