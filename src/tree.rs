//! Mutable parse-time tree.
//!
//! The parser grows a [`PathTree`] while it reads a document, then freezes it
//! once into a [`TomlTable`]. Nodes live in an arena and refer to each other by
//! index; children are kept in an ordered map so declaration order survives.
//!
//! The tree also enforces TOML's redefinition rules:
//!
//! - a key or header may not land on an occupied path,
//! - `[a]` may only reopen a table that was created implicitly as the
//!   intermediate of an earlier header,
//! - dotted keys may only extend tables that dotted keys created,
//! - `[[a]]` appends to the array of tables at `a`, and every header below `a`
//!   addresses the element opened last.

use crate::{Error, Result, TomlElement, TomlTable};
use indexmap::IndexMap;
use log::trace;
use std::collections::HashMap;

type NodeId = usize;

const ROOT: NodeId = 0;

/// How a table node came to exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    /// Intermediate segment of a `[header]` path.
    Implicit,
    /// Named by a `[header]` or opened by `[[header]]`.
    Header,
    /// Intermediate segment of a dotted key.
    Dotted,
}

#[derive(Debug)]
enum Node {
    Table {
        children: IndexMap<String, NodeId>,
        origin: Origin,
    },
    Array {
        elements: Vec<NodeId>,
    },
    Value(TomlElement),
}

impl Node {
    fn table(origin: Origin) -> Self {
        Node::Table {
            children: IndexMap::new(),
            origin,
        }
    }
}

/// Single-use tree builder for one document or one inline table.
pub struct PathTree {
    nodes: Vec<Node>,
    /// Index of the open element of each array of tables, keyed by its path.
    array_index: HashMap<Vec<String>, usize>,
    current: NodeId,
    current_path: Vec<String>,
}

impl PathTree {
    pub fn new() -> Self {
        PathTree {
            nodes: vec![Node::table(Origin::Header)],
            array_index: HashMap::new(),
            current: ROOT,
            current_path: Vec::new(),
        }
    }

    fn child(&self, table: NodeId, key: &str) -> Option<NodeId> {
        match &self.nodes[table] {
            Node::Table { children, .. } => children.get(key).copied(),
            _ => None,
        }
    }

    fn add_child(&mut self, table: NodeId, key: &str, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        if let Node::Table { children, .. } = &mut self.nodes[table] {
            children.insert(key.to_string(), id);
        }
        id
    }

    /// The element of the array at `path` that headers currently address.
    fn open_element(&self, path: &[String], array: NodeId) -> Result<NodeId> {
        match &self.nodes[array] {
            Node::Array { elements } if !elements.is_empty() => {
                let index = self
                    .array_index
                    .get(path)
                    .copied()
                    .unwrap_or(elements.len() - 1);
                elements
                    .get(index)
                    .copied()
                    .ok_or_else(|| Error::conflict(path))
            }
            _ => Err(Error::conflict(path)),
        }
    }

    /// Inserts `key = value` under the current table.
    pub fn insert_value(&mut self, key: &[String], value: TomlElement) -> Result<()> {
        let Some((last, intermediate)) = key.split_last() else {
            return Ok(());
        };
        let mut table = self.current;
        let mut path = self.current_path.clone();

        for segment in intermediate {
            path.push(segment.clone());
            table = match self.child(table, segment) {
                None => self.add_child(table, segment, Node::table(Origin::Dotted)),
                Some(id) => match &self.nodes[id] {
                    Node::Table {
                        origin: Origin::Dotted,
                        ..
                    } => id,
                    _ => return Err(Error::conflict(&path)),
                },
            };
        }

        path.push(last.clone());
        if self.child(table, last).is_some() {
            return Err(Error::conflict(&path));
        }
        self.add_child(table, last, Node::Value(value));
        Ok(())
    }

    /// Walks the intermediate segments of a header path, creating implicit tables.
    fn descend_header(&mut self, segments: &[String]) -> Result<(NodeId, Vec<String>)> {
        let mut table = ROOT;
        let mut path = Vec::with_capacity(segments.len() + 1);

        for segment in segments {
            path.push(segment.clone());
            table = match self.child(table, segment) {
                None => self.add_child(table, segment, Node::table(Origin::Implicit)),
                Some(id) => match &self.nodes[id] {
                    Node::Table { .. } => id,
                    Node::Array { .. } => self.open_element(&path, id)?,
                    Node::Value(_) => return Err(Error::conflict(&path)),
                },
            };
        }
        Ok((table, path))
    }

    /// Handles a `[path]` header and makes that table current.
    pub fn open_table(&mut self, header: &[String]) -> Result<()> {
        let Some((last, intermediate)) = header.split_last() else {
            return Ok(());
        };
        let (parent, mut path) = self.descend_header(intermediate)?;
        path.push(last.clone());
        trace!("Opening table [{}]", path.join("."));

        let id = match self.child(parent, last) {
            None => self.add_child(parent, last, Node::table(Origin::Header)),
            Some(id) => match &mut self.nodes[id] {
                Node::Table { origin, .. } if *origin == Origin::Implicit => {
                    *origin = Origin::Header;
                    id
                }
                _ => return Err(Error::conflict(&path)),
            },
        };

        self.current = id;
        self.current_path = path;
        Ok(())
    }

    /// Handles a `[[path]]` header: appends a fresh table and makes it current.
    pub fn open_array_element(&mut self, header: &[String]) -> Result<()> {
        let Some((last, intermediate)) = header.split_last() else {
            return Ok(());
        };
        let (parent, mut path) = self.descend_header(intermediate)?;
        path.push(last.clone());

        let array = match self.child(parent, last) {
            None => self.add_child(parent, last, Node::Array { elements: Vec::new() }),
            Some(id) if matches!(self.nodes[id], Node::Array { .. }) => id,
            Some(_) => return Err(Error::conflict(&path)),
        };

        let element = self.nodes.len();
        self.nodes.push(Node::table(Origin::Header));
        let index = match &mut self.nodes[array] {
            Node::Array { elements } => {
                elements.push(element);
                elements.len() - 1
            }
            _ => return Err(Error::conflict(&path)),
        };

        // Paths below this one now resolve inside the new element.
        self.array_index
            .retain(|tracked, _| !(tracked.len() > path.len() && tracked.starts_with(&path)));
        trace!("Opening [[{}]] element {}", path.join("."), index);
        self.array_index.insert(path.clone(), index);

        self.current = element;
        self.current_path = path;
        Ok(())
    }

    /// Freezes the tree into the document model, consuming it.
    pub fn materialize(mut self) -> TomlTable {
        match self.build(ROOT) {
            TomlElement::Table(table) => table,
            _ => TomlTable::new(),
        }
    }

    fn build(&mut self, id: NodeId) -> TomlElement {
        match std::mem::replace(&mut self.nodes[id], Node::Value(TomlElement::Null)) {
            Node::Table { children, .. } => TomlElement::Table(
                children
                    .into_iter()
                    .map(|(key, child)| (key, self.build(child)))
                    .collect(),
            ),
            Node::Array { elements } => TomlElement::Array(
                elements
                    .into_iter()
                    .map(|element| self.build(element))
                    .collect(),
            ),
            Node::Value(value) => value,
        }
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dotted_keys_build_nested_tables() {
        let mut tree = PathTree::new();
        tree.insert_value(&path(&["a", "b"]), 1.into()).unwrap();
        tree.insert_value(&path(&["a", "c"]), 2.into()).unwrap();
        let table = tree.materialize();

        let a = table.get("a").and_then(TomlElement::as_table).unwrap();
        let keys: Vec<_> = a.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_duplicate_value_conflicts() {
        let mut tree = PathTree::new();
        tree.insert_value(&path(&["a"]), 1.into()).unwrap();
        assert_eq!(
            tree.insert_value(&path(&["a"]), 2.into()),
            Err(Error::ConflictEntry {
                path: "a".to_string()
            })
        );
    }

    #[test]
    fn test_value_blocks_header() {
        let mut tree = PathTree::new();
        tree.insert_value(&path(&["a"]), 1.into()).unwrap();
        assert!(tree.open_table(&path(&["a", "b"])).is_err());
    }

    #[test]
    fn test_implicit_table_can_be_opened_once() {
        let mut tree = PathTree::new();
        tree.open_table(&path(&["a", "b"])).unwrap();
        tree.open_table(&path(&["a"])).unwrap();
        assert!(tree.open_table(&path(&["a"])).is_err());
    }

    #[test]
    fn test_array_elements_in_order() {
        let mut tree = PathTree::new();
        tree.open_array_element(&path(&["a"])).unwrap();
        tree.insert_value(&path(&["x"]), 1.into()).unwrap();
        tree.open_array_element(&path(&["a"])).unwrap();
        tree.insert_value(&path(&["x"]), 2.into()).unwrap();
        let table = tree.materialize();

        let a = table.get("a").and_then(TomlElement::as_array).unwrap();
        let xs: Vec<_> = a
            .iter()
            .map(|e| e.as_table().and_then(|t| t.get("x")).and_then(TomlElement::as_integer))
            .collect();
        assert_eq!(xs, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_nested_array_restarts_in_new_parent_element() {
        let mut tree = PathTree::new();
        tree.open_array_element(&path(&["a"])).unwrap();
        tree.open_array_element(&path(&["a", "b"])).unwrap();
        tree.open_array_element(&path(&["a", "b"])).unwrap();
        tree.open_array_element(&path(&["a"])).unwrap();
        tree.open_array_element(&path(&["a", "b"])).unwrap();
        let table = tree.materialize();

        let a = table.get("a").and_then(TomlElement::as_array).unwrap();
        let lens: Vec<_> = a
            .iter()
            .map(|e| {
                e.as_table()
                    .and_then(|t| t.get("b"))
                    .and_then(TomlElement::as_array)
                    .map(|b| b.len())
            })
            .collect();
        assert_eq!(lens, vec![Some(2), Some(1)]);
    }

    #[test]
    fn test_table_and_array_cannot_share_path() {
        let mut tree = PathTree::new();
        tree.open_array_element(&path(&["a"])).unwrap();
        assert!(tree.open_table(&path(&["a"])).is_err());

        let mut tree = PathTree::new();
        tree.open_table(&path(&["a"])).unwrap();
        assert!(tree.open_array_element(&path(&["a"])).is_err());
    }

    #[test]
    fn test_dotted_keys_cannot_extend_header_table() {
        let mut tree = PathTree::new();
        tree.open_table(&path(&["a", "b"])).unwrap();
        tree.open_table(&path(&["x"])).unwrap();
        tree.current = ROOT;
        tree.current_path.clear();
        assert!(tree.insert_value(&path(&["a", "b", "c"]), 1.into()).is_err());
    }
}
