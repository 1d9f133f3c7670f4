use crate::types::{Annotation, NodeId};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum BuildError {
    DuplicateId(NodeId),
    CloseWithoutOpen,
    UnclosedNode(NodeId),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate node identity: {id}"),
            Self::CloseWithoutOpen => f.write_str("close without a matching open"),
            Self::UnclosedNode(id) => write!(f, "node left open at finish: {id}"),
        }
    }
}

impl std::error::Error for BuildError {}

/// Materialized annotation tree keyed by node identity.
///
/// Built once from the rendered document; never mutated afterwards. The
/// parent relation is the document nesting of kind-bearing elements.
#[derive(Debug, Default)]
pub struct Document {
    nodes: HashMap<NodeId, NodeRecord>,
    roots: Vec<NodeId>,
}

#[derive(Debug)]
struct NodeRecord {
    annotation: Annotation,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Document {
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &NodeId) -> Option<&Annotation> {
        self.nodes.get(id).map(|r| &r.annotation)
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.nodes.get(id).and_then(|r| r.parent.as_ref())
    }

    pub fn children_of(&self, id: &NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|r| r.children.as_slice()).unwrap_or(&[])
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Ancestor chain from `id` (nearest first) up to its root.
    ///
    /// Empty when `id` is not in the document. The chain is finite by
    /// construction: the builder only nests, so parent links cannot cycle.
    pub fn ancestor_chain(&self, id: &NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.nodes.get_key_value(id).map(|(k, _)| k);
        while let Some(node) = current {
            chain.push(node.clone());
            current = self.parent_of(node);
        }
        chain
    }
}

/// Builds a [`Document`] by mirroring the nesting of the rendered document:
/// one `open` per kind-bearing element, one `close` when it ends.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: Document,
    open: Vec<NodeId>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(
        &mut self,
        id: impl Into<NodeId>,
        annotation: Annotation,
    ) -> Result<(), BuildError> {
        let id = id.into();
        if self.doc.nodes.contains_key(&id) {
            return Err(BuildError::DuplicateId(id));
        }
        let parent = self.open.last().cloned();
        match &parent {
            Some(p) => {
                // Open ids always come from doc.nodes, so the parent exists.
                if let Some(r) = self.doc.nodes.get_mut(p) {
                    r.children.push(id.clone());
                }
            }
            None => self.doc.roots.push(id.clone()),
        }
        self.doc.nodes.insert(
            id.clone(),
            NodeRecord {
                annotation,
                parent,
                children: Vec::new(),
            },
        );
        self.open.push(id);
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), BuildError> {
        self.open.pop().map(|_| ()).ok_or(BuildError::CloseWithoutOpen)
    }

    /// `open` followed immediately by `close`, for childless nodes.
    pub fn leaf(
        &mut self,
        id: impl Into<NodeId>,
        annotation: Annotation,
    ) -> Result<(), BuildError> {
        self.open(id, annotation)?;
        self.close()
    }

    pub fn finish(mut self) -> Result<Document, BuildError> {
        if let Some(id) = self.open.pop() {
            return Err(BuildError::UnclosedNode(id));
        }
        log::trace!(
            target: "treescope.doc",
            "document built: {} nodes, {} roots",
            self.doc.nodes.len(),
            self.doc.roots.len()
        );
        Ok(self.doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_doc() -> Document {
        let mut b = Document::builder();
        b.open("root", Annotation::new("Module", 1, 1)).unwrap();
        b.open("node_1", Annotation::new("Class", 3, 5)).unwrap();
        b.leaf("node_2", Annotation::new("Method", 4, 9).with_reference("node_1"))
            .unwrap();
        b.close().unwrap();
        b.close().unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn parent_links_follow_nesting() {
        let doc = small_doc();
        assert_eq!(doc.parent_of(&NodeId::from("node_2")), Some(&NodeId::from("node_1")));
        assert_eq!(doc.parent_of(&NodeId::from("node_1")), Some(&NodeId::from("root")));
        assert_eq!(doc.parent_of(&NodeId::from("root")), None);
        assert_eq!(doc.roots(), &[NodeId::from("root")]);
    }

    #[test]
    fn ancestor_chain_starts_at_node_and_ends_at_root() {
        let doc = small_doc();
        let chain = doc.ancestor_chain(&NodeId::from("node_2"));
        assert_eq!(
            chain,
            vec![
                NodeId::from("node_2"),
                NodeId::from("node_1"),
                NodeId::from("root"),
            ]
        );

        // A root's chain is just the root itself.
        assert_eq!(doc.ancestor_chain(&NodeId::from("root")), vec![NodeId::from("root")]);
    }

    #[test]
    fn ancestor_chain_of_unknown_id_is_empty() {
        let doc = small_doc();
        assert!(doc.ancestor_chain(&NodeId::from("nope")).is_empty());
    }

    #[test]
    fn children_keep_document_order() {
        let mut b = Document::builder();
        b.open("root", Annotation::new("Module", 1, 1)).unwrap();
        b.leaf("b", Annotation::new("Use", 2, 1)).unwrap();
        b.leaf("a", Annotation::new("Use", 3, 1)).unwrap();
        b.close().unwrap();
        let doc = b.finish().unwrap();
        assert_eq!(
            doc.children_of(&NodeId::from("root")),
            &[NodeId::from("b"), NodeId::from("a")]
        );
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut b = Document::builder();
        b.open("root", Annotation::new("Module", 1, 1)).unwrap();
        let err = b.open("root", Annotation::new("Class", 2, 1)).unwrap_err();
        assert_eq!(err, BuildError::DuplicateId(NodeId::from("root")));
    }

    #[test]
    fn close_without_open_is_rejected() {
        let mut b = Document::builder();
        assert_eq!(b.close().unwrap_err(), BuildError::CloseWithoutOpen);
    }

    #[test]
    fn finish_with_open_node_is_rejected() {
        let mut b = Document::builder();
        b.open("root", Annotation::new("Module", 1, 1)).unwrap();
        let err = b.finish().unwrap_err();
        assert_eq!(err, BuildError::UnclosedNode(NodeId::from("root")));
    }

    #[test]
    fn lookups_on_missing_ids_are_none() {
        let doc = small_doc();
        let missing = NodeId::from("node_99");
        assert!(!doc.contains(&missing));
        assert!(doc.get(&missing).is_none());
        assert!(doc.parent_of(&missing).is_none());
        assert!(doc.children_of(&missing).is_empty());
    }
}
