//! Node tree
//!
//!     The tree is an arena: [Tree] owns one record per node, and nodes refer to their
//!     parent and children by [NodeId]. Navigation goes through [Node], a copyable
//!     handle borrowing the tree. The root is synthetic, has an empty name and holds
//!     the top-level declarations of the source.
//!
//!     A tree is built from a [SemanticMapping] and converts back to an equal one,
//!     with every section in its original order.

use super::tag::Tag;
use crate::taxonomy::building::SemanticMapping;
use indexmap::IndexMap;
use std::fmt;

/// Index of a node inside its [Tree]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    tags: Vec<Tag>,
    aliases: Vec<String>,
    meta: IndexMap<String, String>,
    comment: Option<String>,
}

/// A taxonomy as a navigable tree of named nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    const ROOT: NodeId = NodeId(0);

    /// Build the tree top-down, keeping the declaration order of the mapping.
    pub fn from_mapping(mapping: &SemanticMapping) -> Self {
        let mut tree = Tree { nodes: Vec::new() };
        tree.insert(String::new(), None, mapping);
        tracing::debug!(nodes = tree.nodes.len(), "built taxonomy tree");
        tree
    }

    fn insert(
        &mut self,
        name: String,
        parent: Option<NodeId>,
        mapping: &SemanticMapping,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name,
            parent,
            children: Vec::with_capacity(mapping.children.len()),
            tags: mapping
                .tags
                .iter()
                .map(|(name, spec)| Tag::from_spec(name.as_str(), spec))
                .collect(),
            aliases: mapping.aliases.clone(),
            meta: mapping.meta.clone(),
            comment: mapping.doc.clone(),
        });

        for (child_name, child) in &mapping.children {
            let child_id = self.insert(child_name.clone(), Some(id), child);
            self.nodes[id.0].children.push(child_id);
        }

        id
    }

    pub fn to_mapping(&self) -> SemanticMapping {
        self.root().to_mapping()
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: Self::ROOT,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Every node in pre-order, starting with the root.
    pub fn iter(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        std::iter::once(self.root()).chain(self.root().descendants())
    }

    /// Follow a path of child names from the root.
    pub fn find(&self, path: &[&str]) -> Option<Node<'_>> {
        path.iter()
            .try_fold(self.root(), |node, name| node.child(name))
    }

    /// The first node in pre-order whose name or one of whose aliases equals `name`.
    pub fn resolve(&self, name: &str) -> Option<Node<'_>> {
        self.root().descendants().find(|node| {
            node.name() == name || node.aliases().iter().any(|alias| alias == name)
        })
    }

    /// Tag completion candidates of every node, in pre-order.
    pub fn match_tags<'a>(&'a self, query: &str) -> Vec<(Node<'a>, String)> {
        self.iter()
            .flat_map(|node| node.match_tags(query).map(move |hit| (node, hit)))
            .collect()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::from_mapping(&SemanticMapping::default())
    }
}

/// Borrowed handle on one node of a [Tree]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    fn at(&self, id: NodeId) -> Node<'a> {
        Node {
            tree: self.tree,
            id,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    pub fn name(&self) -> &'a str {
        &self.data().name
    }

    pub fn comment(&self) -> Option<&'a str> {
        self.data().comment.as_deref()
    }

    pub fn tags(&self) -> &'a [Tag] {
        &self.data().tags
    }

    pub fn tag(&self, name: &str) -> Option<&'a Tag> {
        self.tags().iter().find(|tag| tag.name() == name)
    }

    pub fn aliases(&self) -> &'a [String] {
        &self.data().aliases
    }

    pub fn meta(&self) -> &'a IndexMap<String, String> {
        &self.data().meta
    }

    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| self.at(id))
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    pub fn child(&self, name: &str) -> Option<Node<'a>> {
        self.children().find(|child| child.name() == name)
    }

    /// Parent, grandparent and so on up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Every node below this one in pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let tree = self.tree;
        let mut stack: Vec<NodeId> = self.data().children.iter().rev().copied().collect();

        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(tree.nodes[id.0].children.iter().rev().copied());
            Some(Node { tree, id })
        })
    }

    /// Names from the top-level node down to this one; empty for the root.
    pub fn path(&self) -> Vec<&'a str> {
        let mut path: Vec<&'a str> = std::iter::once(*self)
            .chain(self.ancestors())
            .filter(|node| !node.is_root())
            .map(|node| node.name())
            .collect();
        path.reverse();
        path
    }

    /// Number of ancestors.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Completion candidates of every tag of this node, in declaration order.
    pub fn match_tags(&self, query: &str) -> impl Iterator<Item = String> + 'a {
        let query = query.to_string();
        self.tags().iter().flat_map(move |tag| tag.matches(&query))
    }

    pub fn to_mapping(&self) -> SemanticMapping {
        let data = self.data();
        SemanticMapping {
            doc: data.comment.clone(),
            children: self
                .children()
                .map(|child| (child.name().to_string(), child.to_mapping()))
                .collect(),
            tags: data
                .tags
                .iter()
                .map(|tag| (tag.name().to_string(), tag.to_spec()))
                .collect(),
            aliases: data.aliases.clone(),
            meta: data.meta.clone(),
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("path", &self.path())
            .finish()
    }
}
