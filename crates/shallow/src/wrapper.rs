//! Wrapper - the queryable selection of nodes
//!
//! A wrapper is an ordered list of node IDs into a shared, immutable tree.
//! Every query returns a new wrapper; nothing is ever mutated in place.
//!
//! Multi-node selections are fine for `find`, `find_where` and `filter`,
//! which aggregate per node in selection order. Single-node accessors
//! (`children`, `child_at`, `instance`, `prop`, `node_type`, ...) reject
//! anything but exactly one node instead of silently picking one.

use ahash::AHashSet;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use vtree::{
    contains_run, structural_eq, utils, Element, Instance, NodeId, NodeType, Props, Traversal,
    Tree, TreeNode, TreeSerializer,
};

use crate::error::{QueryError, Result};
use crate::renderer::Renderer;
use crate::selector::{Query, Selector};

#[derive(Clone)]
pub struct Wrapper {
    tree: Arc<Tree>,
    nodes: Vec<NodeId>,
    renderer: Renderer,
}

/// Argument to [`Wrapper::contains`]: one node or a run of siblings
pub enum Needle<'a> {
    One(&'a Element),
    Many(&'a [Element]),
}

impl<'a> From<&'a Element> for Needle<'a> {
    fn from(element: &'a Element) -> Self {
        Needle::One(element)
    }
}

impl<'a> From<&'a [Element]> for Needle<'a> {
    fn from(elements: &'a [Element]) -> Self {
        Needle::Many(elements)
    }
}

impl<'a> From<&'a Vec<Element>> for Needle<'a> {
    fn from(elements: &'a Vec<Element>) -> Self {
        Needle::Many(elements)
    }
}

impl<'a, const N: usize> From<&'a [Element; N]> for Needle<'a> {
    fn from(elements: &'a [Element; N]) -> Self {
        Needle::Many(elements)
    }
}

impl Wrapper {
    /// Wrap the root of `tree`
    pub fn root(tree: Arc<Tree>, renderer: Renderer) -> Self {
        let nodes = tree.root_id().into_iter().collect();
        Self {
            tree,
            nodes,
            renderer,
        }
    }

    /// New wrapper over the same tree
    pub(crate) fn wrap(&self, nodes: Vec<NodeId>) -> Self {
        Self {
            tree: self.tree.clone(),
            nodes,
            renderer: self.renderer.clone(),
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn exists(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Node at `index` of the selection; empty wrapper when out of range
    pub fn at(&self, index: usize) -> Wrapper {
        self.wrap(self.nodes.get(index).copied().into_iter().collect())
    }

    pub fn first(&self) -> Wrapper {
        self.at(0)
    }

    pub fn last(&self) -> Wrapper {
        self.wrap(self.nodes.last().copied().into_iter().collect())
    }

    /// One single-node wrapper per selected node, in order
    pub fn iter(&self) -> impl Iterator<Item = Wrapper> + '_ {
        self.nodes.iter().map(|&id| self.wrap(vec![id]))
    }

    fn single(&self, operation: &'static str) -> Result<NodeId> {
        match self.nodes.as_slice() {
            [id] => Ok(*id),
            nodes => Err(QueryError::Arity {
                operation,
                count: nodes.len(),
            }),
        }
    }

    /// The single selected node
    pub fn node(&self) -> Result<&TreeNode> {
        let id = self.single("node")?;
        Ok(self.tree.get(id)?)
    }

    // ===== Traversal queries =====

    /// Every match in the shallow subtree of each selected node
    ///
    /// A selected node is part of its own subtree. Results keep traversal
    /// order per node and selection order across nodes; a node reached from
    /// two selected nodes appears once. Element literals never match here,
    /// use [`Wrapper::contains`] for those.
    pub fn find<'q>(&self, query: impl Into<Query<'q>>) -> Wrapper {
        let selector = Selector::compile(query.into(), self.renderer.registry());
        if selector.is_literal() {
            tracing::debug!("Element literal passed to find(), returning no matches");
            return self.wrap(Vec::new());
        }

        self.collect_where(|scope, id| selector.matches(scope, id))
    }

    /// Like [`Wrapper::find`], but calls `predicate` on every visited node
    ///
    /// Calls happen in depth-first pre-order, once per visit, so side
    /// effects observe document order.
    pub fn find_where<F>(&self, mut predicate: F) -> Wrapper
    where
        F: FnMut(&Wrapper) -> bool,
    {
        self.collect_where(|scope, id| predicate(&scope.wrap(vec![id])))
    }

    fn collect_where<F>(&self, mut matches: F) -> Wrapper
    where
        F: FnMut(&Wrapper, NodeId) -> bool,
    {
        let mut seen = AHashSet::new();
        let mut found = Vec::new();

        for &start in &self.nodes {
            for id in self.tree.subtree(start, Traversal::Shallow) {
                if matches(self, id) && seen.insert(id) {
                    found.push(id);
                }
            }
        }

        self.wrap(found)
    }

    /// Subset of the current selection matching `query` (no descending)
    pub fn filter<'q>(&self, query: impl Into<Query<'q>>) -> Wrapper {
        let selector = Selector::compile(query.into(), self.renderer.registry());
        let kept = self
            .nodes
            .iter()
            .copied()
            .filter(|&id| selector.matches(self, id))
            .collect();
        self.wrap(kept)
    }

    pub fn filter_where<F>(&self, mut predicate: F) -> Wrapper
    where
        F: FnMut(&Wrapper) -> bool,
    {
        let kept = self
            .nodes
            .iter()
            .copied()
            .filter(|&id| predicate(&self.wrap(vec![id])))
            .collect();
        self.wrap(kept)
    }

    /// Whether the single selected node matches `query`
    pub fn is<'q>(&self, query: impl Into<Query<'q>>) -> Result<bool> {
        let id = self.single("is")?;
        let selector = Selector::compile(query.into(), self.renderer.registry());
        Ok(selector.matches(self, id))
    }

    /// Whether the whole tree holds a node equal to `needle`, or a
    /// contiguous run of siblings equal to a sequence of nodes
    ///
    /// Value equality, not identity: the needle is usually a fresh literal.
    /// Component boundaries do not limit the search.
    pub fn contains<'a>(&self, needle: impl Into<Needle<'a>>) -> bool {
        let needle: Needle<'a> = needle.into();
        let elements = match needle {
            Needle::One(element) => std::slice::from_ref(element),
            Needle::Many(elements) => elements,
        };

        // Fragment root over the needles; fragments inside flatten into the run
        let literal = Tree::from_elements(elements);
        let Some(root) = literal.root_id() else {
            return false;
        };
        let Ok(run) = literal.children_ids(root) else {
            return false;
        };

        contains_run(&self.tree, &literal, run)
    }

    // ===== Single-node navigation =====

    /// Direct children of the single selected node, text included
    pub fn children(&self) -> Result<Wrapper> {
        let id = self.single("children")?;
        let children = self.tree.children_ids(id)?.to_vec();
        Ok(self.wrap(children))
    }

    /// Child at `index` in document order
    pub fn child_at(&self, index: usize) -> Result<Wrapper> {
        let id = self.single("child_at")?;
        let children = self.tree.children_ids(id)?;
        let child = children.get(index).copied().ok_or(QueryError::Index {
            index,
            len: children.len(),
        })?;
        Ok(self.wrap(vec![child]))
    }

    /// Parent of the selected node; empty at the root
    pub fn parent(&self) -> Result<Wrapper> {
        let id = self.single("parent")?;
        let parent = self.tree.parent(id)?.map(|node| node.node_id);
        Ok(self.wrap(parent.into_iter().collect()))
    }

    // ===== Single-node inspection =====

    /// Component instance backing the selected node, if it was mounted
    pub fn instance(&self) -> Result<Option<Instance>> {
        let id = self.single("instance")?;
        Ok(self.tree.get(id)?.instance.clone())
    }

    /// Tag name, component, or fragment marker; `None` for text
    pub fn node_type(&self) -> Result<Option<NodeType>> {
        let id = match self.nodes.as_slice() {
            [id] => *id,
            nodes => {
                return Err(QueryError::Ambiguity {
                    operation: "type",
                    count: nodes.len(),
                })
            }
        };
        Ok(self.tree.get(id)?.node_type())
    }

    /// Tag or component display name; `None` for text
    pub fn name(&self) -> Result<Option<&str>> {
        let id = self.single("name")?;
        Ok(self.tree.get(id)?.display_name())
    }

    pub fn prop(&self, name: &str) -> Result<Option<&Value>> {
        let id = self.single("prop")?;
        Ok(self.tree.get(id)?.prop(name))
    }

    pub fn props(&self) -> Result<&Props> {
        let id = self.single("props")?;
        Ok(&self.tree.get(id)?.props)
    }

    /// Rendered text of the shallow subtree
    pub fn text(&self) -> Result<String> {
        let id = self.single("text")?;
        Ok(utils::text_content(&self.tree, id)?)
    }

    // ===== Rendering =====

    /// Fully expand every composite in the selection
    ///
    /// The returned wrapper sits on a new tree with no component barriers
    /// left. Several selected nodes are expanded side by side under a
    /// fragment root, and the wrapper selects them.
    pub fn render(&self) -> Result<Wrapper> {
        let elements = self
            .nodes
            .iter()
            .map(|&id| self.tree.to_element(id))
            .collect::<vtree::Result<Vec<_>>>()?;
        let expanded = self.renderer.expand_many(&elements)?;

        let (tree, nodes) = match expanded.as_slice() {
            [single] => {
                let tree = Tree::from_element(single);
                let nodes: Vec<NodeId> = tree.root_id().into_iter().collect();
                (tree, nodes)
            }
            many => {
                let tree = Tree::from_elements(many);
                let nodes = match tree.root_id() {
                    Some(root) => tree.children_ids(root)?.to_vec(),
                    None => Vec::new(),
                };
                (tree, nodes)
            }
        };
        tracing::debug!(selected = self.nodes.len(), nodes = tree.len(), "Rendered selection");

        Ok(Wrapper {
            tree: Arc::new(tree),
            nodes,
            renderer: self.renderer.clone(),
        })
    }

    /// Shallow-render the single selected composite node one level
    pub fn dive(&self) -> Result<Wrapper> {
        let id = self.single("dive")?;
        let node = self.tree.get(id)?;
        if !node.is_composite() {
            return Err(QueryError::InvalidNodeType {
                expected: "composite node".to_string(),
                actual: node.display_name().unwrap_or("text").to_string(),
            });
        }
        let element = self.tree.to_element(node.node_id)?;
        Ok(self.renderer.shallow(&element))
    }

    /// Markup of the single selected node after full expansion
    pub fn html(&self) -> Result<String> {
        self.single("html")?;
        let rendered = self.render()?;
        let id = rendered.single("html")?;
        let serializer = TreeSerializer::with_config(self.renderer.config().serializer.clone());
        Ok(serializer.html(rendered.tree(), id)?)
    }

    /// Indented view of every selected node, blank-line separated
    pub fn debug(&self) -> Result<String> {
        let serializer = TreeSerializer::with_config(self.renderer.config().serializer.clone());
        let views = self
            .nodes
            .iter()
            .map(|&id| serializer.debug(&self.tree, id))
            .collect::<vtree::Result<Vec<_>>>()?;
        Ok(views.join("\n\n"))
    }
}

/// Structural equality of the selections, node by node
impl PartialEq for Wrapper {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(&a, &b)| structural_eq(&self.tree, a, &other.tree, b))
    }
}

impl fmt::Debug for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper")
            .field("nodes", &self.nodes)
            .field("tree_len", &self.tree.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::renderer::shallow;
    use vtree::{Component, ComponentRef};

    /// div#1(div#2, div#3(div#4), div#5)
    fn sample() -> Element {
        Element::host("div")
            .prop("id", "1")
            .child(Element::host("div").prop("id", "2"))
            .child(
                Element::host("div")
                    .prop("id", "3")
                    .child(Element::host("div").prop("id", "4")),
            )
            .child(Element::host("div").prop("id", "5"))
    }

    /// A renders <B/>, B renders <div id="n"/>
    fn a_and_b() -> (ComponentRef, ComponentRef) {
        let b = Component::new("B", |_, _| Element::host("div").prop("id", "n"));
        let inner = b.clone();
        let a = Component::new("A", move |_, _| Element::composite(&inner));
        (a, b)
    }

    fn ids(wrapper: &Wrapper) -> Vec<String> {
        wrapper
            .iter()
            .filter_map(|w| {
                w.prop("id")
                    .ok()
                    .flatten()
                    .and_then(|v| v.as_str())
                    .map(String::from)
            })
            .collect()
    }

    #[test]
    fn test_find_searches_whole_shallow_tree() {
        let wrapper = shallow(&sample());
        let divs = wrapper.find("div");

        assert_eq!(divs.len(), 5);
        assert_eq!(ids(&divs), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_find_with_element_literal_is_empty() {
        let wrapper = shallow(&sample());
        assert_eq!(wrapper.find(&Element::host("div").prop("id", "4")).len(), 0);
        assert_eq!(wrapper.find(Element::host("div")).len(), 0);
    }

    #[test]
    fn test_components_are_shallow_barriers() {
        let (a, _) = a_and_b();
        let wrapper = shallow(
            &Element::host("div")
                .prop("id", "1")
                .children((0..4).map(|_| Element::composite(&a))),
        );

        assert_eq!(wrapper.find("div").len(), 1);
        assert_eq!(wrapper.find("B").len(), 0);
    }

    #[test]
    fn test_find_by_component_name() {
        let a = Component::new("A", |_, _| Element::host("div"));
        let wrapper = shallow(
            &Element::host("div")
                .children((1..=4).map(|i| Element::composite(&a).prop("id", i.to_string()))),
        );

        let found = wrapper.find("A");
        assert_eq!(found.len(), 4);
        assert_eq!(ids(&found), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_find_uses_registry_names() {
        let card = Component::new("card", |_, _| Element::host("div"));
        let mut registry = crate::ComponentRegistry::new();
        registry.register(card.clone());
        let wrapper = Renderer::new()
            .with_registry(registry)
            .shallow(&Element::host("div").child(Element::composite(&card)));

        assert_eq!(wrapper.find("card").len(), 1);
        let unregistered = shallow(&Element::host("div").child(Element::composite(&card)));
        assert_eq!(unregistered.find("card").len(), 0);
    }

    #[test]
    fn test_find_where_visits_depth_first() {
        let wrapper = shallow(&sample());
        let mut order = Vec::new();

        let found = wrapper.find_where(|x| {
            if let Ok(Some(id)) = x.prop("id") {
                order.push(id.as_str().unwrap_or_default().to_string());
            }
            false
        });

        assert!(found.is_empty());
        assert_eq!(order, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_find_where_collects_matches() {
        let wrapper = shallow(&sample());
        let odd = wrapper.find_where(|x| match x.prop("id") {
            Ok(Some(Value::String(id))) => id.parse::<u32>().unwrap_or(0) % 2 == 1,
            _ => false,
        });

        assert_eq!(ids(&odd), ["1", "3", "5"]);
    }

    #[test]
    fn test_find_deduplicates_overlapping_selections() {
        let wrapper = shallow(&sample());
        let all = wrapper.find("div");
        let again = all.find("div");

        assert_eq!(ids(&again), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_find_is_idempotent() {
        let wrapper = shallow(&sample());
        let first = wrapper.find("div");
        let second = wrapper.find("div");

        assert_eq!(first, second);
        assert_eq!(first.node_ids(), second.node_ids());
        assert_eq!(wrapper.len(), 1);
    }

    #[test]
    fn test_filter_is_not_recursive() {
        let wrapper = shallow(&sample());
        let children = wrapper.children().unwrap();

        assert_eq!(children.filter("div").len(), 3);
        assert_eq!(children.filter("span").len(), 0);
        assert_eq!(
            ids(&children.filter(&Element::host("div").prop("id", "5"))),
            ["5"]
        );
        let has_children = Query::predicate(|w| w.children().map(|c| c.len()).unwrap_or(0) > 0);
        assert_eq!(ids(&children.filter(has_children)), ["3"]);

        let with_id = children.filter_where(|w| w.prop("id").ok().flatten().is_some());
        assert_eq!(with_id.len(), 3);
    }

    #[test]
    fn test_contains_uses_value_equality() {
        let wrapper = shallow(&sample());

        assert!(wrapper.contains(&Element::host("div").prop("id", "4")));
        assert!(!wrapper.contains(&Element::host("div").prop("id", "6")));
        assert!(!wrapper.contains(&Element::host("span").prop("id", "4")));
        // Shape must match all the way down
        assert!(!wrapper.contains(&Element::host("div").prop("id", "3")));
        assert!(wrapper.contains(
            &Element::host("div")
                .prop("id", "3")
                .child(Element::host("div").prop("id", "4"))
        ));
    }

    #[test]
    fn test_contains_sequence_of_siblings() {
        let wrapper = shallow(&sample());
        let three = Element::host("div")
            .prop("id", "3")
            .child(Element::host("div").prop("id", "4"));

        assert!(wrapper.contains(&[Element::host("div").prop("id", "2"), three.clone()]));
        assert!(wrapper.contains(&vec![three, Element::host("div").prop("id", "5")]));
        assert!(!wrapper.contains(&[
            Element::host("div").prop("id", "2"),
            Element::host("div").prop("id", "5"),
        ]));
        assert!(!wrapper.contains(&Vec::<Element>::new()));
    }

    #[test]
    fn test_contains_searches_whole_tree_from_any_selection() {
        let (a, _) = a_and_b();
        let wrapper = shallow(
            &Element::host("div")
                .child(Element::host("p"))
                .child(Element::composite(&a).child(Element::host("em"))),
        );
        let p = wrapper.find("p");

        assert!(p.contains(&Element::host("em")));
        assert!(p.contains(&Element::composite(&a).child(Element::host("em"))));
    }

    #[test]
    fn test_children_and_child_at() {
        let wrapper = shallow(&sample());

        let children = wrapper.children().unwrap();
        assert_eq!(ids(&children), ["2", "3", "5"]);

        let third = wrapper.child_at(2).unwrap();
        assert_eq!(ids(&third), ["5"]);

        assert!(matches!(
            wrapper.child_at(3),
            Err(QueryError::Index { index: 3, len: 3 })
        ));
        assert!(matches!(
            children.children(),
            Err(QueryError::Arity { operation: "children", count: 3 })
        ));
        assert!(matches!(
            wrapper.find("span").child_at(0),
            Err(QueryError::Arity { count: 0, .. })
        ));
    }

    #[test]
    fn test_parent() {
        let wrapper = shallow(&sample());
        let four = wrapper.find(Query::predicate(|w| {
            w.prop("id").ok().flatten() == Some(&Value::from("4"))
        }));

        assert_eq!(ids(&four.parent().unwrap()), ["3"]);
        assert_eq!(ids(&four.parent().unwrap().parent().unwrap()), ["1"]);
        assert!(wrapper.parent().unwrap().is_empty());
        assert!(matches!(
            wrapper.children().unwrap().parent(),
            Err(QueryError::Arity { operation: "parent", count: 3 })
        ));
    }

    #[test]
    fn test_children_include_text() {
        let wrapper = shallow(
            &Element::host("p")
                .child(Element::text("hi"))
                .child(Element::host("b")),
        );
        let children = wrapper.children().unwrap();

        assert_eq!(children.len(), 2);
        assert_eq!(children.first().node_type().unwrap(), None);
        assert_eq!(children.filter("b").len(), 1);
    }

    #[test]
    fn test_render_expands_components() {
        let (a, _) = a_and_b();
        let wrapper = shallow(
            &Element::host("div")
                .prop("id", "1")
                .children((0..4).map(|_| Element::composite(&a))),
        );

        let rendered = wrapper.render().unwrap();
        assert_eq!(rendered.find("div").len(), 5);
        assert_eq!(rendered.find("A").len(), 0);
        assert_eq!(wrapper.find("div").len(), 1);
        assert!(rendered.tree().iter().all(|node| !node.is_composite()));
    }

    #[test]
    fn test_render_multi_node_selection() {
        let (a, _) = a_and_b();
        let wrapper = shallow(
            &Element::host("ul")
                .child(Element::composite(&a))
                .child(Element::host("li")),
        );

        let rendered = wrapper.children().unwrap().render().unwrap();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered.first().name().unwrap(), Some("div"));
        assert_eq!(rendered.last().name().unwrap(), Some("li"));
    }

    #[test]
    fn test_render_budget_covers_whole_selection() {
        let leaf = Component::new("Leaf", |_, _| Element::host("i"));
        let item = || Element::host("li").children((0..3).map(|_| Element::composite(&leaf)));
        let config = RenderConfig {
            max_expansions: 4,
            ..Default::default()
        };
        let wrapper = Renderer::with_config(config)
            .shallow(&Element::host("ul").children((0..3).map(|_| item())));

        assert!(matches!(
            wrapper.render(),
            Err(QueryError::ExpansionBudget { max: 4 })
        ));
        assert!(matches!(
            wrapper.children().unwrap().render(),
            Err(QueryError::ExpansionBudget { max: 4 })
        ));
        assert!(wrapper.children().unwrap().first().render().is_ok());
    }

    #[test]
    fn test_render_reports_expansion_limit() {
        let slot: Arc<std::sync::OnceLock<ComponentRef>> = Arc::default();
        let inner = slot.clone();
        let loop_ = Component::new("Loop", move |_, _| match inner.get() {
            Some(me) => Element::host("div").child(Element::composite(me)),
            None => Element::text("unset"),
        });
        let _ = slot.set(loop_.clone());

        let wrapper = shallow(&Element::host("main").child(Element::composite(&loop_)));
        assert_eq!(wrapper.find("Loop").len(), 1);
        assert!(matches!(
            wrapper.render(),
            Err(QueryError::ExpansionLimit { max: 64, .. })
        ));
    }

    #[test]
    fn test_instance() {
        let a = Component::new("A", |_, _| Element::host("div"));
        let wrapper = shallow(&Element::composite(&a));

        let instance = wrapper.instance().unwrap().unwrap();
        assert!(instance.is(&a));

        let plain = shallow(&Element::host("div").child(Element::composite(&a)));
        assert!(plain.instance().unwrap().is_none());
        assert!(plain.find("A").instance().unwrap().is_none());
        assert!(matches!(
            plain.find("span").instance(),
            Err(QueryError::Arity { operation: "instance", count: 0 })
        ));
    }

    #[test]
    fn test_type_requires_single_node() {
        let wrapper = shallow(
            &Element::host("div")
                .child(Element::host("a"))
                .child(Element::host("b"))
                .child(Element::host("i")),
        );

        assert_eq!(wrapper.node_type().unwrap(), Some(NodeType::tag("div")));
        assert!(matches!(
            wrapper.children().unwrap().node_type(),
            Err(QueryError::Ambiguity { count: 3, .. })
        ));
        assert!(wrapper.child_at(0).unwrap().node_type().unwrap().unwrap() == "a");
    }

    #[test]
    fn test_type_of_component_and_fragment() {
        let a = Component::new("A", |_, _| Element::host("div"));
        let wrapper = shallow(&Element::host("div").child(Element::composite(&a)));
        assert_eq!(
            wrapper.find("A").node_type().unwrap(),
            Some(NodeType::Component(a.clone()))
        );

        let list = Component::new("List", |_, _| {
            Element::fragment(vec![Element::host("li"), Element::host("li")])
        });
        let fragment = shallow(&Element::composite(&list));
        assert_eq!(fragment.node_type().unwrap(), Some(NodeType::Fragment));
        assert_eq!(fragment.find("li").len(), 2);
    }

    #[test]
    fn test_prop_and_props() {
        let wrapper = shallow(&Element::host("input").prop("value", 3).prop("disabled", true));

        assert_eq!(wrapper.prop("value").unwrap(), Some(&Value::from(3)));
        assert_eq!(wrapper.prop("missing").unwrap(), None);
        assert_eq!(wrapper.props().unwrap().len(), 2);
        assert!(matches!(
            wrapper.find("span").prop("value"),
            Err(QueryError::Arity { operation: "prop", .. })
        ));
    }

    #[test]
    fn test_is_and_at() {
        let wrapper = shallow(&sample());
        let divs = wrapper.find("div");

        assert!(divs.at(2).is("div").unwrap());
        assert!(!divs.at(2).is("span").unwrap());
        assert!(divs.at(9).is_empty());
        assert!(!divs.at(9).exists());
        assert!(matches!(divs.is("div"), Err(QueryError::Arity { .. })));
    }

    #[test]
    fn test_text_html_debug() {
        let a = Component::new("A", |_, _| Element::host("b").child(Element::text("bold")));
        let wrapper = shallow(
            &Element::host("p")
                .prop("id", "x")
                .child(Element::text("Hi "))
                .child(Element::composite(&a)),
        );

        assert_eq!(wrapper.text().unwrap(), "Hi <A />");
        assert_eq!(wrapper.html().unwrap(), "<p id=\"x\">Hi <b>bold</b></p>");
        assert_eq!(wrapper.debug().unwrap(), "<p id=\"x\">\n  Hi \n  <A />\n</p>");
    }

    #[test]
    fn test_html_keeps_long_text() {
        let long = "x".repeat(300);
        let wrapper = shallow(&Element::host("p").child(Element::text(long.as_str())));

        assert_eq!(wrapper.html().unwrap(), format!("<p>{}</p>", long));
    }

    #[test]
    fn test_dive() {
        let (a, b) = a_and_b();
        let wrapper = shallow(&Element::host("div").child(Element::composite(&a)));

        let dived = wrapper.find("A").dive().unwrap();
        assert!(dived.instance().unwrap().unwrap().is(&a));
        assert_eq!(dived.node_type().unwrap(), Some(NodeType::Component(b)));

        assert!(matches!(
            wrapper.dive(),
            Err(QueryError::InvalidNodeType { .. })
        ));
    }

    #[test]
    fn test_wrappers_share_tree_without_mutation() {
        let wrapper = shallow(&sample());
        let before = wrapper.debug().unwrap();

        let _ = wrapper.find("div").filter("div").children();
        let _ = wrapper.render().unwrap();

        assert_eq!(wrapper.debug().unwrap(), before);
        assert_eq!(wrapper.len(), 1);
    }
}
