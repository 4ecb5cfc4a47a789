//! In-memory doubles for the capability traits, used by unit tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::dom::{ChangeHandler, ClickAction, ClickHandler, Dom};
use super::scheduler::{
    FrameControl, FrameHandler, OneShot, ScrollHandler, Scheduler, meets_threshold,
};
use super::store::{KeyValueStore, StoreError};

// ============================================================================
// Stores
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared handle so a test can inspect what a controller persisted
impl KeyValueStore for Rc<MemoryStore> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.as_ref().get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.as_ref().set_item(key, value)
    }
}

pub struct FailingStore {
    reason: String,
}

impl FailingStore {
    pub fn rejecting(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Rejected(self.reason.clone()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected(self.reason.clone()))
    }
}

// ============================================================================
// FakeDom
// ============================================================================

pub type NodeId = usize;

#[derive(Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    style: BTreeMap<String, String>,
    offset_top: f64,
    checked: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document. Node 0 is `<html>`, node 1 is `<body>`.
pub struct FakeDom {
    nodes: RefCell<Vec<Node>>,
    scroll_y: Cell<f64>,
    prefers_dark: Cell<bool>,
    scrolled_to: RefCell<Vec<NodeId>>,
    click_handlers: RefCell<Vec<(NodeId, ClickHandler)>>,
    change_handlers: RefCell<Vec<(NodeId, ChangeHandler)>>,
}

impl FakeDom {
    pub const BODY: NodeId = 1;

    pub fn new() -> Rc<Self> {
        let dom = Self {
            nodes: RefCell::new(vec![Node {
                tag: "html".into(),
                ..Default::default()
            }]),
            scroll_y: Cell::new(0.0),
            prefers_dark: Cell::new(false),
            scrolled_to: RefCell::new(Vec::new()),
            click_handlers: RefCell::new(Vec::new()),
            change_handlers: RefCell::new(Vec::new()),
        };
        dom.add(0, "body", &[]);
        Rc::new(dom)
    }

    /// Append an element. `id` and `class` entries are handled like HTML attributes.
    pub fn add(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut node = Node {
            tag: tag.to_string(),
            parent: Some(parent),
            ..Default::default()
        };
        for (name, value) in attrs {
            if *name == "class" {
                node.classes = value.split_whitespace().map(String::from).collect();
            } else {
                node.attrs.insert(name.to_string(), value.to_string());
            }
        }

        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(node);
        if id != 0 {
            nodes[parent].children.push(id);
        }
        id
    }

    pub fn text(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = nodes[node].text.clone();
        for child in &nodes[node].children {
            out.push_str(&nodes[*child].text);
        }
        out
    }

    /// Texts of the `<li>` children of a list
    pub fn list_items(&self, node: NodeId) -> Vec<String> {
        let nodes = self.nodes.borrow();
        nodes[node]
            .children
            .iter()
            .filter(|c| nodes[**c].tag == "li")
            .map(|c| nodes[*c].text.clone())
            .collect()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node].style.get(property).cloned()
    }

    pub fn set_offset_top(&self, node: NodeId, top: f64) {
        self.nodes.borrow_mut()[node].offset_top = top;
    }

    pub fn set_checked(&self, node: NodeId, checked: bool) {
        self.nodes.borrow_mut()[node].checked = checked;
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.set(dark);
    }

    pub fn scrolled_to(&self) -> Vec<NodeId> {
        self.scrolled_to.borrow().clone()
    }

    /// Dispatch a click; returns `PreventDefault` if any handler asked for it
    pub fn click(&self, node: NodeId) -> ClickAction {
        let handlers: Vec<ClickHandler> = self
            .click_handlers
            .borrow()
            .iter()
            .filter(|(n, _)| *n == node)
            .map(|(_, h)| h.clone())
            .collect();

        let mut action = ClickAction::Continue;
        for handler in handlers {
            if handler() == ClickAction::PreventDefault {
                action = ClickAction::PreventDefault;
            }
        }
        action
    }

    /// Dispatch `change` to the registered handlers
    pub fn change(&self, node: NodeId) {
        let handlers: Vec<ChangeHandler> = self
            .change_handlers
            .borrow()
            .iter()
            .filter(|(n, _)| *n == node)
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn click_handler_count(&self, node: NodeId) -> usize {
        self.click_handlers
            .borrow()
            .iter()
            .filter(|(n, _)| *n == node)
            .count()
    }

    fn document_order(&self) -> Vec<NodeId> {
        fn walk(nodes: &[Node], id: NodeId, out: &mut Vec<NodeId>) {
            out.push(id);
            for child in &nodes[id].children {
                walk(nodes, *child, out);
            }
        }
        let nodes = self.nodes.borrow();
        let mut out = Vec::with_capacity(nodes.len());
        walk(&nodes, 0, &mut out);
        out
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let parts: Vec<Compound> = selector.split_whitespace().map(Compound::parse).collect();
        let nodes = self.nodes.borrow();
        let Some((last, ancestors)) = parts.split_last() else {
            return false;
        };
        if !last.matches(&nodes[node]) {
            return false;
        }

        // Descendant combinator: match remaining compounds on the ancestor chain
        let mut remaining = ancestors.iter().rev().peekable();
        let mut current = nodes[node].parent;
        while let (Some(compound), Some(id)) = (remaining.peek(), current) {
            if compound.matches(&nodes[id]) {
                remaining.next();
            }
            current = nodes[id].parent;
        }
        remaining.peek().is_none()
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = nodes[node].parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }
}

/// One compound selector: `tag.class#id[attr][attr^="prefix"]`
#[derive(Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, AttrTest)>,
}

enum AttrTest {
    Present,
    Equals(String),
    StartsWith(String),
}

impl Compound {
    fn parse(raw: &str) -> Self {
        let mut compound = Compound::default();
        let mut rest = raw;

        let tag_end = rest.find(['.', '#', '[']).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_string());
        }
        rest = &rest[tag_end..];

        while let Some(first) = rest.chars().next() {
            match first {
                '[' => {
                    let end = rest.find(']').unwrap_or(rest.len() - 1);
                    let body = &rest[1..end];
                    let test = if let Some((name, value)) = body.split_once("^=") {
                        (name.to_string(), AttrTest::StartsWith(unquote(value)))
                    } else if let Some((name, value)) = body.split_once('=') {
                        (name.to_string(), AttrTest::Equals(unquote(value)))
                    } else {
                        (body.to_string(), AttrTest::Present)
                    };
                    compound.attrs.push(test);
                    rest = &rest[end + 1..];
                }
                '.' | '#' => {
                    let body = &rest[1..];
                    let end = body.find(['.', '#', '[']).unwrap_or(body.len());
                    let name = body[..end].to_string();
                    if first == '.' {
                        compound.classes.push(name);
                    } else {
                        compound.id = Some(name);
                    }
                    rest = &body[end..];
                }
                _ => break,
            }
        }

        compound
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if &node.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, test)| match (node.attrs.get(name), test) {
            (Some(_), AttrTest::Present) => true,
            (Some(v), AttrTest::Equals(expected)) => v == expected,
            (Some(v), AttrTest::StartsWith(prefix)) => v.starts_with(prefix.as_str()),
            (None, _) => false,
        })
    }
}

fn unquote(value: &str) -> String {
    value.trim_matches(|c| c == '"' || c == '\'').to_string()
}

impl Dom for FakeDom {
    type Element = NodeId;

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order().into_iter().find(|n| {
            self.nodes.borrow()[*n].attrs.get("id").map(String::as_str) == Some(id)
        })
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|n| self.matches(*n, selector))
            .collect()
    }

    fn query_within(&self, parent: &NodeId, selector: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|n| self.is_descendant(*n, *parent) && self.matches(*n, selector))
    }

    fn body(&self) -> Option<NodeId> {
        Some(Self::BODY)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        if name == "class" {
            return Some(nodes[*element].classes.join(" "));
        }
        nodes[*element].attrs.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[*element]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*element]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*element].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.nodes.borrow_mut()[*element]
            .classes
            .retain(|c| c != class);
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*element].children.clear();
        nodes[*element].text = text.to_string();
    }

    fn set_list_items(&self, element: &NodeId, items: &[&str]) {
        {
            let mut nodes = self.nodes.borrow_mut();
            nodes[*element].children.clear();
            nodes[*element].text.clear();
        }
        for item in items {
            let li = self.add(*element, "li", &[]);
            self.nodes.borrow_mut()[li].text = item.to_string();
        }
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[*element]
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.nodes.borrow()[*element].offset_top
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_into_view(&self, element: &NodeId) {
        self.scrolled_to.borrow_mut().push(*element);
    }

    fn is_checked(&self, element: &NodeId) -> bool {
        self.nodes.borrow()[*element].checked
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark.get()
    }

    fn on_click(&self, element: &NodeId, handler: ClickHandler) {
        self.click_handlers.borrow_mut().push((*element, handler));
    }

    fn on_change(&self, element: &NodeId, handler: ChangeHandler) {
        self.change_handlers.borrow_mut().push((*element, handler));
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

/// Scheduler whose callbacks only run when the test says so
#[derive(Default)]
pub struct ManualScheduler {
    scroll_handlers: RefCell<Vec<ScrollHandler>>,
    observed: RefCell<Vec<(NodeId, f64, Rc<OneShot>)>>,
    frames: RefCell<Vec<FrameHandler>>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn scroll(&self) {
        let handlers = self.scroll_handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }

    /// Report that `ratio` of the element is visible
    pub fn intersect(&self, element: NodeId, ratio: f64) {
        let due: Vec<Rc<OneShot>> = {
            let mut observed = self.observed.borrow_mut();
            let mut due = Vec::new();
            observed.retain(|(el, threshold, shot)| {
                if *el == element && meets_threshold(ratio, *threshold) {
                    due.push(shot.clone());
                    false
                } else {
                    true
                }
            });
            due
        };
        for shot in due {
            shot.fire();
        }
    }

    pub fn observed_count(&self) -> usize {
        self.observed.borrow().len()
    }

    pub fn is_observing(&self, element: NodeId) -> bool {
        self.observed.borrow().iter().any(|(el, _, _)| *el == element)
    }

    pub fn threshold_for(&self, element: NodeId) -> Option<f64> {
        self.observed
            .borrow()
            .iter()
            .find(|(el, _, _)| *el == element)
            .map(|(_, t, _)| *t)
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Run every pending frame handler with the given timestamp
    pub fn run_frame(&self, timestamp: f64) {
        let current: Vec<FrameHandler> = self.frames.borrow_mut().drain(..).collect();
        let mut kept = Vec::new();
        for mut handler in current {
            if handler(timestamp) == FrameControl::Continue {
                kept.push(handler);
            }
        }
        // Handlers registered while running go after the survivors
        let mut frames = self.frames.borrow_mut();
        let added: Vec<FrameHandler> = frames.drain(..).collect();
        frames.extend(kept);
        frames.extend(added);
    }
}

impl Scheduler<NodeId> for ManualScheduler {
    fn on_scroll(&self, handler: ScrollHandler) {
        self.scroll_handlers.borrow_mut().push(handler);
    }

    fn on_visible(&self, element: &NodeId, threshold: f64, subscription: Rc<OneShot>) {
        self.observed
            .borrow_mut()
            .push((*element, threshold, subscription));
    }

    fn on_frame(&self, handler: FrameHandler) {
        self.frames.borrow_mut().push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_dom_selectors() {
        let dom = FakeDom::new();
        let main = dom.add(FakeDom::BODY, "main", &[]);
        let a = dom.add(main, "section", &[("id", "a")]);
        let _anon = dom.add(main, "section", &[]);
        let nav = dom.add(FakeDom::BODY, "nav", &[("class", "site-nav open")]);
        let link = dom.add(nav, "a", &[("href", "#a")]);
        let outside = dom.add(FakeDom::BODY, "a", &[("href", "/login")]);

        assert_eq!(dom.query_all("main section[id]"), vec![a]);
        assert_eq!(dom.query_all(".site-nav a"), vec![link]);
        assert_eq!(dom.query_all("a[href^=\"#\"]"), vec![link]);
        assert_eq!(dom.query_all("a"), vec![link, outside]);
        assert_eq!(dom.query_within(&nav, "a"), Some(link));
        assert_eq!(dom.by_id("a"), Some(a));
    }

    #[test]
    fn test_fake_dom_list_items_replace_children() {
        let dom = FakeDom::new();
        let list = dom.add(FakeDom::BODY, "ul", &[]);
        dom.set_list_items(&list, &["one", "two"]);
        dom.set_list_items(&list, &["three"]);
        assert_eq!(dom.list_items(list), vec!["three".to_string()]);
    }

    #[test]
    fn test_manual_scheduler_frames_until_stop() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        scheduler.on_frame(Box::new(move |_| {
            seen.set(seen.get() + 1);
            if seen.get() < 3 {
                FrameControl::Continue
            } else {
                FrameControl::Stop
            }
        }));

        for ts in [0.0, 16.0, 32.0, 48.0] {
            scheduler.run_frame(ts);
        }
        assert_eq!(calls.get(), 3);
        assert_eq!(scheduler.pending_frames(), 0);
    }
}
