//! Document capability used by the landing page controllers
//!
//! Controllers never touch the browser directly. They receive an
//! implementation of [`Dom`] which is backed by `web-sys` in the browser
//! and by an in-memory document in tests.

use std::rc::Rc;

/// What the host should do with a click after the handler ran
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClickAction {
    /// Let the browser perform its default action
    #[default]
    Continue,
    /// Suppress the default action (e.g. an instant anchor jump)
    PreventDefault,
}

/// Click handler registered on an element
pub type ClickHandler = Rc<dyn Fn() -> ClickAction>;

/// Change handler registered on a form control
pub type ChangeHandler = Rc<dyn Fn()>;

/// Query and mutation surface over a rendered document.
///
/// Every method takes `&self`: elements are shared handles and event
/// handlers call back into the same document while it is borrowed by
/// other controllers.
pub trait Dom {
    /// Handle to a single element
    type Element: Clone + PartialEq + 'static;

    /// Look up an element by its `id` attribute
    fn by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `parent` matching a CSS selector
    fn query_within(&self, parent: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// The document `<body>`
    fn body(&self) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Add the class when `on` is true, remove it otherwise
    fn set_class(&self, element: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    /// Replace all content of the element with a single text node
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Replace all children with one `<li>` per item, inserted as text
    fn set_list_items(&self, element: &Self::Element, items: &[&str]);

    /// Set an inline style property
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Distance from the top of the document to the element
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Current vertical scroll offset of the window
    fn scroll_y(&self) -> f64;

    /// Smoothly scroll so the element is aligned to the top of the viewport
    fn scroll_into_view(&self, element: &Self::Element);

    /// Checked state of a checkbox input; `false` for anything else
    fn is_checked(&self, element: &Self::Element) -> bool;

    /// Whether the platform reports a dark color-scheme preference
    fn prefers_dark_scheme(&self) -> bool;

    fn on_click(&self, element: &Self::Element, handler: ClickHandler);

    fn on_change(&self, element: &Self::Element, handler: ChangeHandler);
}
