//! [`Dom`] over the live browser document

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::core::dom::{ChangeHandler, ClickAction, ClickHandler, Dom};

/// Handle to the page's window and document
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// `None` outside a browsing context (e.g. in a worker)
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Text content of the element with the given id
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }

    fn listen(&self, element: &Element, event: &str, callback: Closure<dyn Fn(Event)>) {
        let _ = element.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        // Listeners live as long as the page
        callback.forget();
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Option<Element> {
        parent.query_selector(selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn set_class(&self, element: &Element, class: &str, on: bool) {
        let _ = element.class_list().toggle_with_force(class, on);
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_list_items(&self, element: &Element, items: &[&str]) {
        element.set_text_content(None);
        for item in items {
            if let Ok(li) = self.document.create_element("li") {
                li.set_text_content(Some(item));
                let _ = element.append_child(&li);
            }
        }
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map(|html| html.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn is_checked(&self, element: &Element) -> bool {
        element
            .dyn_ref::<HtmlInputElement>()
            .is_some_and(|input| input.checked())
    }

    fn prefers_dark_scheme(&self) -> bool {
        if let Ok(Some(media_query)) = self.window.match_media("(prefers-color-scheme: dark)") {
            return media_query.matches();
        }
        false
    }

    fn on_click(&self, element: &Element, handler: ClickHandler) {
        let callback = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            if handler() == ClickAction::PreventDefault {
                event.prevent_default();
            }
        });
        self.listen(element, "click", callback);
    }

    fn on_change(&self, element: &Element, handler: ChangeHandler) {
        let callback = Closure::<dyn Fn(Event)>::new(move |_event: Event| handler());
        self.listen(element, "change", callback);
    }
}
