//! Header navigation: collapsible menu, smooth anchors and active link tracking

use std::rc::Rc;

use super::dom::{ClickAction, Dom};
use super::scheduler::Scheduler;

/// Class marking an open menu (on both the nav and its toggle button)
pub const OPEN_CLASS: &str = "open";

/// Class marking the nav link of the current section
pub const ACTIVE_CLASS: &str = "active";

/// Pick the section the viewport is reading.
///
/// Returns the id of the last section, in document order, whose top is at
/// or above `offset`. When none qualifies the first section wins, and an
/// empty list yields an empty id.
pub fn active_section_id<'a>(sections: &'a [(String, f64)], offset: f64) -> &'a str {
    let mut active = sections.first().map(|(id, _)| id.as_str()).unwrap_or("");
    for (id, top) in sections {
        if offset >= *top {
            active = id.as_str();
        }
    }
    active
}

/// Menu state plus scroll-driven link highlighting
pub struct NavigationController<D: Dom> {
    dom: Rc<D>,
    menu_toggle: Option<D::Element>,
    nav: Option<D::Element>,
    links: Vec<D::Element>,
    sections: Vec<D::Element>,
    scroll_offset: f64,
}

impl<D: Dom + 'static> NavigationController<D> {
    /// Bind to `#menuToggle`, `#siteNav`, `.site-nav a` and `main section[id]`
    pub fn new(dom: Rc<D>, scroll_offset: f64) -> Self {
        let menu_toggle = dom.by_id("menuToggle");
        let nav = dom.by_id("siteNav");
        let links = dom.query_all(".site-nav a");
        let sections = dom.query_all("main section[id]");
        Self {
            dom,
            menu_toggle,
            nav,
            links,
            sections,
            scroll_offset,
        }
    }

    /// Whether the menu is currently open
    pub fn is_menu_open(&self) -> bool {
        self.nav
            .as_ref()
            .is_some_and(|nav| self.dom.has_class(nav, OPEN_CLASS))
    }

    /// Flip the menu. Returns the new state, or `None` when the menu is not on the page.
    pub fn toggle_menu(&self) -> Option<bool> {
        self.nav.as_ref()?;
        self.menu_toggle.as_ref()?;
        let open = !self.is_menu_open();
        self.set_menu_open(open);
        Some(open)
    }

    /// Force the menu closed
    pub fn close_menu(&self) {
        self.set_menu_open(false);
    }

    fn set_menu_open(&self, open: bool) {
        let (Some(nav), Some(toggle)) = (&self.nav, &self.menu_toggle) else {
            return;
        };
        self.dom.set_class(nav, OPEN_CLASS, open);
        self.dom.set_class(toggle, OPEN_CLASS, open);
        self.dom
            .set_attribute(toggle, "aria-expanded", if open { "true" } else { "false" });
    }

    /// Ids and offsets of every tracked section, in document order
    fn section_offsets(&self) -> Vec<(String, f64)> {
        self.sections
            .iter()
            .map(|section| {
                let id = self.dom.attribute(section, "id").unwrap_or_default();
                (id, self.dom.offset_top(section))
            })
            .collect()
    }

    /// Highlight the link of the section under the scroll position.
    ///
    /// Returns the id that became active (empty when there are no sections).
    pub fn set_active_nav_link(&self) -> String {
        let offset = self.dom.scroll_y() + self.scroll_offset;
        let sections = self.section_offsets();
        let active = active_section_id(&sections, offset);
        let target = format!("#{}", active);

        for link in &self.links {
            let is_active = self.dom.attribute(link, "href").as_deref() == Some(target.as_str());
            self.dom.set_class(link, ACTIVE_CLASS, is_active);
        }

        active.to_string()
    }

    /// Smooth-scroll to an in-page target. Returns whether the target exists.
    pub fn scroll_to_anchor(&self, href: &str) -> bool {
        let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return false;
        };
        match self.dom.by_id(id) {
            Some(target) => {
                self.dom.scroll_into_view(&target);
                true
            }
            None => false,
        }
    }

    /// Wire menu, link and anchor clicks plus scroll tracking, then
    /// compute the initial active link
    pub fn mount<S: Scheduler<D::Element>>(self: &Rc<Self>, scheduler: &S) {
        if let (Some(toggle), Some(_)) = (&self.menu_toggle, &self.nav) {
            let controller = Rc::clone(self);
            self.dom.on_click(
                toggle,
                Rc::new(move || {
                    controller.toggle_menu();
                    ClickAction::Continue
                }),
            );

            for link in &self.links {
                let controller = Rc::clone(self);
                self.dom.on_click(
                    link,
                    Rc::new(move || {
                        controller.close_menu();
                        ClickAction::Continue
                    }),
                );
            }
        }

        for anchor in self.dom.query_all("a[href^=\"#\"]") {
            let controller = Rc::clone(self);
            let dom = Rc::clone(&self.dom);
            let element = anchor.clone();
            self.dom.on_click(
                &anchor,
                Rc::new(move || {
                    let href = dom.attribute(&element, "href").unwrap_or_default();
                    if controller.scroll_to_anchor(&href) {
                        ClickAction::PreventDefault
                    } else {
                        ClickAction::Continue
                    }
                }),
            );
        }

        let controller = Rc::clone(self);
        scheduler.on_scroll(Rc::new(move || {
            controller.set_active_nav_link();
        }));
        self.set_active_nav_link();
    }
}
