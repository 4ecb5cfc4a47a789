//! Staggered entrance animations for `[data-reveal]` elements

use std::rc::Rc;

use super::dom::Dom;
use super::scheduler::{OneShot, Scheduler};

/// Class added once an element has scrolled into view
pub const VISIBLE_CLASS: &str = "visible";

/// Transition delay for the element at `index`, capped at `max_ms`
pub fn reveal_delay_ms(index: usize, step_ms: u32, max_ms: u32) -> u32 {
    let delay = (index as u64).saturating_mul(step_ms as u64);
    delay.min(max_ms as u64) as u32
}

pub struct RevealController<D: Dom> {
    dom: Rc<D>,
    elements: Vec<D::Element>,
    step_ms: u32,
    max_delay_ms: u32,
    threshold: f64,
}

impl<D: Dom + 'static> RevealController<D> {
    pub fn new(dom: Rc<D>, step_ms: u32, max_delay_ms: u32, threshold: f64) -> Self {
        let elements = dom.query_all("[data-reveal]");
        Self {
            dom,
            elements,
            step_ms,
            max_delay_ms,
            threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Assign stagger delays and subscribe every element for a one-time reveal
    pub fn mount<S: Scheduler<D::Element>>(&self, scheduler: &S) {
        for (index, element) in self.elements.iter().enumerate() {
            let delay = reveal_delay_ms(index, self.step_ms, self.max_delay_ms);
            self.dom
                .set_style(element, "transition-delay", &format!("{}ms", delay));
        }

        for element in &self.elements {
            let dom = Rc::clone(&self.dom);
            let target = element.clone();
            let subscription = OneShot::new(move || dom.add_class(&target, VISIBLE_CLASS));
            scheduler.on_visible(element, self.threshold, subscription);
        }
    }
}
