//! FAQ accordion with at most one open item

use std::rc::Rc;

use super::dom::{ClickAction, Dom};

/// Class marking an open FAQ item
pub const OPEN_CLASS: &str = "open";

struct FaqEntry<E> {
    item: E,
    question: Option<E>,
}

/// `.faq-item` blocks, each toggled through its `.faq-question` button
pub struct FaqAccordion<D: Dom> {
    dom: Rc<D>,
    entries: Vec<FaqEntry<D::Element>>,
}

impl<D: Dom + 'static> FaqAccordion<D> {
    pub fn new(dom: Rc<D>) -> Self {
        let entries = dom
            .query_all(".faq-item")
            .into_iter()
            .map(|item| {
                let question = dom.query_within(&item, ".faq-question");
                FaqEntry { item, question }
            })
            .collect();
        Self { dom, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|entry| self.dom.has_class(&entry.item, OPEN_CLASS))
    }

    /// Indices of the open items
    #[cfg(test)]
    pub(crate) fn open_items(&self) -> Vec<usize> {
        (0..self.entries.len()).filter(|i| self.is_open(*i)).collect()
    }

    /// Activate the question of item `index`.
    ///
    /// Closes every item, then reopens the activated one if it was closed.
    /// Items without a question control are ignored. Returns whether the
    /// item ended up open.
    pub fn activate(&self, index: usize) -> bool {
        let Some(question) = self.entries.get(index).and_then(|e| e.question.as_ref()) else {
            return false;
        };
        let will_open = !self.is_open(index);

        for entry in &self.entries {
            self.dom.remove_class(&entry.item, OPEN_CLASS);
            if let Some(button) = &entry.question {
                self.dom.set_attribute(button, "aria-expanded", "false");
            }
        }

        if will_open {
            self.dom.add_class(&self.entries[index].item, OPEN_CLASS);
            self.dom.set_attribute(question, "aria-expanded", "true");
        }

        will_open
    }

    pub fn mount(self: &Rc<Self>) {
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(question) = &entry.question else {
                continue;
            };
            let accordion = Rc::clone(self);
            self.dom.on_click(
                question,
                Rc::new(move || {
                    accordion.activate(index);
                    ClickAction::Continue
                }),
            );
        }
    }
}
