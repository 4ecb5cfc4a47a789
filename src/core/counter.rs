//! Animated numeric counters (`[data-count]`)
//!
//! A counter counts up from zero to its target once it is mostly visible.
//! [`CounterAnimation`] holds the frame-stepping math and is independent of
//! any scheduler; [`CounterController`] drives it from animation frames.

use std::rc::Rc;

use super::dom::Dom;
use super::format::{NumberFormat, parse_count};
use super::scheduler::{FrameControl, OneShot, Scheduler};

/// Target and decorations read from a counter element
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CounterSpec {
    pub target: i64,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Read `data-count`, `data-prefix` and `data-suffix`
    pub fn from_element<D: Dom>(dom: &D, element: &D::Element) -> Self {
        Self {
            target: parse_count(dom.attribute(element, "data-count").as_deref()),
            prefix: dom.attribute(element, "data-prefix").unwrap_or_default(),
            suffix: dom.attribute(element, "data-suffix").unwrap_or_default(),
        }
    }

    /// Text shown for a given value
    pub fn render(&self, value: i64, format: &NumberFormat) -> String {
        format!("{}{}{}", self.prefix, format.format_integer(value), self.suffix)
    }

    /// Value displayed at a progress ratio, clamped to `[0, 1]`
    pub fn value_at(&self, progress: f64) -> i64 {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        (self.target as f64 * progress).floor() as i64
    }
}

/// One rendered step of a counter animation
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub progress: f64,
    pub text: String,
    pub done: bool,
}

/// Frame-by-frame state of a running counter
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    duration_ms: f64,
    started_at: Option<f64>,
    format: NumberFormat,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec, duration_ms: f64) -> Self {
        Self {
            spec,
            duration_ms,
            started_at: None,
            format: NumberFormat::pt_br(),
        }
    }

    /// Advance to `timestamp`. The first call pins the start time.
    ///
    /// Once elapsed time reaches the duration the frame is final and shows
    /// the exact target, whatever the last sampled progress was.
    pub fn step(&mut self, timestamp: f64) -> CounterFrame {
        let start = *self.started_at.get_or_insert(timestamp);
        let progress = if self.duration_ms > 0.0 {
            ((timestamp - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            CounterFrame {
                progress: 1.0,
                text: self.spec.render(self.spec.target, &self.format),
                done: true,
            }
        } else {
            CounterFrame {
                progress,
                text: self.spec.render(self.spec.value_at(progress), &self.format),
                done: false,
            }
        }
    }
}

pub struct CounterController<D: Dom> {
    dom: Rc<D>,
    counters: Vec<D::Element>,
    duration_ms: f64,
    threshold: f64,
}

impl<D: Dom + 'static> CounterController<D> {
    pub fn new(dom: Rc<D>, duration_ms: f64, threshold: f64) -> Self {
        let counters = dom.query_all("[data-count]");
        Self {
            dom,
            counters,
            duration_ms,
            threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Subscribe every counter; each animates once, on first visibility
    pub fn mount<S: Scheduler<D::Element> + 'static>(&self, scheduler: &Rc<S>) {
        for counter in &self.counters {
            let dom = Rc::clone(&self.dom);
            let frames = Rc::clone(scheduler);
            let element = counter.clone();
            let duration_ms = self.duration_ms;
            let subscription = OneShot::new(move || {
                animate_counter(dom, &*frames, element, duration_ms);
            });
            scheduler.on_visible(counter, self.threshold, subscription);
        }
    }
}

/// Run a counter animation on `element` until it reaches its target
pub fn animate_counter<D, S>(dom: Rc<D>, scheduler: &S, element: D::Element, duration_ms: f64)
where
    D: Dom + 'static,
    S: Scheduler<D::Element>,
{
    let spec = CounterSpec::from_element(&*dom, &element);
    let mut animation = CounterAnimation::new(spec, duration_ms);

    scheduler.on_frame(Box::new(move |timestamp| {
        let frame = animation.step(timestamp);
        dom.set_text(&element, &frame.text);
        if frame.done {
            FrameControl::Stop
        } else {
            FrameControl::Continue
        }
    }));
}
