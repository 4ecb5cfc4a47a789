//! [`Scheduler`] backed by window scroll events, `IntersectionObserver`
//! and `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::core::scheduler::{
    FrameControl, FrameHandler, OneShot, ScrollHandler, Scheduler, meets_threshold,
};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut(f64)>) {
    if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        warn!("requestAnimationFrame failed: {:?}", e);
    }
}

impl Scheduler<Element> for BrowserScheduler {
    fn on_scroll(&self, handler: ScrollHandler) {
        let callback = Closure::<dyn Fn()>::new(move || handler());
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            );
        callback.forget();
    }

    fn on_visible(&self, element: &Element, threshold: f64, subscription: Rc<OneShot>) {
        let pending = Rc::clone(&subscription);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting()
                        && meets_threshold(entry.intersection_ratio(), threshold)
                    {
                        pending.fire();
                        observer.unobserve(&entry.target());
                        observer.disconnect();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(element);
                callback.forget();
            }
            Err(e) => {
                // Without observers nothing would ever trigger; show the content now
                warn!("IntersectionObserver unavailable: {:?}", e);
                subscription.fire();
            }
        }
    }

    fn on_frame(&self, mut handler: FrameHandler) {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let next = Rc::clone(&slot);
        let window = self.window.clone();

        *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if handler(timestamp) == FrameControl::Stop {
                // Drop the closure; the animation is over
                let _ = next.borrow_mut().take();
                return;
            }
            if let Some(callback) = next.borrow().as_ref() {
                request_frame(&window, callback);
            }
        }));

        if let Some(callback) = slot.borrow().as_ref() {
            request_frame(&self.window, callback);
        }
    }
}
