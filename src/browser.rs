//! `web-sys` implementations of the motion event sources.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date, Function, Reflect};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::MotionError;
use crate::motion::{
    ElementId, IntersectionEntry, Observation, Scheduler, ScrollSample, ScrollSource,
    Subscription, TaskHandle, VisibilitySource,
};

/// Descendants marked with this attribute take part in a reveal.
pub const ANIMATE_SELECTOR: &str = "[data-animate=\"flip\"]";

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn window() -> Result<Window, MotionError> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

pub fn smooth_scroll_to(top: f64) -> Result<(), MotionError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scrolls so the element matching `selector` sits `offset` pixels
/// below the top of the viewport. Returns false when nothing matches.
pub fn scroll_to_element(selector: &str, offset: f64) -> Result<bool, MotionError> {
    let window = window()?;
    let document = window.document().ok_or(MotionError::NoDocument)?;
    let Some(element) = document.query_selector(selector)? else {
        return Ok(false);
    };
    let top = element.get_bounding_client_rect().top() + window.scroll_y()? - offset;
    smooth_scroll_to(top)?;
    Ok(true)
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now(&self) -> f64 {
        Date::now()
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        // Dropping a gloo Timeout clears it.
        TaskHandle::new(move || drop(timeout))
    }
}

/// Scroll position of the window, sampled on `scroll` and `resize`.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> Result<Self, MotionError> {
        Ok(Self { window: window()? })
    }
}

fn read_sample(window: &Window) -> ScrollSample {
    let offset = window.scroll_y().unwrap_or(0.0);
    let (document_height, viewport_height) = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    ScrollSample {
        offset,
        timestamp: Date::now(),
        document_height,
        viewport_height,
    }
}

impl ScrollSource for WindowScroll {
    fn sample(&self) -> ScrollSample {
        read_sample(&self.window)
    }

    fn subscribe(&self, listener: Rc<dyn Fn(ScrollSample)>) -> Result<Subscription, MotionError> {
        let window = self.window.clone();
        let callback = Closure::<dyn Fn()>::new(move || listener(read_sample(&window)));
        let function = callback.as_ref().unchecked_ref::<Function>().clone();

        let window = self.window.clone();
        // Created first so a failed attach detaches the events already added.
        let subscription = Subscription::new(move || {
            for event in SCROLL_EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
            debug!("Scroll listener detached");
        });

        for event in SCROLL_EVENTS {
            self.window
                .add_event_listener_with_callback(event, &function)?;
        }
        Ok(subscription)
    }
}

/// The `data-animate="flip"` descendants of a container.
pub struct DomTargets {
    window: Window,
    elements: Rc<Vec<Element>>,
}

impl DomTargets {
    pub fn from_container(container: &Element) -> Result<Self, MotionError> {
        let list = container.query_selector_all(ANIMATE_SELECTOR)?;
        let elements = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        Ok(Self {
            window: window()?,
            elements: Rc::new(elements),
        })
    }

    fn has_intersection_observer(&self) -> bool {
        Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }
}

struct DomObservation {
    observer: IntersectionObserver,
    elements: Rc<Vec<Element>>,
    // Disconnects at most once, here or on drop, before the callback is freed.
    connection: RefCell<Subscription>,
    _callback: Closure<dyn Fn(Array)>,
}

impl Observation for DomObservation {
    fn unobserve(&self, target: ElementId) {
        if let Some(element) = self.elements.get(target.0) {
            self.observer.unobserve(element);
        }
    }

    fn disconnect(&self) {
        self.connection.borrow_mut().detach();
    }
}

impl VisibilitySource for DomTargets {
    fn target_count(&self) -> usize {
        self.elements.len()
    }

    fn observe(
        &self,
        threshold: f64,
        root_margin: &str,
        callback: Rc<dyn Fn(Vec<IntersectionEntry>)>,
    ) -> Result<Option<Box<dyn Observation>>, MotionError> {
        if !self.has_intersection_observer() {
            return Ok(None);
        }

        let elements = self.elements.clone();
        let js_callback = Closure::<dyn Fn(Array)>::new(move |entries: Array| {
            let entries = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    elements
                        .iter()
                        .position(|el| *el == target)
                        .map(|index| IntersectionEntry {
                            target: ElementId(index),
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        })
                })
                .collect();
            callback(entries);
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(js_callback.as_ref().unchecked_ref(), &init)?;
        for element in self.elements.iter() {
            observer.observe(element);
        }

        let connected = observer.clone();
        let connection = Subscription::new(move || {
            connected.disconnect();
            debug!("Intersection observer disconnected");
        });
        Ok(Some(Box::new(DomObservation {
            observer,
            elements: self.elements.clone(),
            connection: RefCell::new(connection),
            _callback: js_callback,
        })))
    }
}
