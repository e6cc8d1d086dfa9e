use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;

/// Vertical extent of one `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section whose range holds `scroll_y`, with each range pulled up by the navbar
/// height plus a fixed lookahead. When ranges overlap the later section wins.
pub fn active_section(scroll_y: f64, navbar_height: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - navbar_height - config::NAV_LOOKAHEAD_PX;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// True when a nav link's `href` points at the active section.
pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * config::PARALLAX_FACTOR)
}

pub fn should_reveal(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height - config::REVEAL_MARGIN_PX
}

/// Runs the callback once a burst of calls has been quiet for `delay_ms`.
/// Each call drops the pending timeout, which cancels it.
pub struct Debouncer {
    delay_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            callback: Rc::new(callback),
            pending: None,
        }
    }

    pub fn call(&mut self) {
        let callback = self.callback.clone();
        self.pending = Some(Timeout::new(self.delay_ms, move || callback()));
    }
}

// DOM side. Every lookup that comes back empty turns the effect into a no-op.

pub fn navbar_height(document: &Document) -> f64 {
    document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

/// Id of the section the page is currently scrolled into.
pub fn current_section(window: &Window) -> Option<String> {
    let document = window.document()?;
    let scroll_y = window.scroll_y().ok()?;
    let sections = measure_sections(&document);
    active_section(scroll_y, navbar_height(&document), &sections).map(str::to_owned)
}

/// Smooth-scrolls so the section's top sits just under the navbar.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No section with id {id}, ignoring nav click");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(target.offset_top() as f64 - navbar_height(&document));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn apply_parallax(document: &Document, scroll_y: f64) {
    let Some(hero) = document
        .query_selector(".hero-section")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = hero.style().set_property("transform", &parallax_transform(scroll_y));
}

/// Adds `fade-in-up` to every animatable block that has entered the viewport.
pub fn reveal_in_view(window: &Window, document: &Document) {
    let Some(viewport_height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".card, .faculty-card, .table") else {
        return;
    };
    for element in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
    {
        if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
            let _ = element.class_list().add_1("fade-in-up");
        }
    }
}
