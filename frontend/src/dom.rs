//! Thin helpers over `web_sys` for measuring the page. Every lookup is optional:
//! a missing window, element or attribute makes the caller's feature a no-op.

use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::state::anchor::scroll_destination;
use crate::state::clicks::ClickResponse;
use crate::state::scrollspy::Landmark;

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Height of the fixed site header, 0 when the page has none.
pub fn header_height() -> f64 {
    query("header")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn query(selector: &str) -> Option<Element> {
    window()?.document()?.query_selector(selector).ok().flatten()
}

/// Elements matching `selector` that carry an id, in document order, with their offset tops.
pub fn landmarks(selector: &str) -> Vec<Landmark> {
    let Some(list) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector_all(selector).ok())
    else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter_map(|el| {
            let id = el.get_attribute("id")?;
            Some(Landmark::new(id, el.offset_top() as f64))
        })
        .collect()
}

/// Smooth-scrolls so the element with `id` sits just below the header.
/// Returns false when there is no such element.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(w) = window() else { return false };
    let Some(target) = w.document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::debug!("anchor target #{} not found", id);
        return false;
    };

    let absolute_top = target.get_bounding_client_rect().top() + w.page_y_offset().unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(absolute_top, header_height()));
    options.set_behavior(ScrollBehavior::Smooth);
    w.scroll_to_with_scroll_to_options(&options);
    true
}

/// Blocking informational message.
pub fn notify(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

pub fn respond(e: &MouseEvent, response: &ClickResponse) {
    if response.prevent_default {
        e.prevent_default();
    }
    if let Some(notice) = &response.notice {
        notify(notice);
    }
}
