// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolves a section id to a document offset and starts the scroll.
//!
//! A fixed header overlays the top of the viewport, so every anchor jump
//! subtracts the header height from the section's document-relative top.
//! Unknown ids are a silent no-op.

use wasm_bindgen::JsValue;

use super::smooth::{current_scroll_y, SmoothScroll};

/// Scroll offset that puts `section_top` just below a fixed header of
/// `header_offset` pixels. Clamped so short pages never target a negative
/// offset.
pub fn anchor_target(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}

/// Document-relative top of the element with the given id, if it exists.
pub fn section_top(id: &str) -> Option<f64> {
    let element = gloo_utils::document().get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + current_scroll_y())
}

/// Smooth-scroll to the section with the given id, offset for the fixed
/// header, and record the jump as a `#id` history entry. Missing elements
/// are ignored.
pub fn scroll_to_section(scroller: &SmoothScroll, id: &str, header_offset: f64, duration_ms: f64) {
    let Some(top) = section_top(id) else {
        return;
    };
    scroller.animate_to(anchor_target(top, header_offset), duration_ms);
    push_hash(id);
}

fn push_hash(id: &str) {
    if let Ok(history) = gloo_utils::window().history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
    }
}

#[cfg(test)]
mod tests {
    use super::anchor_target;

    #[test]
    fn target_subtracts_header_offset() {
        assert_eq!(anchor_target(500.0, 72.0), 428.0);
    }

    #[test]
    fn target_clamps_at_document_top() {
        assert_eq!(anchor_target(40.0, 72.0), 0.0);
        assert_eq!(anchor_target(0.0, 72.0), 0.0);
    }
}
