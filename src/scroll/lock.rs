// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoped page-scroll lock for full-screen overlays.

/// Holds `overflow: hidden` on `document.body` for as long as the value is
/// alive. The previous inline value is restored on drop, so a lock released
/// by overlay close, by navigation, or by component unmount all end up in
/// the same place.
#[derive(Debug)]
pub struct ScrollLock {
    prev_overflow: String,
}

impl ScrollLock {
    /// Engage the lock. Returns `None` outside a document with a body
    /// (nothing to lock).
    pub fn engage() -> Option<Self> {
        let body = gloo_utils::document().body()?;
        let style = body.style();
        let prev_overflow = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { prev_overflow })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(body) = gloo_utils::document().body() {
            let style = body.style();
            if self.prev_overflow.is_empty() {
                let _ = style.remove_property("overflow");
            } else {
                let _ = style.set_property("overflow", &self.prev_overflow);
            }
        }
    }
}
