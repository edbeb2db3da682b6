// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layout and animation constants shared across the site.

/// Rendered height of the fixed header, used as the anchor-scroll offset.
pub const HEADER_HEIGHT_PX: f64 = 72.0;

/// Pixels of lookahead added to the scroll offset when deciding which
/// section is current. Roughly the header height plus a little slack so a
/// nav link lights up as its section slides under the header.
pub const SPY_LOOKAHEAD_PX: f64 = 80.0;

/// Scroll distance past which the header switches to its "scrolled" styling
/// and becomes eligible to hide on downward scroll.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 24.0;

/// Default duration of an in-page smooth scroll.
pub const SMOOTH_SCROLL_MS: f64 = 600.0;

/// Delay between consecutive staggered reveals of sibling elements.
pub const REVEAL_STAGGER_STEP_MS: u32 = 90;

/// In-page sections in document order. The scroll spy walks this list
/// top to bottom; the last section whose top has been passed wins.
pub const SECTION_IDS: [&str; 7] = [
    "services",
    "stats",
    "why-us",
    "dashboard",
    "testimonials",
    "blogs",
    "contact",
];

/// `(section id, nav label)` pairs rendered as hash links in the header.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("services", "Services"),
    ("why-us", "Why Us"),
    ("dashboard", "Dashboard"),
    ("blogs", "Blog"),
    ("contact", "Contact"),
];
