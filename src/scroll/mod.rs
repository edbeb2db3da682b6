// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scroll-driven reveal and navigation.
//!
//! The one piece of shared infrastructure on the site: eased smooth
//! scrolling, anchor resolution under a fixed header, a scroll spy for nav
//! highlighting, visibility-triggered reveals, and the page-scroll lock
//! used by the mobile menu. Decision math lives in pure functions; the DOM
//! drivers on top own their listeners and animation frames and release them
//! on drop.

pub mod anchor;
pub mod easing;
pub mod lock;
pub mod reveal;
pub mod smooth;
pub mod spy;

pub use anchor::{anchor_target, scroll_to_section, section_top};
pub use easing::{ease_in_out_quart, ease_out_cubic, Tween};
pub use lock::ScrollLock;
pub use reveal::{RevealObserver, RevealOptions, RevealPhase};
pub use smooth::{scroll_to_native_smooth, SmoothScroll};
pub use spy::{resolve_active, ScrollSpy};
