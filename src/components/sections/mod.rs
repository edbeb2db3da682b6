// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod blogs;
pub mod contact;
pub mod dashboard;
pub mod hero;
pub mod services;
pub mod stats;
pub mod testimonials;
pub mod why_us;
