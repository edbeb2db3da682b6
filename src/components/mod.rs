// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod animated_counter;
pub mod back_to_top;
pub mod dashboard_chart;
pub mod footer;
pub mod header;
pub mod icons;
pub mod mobile_menu;
pub mod particle_field;
pub mod reveal;
pub mod sections;
pub mod threat_globe;
