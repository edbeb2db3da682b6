// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod arrows;
pub mod menu;
pub mod shield;
