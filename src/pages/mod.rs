// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod about_us;
pub mod home;
pub mod our_process;
pub mod why_cyvance;
