// SPDX-License-Identifier: MIT OR Apache-2.0

//! Floating "back to top" button.
//!
//! Uses the browser's native smooth scrolling — no custom duration is
//! needed for a jump to a fixed offset.

use yew::prelude::*;

use crate::components::icons::arrows::ArrowUpIcon;
use crate::scroll::scroll_to_native_smooth;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_native_smooth(0.0));
    html! {
        <button class="back-to-top" aria-label="Back to top" {onclick}>
            <ArrowUpIcon />
        </button>
    }
}
