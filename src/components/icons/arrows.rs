// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

#[function_component(ChevronLeftIcon)]
pub fn chevron_left_icon() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <path d="M14.5 6L9 12l5.5 6" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[function_component(ChevronRightIcon)]
pub fn chevron_right_icon() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <path d="M9.5 6L15 12l-5.5 6" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[function_component(ArrowUpIcon)]
pub fn arrow_up_icon() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
            <path d="M12 19V5M5.5 11.5L12 5l6.5 6.5" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}
