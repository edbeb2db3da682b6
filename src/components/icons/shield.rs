/*
 * Copyright 2026 Cyvance Security
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use yew::prelude::*;

/// Brand mark shown next to the wordmark in the header and footer.
#[function_component(ShieldIcon)]
pub fn shield_icon() -> Html {
    html! {
        <svg class="icon icon-shield" viewBox="0 0 24 24" width="26" height="26" aria-hidden="true">
            <path
                d="M12 2 L20 5.5 V11 C20 16.2 16.6 20.3 12 22 C7.4 20.3 4 16.2 4 11 V5.5 Z"
                fill="none" stroke="currentColor" stroke-width="1.8" stroke-linejoin="round"
            />
            <path d="M8.5 11.5 L11 14 L15.5 9" fill="none" stroke="currentColor" stroke-width="1.8"
                stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}
