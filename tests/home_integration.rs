// Copyright 2026 Cyvance Security
// Licensed under MIT OR Apache-2.0
//
// Smoke test: the full landing page mounts with every anchored section the
// navigation links to, plus the header and footer.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, create_mount_point, flush};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::prelude::*;

use cyvance_site::constants::SECTION_IDS;
use cyvance_site::pages::home::Home;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn home_renders_header_footer_and_all_sections() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <BrowserRouter>
                <Home />
            </BrowserRouter>
        }
    }

    let mount = create_mount_point();
    let handle = yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    assert!(
        mount.query_selector(".site-header").unwrap().is_some(),
        "header should mount"
    );
    assert!(
        mount.query_selector(".site-footer").unwrap().is_some(),
        "footer should mount"
    );

    for id in SECTION_IDS {
        assert!(
            mount.query_selector(&format!("#{id}")).unwrap().is_some(),
            "section #{id} should exist for its nav link"
        );
    }

    // The dashboard renders its two mock charts.
    let charts = mount.query_selector_all(".dashboard-chart").unwrap();
    assert_eq!(charts.length(), 2);

    handle.destroy();
    cleanup(&mount);
}
