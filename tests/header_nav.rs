// Copyright 2026 Cyvance Security
// Licensed under MIT OR Apache-2.0
//
// Component tests for the site header: active-link highlighting from the
// scroll spy id, and hash-link clicks routing through the anchor resolver
// with the header offset applied.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, flush, sleep_ms};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::prelude::*;

use cyvance_site::components::header::SiteHeader;
use cyvance_site::constants::HEADER_HEIGHT_PX;
use cyvance_site::scroll::section_top;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// Active link highlighting
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn active_section_highlights_exactly_one_link() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <BrowserRouter>
                <SiteHeader active_id={Some(AttrValue::from("services"))} />
            </BrowserRouter>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    let services = mount
        .query_selector("a[href='#services']")
        .unwrap()
        .expect("header should render a #services link");
    assert!(
        services.class_list().contains("is-active"),
        "the Services link should carry the active indicator"
    );

    let active_links = mount.query_selector_all(".nav-link.is-active").unwrap();
    assert_eq!(
        active_links.length(),
        1,
        "no other nav link should be active"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn no_active_id_means_no_highlight() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <BrowserRouter>
                <SiteHeader />
            </BrowserRouter>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    let active_links = mount.query_selector_all(".nav-link.is-active").unwrap();
    assert_eq!(active_links.length(), 0);

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Hash-link navigation
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn hash_link_click_prevents_default_and_scrolls_under_header() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <BrowserRouter>
                <SiteHeader />
                // Enough filler that the contact section sits far below the
                // fold and the window can actually scroll to it.
                <div style="height: 3000px;"></div>
                // Tall enough that the scroll target stays reachable even on
                // a large test viewport.
                <section id="contact" style="height: 1400px;">{ "contact" }</section>
            </BrowserRouter>
        }
    }

    let window = gloo_utils::window();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    let expected = section_top("contact").expect("contact section exists") - HEADER_HEIGHT_PX;

    let link = mount
        .query_selector("a[href='#contact']")
        .unwrap()
        .expect("header should render a #contact link");

    let default_allowed = click(&link);
    assert!(
        !default_allowed,
        "clicking a hash link must call preventDefault"
    );

    // The smooth scroll runs for 600 ms; give it headroom to settle.
    sleep_ms(900).await;

    let scrolled_to = window.scroll_y().unwrap();
    assert!(
        (scrolled_to - expected).abs() <= 3.0,
        "scroll should land at the contact top minus the header height \
         (expected {expected}, got {scrolled_to})"
    );

    window.scroll_to_with_x_and_y(0.0, 0.0);
    cleanup(&mount);
}
