// Copyright 2026 Cyvance Security
// Licensed under MIT OR Apache-2.0
//
// Scroll-lock lifecycle tests for the mobile menu overlay.
//
// The lock must engage while the menu is mounted and release on every exit
// path: explicit close, and unmount without close.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{body_overflow, cleanup, click, create_mount_point, flush};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::prelude::*;

use cyvance_site::components::mobile_menu::MobileMenu;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn open_menu_locks_body_scroll_and_unmount_releases_it() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <BrowserRouter>
                <MobileMenu on_close={Callback::noop()} on_nav={Callback::noop()} />
            </BrowserRouter>
        }
    }

    assert_eq!(body_overflow(), "", "body starts unlocked");

    let mount = create_mount_point();
    let handle = yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    assert_eq!(
        body_overflow(),
        "hidden",
        "mounting the menu must lock page scroll"
    );

    // Unmount without ever closing: the drop path must release the lock.
    handle.destroy();
    flush().await;

    assert_eq!(
        body_overflow(),
        "",
        "destroying the menu must restore the previous overflow"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn closing_restores_the_previous_overflow_value() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let open = use_state(|| true);
        let on_close = {
            let open = open.clone();
            Callback::from(move |_| open.set(false))
        };
        html! {
            <BrowserRouter>
                if *open {
                    <MobileMenu {on_close} on_nav={Callback::noop()} />
                }
            </BrowserRouter>
        }
    }

    // Give the body a pre-existing inline overflow to restore.
    let body = gloo_utils::document().body().unwrap();
    body.style().set_property("overflow", "scroll").unwrap();

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    assert_eq!(body_overflow(), "hidden");

    let close = mount
        .query_selector(".mobile-menu-close")
        .unwrap()
        .expect("menu should render a close button");
    click(&close);
    flush().await;

    assert_eq!(
        body_overflow(),
        "scroll",
        "closing must restore the value that was set before opening"
    );

    body.style().remove_property("overflow").unwrap();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn section_link_click_closes_and_releases() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let open = use_state(|| true);
        let on_close = {
            let open = open.clone();
            Callback::from(move |_| open.set(false))
        };
        // Mirrors the header wiring: a section nav also dismisses the menu.
        let on_nav = {
            let open = open.clone();
            Callback::from(move |_id: String| open.set(false))
        };
        html! {
            <BrowserRouter>
                if *open {
                    <MobileMenu {on_close} {on_nav} />
                }
            </BrowserRouter>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    assert_eq!(body_overflow(), "hidden");

    let link = mount
        .query_selector("a[href='#services']")
        .unwrap()
        .expect("menu should render section links");
    click(&link);
    flush().await;

    assert_eq!(
        body_overflow(),
        "",
        "navigating from the menu must release the lock"
    );

    cleanup(&mount);
}
