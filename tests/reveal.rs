// Copyright 2026 Cyvance Security
// Licensed under MIT OR Apache-2.0
//
// Browser-side tests for the reveal wrapper: an element inside the viewport
// gains the visible class once, keeps it, and staggered siblings lag behind
// unstaggered ones.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, create_mount_point, sleep_ms};
use wasm_bindgen_test::*;
use yew::prelude::*;

use cyvance_site::components::reveal::Reveal;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn element_in_viewport_becomes_visible_once() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <Reveal>
                <p>{ "revealed content" }</p>
            </Reveal>
        }
    }

    let window = gloo_utils::window();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();

    // Intersection callbacks are delivered asynchronously.
    sleep_ms(150).await;

    let revealed = mount.query_selector(".reveal").unwrap().unwrap();
    assert!(
        revealed.class_list().contains("is-visible"),
        "an on-screen element must reveal"
    );

    // It must stay visible, and the class must not be duplicated by any
    // late observer callback.
    sleep_ms(200).await;
    assert!(revealed.class_list().contains("is-visible"));
    let class_attr = revealed.get_attribute("class").unwrap_or_default();
    assert_eq!(
        class_attr.matches("is-visible").count(),
        1,
        "visible class applied exactly once, got: {class_attr}"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn staggered_sibling_reveals_after_a_delay() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <>
                <Reveal class="first">
                    <p>{ "first" }</p>
                </Reveal>
                // 6 * 90 ms = 540 ms behind its sibling.
                <Reveal stagger_index={6} class="second">
                    <p>{ "second" }</p>
                </Reveal>
            </>
        }
    }

    let window = gloo_utils::window();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();

    sleep_ms(200).await;

    let first = mount.query_selector(".reveal.first").unwrap().unwrap();
    let second = mount.query_selector(".reveal.second").unwrap().unwrap();
    assert!(first.class_list().contains("is-visible"));
    assert!(
        !second.class_list().contains("is-visible"),
        "the staggered sibling must still be pending at this point"
    );

    sleep_ms(700).await;
    assert!(
        second.class_list().contains("is-visible"),
        "the staggered sibling must reveal after its delay"
    );

    cleanup(&mount);
}
