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

//! Rotating point-sphere drawn behind the hero section.
//!
//! A fibonacci lattice of points on the unit sphere, spun around the Y axis
//! and projected orthographically. Back-hemisphere points are dimmed for a
//! cheap depth cue. Decoration only.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const POINT_COUNT: usize = 320;
const SPIN_RAD_PER_MS: f64 = 0.00012;

/// Evenly distributed points on the unit sphere (fibonacci lattice).
fn fibonacci_sphere(count: usize) -> Vec<[f64; 3]> {
    let golden_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
            let radius = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f64;
            [radius * theta.cos(), y, radius * theta.sin()]
        })
        .collect()
}

fn rotate_y([x, y, z]: [f64; 3], angle: f64) -> [f64; 3] {
    let (sin, cos) = angle.sin_cos();
    [x * cos + z * sin, y, z * cos - x * sin]
}

pub enum GlobeMsg {
    Frame(f64),
}

pub struct ThreatGlobe {
    canvas: NodeRef,
    points: Vec<[f64; 3]>,
    tick: Option<Closure<dyn FnMut(f64)>>,
    raf_id: Option<i32>,
}

impl Component for ThreatGlobe {
    type Message = GlobeMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            canvas: NodeRef::default(),
            points: fibonacci_sphere(POINT_COUNT),
            tick: Some(Closure::wrap(Box::new(move |now: f64| {
                link.send_message(GlobeMsg::Frame(now));
            }) as Box<dyn FnMut(f64)>)),
            raf_id: None,
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() {
            let width = canvas.client_width().max(1) as u32;
            let height = canvas.client_height().max(1) as u32;
            canvas.set_width(width);
            canvas.set_height(height);
        }
        self.schedule_frame();
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            GlobeMsg::Frame(now_ms) => {
                self.draw(now_ms * SPIN_RAD_PER_MS);
                self.schedule_frame();
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas ref={self.canvas.clone()} class="threat-globe" aria-hidden="true"></canvas>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(id) = self.raf_id.take() {
            let _ = gloo_utils::window().cancel_animation_frame(id);
        }
        self.tick = None;
    }
}

impl ThreatGlobe {
    fn schedule_frame(&mut self) {
        if let Some(tick) = self.tick.as_ref() {
            self.raf_id = gloo_utils::window()
                .request_animation_frame(tick.as_ref().unchecked_ref())
                .ok();
        }
    }

    fn draw(&self, angle: f64) {
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let cx = width / 2.0;
        let cy = height / 2.0;
        let scale = width.min(height) * 0.42;

        ctx.clear_rect(0.0, 0.0, width, height);
        for &point in &self.points {
            let [x, y, z] = rotate_y(point, angle);
            // z > 0 faces the viewer.
            let (alpha, radius) = if z > 0.0 {
                (0.25 + 0.55 * z, 1.4)
            } else {
                (0.08, 1.0)
            };
            ctx.set_fill_style_str(&format!("rgba(86, 204, 242, {alpha:.2})"));
            ctx.begin_path();
            let _ = ctx.arc(cx + x * scale, cy + y * scale, radius, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
}
