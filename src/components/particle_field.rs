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

//! Decorative particle-network canvas behind page sections.
//!
//! Drifting points wrap around the canvas edges; points close to each other
//! get a faint connecting line. Purely cosmetic: the animation frame loop
//! draws straight to the 2D context and never re-renders the component.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const PARTICLE_COUNT: usize = 70;
const LINK_DISTANCE_PX: f64 = 130.0;
const DOT_RADIUS_PX: f64 = 1.6;

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

/// Wrap a coordinate into `[0, max)`, entering from the opposite edge.
fn wrap(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let wrapped = value % max;
    if wrapped < 0.0 {
        wrapped + max
    } else {
        wrapped
    }
}

fn step(p: &mut Particle, width: f64, height: f64) {
    p.x = wrap(p.x + p.vx, width);
    p.y = wrap(p.y + p.vy, height);
}

pub enum FieldMsg {
    Frame,
}

pub struct ParticleField {
    canvas: NodeRef,
    particles: Vec<Particle>,
    tick: Option<Closure<dyn FnMut(f64)>>,
    raf_id: Option<i32>,
}

impl Component for ParticleField {
    type Message = FieldMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            canvas: NodeRef::default(),
            particles: Vec::new(),
            tick: Some(Closure::wrap(Box::new(move |_now: f64| {
                link.send_message(FieldMsg::Frame);
            }) as Box<dyn FnMut(f64)>)),
            raf_id: None,
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            return;
        };
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: js_sys::Math::random() * width as f64,
                y: js_sys::Math::random() * height as f64,
                vx: (js_sys::Math::random() - 0.5) * 0.6,
                vy: (js_sys::Math::random() - 0.5) * 0.6,
            })
            .collect();

        self.schedule_frame();
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FieldMsg::Frame => {
                self.draw();
                self.schedule_frame();
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas ref={self.canvas.clone()} class="particle-field" aria-hidden="true"></canvas>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(id) = self.raf_id.take() {
            let _ = gloo_utils::window().cancel_animation_frame(id);
        }
        self.tick = None;
    }
}

impl ParticleField {
    fn schedule_frame(&mut self) {
        if let Some(tick) = self.tick.as_ref() {
            self.raf_id = gloo_utils::window()
                .request_animation_frame(tick.as_ref().unchecked_ref())
                .ok();
        }
    }

    fn draw(&mut self) {
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
        for p in &mut self.particles {
            step(p, width, height);
        }

        ctx.clear_rect(0.0, 0.0, width, height);

        ctx.set_stroke_style_str("rgba(86, 204, 242, 0.18)");
        ctx.set_line_width(1.0);
        ctx.begin_path();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let (a, b) = (self.particles[i], self.particles[j]);
                let (dx, dy) = (a.x - b.x, a.y - b.y);
                if dx * dx + dy * dy < LINK_DISTANCE_PX * LINK_DISTANCE_PX {
                    ctx.move_to(a.x, a.y);
                    ctx.line_to(b.x, b.y);
                }
            }
        }
        ctx.stroke();

        ctx.set_fill_style_str("rgba(86, 204, 242, 0.7)");
        for p in &self.particles {
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, DOT_RADIUS_PX, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{step, wrap, Particle};

    #[test]
    fn wrap_keeps_values_in_range() {
        assert_eq!(wrap(50.0, 100.0), 50.0);
        assert_eq!(wrap(120.0, 100.0), 20.0);
        assert_eq!(wrap(-10.0, 100.0), 90.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
    }

    #[test]
    fn particles_reenter_from_opposite_edge() {
        let mut p = Particle {
            x: 99.5,
            y: 0.2,
            vx: 1.0,
            vy: -1.0,
        };
        step(&mut p, 100.0, 100.0);
        assert!((p.x - 0.5).abs() < 1e-9);
        assert!((p.y - 99.2).abs() < 1e-9);
    }
}
