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

//! Decorative UI sounds.
//!
//! `UiSounds` owns its `AudioContext` and is held by the component that
//! plays sounds, never stored globally. If the context cannot be created
//! (no audio hardware, headless browser) the handle degrades to a silent
//! no-op after logging a warning once.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

pub struct UiSounds {
    ctx: Option<AudioContext>,
}

impl UiSounds {
    pub fn new() -> Self {
        match AudioContext::new() {
            Ok(ctx) => Self { ctx: Some(ctx) },
            Err(err) => {
                log::warn!("audio context unavailable, UI sounds disabled: {err:?}");
                Self { ctx: None }
            }
        }
    }

    /// Short high blip, played on nav interactions.
    pub fn play_tick(&self) {
        self.play(&[(880.0, 0.0, 0.09)]);
    }

    /// Rising two-tone, played when the contact form submits.
    pub fn play_confirm(&self) {
        self.play(&[(523.25, 0.0, 0.1), (783.99, 0.11, 0.14)]);
    }

    fn play(&self, notes: &[(f32, f64, f64)]) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        for &(freq, offset, length) in notes {
            if let Err(err) = Self::beep(ctx, freq, offset, length) {
                log::warn!("failed to play UI sound: {err:?}");
                return;
            }
        }
    }

    fn beep(ctx: &AudioContext, freq: f32, offset: f64, length: f64) -> Result<(), JsValue> {
        let osc = ctx.create_oscillator()?;
        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(freq);

        let gain = ctx.create_gain()?;
        let start = ctx.current_time() + offset;
        gain.gain().set_value_at_time(0.0001, start)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.08, start + 0.012)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.0001, start + length)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(start)?;
        osc.stop_with_when(start + length + 0.02)?;
        Ok(())
    }
}

impl Default for UiSounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UiSounds {
    fn drop(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            let _ = ctx.close();
        }
    }
}
