//! Audio adapter using the Web Audio API
//!
//! Procedurally synthesized cues - no sound files to load. Every call is
//! best-effort: playback failures are logged and swallowed, never surfaced
//! to the simulation.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Discrete sound cues emitted by the host in response to game events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Laser fired
    Laser,
    /// Asteroid destroyed
    Explosion,
    /// Planet health hit zero
    GameOver,
}

/// Fire-and-forget audio player. Holds the looping ambience drone while a
/// run is active.
pub struct AudioPlayer {
    ctx: Option<AudioContext>,
    ambience: Option<(OscillatorNode, GainNode)>,
    volume: f32,
    muted: bool,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer {
    pub fn new() -> Self {
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            ambience: None,
            volume: 0.8,
            muted: false,
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Play a one-shot cue
    pub fn play(&self, cue: Cue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Browsers suspend the context until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let result = match cue {
            Cue::Laser => self.sweep(ctx, OscillatorType::Square, 880.0, 220.0, 0.12, 0.3 * vol),
            Cue::Explosion => {
                self.sweep(ctx, OscillatorType::Sawtooth, 220.0, 40.0, 0.4, 0.4 * vol)
            }
            Cue::GameOver => {
                self.sweep(ctx, OscillatorType::Triangle, 440.0, 55.0, 1.2, 0.5 * vol)
            }
        };
        if let Err(err) = result {
            log::warn!("audio cue {cue:?} failed: {err:?}");
        }
    }

    /// One oscillator with a pitch sweep and an exponential fade-out
    fn sweep(
        &self,
        ctx: &AudioContext,
        shape: OscillatorType,
        freq_start: f32,
        freq_end: f32,
        duration: f64,
        gain: f32,
    ) -> Result<(), wasm_bindgen::JsValue> {
        let now = ctx.current_time();
        let osc = ctx.create_oscillator()?;
        let amp = ctx.create_gain()?;

        osc.set_type(shape);
        osc.frequency().set_value(freq_start);
        osc.frequency()
            .exponential_ramp_to_value_at_time(freq_end.max(1.0), now + duration)?;

        amp.gain().set_value(gain);
        amp.gain()
            .exponential_ramp_to_value_at_time(0.0001, now + duration)?;

        osc.connect_with_audio_node(&amp)?;
        amp.connect_with_audio_node(&ctx.destination())?;
        osc.start()?;
        osc.stop_with_when(now + duration)?;
        Ok(())
    }

    /// Start the looping background drone (gated by the Running phase)
    pub fn start_ambience(&mut self) {
        if self.ambience.is_some() {
            return;
        }
        let vol = self.effective_volume();
        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let started = (|| -> Result<(OscillatorNode, GainNode), wasm_bindgen::JsValue> {
            let osc = ctx.create_oscillator()?;
            let amp = ctx.create_gain()?;
            osc.set_type(OscillatorType::Triangle);
            osc.frequency().set_value(55.0);
            amp.gain().set_value(0.05 * vol);
            osc.connect_with_audio_node(&amp)?;
            amp.connect_with_audio_node(&ctx.destination())?;
            osc.start()?;
            Ok((osc, amp))
        })();

        match started {
            Ok(nodes) => self.ambience = Some(nodes),
            Err(err) => log::warn!("ambience start failed: {err:?}"),
        }
    }

    /// Stop the background drone (game over or leaving Running)
    pub fn stop_ambience(&mut self) {
        if let Some((osc, amp)) = self.ambience.take() {
            let _ = osc.stop();
            let _ = osc.disconnect();
            let _ = amp.disconnect();
        }
    }
}
