//! Event-driven sound
//!
//! The simulation never plays sounds itself. [`AudioDirector`] watches the
//! events a tick emits and drives an [`AudioSink`]: [`NullAudio`] by default,
//! [`WebAudio`] in the browser. Playback is best-effort; a sink swallows its
//! own failures.

use crate::sim::GameEvent;

/// Fire-and-forget sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Launch, brick destroyed, paddle bounce
    Hit,
    /// All bricks cleared
    Success,
}

/// Success fanfare: C major arpeggio
const SUCCESS_FREQS: [f32; 4] = [523.25, 659.25, 783.99, 1046.5];
/// Gap between fanfare notes (seconds)
const SUCCESS_STEP: f64 = 0.1;

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Hit => "hit",
            Cue::Success => "success",
        }
    }

    /// Notes that make up the cue
    pub fn tones(self) -> Vec<Tone> {
        match self {
            Cue::Hit => vec![Tone {
                freq: 440.0,
                wave: Wave::Square,
                delay: 0.0,
                duration: 0.08,
            }],
            Cue::Success => SUCCESS_FREQS
                .iter()
                .enumerate()
                .map(|(i, &freq)| Tone {
                    freq,
                    wave: Wave::Triangle,
                    delay: i as f64 * SUCCESS_STEP,
                    duration: 0.35,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Square,
    Triangle,
}

/// One oscillator note with its own decay envelope.
/// Times are seconds relative to when the cue fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub wave: Wave,
    pub delay: f64,
    pub duration: f64,
}

impl Tone {
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Something that can make noise
pub trait AudioSink {
    /// Play a one-shot cue; overlapping calls must not cut each other off
    fn play(&mut self, cue: Cue);
    /// Start the looping background track (no-op if already running)
    fn start_music(&mut self);
    /// Stop the background track (no-op if not running)
    fn stop_music(&mut self);
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }

    fn start_music(&mut self) {
        (**self).start_music()
    }

    fn stop_music(&mut self) {
        (**self).stop_music()
    }
}

/// Silent sink: the game without audio
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue) {}
    fn start_music(&mut self) {}
    fn stop_music(&mut self) {}
}

/// Fixed set of voices handed out round-robin, so a rapid burst of cues
/// plays on different voices instead of restarting the same one
#[derive(Debug, Clone)]
pub struct VoicePool<T> {
    voices: Vec<T>,
    next: usize,
}

impl<T> VoicePool<T> {
    pub fn new(voices: Vec<T>) -> Self {
        Self { voices, next: 0 }
    }

    /// Next voice in rotation (None only for an empty pool)
    pub fn next(&mut self) -> Option<&T> {
        if self.voices.is_empty() {
            return None;
        }
        let idx = self.next;
        self.next = (self.next + 1) % self.voices.len();
        self.voices.get(idx)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

/// Maps game events to cues and background loop control
#[derive(Debug, Default)]
pub struct AudioDirector<S> {
    sink: S,
    music_playing: bool,
}

impl<S: AudioSink> AudioDirector<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            music_playing: false,
        }
    }

    /// React to one engine event
    pub fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Launch => {
                self.sink.play(Cue::Hit);
                self.start_music();
            }
            GameEvent::BrickDestroyed { .. } | GameEvent::PaddleBounce => {
                self.sink.play(Cue::Hit);
            }
            GameEvent::Win => {
                self.sink.play(Cue::Success);
                self.stop_music();
            }
            GameEvent::GameOver | GameEvent::Reset => self.stop_music(),
            GameEvent::LifeLost { .. } => {}
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn start_music(&mut self) {
        if !self.music_playing {
            self.sink.start_music();
            self.music_playing = true;
        }
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            self.sink.stop_music();
            self.music_playing = false;
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

/// Web Audio backend: procedurally generated tones, no audio files
#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::Closure;
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, Cue, Tone, VoicePool, Wave};
    use crate::settings::Settings;

    /// Background loop: a quiet root + fifth drone
    const MUSIC_FREQS: [f32; 2] = [110.0, 164.81];

    pub struct WebAudio {
        ctx: Option<AudioContext>,
        voices: VoicePool<GainNode>,
        music: Vec<OscillatorNode>,
        sfx_volume: f32,
        music_volume: f32,
    }

    impl WebAudio {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = match AudioContext::new() {
                Ok(ctx) => Some(ctx),
                Err(e) => {
                    log::warn!("Failed to create AudioContext - audio disabled: {:?}", e);
                    None
                }
            };

            let mut voices = Vec::new();
            if let Some(ctx) = &ctx {
                for _ in 0..settings.voice_count() {
                    match create_voice(ctx) {
                        Ok(gain) => voices.push(gain),
                        Err(e) => log::warn!("Failed to create audio voice: {:?}", e),
                    }
                }
            }

            Self {
                ctx,
                voices: VoicePool::new(voices),
                music: Vec::new(),
                sfx_volume: settings.effective_sfx_volume(),
                music_volume: settings.effective_music_volume(),
            }
        }

        /// Browsers keep the context suspended until a user gesture
        fn ensure_running(ctx: &AudioContext) {
            if ctx.state() != web_sys::AudioContextState::Suspended {
                return;
            }
            match ctx.resume() {
                Ok(promise) => {
                    let on_reject = Closure::once(|e: JsValue| {
                        log::warn!("Audio resume rejected: {:?}", e);
                    });
                    let _ = promise.catch(&on_reject);
                    on_reject.forget();
                }
                Err(e) => log::warn!("Audio resume failed: {:?}", e),
            }
        }

        fn try_play(&mut self, cue: Cue) -> Result<(), JsValue> {
            let vol = self.sfx_volume;
            if vol <= 0.0 {
                return Ok(());
            }
            let Some(ctx) = &self.ctx else { return Ok(()) };
            Self::ensure_running(ctx);
            let Some(voice) = self.voices.next() else {
                return Ok(());
            };

            for note in cue.tones() {
                tone(ctx, voice, &note, vol * 0.3)?;
            }
            Ok(())
        }

        fn try_start_music(&mut self) -> Result<(), JsValue> {
            if !self.music.is_empty() || self.music_volume <= 0.0 {
                return Ok(());
            }
            let Some(ctx) = &self.ctx else { return Ok(()) };
            Self::ensure_running(ctx);

            let gain = ctx.create_gain()?;
            gain.gain().set_value(self.music_volume * 0.15);
            gain.connect_with_audio_node(&ctx.destination())?;

            for freq in MUSIC_FREQS {
                let osc = ctx.create_oscillator()?;
                osc.set_type(OscillatorType::Sine);
                osc.frequency().set_value(freq);
                osc.connect_with_audio_node(&gain)?;
                osc.start()?;
                self.music.push(osc);
            }
            Ok(())
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: Cue) {
            if let Err(e) = self.try_play(cue) {
                log::warn!("Audio cue '{}' failed: {:?}", cue.name(), e);
            }
        }

        fn start_music(&mut self) {
            if let Err(e) = self.try_start_music() {
                log::warn!("Background loop failed to start: {:?}", e);
            }
        }

        fn stop_music(&mut self) {
            for osc in self.music.drain(..) {
                if let Err(e) = osc.stop() {
                    log::warn!("Background loop failed to stop: {:?}", e);
                }
                if let Err(e) = osc.disconnect() {
                    log::warn!("Background loop failed to disconnect: {:?}", e);
                }
            }
        }
    }

    /// A pooled output channel
    fn create_voice(ctx: &AudioContext) -> Result<GainNode, JsValue> {
        let gain = ctx.create_gain()?;
        gain.gain().set_value(1.0);
        gain.connect_with_audio_node(&ctx.destination())?;
        Ok(gain)
    }

    /// Schedule one note on a voice: oscillator -> envelope -> voice.
    /// The envelope gain belongs to this note alone.
    fn tone(ctx: &AudioContext, voice: &GainNode, note: &Tone, peak: f32) -> Result<(), JsValue> {
        let osc = ctx.create_oscillator()?;
        osc.set_type(match note.wave {
            Wave::Square => OscillatorType::Square,
            Wave::Triangle => OscillatorType::Triangle,
        });
        osc.frequency().set_value(note.freq);

        let envelope = ctx.create_gain()?;
        envelope.gain().set_value(0.0);
        osc.connect_with_audio_node(&envelope)?;
        envelope.connect_with_audio_node(voice)?;

        let now = ctx.current_time();
        let start = now + note.delay;
        let end = now + note.end();
        envelope.gain().set_value_at_time(peak, start)?;
        envelope.gain().exponential_ramp_to_value_at_time(0.01, end)?;

        osc.start_with_when(start)?;
        osc.stop_with_when(end + 0.02)?;
        Ok(())
    }
}
