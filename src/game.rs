//! Session wiring
//!
//! One [`Game`] per page: it owns the simulation state, samples input once
//! per frame, runs the tick and fans the resulting events out to audio and
//! logging. Without an audio backend it is simply `Game<NullAudio>`.

use crate::audio::{AudioDirector, AudioSink, NullAudio};
use crate::input::InputState;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::{HudReadout, HudUpdate};

/// Game instance holding all state
pub struct Game<A: AudioSink = NullAudio> {
    state: GameState,
    input: InputState,
    audio: AudioDirector<A>,
    hud: HudReadout,
    // Track phase for transition logging
    last_phase: GamePhase,
}

impl Game<NullAudio> {
    /// A game with no sound
    pub fn silent(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, seed, NullAudio)
    }
}

impl<A: AudioSink> Game<A> {
    pub fn new(tuning: Tuning, seed: u64, audio: A) -> Self {
        let state = GameState::new(tuning, seed);
        let last_phase = state.phase;
        Self {
            state,
            input: InputState::new(),
            audio: AudioDirector::new(audio),
            hud: HudReadout::new(),
            last_phase,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn audio(&self) -> &AudioDirector<A> {
        &self.audio
    }

    /// Run one frame from the current keyboard state
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let intent = self.input.intent(self.state.phase);
        self.step(&intent)
    }

    /// Run one frame from an explicit intent (autopilot, tests)
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(&mut self.state, input);
        self.dispatch()
    }

    /// Start over from the opening position
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.input.clear();
        self.state.reset();
        self.dispatch()
    }

    /// Score/lives values the page needs to redraw
    pub fn hud_update(&mut self) -> HudUpdate {
        self.hud.update(&self.state)
    }

    fn dispatch(&mut self) -> Vec<GameEvent> {
        let events: Vec<GameEvent> = self.state.drain_events().collect();
        for event in &events {
            log::debug!("Event: {:?}", event);
            self.audio.observe(event);
        }

        let phase = self.state.phase;
        if phase != self.last_phase {
            log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
            self.last_phase = phase;
        }
        events
    }
}
