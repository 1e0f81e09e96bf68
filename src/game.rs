//! Frame driver
//!
//! [`Game`] owns the session and every collaborator. Input commands and
//! frame callbacks come in; render state, sound cues and best-score writes
//! go out. Collaborator failures are logged and dropped here so they never
//! reach the simulation.

use rand::RngCore;

use crate::audio::AudioSink;
use crate::commentary::commentary_for;
use crate::persistence::HighScoreStore;
use crate::platform::{Command, FrameId, FrameScheduler};
use crate::renderer::RenderSink;
use crate::sim::{GameEvent, GamePhase, Session, autopilot, tick};
use crate::tuning::Tuning;

/// Everything outside the simulation the game talks to
pub struct Collaborators {
    pub renderer: Box<dyn RenderSink>,
    pub audio: Box<dyn AudioSink>,
    pub store: Box<dyn HighScoreStore>,
    pub frames: Box<dyn FrameScheduler>,
}

/// Game instance holding all state
pub struct Game {
    session: Session,
    rng: Box<dyn RngCore>,
    renderer: Box<dyn RenderSink>,
    audio: Box<dyn AudioSink>,
    store: Box<dyn HighScoreStore>,
    frames: Box<dyn FrameScheduler>,
    /// Outstanding frame request, if any
    pending_frame: Option<FrameId>,
    /// Demo mode: jumps are timed automatically
    autopilot: bool,
}

impl Game {
    /// Build the game and read the best score once
    pub fn new(tuning: Tuning, collaborators: Collaborators, rng: Box<dyn RngCore>) -> Self {
        let Collaborators {
            mut renderer,
            audio,
            store,
            frames,
        } = collaborators;

        let high_score = match store.load_high_score() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("Could not load best score, starting from 0: {}", e);
                0
            }
        };
        let session = Session::new(tuning, high_score);
        renderer.best_score(high_score);
        renderer.render(&session.render_state());

        Self {
            session,
            rng,
            renderer,
            audio,
            store,
            frames,
            pending_frame: None,
            autopilot: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.autopilot != enabled {
            log::info!("Autopilot {}", if enabled { "on" } else { "off" });
        }
        self.autopilot = enabled;
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Activate => self.activate(),
            Command::Restart => self.restart(),
            Command::ToggleAutopilot => self.set_autopilot(!self.autopilot),
        }
    }

    /// Jump/tap/key input: jump while playing, otherwise begin a round
    pub fn activate(&mut self) {
        match self.session.activate() {
            Some(GameEvent::Started) => self.round_started(),
            Some(GameEvent::Jumped) => self.audio.jump(),
            // Airborne jump requests are dropped
            _ => {}
        }
    }

    /// Restart control: fresh round regardless of phase
    pub fn restart(&mut self) {
        self.session.start_game();
        self.round_started();
    }

    /// Frame callback. Runs one tick if a frame was pending and asks for the
    /// next one while still playing.
    pub fn frame(&mut self) {
        if self.pending_frame.take().is_none() {
            return;
        }
        if self.session.phase != GamePhase::Playing {
            return;
        }

        if self.autopilot && autopilot::should_jump(&self.session) {
            self.activate();
        }

        let event = tick(&mut self.session, &mut *self.rng);
        self.renderer.render(&self.session.render_state());

        match event {
            Some(GameEvent::Scored { score, speed }) => {
                self.audio.score();
                self.renderer.score_incremented(score, speed);
            }
            Some(GameEvent::GameOver {
                final_score,
                new_high_score,
            }) => self.round_over(final_score, new_high_score),
            _ => {}
        }

        if self.session.phase == GamePhase::Playing {
            self.request_frame();
        }
    }

    /// App teardown: make sure no frame fires afterwards
    pub fn shutdown(&mut self) {
        self.cancel_frame();
    }

    fn round_started(&mut self) {
        self.renderer.game_started();
        self.renderer.render(&self.session.render_state());
        self.request_frame();
    }

    fn round_over(&mut self, final_score: u32, new_high_score: bool) {
        self.audio.game_over();
        self.cancel_frame();

        if new_high_score {
            if let Err(e) = self.store.save_high_score(self.session.high_score) {
                log::warn!("Could not save best score: {}", e);
            }
            self.renderer.best_score(self.session.high_score);
        }

        self.renderer.game_over(final_score, new_high_score);
        let line = commentary_for(final_score, &mut *self.rng);
        self.renderer.commentary(line);
    }

    /// Replace any outstanding request with a fresh one
    fn request_frame(&mut self) {
        self.cancel_frame();
        self.pending_frame = self.frames.request_frame();
        if self.pending_frame.is_none() {
            log::warn!("Frame request refused, loop stalled");
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            self.frames.cancel_frame(id);
        }
    }
}
