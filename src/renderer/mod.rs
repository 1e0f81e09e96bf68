//! Presentation layer
//!
//! The simulation never touches a display tree. Once per frame the driver
//! hands a [`RenderState`] to a [`RenderSink`], plus discrete events when
//! something happens. On the web the sink is the DOM; natively it logs.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;

pub use crate::sim::RenderState;

/// Presentation collaborator
pub trait RenderSink {
    /// Per-frame visual state
    fn render(&mut self, state: &RenderState);

    fn game_started(&mut self) {}

    /// A point was scored; `speed` is the hand speed from now on
    fn score_incremented(&mut self, _score: u32, _speed: f32) {}

    fn game_over(&mut self, _final_score: u32, _new_high_score: bool) {}

    /// Game-over one-liner
    fn commentary(&mut self, _text: &str) {}

    /// Best score to display (at startup and whenever it is beaten)
    fn best_score(&mut self, _score: u32) {}
}

/// Headless presenter that reports through the log
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogRenderer {
    fn render(&mut self, state: &RenderState) {
        self.frames += 1;
        log::trace!(
            "hand {:>6.1}° pig {:>5.1} glow {}",
            state.hand_angle,
            state.actor_rendered_y,
            state.beat_glow_active
        );
    }

    fn game_started(&mut self) {
        log::info!("Go!");
    }

    fn score_incremented(&mut self, score: u32, speed: f32) {
        log::info!(
            "+1 -> {} ({})",
            score,
            crate::sim::SpeedLabel::classify(speed).as_str()
        );
    }

    fn game_over(&mut self, final_score: u32, new_high_score: bool) {
        if new_high_score {
            log::info!("New best: {}", final_score);
        } else {
            log::info!("Final score: {}", final_score);
        }
    }

    fn commentary(&mut self, text: &str) {
        log::info!("\"{}\"", text);
    }

    fn best_score(&mut self, score: u32) {
        log::info!("Best score: {}", score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Session;
    use crate::tuning::Tuning;

    #[test]
    fn test_log_renderer_counts_frames() {
        let session = Session::new(Tuning::default(), 0);
        let mut renderer = LogRenderer::new();
        renderer.render(&session.render_state());
        renderer.render(&session.render_state());
        renderer.score_incremented(1, 2.4);
        assert_eq!(renderer.frames(), 2);
    }
}
