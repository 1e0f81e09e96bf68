//! Frame scheduling
//!
//! The game asks for one frame at a time and keeps the returned handle, so
//! leaving `Playing` can cancel the outstanding request instead of letting
//! an orphaned tick run after game over.

/// Handle of a requested frame (a `requestAnimationFrame` id on the web)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub i32);

/// Requests that `Game::frame` runs at the next display refresh
pub trait FrameScheduler {
    /// `None` if no frame could be requested
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Scheduler for headless runs and tests: the caller pumps frames itself
/// while the game holds a pending handle.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests cancelled so far
    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        self.next_id = self.next_id.wrapping_add(1);
        Some(FrameId(self.next_id))
    }

    fn cancel_frame(&mut self, id: FrameId) {
        log::trace!("Frame {:?} cancelled", id);
        self.cancelled += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut frames = ManualScheduler::new();
        let a = frames.request_frame().unwrap();
        let b = frames.request_frame().unwrap();
        assert_ne!(a, b);
        frames.cancel_frame(a);
        assert_eq!(frames.cancelled(), 1);
    }
}
