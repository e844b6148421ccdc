//! Frame callback scheduling

/// "Call me again next display refresh".
///
/// Only the frame driver calls this, and it keeps at most one request
/// outstanding.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Records requests for a loop to poll (headless runs and tests)
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    /// Total requests made, for diagnostics
    pub requests: u64,
}

impl ManualScheduler {
    /// Consume the pending request, if any
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}
