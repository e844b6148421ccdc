//! Platform abstraction layer
//!
//! The seams between the simulation and the outside world:
//! - Time (monotonic timestamps)
//! - Input events, staged as intents
//! - Rendering of a read-only frame view
//! - Frame callback scheduling

pub mod clock;
pub mod input;
pub mod render;
pub mod schedule;

pub use clock::{Clock, ManualClock};
pub use input::{InputQueue, Intent};
pub use render::{FrameView, LogRenderer, Renderer};
pub use schedule::{FrameScheduler, ManualScheduler};
