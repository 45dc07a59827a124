//! Interactive overlay core
//!
//! - Selection state and hit-testing
//! - Press event routing
//! - Off-thread region handoff

pub mod event;
pub mod feed;
pub mod state;

pub use event::{EventOutcome, PressEvent, PressPhase, handle_press};
pub use feed::{RegionReceiver, RegionSender, region_channel};
pub use state::{JoinOrder, OverlayState};
