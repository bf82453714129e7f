//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the host frame driver with the scene director.
//
// The host owns the display refresh and the system event callback; it
// forwards both into the engine thread through a channel, so the
// director never has to be shared across threads.
//
// Components:
// - `event`: Host system event kinds and their numeric codes
// - `interface`: Host event types and the sending handle (the contract)
// - `event_collector`: Engine-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub use event::SystemEvent;
pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::{HostEvent, HostHandle};
