//=========================================================================
// Event Collector
//=========================================================================
//
// Host event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<HostEvent> → collect_frame() → events → TickControl
//
// Bounded polling prevents a chatty host from starving update().
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::HostEvent;
use super::SystemEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects host events for one frame.
pub(crate) struct EventCollector {
    receiver: Receiver<HostEvent>,
    events: Vec<(SystemEvent, u32)>,
    max_per_frame: usize,
}

impl EventCollector {
    pub(crate) const DEFAULT_MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<HostEvent>) -> Self {
        Self::with_limit(receiver, Self::DEFAULT_MAX_EVENTS_PER_FRAME)
    }

    pub(crate) fn with_limit(receiver: Receiver<HostEvent>, max_per_frame: usize) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(4),
            max_per_frame,
        }
    }

    /// Collects pending host events (bounded to prevent starvation).
    ///
    /// Collection stops at `Terminate`, `Shutdown` or disconnect; events
    /// gathered before that stay available through [`Self::events`].
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < self.max_per_frame {
            match self.receiver.try_recv() {
                Ok(event) => {
                    drained += 1;
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Disconnected) => {
                    debug!("Host channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= self.max_per_frame {
            warn!("Host event backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Events collected this frame, in arrival order.
    pub(crate) fn events(&self) -> &[(SystemEvent, u32)] {
        &self.events
    }

    fn handle_event(&mut self, event: HostEvent) -> TickControl {
        match event {
            HostEvent::System {
                event: SystemEvent::Terminate,
                ..
            }
            | HostEvent::Shutdown => TickControl::Exit,
            HostEvent::System { event, arg } => {
                self.events.push((event, arg));
                TickControl::Continue
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
