//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Host-to-engine interface types.
//
// Defines what a host frame driver may send to the engine thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{SendError, Sender};

//=== Internal Dependencies ===============================================

use super::SystemEvent;

//=== HostEvent ===========================================================

/// Events sent from the host to the engine over a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A host system event with its auxiliary argument.
    System { event: SystemEvent, arg: u32 },

    /// The host is going away; the engine finalizes and stops.
    Shutdown,
}

//=== HostHandle ==========================================================

/// Cloneable sending side handed to the host.
#[derive(Debug, Clone)]
pub struct HostHandle {
    sender: Sender<HostEvent>,
}

impl HostHandle {
    pub(crate) fn new(sender: Sender<HostEvent>) -> Self {
        Self { sender }
    }

    /// Sends a system event. Blocks while the channel is full.
    ///
    /// Call it from the host thread only. Sending from a scene callback
    /// on the engine thread deadlocks once the channel fills up, since
    /// nothing drains it until the callback returns. Scenes switch
    /// through `SceneSwitcher` instead.
    ///
    /// Fails only once the engine has stopped.
    pub fn system_event(&self, event: SystemEvent, arg: u32) -> Result<(), SendError<HostEvent>> {
        self.sender.send(HostEvent::System { event, arg })
    }

    /// Asks the engine to finalize and leave its loop. Blocks like
    /// [`HostHandle::system_event`].
    pub fn shutdown(&self) -> Result<(), SendError<HostEvent>> {
        self.sender.send(HostEvent::Shutdown)
    }

    /// Number of events waiting for the engine.
    pub fn pending(&self) -> usize {
        self.sender.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn pending_counts_unread_events() {
        let (tx, rx) = bounded(4);
        let handle = HostHandle::new(tx);

        assert_eq!(handle.pending(), 0);
        handle.system_event(SystemEvent::Pause, 0).unwrap();
        handle.shutdown().unwrap();
        assert_eq!(handle.pending(), 2);

        assert_eq!(
            rx.recv(),
            Ok(HostEvent::System {
                event: SystemEvent::Pause,
                arg: 0
            })
        );
        assert_eq!(handle.pending(), 1);
    }

    #[test]
    fn send_fails_once_engine_is_gone() {
        let (tx, rx) = bounded(1);
        let handle = HostHandle::new(tx);
        drop(rx);

        assert!(handle.system_event(SystemEvent::Lock, 0).is_err());
        assert!(handle.shutdown().is_err());
    }
}
