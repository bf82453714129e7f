//=========================================================================
// System Event Types
//
// Host system events as seen by scenes.
//
// Responsibilities:
// - Represent the host's numeric event codes in a portable form
// - Keep unknown codes intact so they can still be forwarded
// - Tell the frame driver which events are lifecycle-only
//
//=========================================================================

use std::fmt;

//=== SystemEvent Enum ====================================================
// One variant per host event kind, in host code order (0..=9).
//
// `Init` and `Terminate` belong to the frame driver and are never
// forwarded to scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemEvent {
    Init,
    InitLua,
    Lock,
    Unlock,
    Pause,
    Resume,
    Terminate,
    KeyPressed,
    KeyReleased,
    LowPower,

    //--- Fallback ---------------------------------------------------------
    // Codes this crate doesn't know about yet.
    Other(u32),
}

impl SystemEvent {
    /// The host's numeric code for this event.
    pub fn code(self) -> u32 {
        match self {
            Self::Init => 0,
            Self::InitLua => 1,
            Self::Lock => 2,
            Self::Unlock => 3,
            Self::Pause => 4,
            Self::Resume => 5,
            Self::Terminate => 6,
            Self::KeyPressed => 7,
            Self::KeyReleased => 8,
            Self::LowPower => 9,
            Self::Other(code) => code,
        }
    }

    /// Start-up and shutdown events, handled by the driver itself.
    pub fn is_lifecycle(self) -> bool {
        matches!(self, Self::Init | Self::Terminate)
    }
}

impl From<u32> for SystemEvent {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Init,
            1 => Self::InitLua,
            2 => Self::Lock,
            3 => Self::Unlock,
            4 => Self::Pause,
            5 => Self::Resume,
            6 => Self::Terminate,
            7 => Self::KeyPressed,
            8 => Self::KeyReleased,
            9 => Self::LowPower,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for SystemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "Other({})", code),
            known => write!(f, "{:?}", known),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
