//! Verse audio: the vibe playlist, the per-page playback session, and the
//! listen-log debounce.

mod listen_log;
mod playlist;
mod session;

pub use listen_log::*;
pub use playlist::*;
pub use session::*;
