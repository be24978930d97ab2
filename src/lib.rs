//! Typing Clicker: an incremental clicker game.
//!
//! The library is the game model only. [`economy`] is the authoritative
//! state and rules; [`time`] converts frame timestamps into the elapsed
//! milliseconds the economy consumes. Rendering and input live in the
//! browser front-end binary.
//!
//! The engine logs through `tracing` and installs no subscriber. The browser
//! binary installs `tracing-wasm` at INFO; other users see the events only if
//! they install a subscriber of their own.

pub mod economy;
pub mod time;
