//! Errors raised at the engine boundary.
//!
//! Both variants are caller bugs: the engine refuses the input and leaves the
//! state untouched. Running out of currency is not an error; `purchase`
//! reports it as `false`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EconomyError {
    /// Frame clock reported time running backwards.
    #[error("elapsed time must be non-negative, got {0} ms")]
    NegativeElapsed(i64),
    /// Purchase requested for a track id that does not exist.
    #[error("unknown upgrade track: {0:?}")]
    UnknownTrack(String),
}
