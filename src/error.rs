//! Error types surfaced at the engine boundary.
//!
//! Three kinds of error the core can raise: configuration errors (bad
//! parameters, diagnosed before a run starts), invariant violations (an
//! unsound strategy or internal bug, aborting a run in progress), and
//! missing-component errors (no operator registered for a required
//! kind). Errors raised from a user-supplied `Chromosome` callback are
//! not modeled here; they propagate through the engine unchanged.

use thiserror::Error;

/// Errors raised by the engine itself, as opposed to errors propagated
/// unchanged from a user-supplied `Chromosome` callback.
#[derive(Debug, Error)]
pub enum GaError {
    /// An invalid parameter was supplied at construction or registration
    /// time. The engine never starts a run while one of these is
    /// outstanding.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A strategy or the orchestrator itself reached a state its
    /// invariants forbid. Reaching this is a programming bug in a
    /// strategy, not a user input mistake.
    #[error("invariant violation at epoch {epoch}: {message}")]
    Invariant { epoch: u64, message: String },

    /// The user cleared a registration leaving no operator of a required
    /// kind, and strict mode is enabled.
    #[error("missing component: no {kind} strategy registered")]
    MissingComponent { kind: &'static str },
}

impl GaError {
    pub fn configuration(message: impl Into<String>) -> Self {
        GaError::Configuration {
            message: message.into(),
        }
    }

    pub fn invariant(epoch: u64, message: impl Into<String>) -> Self {
        GaError::Invariant {
            epoch,
            message: message.into(),
        }
    }

    pub fn missing_component(kind: &'static str) -> Self {
        GaError::MissingComponent { kind }
    }
}

/// Shorthand used throughout the crate.
pub type GaResult<T> = Result<T, GaError>;

/// Return early with a `GaError::Configuration` built from a format
/// string.
macro_rules! config_bail {
    ($($arg:tt)*) => {
        return Err($crate::error::GaError::configuration(format!($($arg)*)))
    };
}

/// Fail with a `GaError::Configuration` unless `cond` holds.
macro_rules! config_ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            config_bail!($($arg)*);
        }
    };
}

pub(crate) use config_bail;
pub(crate) use config_ensure;
