/*!
Reports for the context.
*/

use crate::context::ContextState;

mod trace;
pub use trace::{Trace, TraceEntry};

/// High-level reports regarding a proof attempt.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived: the query follows from the premises.
    Proven,

    /// The clause set saturated without deriving the empty clause: the query was not proven.
    Saturated,

    /// The step bound was reached without deriving the empty clause: the attempt is
    /// inconclusive, reported as not proven.
    BoundReached,

    /// No proof attempt has concluded, for some reason.
    Unknown,
}

impl Report {
    /// The boolean outcome: whether the query was proven.
    pub fn proven(&self) -> bool {
        matches!(self, Report::Proven)
    }
}

impl From<&ContextState> for Report {
    fn from(state: &ContextState) -> Self {
        match state {
            ContextState::Fresh | ContextState::Running => Self::Unknown,
            ContextState::Proven => Self::Proven,
            ContextState::Saturated => Self::Saturated,
            ContextState::BoundReached => Self::BoundReached,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proven => write!(f, "Proven"),
            Self::Saturated => write!(f, "Saturated"),
            Self::BoundReached => write!(f, "BoundReached"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
