//! # crux-lifecycle
//!
//! Drives hypotheses through `proposed -> tested -> falsified/retracted`
//! based on their falsifier and latest validation result. Every transition
//! lands in the hypothesis's append-only audit trail; content-identical
//! events are dropped, so re-running the lifecycle is idempotent. Terminal
//! states (`falsified`, `retracted`) admit no further automated transition.

pub mod audit;
pub mod ranking;
pub mod transitions;

pub use ranking::{rank, RankedHypothesis};
pub use transitions::ensure_lifecycle;
