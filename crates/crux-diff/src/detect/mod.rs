//! Disagreement detectors, one module per atom family. Each detector
//! iterates over canonically sorted keys so atom order never depends on
//! insertion order.

pub mod edges;
pub mod interventions;
pub mod statements;
