//! # crux-resolve
//!
//! Normalizes a model reference or inline specification into one canonical
//! [`ResolvedModel`](crux_core::models::ResolvedModel). Inline input is pure;
//! reference input performs exactly one registry read.

pub mod evidence;
pub mod normalize;
pub mod resolver;

pub use resolver::ModelResolver;
