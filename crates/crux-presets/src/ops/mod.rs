//! One module per stress-test operation.

pub mod add_edge;
pub mod challenge;
pub mod remove_edge;
pub mod remove_variable;
