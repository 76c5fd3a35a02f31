//! Contains executors of the operations, gathering the timing samples to pass to
//! [crate::statistics] in order to have them reduced into reports

pub(crate) mod common;
pub mod clock;
pub mod engine;
pub mod standard;
pub mod containers;
