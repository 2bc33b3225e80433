//! Utility helpers including math extensions and logging.

pub mod logging;
pub mod math;

pub use logging::{warn_if_step_budget_exceeded, ScopedTimer};
pub use math::*;
