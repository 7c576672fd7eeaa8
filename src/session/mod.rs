pub mod diff;
pub mod metrics;
pub mod result;
pub mod tracker;
