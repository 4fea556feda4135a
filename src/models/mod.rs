//! Data model: metric categories, toggle flags, and per-tick snapshots.

mod category;
mod sample;

pub use category::{CategoryToggles, MetricCategory};
pub use sample::{BatteryReading, MemoryReading, MetricsSnapshot};
