//! Cost and revenue analytics derived from a roster.

mod daily_stats;

pub use daily_stats::{daily_stats, week_stats, DayStats, DEFAULT_HOURLY_RATE};
