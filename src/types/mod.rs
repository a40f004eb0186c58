mod amount;
mod errors;
mod month;

pub use amount::Amount;
pub use month::MonthBucket;

/// Wall-clock hour of day, always in `0..HOURS_PER_DAY`.
pub type Hour = u8;

pub const HOURS_PER_DAY: usize = 24;
