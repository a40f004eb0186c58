mod features;
mod transaction;

pub use features::Features;
pub use transaction::Transaction;
#[cfg(test)]
pub use transaction::parse_txn_time;
