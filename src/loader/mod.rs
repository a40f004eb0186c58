mod csv_loader;
mod errors;

pub use csv_loader::load_transactions;
pub use errors::LoadError;
