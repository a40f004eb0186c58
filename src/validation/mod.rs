mod errors;
#[cfg(test)]
mod tests;
mod validator;

pub use errors::ValidationError;
pub use validator::{ValidationMode, ValidationReport, Validator};
