//! Utils module split into submodules

pub mod constants;
mod digits;
mod errors;
mod validation;

pub use digits::{digit_range, quotient_range};
pub use errors::UtilsError;
pub use validation::{
    clamp_count, clamp_digit_count, parse_answer, validate_count, validate_digit_count,
};

#[cfg(test)]
mod tests;
