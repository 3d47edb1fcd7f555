pub mod constants;
mod core;

pub use core::FeasibilityChecker;

#[cfg(test)]
mod tests;
