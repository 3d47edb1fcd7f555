//! Named practice drills, each a preset configuration with a short tip

mod catalog;

pub use catalog::{DRILLS, Drill, FALLBACK_DRILL, explanation};

#[cfg(test)]
mod tests;
