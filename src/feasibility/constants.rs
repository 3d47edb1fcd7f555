// Bounded-cost limits for the division feasibility scan

/// Divisor ranges up to this size are scanned exhaustively
pub const EXHAUSTIVE_SCAN_LIMIT: i64 = 10_000;
/// Divisors sampled from larger ranges before reporting infeasible
pub const DIVISOR_SAMPLE_SIZE: usize = 500;
