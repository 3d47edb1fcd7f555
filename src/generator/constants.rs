// Configuration constants for problem generation

/// Draws allowed per problem, both for finding a clean division and for
/// avoiding the previous operand pair. After the last attempt the generator
/// accepts what it has (or the fallback problem) instead of looping forever.
pub const MAX_GENERATION_ATTEMPTS: usize = 300;

pub const DEFAULT_A_RANGE: (i64, i64) = (1, 99);
pub const DEFAULT_B_RANGE: (i64, i64) = (1, 9);
pub const DEFAULT_DIVIDEND_RANGE: (i64, i64) = (10, 999);
pub const DEFAULT_DIVISOR_RANGE: (i64, i64) = (2, 9);

/// Quotients drawn when the divisor is pinned by a drill
pub const FIXED_DIVISOR_MULTIPLIERS: (i64, i64) = (2, 20);

/// Returned when free division cannot find a clean pair: 4 ÷ 2 = 2
pub const FALLBACK_DIVISION: (i64, i64) = (4, 2);
/// Returned when subtraction has no strictly positive answer: 2 − 1 = 1
pub const FALLBACK_SUBTRACTION: (i64, i64) = (2, 1);
