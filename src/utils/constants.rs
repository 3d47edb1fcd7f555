// Bounds accepted for a practice configuration
pub const MIN_DIGITS: u32 = 1;
pub const MAX_DIGITS: u32 = 8;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 1000;
pub const MAX_FIXED_OPERAND: i64 = 99_999_999;
// Longest answer text considered; anything past it is dropped
pub const MAX_ANSWER_LEN: usize = 16;
// Division never uses the trivial divisor and always has a quotient of at least two
pub const MIN_DIVISOR: i64 = 2;
pub const MIN_QUOTIENT: i64 = 2;
