use log::debug;

use crate::operation::ast::Operation;
use crate::operation::errors::OperationError;

impl Operation {
    /// Apply the operation with exact integer arithmetic.
    ///
    /// Division truncates toward zero; generated division problems always
    /// divide cleanly, so the quotient is exact for them.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - dividing by zero
    /// - the result does not fit in an `i64`
    pub fn apply(self, a: i64, b: i64) -> Result<i64, OperationError> {
        let result = match self {
            Operation::Add => a.checked_add(b),
            Operation::Sub => a.checked_sub(b),
            Operation::Mul => a.checked_mul(b),
            Operation::Div => {
                if b == 0 {
                    debug!("Division by zero attempted: {} / 0", a);
                    return Err(OperationError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };

        result.ok_or(OperationError::Overflow(self.symbol()))
    }
}
