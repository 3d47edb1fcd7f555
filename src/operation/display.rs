use std::fmt;
use std::str::FromStr;

use crate::operation::ast::Operation;
use crate::operation::errors::OperationError;

impl Operation {
    /// ASCII symbol, as typed on the command line
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }

    /// Symbol used when a problem is shown to the learner
    pub fn display_symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '−',
            Operation::Mul => '×',
            Operation::Div => '÷',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operation::Add),
            "-" | "−" | "sub" | "minus" => Ok(Operation::Sub),
            "*" | "×" | "x" | "mul" | "times" => Ok(Operation::Mul),
            "/" | "÷" | "div" => Ok(Operation::Div),
            other => Err(OperationError::UnknownSymbol(other.to_string())),
        }
    }
}
