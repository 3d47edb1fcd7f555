use log::debug;

use crate::generator::ProblemConfig;
use crate::operation::Operation;

const DRILL_LENGTH: usize = 10;
const NO_EXPLANATION: &str = "No explanation found for this drill.";

/// A preset practice configuration aimed at one mental-math technique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drill {
    pub id: &'static str,
    pub explanation: &'static str,
    pub operation: Operation,
    pub a_digits: Option<u32>,
    pub b_digits: Option<u32>,
    pub b_fixed: Option<i64>,
    pub count: usize,
}

impl Drill {
    const fn digits(
        id: &'static str,
        operation: Operation,
        a_digits: u32,
        b_digits: u32,
        explanation: &'static str,
    ) -> Self {
        Self {
            id,
            explanation,
            operation,
            a_digits: Some(a_digits),
            b_digits: Some(b_digits),
            b_fixed: None,
            count: DRILL_LENGTH,
        }
    }

    const fn fixed_b(
        id: &'static str,
        operation: Operation,
        a_digits: u32,
        b_fixed: i64,
        explanation: &'static str,
    ) -> Self {
        Self {
            id,
            explanation,
            operation,
            a_digits: Some(a_digits),
            b_digits: None,
            b_fixed: Some(b_fixed),
            count: DRILL_LENGTH,
        }
    }

    pub fn find(id: &str) -> Option<&'static Drill> {
        DRILLS.iter().find(|drill| drill.id == id)
    }

    /// The drill named `id`, or the general warm-up drill for unknown ids
    pub fn lookup(id: &str) -> &'static Drill {
        Self::find(id).unwrap_or_else(|| {
            debug!("Unknown drill '{}', using fallback", id);
            &FALLBACK_DRILL
        })
    }

    pub fn config(&self) -> ProblemConfig {
        ProblemConfig {
            a_digits: self.a_digits,
            b_digits: self.b_digits,
            a_fixed: None,
            b_fixed: self.b_fixed,
            operation: self.operation,
            count: self.count,
        }
    }
}

pub static DRILLS: [Drill; 9] = [
    Drill::digits(
        "add2digit",
        Operation::Add,
        2,
        2,
        "When adding 2-digit numbers, split them into tens and ones. Example: 47+36 = (40+30)+(7+6).",
    ),
    Drill::digits(
        "add3digit",
        Operation::Add,
        3,
        3,
        "For 3-digit numbers, add hundreds, tens, and ones separately.",
    ),
    Drill::digits(
        "sub2digit",
        Operation::Sub,
        2,
        2,
        "Subtract tens and then ones, borrowing if needed.",
    ),
    Drill::digits(
        "sub2digit_comp",
        Operation::Sub,
        2,
        2,
        "Compensation strategy: Adjust numbers to make subtraction easier.",
    ),
    Drill::digits(
        "sub3digit",
        Operation::Sub,
        3,
        3,
        "Subtract hundreds, tens, and ones separately with borrowing when required.",
    ),
    Drill::fixed_b(
        "mult11",
        Operation::Mul,
        2,
        11,
        "To multiply a 2-digit number by 11, add the digits and put the result in the middle.",
    ),
    Drill::digits(
        "mult2x1",
        Operation::Mul,
        2,
        1,
        "Break a 2-digit number into tens and ones, then multiply each by the 1-digit number.",
    ),
    Drill::fixed_b(
        "mult5",
        Operation::Mul,
        2,
        5,
        "Multiply by 10 and divide by 2 to quickly calculate ×5.",
    ),
    Drill::fixed_b(
        "div5",
        Operation::Div,
        3,
        5,
        "To divide by 5, double the number and then divide by 10.",
    ),
];

pub static FALLBACK_DRILL: Drill = Drill::digits(
    "warmup",
    Operation::Add,
    2,
    1,
    "Add a 1-digit number to a 2-digit number.",
);

/// Tip text for a drill id
pub fn explanation(id: &str) -> &'static str {
    Drill::find(id).map_or(NO_EXPLANATION, |drill| drill.explanation)
}
