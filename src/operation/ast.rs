/// The four arithmetic operations a practice problem can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Subtraction and division are the only operations with configurations
    /// that can admit no valid problem at all.
    pub fn needs_feasibility_check(self) -> bool {
        matches!(self, Operation::Sub | Operation::Div)
    }
}
