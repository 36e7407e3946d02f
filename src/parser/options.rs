use crate::expr::BinaryOp;

/// Grouping of a chain of `^` operators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Associativity {
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    #[default]
    Left,
    /// `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
    Right,
}

/// Deepest tree the parser builds by default. Evaluation, rendering and
/// differentiation recurse once per level.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub power_associativity: Associativity,
    /// Input whose tree would be deeper than this is rejected.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            power_associativity: Associativity::Left,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_power_associativity(mut self, associativity: Associativity) -> Self {
        self.power_associativity = associativity;
        self
    }

    pub(crate) fn associativity(&self, op: BinaryOp) -> Associativity {
        match op {
            BinaryOp::Pow => self.power_associativity,
            _ => Associativity::Left,
        }
    }

    /// Whether `top`, already on the operator stack, is applied before
    /// `incoming` is pushed.
    pub(crate) fn pops_before(&self, top: BinaryOp, incoming: BinaryOp) -> bool {
        match self.associativity(incoming) {
            Associativity::Left => top.precedence() >= incoming.precedence(),
            Associativity::Right => top.precedence() > incoming.precedence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_precedence_pops_only_when_left_associative() {
        let left = ParseOptions::new();
        let right = ParseOptions::new().with_power_associativity(Associativity::Right);
        assert!(left.pops_before(BinaryOp::Pow, BinaryOp::Pow));
        assert!(!right.pops_before(BinaryOp::Pow, BinaryOp::Pow));
        assert!(right.pops_before(BinaryOp::Sub, BinaryOp::Add));
        assert!(!right.pops_before(BinaryOp::Add, BinaryOp::Mul));
    }
}
