use crate::brain::CalculatorBrain;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}
pub(crate) use fuzzy_eq;

/// Numbers are entered as operands, anything else goes through `push_symbol`.
pub fn brain_with(tokens: &[&str]) -> CalculatorBrain {
    let mut brain = CalculatorBrain::new();
    for token in tokens {
        match token.parse::<f64>() {
            Ok(value) => brain.push_operand(value),
            Err(_) => brain.push_symbol(token),
        };
    }
    brain
}
