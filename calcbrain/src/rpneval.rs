use crate::brain::CalculatorBrain;
use crate::ops::Op;

impl CalculatorBrain {
    /// Evaluates the stack, `None` if the top expression is incomplete or
    /// uses an unbound variable.
    pub fn evaluate(&self) -> Option<f64> {
        let (result, _) = self.eval_region(self.stack.len());
        log::debug!("{} => {:?}", self.history(), result);
        result
    }

    // Evaluates the expression ending right before `end` and returns the
    // result alongside where the unconsumed part of the stack ends.
    fn eval_region(&self, end: usize) -> (Option<f64>, usize) {
        if end == 0 {
            return (None, 0);
        }
        let rest = end - 1;
        match self.stack[rest] {
            Op::Operand(value) | Op::Constant(_, value) => (Some(value), rest),
            Op::Variable(ref name) => (self.vars.get(name).copied(), rest),
            Op::UnaryOp(_, ref f) => match self.eval_region(rest) {
                (Some(operand), rest) => (Some(f(operand)), rest),
                _ => (None, end),
            },
            Op::BinaryOp(_, ref f, _) => {
                if let (Some(a), rest) = self.eval_region(rest) {
                    if let (Some(b), rest) = self.eval_region(rest) {
                        return (Some(f(a, b)), rest);
                    }
                }
                (None, end)
            }
        }
    }
}
