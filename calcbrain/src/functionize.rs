use std::rc::Rc;

use crate::brain::CalculatorBrain;
use crate::ops::Op;

/// A single variable function, see [`CalculatorBrain::functionize`].
pub type PlotFn = Rc<dyn Fn(f64) -> f64>;

impl CalculatorBrain {
    /// Turns the newest expression into `f(x)`, every variable in it stands
    /// for `x` whatever its name. Variable bindings are not consulted.
    pub fn functionize(&self) -> Option<PlotFn> {
        self.functionize_region(self.stack.len()).0
    }

    fn functionize_region(&self, end: usize) -> (Option<PlotFn>, usize) {
        if end == 0 {
            return (None, 0);
        }
        let rest = end - 1;
        match self.stack[rest] {
            Op::Operand(value) | Op::Constant(_, value) => {
                let constant: PlotFn = Rc::new(move |_: f64| value);
                (Some(constant), rest)
            }
            Op::Variable(_) => {
                let identity: PlotFn = Rc::new(|x: f64| x);
                (Some(identity), rest)
            }
            Op::UnaryOp(_, ref f) => match self.functionize_region(rest) {
                (Some(g), rest) => {
                    let f = f.clone();
                    let composed: PlotFn = Rc::new(move |x: f64| f(g(x)));
                    (Some(composed), rest)
                }
                _ => (None, end),
            },
            Op::BinaryOp(_, ref f, _) => {
                if let (Some(a), rest) = self.functionize_region(rest) {
                    if let (Some(b), rest) = self.functionize_region(rest) {
                        let f = f.clone();
                        let composed: PlotFn = Rc::new(move |x: f64| f(a(x), b(x)));
                        return (Some(composed), rest);
                    }
                }
                (None, end)
            }
        }
    }
}
