use crate::brain::CalculatorBrain;
use crate::ops::Op;
use std::fmt::{self, Write};

const MISSING: &str = "?";

// Pending output while rendering one expression. Pieces are popped off a
// stack so nesting depth never turns into call depth.
enum Piece<'a> {
    // expression ending right before this stack index
    Group(usize),
    // operand of an op with the given precedence: `?` when its end is 0,
    // in parens when it binds looser than the op
    Operand(usize, usize),
    Text(&'a str),
}

impl CalculatorBrain {
    /// Infix rendering of every expression on the stack, oldest first,
    /// separated by `", "`.
    pub fn description(&self) -> String {
        let starts = self.group_starts();
        let mut ends = Vec::new();
        let mut end = self.stack.len();
        while end > 0 {
            ends.push(end);
            end = starts[end - 1];
        }
        let mut out = String::new();
        for (i, end) in ends.into_iter().rev().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_group(&starts, end, &mut out);
        }
        out
    }

    /// Infix rendering of just the newest expression.
    pub fn top_description(&self) -> String {
        let mut out = String::new();
        if !self.stack.is_empty() {
            self.write_group(&self.group_starts(), self.stack.len(), &mut out);
        }
        out
    }

    // starts[i] is where the expression topped by op i begins, which is 0
    // when it ran out of operands.
    fn group_starts(&self) -> Vec<usize> {
        let mut starts: Vec<usize> = Vec::with_capacity(self.stack.len());
        for (i, op) in self.stack.iter().enumerate() {
            let start = match *op {
                Op::UnaryOp(..) if i > 0 => starts[i - 1],
                // the second operand only exists if the first left room
                Op::BinaryOp(..) if i > 0 => match starts[i - 1] {
                    0 => 0,
                    first => starts[first - 1],
                },
                Op::UnaryOp(..) | Op::BinaryOp(..) => 0,
                _ => i,
            };
            starts.push(start);
        }
        starts
    }

    fn write_group(&self, starts: &[usize], end: usize, out: &mut String) {
        let mut pending = vec![Piece::Group(end)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Operand(0, _) => out.push_str(MISSING),
                Piece::Operand(end, prec) if self.stack[end - 1].priority() < prec => {
                    out.push('(');
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Group(end));
                }
                Piece::Operand(end, _) => pending.push(Piece::Group(end)),
                Piece::Group(end) => match self.stack[end - 1] {
                    Op::Operand(value) => write_number(value, out),
                    Op::Variable(ref name) | Op::Constant(ref name, _) => out.push_str(name),
                    Op::UnaryOp(ref sym, _) => {
                        out.push_str(sym);
                        out.push('(');
                        pending.push(Piece::Text(")"));
                        pending.push(Piece::Operand(end - 1, 0));
                    }
                    Op::BinaryOp(ref sym, _, prec) => {
                        // rendered as "second sym first", first sits right below the op
                        let first = end - 1;
                        let second = match first {
                            0 => 0,
                            _ => starts[first - 1],
                        };
                        pending.push(Piece::Operand(first, prec));
                        pending.push(Piece::Text(" "));
                        pending.push(Piece::Text(&sym[..]));
                        pending.push(Piece::Text(" "));
                        pending.push(Piece::Operand(second, prec));
                    }
                },
            }
        }
    }
}

// huge and tiny magnitudes get exponent notation
fn write_number(value: f64, out: &mut String) {
    let magnitude = value.abs();
    let _ = if magnitude != 0.0 && !(1.0e-6..1.0e16).contains(&magnitude) {
        write!(out, "{:e}", value)
    } else {
        write!(out, "{}", value)
    };
}

impl fmt::Display for CalculatorBrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
