use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub type UnaryFn = Rc<dyn Fn(f64) -> f64>;
pub type BinaryFn = Rc<dyn Fn(f64, f64) -> f64>;

/// Priority of anything that never needs parens: operands, names and
/// function-call style unary ops.
pub const HIGH_PRIORITY: usize = 5;

/// One entry of the op stack.
///
/// A `BinaryOp` function is called as `f(a, b)` where `a` is the operand
/// nearer the top of the stack.
#[derive(Clone)]
pub enum Op {
    Operand(f64),
    Variable(String),
    Constant(String, f64),
    UnaryOp(String, UnaryFn),
    BinaryOp(String, BinaryFn, usize), // precedence
}

impl Op {
    pub fn unary(symbol: &str, f: impl Fn(f64) -> f64 + 'static) -> Op {
        Op::UnaryOp(symbol.to_string(), Rc::new(f))
    }

    pub fn binary(symbol: &str, precedence: usize,
                  f: impl Fn(f64, f64) -> f64 + 'static) -> Op {
        Op::BinaryOp(symbol.to_string(), Rc::new(f), precedence)
    }

    pub fn constant(name: &str, value: f64) -> Op {
        Op::Constant(name.to_string(), value)
    }

    /// Registry key of this op, operands have none.
    pub fn symbol(&self) -> Option<&str> {
        match *self {
            Op::Operand(_) => None,
            Op::Variable(ref name) | Op::Constant(ref name, _) => Some(name),
            Op::UnaryOp(ref sym, _) | Op::BinaryOp(ref sym, _, _) => Some(sym),
        }
    }

    pub fn priority(&self) -> usize {
        match *self {
            Op::BinaryOp(_, _, prec) => prec,
            _ => HIGH_PRIORITY,
        }
    }
}

// same shape as the history dump: operands as floats, everything else by name
impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Op::Operand(ref value) => write!(f, "{:?}", value),
            _ => write!(f, "{}", self.symbol().unwrap_or_default()),
        }
    }
}

/// Symbol to op template mapping. Lookups are exact and case-sensitive.
#[derive(Clone)]
pub struct OpRegistry(HashMap<String, Op>);

impl OpRegistry {
    /// A registry with the calculator built-ins.
    pub fn new() -> OpRegistry {
        use std::f64::consts;
        let mut ops = OpRegistry::empty();
        ops.learn(Op::binary("✕", 3, |a, b| a * b));
        ops.learn(Op::binary("-", 2, |a, b| a - b));
        ops.learn(Op::binary("+", 2, |a, b| a + b));
        ops.learn(Op::binary("÷", 3, |a, b| a / b));
        ops.learn(Op::unary("√", f64::sqrt));
        ops.learn(Op::unary("sin", f64::sin));
        ops.learn(Op::unary("cos", f64::cos));
        ops.learn(Op::constant("π", consts::PI));
        ops.learn(Op::constant("e", consts::E));
        ops
    }

    pub fn empty() -> OpRegistry {
        OpRegistry(HashMap::new())
    }

    /// Adds `op` under its own symbol. Last registration wins. Operands and
    /// variables are not operators and are ignored.
    pub fn learn(&mut self, op: Op) {
        let sym = match op {
            Op::Operand(_) | Op::Variable(_) => {
                log::warn!("ignoring {:?}, only constants and operators can be learned", op);
                return;
            }
            _ => op.symbol().unwrap_or_default().to_string(),
        };
        log::trace!("learned op {}", sym);
        self.0.insert(sym, op);
    }

    /// Registers `f` under `symbol` with the given arity: 0 stores a
    /// constant (`f` is called once), 1 a unary op and 2 a binary op using
    /// `precedence`. Any other arity is ignored and `false` returned.
    pub fn register(&mut self, symbol: &str, arity: usize,
                    f: impl Fn(&[f64]) -> f64 + 'static,
                    precedence: Option<usize>) -> bool {
        match arity {
            0 => self.learn(Op::constant(symbol, f(&[][..]))),
            1 => self.learn(Op::unary(symbol, move |a| f(&[a][..]))),
            2 => {
                let prec = precedence.unwrap_or(HIGH_PRIORITY);
                self.learn(Op::binary(symbol, prec, move |a, b| f(&[a, b][..])))
            }
            _ => {
                log::warn!("can't register {} with arity {}", symbol, arity);
                return false;
            }
        }
        true
    }

    pub fn lookup(&self, symbol: &str) -> Option<&Op> {
        self.0.get(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| &k[..])
    }
}
