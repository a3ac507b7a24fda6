use std::cell::RefCell;
use std::rc::Rc;

use calcbrain::{CalculatorBrain, Op, OpRegistry};
use thiserror::Error;

use crate::display::display_value;
use crate::plot::Viewport;

#[derive(Debug, Error)]
pub enum ReplErr {
    #[error("readline: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("no value to assign to {0}")]
    NoValue(String),
    #[error("missing variable name after {0:?}")]
    EmptyName(String),
    #[error("top expression can't be plotted")]
    NotPlottable,
    #[error("bad argument for {cmd}: {arg:?}")]
    BadArgument { cmd: &'static str, arg: String },
}

/// Built-ins plus ASCII spellings that are easier to type.
pub fn keyboard_ops() -> OpRegistry {
    let mut ops = OpRegistry::new();
    ops.learn(Op::binary("*", 3, |a, b| a * b));
    ops.learn(Op::binary("/", 3, |a, b| a / b));
    ops.learn(Op::unary("sqrt", f64::sqrt));
    ops.learn(Op::constant("pi", std::f64::consts::PI));
    ops
}

fn looks_numeric(token: &str) -> bool {
    let digits = token.trim_start_matches(|c: char| c == '-' || c == '+');
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') && digits != "."
}

fn assignment_target(token: &str) -> Option<&str> {
    token.strip_prefix('→').or_else(|| token.strip_prefix('>'))
}

/// A calculator screen: the brain, the value on display and the history
/// label kept up to date by the brain's observer.
pub struct Session {
    brain: CalculatorBrain,
    display: Option<f64>,
    history: Rc<RefCell<String>>,
    pub viewport: Viewport,
}

impl Session {
    pub fn new() -> Session {
        let mut brain = CalculatorBrain::with_ops(keyboard_ops());
        let history = Rc::new(RefCell::new(" ".to_string()));
        let label = history.clone();
        brain.set_observer(move |b: &CalculatorBrain| {
            *label.borrow_mut() = format!("{} =", b.description());
        });
        Session { brain, display: Some(0.0), history, viewport: Viewport::default() }
    }

    pub fn display(&self) -> String {
        display_value(self.display)
    }

    pub fn history_label(&self) -> String {
        self.history.borrow().clone()
    }

    /// Runs every token on the line, returns any extra output (plots,
    /// dumps). Stops at the first bad token.
    pub fn execute(&mut self, line: &str) -> Result<Vec<String>, ReplErr> {
        let mut output = Vec::new();
        let mut tokens = line.split_whitespace().peekable();
        while let Some(token) = tokens.next() {
            match token {
                "C" => self.clear(),
                "plot" => output.push(self.plot()?),
                "history" => output.push(self.brain.history()),
                "center" => self.viewport.center(),
                "zoom" => {
                    let scale = parse_arg("zoom", tokens.next())?;
                    self.viewport.zoom(scale);
                }
                "pan" => {
                    let dx = parse_arg("pan", tokens.next())?;
                    let dy = parse_arg("pan", tokens.next())?;
                    self.viewport.pan(dx, dy);
                }
                _ if looks_numeric(token) => {
                    let value = parse_arg("number", Some(token))?;
                    // a number typed right before →name is assigned, not entered
                    let next = tokens.peek().copied();
                    match next.and_then(|tok| assignment_target(tok).map(|name| (tok, name))) {
                        Some((tok, name)) => {
                            tokens.next();
                            self.display = Some(value);
                            self.assign(tok, name)?;
                        }
                        None => self.display = self.brain.push_operand(value),
                    }
                }
                _ => match assignment_target(token) {
                    Some(name) => self.assign(token, name)?,
                    None => self.display = self.brain.push_symbol(token),
                },
            }
        }
        Ok(output)
    }

    /// Evaluates a whole token stream once, eg: from the command line.
    pub fn evaluate_once(&mut self, input: &str) -> Result<String, ReplErr> {
        self.execute(input)?;
        Ok(format!("{} = {}", self.brain.description(), self.display()))
    }

    fn clear(&mut self) {
        self.brain.clear();
        self.display = Some(0.0);
        *self.history.borrow_mut() = " ".to_string();
    }

    fn assign(&mut self, token: &str, name: &str) -> Result<(), ReplErr> {
        if name.is_empty() {
            return Err(ReplErr::EmptyName(token.to_string()));
        }
        let value = self.display.ok_or_else(|| ReplErr::NoValue(name.to_string()))?;
        self.brain.set_variable(name, value);
        self.display = self.brain.evaluate();
        Ok(())
    }

    fn plot(&self) -> Result<String, ReplErr> {
        let f = self.brain.functionize().ok_or(ReplErr::NotPlottable)?;
        Ok(self.viewport.render(&f, &self.brain.top_description()))
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

fn parse_arg(cmd: &'static str, arg: Option<&str>) -> Result<f64, ReplErr> {
    let arg = arg.unwrap_or_default();
    arg.parse::<f64>()
        .map_err(|_| ReplErr::BadArgument { cmd, arg: arg.to_string() })
}
