use std::collections::HashMap;

use crate::ops::{Op, OpRegistry};

/// Gets told whenever a push changes the brain's history.
pub trait HistoryObserver {
    fn history_updated(&mut self, brain: &CalculatorBrain);
}

impl<F: FnMut(&CalculatorBrain)> HistoryObserver for F {
    fn history_updated(&mut self, brain: &CalculatorBrain) {
        self(brain)
    }
}

/// A stack of ops plus the variable bindings they are evaluated against.
pub struct CalculatorBrain {
    pub(crate) stack: Vec<Op>,
    pub(crate) vars: HashMap<String, f64>,
    known_ops: OpRegistry,
    observer: Option<Box<dyn HistoryObserver>>,
}

impl CalculatorBrain {
    pub fn new() -> CalculatorBrain {
        CalculatorBrain::with_ops(OpRegistry::new())
    }

    pub fn with_ops(known_ops: OpRegistry) -> CalculatorBrain {
        CalculatorBrain {
            stack: Vec::new(),
            vars: HashMap::new(),
            known_ops,
            observer: None,
        }
    }

    pub fn ops(&self) -> &OpRegistry {
        &self.known_ops
    }

    /// Replaces the current observer, if any.
    pub fn set_observer(&mut self, observer: impl HistoryObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn remove_observer(&mut self) {
        self.observer = None;
    }

    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        self.push(Op::Operand(value))
    }

    /// Pushes a known op or constant, anything else becomes a variable.
    pub fn push_symbol(&mut self, symbol: &str) -> Option<f64> {
        let op = match self.known_ops.lookup(symbol) {
            Some(op) => op.clone(),
            None => Op::Variable(symbol.to_string()),
        };
        self.push(op)
    }

    /// Pushes a known op. Unknown symbols leave the stack untouched.
    pub fn push_operator(&mut self, symbol: &str) -> Option<f64> {
        match self.known_ops.lookup(symbol) {
            Some(op) => {
                let op = op.clone();
                self.push(op)
            }
            None => {
                log::debug!("ignoring unknown operator {:?}", symbol);
                None
            }
        }
    }

    pub fn set_variable(&mut self, name: &str, value: f64) {
        log::debug!("{} = {}", name, value);
        self.vars.insert(name.to_string(), value);
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    pub fn clear(&mut self) {
        log::debug!("clearing {} ops and {} variables", self.stack.len(), self.vars.len());
        self.stack.clear();
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Raw dump of the stack, eg: `[3.0, 4.0, +]`.
    pub fn history(&self) -> String {
        format!("{:?}", self.stack)
    }

    fn push(&mut self, op: Op) -> Option<f64> {
        self.stack.push(op);
        log::trace!("history {}", self.history());
        self.notify();
        self.evaluate()
    }

    fn notify(&mut self) {
        // observer gets a shared view of the brain, so park it meanwhile
        if let Some(mut observer) = self.observer.take() {
            observer.history_updated(self);
            self.observer = Some(observer);
        }
    }
}

impl Default for CalculatorBrain {
    fn default() -> Self {
        CalculatorBrain::new()
    }
}
