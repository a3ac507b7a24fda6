pub use brain::{CalculatorBrain, HistoryObserver};
pub use functionize::PlotFn;
pub use ops::{BinaryFn, Op, OpRegistry, UnaryFn, HIGH_PRIORITY};

mod brain;
mod functionize;
mod ops;
mod rpneval;
mod rpnprint;

#[cfg(test)]
mod test_helpers;
