pub mod dice;
pub mod error;
mod evaluator;
pub mod help;
mod parser;
pub mod roll;
pub mod roller;

pub use roller::evaluate;
