pub mod collector;
pub mod questions;

pub use collector::{Collector, Step};
pub use questions::QuestionPool;
