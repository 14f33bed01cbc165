//! Unsynchronized containers for single-owner use. Mutation goes through `&mut self`,
//! so the borrow checker enforces exclusive access at compile time.

mod queue;
mod set;
mod stack;

pub use queue::Queue;
pub use set::{Set, stable_set};
pub use stack::Stack;
