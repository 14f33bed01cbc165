//! Generic container primitives — FIFO queues, LIFO stacks and hash sets — each
//! available in a plain (single-owner, unsynchronized) and a thread-safe variant.
//!
//! The plain containers in [`plain`] are thin wrappers over their std backing
//! stores, for code that owns its collection exclusively. The containers in
//! [`safe`] are internally synchronized and can be shared across threads behind
//! an `Arc`, trading a lock acquisition per operation for that freedom.
//!
//! Every container's `new()`/`Default` is an allocation-free empty value, and
//! every operation is well-defined on an empty container: removal and peeking
//! return `None`, membership queries return `false`, nothing ever panics.

pub mod plain;
pub mod safe;

pub mod prelude {
    pub use crate::plain::{Queue, Set, Stack, stable_set};
    pub use crate::safe::{SafeQueue, SafeSet, SafeStack};
}
