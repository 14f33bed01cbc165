//! Internally synchronized containers, safe to share across threads behind an `Arc`.
//! All methods take `&self`; the sequence containers guard their storage with a
//! reader/writer lock, the set is backed by a sharded concurrent map. No method
//! ever hands out a reference into the guarded storage.

mod queue;
mod set;
mod stack;

pub use queue::SafeQueue;
pub use set::SafeSet;
pub use stack::SafeStack;
