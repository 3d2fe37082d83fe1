//! A block-segmented sequence container that frees memory as it is drained.
//!
//! [`DrainVec`] is built for append-heavy, consume-once workloads: append
//! tens or hundreds of millions of fixed-size elements, then walk them
//! exactly once. Two properties a contiguous `Vec` cannot offer together
//! drive the design:
//!
//! - **Growth never copies.** Storage is a spine of fixed-capacity blocks;
//!   filling up allocates one more block and touches nothing written before.
//! - **A drain pass returns memory as it goes.** The draining iterator
//!   releases each block the moment its last element is consumed, so peak
//!   resident memory during a drain tracks the *remaining* data, not the
//!   total.
//!
//! # Architecture
//!
//! ```text
//! DrainVec<T> (container contract: push/resize/clear/swap)
//! ├── Spine: SmallVec<[Option<Block<T>>; 4]>   released slot = None
//! │   └── Block<T>: Vec<T> pre-allocated to block_capacity (8MB default)
//! ├── split_index: logical index → (block, offset)
//! ├── Iter / Cursor: non-destructive, random-access (cursor.rs)
//! └── Drain / IntoIter: one-shot, block-freeing traversal (drain.rs)
//! ```
//!
//! # Contract deviations to know about
//!
//! - [`DrainVec::reserve`] is a no-op by design: refusing large up-front
//!   allocations is the point of the container.
//! - Shrinking [`DrainVec::resize`] is destructive; see its docs.
//! - After a drain the container is in a released terminal state until
//!   [`DrainVec::clear`] is called; indexed access into released blocks
//!   panics rather than dangling.
//!
//! Single-threaded by design: no internal synchronization, all mutation
//! goes through `&mut self`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;
pub mod config;
pub mod cursor;
pub mod drain;
pub mod vec;

pub use config::StoreConfig;
pub use cursor::{Cursor, Iter};
pub use drain::{Drain, IntoIter};
pub use vec::DrainVec;
