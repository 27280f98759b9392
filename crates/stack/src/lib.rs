//! # bounded-stack
//!
//! Fixed-capacity, heap-allocated LIFO stack with a status-coded operation
//! contract.
//!
//! A [`BoundedStack`] reserves exactly `capacity` slots when it is created and
//! never grows. Every operation returns a [`StackResult`]; failures
//! (`Full`, `Empty`, `InvalidHandle`, `AllocationFailed`) leave the stack
//! untouched and can be flattened into a [`StackStatus`] code.
//!
//! ## Quick Start
//!
//! ```rust
//! use bounded_stack::prelude::*;
//!
//! fn main() -> StackResult<()> {
//!     let (first, second) = (1_u32, 2_u32);
//!     let mut stack = BoundedStack::new(2)?;
//!
//!     stack.push(&first)?;
//!     stack.push(&second)?;
//!     assert_eq!(StackStatus::of(&stack.push(&first)), StackStatus::Full);
//!
//!     assert_eq!(stack.pop()?, &second);
//!     assert_eq!(stack.count()?, 1);
//!
//!     stack.destroy()?;
//!     assert_eq!(StackStatus::of(&stack.peek()), StackStatus::InvalidHandle);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `logging` (default): structured events through `tracing`
//! - `stats`: per-stack operation counters
//! - `serde`: `Serialize` / `Deserialize` for [`StackConfig`]
//! - `full`: all of the above

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rust_2018_idioms)]
// #[must_use] on constructors of a #[must_use] error documents intent
#![allow(clippy::double_must_use)]

pub mod config;
pub mod error;
pub mod stack;
#[cfg(feature = "stats")]
#[cfg_attr(docsrs, doc(cfg(feature = "stats")))]
pub mod stats;

pub use crate::config::StackConfig;
pub use crate::error::{StackError, StackResult, StackStatus};
pub use crate::stack::{BoundedStack, Iter, StackState};
#[cfg(feature = "stats")]
pub use crate::stats::{StackStats, StackStatsSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::config::StackConfig;
    pub use crate::error::{StackError, StackResult, StackStatus};
    pub use crate::stack::{BoundedStack, StackState};
    #[cfg(feature = "stats")]
    pub use crate::stats::{StackStats, StackStatsSnapshot};
}
