//! Fixed-capacity LIFO stack
//!
//! ## Invariants
//!
//! - `len <= capacity` at all times
//! - storage holds exactly `capacity` slots from creation until `destroy`
//! - slots `[0, len)` are occupied, the slot at `len - 1` is the most
//!   recently pushed element
//! - slots `[len, capacity)` are empty; `pop` takes the value out of its slot
//! - once destroyed, storage is `None` and every operation reports
//!   `InvalidHandle`
//!
//! The stack never owns more than the values handed to it. Storing `&U`
//! leaves the referents with the caller; destroying or dropping the stack
//! releases only the slot array.

use core::fmt;
use core::iter::{FusedIterator, Rev};
use core::slice;

#[cfg(feature = "logging")]
use tracing::{debug, trace, warn};

use crate::config::StackConfig;
use crate::error::{StackError, StackResult};
#[cfg(feature = "stats")]
use crate::stats::StackStats;

/// Logical state of a stack instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackState {
    /// No elements. A zero-capacity stack is always here
    Empty,
    /// Between empty and full
    NonEmpty,
    /// `len == capacity`
    Full,
    /// Storage released; terminal
    Destroyed,
}

/// Fixed-capacity LIFO stack
///
/// # Memory Layout
/// ```text
/// [slot 0]----[slot 1]----[slot len-1]----[empty]----[slot capacity-1]
///  <--------- occupied ----------> top     <------ available ------->
/// ```
///
/// # Example
/// ```
/// use bounded_stack::{BoundedStack, StackError};
///
/// let (a, b) = (String::from("a"), String::from("b"));
/// let mut stack = BoundedStack::new(1)?;
///
/// stack.push(&a)?;
/// assert_eq!(stack.push(&b), Err(StackError::Full { capacity: 1 }));
/// assert_eq!(stack.pop()?, &a);
/// # Ok::<(), StackError>(())
/// ```
pub struct BoundedStack<T> {
    /// Slot array, `None` once destroyed
    slots: Option<Box<[Option<T>]>>,

    /// Number of occupied slots
    len: usize,

    /// Slot count fixed at creation
    capacity: usize,

    config: StackConfig,

    #[cfg(feature = "stats")]
    stats: StackStats,
}

impl<T> BoundedStack<T> {
    /// Creates a new stack with default configuration
    pub fn new(capacity: usize) -> StackResult<Self> {
        Self::with_config(capacity, StackConfig::default())
    }

    /// Creates a production-configured stack
    pub fn production(capacity: usize) -> StackResult<Self> {
        Self::with_config(capacity, StackConfig::production())
    }

    /// Creates a debug-configured stack
    pub fn debug(capacity: usize) -> StackResult<Self> {
        Self::with_config(capacity, StackConfig::debug())
    }

    /// Creates a new stack with custom configuration
    ///
    /// Storage for all `capacity` slots is reserved up front. A capacity of
    /// zero is accepted and yields a stack that is both empty and full.
    pub fn with_config(capacity: usize, config: StackConfig) -> StackResult<Self> {
        let mut storage: Vec<Option<T>> = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|err| StackError::allocation_failed(capacity, &err))?;
        storage.resize_with(capacity, || None);

        #[cfg(feature = "logging")]
        debug!(name = %config.name, capacity, "stack created");

        Ok(Self {
            slots: Some(storage.into_boxed_slice()),
            len: 0,
            capacity,
            config,
            #[cfg(feature = "stats")]
            stats: StackStats::default(),
        })
    }

    /// Releases the slot array
    ///
    /// Elements still on the stack are dropped; for reference elements this
    /// touches nothing the caller owns. The stack stays in scope but every
    /// later operation fails with `InvalidHandle`, including a second
    /// `destroy`.
    pub fn destroy(&mut self) -> StackResult<()> {
        if self.slots.take().is_none() {
            return Err(self.invalid("destroy"));
        }

        #[cfg(feature = "logging")]
        debug!(name = %self.config.name, capacity = self.capacity, dropped = self.len, "stack destroyed");

        self.len = 0;
        Ok(())
    }

    /// Pushes an element on top of the stack
    ///
    /// Fails with `Full` when `len == capacity`; the element is dropped and
    /// the stack is left unchanged.
    pub fn push(&mut self, element: T) -> StackResult<()> {
        let depth = self.len;
        let Some(slots) = self.slots.as_deref_mut() else {
            return Err(self.invalid("push"));
        };
        let Some(slot) = slots.get_mut(depth) else {
            return Err(self.rejected(StackError::full(self.capacity)));
        };

        *slot = Some(element);
        self.len = depth + 1;

        #[cfg(feature = "stats")]
        if self.config.track_stats {
            self.stats.record_push(self.len);
        }

        Ok(())
    }

    /// Removes and returns the top element
    pub fn pop(&mut self) -> StackResult<T> {
        let Some(slots) = self.slots.as_deref_mut() else {
            return Err(self.invalid("pop"));
        };
        let popped = match self.len.checked_sub(1) {
            Some(top) => slots.get_mut(top).and_then(Option::take),
            None => None,
        };

        match popped {
            Some(element) => {
                self.len -= 1;

                #[cfg(feature = "stats")]
                if self.config.track_stats {
                    self.stats.record_pop();
                }

                Ok(element)
            }
            None => Err(self.rejected(StackError::empty())),
        }
    }

    /// Borrows the top element without removing it
    pub fn peek(&self) -> StackResult<&T> {
        let Some(slots) = self.slots.as_deref() else {
            return Err(self.invalid("peek"));
        };
        let top = self
            .len
            .checked_sub(1)
            .and_then(|top| slots.get(top))
            .and_then(Option::as_ref);

        match top {
            Some(element) => {
                #[cfg(feature = "stats")]
                if self.config.track_stats {
                    self.stats.record_peek();
                }

                Ok(element)
            }
            None => Err(self.rejected(StackError::empty())),
        }
    }

    /// Number of elements on the stack
    pub fn count(&self) -> StackResult<usize> {
        if self.is_valid() {
            Ok(self.len)
        } else {
            Err(self.invalid("count"))
        }
    }

    /// Slot count the stack was created with
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements; 0 once destroyed
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Free slots left before `push` reports `Full`; 0 once destroyed
    #[inline]
    pub fn remaining(&self) -> usize {
        if self.is_valid() {
            self.capacity.saturating_sub(self.len)
        } else {
            0
        }
    }

    /// Index of the top element, `None` when empty or destroyed
    pub fn top(&self) -> Option<usize> {
        self.slots.as_ref().and_then(|_| self.len.checked_sub(1))
    }

    /// Whether the stack still owns its storage
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.slots.is_some()
    }

    pub fn state(&self) -> StackState {
        if !self.is_valid() {
            StackState::Destroyed
        } else if self.is_empty() {
            StackState::Empty
        } else if self.is_full() {
            StackState::Full
        } else {
            StackState::NonEmpty
        }
    }

    /// Iterates from the top element down to the bottom
    pub fn iter(&self) -> Iter<'_, T> {
        let occupied = self
            .slots
            .as_deref()
            .and_then(|slots| slots.get(..self.len))
            .unwrap_or(&[]);

        Iter {
            inner: occupied.iter().rev(),
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Get stack statistics
    #[cfg(feature = "stats")]
    #[cfg_attr(docsrs, doc(cfg(feature = "stats")))]
    pub fn stats(&self) -> &StackStats {
        &self.stats
    }

    /// Record a `Full` / `Empty` rejection and hand the error back
    fn rejected(&self, err: StackError) -> StackError {
        #[cfg(feature = "logging")]
        if self.config.log_rejections {
            trace!(name = %self.config.name, len = self.len, capacity = self.capacity, code = err.code(), "stack operation rejected");
        }

        #[cfg(feature = "stats")]
        if self.config.track_stats {
            match err {
                StackError::Full { .. } => self.stats.record_full(),
                StackError::Empty => self.stats.record_empty(),
                _ => {}
            }
        }

        err
    }

    fn invalid(&self, operation: &'static str) -> StackError {
        #[cfg(feature = "logging")]
        warn!(name = %self.config.name, operation, "operation on destroyed stack");

        StackError::invalid_handle(operation)
    }
}

impl<T> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("name", &self.config.name)
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-to-bottom iterator over a [`BoundedStack`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Rev<slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_push_pop_peek() {
        let mut stack = BoundedStack::new(2).unwrap();
        assert_eq!(stack.state(), StackState::Empty);
        assert_eq!(stack.top(), None);

        stack.push('a').unwrap();
        assert_eq!(stack.state(), StackState::NonEmpty);
        stack.push('b').unwrap();
        assert_eq!(stack.state(), StackState::Full);
        assert_eq!(stack.top(), Some(1));

        assert_eq!(stack.peek(), Ok(&'b'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_zero_capacity_is_empty_and_full() {
        let mut stack = BoundedStack::<u8>::new(0).unwrap();
        assert!(stack.is_empty());
        assert!(stack.is_full());
        assert_eq!(stack.state(), StackState::Empty);

        assert_eq!(stack.push(1), Err(StackError::Full { capacity: 0 }));
        assert_eq!(stack.peek(), Err(StackError::Empty));
        assert_eq!(stack.count(), Ok(0));
    }

    #[test]
    fn test_rejected_push_leaves_stack_unchanged() {
        let mut stack = BoundedStack::new(1).unwrap();
        stack.push(10).unwrap();

        assert!(stack.push(20).is_err());
        assert_eq!(stack.count(), Ok(1));
        assert_eq!(stack.peek(), Ok(&10));
    }

    #[test]
    fn test_pop_clears_vacated_slot() {
        let shared = Rc::new(5);
        let mut stack = BoundedStack::new(1).unwrap();

        stack.push(Rc::clone(&shared)).unwrap();
        assert_eq!(Rc::strong_count(&shared), 2);

        drop(stack.pop().unwrap());
        assert_eq!(Rc::strong_count(&shared), 1);
        assert!(stack.is_valid());
    }

    #[test]
    fn test_destroy_releases_elements() {
        let shared = Rc::new("payload");
        let mut stack = BoundedStack::new(3).unwrap();
        stack.push(Rc::clone(&shared)).unwrap();
        stack.push(Rc::clone(&shared)).unwrap();

        stack.destroy().unwrap();
        assert_eq!(Rc::strong_count(&shared), 1);
        assert_eq!(stack.state(), StackState::Destroyed);
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_destroy_twice_is_invalid_handle() {
        let mut stack = BoundedStack::<u32>::new(4).unwrap();
        stack.destroy().unwrap();

        assert_eq!(
            stack.destroy(),
            Err(StackError::InvalidHandle {
                operation: "destroy"
            })
        );
    }

    #[test]
    fn test_allocation_failure() {
        let result = BoundedStack::<u64>::new(usize::MAX);
        assert!(matches!(
            result,
            Err(StackError::AllocationFailed {
                capacity: usize::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let mut stack = BoundedStack::new(4).unwrap();
        for value in [1, 2, 3] {
            stack.push(value).unwrap();
        }

        let seen: Vec<_> = stack.iter().copied().collect();
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(stack.iter().len(), 3);
        assert_eq!(stack.remaining(), 1);

        stack.destroy().unwrap();
        assert_eq!(stack.iter().next(), None);
        assert_eq!(stack.remaining(), 0);
    }

    #[test]
    fn test_debug_output() {
        let stack = BoundedStack::<u8>::with_config(2, StackConfig::default().with_name("ops"))
            .unwrap();
        let rendered = format!("{stack:?}");

        assert!(rendered.contains("ops"));
        assert!(rendered.contains("Empty"));
    }

    #[cfg(feature = "stats")]
    #[test]
    fn test_stats_recorded_when_enabled() {
        let mut stack = BoundedStack::debug(1).unwrap();
        stack.push(1).unwrap();
        let _ = stack.push(2);
        stack.peek().unwrap();
        stack.pop().unwrap();
        let _ = stack.pop();

        let stats = stack.stats().snapshot();
        assert_eq!(stats.pushes, 1);
        assert_eq!(stats.pops, 1);
        assert_eq!(stats.peeks, 1);
        assert_eq!(stats.full_rejections, 1);
        assert_eq!(stats.empty_rejections, 1);
        assert_eq!(stats.peak_depth, 1);
    }

    #[cfg(feature = "stats")]
    #[test]
    fn test_stats_skipped_in_production() {
        let mut stack = BoundedStack::production(1).unwrap();
        stack.push(1).unwrap();
        stack.pop().unwrap();

        assert_eq!(stack.stats().snapshot(), crate::stats::StackStatsSnapshot::default());
    }
}
