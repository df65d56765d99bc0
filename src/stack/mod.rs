use alloc::boxed::Box;
use tracing::{debug, trace};

use crate::{Layout, LayoutError, Rejected, StackError};

/// Several LIFO stacks sharing one fixed buffer of optional slots.
///
/// Stacks are addressed 1-based. Each stack lives in its own lane of the buffer (see
/// [`Layout`]), and within a lane the occupied slots always form a prefix: everything below the
/// top is occupied, everything above it is empty. Operations walk the lane from the bottom, so
/// they cost O(capacity / stacks).
///
/// The buffer is allocated once, at construction, and never grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiStack<V> {
  layout: Layout,
  slots:  Box<[Option<V>]>,
}

impl<V> MultiStack<V> {
  /// Creates `stacks` empty stacks over `capacity` slots.
  pub fn new(stacks: usize, capacity: usize) -> Result<Self, LayoutError> {
    Layout::new(stacks, capacity).map(Self::with_layout)
  }

  pub fn with_layout(layout: Layout) -> Self {
    let slots = (0..layout.capacity()).map(|_| None).collect();
    MultiStack { layout, slots }
  }

  pub fn layout(&self) -> Layout { self.layout }

  pub fn stacks(&self) -> usize { self.layout.stacks() }

  pub fn capacity(&self) -> usize { self.layout.capacity() }

  /// How many values `stack` can hold at most.
  pub fn stack_capacity(&self, stack: usize) -> Result<usize, StackError> {
    self.check(stack)?;
    Ok(self.layout.stack_capacity(stack))
  }

  /// Pushes `value` onto `stack`.
  ///
  /// Fails with [`StackError::OutOfCapacity`] when every slot in the stack's lane is taken, even
  /// if other stacks have room. On any error the value comes back in the [`Rejected`] and nothing
  /// changes.
  pub fn insert(&mut self, value: V, stack: usize) -> Result<(), Rejected<V>> {
    if let Err(error) = self.check(stack) {
      return Err(Rejected::new(value, error));
    }
    let free = self.layout.lane(stack).find(|&slot| self.slots[slot].is_none());
    match free {
      Some(slot) => {
        trace!(stack, slot, "insert");
        self.slots[slot] = Some(value);
        Ok(())
      }
      None => {
        debug!(stack, capacity = self.layout.stack_capacity(stack), "stack is full");
        Err(Rejected::new(value, StackError::OutOfCapacity { stack }))
      }
    }
  }

  /// Removes and returns the top of `stack`, or `None` if it is empty.
  pub fn pop(&mut self, stack: usize) -> Result<Option<V>, StackError> {
    self.check(stack)?;
    Ok(self.top(stack).and_then(|slot| {
      trace!(stack, slot, "pop");
      self.slots[slot].take()
    }))
  }

  /// Borrows the top of `stack` without removing it, or `None` if it is empty.
  pub fn peek(&self, stack: usize) -> Result<Option<&V>, StackError> {
    self.check(stack)?;
    Ok(self.top(stack).and_then(|slot| self.slots[slot].as_ref()))
  }

  /// The number of values currently on `stack`.
  pub fn len(&self, stack: usize) -> Result<usize, StackError> {
    self.check(stack)?;
    Ok(self.occupied(stack).count())
  }

  pub fn is_empty(&self, stack: usize) -> Result<bool, StackError> {
    self.check(stack)?;
    Ok(self.top(stack).is_none())
  }

  /// The number of values across all stacks.
  pub fn total_len(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  fn check(&self, stack: usize) -> Result<(), StackError> {
    if self.layout.contains(stack) { return Ok(()); }
    debug!(stack, stacks = self.stacks(), "stack index rejected");
    Err(StackError::IndexOutOfBounds { stack, stacks: self.stacks() })
  }

  // The occupied prefix of the lane. We stop at the first hole.
  fn occupied(&self, stack: usize) -> impl Iterator<Item = usize> + '_ {
    self.layout.lane(stack).take_while(move |&slot| self.slots[slot].is_some())
  }

  fn top(&self, stack: usize) -> Option<usize> {
    self.occupied(stack).last()
  }
}
