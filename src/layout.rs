use core::iter::StepBy;
use core::num::NonZeroUsize;
use core::ops::Range;

use crate::LayoutError;

/// The fixed shape of a [`MultiStack`](crate::MultiStack): how many stacks share how many slots.
///
/// Stack `s` (1-based) owns the slots `s-1, s-1+n, s-1+2n, ...` below `capacity`, where `n` is
/// the number of stacks. We call that sequence its lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
  stacks:   NonZeroUsize,
  capacity: NonZeroUsize,
}

impl Layout {
  /// Validates raw sizes. Both must be non-zero.
  pub fn new(stacks: usize, capacity: usize) -> Result<Layout, LayoutError> {
    let stacks = NonZeroUsize::new(stacks).ok_or(LayoutError::NoStacks)?;
    let capacity = NonZeroUsize::new(capacity).ok_or(LayoutError::NoCapacity)?;
    Ok(Layout::from_non_zero(stacks, capacity))
  }

  pub const fn from_non_zero(stacks: NonZeroUsize, capacity: NonZeroUsize) -> Layout {
    Layout { stacks, capacity }
  }

  /// The number of stacks multiplexed over the buffer, and also the stride of every lane.
  pub const fn stacks(&self) -> usize { self.stacks.get() }

  /// Total slots shared by all stacks.
  pub const fn capacity(&self) -> usize { self.capacity.get() }

  /// Whether `stack` names one of our stacks (`1..=stacks`).
  pub const fn contains(&self, stack: usize) -> bool {
    stack >= 1 && stack <= self.stacks()
  }

  /// How many slots the lane of `stack` has. Zero for stacks outside the layout, and for stacks
  /// whose first slot already lies past the end of the buffer (more stacks than slots).
  pub fn stack_capacity(&self, stack: usize) -> usize {
    if !self.contains(stack) { return 0; }
    let first = stack - 1;
    match self.capacity().checked_sub(first) {
      Some(remaining) if remaining > 0 => remaining.div_ceil(self.stacks()),
      _ => 0,
    }
  }

  /// Buffer positions of the lane of `stack`, bottom first.
  ///
  /// An out-of-layout `stack` yields nothing; callers validate first.
  pub fn lane(&self, stack: usize) -> Lane {
    let range = if self.contains(stack) { (stack - 1)..self.capacity() } else { 0..0 };
    Lane(range.step_by(self.stacks()))
  }
}

/// The positions of one stack's slots, in push order.
#[derive(Clone, Debug)]
pub struct Lane(StepBy<Range<usize>>);

impl Iterator for Lane {
  type Item = usize;
  #[inline(always)]
  fn next(&mut self) -> Option<usize> { self.0.next() }
  fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl ExactSizeIterator for Lane {}
