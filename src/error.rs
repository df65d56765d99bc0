use thiserror::Error;

/// Why an operation on a [`MultiStack`](crate::MultiStack) was refused.
///
/// Nothing is mutated when one of these is returned.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack index was outside `1..=stacks`.
  #[error("stack index {stack} is out of bounds (1..={stacks})")]
  IndexOutOfBounds { stack: usize, stacks: usize },
  /// Every slot in the stack's lane is occupied. Other stacks may still have room.
  #[error("stack {stack} is out of capacity")]
  OutOfCapacity { stack: usize },
}

/// A [`Layout`](crate::Layout) could not be built from the given sizes.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
  #[error("a multistack needs at least one stack")]
  NoStacks,
  #[error("a multistack needs at least one slot")]
  NoCapacity,
}

/// An insert that was refused. Hands the value back so the caller can put it elsewhere.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("{error}")]
pub struct Rejected<V> {
  pub value: V,
  pub error: StackError,
}

impl<V> Rejected<V> {
  pub const fn new(value: V, error: StackError) -> Self {
    Rejected { value, error }
  }

  /// Gives the value back, dropping the reason.
  pub fn into_value(self) -> V { self.value }
}
