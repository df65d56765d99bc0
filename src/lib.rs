#![cfg_attr(not(feature="std"), no_std)]

//! Several fixed-capacity LIFO stacks interleaved over one shared buffer.
//!
//! ```
//! use multistack::{MultiStack, StackError};
//!
//! let mut stacks = MultiStack::new(3, 10).unwrap();
//! stacks.insert("a", 1).unwrap();
//! stacks.insert("b", 1).unwrap();
//! assert_eq!(stacks.peek(1), Ok(Some(&"b")));
//! assert_eq!(stacks.pop(2), Ok(None));
//! assert_eq!(stacks.pop(4), Err(StackError::IndexOutOfBounds { stack: 4, stacks: 3 }));
//! ```

#[cfg(not(any(feature="alloc", feature="std")))]
compile_error!("multistack needs either the `alloc` or the `std` feature");

extern crate alloc;

mod error;
mod layout;
mod stack;

pub use error::*;
pub use layout::*;
pub use stack::MultiStack;
