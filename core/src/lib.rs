#![no_std]

extern crate alloc;

pub use error::*;
pub use jotto::*;
pub use peg::*;
pub use solitaire::*;
pub use types::*;

mod error;
mod jotto;
mod peg;
mod solitaire;
mod types;
