#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod algorithms;
pub mod error;
pub mod parking;
pub mod queue;
pub mod s_list;
pub mod stack;
#[cfg(feature = "std")]
pub mod sync;

pub use error::{Error, Result};
pub use parking::{Admission, Departure, LotConfig, Occupant, ParkingLot, Space};
pub use queue::Queue;
pub use s_list::LinkedList as SingleLinkedList;
pub use stack::Stack;
#[cfg(feature = "std")]
pub use sync::SharedParkingLot;
