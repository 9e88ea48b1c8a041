#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod catalog;
mod common;
mod config;
mod filter;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod request;
mod squid;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError, Mask, SetBits};
pub use catalog::*;
pub use common::*;
pub use config::*;
pub use filter::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use squid::*;
#[cfg(feature = "std")]
pub use ui::*;
