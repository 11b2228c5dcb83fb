#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod combat;
mod common;
mod config;
mod game;
mod grid;
mod layout;
#[cfg(feature = "std")]
mod logging;
mod penalty;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod score;
mod ship;

pub use bitboard::{BitBoardError, BitGrid, Cells, MoveGrid};
pub use combat::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use layout::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_str};
pub use penalty::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use score::*;
pub use ship::*;
