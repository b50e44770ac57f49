//! dg-core: room-addition dungeon generation
//!
//! Builds a connected wall/floor level by generating standalone rooms
//! (square, cross, cave, cavern) and attaching each one to the growing
//! dungeon through a tunnel, then digging shortcuts between places that are
//! close on the map but far apart on foot.
//!
//! The crate is pure: no I/O beyond optional config file loading. It
//! supports `no_std` environments by disabling the default `std` feature.
//!
//! ```
//! use dg_core::{generate_dungeon, GameRng, GeneratorConfig};
//!
//! let config = GeneratorConfig::with_size(60, 45);
//! let mut rng = GameRng::new(7);
//! let dungeon = generate_dungeon(&config, &mut rng).unwrap();
//! assert!(!dungeon.rooms.is_empty());
//! println!("{dungeon}");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::format;
    pub use alloc::string::String;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod dungeon;
pub mod error;
mod rng;

pub use config::GeneratorConfig;
pub use dungeon::{generate_dungeon, Cell, Coord, Direction, Dungeon, Grid};
pub use error::GenError;
pub use rng::GameRng;
