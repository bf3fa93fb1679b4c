//! A facelet model of the 3x3x3 cube.
//!
//! The state is six 3x3 grids of [`Color`]s. Face turns and middle-section
//! turns rotate a face's own grid and cycle one row or column across the four
//! neighbouring faces; see [`rotation`] for the tables that drive this.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod codec;
mod cube;
mod display;
mod facelets;
mod moves;
pub mod rotation;
mod scheme;
mod scramble;

pub use codec::{COLOR_CODE_LEN, FormatError};
pub use cube::Cube;
pub use facelets::{Color, Face, Grid, UnknownColor};
pub use moves::{Amount, Move, MoveParseError, Section};
pub use scheme::{ColorScheme, SchemeError};
