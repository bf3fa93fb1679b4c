//! The 54 character colour code.
//!
//! Faces appear in the order U, L, F, R, B, D, nine characters each, every
//! face written row by row from row 0. Characters are the colour codes
//! `W O G R B Y`; lower-case is accepted on input, output is upper-case.

use crate::{
    cube::Cube,
    facelets::{Color, Face, Grid},
};
use log::debug;
use thiserror::Error;

pub const COLOR_CODE_LEN: usize = 54;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid color code length, expected {expected} characters but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Invalid color {found:?} at position {index}, expected one of W, O, G, R, B, Y")]
    InvalidColor { index: usize, found: char },
}

impl Cube {
    /// Build a cube from its colour code. The result is not checked for
    /// being reachable from a solved cube.
    ///
    /// # Errors
    ///
    /// If `color_code` is not exactly 54 characters long or contains a
    /// character that is not a colour code.
    pub fn from_color_code(color_code: &str) -> Result<Self, FormatError> {
        let actual = color_code.chars().count();
        if actual != COLOR_CODE_LEN {
            return Err(FormatError::InvalidLength {
                expected: COLOR_CODE_LEN,
                actual,
            });
        }

        let mut faces: [Grid; 6] = [[[Color::White; 3]; 3]; 6];
        for (index, found) in color_code.chars().enumerate() {
            let color =
                Color::from_code(found).ok_or(FormatError::InvalidColor { index, found })?;
            faces[index / 9][(index % 9) / 3][index % 3] = color;
        }

        let cube = Cube::from_faces(faces);
        debug!("Parsed color code {}", cube.to_color_code());
        Ok(cube)
    }

    #[must_use]
    pub fn to_color_code(&self) -> String {
        Face::ALL
            .iter()
            .flat_map(|&face| self.rows_of(face).iter().flatten())
            .map(|&color| color.code())
            .collect()
    }
}
