//! The atoms of cube state: colours, face positions and their 3x3 grids.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One of the six sticker colours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Color {
    White,
    Orange,
    Green,
    Red,
    Blue,
    Yellow,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown color code {0:?}, expected one of W, O, G, R, B, Y")]
pub struct UnknownColor(pub char);

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Orange,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Yellow,
    ];

    /// The upper-case colour code used by the 54 character serialisation.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Case-insensitive inverse of [`Color::code`].
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'O' => Some(Color::Orange),
            'G' => Some(Color::Green),
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl TryFrom<char> for Color {
    type Error = UnknownColor;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Color::from_code(code).ok_or(UnknownColor(code))
    }
}

impl From<Color> for char {
    fn from(color: Color) -> Self {
        color.code()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A fixed face position in space.
///
/// The discriminants double as indices into the cube's face storage and
/// follow the serialisation order U, L, F, R, B, D.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Top, Left, Front, Right, Back, Bottom];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// Standard cube notation letter for the face.
    #[must_use]
    pub const fn notation(self) -> char {
        match self {
            Face::Top => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Bottom => 'D',
        }
    }

    #[must_use]
    pub const fn from_notation(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::Top),
            'L' => Some(Face::Left),
            'F' => Some(Face::Front),
            'R' => Some(Face::Right),
            'B' => Some(Face::Back),
            'D' => Some(Face::Bottom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Top => Face::Bottom,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Right => Face::Left,
            Face::Back => Face::Front,
            Face::Bottom => Face::Top,
        }
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::from_notation(letter).ok_or(()),
            _ => Err(()),
        }
    }
}

/// The 3x3 sticker grid owned by a single face, indexed `[row][col]`.
pub type Grid = [[Color; 3]; 3];

/// Rotate a grid a quarter turn as seen from outside the cube.
pub(crate) fn rotate_grid(grid: &Grid, clockwise: bool) -> Grid {
    let mut rotated = *grid;
    for (row, rotated_row) in rotated.iter_mut().enumerate() {
        for (col, cell) in rotated_row.iter_mut().enumerate() {
            *cell = if clockwise {
                grid[2 - col][row]
            } else {
                grid[col][2 - row]
            };
        }
    }
    rotated
}
