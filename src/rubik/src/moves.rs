//! The closed move vocabulary and the face/slice turns that apply it.

use crate::{
    cube::Cube,
    facelets::{Face, rotate_grid},
    rotation::{Axis, Spin},
};
use itertools::Itertools;
use log::trace;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A middle layer, named in standard notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// M: between LEFT and RIGHT, turning like LEFT.
    Middle,
    /// E: between TOP and BOTTOM, turning like BOTTOM.
    Equator,
    /// S: between FRONT and BACK, turning like FRONT.
    Standing,
}

impl Section {
    pub const ALL: [Self; 3] = [Section::Middle, Section::Equator, Section::Standing];

    /// The outer face whose clockwise direction is this section's
    /// frontwards direction.
    #[must_use]
    pub const fn follows(self) -> Face {
        match self {
            Section::Middle => Face::Left,
            Section::Equator => Face::Bottom,
            Section::Standing => Face::Front,
        }
    }

    #[must_use]
    pub const fn notation(self) -> char {
        match self {
            Section::Middle => 'M',
            Section::Equator => 'E',
            Section::Standing => 'S',
        }
    }

    #[must_use]
    pub const fn from_notation(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(Section::Middle),
            'E' => Some(Section::Equator),
            'S' => Some(Section::Standing),
            _ => None,
        }
    }
}

/// How far a layer is turned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Amount {
    /// A quarter turn clockwise (frontwards for sections).
    Quarter,
    /// A quarter turn counter-clockwise (backwards for sections).
    Counter,
    /// A half turn.
    Double,
}

impl Amount {
    pub const ALL: [Self; 3] = [Amount::Quarter, Amount::Counter, Amount::Double];

    /// `(clockwise, double)` flags understood by the turn methods.
    #[must_use]
    pub const fn flags(self) -> (bool, bool) {
        match self {
            Amount::Quarter => (true, false),
            Amount::Counter => (false, false),
            Amount::Double => (true, true),
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Amount::Quarter => Amount::Counter,
            Amount::Counter => Amount::Quarter,
            Amount::Double => Amount::Double,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Amount::Quarter => "",
            Amount::Counter => "'",
            Amount::Double => "2",
        }
    }
}

/// One of the 27 legal moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    Face { face: Face, amount: Amount },
    Slice { section: Section, amount: Amount },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move")]
    Empty,
    #[error("Unknown layer {0:?}, expected one of U, L, F, R, B, D, M, E, S")]
    UnknownLayer(char),
    #[error("Invalid suffix {suffix:?} in move {notation:?}, expected nothing, ' or 2")]
    UnknownSuffix { notation: String, suffix: String },
}

impl Move {
    /// Every move, faces first in U, L, F, R, B, D order and then M, E, S.
    pub const ALL: [Self; 27] = {
        let mut moves = [Move::Face {
            face: Face::Top,
            amount: Amount::Quarter,
        }; 27];

        let mut i = 0;
        while i < Face::ALL.len() * 3 {
            moves[i] = Move::Face {
                face: Face::ALL[i / 3],
                amount: Amount::ALL[i % 3],
            };
            i += 1;
        }
        while i < moves.len() {
            let j = i - Face::ALL.len() * 3;
            moves[i] = Move::Slice {
                section: Section::ALL[j / 3],
                amount: Amount::ALL[j % 3],
            };
            i += 1;
        }

        moves
    };

    #[must_use]
    pub const fn amount(self) -> Amount {
        match self {
            Move::Face { amount, .. } | Move::Slice { amount, .. } => amount,
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Move::Face { face, amount } => Move::Face {
                face,
                amount: amount.inverse(),
            },
            Move::Slice { section, amount } => Move::Slice {
                section,
                amount: amount.inverse(),
            },
        }
    }

    /// Parse a whitespace separated sequence such as `"R U R' U'"`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first token that is not a legal move.
    pub fn parse_sequence(sequence: &str) -> Result<Vec<Self>, MoveParseError> {
        sequence.split_whitespace().map(str::parse).collect()
    }

    /// Format moves the way [`Move::parse_sequence`] reads them.
    #[must_use]
    pub fn format_sequence(moves: &[Self]) -> String {
        moves.iter().join(" ")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Move::Face { face, .. } => face.notation(),
            Move::Slice { section, .. } => section.notation(),
        };
        write!(f, "{letter}{}", self.amount().suffix())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(MoveParseError::Empty)?;
        let suffix = chars.as_str();
        let amount = match suffix {
            "" => Amount::Quarter,
            "'" => Amount::Counter,
            "2" => Amount::Double,
            _ => {
                return Err(MoveParseError::UnknownSuffix {
                    notation: s.to_string(),
                    suffix: suffix.to_string(),
                });
            }
        };

        if let Some(face) = Face::from_notation(letter) {
            Ok(Move::Face { face, amount })
        } else if let Some(section) = Section::from_notation(letter) {
            Ok(Move::Slice { section, amount })
        } else {
            Err(MoveParseError::UnknownLayer(letter))
        }
    }
}

impl Cube {
    /// Turn `face` a quarter turn, or a half turn if `double` is set.
    ///
    /// The face's own grid rotates with it and the adjoining row or column of
    /// each of the four neighbouring faces moves on to the next neighbour.
    pub fn rotate_face(&mut self, face: Face, clockwise: bool, double: bool) {
        let axis = Axis::of(face);
        let spin = Spin::seen_from(face, clockwise);
        // Rows and columns are numbered as seen on FRONT, or on RIGHT for
        // turns about the FRONT/BACK axis.
        let index = match face {
            Face::Top | Face::Front | Face::Left => 0,
            Face::Bottom | Face::Back | Face::Right => 2,
        };

        let turns = if double { 2 } else { 1 };
        for _ in 0..turns {
            let grid = self.grid_mut(face);
            *grid = rotate_grid(grid, clockwise);
            self.rotate_layer(axis, spin, index);
        }
    }

    /// Turn a middle section a quarter turn, or a half turn if `double` is
    /// set. `frontwards` turns it in the clockwise direction of
    /// [`Section::follows`].
    pub fn rotate_middle_section(&mut self, section: Section, frontwards: bool, double: bool) {
        let face = section.follows();
        let axis = Axis::of(face);
        let spin = Spin::seen_from(face, frontwards);

        let turns = if double { 2 } else { 1 };
        for _ in 0..turns {
            self.rotate_layer(axis, spin, 1);
        }
    }

    pub fn apply(&mut self, move_: Move) {
        trace!(target: "moves", "Applying {move_}");
        let (forwards, double) = move_.amount().flags();
        match move_ {
            Move::Face { face, .. } => self.rotate_face(face, forwards, double),
            Move::Slice { section, .. } => self.rotate_middle_section(section, forwards, double),
        }
    }

    /// Parse and apply a move sequence. Nothing is applied if any token
    /// fails to parse.
    ///
    /// # Errors
    ///
    /// See [`Move::parse_sequence`].
    pub fn apply_moves(&mut self, sequence: &str) -> Result<(), MoveParseError> {
        for move_ in Move::parse_sequence(sequence)? {
            self.apply(move_);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn vocabulary_has_27_distinct_moves() {
        let unique: HashSet<Move> = Move::ALL.into_iter().collect();
        assert_eq!(unique.len(), 27);
        assert_eq!(
            Move::ALL[0],
            Move::Face {
                face: Face::Top,
                amount: Amount::Quarter
            }
        );
        assert_eq!(
            Move::ALL[26],
            Move::Slice {
                section: Section::Standing,
                amount: Amount::Double
            }
        );
    }

    #[test]
    fn notation_round_trips() {
        for move_ in Move::ALL {
            assert_eq!(move_.to_string().parse::<Move>(), Ok(move_));
        }
        assert_eq!(
            Move::format_sequence(&Move::parse_sequence(" R  U R'\tU2 M' ").unwrap()),
            "R U R' U2 M'"
        );
    }

    #[test]
    fn malformed_notation_is_rejected() {
        assert_eq!("".parse::<Move>(), Err(MoveParseError::Empty));
        assert_eq!("X".parse::<Move>(), Err(MoveParseError::UnknownLayer('X')));
        assert_eq!("u".parse::<Move>(), Err(MoveParseError::UnknownLayer('u')));
        assert_eq!(
            "R3".parse::<Move>(),
            Err(MoveParseError::UnknownSuffix {
                notation: "R3".to_string(),
                suffix: "3".to_string()
            })
        );
        assert!(Move::parse_sequence("R U Q").is_err());
    }

    #[test]
    fn failed_sequence_leaves_cube_untouched() {
        let mut cube = Cube::new();
        assert!(cube.apply_moves("R U R2 Z").is_err());
        assert!(cube.is_solved());
    }

    #[test]
    fn inverse_undoes_every_move() {
        let mut cube = Cube::new();
        cube.apply_moves("R U F' L2 D B' M E2 S'").unwrap();
        for move_ in Move::ALL {
            let before = cube.clone();
            cube.apply(move_);
            cube.apply(move_.inverse());
            assert_eq!(cube, before, "{move_} not undone");
        }
    }

    #[test]
    fn sections_turn_like_the_face_they_follow() {
        assert_eq!(Axis::of(Section::Middle.follows()), Axis::RightLeft);
        assert_eq!(Axis::of(Section::Equator.follows()), Axis::UpDown);
        assert_eq!(Axis::of(Section::Standing.follows()), Axis::FrontBack);
    }
}
