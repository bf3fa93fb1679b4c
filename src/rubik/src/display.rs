use crate::{cube::Cube, facelets::Face};
use std::fmt;

const BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

fn write_row(f: &mut fmt::Formatter<'_>, cube: &Cube, face: Face, row: usize) -> fmt::Result {
    for color in cube.rows_of(face)[row] {
        write!(f, "{color}")?;
    }
    Ok(())
}

/// Unfolded cross: TOP above FRONT, the four side faces in a band and
/// BOTTOM below FRONT.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            f.write_str("    ")?;
            write_row(f, self, Face::Top, row)?;
            writeln!(f)?;
        }
        for row in 0..3 {
            for (i, &face) in BAND.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_row(f, self, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..3 {
            f.write_str("    ")?;
            write_row(f, self, Face::Bottom, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
