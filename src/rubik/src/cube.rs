use crate::{
    facelets::{Color, Face, Grid},
    scheme::ColorScheme,
};
use itertools::Itertools;

/// The full 54-facelet state of a 3x3x3 cube.
///
/// Grids follow the unfolded cross layout: side faces have row 0 along the
/// top edge, the top face has row 2 along the front edge, the bottom face
/// has row 0 along the front edge, and the back face is seen from behind so
/// its column 0 borders the right face.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    faces: [Grid; 6],
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new()
    }
}

impl Cube {
    /// A solved cube using the default [`ColorScheme`].
    #[must_use]
    pub fn new() -> Self {
        Cube::with_scheme(&ColorScheme::default())
    }

    /// A solved cube where every face holds the colour `scheme` assigns it.
    #[must_use]
    pub fn with_scheme(scheme: &ColorScheme) -> Self {
        Cube {
            faces: Face::ALL.map(|face| [[scheme.color_of(face); 3]; 3]),
        }
    }

    pub(crate) fn from_faces(faces: [Grid; 6]) -> Self {
        Cube { faces }
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[must_use]
    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face as usize][row][col]
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn set(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.faces[face as usize][row][col] = color;
    }

    /// Accessor for renderers that lay the 54 facelets out themselves.
    #[must_use]
    pub fn facelet_at(&self, face: Face, row: usize, col: usize) -> Color {
        self.get(face, row, col)
    }

    /// The three rows of `face`, top to bottom.
    #[must_use]
    pub fn rows_of(&self, face: Face) -> &Grid {
        &self.faces[face as usize]
    }

    pub(crate) fn grid_mut(&mut self, face: Face) -> &mut Grid {
        &mut self.faces[face as usize]
    }

    /// Whether every face is a single colour.
    ///
    /// This is structural: a cube whose faces are each uniform but carry a
    /// different colour binding than the one it was built with still counts
    /// as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().flatten().all_equal())
    }
}

impl PartialEq<str> for Cube {
    fn eq(&self, color_code: &str) -> bool {
        self.to_color_code() == color_code
    }
}

impl PartialEq<&str> for Cube {
    fn eq(&self, color_code: &&str) -> bool {
        self.to_color_code() == *color_code
    }
}
