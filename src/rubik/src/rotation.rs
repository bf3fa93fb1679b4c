//! Slice cycling shared by every face and section turn.
//!
//! A quarter turn of any layer moves one row or column on each of four faces
//! into the next face of a cycle. Which faces take part, in what order, which
//! line they contribute and in which direction that line is read are all
//! declared in the tables below, so the permutation itself is written once.

use crate::{
    cube::Cube,
    facelets::{Color, Face},
};

/// The three rotation axes, named after the faces they pass through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Through TOP and BOTTOM. Cycles the same row of the four side faces.
    UpDown,
    /// Through RIGHT and LEFT. Cycles a column of FRONT, TOP, BACK and BOTTOM.
    RightLeft,
    /// Through FRONT and BACK. Cycles columns of RIGHT and LEFT and rows of
    /// TOP and BOTTOM.
    FrontBack,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::UpDown, Axis::RightLeft, Axis::FrontBack];

    /// The face a [`Spin`] on this axis is judged from.
    #[must_use]
    pub const fn reference_face(self) -> Face {
        match self {
            Axis::UpDown => Face::Top,
            Axis::RightLeft => Face::Right,
            Axis::FrontBack => Face::Front,
        }
    }

    /// The axis a face sits on.
    #[must_use]
    pub const fn of(face: Face) -> Self {
        match face {
            Face::Top | Face::Bottom => Axis::UpDown,
            Face::Right | Face::Left => Axis::RightLeft,
            Face::Front | Face::Back => Axis::FrontBack,
        }
    }
}

/// Turn direction about an axis, as seen from its reference face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// Convert a turn direction seen from `face` into one seen from the
    /// reference face of `face`'s axis.
    #[must_use]
    pub const fn seen_from(face: Face, clockwise: bool) -> Self {
        let from_reference = matches!(face, Face::Top | Face::Right | Face::Front);
        if clockwise == from_reference {
            Spin::Clockwise
        } else {
            Spin::CounterClockwise
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// How a face's column index relates to the same column seen from FRONT.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mirror {
    Identity,
    /// Index `i` addresses `2 - i`; the middle index is its own mirror.
    Reflected,
}

impl Mirror {
    #[must_use]
    pub const fn apply(self, index: usize) -> usize {
        match self {
            Mirror::Identity => index,
            Mirror::Reflected => 2 - index,
        }
    }
}

/// BACK is viewed from behind, so its left and right are swapped.
const FACE_MIRRORS: [Mirror; 6] = {
    let mut mirrors = [Mirror::Identity; 6];
    mirrors[Face::Back as usize] = Mirror::Reflected;
    mirrors
};

#[must_use]
pub const fn mirror_rule(face: Face) -> Mirror {
    FACE_MIRRORS[face as usize]
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Line {
    Row,
    Col,
}

/// How one face of a cycle addresses the layer being turned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) face: Face,
    line: Line,
    mirror: Mirror,
    /// Read the line from its high end. Lines are read so that the facelet at
    /// position `k` of one slot lands on position `k` of the next.
    reversed: bool,
}

const fn slot(face: Face, line: Line, mirror: Mirror, reversed: bool) -> Slot {
    Slot {
        face,
        line,
        mirror,
        reversed,
    }
}

// Each table lists its cycle clockwise as seen from the axis's reference
// face: slot `k + 1` receives the facelets of slot `k`.

const UP_DOWN: [Slot; 4] = [
    slot(Face::Front, Line::Row, Mirror::Identity, false),
    slot(Face::Left, Line::Row, Mirror::Identity, false),
    slot(Face::Back, Line::Row, Mirror::Identity, false),
    slot(Face::Right, Line::Row, Mirror::Identity, false),
];

const RIGHT_LEFT: [Slot; 4] = [
    slot(Face::Front, Line::Col, mirror_rule(Face::Front), false),
    slot(Face::Top, Line::Col, mirror_rule(Face::Top), false),
    slot(Face::Back, Line::Col, mirror_rule(Face::Back), true),
    slot(Face::Bottom, Line::Col, mirror_rule(Face::Bottom), false),
];

// Indices count away from FRONT on RIGHT and BOTTOM, towards it on LEFT and
// TOP.
const FRONT_BACK: [Slot; 4] = [
    slot(Face::Right, Line::Col, Mirror::Identity, false),
    slot(Face::Bottom, Line::Row, Mirror::Identity, true),
    slot(Face::Left, Line::Col, Mirror::Reflected, true),
    slot(Face::Top, Line::Row, Mirror::Reflected, false),
];

const fn counter(clockwise: [Slot; 4]) -> [Slot; 4] {
    [clockwise[0], clockwise[3], clockwise[2], clockwise[1]]
}

const CYCLES: [[[Slot; 4]; 2]; 3] = [
    [UP_DOWN, counter(UP_DOWN)],
    [RIGHT_LEFT, counter(RIGHT_LEFT)],
    [FRONT_BACK, counter(FRONT_BACK)],
];

/// The four slots turned by `spin` about `axis`, in the order data flows.
pub(crate) const fn cycle_order(axis: Axis, spin: Spin) -> [Slot; 4] {
    CYCLES[axis as usize][spin as usize]
}

/// A concrete row or column on one face, in reading order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Strip {
    face: Face,
    cells: [(usize, usize); 3],
}

impl Slot {
    /// Address layer `index` of the cycle on this slot's face. `index` is
    /// the row (`UpDown`) or column (`RightLeft`) on FRONT, or the column on
    /// RIGHT (`FrontBack`).
    pub(crate) fn strip(self, index: usize) -> Strip {
        let index = self.mirror.apply(index);
        let mut cells = match self.line {
            Line::Row => [(index, 0), (index, 1), (index, 2)],
            Line::Col => [(0, index), (1, index), (2, index)],
        };
        if self.reversed {
            cells.reverse();
        }
        Strip {
            face: self.face,
            cells,
        }
    }
}

impl Cube {
    fn read_strip(&self, strip: Strip) -> [Color; 3] {
        strip.cells.map(|(row, col)| self.get(strip.face, row, col))
    }

    fn write_strip(&mut self, strip: Strip, colors: [Color; 3]) {
        for ((row, col), color) in strip.cells.into_iter().zip(colors) {
            self.set(strip.face, row, col, color);
        }
    }

    /// Rotate four strips in place: `strips[0]` takes the facelets of
    /// `strips[3]`, `strips[3]` those of `strips[2]`, `strips[2]` those of
    /// `strips[1]` and `strips[1]` the original contents of `strips[0]`.
    fn cycle_strips(&mut self, strips: [Strip; 4]) {
        let backup = self.read_strip(strips[0]);
        for (to, from) in [(0, 3), (3, 2), (2, 1)] {
            let moved = self.read_strip(strips[from]);
            self.write_strip(strips[to], moved);
        }
        self.write_strip(strips[1], backup);
    }

    /// Cycle layer `index` about `axis` a quarter turn without touching any
    /// face's own grid.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..3`.
    pub(crate) fn rotate_layer(&mut self, axis: Axis, spin: Spin, index: usize) {
        assert!(index < 3, "layer index {index} out of range");
        self.cycle_strips(cycle_order(axis, spin).map(|slot| slot.strip(index)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelets::Color;

    #[test]
    fn only_back_is_mirrored() {
        for face in Face::ALL {
            let expected = if face == Face::Back {
                Mirror::Reflected
            } else {
                Mirror::Identity
            };
            assert_eq!(mirror_rule(face), expected);
        }
        assert_eq!(Mirror::Reflected.apply(0), 2);
        assert_eq!(Mirror::Reflected.apply(1), 1);
        assert_eq!(Mirror::Reflected.apply(2), 0);
    }

    #[test]
    fn cycles_skip_the_faces_on_their_axis() {
        for axis in Axis::ALL {
            for spin in [Spin::Clockwise, Spin::CounterClockwise] {
                let faces = cycle_order(axis, spin).map(|slot| slot.face);
                for face in Face::ALL {
                    let on_axis = Axis::of(face) == axis;
                    assert_eq!(faces.contains(&face), !on_axis, "{axis:?} {face:?}");
                }
            }
        }
    }

    #[test]
    fn counter_cycle_keeps_the_first_slot() {
        for axis in Axis::ALL {
            let clockwise = cycle_order(axis, Spin::Clockwise);
            let counter = cycle_order(axis, Spin::CounterClockwise);
            assert_eq!(counter[0], clockwise[0]);
            assert_eq!(counter[2], clockwise[2]);
            assert_eq!(counter[1], clockwise[3]);
            assert_eq!(counter[3], clockwise[1]);
        }
    }

    #[test]
    fn spin_is_judged_from_the_reference_face() {
        for face in Face::ALL {
            let reference = Axis::of(face).reference_face();
            let spin = Spin::seen_from(face, true);
            if face == reference {
                assert_eq!(spin, Spin::Clockwise);
            } else {
                assert_eq!(reference, face.opposite());
                assert_eq!(spin, Spin::CounterClockwise);
            }
            assert_eq!(Spin::seen_from(face, false), spin.reversed());
        }
    }

    #[test]
    fn back_column_is_mirrored_and_read_upwards() {
        let strip = RIGHT_LEFT[2].strip(2);
        assert_eq!(strip.face, Face::Back);
        assert_eq!(strip.cells, [(2, 0), (1, 0), (0, 0)]);

        let middle = RIGHT_LEFT[2].strip(1);
        assert_eq!(middle.cells, [(2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn top_row_moves_right_to_front() {
        let mut cube = Cube::new();
        let right = cube.get(Face::Right, 0, 0);
        let front = cube.get(Face::Front, 0, 0);
        cube.rotate_layer(Axis::UpDown, Spin::Clockwise, 0);

        assert_eq!(cube.rows_of(Face::Front)[0], [right; 3]);
        assert_eq!(cube.rows_of(Face::Left)[0], [front; 3]);
        assert_eq!(cube.rows_of(Face::Front)[1], [front; 3]);
    }

    #[test]
    fn layer_cycles_have_order_four() {
        let mut cube = Cube::new();
        // Make every facelet distinguishable by position within its face.
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    cube.set(face, row, col, Color::ALL[(row * 3 + col + face as usize) % 6]);
                }
            }
        }
        for axis in Axis::ALL {
            for index in 0..3 {
                let before = cube.clone();
                cube.rotate_layer(axis, Spin::Clockwise, index);
                cube.rotate_layer(axis, Spin::CounterClockwise, index);
                assert_eq!(cube, before);

                for _ in 0..4 {
                    cube.rotate_layer(axis, Spin::Clockwise, index);
                }
                assert_eq!(cube, before, "{axis:?} layer {index}");
            }
        }
    }
}
