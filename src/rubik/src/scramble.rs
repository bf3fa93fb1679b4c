use crate::{cube::Cube, moves::Move};
use log::debug;

impl Cube {
    /// Apply `count` moves drawn uniformly from [`Move::ALL`] and return
    /// them in the order they were applied.
    pub fn scramble(&mut self, count: usize) -> Vec<Move> {
        self.scramble_with(&mut fastrand::Rng::new(), count)
    }

    /// Like [`Cube::scramble`] but drawing from `rng`, for reproducible
    /// scrambles.
    pub fn scramble_with(&mut self, rng: &mut fastrand::Rng, count: usize) -> Vec<Move> {
        let moves: Vec<Move> = (0..count)
            .map(|_| Move::ALL[rng.usize(..Move::ALL.len())])
            .collect();
        for &move_ in &moves {
            self.apply(move_);
        }
        debug!(
            "Scrambled with {count} moves: {}",
            Move::format_sequence(&moves)
        );
        moves
    }
}
