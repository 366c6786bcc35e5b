//! RNG module - uniform random piece generation with one-step lookahead
//!
//! Every draw is independent and uniform over the catalog, so the same kind
//! may come up several times in a row (no bag shuffling).
//! One `StdRng` is seeded when the queue is built and lives for the whole
//! process; restarting a game keeps drawing from the same stream.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::pieces::PieceCatalog;
use crate::types::PieceKind;

/// Piece generator holding the queued (next) piece
#[derive(Debug, Clone)]
pub struct PieceQueue {
    catalog: PieceCatalog,
    rng: StdRng,
    seed: u64,
    next: PieceKind,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    ///
    /// Returns None if the catalog is empty.
    pub fn new(catalog: PieceCatalog, seed: u64) -> Option<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = *catalog.kinds().choose(&mut rng)?;
        Some(Self {
            catalog,
            rng,
            seed,
            next,
        })
    }

    /// Peek at the queued piece without consuming it
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Promote the queued piece and draw a fresh one behind it
    pub fn draw(&mut self) -> PieceKind {
        let fresh = self.roll();
        std::mem::replace(&mut self.next, fresh)
    }

    /// Discard the queued piece and draw a new one (used on restart)
    pub fn refresh(&mut self) {
        self.next = self.roll();
    }

    fn roll(&mut self) -> PieceKind {
        // Catalog is non-empty: checked in `new`.
        let kinds = self.catalog.kinds();
        kinds[self.rng.gen_range(0..kinds.len())]
    }

    /// Uniform integer in `0..=max`, drawn from the same stream as the pieces
    pub fn gen_upto(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..=max)
    }

    /// Seed the queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_deterministic() {
        let mut q1 = PieceQueue::new(PieceCatalog::standard(), 12345).unwrap();
        let mut q2 = PieceQueue::new(PieceCatalog::standard(), 12345).unwrap();

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(q1.draw(), q2.draw());
        }
    }

    #[test]
    fn test_draw_returns_peeked_piece() {
        let mut queue = PieceQueue::new(PieceCatalog::standard(), 7).unwrap();
        for _ in 0..20 {
            let peeked = queue.peek();
            assert_eq!(queue.draw(), peeked);
        }
    }

    #[test]
    fn test_empty_catalog_has_no_queue() {
        assert!(PieceQueue::new(PieceCatalog::from_kinds(&[]), 1).is_none());
    }

    #[test]
    fn test_single_kind_catalog_repeats() {
        let mut queue = PieceQueue::new(PieceCatalog::from_kinds(&[PieceKind::T]), 99).unwrap();
        for _ in 0..10 {
            assert_eq!(queue.draw(), PieceKind::T);
        }
    }

    #[test]
    fn test_all_kinds_eventually_drawn() {
        let mut queue = PieceQueue::new(PieceCatalog::standard(), 2024).unwrap();
        let mut seen = Vec::new();
        for _ in 0..500 {
            let kind = queue.draw();
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_gen_upto_in_range() {
        let mut queue = PieceQueue::new(PieceCatalog::standard(), 3).unwrap();
        for _ in 0..100 {
            assert!(queue.gen_upto(6) <= 6);
        }
        assert_eq!(queue.gen_upto(0), 0);
    }
}
