use rand::RngCore;

use crate::drill_engine::rng::shuffle_in_place;

/// A shuffled queue of parameter tuples consumed front to back.
///
/// When every card has been drawn the deck reshuffles itself and starts over,
/// so a tuple never comes back before the whole pool has been seen. A deck is
/// owned by a single drill and never shared.
#[derive(Debug, Clone)]
pub struct Deck<T> {
    cards: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Deck<T> {
    /// Shuffle `pool` into a fresh deck.
    pub fn new_shuffled(rng: &mut dyn RngCore, pool: Vec<T>) -> Self {
        let mut cards = pool;
        shuffle_in_place(rng, &mut cards);
        Deck { cards, cursor: 0 }
    }

    /// Draw the next card, reshuffling first if the deck is exhausted.
    /// Returns `None` only for an empty pool.
    pub fn draw(&mut self, rng: &mut dyn RngCore) -> Option<T> {
        if self.cards.is_empty() {
            return None;
        }
        if self.cursor >= self.cards.len() {
            tracing::debug!(cards = self.cards.len(), "deck exhausted, reshuffling");
            shuffle_in_place(rng, &mut self.cards);
            self.cursor = 0;
        }
        let card = self.cards[self.cursor].clone();
        self.cursor += 1;
        Some(card)
    }

    /// Cards left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn one_pass_visits_every_card_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::new_shuffled(&mut rng, (0..30).collect::<Vec<u32>>());
        let mut seen = HashSet::new();
        for _ in 0..30 {
            let card = deck.draw(&mut rng).unwrap();
            assert!(seen.insert(card), "card {card} drawn twice in one pass");
        }
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn exhausted_deck_reshuffles_and_resets() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new_shuffled(&mut rng, vec!['a', 'b', 'c']);
        for _ in 0..3 {
            deck.draw(&mut rng);
        }
        assert!(deck.draw(&mut rng).is_some());
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck: Deck<u8> = Deck::new_shuffled(&mut rng, Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.draw(&mut rng), None);
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::new_shuffled(&mut rng, (0..52).collect());
            (0..5).filter_map(|_| deck.draw(&mut rng)).collect()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }
}
