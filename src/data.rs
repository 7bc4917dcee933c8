// src/data.rs

use crate::model::Deck;

/// Charge la banque de questions et de verdicts depuis le YAML embarqué.
pub fn read_deck_embedded() -> Deck {
    let file_content = include_str!("data/deck.yaml");
    serde_yaml::from_str(file_content).expect("Impossible de parser la banque YAML du baromètre")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_deck_parses_and_has_expected_shape() {
        let deck = read_deck_embedded();
        assert_eq!(deck.part1.len(), 10);
        assert_eq!(deck.part2.len(), 10);
        assert_eq!(deck.bands.len(), 4);
        assert!(deck.part1.iter().all(|q| !q.options.is_empty()));
    }

    #[test]
    fn embedded_deck_max_total_score_is_seventy() {
        let deck = read_deck_embedded();
        assert_eq!(deck.max_total_score(), 70);
    }

    #[test]
    fn bands_cover_the_reachable_range_in_order() {
        let deck = read_deck_embedded();
        assert_eq!(deck.bands.first().map(|b| b.min_score), Some(0));
        let top = deck.bands.last().expect("au moins un verdict");
        assert!(top.max_score >= deck.max_total_score());
        for pair in deck.bands.windows(2) {
            assert_eq!(pair[1].min_score, pair[0].max_score + 1);
        }
    }
}
