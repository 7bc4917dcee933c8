use super::BarometerApp;
use crate::model::{McqQuestion, ResultBand, SpectrumQuestion};

/// Résolveur de verdict : première tranche (dans l'ordre déclaré) qui
/// contient le total, sinon la dernière en filet de sécurité. Totale par
/// construction, `None` seulement si la liste est vide.
pub fn resolve_band(total: u32, bands: &[ResultBand]) -> Option<&ResultBand> {
    bands
        .iter()
        .find(|b| total >= b.min_score && total <= b.max_score)
        .or_else(|| bands.last())
}

impl BarometerApp {
    pub fn total_score(&self) -> u32 {
        self.session.score_part1 + self.session.score_part2
    }

    /// Position de l'aiguille sur la jauge, bornée à 0..=100 pour que
    /// l'affichage reste valide même si le total dépassait le maximum.
    pub fn toxic_percentage(&self) -> u32 {
        let max = self.deck.max_total_score().max(1);
        let pct = (self.total_score() as f64 / max as f64 * 100.0).round() as u32;
        pct.min(100)
    }

    pub(crate) fn resolve_result_index(&self) -> Option<usize> {
        let total = self.total_score();
        self.deck
            .bands
            .iter()
            .position(|b| total >= b.min_score && total <= b.max_score)
            .or_else(|| self.deck.bands.len().checked_sub(1))
    }

    /// Verdict figé à l'entrée en phase `Calculating`.
    pub fn final_band(&self) -> Option<&ResultBand> {
        self.session.result.and_then(|i| self.deck.bands.get(i))
    }

    pub fn current_mcq(&self) -> Option<&McqQuestion> {
        self.deck.part1.get(self.session.question_index)
    }

    pub fn current_spectrum(&self) -> Option<&SpectrumQuestion> {
        self.deck.part2.get(self.session.question_index)
    }
}
