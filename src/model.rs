use serde::Deserialize;

/// Étape principale du parcours : intro → part1 → [intermission] → part2
/// → calculating → result. `Result` est terminale jusqu'au restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Part1,
    Intermission,
    Part2,
    Calculating,
    Result,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Intro
    }
}

/// Sous-étape de la révélation animée, valable uniquement en phase `Result`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimStage {
    Waiting,
    BirdFlying,
    BirdDropping,
    Grounded,
    Opening,
    LetterOut,
    Reading,
}

impl Default for AnimStage {
    fn default() -> Self {
        AnimStage::Waiting
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct McqOption {
    pub id: String, // 'A', 'B', 'C', 'D'
    pub text: String,
    pub score: u32, // 0 = sain, plus haut = toxique
}

#[derive(Deserialize, Debug, Clone)]
pub struct McqQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<McqOption>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpectrumQuestion {
    pub id: u32,
    pub left: String,  // pôle sain
    pub right: String, // pôle toxique
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    #[serde(rename = "Sain")]
    Sain,
    #[serde(rename = "Modéré")]
    Modere,
    #[serde(rename = "Toxique")]
    Toxique,
    #[serde(rename = "Dangereux")]
    Dangereux,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Sain => "Sain",
            Level::Modere => "Modéré",
            Level::Toxique => "Toxique",
            Level::Dangereux => "Dangereux",
        }
    }
}

/// Tranche de score associée à un verdict. Les tranches sont évaluées dans
/// l'ordre déclaré et la première qui contient le total gagne ; la dernière
/// sert de plafond fourre-tout.
#[derive(Deserialize, Debug, Clone)]
pub struct ResultBand {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: Level,
    pub icon: String,
    pub min_score: u32,
    pub max_score: u32,
}

/// Banque complète du baromètre : les deux questionnaires et les verdicts.
#[derive(Deserialize, Debug, Clone)]
pub struct Deck {
    pub part1: Vec<McqQuestion>,
    pub part2: Vec<SpectrumQuestion>,
    pub bands: Vec<ResultBand>,
}

impl Deck {
    /// Score maximal atteignable : meilleure option de chaque question MCQ
    /// plus 4 points par question spectre (curseur à 5 → 5 - 1 points).
    /// C'est le dénominateur de la jauge de toxicité (70 avec la banque
    /// embarquée).
    pub fn max_total_score(&self) -> u32 {
        let part1: u32 = self
            .part1
            .iter()
            .map(|q| q.options.iter().map(|o| o.score).max().unwrap_or(0))
            .sum();
        let part2 = self.part2.len() as u32 * 4;
        part1 + part2
    }
}
