use crate::data::read_deck_embedded;
use crate::model::{AnimStage, Deck, Phase};

// Sous-modules
pub mod actions;
pub mod queries;
pub mod resets;
pub mod timers;

pub use timers::{Effect, Scheduler};

/// Session en cours : tout l'état mutable d'une passe du baromètre.
/// Créée en phase `Intro`, remise à zéro par `restart`, jamais persistée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub phase: Phase,
    pub question_index: usize,
    pub score_part1: u32,
    pub score_part2: u32,
    pub is_transitioning: bool,
    pub result: Option<usize>, // index dans deck.bands
    /// Position affichée du curseur du Spectrum, 3 = neutre. Repart au
    /// milieu à chaque nouvelle question.
    pub slider_value: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: Phase::Intro,
            question_index: 0,
            score_part1: 0,
            score_part2: 0,
            is_transitioning: false,
            result: None,
            slider_value: 3,
        }
    }
}

/// Réglages du parcours. Les variantes proches du même flux (avec ou sans
/// intermède, rythmes différents) se replient ici au lieu d'exister en
/// copies parallèles.
#[derive(Clone, Copy, Debug)]
pub struct FlowConfig {
    /// Écran d'intermède entre les deux chapitres.
    pub intermission: bool,
    /// Pause après chaque réponse, le temps que la sélection s'affiche (s).
    pub answer_delay: f64,
    /// Durée de l'écran « interprétation des astres » (s).
    pub calculating_delay: f64,
    /// Vol de la colombe avant le lâcher de l'enveloppe (s).
    pub bird_flight: f64,
    /// Chute de l'enveloppe jusqu'au sol (s).
    pub bird_drop: f64,
    /// Ouverture du rabat avant que la lettre ne sorte (s).
    pub flap_open: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            intermission: true,
            answer_delay: 0.4,
            calculating_delay: 2.5,
            bird_flight: 3.0,
            bird_drop: 1.5,
            flap_open: 0.8,
        }
    }
}

pub struct BarometerApp {
    pub deck: Deck,
    pub config: FlowConfig,
    pub session: Session,
    pub anim: AnimStage,
    /// Horodatage d'entrée dans l'étape d'animation courante, pour que les
    /// écrans puissent interpoler le mouvement.
    pub anim_entered: f64,
    pub scheduler: Scheduler,
}

impl BarometerApp {
    pub fn new() -> Self {
        Self::with_deck(read_deck_embedded(), FlowConfig::default())
    }

    pub fn with_deck(deck: Deck, config: FlowConfig) -> Self {
        Self {
            deck,
            config,
            session: Session::default(),
            anim: AnimStage::default(),
            anim_entered: 0.0,
            scheduler: Scheduler::default(),
        }
    }
}

impl Default for BarometerApp {
    fn default() -> Self {
        Self::new()
    }
}
