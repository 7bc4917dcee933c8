use super::{BarometerApp, Effect};
use crate::model::{AnimStage, Phase};

impl BarometerApp {
    /// Ouvre le chapitre I depuis l'écran d'accueil.
    pub fn start(&mut self) {
        if self.session.phase != Phase::Intro {
            log::debug!("start ignoré en phase {:?}", self.session.phase);
            return;
        }
        self.session.phase = Phase::Part1;
        self.session.question_index = 0;
        log::info!("phase → Part1");
    }

    /// Enregistre l'option choisie au chapitre I. La pause différée laisse la
    /// sélection s'afficher avant de tourner la page ; `is_transitioning`
    /// absorbe un double clic pendant cette fenêtre pour ne pas compter le
    /// score deux fois.
    pub fn answer_part1(&mut self, score: u32, now: f64) {
        if self.session.phase != Phase::Part1 || self.session.is_transitioning {
            log::debug!(
                "answer_part1 ignorée (phase {:?}, transition {})",
                self.session.phase,
                self.session.is_transitioning
            );
            return;
        }
        self.session.is_transitioning = true;
        self.session.score_part1 += score;
        self.scheduler
            .schedule(now, self.config.answer_delay, Effect::FinishAnswer);
    }

    /// Quitte l'intermède pour entrer dans le Spectrum.
    pub fn start_part2(&mut self) {
        if self.session.phase != Phase::Intermission {
            log::debug!("start_part2 ignoré en phase {:?}", self.session.phase);
            return;
        }
        self.session.phase = Phase::Part2;
        self.session.question_index = 0;
        self.session.slider_value = 3;
        log::info!("phase → Part2");
    }

    /// Enregistre la position du curseur (1..=5) au chapitre II. Même garde
    /// de réentrance que `answer_part1`. Le barème est `valeur - 1` : le
    /// milieu (3) vaut donc 2 points, voir la question ouverte en DESIGN.md.
    pub fn answer_part2(&mut self, value: u32, now: f64) {
        if self.session.phase != Phase::Part2 || self.session.is_transitioning {
            log::debug!(
                "answer_part2 ignorée (phase {:?}, transition {})",
                self.session.phase,
                self.session.is_transitioning
            );
            return;
        }
        let points = value.clamp(1, 5) - 1;
        self.session.is_transitioning = true;
        self.session.score_part2 += points;
        self.scheduler
            .schedule(now, self.config.answer_delay, Effect::FinishAnswer);
    }

    /// Geste utilisateur : briser le sceau. N'agit que si l'enveloppe est
    /// exactement au sol, les clics impatients pendant le vol ne font rien.
    pub fn open_envelope(&mut self, now: f64) {
        if self.session.phase != Phase::Result || self.anim != AnimStage::Grounded {
            log::debug!("open_envelope ignoré en {:?}", self.anim);
            return;
        }
        self.anim = AnimStage::Opening;
        self.anim_entered = now;
        self.scheduler
            .schedule(now, self.config.flap_open, Effect::LetterOut);
    }

    /// Geste utilisateur : tirer la lettre pour la lire. Exige l'état
    /// `LetterOut`, sinon no-op.
    pub fn read_letter(&mut self) {
        if self.session.phase != Phase::Result || self.anim != AnimStage::LetterOut {
            log::debug!("read_letter ignoré en {:?}", self.anim);
            return;
        }
        self.anim = AnimStage::Reading;
        log::info!("lettre ouverte, fin du parcours");
    }

    /// Continuation de la pause post-réponse : question suivante, ou bascule
    /// de chapitre quand la page courante était la dernière.
    pub(crate) fn finish_answer(&mut self, now: f64) {
        match self.session.phase {
            Phase::Part1 => {
                if self.session.question_index + 1 < self.deck.part1.len() {
                    self.session.question_index += 1;
                } else {
                    self.session.phase = if self.config.intermission {
                        Phase::Intermission
                    } else {
                        Phase::Part2
                    };
                    self.session.question_index = 0;
                    log::info!("chapitre I terminé, phase → {:?}", self.session.phase);
                }
            }
            Phase::Part2 => {
                if self.session.question_index + 1 < self.deck.part2.len() {
                    self.session.question_index += 1;
                } else {
                    self.enter_calculating(now);
                }
            }
            // Un restart a pu passer entre-temps ; l'époque de la file rend
            // ce cas inatteignable, on ne touche à rien par prudence.
            _ => {}
        }
        self.session.is_transitioning = false;
        // Le curseur repart au neutre pour la page suivante.
        self.session.slider_value = 3;
    }

    fn enter_calculating(&mut self, now: f64) {
        self.session.phase = Phase::Calculating;
        self.session.result = self.resolve_result_index();
        log::info!(
            "score total {} → verdict {:?}",
            self.total_score(),
            self.final_band().map(|b| b.id.as_str())
        );
        self.scheduler
            .schedule(now, self.config.calculating_delay, Effect::RevealResult);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FlowConfig;

    fn app() -> BarometerApp {
        BarometerApp::new()
    }

    /// Déroule une réponse et sa continuation différée à partir de `t`,
    /// renvoie l'horodatage après la pause.
    fn settle(app: &mut BarometerApp, t: f64) -> f64 {
        let after = t + 1.0;
        app.tick(after);
        after
    }

    #[test]
    fn start_moves_to_part1_only_from_intro() {
        let mut app = app();
        app.start();
        assert_eq!(app.session.phase, Phase::Part1);
        assert_eq!(app.session.question_index, 0);

        // Rejouer start en plein quiz ne fait rien.
        app.answer_part1(2, 0.0);
        app.start();
        assert_eq!(app.session.phase, Phase::Part1);
        assert_eq!(app.session.score_part1, 2);
    }

    #[test]
    fn part1_scores_sum_over_a_full_pass() {
        let mut app = app();
        app.start();
        let mut t = 0.0;
        let mut expected = 0;
        for i in 0..app.deck.part1.len() {
            let score = (i % 4) as u32;
            expected += score;
            app.answer_part1(score, t);
            t = settle(&mut app, t);
        }
        assert_eq!(app.session.score_part1, expected);
        assert_eq!(app.session.phase, Phase::Intermission);
        assert_eq!(app.session.question_index, 0);
    }

    #[test]
    fn double_submission_in_the_guard_window_counts_once() {
        let mut app = app();
        app.start();
        app.answer_part1(3, 0.0);
        app.answer_part1(3, 0.1); // avant la continuation : absorbée
        assert_eq!(app.session.score_part1, 3);
        app.tick(1.0);
        assert_eq!(app.session.question_index, 1);
        assert!(!app.session.is_transitioning);

        // Même garde côté Spectrum.
        app.session.phase = Phase::Part2;
        app.session.question_index = 0;
        app.answer_part2(5, 1.0);
        app.answer_part2(5, 1.1);
        assert_eq!(app.session.score_part2, 4);
    }

    #[test]
    fn spectrum_points_follow_value_minus_one() {
        let mut app = app();
        app.session.phase = Phase::Part2;
        let mut t = 0.0;
        for value in [1, 3, 5] {
            app.answer_part2(value, t);
            t = settle(&mut app, t);
        }
        // 0 + 2 + 4 : le milieu du curseur pèse bien 2 points.
        assert_eq!(app.session.score_part2, 6);
    }

    #[test]
    fn spectrum_values_are_clamped_to_the_slider_range() {
        let mut app = app();
        app.session.phase = Phase::Part2;
        app.answer_part2(9, 0.0);
        app.tick(1.0);
        assert_eq!(app.session.score_part2, 4);
    }

    #[test]
    fn last_spectrum_answer_enters_calculating_and_resolves() {
        let mut app = app();
        app.session.phase = Phase::Part2;
        app.session.question_index = app.deck.part2.len() - 1;
        app.answer_part2(1, 0.0);
        app.tick(1.0);
        assert_eq!(app.session.phase, Phase::Calculating);
        assert!(app.session.result.is_some());
        assert_eq!(app.final_band().map(|b| b.id.as_str()), Some("eden"));
    }

    #[test]
    fn skipping_intermission_goes_straight_to_part2() {
        let deck = crate::data::read_deck_embedded();
        let config = FlowConfig {
            intermission: false,
            ..FlowConfig::default()
        };
        let mut app = BarometerApp::with_deck(deck, config);
        app.start();
        app.session.question_index = app.deck.part1.len() - 1;
        app.answer_part1(0, 0.0);
        app.tick(1.0);
        assert_eq!(app.session.phase, Phase::Part2);
        assert_eq!(app.session.question_index, 0);
    }

    #[test]
    fn gestures_never_skip_animation_stages() {
        let mut app = app();
        app.session.phase = Phase::Result;
        app.anim = AnimStage::BirdFlying;

        app.open_envelope(0.0);
        assert_eq!(app.anim, AnimStage::BirdFlying);
        app.read_letter();
        assert_eq!(app.anim, AnimStage::BirdFlying);

        app.anim = AnimStage::Grounded;
        app.read_letter(); // toujours pas de lettre à lire
        assert_eq!(app.anim, AnimStage::Grounded);

        app.open_envelope(0.0);
        assert_eq!(app.anim, AnimStage::Opening);
        app.open_envelope(0.0); // double clic sur le sceau : absorbé
        assert_eq!(app.anim, AnimStage::Opening);

        app.tick(1.0);
        assert_eq!(app.anim, AnimStage::LetterOut);
        app.read_letter();
        assert_eq!(app.anim, AnimStage::Reading);
    }

    #[test]
    fn full_healthy_run_lands_in_the_lowest_band() {
        let mut app = app();
        app.start();
        let mut t = 0.0;
        for _ in 0..app.deck.part1.len() {
            app.answer_part1(0, t);
            t = settle(&mut app, t);
        }
        assert_eq!(app.session.phase, Phase::Intermission);
        app.start_part2();
        for _ in 0..app.deck.part2.len() {
            app.answer_part2(1, t);
            t = settle(&mut app, t);
        }
        assert_eq!(app.session.phase, Phase::Calculating);
        assert_eq!(app.total_score(), 0);
        assert_eq!(app.final_band().map(|b| b.id.as_str()), Some("eden"));
        assert_eq!(app.toxic_percentage(), 0);
    }

    #[test]
    fn full_toxic_run_reaches_the_letter_through_every_stage() {
        let mut app = app();
        app.start();
        let mut t = 0.0;
        for _ in 0..app.deck.part1.len() {
            app.answer_part1(3, t);
            t = settle(&mut app, t);
        }
        app.start_part2();
        for _ in 0..app.deck.part2.len() {
            app.answer_part2(5, t);
            t = settle(&mut app, t);
        }
        assert_eq!(app.session.score_part1, 30);
        assert_eq!(app.session.score_part2, 40);
        assert_eq!(app.total_score(), 70);
        assert_eq!(app.final_band().map(|b| b.id.as_str()), Some("vortex"));
        assert_eq!(app.toxic_percentage(), 100);

        // Révélation : calcul, vol, lâcher, atterrissage, sceau, lettre.
        t += 3.0;
        app.tick(t);
        assert_eq!(app.session.phase, Phase::Result);
        assert_eq!(app.anim, AnimStage::BirdFlying);

        t += 3.5;
        app.tick(t);
        assert_eq!(app.anim, AnimStage::BirdDropping);

        t += 2.0;
        app.tick(t);
        assert_eq!(app.anim, AnimStage::Grounded);

        app.open_envelope(t);
        t += 1.0;
        app.tick(t);
        assert_eq!(app.anim, AnimStage::LetterOut);

        app.read_letter();
        assert_eq!(app.anim, AnimStage::Reading);
    }
}
