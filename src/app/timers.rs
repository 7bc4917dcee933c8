use super::BarometerApp;
use crate::model::{AnimStage, Phase};

/// Continuation différée déclenchée par une minuterie. Les horodatages sont
/// les secondes `f64` que fournit egui (`ctx.input(|i| i.time)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fin de la pause post-réponse : question suivante ou changement de phase.
    FinishAnswer,
    /// Fin de l'écran de calcul : entrée en phase `Result`, envol de la colombe.
    RevealResult,
    /// La colombe lâche l'enveloppe.
    BirdDrop,
    /// L'enveloppe touche le sol.
    BirdLand,
    /// Le rabat est ouvert, la lettre sort.
    LetterOut,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due: f64,
    epoch: u64,
    effect: Effect,
}

/// File de minuteries à époque. `cancel_all` incrémente l'époque : une
/// échéance posée pendant une passe précédente ne peut plus s'appliquer à la
/// passe courante, même si elle traînait encore dans la file.
#[derive(Default)]
pub struct Scheduler {
    epoch: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn schedule(&mut self, now: f64, delay: f64, effect: Effect) {
        self.pending.push(Pending {
            due: now + delay,
            epoch: self.epoch,
            effect,
        });
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Retire et renvoie (dans l'ordre de pose) les effets arrivés à
    /// échéance qui appartiennent à l'époque courante.
    pub fn take_due(&mut self, now: f64) -> Vec<Effect> {
        let epoch = self.epoch;
        let mut due = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                if p.epoch == epoch {
                    due.push(p.effect);
                }
                false
            } else {
                true
            }
        });
        due
    }

    /// Prochaine échéance en attente, pour caler `request_repaint_after`.
    pub fn next_due(&self) -> Option<f64> {
        self.pending.iter().map(|p| p.due).reduce(f64::min)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl BarometerApp {
    /// À appeler une fois par frame : applique les continuations différées
    /// arrivées à échéance. Aucune autre mutation n'a lieu entre deux appels,
    /// tout se joue sur le fil de l'interface.
    pub fn tick(&mut self, now: f64) {
        for effect in self.scheduler.take_due(now) {
            self.apply_effect(effect, now);
        }
    }

    fn apply_effect(&mut self, effect: Effect, now: f64) {
        log::debug!("effet différé : {effect:?}");
        match effect {
            Effect::FinishAnswer => self.finish_answer(now),
            Effect::RevealResult => {
                self.session.phase = Phase::Result;
                self.anim = AnimStage::BirdFlying;
                self.anim_entered = now;
                log::info!("phase → Result, la colombe s'envole");
                self.scheduler
                    .schedule(now, self.config.bird_flight, Effect::BirdDrop);
            }
            Effect::BirdDrop => {
                if self.anim == AnimStage::BirdFlying {
                    self.anim = AnimStage::BirdDropping;
                    self.anim_entered = now;
                    self.scheduler
                        .schedule(now, self.config.bird_drop, Effect::BirdLand);
                }
            }
            Effect::BirdLand => {
                if self.anim == AnimStage::BirdDropping {
                    self.anim = AnimStage::Grounded;
                    self.anim_entered = now;
                }
            }
            Effect::LetterOut => {
                if self.anim == AnimStage::Opening {
                    self.anim = AnimStage::LetterOut;
                    self.anim_entered = now;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_due_returns_effects_in_posting_order() {
        let mut sched = Scheduler::default();
        sched.schedule(0.0, 3.0, Effect::BirdDrop);
        sched.schedule(0.0, 1.0, Effect::FinishAnswer);
        assert_eq!(sched.take_due(0.5), vec![]);
        assert_eq!(sched.take_due(3.5), vec![Effect::BirdDrop, Effect::FinishAnswer]);
        assert!(!sched.has_pending());
    }

    #[test]
    fn cancel_all_drops_pending_and_invalidates_late_firings() {
        let mut sched = Scheduler::default();
        sched.schedule(0.0, 1.0, Effect::RevealResult);
        sched.cancel_all();
        assert!(sched.take_due(10.0).is_empty());

        // Même une échéance de l'ancienne époque qui serait restée dans la
        // file est filtrée au moment du retrait.
        sched.schedule(0.0, 1.0, Effect::BirdLand);
        sched.cancel_all();
        sched.schedule(0.0, 2.0, Effect::LetterOut);
        assert_eq!(sched.take_due(5.0), vec![Effect::LetterOut]);
    }

    #[test]
    fn next_due_reports_the_earliest_deadline() {
        let mut sched = Scheduler::default();
        assert_eq!(sched.next_due(), None);
        sched.schedule(0.0, 2.5, Effect::RevealResult);
        sched.schedule(0.0, 0.4, Effect::FinishAnswer);
        assert_eq!(sched.next_due(), Some(0.4));
    }
}
