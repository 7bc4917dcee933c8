use super::{BarometerApp, Session};
use crate::model::AnimStage;

impl BarometerApp {
    /// Recommencer depuis le début, valable depuis n'importe quelle phase.
    /// Remet la session à sa forme initiale et invalide toutes les
    /// minuteries en attente : rien d'une passe précédente ne peut plus
    /// muter la nouvelle.
    pub fn restart(&mut self) {
        self.session = Session::default();
        self.anim = AnimStage::Waiting;
        self.anim_entered = 0.0;
        self.scheduler.cancel_all();
        log::info!("restart : retour à l'intro");
    }
}
