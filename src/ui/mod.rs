pub mod layout;
pub mod views;

use crate::app::BarometerApp;
use crate::model::{AnimStage, Phase};
use eframe::{App, Frame};
use egui::Context;

impl App for BarometerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // L'horloge de frame d'egui sert d'horodatage unique : toutes les
        // continuations différées s'appliquent ici, jamais ailleurs.
        let now = ctx.input(|i| i.time);
        self.tick(now);

        // Dispatch par phase vers les écrans de views/
        match self.session.phase {
            Phase::Intro => views::intro::ui_intro(self, ctx),
            Phase::Part1 => views::part1::ui_part1(self, ctx, now),
            Phase::Intermission => views::intermission::ui_intermission(self, ctx),
            Phase::Part2 => views::part2::ui_part2(self, ctx, now),
            Phase::Calculating => views::calculating::ui_calculating(self, ctx),
            Phase::Result => {
                if self.anim == AnimStage::Reading {
                    views::letter::ui_letter(self, ctx);
                } else {
                    views::reveal::ui_reveal(self, ctx, now);
                }
            }
        }

        // Réveil : en continu tant que la colombe bouge, sinon calé sur la
        // prochaine échéance de la file.
        if matches!(self.anim, AnimStage::BirdFlying | AnimStage::BirdDropping) {
            ctx.request_repaint();
        } else if let Some(due) = self.scheduler.next_due() {
            let wait = (due - now).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(wait));
        }
    }
}
