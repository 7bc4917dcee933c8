use crate::BarometerApp;
use crate::ui::layout::{centered_panel, ghost_button, progress_header};
use egui::{Button, Context, RichText};

pub fn ui_part1(app: &mut BarometerApp, ctx: &Context, now: f64) {
    let Some(question) = app.current_mcq().cloned() else {
        return;
    };
    let total = app.deck.part1.len();
    let current = app.session.question_index + 1;
    let enabled = !app.session.is_transitioning;

    centered_panel(ctx, 520.0, 660.0, |ui| {
        progress_header(ui, "Chapitre I : L'Ombre et la Lumière", current, total);
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(format!("Question {}", question.id)).small().weak());
            ui.add_space(4.0);
            ui.heading(&question.prompt);
        });
        ui.add_space(18.0);

        let btn_w = ui.available_width();
        for option in &question.options {
            let label = format!("{} — {}", option.id, option.text);
            let resp = ui.add_enabled(
                enabled,
                Button::new(label).wrap().min_size(egui::vec2(btn_w, 44.0)),
            );
            if resp.clicked() {
                app.answer_part1(option.score, now);
            }
            ui.add_space(6.0);
        }

        ui.add_space(10.0);
        // Raccourci neutre : compte 1 point brut, sans passer par un barème.
        if ghost_button(ui, enabled, "👻 Passer cette question (Réponse Neutre)") {
            app.answer_part1(1, now);
        }
    });
}
