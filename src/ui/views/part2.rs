use crate::BarometerApp;
use crate::ui::layout::{centered_panel, ghost_button, primary_button, progress_header};
use egui::{Color32, Context, RichText, Slider};

pub fn ui_part2(app: &mut BarometerApp, ctx: &Context, now: f64) {
    let Some(question) = app.current_spectrum().cloned() else {
        return;
    };
    let total = app.deck.part2.len();
    let current = app.session.question_index + 1;
    let enabled = !app.session.is_transitioning;

    centered_panel(ctx, 420.0, 660.0, |ui| {
        progress_header(ui, "Chapitre II : La Résonance", current, total);
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Le Spectrum — Question {}", question.id))
                    .small()
                    .weak(),
            );
        });
        ui.add_space(18.0);

        // Les deux pôles s'allument quand le curseur penche de leur côté.
        let value = app.session.slider_value;
        ui.columns(2, |cols| {
            let left = RichText::new(&question.left);
            cols[0].label(if value <= 2 {
                left.color(Color32::from_rgb(16, 185, 129)).strong()
            } else {
                left.weak()
            });
            cols[1].with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                let right = RichText::new(&question.right);
                ui.label(if value >= 4 {
                    right.color(Color32::from_rgb(244, 63, 94)).strong()
                } else {
                    right.weak()
                });
            });
        });
        ui.add_space(12.0);

        let mut slider_value = value;
        ui.vertical_centered(|ui| {
            ui.spacing_mut().slider_width = (ui.available_width() * 0.8).min(420.0);
            ui.add_enabled(enabled, Slider::new(&mut slider_value, 1..=5).integer());
        });
        app.session.slider_value = slider_value;
        ui.add_space(20.0);

        if primary_button(ui, ui.available_width() * 0.5, "Confirmer le Destin") {
            app.answer_part2(slider_value, now);
        }
        ui.add_space(8.0);
        // Le neutre du Spectrum passe par le même barème (3 → 2 points).
        if ghost_button(ui, enabled, "👻 L'esprit reste muet (Neutre)") {
            app.answer_part2(3, now);
        }
    });
}
