use crate::BarometerApp;
use crate::ui::layout::{ghost_button, level_color};
use egui::{CentralPanel, Context, ProgressBar, RichText, ScrollArea};

/// La lettre dépliée : verdict, jauge de toxicité et les autres chemins
/// possibles.
pub fn ui_letter(app: &mut BarometerApp, ctx: &Context) {
    let Some(band) = app.final_band().cloned() else {
        // Sans verdict il n'y a rien à lire ; on repart au début.
        app.restart();
        return;
    };
    let percentage = app.toxic_percentage();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            let w = ui.available_width().min(720.0);
            ui.vertical_centered(|ui| {
                ui.set_width(w);
                ui.add_space(24.0);
                ui.label(RichText::new("Le Verdict des Cœurs").size(30.0).strong());
                ui.label(RichText::new("Analyse spirituelle — Poste Amour").small().weak());
                ui.add_space(18.0);

                ui.label(
                    RichText::new(band.level.label().to_uppercase())
                        .small()
                        .strong()
                        .color(level_color(band.level)),
                );
                ui.add_space(6.0);
                ui.heading(
                    RichText::new(format!("{} {}", band.icon, band.title))
                        .size(26.0)
                        .strong(),
                );
                ui.add_space(14.0);
                ui.label(RichText::new("Mon cher âme en quête,").italics());
                ui.add_space(6.0);
                ui.label(&band.description);

                ui.add_space(24.0);
                ui.separator();
                ui.add_space(12.0);
                ui.label(RichText::new("NIVEAU DE TOXICITÉ").small().weak());
                ui.add_space(6.0);
                ui.add(
                    ProgressBar::new(percentage as f32 / 100.0)
                        .fill(level_color(band.level))
                        .text(format!("{percentage} %")),
                );
                ui.add_space(6.0);
                let verdict = if percentage < 33 {
                    "Tu es en sécurité."
                } else if percentage < 66 {
                    "Prudence requise."
                } else {
                    "Situation critique."
                };
                ui.label(RichText::new(verdict).italics());

                ui.add_space(24.0);
                ui.label(RichText::new("- Les autres chemins possibles -").small().weak());
                ui.add_space(8.0);
                for other in app.deck.bands.iter().filter(|b| b.id != band.id) {
                    ui.horizontal(|ui| {
                        ui.label(&other.icon);
                        ui.label(RichText::new(&other.title).strong());
                        ui.label(
                            RichText::new(other.level.label())
                                .small()
                                .color(level_color(other.level)),
                        );
                    });
                }

                ui.add_space(24.0);
            });

            if ghost_button(ui, true, "⟲ Recommencer") {
                app.restart();
            }
            ui.add_space(16.0);
        });
    });
}
