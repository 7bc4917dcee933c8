use crate::BarometerApp;
use crate::ui::layout::{centered_panel, primary_button};
use egui::{Color32, Context, RichText};

pub fn ui_intro(app: &mut BarometerApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("❤").size(56.0).color(Color32::from_rgb(244, 63, 94)));
            ui.add_space(8.0);
            ui.heading(RichText::new("Le Baromètre du Cœur").size(34.0).strong());
            ui.add_space(14.0);
            ui.label(
                RichText::new(
                    "\"En cette Saint-Valentin, ouvrez votre cœur à la vérité. \
                     Votre histoire est-elle un poème éternel ou un chapitre à clore ?\"",
                )
                .italics(),
            );
            ui.add_space(24.0);
        });
        if primary_button(ui, ui.available_width() * 0.6, "Commencer le Rituel ➡") {
            app.start();
        }
    });
}
