use crate::BarometerApp;
use crate::ui::layout::{centered_panel, primary_button};
use egui::{Context, RichText};

pub fn ui_intermission(app: &mut BarometerApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("✨").size(40.0));
            ui.add_space(8.0);
            ui.heading(RichText::new("Le Premier Voile est Levé").size(30.0).strong());
            ui.add_space(14.0);
            ui.label(
                "Vos actes dessinent une forme, mais votre ressenti en détient la couleur. \
                 Plongez maintenant dans le Spectrum pour révéler la vérité.",
            );
            ui.add_space(24.0);
        });
        if primary_button(ui, ui.available_width() * 0.6, "Entrer dans le Spectrum") {
            app.start_part2();
        }
    });
}
