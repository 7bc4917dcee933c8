use crate::BarometerApp;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText, Spinner};

pub fn ui_calculating(_app: &mut BarometerApp, ctx: &Context) {
    centered_panel(ctx, 240.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("❤").size(64.0).color(Color32::from_rgb(244, 63, 94)));
            ui.add_space(16.0);
            ui.heading(RichText::new("INTERPRÉTATION DES ASTRES...").strong());
            ui.add_space(16.0);
            ui.add(Spinner::new().size(28.0));
        });
    });
}
