use egui::{Button, CentralPanel, Color32, Context, Frame, ProgressBar, RichText, Ui};

use crate::model::Level;

/// Panneau centré verticalement, avec une largeur de contenu maximale.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// En-tête de chapitre : libellé, compteur « n / total » et barre de quête.
pub fn progress_header(ui: &mut Ui, label: &str, current: usize, total: usize) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).small().strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{current} / {total}")).small());
        });
    });
    let fraction = if total == 0 {
        0.0
    } else {
        (current as f32 / total as f32).clamp(0.0, 1.0)
    };
    ui.add(ProgressBar::new(fraction).desired_height(8.0));
}

/// Gros bouton d'action centré. Renvoie true au clic.
pub fn primary_button(ui: &mut Ui, width: f32, label: &str) -> bool {
    let btn_w = width.clamp(160.0, 420.0);
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        clicked = ui
            .add_sized([btn_w, 44.0], Button::new(RichText::new(label).strong()))
            .clicked();
    });
    clicked
}

/// Petit lien discret (« passer », « recommencer »…), sans cadre.
pub fn ghost_button(ui: &mut Ui, enabled: bool, label: &str) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        clicked = ui
            .add_enabled(enabled, Button::new(RichText::new(label).small()).frame(false))
            .clicked();
    });
    clicked
}

/// Couleur associée à un niveau de verdict (badge et jauge).
pub fn level_color(level: Level) -> Color32 {
    match level {
        Level::Sain => Color32::from_rgb(16, 185, 129),
        Level::Modere => Color32::from_rgb(251, 191, 36),
        Level::Toxique => Color32::from_rgb(249, 115, 22),
        Level::Dangereux => Color32::from_rgb(220, 38, 38),
    }
}
