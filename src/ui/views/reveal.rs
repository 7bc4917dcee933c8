use crate::BarometerApp;
use crate::model::AnimStage;
use egui::{Align2, Button, CentralPanel, Color32, Context, FontId, Pos2, Rect, RichText, vec2};

const INDIGO: Color32 = Color32::from_rgb(55, 48, 163);
const ROSE: Color32 = Color32::from_rgb(225, 29, 72);

/// Séquence de révélation : vol de la colombe, chute de l'enveloppe,
/// sceau à briser, lettre à tirer. Tout est dessiné au painter à partir du
/// temps écoulé dans l'étape courante.
pub fn ui_reveal(app: &mut BarometerApp, ctx: &Context, now: f64) {
    CentralPanel::default().show(ctx, |ui| {
        let rect = ui.max_rect();
        let center = rect.center();
        let elapsed = (now - app.anim_entered).max(0.0);

        match app.anim {
            // Transitoire : la minuterie de révélation va poser BirdFlying.
            AnimStage::Waiting | AnimStage::Reading => {}

            AnimStage::BirdFlying => {
                let progress = (elapsed / app.config.bird_flight).clamp(0.0, 1.0) as f32;
                let x = rect.left() + rect.width() * (0.05 + 0.60 * progress);
                let y = rect.top()
                    + rect.height() * 0.25
                    + (progress * std::f32::consts::TAU).sin() * 18.0;
                let painter = ui.painter();
                painter.text(
                    Pos2::new(x, y),
                    Align2::CENTER_CENTER,
                    "🕊",
                    FontId::proportional(52.0),
                    INDIGO,
                );
                // L'enveloppe voyage sous la colombe.
                painter.text(
                    Pos2::new(x + 10.0, y + 34.0),
                    Align2::CENTER_CENTER,
                    "✉",
                    FontId::proportional(24.0),
                    ROSE,
                );
            }

            AnimStage::BirdDropping => {
                let progress = (elapsed / app.config.bird_drop).clamp(0.0, 1.0) as f32;
                let painter = ui.painter();
                // La colombe repart vers le haut du cadre…
                let bird_x = rect.left() + rect.width() * (0.65 + 0.30 * progress);
                let bird_y = rect.top() + rect.height() * (0.25 - 0.20 * progress);
                painter.text(
                    Pos2::new(bird_x, bird_y),
                    Align2::CENTER_CENTER,
                    "🕊",
                    FontId::proportional(44.0),
                    INDIGO,
                );
                // …pendant que l'enveloppe tombe vers le centre.
                let env_y = rect.top() + rect.height() * 0.25
                    + (center.y - rect.top() - rect.height() * 0.25) * progress;
                painter.text(
                    Pos2::new(center.x, env_y),
                    Align2::CENTER_CENTER,
                    "✉",
                    FontId::proportional(64.0),
                    ROSE,
                );
            }

            AnimStage::Grounded => {
                ui.painter().text(
                    center,
                    Align2::CENTER_CENTER,
                    "✉",
                    FontId::proportional(110.0),
                    ROSE,
                );
                let seal_rect =
                    Rect::from_center_size(Pos2::new(center.x, center.y + 90.0), vec2(220.0, 44.0));
                if ui
                    .put(seal_rect, Button::new(RichText::new("💌 Briser le sceau").strong()))
                    .clicked()
                {
                    app.open_envelope(now);
                }
                ui.painter().text(
                    Pos2::new(center.x, rect.bottom() - 60.0),
                    Align2::CENTER_CENTER,
                    "Une colombe vous a apporté un message...",
                    FontId::proportional(15.0),
                    ROSE,
                );
            }

            AnimStage::Opening => {
                let painter = ui.painter();
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "💌",
                    FontId::proportional(110.0),
                    ROSE,
                );
                painter.text(
                    Pos2::new(center.x, rect.bottom() - 60.0),
                    Align2::CENTER_CENTER,
                    "Le sceau se brise...",
                    FontId::proportional(15.0),
                    ROSE,
                );
            }

            AnimStage::LetterOut => {
                let painter = ui.painter();
                painter.text(
                    Pos2::new(center.x, center.y - 70.0),
                    Align2::CENTER_CENTER,
                    "📜",
                    FontId::proportional(72.0),
                    Color32::from_rgb(120, 53, 15),
                );
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "✉",
                    FontId::proportional(110.0),
                    ROSE,
                );
                let read_rect =
                    Rect::from_center_size(Pos2::new(center.x, center.y + 90.0), vec2(200.0, 44.0));
                if ui
                    .put(read_rect, Button::new(RichText::new("Lire la lettre").strong()))
                    .clicked()
                {
                    app.read_letter();
                }
            }
        }
    });
}
