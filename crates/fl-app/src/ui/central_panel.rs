use egui::{Color32, Context, RichText};

use crate::ui::{UiComponent, UiContext};

#[derive(Default)]
pub struct CentralPanel {}

impl UiComponent for CentralPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        egui::CentralPanel::default().show(ctx, |ui| match ui_ctx.session.result() {
            Some(result) => {
                ui.vertical_centered(|ui| {
                    ui.heading("✅ Prediction Result");
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Animal:").strong());
                    ui.label(&result.prediction);
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Confidence:").strong());
                    ui.label(&result.confidence);
                });

                ui.add_space(10.0);
                ui.heading(RichText::new("All Predictions").size(16.0));
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        egui::Grid::new("all_predictions")
                            .striped(true)
                            .num_columns(2)
                            .show(ui, |ui| {
                                ui.label(RichText::new("Class").strong());
                                ui.label(RichText::new("Confidence (%)").strong());
                                ui.end_row();

                                // Rows stay in the order the service ranked them.
                                for score in &result.all_predictions {
                                    ui.label(&score.class);
                                    ui.label(format_confidence(score.confidence));
                                    ui.end_row();
                                }
                            });
                    });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Pick an image and press Predict to classify it.")
                            .color(Color32::GRAY)
                            .size(16.0),
                    );
                });
            }
        });
    }
}

fn format_confidence(confidence: f64) -> String {
    format!("{confidence:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidences_render_with_two_decimals() {
        assert_eq!(format_confidence(97.2), "97.20");
        assert_eq!(format_confidence(2.8), "2.80");
        assert_eq!(format_confidence(0.0), "0.00");
    }
}
