use egui::{Color32, Context, RichText};

use crate::ui::{UiComponent, UiContext};

#[derive(Default)]
pub struct TopPanel {}

impl UiComponent for TopPanel {
    fn show(&mut self, ctx: &Context, _ui_ctx: &UiContext) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🐾 Fauna Lens");
                ui.separator();
                ui.label(
                    RichText::new("Upload an image and let AI identify the animal species.")
                        .color(Color32::LIGHT_BLUE),
                );
            });
        });
    }
}
