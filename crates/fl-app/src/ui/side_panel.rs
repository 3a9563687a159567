use egui::{Color32, Context, Margin, RichText};

use crate::ui::{UiComponent, UiContext, UiEvent};

#[derive(Default)]
pub struct SidePanel {}

impl UiComponent for SidePanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        let session = ui_ctx.session;
        let loading = session.is_loading();

        egui::SidePanel::left("side_panel")
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.heading(RichText::new("🖼 Image").size(16.0));
                ui.add_space(5.0);

                let choose = ui.add_enabled(
                    !loading,
                    egui::Button::new("📁 Choose Image…")
                        .min_size(egui::vec2(ui.available_width(), 30.0)),
                );
                if choose.clicked() {
                    ui_ctx.send_event(UiEvent::PickImage);
                }

                if let Some(image) = &session.image {
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new(&image.file_name)
                            .small()
                            .color(Color32::GRAY),
                    );
                }

                if let Some(texture) = ui_ctx.preview {
                    ui.add_space(8.0);
                    ui.add(
                        egui::Image::new(texture)
                            .max_width(ui.available_width())
                            .max_height(300.0),
                    );
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let submit = ui.add_enabled(
                        !loading,
                        egui::Button::new(RichText::new("🧠 Predict Animal").size(14.0)),
                    );
                    if submit.clicked() {
                        ui_ctx.send_event(UiEvent::Submit);
                    }

                    // Reset only appears once something is selected.
                    if session.image.is_some() {
                        let reset = ui.add_enabled(!loading, egui::Button::new("🔄 Reset"));
                        if reset.clicked() {
                            ui_ctx.send_event(UiEvent::Reset);
                        }
                    }
                });

                if loading {
                    ui.add_space(8.0);
                    egui::Frame::new()
                        .fill(Color32::from_rgb(30, 50, 80))
                        .inner_margin(Margin::same(10))
                        .corner_radius(egui::CornerRadius::same(5))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label("Processing…");
                            });
                        });
                }

                if let Some(error) = session.error() {
                    ui.add_space(8.0);
                    egui::Frame::new()
                        .fill(Color32::from_rgb(80, 30, 30))
                        .inner_margin(Margin::same(10))
                        .corner_radius(egui::CornerRadius::same(5))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("⚠ {error}")).color(Color32::LIGHT_RED),
                            );
                        });
                }
            });
    }
}
