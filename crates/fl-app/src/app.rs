use std::path::Path;

use egui::TextureHandle;
use log::{error, warn};

use crate::config::AppConfig;
use crate::session::{Effect, Event, SelectedImage, Session};
use crate::ui::{self, UiEvent, UiState};
use crate::worker::{PredictWorker, WorkerCommand};

pub struct App {
    session: Session,
    worker: PredictWorker,
    ui: UiState,
    /// Preview texture cached per session generation; rebuilt when the user
    /// picks a different file.
    preview_texture: Option<(u64, TextureHandle)>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        let worker = PredictWorker::new(config.predict_url, cc.egui_ctx.clone())?;

        let mut ui = UiState::new();
        ui.add_component(Box::new(ui::TopPanel::default()));
        ui.add_component(Box::new(ui::SidePanel::default()));
        ui.add_component(Box::new(ui::CentralPanel::default()));

        Ok(Self {
            session: Session::default(),
            worker,
            ui,
            preview_texture: None,
        })
    }

    fn apply(&mut self, event: Event) {
        for effect in self.session.handle(event) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        let command = match effect {
            Effect::DecodePreview { generation, bytes } => {
                WorkerCommand::DecodePreview { generation, bytes }
            }
            Effect::RequestPrediction {
                generation,
                file_name,
                bytes,
            } => WorkerCommand::Predict {
                generation,
                file_name,
                bytes,
            },
        };

        if let Err(err) = self.worker.send(command) {
            error!("dropping effect: {err}");
        }
    }

    fn pick_image(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
            .pick_file();

        let image = picked.and_then(|path| match std::fs::read(&path) {
            Ok(bytes) => Some(SelectedImage {
                file_name: file_name_of(&path),
                bytes,
            }),
            Err(err) => {
                warn!("could not read {}: {err}", path.display());
                None
            }
        });

        // A cancelled dialog clears the current selection, same as picking
        // nothing in a browser file input.
        self.apply(Event::ImageChosen(image));
    }

    fn refresh_preview_texture(&mut self, ctx: &egui::Context) {
        match &self.session.preview {
            Some(preview) => {
                let generation = self.session.generation;
                let outdated = self
                    .preview_texture
                    .as_ref()
                    .is_none_or(|(cached, _)| *cached != generation);
                if outdated {
                    let bitmap = egui::ColorImage::from_rgba_unmultiplied(
                        preview.size,
                        &preview.rgba,
                    );
                    let texture =
                        ctx.load_texture("preview", bitmap, egui::TextureOptions::LINEAR);
                    self.preview_texture = Some((generation, texture));
                }
            }
            None => self.preview_texture = None,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Some(response) = self.worker.try_recv_response() {
            self.apply(response.into_event());
        }

        self.refresh_preview_texture(ctx);

        let preview = self.preview_texture.as_ref().map(|(_, texture)| texture);
        self.ui.draw(ctx, &self.session, preview);

        while let Some(event) = self.ui.try_recv_event() {
            match event {
                UiEvent::PickImage => self.pick_image(),
                UiEvent::Submit => self.apply(Event::SubmitRequested),
                UiEvent::Reset => self.apply(Event::ResetRequested),
            }
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_owned())
}
