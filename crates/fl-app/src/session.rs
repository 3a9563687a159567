use fl_core::PredictionResult;

use crate::preview::PreviewImage;

/// Validation text for a submit with no file selected.
pub const NO_IMAGE_MESSAGE: &str = "Please upload an image";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Outcome slot of the last submission. An error message and a result can
/// never coexist because they are arms of the same enum.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded(PredictionResult),
    Failed(String),
}

/// All mutable UI state, driven exclusively through [`Session::handle`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub image: Option<SelectedImage>,
    pub preview: Option<PreviewImage>,
    pub phase: Phase,
    /// Bumped on every file change and reset. Completions carry the value they
    /// were issued under; a mismatch means the user has moved on and the
    /// completion is dropped.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A file was picked, or the picker was cancelled (`None`).
    ImageChosen(Option<SelectedImage>),
    SubmitRequested,
    ResetRequested,
    PreviewDecoded {
        generation: u64,
        image: Option<PreviewImage>,
    },
    PredictionFinished {
        generation: u64,
        outcome: Result<PredictionResult, String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DecodePreview {
        generation: u64,
        bytes: Vec<u8>,
    },
    RequestPrediction {
        generation: u64,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Pure transition function: mutates the session and returns the effects
    /// the caller must execute. No I/O happens in here.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::ImageChosen(image) => {
                self.generation += 1;
                self.image = image;
                self.preview = None;
                self.phase = Phase::Idle;

                match &self.image {
                    Some(selected) => vec![Effect::DecodePreview {
                        generation: self.generation,
                        bytes: selected.bytes.clone(),
                    }],
                    None => Vec::new(),
                }
            }

            Event::SubmitRequested => match &self.image {
                None => {
                    self.phase = Phase::Failed(NO_IMAGE_MESSAGE.to_owned());
                    Vec::new()
                }
                Some(selected) => {
                    self.phase = Phase::Loading;
                    vec![Effect::RequestPrediction {
                        generation: self.generation,
                        file_name: selected.file_name.clone(),
                        bytes: selected.bytes.clone(),
                    }]
                }
            },

            Event::ResetRequested => {
                *self = Session {
                    generation: self.generation + 1,
                    ..Session::default()
                };
                Vec::new()
            }

            Event::PreviewDecoded { generation, image } => {
                if generation == self.generation {
                    self.preview = image;
                }
                Vec::new()
            }

            Event::PredictionFinished {
                generation,
                outcome,
            } => {
                if generation == self.generation {
                    self.phase = match outcome {
                        Ok(result) => Phase::Succeeded(result),
                        Err(message) => Phase::Failed(message),
                    };
                }
                Vec::new()
            }
        }
    }
}
