use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use anyhow::anyhow;
use log::warn;

use fl_core::PredictionResult;
use fl_core::client::PredictClient;

use crate::preview::{self, PreviewImage};
use crate::session::Event;

pub enum WorkerCommand {
    DecodePreview {
        generation: u64,
        bytes: Vec<u8>,
    },
    Predict {
        generation: u64,
        file_name: String,
        bytes: Vec<u8>,
    },
    Shutdown,
}

pub enum WorkerResponse {
    PreviewDecoded {
        generation: u64,
        image: Option<PreviewImage>,
    },
    PredictionFinished {
        generation: u64,
        outcome: Result<PredictionResult, String>,
    },
}

impl WorkerResponse {
    pub fn into_event(self) -> Event {
        match self {
            Self::PreviewDecoded { generation, image } => {
                Event::PreviewDecoded { generation, image }
            }
            Self::PredictionFinished {
                generation,
                outcome,
            } => Event::PredictionFinished {
                generation,
                outcome,
            },
        }
    }
}

/// Background thread executing the session's effects: preview decoding and the
/// prediction request. Generation tokens pass through untouched so the session
/// can discard completions the user has moved past.
pub struct PredictWorker {
    command_tx: Sender<WorkerCommand>,
    response_rx: Receiver<WorkerResponse>,
    thread_handle: Option<JoinHandle<()>>,
}

impl PredictWorker {
    pub fn new(endpoint: String, egui_ctx: egui::Context) -> anyhow::Result<Self> {
        let (command_tx, command_rx) = channel::<WorkerCommand>();
        let (response_tx, response_rx) = channel::<WorkerResponse>();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let thread_handle = thread::spawn(move || {
            let client = PredictClient::new(endpoint);

            loop {
                match command_rx.recv() {
                    Ok(WorkerCommand::DecodePreview { generation, bytes }) => {
                        let image = preview::decode(&bytes);
                        if response_tx
                            .send(WorkerResponse::PreviewDecoded { generation, image })
                            .is_err()
                        {
                            break;
                        }
                        egui_ctx.request_repaint();
                    }

                    Ok(WorkerCommand::Predict {
                        generation,
                        file_name,
                        bytes,
                    }) => {
                        let outcome = runtime
                            .block_on(client.predict(&file_name, bytes))
                            .map_err(|err| {
                                warn!("prediction request failed: {err}");
                                err.user_message()
                            });
                        if response_tx
                            .send(WorkerResponse::PredictionFinished {
                                generation,
                                outcome,
                            })
                            .is_err()
                        {
                            break;
                        }
                        egui_ctx.request_repaint();
                    }

                    Ok(WorkerCommand::Shutdown) | Err(_) => break,
                }
            }
        });

        Ok(Self {
            command_tx,
            response_rx,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn send(&self, command: WorkerCommand) -> anyhow::Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| anyhow!("prediction worker is gone"))
    }

    pub fn try_recv_response(&self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }

    pub fn shutdown(&mut self) {
        let _ = self.command_tx.send(WorkerCommand::Shutdown);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PredictWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use fl_core::error::FALLBACK_MESSAGE;

    use crate::preview::png_bytes;

    // Nothing listens on port 9; connections are refused immediately.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/predict";

    fn test_worker() -> PredictWorker {
        PredictWorker::new(DEAD_ENDPOINT.into(), egui::Context::default()).unwrap()
    }

    #[test]
    fn decode_command_round_trips_the_generation() {
        let worker = test_worker();
        worker
            .send(WorkerCommand::DecodePreview {
                generation: 7,
                bytes: png_bytes(4, 2),
            })
            .unwrap();

        let response = worker
            .response_rx
            .recv_timeout(Duration::from_secs(10))
            .unwrap();
        match response {
            WorkerResponse::PreviewDecoded { generation, image } => {
                assert_eq!(generation, 7);
                assert_eq!(image.unwrap().size, [4, 2]);
            }
            _ => panic!("expected a preview response"),
        }
    }

    #[test]
    fn undecodable_bytes_yield_an_empty_preview() {
        let worker = test_worker();
        worker
            .send(WorkerCommand::DecodePreview {
                generation: 1,
                bytes: vec![0, 1, 2],
            })
            .unwrap();

        let response = worker
            .response_rx
            .recv_timeout(Duration::from_secs(10))
            .unwrap();
        match response {
            WorkerResponse::PreviewDecoded { image, .. } => assert_eq!(image, None),
            _ => panic!("expected a preview response"),
        }
    }

    #[test]
    fn unreachable_endpoint_reports_the_fallback_message() {
        let worker = test_worker();
        worker
            .send(WorkerCommand::Predict {
                generation: 3,
                file_name: "cat.png".into(),
                bytes: png_bytes(2, 2),
            })
            .unwrap();

        let response = worker
            .response_rx
            .recv_timeout(Duration::from_secs(30))
            .unwrap();
        match response {
            WorkerResponse::PredictionFinished {
                generation,
                outcome,
            } => {
                assert_eq!(generation, 3);
                assert_eq!(outcome.unwrap_err(), FALLBACK_MESSAGE);
            }
            _ => panic!("expected a prediction response"),
        }
    }

    #[test]
    fn drop_joins_the_worker_thread() {
        let worker = test_worker();
        drop(worker);
    }
}
