mod central_panel;
mod side_panel;
mod top_panel;

pub use central_panel::CentralPanel;
pub use side_panel::SidePanel;
pub use top_panel::TopPanel;

use std::sync::mpsc::{Receiver, Sender, channel};

use egui::{Context, TextureHandle};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    PickImage,
    Submit,
    Reset,
}

/// Read-only view of the app handed to every component for one frame.
pub struct UiContext<'a> {
    pub session: &'a Session,
    pub preview: Option<&'a TextureHandle>,
    events_tx: &'a Sender<UiEvent>,
}

impl UiContext<'_> {
    pub fn send_event(&self, event: UiEvent) {
        // The receiver lives on the app for the whole run; a failed send only
        // happens during teardown.
        let _ = self.events_tx.send(event);
    }
}

pub trait UiComponent {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext);
}

pub struct UiState {
    components: Vec<Box<dyn UiComponent>>,
    events_tx: Sender<UiEvent>,
    events_rx: Receiver<UiEvent>,
}

impl UiState {
    pub fn new() -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            components: Vec::new(),
            events_tx,
            events_rx,
        }
    }

    pub fn add_component(&mut self, component: Box<dyn UiComponent>) {
        self.components.push(component);
    }

    pub fn draw(&mut self, ctx: &Context, session: &Session, preview: Option<&TextureHandle>) {
        let ui_ctx = UiContext {
            session,
            preview,
            events_tx: &self.events_tx,
        };
        for component in self.components.iter_mut() {
            component.show(ctx, &ui_ctx);
        }
    }

    pub fn try_recv_event(&self) -> Option<UiEvent> {
        self.events_rx.try_recv().ok()
    }
}
