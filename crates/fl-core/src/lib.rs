pub mod client;
pub mod error;
mod prediction;

pub use prediction::{ClassScore, PredictionResult};
