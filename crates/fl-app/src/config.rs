use std::env;

use log::info;

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub predict_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let predict_url =
            env::var("PREDICT_URL").unwrap_or_else(|_| DEFAULT_PREDICT_URL.to_owned());
        info!("using prediction endpoint {}", predict_url);

        Self { predict_url }
    }
}
