use serde::{Deserialize, Serialize};

/// Successful response body of the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Top class label, e.g. "cat".
    pub prediction: String,
    /// Top confidence, preformatted by the service (e.g. "97.20%").
    pub confidence: String,
    /// Every class with its confidence, in the order the service ranked them.
    pub all_predictions: Vec<ClassScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub class: String,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_response() {
        let body = r#"{
            "prediction": "cat",
            "confidence": "97%",
            "all_predictions": [
                {"class": "cat", "confidence": 97.2},
                {"class": "dog", "confidence": 2.8}
            ]
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.prediction, "cat");
        assert_eq!(result.confidence, "97%");
        assert_eq!(result.all_predictions.len(), 2);
        assert_eq!(result.all_predictions[0].class, "cat");
        assert_eq!(result.all_predictions[0].confidence, 97.2);
        assert_eq!(result.all_predictions[1].class, "dog");
    }

    #[test]
    fn ranking_order_is_preserved() {
        // The service sorts; the client must not re-order.
        let body = r#"{
            "prediction": "gatto",
            "confidence": "55.00%",
            "all_predictions": [
                {"class": "gatto", "confidence": 55.0},
                {"class": "cane", "confidence": 30.0},
                {"class": "mucca", "confidence": 15.0}
            ]
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();
        let classes: Vec<&str> = result
            .all_predictions
            .iter()
            .map(|s| s.class.as_str())
            .collect();
        assert_eq!(classes, ["gatto", "cane", "mucca"]);
    }

    #[test]
    fn rejects_missing_fields() {
        let body = r#"{"prediction": "cat"}"#;
        assert!(serde_json::from_str::<PredictionResult>(body).is_err());
    }
}
