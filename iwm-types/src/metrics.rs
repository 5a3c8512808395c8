use serde::{Deserialize, Serialize};

/// Training metrics of the consumption model, served verbatim from the
/// backend's `training_metrics.json`. Descriptive only.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(default)]
    pub model_type: String,
    #[serde(default)]
    pub training_date: String,
    #[serde(default)]
    pub data_points: Option<u64>,
    #[serde(default)]
    pub features_count: Option<u32>,
    #[serde(default)]
    pub districts: Option<u32>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub cross_validation: CrossValidation,
    /// Most important features first, as ranked by the trainer.
    #[serde(default)]
    pub top_features: Option<Vec<FeatureImportance>>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct CrossValidation {
    #[serde(default)]
    pub val_r2: f64,
    #[serde(default)]
    pub val_mae: f64,
    #[serde(default)]
    pub val_rmse: f64,
    #[serde(default)]
    pub splits: Option<u32>,
    #[serde(default, rename = "type")]
    pub split_type: Option<String>,
    #[serde(default)]
    pub train_mae: Option<f64>,
    #[serde(default)]
    pub train_rmse: Option<f64>,
    #[serde(default)]
    pub train_r2: Option<f64>,
    #[serde(default)]
    pub val_mape: Option<f64>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_training_metrics() {
        let body = r#"{
            "model_type": "RandomForestRegressor",
            "training_date": "2025-12-08T10:12:00",
            "data_points": 4680,
            "features_count": 21,
            "districts": 39,
            "years": [2015, 2016],
            "cross_validation": {"splits": 5, "type": "TimeSeriesSplit",
                                 "val_r2": 0.91, "val_mae": 10423.1, "val_rmse": 15210.7},
            "top_features": [{"feature": "lag_1_consumption", "importance": 0.42}]
        }"#;
        let metrics: ModelMetrics = serde_json::from_str(body).unwrap();
        assert_eq!(metrics.cross_validation.split_type.as_deref(), Some("TimeSeriesSplit"));
        assert_eq!(metrics.top_features.unwrap()[0].feature, "lag_1_consumption");
    }

    #[test]
    fn test_top_features_are_optional() {
        let metrics: ModelMetrics =
            serde_json::from_str(r#"{"model_type": "RandomForestRegressor"}"#).unwrap();
        assert!(metrics.top_features.is_none());
    }
}
