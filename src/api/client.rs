//! HTTP API Client
//!
//! Functions for communicating with the TrafficLens inference API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::state::comparison::ComparisonResult;

/// Default API base URL, overridable at build time
pub const DEFAULT_API_BASE: &str = match option_env!("TRAFFICLENS_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("trafficlens_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub probabilities: Option<Vec<Vec<f64>>>,
}

/// One entry from the model registry.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ModelArchitecture {
    pub hidden_layer_sizes: Vec<usize>,
    pub out_activation: String,
    pub layers: Vec<ArchitectureLayer>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ArchitectureLayer {
    pub input_dim: usize,
    pub output_dim: usize,
    pub edges: Vec<LayerEdge>,
}

/// Strongest connection between two units of adjacent layers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct LayerEdge {
    pub src: usize,
    pub tgt: usize,
    pub weight: f64,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

// ============ API Functions ============

/// Run the named supervised model over a batch of feature vectors and
/// return one probability row per instance. Models without probability
/// support return an empty list.
pub async fn predict(model: &str, instances: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, String> {
    #[derive(serde::Serialize)]
    struct PredictRequest {
        model: String,
        instances: Vec<Vec<f64>>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict", api_base))
        .json(&PredictRequest {
            model: model.to_string(),
            instances: instances.to_vec(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    let result: PredictResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.probabilities.unwrap_or_default())
}

/// Ping the DBSCAN endpoint with a batch of instances. Only the HTTP
/// status matters; the live feed synthesizes its samples client side.
pub async fn predict_dbscan(instances: &[Vec<f64>]) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct PredictRequest {
        model: String,
        instances: Vec<Vec<f64>>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict/dbscan", api_base))
        .json(&PredictRequest {
            model: "dbscan".to_string(),
            instances: instances.to_vec(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    Ok(())
}

/// Upload a CSV and compare its columns against the training dataset
pub async fn compare_dataset(file: web_sys::File) -> Result<ComparisonResult, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|_| "Form build error".to_string())?;
    form.append_with_blob("file", &file)
        .map_err(|_| "Form build error".to_string())?;

    let response = Request::post(&format!("{}/compare-dataset", api_base))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the model registry
pub async fn fetch_models() -> Result<Vec<ModelInfo>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/models", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    let result: HashMap<String, ModelInfo> = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    let mut models: Vec<ModelInfo> = result.into_values().collect();
    models.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(models)
}

/// Fetch the layer graph of a trained network, keeping the `top_k`
/// strongest edges per layer
pub async fn fetch_architecture(model: &str, top_k: usize) -> Result<ModelArchitecture, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/model-architecture/{}?top_k={}",
        api_base, model, top_k
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check API health
pub async fn check_health() -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    let health: HealthResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;
    if health.status != "ok" {
        return Err(format!("API reported status: {}", health.status));
    }

    Ok(())
}
