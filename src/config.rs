use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which predictor implementation backs the opaque model contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelBackend {
    Onnx,
    SmartCore,
    Mock,
}

impl FromStr for ModelBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "onnx" => Ok(ModelBackend::Onnx),
            "smartcore" => Ok(ModelBackend::SmartCore),
            "mock" => Ok(ModelBackend::Mock),
            _ => anyhow::bail!(
                "Invalid MODEL_BACKEND: {}. Must be 'onnx', 'smartcore' or 'mock'",
                s
            ),
        }
    }
}

impl ModelBackend {
    fn default_model_path(self) -> &'static str {
        match self {
            ModelBackend::Onnx | ModelBackend::Mock => "artifacts/model.onnx",
            ModelBackend::SmartCore => "artifacts/model.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: ModelBackend,
    pub model_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let backend_str = env::var("MODEL_BACKEND").unwrap_or_else(|_| "mock".to_string());
        let backend = ModelBackend::from_str(&backend_str)?;

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(backend.default_model_path()));

        Ok(Self {
            backend,
            model_path,
        })
    }
}
