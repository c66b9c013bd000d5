use crate::error::LoadError;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const SERVICE_FILE: &str = "api_service.json";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEndpoint {
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiService {
    pub name: String,
    pub endpoints: Vec<ApiEndpoint>,
}

impl ApiService {
    /// Reads the whole service description. The file is closed before returning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: display.clone(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
            path: display,
            source,
        })
    }
}
