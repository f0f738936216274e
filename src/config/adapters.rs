// src/config/adapters.rs

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use crate::error::ConfigError;
use crate::model::{Dsp, DspCatalog};

/// DSP 目录文件格式，读入后交给 `DspCatalog::new` 校验
#[derive(Deserialize, Debug)]
struct CatalogFile {
    #[serde(default)]
    regions: HashMap<String, Vec<Dsp>>,
    global: Vec<Dsp>,
}

pub trait ConfigAdapter: Send + Sync {
    fn get_dsp_catalog(&self) -> Result<DspCatalog, ConfigError>;
}

/// 内置目录：CN -> China1/China2，其它 -> Global1/Global2
pub struct DefaultConfigAdapter;

impl ConfigAdapter for DefaultConfigAdapter {
    fn get_dsp_catalog(&self) -> Result<DspCatalog, ConfigError> {
        Ok(DspCatalog::default())
    }
}

/// 从 JSON 文件读取 DSP 目录
pub struct FileConfigAdapter {
    pub catalog_file: String,
}

impl FileConfigAdapter {
    pub fn new(catalog_file: &str) -> Self {
        Self {
            catalog_file: catalog_file.to_string(),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn get_dsp_catalog(&self) -> Result<DspCatalog, ConfigError> {
        let content = fs::read_to_string(&self.catalog_file).map_err(|source| ConfigError::Io {
            path: self.catalog_file.clone(),
            source,
        })?;
        let file: CatalogFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.catalog_file.clone(),
            source,
        })?;
        DspCatalog::new(file.regions, file.global)
    }
}
