// src/config/config_manager.rs

use tracing::info;

use crate::config::adapters::ConfigAdapter;
use crate::error::ConfigError;
use crate::model::DspCatalog;

#[derive(Clone, Debug, Default)]
pub struct ConfigManager {
    catalog: DspCatalog,
}

impl ConfigManager {
    pub fn new(catalog: DspCatalog) -> Self {
        ConfigManager { catalog }
    }

    /// 从 adapter 读取目录，空候选列表在 `DspCatalog::new` 中已被拒绝
    pub fn from_adapter(adapter: &dyn ConfigAdapter) -> Result<Self, ConfigError> {
        let catalog = adapter.get_dsp_catalog()?;
        info!(
            regions = catalog.regions().len(),
            global = catalog.global().len(),
            "dsp catalog loaded"
        );
        Ok(ConfigManager::new(catalog))
    }

    pub fn catalog(&self) -> &DspCatalog {
        &self.catalog
    }
}
