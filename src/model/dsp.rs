// src/model/dsp.rs

use serde::{Serialize, Deserialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// 中国区国家码
pub const CHINA_REGION: &str = "CN";

/// DSP 基础信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dsp {
    pub dsp_id: String,
    /// 出价，目前不参与胜出判定
    #[serde(default)]
    pub bid_value: i64,
}

impl Dsp {
    pub fn new(dsp_id: &str) -> Self {
        Self {
            dsp_id: dsp_id.to_string(),
            bid_value: 0,
        }
    }
}

/// **DSP 候选目录**
///
/// `regions` 按国家码精确匹配（区分大小写），匹配不到时使用 `global`。
/// 只能通过 `new` 或 `default` 构造，所有列表保证非空。
#[derive(Clone, Debug, PartialEq)]
pub struct DspCatalog {
    regions: HashMap<String, Vec<Dsp>>,
    global: Vec<Dsp>,
}

impl Default for DspCatalog {
    fn default() -> Self {
        let mut regions = HashMap::new();
        regions.insert(
            CHINA_REGION.to_string(),
            vec![Dsp::new("China1"), Dsp::new("China2")],
        );
        Self {
            regions,
            global: vec![Dsp::new("Global1"), Dsp::new("Global2")],
        }
    }
}

impl DspCatalog {
    /// 创建并校验目录
    pub fn new(regions: HashMap<String, Vec<Dsp>>, global: Vec<Dsp>) -> Result<Self, ConfigError> {
        let catalog = Self { regions, global };
        catalog.validate()?;
        Ok(catalog)
    }

    /// 校验所有候选列表非空
    fn validate(&self) -> Result<(), ConfigError> {
        if self.global.is_empty() {
            return Err(ConfigError::EmptyCandidates("global".to_string()));
        }
        let mut regions: Vec<_> = self.regions.iter().collect();
        regions.sort_by(|a, b| a.0.cmp(b.0));
        match regions.into_iter().find(|(_, candidates)| candidates.is_empty()) {
            Some((region, _)) => Err(ConfigError::EmptyCandidates(region.clone())),
            None => Ok(()),
        }
    }

    pub fn regions(&self) -> &HashMap<String, Vec<Dsp>> {
        &self.regions
    }

    pub fn global(&self) -> &[Dsp] {
        &self.global
    }

    /// 返回该国家码对应的候选列表（每次调用都是新的副本）
    pub fn candidates_for(&self, country_code: &str) -> Vec<Dsp> {
        self.regions
            .get(country_code)
            .unwrap_or(&self.global)
            .clone()
    }
}
