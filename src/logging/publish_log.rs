// src/logging/publish_log.rs

use serde::{Serialize, Deserialize};
use chrono::Utc;
use uuid::Uuid;

use crate::model::{AuctionResult, CountryCodeSource};

/// **用户-DSP 发布日志**，每条对应一次成功的竞价结果
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublishRecord {
    pub timestamp: String,      // 记录时间（RFC3339）
    pub log_type: String,       // 日志类型，固定 "user_dsp_publish"
    pub publish_id: String,     // 本次发布的唯一标识
    pub gamer_id: String,
    pub country_code: String,
    pub winning_dsp: String,    // 胜出 DSP 的 ID
    pub bid_value: i64,
}

impl PublishRecord {
    /// **根据竞价结果创建发布日志**
    pub fn new(result: &AuctionResult) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            log_type: "user_dsp_publish".to_string(),
            publish_id: Uuid::new_v4().to_string(),
            gamer_id: result.user.gamer_id.clone(),
            country_code: result.country_code(),
            winning_dsp: result.dsp_id().to_string(),
            bid_value: result.winning_dsp.bid_value,
        }
    }
}
