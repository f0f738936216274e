// src/publish/file_publisher.rs

use std::io::Write;
use tracing::info;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;

use crate::error::PublishError;
use crate::logging::publish_log::PublishRecord;
use crate::model::AuctionResult;
use crate::publish::Publisher;

/// 发布文件名前缀，按小时滚动
pub const PUBLISH_FILE_NAME: &str = "user_dsp_data.json";

/// **把竞价结果按 JSON 行写入滚动文件**
pub struct FilePublisher {
    appender: RollingFileAppender,
}

impl FilePublisher {
    /// - `log_dir`: 发布文件所在目录，不存在时自动创建；无法创建或打开文件时返回错误
    pub fn new(log_dir: &str) -> Result<Self, InitError> {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::HOURLY)
            .filename_prefix(PUBLISH_FILE_NAME)
            .build(log_dir)?;
        Ok(Self { appender })
    }
}

impl Publisher for FilePublisher {
    fn publish(&self, result: &AuctionResult) -> Result<(), PublishError> {
        let record = PublishRecord::new(result);
        let content = serde_json::to_string(&record)
            .map_err(|e| PublishError::new(format!("Failed to encode user-dsp data: {}", e)))?
            + "\n";

        let mut writer = self.appender.make_writer();
        writer
            .write_all(content.as_bytes())
            .map_err(|e| PublishError::new(format!("Failed to write user-dsp data: {}", e)))?;

        info!(
            publish_id = %record.publish_id,
            winning_dsp = %record.winning_dsp,
            "user-dsp data published"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dsp, Event, UserInfo};
    use std::fs;
    use std::sync::Arc;
    use uuid::Uuid;

    #[test]
    fn publish_appends_json_line() {
        let dir = std::env::temp_dir().join(format!("adx-pipeline-{}", Uuid::new_v4()));
        let dir_str = dir.to_str().unwrap().to_string();
        let publisher = FilePublisher::new(&dir_str).unwrap();

        let user = UserInfo::new(Arc::new(Event::new("US", "pub-1", "gamer-1")));
        let result = AuctionResult::new(user, Dsp::new("Global1"));
        publisher.publish(&result).unwrap();

        let files: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(PUBLISH_FILE_NAME))
            .collect();
        assert_eq!(files.len(), 1);

        let content = fs::read_to_string(files[0].path()).unwrap();
        let record: PublishRecord = serde_json::from_str(content.trim_end()).unwrap();
        assert_eq!(record.winning_dsp, "Global1");
        assert_eq!(record.country_code, "US");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unusable_log_dir_is_an_error() {
        // 目录位置已经被普通文件占用
        let path = std::env::temp_dir().join(format!("adx-pipeline-{}", Uuid::new_v4()));
        fs::write(&path, "not a directory").unwrap();

        assert!(FilePublisher::new(path.to_str().unwrap()).is_err());

        fs::remove_file(&path).unwrap();
    }
}
