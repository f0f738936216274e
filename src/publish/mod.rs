// src/publish/mod.rs

pub mod file_publisher;

use crate::error::PublishError;
use crate::model::AuctionResult;

pub use file_publisher::FilePublisher;

/// **发布竞价结果**
///
/// 唯一可能失败的环节，失败信息由调用方原样向上返回。
#[cfg_attr(test, mockall::automock)]
pub trait Publisher {
    fn publish(&self, result: &AuctionResult) -> Result<(), PublishError>;
}

/// 不做任何 I/O，总是成功
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl Publisher for NoopPublisher {
    fn publish(&self, _result: &AuctionResult) -> Result<(), PublishError> {
        Ok(())
    }
}
