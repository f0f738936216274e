// src/error.rs

use thiserror::Error;

/// **发布失败**
///
/// 只携带一条不透明的描述信息，`Display` 输出与构造时的信息完全一致，
/// 上层原样透传，不做包装。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PublishError(pub String);

impl PublishError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// **配置加载错误**
///
/// 只在启动阶段出现，事件处理链路本身不会产生该错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("candidate list for region `{0}` is empty")]
    EmptyCandidates(String),
}
