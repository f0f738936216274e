// src/model/source.rs

use std::sync::Arc;

/// **能够提供国家码的对象**
///
/// 原始事件、用户信息、竞价结果都实现该 trait，后两者只是向内层委托。
#[cfg_attr(test, mockall::automock)]
pub trait CountryCodeSource: Send + Sync {
    fn country_code(&self) -> String;
}

/// 用户信息中保存的国家码来源（共享引用，不拥有来源本身的生命周期语义）
pub type SharedSource = Arc<dyn CountryCodeSource>;
