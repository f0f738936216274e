// src/model/user.rs

use std::fmt;
use std::sync::Arc;

use crate::model::event::Event;
use crate::model::source::{CountryCodeSource, SharedSource};

/// **用户信息**
///
/// 由 resolver 从国家码来源推导得到，创建后不再修改。
/// `country_source` 只是回指来源，国家码始终委托给它读取。
#[derive(Clone)]
pub struct UserInfo {
    pub gamer_id: String,
    pub start_counts: u32,
    pub click_counts: u32,
    country_source: SharedSource,
}

impl UserInfo {
    /// 计数器为 0，gamer_id 为空
    pub fn new(country_source: SharedSource) -> Self {
        Self {
            gamer_id: String::new(),
            start_counts: 0,
            click_counts: 0,
            country_source,
        }
    }

    pub fn with_gamer_id(mut self, gamer_id: &str) -> Self {
        self.gamer_id = gamer_id.to_string();
        self
    }
}

impl Default for UserInfo {
    fn default() -> Self {
        Self::new(Arc::new(Event::empty()))
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("gamer_id", &self.gamer_id)
            .field("start_counts", &self.start_counts)
            .field("click_counts", &self.click_counts)
            .field("country_code", &self.country_source.country_code())
            .finish()
    }
}

impl CountryCodeSource for UserInfo {
    fn country_code(&self) -> String {
        self.country_source.country_code()
    }
}

/// **从国家码来源推导用户信息**
#[cfg_attr(test, mockall::automock)]
pub trait UserInfoResolver {
    fn resolve(&self, source: Arc<dyn CountryCodeSource>) -> UserInfo;
}

/// 默认 resolver：只挂上来源，其它字段取默认值
#[derive(Debug, Default, Clone, Copy)]
pub struct CountryCodeResolver;

impl UserInfoResolver for CountryCodeResolver {
    fn resolve(&self, source: Arc<dyn CountryCodeSource>) -> UserInfo {
        UserInfo::new(source)
    }
}

/// 可以从中取得用户信息的对象（事件、竞价结果）
pub trait UserInfoResolvable {
    fn retrieve_user_info(&self, resolver: &dyn UserInfoResolver) -> UserInfo;
}
