// src/model/event.rs

use std::sync::Arc;
use uuid::Uuid;

use crate::model::source::CountryCodeSource;
use crate::model::user::{UserInfo, UserInfoResolvable, UserInfoResolver};

/// **上游投递的原始事件**，构造后不再修改
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub country_code: String,
    pub publisher_id: String,
    pub gamer_id: String,
}

impl Event {
    /// 空事件，所有字段为空字符串
    pub fn empty() -> Self {
        Self::default()
    }

    /// 创建事件，id 使用 UUID v4
    pub fn new(country_code: &str, publisher_id: &str, gamer_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            country_code: country_code.to_string(),
            publisher_id: publisher_id.to_string(),
            gamer_id: gamer_id.to_string(),
        }
    }
}

impl CountryCodeSource for Event {
    fn country_code(&self) -> String {
        self.country_code.clone()
    }
}

impl UserInfoResolvable for Event {
    fn retrieve_user_info(&self, resolver: &dyn UserInfoResolver) -> UserInfo {
        let user = resolver.resolve(Arc::new(self.clone()));
        // resolver 没有填 gamer_id 时，用事件自带的
        if user.gamer_id.is_empty() {
            user.with_gamer_id(&self.gamer_id)
        } else {
            user
        }
    }
}
