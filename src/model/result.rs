// src/model/result.rs

use crate::model::dsp::Dsp;
use crate::model::source::CountryCodeSource;
use crate::model::user::{UserInfo, UserInfoResolvable, UserInfoResolver};

/// **竞价结果**：用户信息 + 胜出的 DSP，交给 Publisher 后即丢弃
#[derive(Debug, Clone, Default)]
pub struct AuctionResult {
    pub user: UserInfo,
    pub winning_dsp: Dsp,
}

impl AuctionResult {
    pub fn new(user: UserInfo, winning_dsp: Dsp) -> Self {
        Self { user, winning_dsp }
    }

    pub fn dsp_id(&self) -> &str {
        &self.winning_dsp.dsp_id
    }
}

impl CountryCodeSource for AuctionResult {
    fn country_code(&self) -> String {
        self.user.country_code()
    }
}

impl UserInfoResolvable for AuctionResult {
    // 已经持有用户信息，不需要再走 resolver
    fn retrieve_user_info(&self, _resolver: &dyn UserInfoResolver) -> UserInfo {
        self.user.clone()
    }
}
