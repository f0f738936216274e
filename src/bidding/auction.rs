// src/bidding/auction.rs

use tracing::debug;

use crate::model::{AuctionResult, CountryCodeSource, Dsp, DspCatalog, UserInfo};

/// **选出胜出的 DSP**
///
/// 目前固定取第 0 个候选，不比较 `bid_value`。候选列表由 `DspCatalog`
/// 保证非空。
pub fn select_winner(candidates: &[Dsp]) -> Dsp {
    candidates[0].clone()
}

/// 聚合用户信息和胜出 DSP
pub fn aggregate(user: UserInfo, winning_dsp: Dsp) -> AuctionResult {
    AuctionResult::new(user, winning_dsp)
}

/// **按国家码询价的 DSP 竞价**
#[derive(Clone, Debug, Default)]
pub struct DspAuction {
    catalog: DspCatalog,
}

impl DspAuction {
    pub fn new(catalog: DspCatalog) -> Self {
        Self { catalog }
    }

    /// 根据用户国家码选择候选列表并决出胜者
    pub fn run_auction(&self, user: &UserInfo) -> AuctionResult {
        let country_code = user.country_code();
        let candidates = self.catalog.candidates_for(&country_code);
        let winner = select_winner(&candidates);
        debug!(
            country_code = %country_code,
            candidates = candidates.len(),
            winning_dsp = %winner.dsp_id,
            "dsp auction finished"
        );
        aggregate(user.clone(), winner)
    }
}
