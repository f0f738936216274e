// src/pipeline.rs

use tracing::{info, warn};

use crate::bidding::DspAuction;
use crate::error::PublishError;
use crate::model::{
    AuctionResult, CountryCodeSource, Event, UserInfoResolvable, UserInfoResolver,
};
use crate::publish::Publisher;

/// **事件处理链路**
///
/// 事件 -> 用户信息 -> DSP 竞价 -> 发布，全程同步、顺序执行。
/// 只有发布环节会失败，失败时错误原样返回，不重试。
pub struct Pipeline {
    resolver: Box<dyn UserInfoResolver>,
    auction: DspAuction,
    publisher: Box<dyn Publisher>,
}

impl Pipeline {
    pub fn new(
        resolver: Box<dyn UserInfoResolver>,
        auction: DspAuction,
        publisher: Box<dyn Publisher>,
    ) -> Self {
        Self {
            resolver,
            auction,
            publisher,
        }
    }

    /// 取得用户信息并执行竞价
    pub fn handle_event(&self, source: &dyn UserInfoResolvable) -> AuctionResult {
        let user = source.retrieve_user_info(self.resolver.as_ref());
        self.auction.run_auction(&user)
    }

    /// 发布竞价结果，publisher 的错误原样返回
    pub fn publish(&self, result: &AuctionResult) -> Result<(), PublishError> {
        self.publisher.publish(result)
    }

    /// 处理单个事件并发布
    pub fn process(&self, event: &Event) -> Result<AuctionResult, PublishError> {
        info!(
            event_id = %event.id,
            country_code = %event.country_code(),
            publisher_id = %event.publisher_id,
            "handling event"
        );
        let result = self.handle_event(event);
        if let Err(e) = self.publish(&result) {
            warn!(event_id = %event.id, error = %e, "publish failed");
            return Err(e);
        }
        info!(event_id = %event.id, winning_dsp = %result.dsp_id(), "event processed");
        Ok(result)
    }

    /// 以空事件跑一遍完整链路
    pub fn run_pipeline(&self) -> Result<AuctionResult, PublishError> {
        self.process(&Event::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::MockCountryCodeSource;
    use crate::model::user::MockUserInfoResolver;
    use crate::model::{CountryCodeResolver, Dsp, UserInfo};
    use crate::publish::{MockPublisher, NoopPublisher};
    use std::sync::Arc;

    const PUBLISH_ERROR: &str = "Error publisher user-dsp data";

    fn pipeline_with(publisher: impl Publisher + 'static) -> Pipeline {
        Pipeline::new(Box::new(CountryCodeResolver), DspAuction::default(), Box::new(publisher))
    }

    fn noop_pipeline() -> Pipeline {
        pipeline_with(NoopPublisher)
    }

    #[test]
    fn handle_event_us_wins_global1() {
        let result = noop_pipeline().handle_event(&Event::new("US", "pub-1", "gamer-1"));
        assert_eq!(result.country_code(), "US");
        assert_eq!(result.dsp_id(), "Global1");
        assert_eq!(result.user.gamer_id, "gamer-1");
    }

    #[test]
    fn handle_event_cn_wins_china1() {
        let result = noop_pipeline().handle_event(&Event::new("CN", "pub-1", "gamer-1"));
        assert_eq!(result.country_code(), "CN");
        assert_eq!(result.dsp_id(), "China1");
    }

    #[test]
    fn handle_event_uses_injected_resolver() {
        let mut resolver = MockUserInfoResolver::new();
        resolver.expect_resolve().times(1).returning(|_| {
            let mut source = MockCountryCodeSource::new();
            source.expect_country_code().return_const("MX".to_string());
            UserInfo::new(Arc::new(source))
        });
        let pipeline = Pipeline::new(
            Box::new(resolver),
            DspAuction::default(),
            Box::new(NoopPublisher),
        );

        let result = pipeline.handle_event(&Event::new("CN", "pub-1", "gamer-1"));
        assert_eq!(result.country_code(), "MX");
        assert_eq!(result.dsp_id(), "Global1");
    }

    #[test]
    fn handle_event_on_result_reuses_held_user() {
        let mut resolver = MockUserInfoResolver::new();
        resolver.expect_resolve().never();
        let pipeline = Pipeline::new(
            Box::new(resolver),
            DspAuction::default(),
            Box::new(NoopPublisher),
        );

        let previous = AuctionResult::new(
            UserInfo::new(Arc::new(Event::new("CN", "pub-1", "gamer-1"))),
            Dsp::new("FakeID"),
        );
        let result = pipeline.handle_event(&previous);
        assert_eq!(result.country_code(), "CN");
        assert_eq!(result.dsp_id(), "China1");
    }

    #[test]
    fn publish_success_on_empty_result() {
        assert!(noop_pipeline().publish(&AuctionResult::default()).is_ok());
    }

    #[test]
    fn publish_failure_is_returned_unchanged() {
        let mut publisher = MockPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(PublishError::new(PUBLISH_ERROR)));
        let pipeline = pipeline_with(publisher);

        let err = pipeline.run_pipeline().unwrap_err();
        assert_eq!(err, PublishError::new(PUBLISH_ERROR));
        assert_eq!(err.to_string(), PUBLISH_ERROR);
    }

    #[test]
    fn process_publishes_winning_result_once() {
        let mut publisher = MockPublisher::new();
        publisher
            .expect_publish()
            .withf(|result| result.dsp_id() == "China1" && result.country_code() == "CN")
            .times(1)
            .returning(|_| Ok(()));
        let pipeline = pipeline_with(publisher);

        let result = pipeline.process(&Event::new("CN", "pub-1", "gamer-1")).unwrap();
        assert_eq!(result.dsp_id(), "China1");
    }

    #[test]
    fn run_pipeline_uses_empty_event() {
        let result = noop_pipeline().run_pipeline().unwrap();
        assert_eq!(result.country_code(), "");
        assert_eq!(result.dsp_id(), "Global1");
        assert!(result.user.gamer_id.is_empty());
    }
}
