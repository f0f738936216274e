// src/model/mod.rs

pub mod dsp;
pub mod event;
pub mod result;
pub mod source;
pub mod user;

pub use dsp::{Dsp, DspCatalog};
pub use event::Event;
pub use result::AuctionResult;
pub use source::CountryCodeSource;
pub use user::{CountryCodeResolver, UserInfo, UserInfoResolvable, UserInfoResolver};
