// src/bidding/mod.rs

pub mod auction;

pub use auction::DspAuction;
