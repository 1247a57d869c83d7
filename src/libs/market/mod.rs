//! Chain access for the market contract. [`client::TokenReader`] is the
//! seam the caller talks to; [`client::MarketClient`] implements it over
//! an alloy provider.
pub mod client;
