use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use nftmarket::TokenQuery;
use url::Url;

use crate::libs::error::ViewError;

/// Read side of the market contract.
#[allow(async_fn_in_trait)]
pub trait TokenReader {
    async fn total_supply(&self, contract: Address) -> Result<U256, ViewError>;

    async fn tokens_of(
        &self,
        contract: Address,
        query: TokenQuery,
        holder: Address,
    ) -> Result<Vec<U256>, ViewError>;
}

/// [`TokenReader`] that issues `eth_call`s through the `sol!` bindings.
#[derive(Clone)]
pub struct MarketClient<P: Provider + Clone> {
    pub provider: P,
}

impl<P: Provider + Clone> MarketClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

/// HTTP client for `rpc_url`. Nothing is sent until the first call.
pub fn connect_http(rpc_url: Url) -> MarketClient<impl Provider + Clone> {
    MarketClient::new(ProviderBuilder::new().connect_http(rpc_url))
}

impl<P: Provider + Clone> TokenReader for MarketClient<P> {
    async fn total_supply(&self, contract: Address) -> Result<U256, ViewError> {
        Ok(nftmarket::total_supply(self.provider.clone(), contract).await?)
    }

    async fn tokens_of(
        &self,
        contract: Address,
        query: TokenQuery,
        holder: Address,
    ) -> Result<Vec<U256>, ViewError> {
        Ok(nftmarket::fetch_tokens(self.provider.clone(), contract, query, holder).await?)
    }
}
