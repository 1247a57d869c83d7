
use alloy::contract::Error;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;

use crate::abi::INftMarket;
use crate::query::TokenQuery;

pub async fn total_supply<P: Provider + Clone>(provider: P, market: Address) -> Result<U256, Error> {
    let m = INftMarket::new(market, provider);
    m.totalSupply().call().await
}

/// Token ids for `holder`, in the order the contract returns them.
pub async fn fetch_tokens<P: Provider + Clone>(
    provider: P,
    market: Address,
    query: TokenQuery,
    holder: Address,
) -> Result<Vec<U256>, Error> {
    let m = INftMarket::new(market, provider);
    match query {
        TokenQuery::Sender => m.fetchSenderTokens(holder).call().await,
        TokenQuery::Owner => m.fetchOwnerTokens(holder).call().await,
    }
}
