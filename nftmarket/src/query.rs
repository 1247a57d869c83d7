use alloy::primitives::{Address, Selector};
use alloy::sol_types::SolCall;

use crate::abi::{INftMarket, OWNER_ABI, SENDER_ABI};
use crate::addresses::{DEFAULT_OWNER, DEFAULT_SENDER, OWNER_MARKET, SENDER_MARKET};

/// Which token list a tool asks the market for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenQuery {
    /// `fetchSenderTokens(address)`
    Sender,
    /// `fetchOwnerTokens(address)`
    Owner,
}

impl TokenQuery {
    pub fn function_name(self) -> &'static str {
        match self {
            TokenQuery::Sender => "fetchSenderTokens",
            TokenQuery::Owner => "fetchOwnerTokens",
        }
    }

    /// Selector the binding encodes for the token fetch.
    pub fn selector(self) -> Selector {
        match self {
            TokenQuery::Sender => INftMarket::fetchSenderTokensCall::SELECTOR.into(),
            TokenQuery::Owner => INftMarket::fetchOwnerTokensCall::SELECTOR.into(),
        }
    }

    pub fn abi(self) -> &'static [&'static str] {
        match self {
            TokenQuery::Sender => SENDER_ABI,
            TokenQuery::Owner => OWNER_ABI,
        }
    }

    pub fn default_contract(self) -> Address {
        match self {
            TokenQuery::Sender => SENDER_MARKET,
            TokenQuery::Owner => OWNER_MARKET,
        }
    }

    pub fn default_holder(self) -> Address {
        match self {
            TokenQuery::Sender => DEFAULT_SENDER,
            TokenQuery::Owner => DEFAULT_OWNER,
        }
    }
}
