use alloy::transports::{RpcError, TransportError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Contract call failed: {0}")]
    ContractCall(String),
}

impl ViewError {
    pub fn is_network(&self) -> bool {
        matches!(self, ViewError::Network(_))
    }
}

impl From<TransportError> for ViewError {
    fn from(err: TransportError) -> Self {
        match err {
            RpcError::Transport(kind) => ViewError::Network(kind.to_string()),
            // error responses (reverts), decode failures, null results
            other => ViewError::ContractCall(other.to_string()),
        }
    }
}

impl From<alloy::contract::Error> for ViewError {
    fn from(err: alloy::contract::Error) -> Self {
        match err {
            alloy::contract::Error::TransportError(e) => e.into(),
            other => ViewError::ContractCall(other.to_string()),
        }
    }
}
