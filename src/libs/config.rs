use {
    crate::constants::{CONTRACT_VAR, HOLDER_VAR, RPC_URL_VAR},
    crate::libs::error::ViewError,
    alloy::primitives::Address,
    dotenv::dotenv,
    nftmarket::TokenQuery,
    url::Url,
};

pub fn load_env() {
    dotenv().ok();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: Url,
    pub contract_address: Address,
    pub target_address: Address,
}

impl Config {
    pub fn new(
        endpoint_url: &str,
        contract_address: Address,
        target_address: Address,
    ) -> Result<Self, ViewError> {
        let endpoint_url = Url::parse(endpoint_url).map_err(|e| {
            ViewError::Configuration(format!("{RPC_URL_VAR} is not a valid URL: {e}"))
        })?;
        Ok(Self {
            endpoint_url,
            contract_address,
            target_address,
        })
    }

    /// Load `.env`, then read the process environment.
    pub fn from_env(query: TokenQuery) -> Result<Self, ViewError> {
        load_env();
        Self::from_lookup(query, |key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset addresses fall back to the tool's defaults.
    pub fn from_lookup<F>(query: TokenQuery, lookup: F) -> Result<Self, ViewError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(RPC_URL_VAR)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ViewError::Configuration(format!("{RPC_URL_VAR} is not set")))?;
        let contract = Self::get_address(&lookup, CONTRACT_VAR, query.default_contract())?;
        let target = Self::get_address(&lookup, HOLDER_VAR, query.default_holder())?;
        Self::new(endpoint.trim(), contract, target)
    }

    /// Parse an address var; a set-but-malformed value is an error, not a fallback.
    fn get_address<F>(lookup: &F, key: &str, default: Address) -> Result<Address, ViewError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(key) {
            Some(s) if !s.trim().is_empty() => s
                .trim()
                .parse::<Address>()
                .map_err(|e| ViewError::Configuration(format!("{key}={s} is not an address: {e}"))),
            _ => Ok(default),
        }
    }
}
