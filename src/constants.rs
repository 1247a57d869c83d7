/// JSON-RPC endpoint. Required; there is no public fallback.
pub const RPC_URL_VAR: &str = "ALCHEMY_MUMBAY_URL";
/// Optional override of the market contract address.
pub const CONTRACT_VAR: &str = "MARKET_CONTRACT";
/// Optional override of the sender/owner whose tokens are fetched.
pub const HOLDER_VAR: &str = "MARKET_HOLDER";

pub const DEBUG_LOGS_VAR: &str = "DEBUG_LOGS";

pub const TOTAL_SUPPLY_LABEL: &str = "totalSupply";
pub const TOKENS_LABEL: &str = "tokens";
