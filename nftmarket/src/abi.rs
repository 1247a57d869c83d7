
alloy::sol! {
    #[sol(rpc)]
    interface INftMarket {
        function totalSupply() view returns (uint);
        function balanceOf(address owner) view returns (uint);

        // Tokens listed by `_sender` / held by `_owner`, in storage order.
        function fetchSenderTokens(address _sender) view returns (uint256[]);
        function fetchOwnerTokens(address _owner) view returns (uint256[]);
    }
}

pub fn total_supply_selector() -> alloy::primitives::Selector {
    <INftMarket::totalSupplyCall as alloy::sol_types::SolCall>::SELECTOR.into()
}

/// Human-readable fragment bound by `fetch_sender_tokens`.
pub const SENDER_ABI: &[&str] = &[
    "function totalSupply() view returns (uint256)",
    "function balanceOf(address) view returns (uint256)",
    "function fetchSenderTokens(address _sender) view returns (uint256[])",
];

/// Human-readable fragment bound by `fetch_owner_tokens`.
pub const OWNER_ABI: &[&str] = &[
    "function totalSupply() view returns (uint256)",
    "function balanceOf(address) view returns (uint256)",
    "function fetchSenderTokens(address _sender) view returns (uint256[])",
    "function fetchOwnerTokens(address _owner) view returns (uint256[])",
];
