use alloy::primitives::address;
use alloy::primitives::Address;

// Market deployments on Mumbai. Older sender deployment:
// 0x8F4a7f404d09Fea7A9A6c1c9E99a9F341D3DD9A6
pub const SENDER_MARKET: Address = address!("0xe57de939325abcd5c1a935d944e142ecf846b84a");
pub const OWNER_MARKET: Address = address!("0xd971A8147314118bc930cA88E729F1760e1a938b");

pub const DEFAULT_SENDER: Address = address!("0x34C064b128237DB2B917962c45083Ef140564bD8");
pub const DEFAULT_OWNER: Address = address!("0x5f6939026c7944A8ca09752039AD30F34c2B7baA");
