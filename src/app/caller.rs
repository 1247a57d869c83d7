use alloy::primitives::{Address, U256};
use nftmarket::TokenQuery;

use crate::app::contract::ContractRef;
use crate::app::report::Report;
use crate::libs::config::Config;
use crate::libs::error::ViewError;
use crate::libs::market::client::TokenReader;
use crate::libs::writing::{cc, short_addr};
use crate::log;

/// Binds a [`ContractRef`] and a holder to a [`TokenReader`] and runs the
/// two view calls in order.
pub struct ContractCaller<R: TokenReader> {
    reader: R,
    contract: ContractRef,
    holder: Address,
    query: TokenQuery,
}

impl<R: TokenReader> ContractCaller<R> {
    pub fn new(reader: R, config: &Config, query: TokenQuery) -> Result<Self, ViewError> {
        let contract = ContractRef::parse(config.contract_address, query.abi())?;
        contract.require("totalSupply", nftmarket::abi::total_supply_selector())?;
        contract.require(query.function_name(), query.selector())?;
        Ok(Self {
            reader,
            contract,
            holder: config.target_address,
            query,
        })
    }

    pub fn contract(&self) -> &ContractRef {
        &self.contract
    }

    pub fn holder(&self) -> Address {
        self.holder
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub async fn total_supply(&self) -> Result<U256, ViewError> {
        log!("totalSupply @ {}", short_addr(&self.contract.address()));
        self.reader.total_supply(self.contract.address()).await
    }

    pub async fn fetch_tokens(&self) -> Result<Vec<U256>, ViewError> {
        log!(
            "{}({}) @ {}",
            self.query.function_name(),
            short_addr(&self.holder),
            short_addr(&self.contract.address())
        );
        self.reader
            .tokens_of(self.contract.address(), self.query, self.holder)
            .await
    }

    /// Supply first; the token list is only requested once it resolved.
    pub async fn run(&self) -> Result<Report, ViewError> {
        let total_supply = self.total_supply().await?;
        let tokens = self.fetch_tokens().await?;
        log!(cc::LIGHT_GREEN, "fetched {} token ids", tokens.len());
        Ok(Report { total_supply, tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use anyhow::Result;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        TotalSupply(Address),
        Tokens(Address, TokenQuery, Address),
    }

    struct StubReader {
        supply: Result<U256, ViewError>,
        tokens: Result<Vec<U256>, ViewError>,
        calls: Mutex<Vec<Call>>,
    }

    impl StubReader {
        fn ok(supply: u64, tokens: &[u64]) -> Self {
            Self {
                supply: Ok(U256::from(supply)),
                tokens: Ok(tokens.iter().map(|&t| U256::from(t)).collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl TokenReader for StubReader {
        async fn total_supply(&self, contract: Address) -> Result<U256, ViewError> {
            self.calls.lock().unwrap().push(Call::TotalSupply(contract));
            self.supply.clone()
        }

        async fn tokens_of(
            &self,
            contract: Address,
            query: TokenQuery,
            holder: Address,
        ) -> Result<Vec<U256>, ViewError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Tokens(contract, query, holder));
            self.tokens.clone()
        }
    }

    fn config(query: TokenQuery) -> Config {
        Config::new(
            "http://127.0.0.1:8545",
            query.default_contract(),
            query.default_holder(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn supply_then_tokens_once_each() -> Result<()> {
        let cfg = config(TokenQuery::Owner);
        let caller = ContractCaller::new(StubReader::ok(3, &[1, 4, 7]), &cfg, TokenQuery::Owner)?;

        let report = caller.run().await?;

        assert_eq!(
            caller.reader().calls(),
            vec![
                Call::TotalSupply(nftmarket::OWNER_MARKET),
                Call::Tokens(nftmarket::OWNER_MARKET, TokenQuery::Owner, nftmarket::DEFAULT_OWNER),
            ]
        );
        assert_eq!(report.total_supply, U256::from(3u64));
        assert_eq!(report.lines()[1], "tokens -> [1, 4, 7]");
        Ok(())
    }

    #[tokio::test]
    async fn failed_supply_skips_token_fetch() -> Result<()> {
        let cfg = config(TokenQuery::Sender);
        let mut reader = StubReader::ok(0, &[1]);
        reader.supply = Err(ViewError::Network("connection refused".into()));
        let caller = ContractCaller::new(reader, &cfg, TokenQuery::Sender)?;

        let err = caller.run().await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(
            caller.reader().calls(),
            vec![Call::TotalSupply(nftmarket::SENDER_MARKET)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn token_fetch_error_propagates() -> Result<()> {
        let cfg = config(TokenQuery::Sender);
        let mut reader = StubReader::ok(9, &[]);
        reader.tokens = Err(ViewError::ContractCall("execution reverted".into()));
        let caller = ContractCaller::new(reader, &cfg, TokenQuery::Sender)?;

        assert_eq!(
            caller.run().await.unwrap_err(),
            ViewError::ContractCall("execution reverted".into())
        );
        assert_eq!(caller.reader().calls().len(), 2);
        Ok(())
    }

    #[test]
    fn abi_per_tool() {
        let sender = ContractCaller::new(
            StubReader::ok(0, &[]),
            &config(TokenQuery::Sender),
            TokenQuery::Sender,
        )
        .unwrap();
        assert_eq!(
            sender.contract().signatures(),
            vec!["totalSupply()", "balanceOf(address)", "fetchSenderTokens(address)"]
        );

        let owner = ContractCaller::new(
            StubReader::ok(0, &[]),
            &config(TokenQuery::Owner),
            TokenQuery::Owner,
        )
        .unwrap();
        assert_eq!(owner.contract().abi().len(), 4);
        assert_eq!(owner.contract().abi()[3].name, "fetchOwnerTokens");
    }

    #[test]
    fn substituted_addresses_are_used() {
        let contract = address!("0x8F4a7f404d09Fea7A9A6c1c9E99a9F341D3DD9A6");
        let holder = address!("0x0000000000000000000000000000000000000abc");
        let cfg = Config::new("http://localhost:8545", contract, holder).unwrap();
        let caller =
            ContractCaller::new(StubReader::ok(0, &[]), &cfg, TokenQuery::Sender).unwrap();
        assert_eq!(caller.contract().address(), contract);
        assert_eq!(caller.holder(), holder);
    }
}
