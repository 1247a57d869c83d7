use alloy::json_abi::Function;
use alloy::primitives::{Address, Selector};

use crate::libs::error::ViewError;

/// Address plus the ABI fragment bound to it. Fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRef {
    address: Address,
    abi: Vec<Function>,
}

impl ContractRef {
    /// Parse human-readable signatures, keeping declared order.
    pub fn parse(address: Address, fragment: &[&str]) -> Result<Self, ViewError> {
        let abi = fragment
            .iter()
            .map(|sig| {
                Function::parse(sig)
                    .map_err(|e| ViewError::ContractCall(format!("bad ABI signature `{sig}`: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { address, abi })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &[Function] {
        &self.abi
    }

    /// `name(type,...)` for each declared function.
    pub fn signatures(&self) -> Vec<String> {
        self.abi.iter().map(|f| f.signature()).collect()
    }

    pub fn declares(&self, name: &str) -> bool {
        self.abi.iter().any(|f| f.name == name)
    }

    /// `name` must be declared and encode to `selector`, the selector the
    /// call is actually sent with.
    pub fn require(&self, name: &str, selector: Selector) -> Result<(), ViewError> {
        let f = self.abi.iter().find(|f| f.name == name).ok_or_else(|| {
            ViewError::ContractCall(format!(
                "function {name} is not declared in the ABI of {}",
                self.address
            ))
        })?;
        if f.selector() != selector {
            return Err(ViewError::ContractCall(format!(
                "ABI declares {} ({}) but calls are encoded as {selector}",
                f.signature(),
                f.selector()
            )));
        }
        Ok(())
    }
}
