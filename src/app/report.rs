use std::io::{self, Write};

use alloy::primitives::U256;

use crate::constants::{TOKENS_LABEL, TOTAL_SUPPLY_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_supply: U256,
    /// Node order, untouched.
    pub tokens: Vec<U256>,
}

impl Report {
    pub fn lines(&self) -> [String; 2] {
        [
            format!("{TOTAL_SUPPLY_LABEL} -> {}", self.total_supply),
            format!("{TOKENS_LABEL} -> {}", format_tokens(&self.tokens)),
        ]
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

pub fn format_tokens(tokens: &[U256]) -> String {
    let ids: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    format!("[{}]", ids.join(", "))
}
