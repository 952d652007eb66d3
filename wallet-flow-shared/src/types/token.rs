use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chain identifier, e.g. `"ethereum"` or `"arbitrum"`.
pub type ChainId = String;

/// Distinguishes contract-backed tokens from the chain's gas token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenKind {
    Erc20 { address: Address },
    Native,
}

/// A token known to the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Per-chain unique id, e.g. `"USDC"`.
    pub id: String,
    pub symbol: String,
    pub chain_id: ChainId,
    pub decimals: u8,
    pub kind: TokenKind,
}

impl Token {
    pub fn is_erc20(&self) -> bool {
        matches!(self.kind, TokenKind::Erc20 { .. })
    }

    /// Contract address for ERC-20 tokens, `None` for native tokens.
    pub fn erc20_address(&self) -> Option<Address> {
        match self.kind {
            TokenKind::Erc20 { address } => Some(address),
            TokenKind::Native => None,
        }
    }
}

/// A token together with a display-ready decimal amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenAmount {
    pub token: Token,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_erc20_address_only_for_erc20_kind() {
        let usdc = Token {
            id: "USDC".to_string(),
            symbol: "USDC".to_string(),
            chain_id: "ethereum".to_string(),
            decimals: 6,
            kind: TokenKind::Erc20 {
                address: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
            },
        };
        assert!(usdc.is_erc20());
        assert_eq!(
            usdc.erc20_address(),
            Some(address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"))
        );

        let eth = Token {
            id: "ETH".to_string(),
            symbol: "ETH".to_string(),
            chain_id: "ethereum".to_string(),
            decimals: 18,
            kind: TokenKind::Native,
        };
        assert!(!eth.is_erc20());
        assert_eq!(eth.erc20_address(), None);
    }
}
