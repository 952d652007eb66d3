use super::token::Token;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What actually happened to a mint request, as read from the receipt.
///
/// `Minted` means new supply was issued to the user at the requested
/// amount. `Bought` means the contract satisfied the request from existing
/// supply on the secondary market, in which case the amount comes from the
/// observed transfer rather than the request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MintOutcome {
    Minted { token: Token, amount: Decimal },
    Bought { token: Token, amount: Decimal },
}

impl MintOutcome {
    pub fn amount(&self) -> Decimal {
        match self {
            MintOutcome::Minted { amount, .. } | MintOutcome::Bought { amount, .. } => *amount,
        }
    }
}
