//! Non-negative monetary amounts.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Price in the smallest currency unit.
///
/// Unsigned, so a negative price cannot be represented. `Display` renders the
/// amount with `,` thousands grouping (`89000` → `89,000`); no currency
/// symbol and no locale rules.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Money {}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        // Go through `pad` so width/alignment flags (`{:>10}`) apply.
        f.pad(&grouped)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses a plain or `,`-grouped integer amount (`"89000"`, `"89,000"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
        if cleaned.is_empty() {
            return Err(DomainError::validation("amount cannot be empty"));
        }
        cleaned
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("invalid amount {s:?}: {e}")))
    }
}
