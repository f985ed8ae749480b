use crate::constants::{BUY_PREFIX, SELL_PREFIX};
use std::fmt;
use std::str::FromStr;

/// A trade intent from the caller's (bot-side) perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Buy,
    Sell,
}

impl Intent {
    /// The counterparty's view of this intent. A token always carries the
    /// counterparty's action: when the bot buys, the customer sells.
    pub fn inverted(self) -> Self {
        match self {
            Intent::Buy => Intent::Sell,
            Intent::Sell => Intent::Buy,
        }
    }

    /// Prepends this intent's wire prefix to `token`.
    pub fn wrap(self, token: &str) -> String {
        match self {
            Intent::Buy => format!("{}{}", BUY_PREFIX, token),
            Intent::Sell => format!("{}{}", SELL_PREFIX, token),
        }
    }

    /// Splits an exact `buy_`/`sell_` prefix off `token`, returning the
    /// prefix intent and the remainder. `None` if neither prefix matches.
    pub fn unwrap(token: &str) -> Option<(Intent, &str)> {
        if let Some(remainder) = token.strip_prefix(SELL_PREFIX) {
            Some((Intent::Sell, remainder))
        } else if let Some(remainder) = token.strip_prefix(BUY_PREFIX) {
            Some((Intent::Buy, remainder))
        } else {
            None
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Buy => write!(f, "buy"),
            Intent::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Intent::Buy),
            "sell" => Ok(Intent::Sell),
            other => Err(format!("Unknown intent: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_is_an_involution() {
        assert_eq!(Intent::Buy.inverted(), Intent::Sell);
        assert_eq!(Intent::Sell.inverted(), Intent::Buy);
        assert_eq!(Intent::Buy.inverted().inverted(), Intent::Buy);
    }

    #[test]
    fn test_wrap_and_unwrap() {
        let wrapped = Intent::Sell.wrap("Strange_Shotgun");
        assert_eq!(wrapped, "sell_Strange_Shotgun");
        assert_eq!(
            Intent::unwrap(&wrapped),
            Some((Intent::Sell, "Strange_Shotgun"))
        );
    }

    #[test]
    fn test_unwrap_requires_exact_prefix() {
        assert_eq!(Intent::unwrap("Strange_Shotgun"), None);
        assert_eq!(Intent::unwrap("selling_Shotgun"), None);
        assert_eq!(Intent::unwrap("Buy_Shotgun"), None);
    }
}
