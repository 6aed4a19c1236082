//! Coin and exchange names known to the widget.
//!
//! Only the names are stored; rate lookup lives with the price fetcher.

use crate::error::PrefsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a name enumeration whose stored form is the variant identifier
macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical stored name
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl FromStr for $name {
            type Err = PrefsError;

            /// Exact, case-sensitive match against the canonical names
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    _ => Err(PrefsError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

named_enum! {
    /// Cryptocurrency shown by the widget
    Coin, "coin" {
        BTC, BCH, BTG, DASH, DOGE, ETC, ETH, LTC, NMC, XMR, XRP, ZEC,
    }
}

named_enum! {
    /// Exchange the price is read from
    Exchange, "exchange" {
        BINANCE, BIT2C, BITFINEX, BITHUMB, BITSTAMP, BITTREX, COINBASE, GDAX, GEMINI, KRAKEN,
        POLONIEX,
    }
}

impl Default for Coin {
    fn default() -> Self {
        Coin::BTC
    }
}

impl Default for Exchange {
    /// The first declared exchange
    fn default() -> Self {
        Exchange::ALL[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for coin in Coin::ALL {
            assert_eq!(coin.as_str().parse::<Coin>().ok(), Some(*coin));
        }
        for exchange in Exchange::ALL {
            assert_eq!(exchange.to_string().parse::<Exchange>().ok(), Some(*exchange));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let err = "btc".parse::<Coin>().unwrap_err();
        assert!(matches!(
            err,
            PrefsError::UnknownVariant { kind: "coin", ref value } if value == "btc"
        ));
    }

    #[test]
    fn defaults() {
        assert_eq!(Coin::default(), Coin::BTC);
        assert_eq!(Exchange::default(), Exchange::BINANCE);
    }

    #[test]
    fn serde_uses_canonical_names() {
        assert_eq!(serde_json::to_string(&Coin::ETH).unwrap(), "\"ETH\"");
        assert_eq!(
            serde_json::from_str::<Exchange>("\"BIT2C\"").unwrap(),
            Exchange::BIT2C
        );
    }
}
