use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Closed set of assets a source can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetId {
    Btc,
    Eth,
}

impl AssetId {
    pub const ALL: [Self; 2] = [Self::Btc, Self::Eth];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Eth => "eth",
        }
    }

    /// Every identifier, comma separated, for error messages.
    pub fn known_names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "btc" => Ok(Self::Btc),
            "eth" => Ok(Self::Eth),
            _ => Err(ValidationError::UnknownSource {
                value: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!("btc".parse::<AssetId>(), Ok(AssetId::Btc));
        assert_eq!("BTC".parse::<AssetId>(), Ok(AssetId::Btc));
        assert_eq!(" Eth ".parse::<AssetId>(), Ok(AssetId::Eth));
    }

    #[test]
    fn unknown_identifier_is_named_in_the_error() {
        let err = "DogeCoin".parse::<AssetId>().expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::UnknownSource {
                value: String::from("DogeCoin")
            }
        );
        assert!(err.to_string().contains("DogeCoin"));
    }

    #[test]
    fn unknown_identifier_error_lists_every_asset() {
        let err = "sol".parse::<AssetId>().expect_err("must fail");
        let message = err.to_string();
        for asset in AssetId::ALL {
            assert!(message.contains(asset.as_str()), "{message} should list {asset}");
        }
        assert_eq!(message, "no market is present for 'sol', expected one of btc, eth");
    }

    #[test]
    fn display_round_trips_every_asset() {
        for asset in AssetId::ALL {
            assert_eq!(asset.to_string().parse::<AssetId>(), Ok(asset));
        }
    }
}
