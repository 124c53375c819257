use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Academia,
    Praia,
    Lingerie,
    #[serde(rename = "sexshop")]
    SexShop,
}

impl CategoryKey {
    /// Document order.
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Academia,
        CategoryKey::Praia,
        CategoryKey::Lingerie,
        CategoryKey::SexShop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Academia => "academia",
            CategoryKey::Praia => "praia",
            CategoryKey::Lingerie => "lingerie",
            CategoryKey::SexShop => "sexshop",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Academia => "Roupas de Academia",
            CategoryKey::Praia => "Moda Praia",
            CategoryKey::Lingerie => "Lingerie",
            CategoryKey::SexShop => "Sex Shop",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_their_wire_names() {
        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>(), Ok(key));
            assert_eq!(
                serde_json::to_string(&key).unwrap(),
                format!("\"{}\"", key.as_str())
            );
        }
        assert!("sex-shop".parse::<CategoryKey>().is_err());
    }
}
