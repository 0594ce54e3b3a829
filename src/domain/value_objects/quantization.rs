//! Quantization mode value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Weight quantization applied before dispatch.
///
/// An unset quantization is treated as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Quantization {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "4bit")]
    FourBit,
    #[serde(rename = "8bit")]
    EightBit,
}

impl Quantization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantization::None => "none",
            Quantization::FourBit => "4bit",
            Quantization::EightBit => "8bit",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Quantization::None)
    }
}

impl FromStr for Quantization {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Quantization::None),
            "4bit" => Ok(Quantization::FourBit),
            "8bit" => Ok(Quantization::EightBit),
            _ => Err(ConfigurationError::UnknownQuantization(s.to_string())),
        }
    }
}

impl fmt::Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(Quantization::default(), Quantization::None);
        assert!(!Quantization::default().is_enabled());
    }

    #[test]
    fn parses_supported_modes() {
        assert_eq!("4bit".parse::<Quantization>(), Ok(Quantization::FourBit));
        assert_eq!("8BIT".parse::<Quantization>(), Ok(Quantization::EightBit));
        assert_eq!("".parse::<Quantization>(), Ok(Quantization::None));
    }

    #[test]
    fn rejects_unsupported_modes() {
        assert_eq!(
            "awq".parse::<Quantization>(),
            Err(ConfigurationError::UnknownQuantization("awq".to_string()))
        );
    }

    #[test]
    fn serde_uses_bit_names() {
        let q: Quantization = serde_json::from_str("\"8bit\"").unwrap();
        assert_eq!(q, Quantization::EightBit);
        assert_eq!(serde_json::to_string(&Quantization::FourBit).unwrap(), "\"4bit\"");
    }
}
