use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ConfigError;

/// The numeral base used to print evaluation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputBase {
    /// Signed decimal.
    #[default]
    #[value(name = "dec", alias = "decimal")]
    Decimal,
    /// Uppercase hexadecimal with a `0x` prefix.
    #[value(name = "hex", alias = "hexadecimal")]
    Hexadecimal,
    /// Octal with a `0o` prefix.
    #[value(name = "oct", alias = "octal")]
    Octal,
    /// Binary with a `0b` prefix.
    #[value(name = "bin", alias = "binary")]
    Binary,
}

impl OutputBase {
    /// Renders `value` in this base.
    ///
    /// Non-decimal bases print the two's complement bit pattern, so negative
    /// values show all 64 bits.
    ///
    /// ## Example
    /// ```
    /// use bitexpr::util::format::OutputBase;
    ///
    /// assert_eq!(OutputBase::Decimal.format(-1), "-1");
    /// assert_eq!(OutputBase::Hexadecimal.format(31), "0x1F");
    /// assert_eq!(OutputBase::Octal.format(8), "0o10");
    /// assert_eq!(OutputBase::Binary.format(5), "0b101");
    /// ```
    #[must_use]
    pub fn format(self, value: i64) -> String {
        match self {
            Self::Decimal => value.to_string(),
            Self::Hexadecimal => format!("0x{value:X}"),
            Self::Octal => format!("0o{value:o}"),
            Self::Binary => format!("0b{value:b}"),
        }
    }
}

impl FromStr for OutputBase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dec" | "decimal" => Ok(Self::Decimal),
            "hex" | "hexadecimal" => Ok(Self::Hexadecimal),
            "oct" | "octal" => Ok(Self::Octal),
            "bin" | "binary" => Ok(Self::Binary),
            _ => Err(ConfigError::InvalidValue { setting:  "output base".to_string(),
                                                 value:    s.to_string(),
                                                 expected: "dec, hex, oct, bin", }),
        }
    }
}
