//! Table configuration.
//!
//! The defaults reproduce the reference table: `10^-305` through `10^305` with 64-bit
//! significands. A configuration can also be read from a JSON file, in which case any
//! field left out keeps its default.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    consts::{Precision, MAX_E, MIN_E, SIG_BITS},
    error::{TableError, TableResult},
    table::ExponentRange,
};

/// Parameters of a generated table.
///
/// # Example
///
/// ```
/// use pow10_table::TableConfig;
///
/// let config: TableConfig = serde_json::from_str(r#"{ "bits": 53 }"#).unwrap();
/// assert_eq!(config.min_exp, -305);
/// assert_eq!(config.bits, 53);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Smallest decimal exponent, inclusive
    pub min_exp: i32,

    /// Largest decimal exponent, inclusive
    pub max_exp: i32,

    /// Width of each significand in bits
    pub bits: u32,

    /// Decimal mantissa `f` of every entry, the table holds `f * 10^e`
    pub mantissa: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_exp: MIN_E,
            max_exp: MAX_E,
            bits: SIG_BITS,
            mantissa: 1,
        }
    }
}

impl TableConfig {
    pub fn from_file(path: impl AsRef<Path>) -> TableResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn precision(&self) -> TableResult<Precision> {
        Precision::new(self.bits).ok_or_else(|| {
            TableError::InvalidConfig(format!(
                "significand width must be in 1..=64, got {}",
                self.bits
            ))
        })
    }

    pub fn range(&self) -> TableResult<ExponentRange> {
        ExponentRange::new(self.min_exp, self.max_exp)
    }

    /// Checks every field, so a table is never partially generated from a bad config
    pub fn validate(&self) -> TableResult<()> {
        self.precision()?;
        self.range()?;

        if self.mantissa == 0 {
            return Err(TableError::InvalidConfig(
                "decimal mantissa must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
