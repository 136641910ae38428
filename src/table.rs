use std::{ops::RangeInclusive, time::Instant};

use serde::Serialize;

use crate::{
    algorithm_m::approximate_checked,
    config::TableConfig,
    consts::Precision,
    error::{TableError, TableResult},
    float::PowerTableEntry,
};

/// Closed interval of decimal exponents a table is generated for. Both ends fit in an
/// `i16` since that is how the consumer stores them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExponentRange {
    min: i32,
    max: i32,
}

impl ExponentRange {
    pub fn new(min: i32, max: i32) -> TableResult<Self> {
        if min > max {
            return Err(TableError::InvalidConfig(format!(
                "exponent range is empty: {} > {}",
                min, max
            )));
        }

        let bounds = i32::from(i16::MIN)..=i32::from(i16::MAX);
        if !bounds.contains(&min) || !bounds.contains(&max) {
            return Err(TableError::InvalidConfig(format!(
                "exponent range [{}, {}] does not fit in an i16",
                min, max
            )));
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, e: i32) -> bool {
        e >= self.min && e <= self.max
    }

    /// Position of `e` in a table over this range
    pub fn index_of(&self, e: i32) -> Option<usize> {
        self.contains(e).then(|| (e - self.min) as usize)
    }

    pub fn iter(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

/// Approximations of `f * 10^e` for every `e` in a range, in ascending order of `e`.
///
/// Every entry has passed the half-ULP self-test. Generation is all or nothing, a
/// `PowerTable` with a bad or missing entry can not be constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerTable {
    range: ExponentRange,
    precision: Precision,
    mantissa: u64,
    entries: Vec<PowerTableEntry>,
}

impl PowerTable {
    pub fn generate(config: &TableConfig) -> TableResult<Self> {
        config.validate()?;
        let range = config.range()?;
        let precision = config.precision()?;

        tracing::info!(
            min_exp = range.min(),
            max_exp = range.max(),
            bits = precision.bits(),
            mantissa = config.mantissa,
            "generating power table"
        );
        let start = Instant::now();

        let entries = range
            .iter()
            .map(|e| {
                let approx = approximate_checked(config.mantissa, e, precision)?;
                tracing::debug!(e, float = %approx.float, error = %approx.error, "entry");

                PowerTableEntry::from_float(e, approx.float)
            })
            .collect::<TableResult<Vec<_>>>()?;

        tracing::info!(
            entries = entries.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "power table verified"
        );

        Ok(Self {
            range,
            precision,
            mantissa: config.mantissa,
            entries,
        })
    }

    pub fn range(&self) -> ExponentRange {
        self.range
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn mantissa(&self) -> u64 {
        self.mantissa
    }

    pub fn entries(&self) -> &[PowerTableEntry] {
        &self.entries
    }

    /// Entry approximating `10^e`, looked up by position
    pub fn get(&self, e: i32) -> Option<&PowerTableEntry> {
        self.range.index_of(e).and_then(|i| self.entries.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &PowerTableEntry)> {
        self.range.iter().zip(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Significand column of the split `([u64], [i16])` layout
    pub fn significands(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.significand).collect()
    }

    /// Exponent column of the split `([u64], [i16])` layout
    pub fn exponents(&self) -> Vec<i16> {
        self.entries.iter().map(|entry| entry.exponent).collect()
    }
}
