//! Correctly rounded binary approximations of powers of ten.
//!
//! For every decimal exponent `e` in a range this computes the 64-bit (or narrower)
//! significand and binary exponent nearest to `10^e`, using William Clinger's
//! Algorithm M with exact big integer arithmetic. The result is the lookup table a
//! decimal to float parser uses to avoid big integer arithmetic at parse time.
//!
//! Every approximation is checked to be strictly within half a unit in the last place of
//! the exact value before it is accepted, and a table is only produced if every entry
//! passes.
//!
//! # Examples
//! ```
//! use pow10_table::{PowerTable, PowerTableEntry, TableConfig};
//!
//! let table = PowerTable::generate(&TableConfig::default()).unwrap();
//!
//! assert_eq!(table.len(), 611);
//! assert_eq!(
//!     table.get(0),
//!     Some(&PowerTableEntry { significand: 1 << 63, exponent: -63 })
//! );
//! ```

pub mod algorithm_m;
pub mod config;
pub mod consts;
pub mod emit;
pub mod error;
pub mod float;
pub mod random;
pub mod table;
pub mod traits;
pub mod ulp;
mod utils;

pub use algorithm_m::{approximate, approximate_checked, ratio_to_float, Approximation};
pub use config::TableConfig;
pub use consts::{Precision, SigRange};
pub use error::{TableError, TableResult};
pub use float::{NormalizedFloat, PowerTableEntry};
pub use table::{ExponentRange, PowerTable};
pub use traits::{Pred, Succ};
pub use ulp::UlpError;
