//! Neighbor operations for normalized floats. These are the only "arithmetic" a
//! `NormalizedFloat` supports.

use crate::{consts::SigRange, float::NormalizedFloat};

/// This trait is meant to get the very next representable value of the type. E.g. for a
/// 64-bit `NormalizedFloat` with `exp = 0` this is one more than the current value, but
/// with `exp = 10` it is `2^10` more. So this provides the value that is greater than the
/// current value, but less than any other
pub trait Succ {
    fn succ(self) -> Self;
}

pub trait Pred {
    fn pred(self) -> Self;
}

impl Succ for NormalizedFloat {
    fn succ(self) -> Self {
        let precision = self.precision();
        let SigRange(min_sig, max_sig) = precision.sig_range();

        if self.sig() == max_sig {
            // Incrementing would need one more bit, renormalize instead
            NormalizedFloat::new(min_sig, self.exp() + 1, precision)
        } else {
            NormalizedFloat::new(self.sig() + 1, self.exp(), precision)
        }
    }
}

impl Pred for NormalizedFloat {
    fn pred(self) -> Self {
        let precision = self.precision();
        let SigRange(min_sig, max_sig) = precision.sig_range();

        if self.sig() == min_sig {
            NormalizedFloat::new(max_sig, self.exp() - 1, precision)
        } else {
            NormalizedFloat::new(self.sig() - 1, self.exp(), precision)
        }
    }
}
