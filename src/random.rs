use rand::{
    distributions::uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
    Rng,
};

use crate::float::NormalizedFloat;

/// Uniform sampler for `NormalizedFloat`.
///
/// Not uniform in value. The exponent is drawn uniformly and then a significand, so every
/// binade between `low` and `high` is about equally likely. That is what property tests
/// over the whole exponent range want
pub struct NormalizedFloatSampler {
    low: NormalizedFloat,
    high: NormalizedFloat,
    inc: bool,
}

impl NormalizedFloatSampler {
    fn checked(low: NormalizedFloat, high: NormalizedFloat, inc: bool) -> Self {
        if low.precision() != high.precision() {
            panic!("Unable to sample between floats of different precisions");
        } else if low > high || (low == high && !inc) {
            panic!("Unable to create range from {} to {}", low, high);
        }

        Self { low, high, inc }
    }
}

impl UniformSampler for NormalizedFloatSampler {
    type X = NormalizedFloat;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        Self::checked(*low.borrow(), *high.borrow(), false)
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        Self::checked(*low.borrow(), *high.borrow(), true)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        let precision = self.low.precision();
        let sig_range = precision.sig_range();

        if self.low.exp() == self.high.exp() {
            let sig_gen: UniformInt<u64> = if self.inc {
                UniformInt::new_inclusive(self.low.sig(), self.high.sig())
            } else {
                UniformInt::new(self.low.sig(), self.high.sig())
            };

            return NormalizedFloat::new(sig_gen.sample(rng), self.low.exp(), precision);
        }

        // An exclusive bound at the bottom of its binade leaves nothing to draw from there
        let exp_gen: UniformInt<i64> = if !self.inc && self.high.sig() == sig_range.min() {
            UniformInt::new(self.low.exp(), self.high.exp())
        } else {
            UniformInt::new_inclusive(self.low.exp(), self.high.exp())
        };
        let exp = exp_gen.sample(rng);

        // The end binades are cut short by the bounds themselves
        let sig_low = if exp == self.low.exp() {
            self.low.sig()
        } else {
            sig_range.min()
        };
        let sig_gen: UniformInt<u64> = if exp != self.high.exp() {
            UniformInt::new_inclusive(sig_low, sig_range.max())
        } else if self.inc {
            UniformInt::new_inclusive(sig_low, self.high.sig())
        } else {
            UniformInt::new(sig_low, self.high.sig())
        };

        NormalizedFloat::new(sig_gen.sample(rng), exp, precision)
    }
}

impl SampleUniform for NormalizedFloat {
    type Sampler = NormalizedFloatSampler;
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{hash_map::Entry, HashMap},
        iter::from_fn,
    };

    use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

    use super::*;
    use crate::consts::Precision;

    const P: Precision = Precision::FULL;

    macro_rules! generate_freq_map {
        (
            samples = $samp:expr,
            range = $range:expr,
            key = $key:expr
        ) => {{
            let mut map: HashMap<i64, u64> = HashMap::new();

            for i in $range {
                map.insert(i, 0);
            }

            for v in $samp {
                let key = $key(v);
                match map.entry(key) {
                    Entry::Occupied(mut e) => {
                        e.insert(e.get() + 1);
                    }
                    Entry::Vacant(_) => panic!("Entry for {} has not been initialized", key),
                }
            }

            map
        }};
    }

    macro_rules! assert_uniform {
        (
            map = $map:ident,
            expected = $exp:expr,
            confidence = $conf:expr
        ) => {
            for (k, &c) in $map.iter() {
                if c.abs_diff($exp) > $conf {
                    panic!(
                        "Expected frequencies to be within {} of {}, found {} for key {}",
                        $conf, $exp, c, k
                    );
                }
            }
        };
    }

    #[test]
    fn samples_stay_in_range() {
        let rng = &mut thread_rng();
        let low = NormalizedFloat::new(u64::MAX - 5, -3, P);
        let high = NormalizedFloat::new((1 << 63) + 5, 1, P);

        let inclusive: Uniform<NormalizedFloat> = Uniform::new_inclusive(low, high);
        let exclusive: Uniform<NormalizedFloat> = Uniform::new(low, high);

        for _ in 0..1000 {
            let a = inclusive.sample(rng);
            let b = exclusive.sample(rng);

            assert!(low <= a && a <= high);
            assert!(low <= b && b < high);
        }
    }

    #[test]
    fn single_binade() {
        let rng = &mut thread_rng();
        let low = NormalizedFloat::new(1 << 63, 10, P);
        let high = NormalizedFloat::new((1 << 63) + 3, 10, P);
        let dist: Uniform<NormalizedFloat> = Uniform::new(low, high);

        let samples: Vec<NormalizedFloat> =
            from_fn(|| Some(dist.sample(rng))).take(1000).collect();
        let map = generate_freq_map!(
            samples = samples,
            range = 0..3,
            key = |v: NormalizedFloat| (v.sig() - (1 << 63)) as i64
        );

        assert_uniform!(map = map, expected = 333, confidence = 100);
    }

    // Uses probabilistic reasoning to check the exponent is uniform. It should fail very,
    // very rarely but it's worth running it again if it does fail
    #[test]
    fn exponents_uniform() {
        let rng = &mut thread_rng();
        let low = NormalizedFloat::new(1 << 63, -5, P);
        let high = NormalizedFloat::new(u64::MAX, 4, P);
        let dist: Uniform<NormalizedFloat> = Uniform::new_inclusive(low, high);

        let samples: Vec<NormalizedFloat> =
            from_fn(|| Some(dist.sample(rng))).take(1000).collect();
        let map = generate_freq_map!(
            samples = samples,
            range = -5..=4,
            key = |v: NormalizedFloat| v.exp()
        );

        assert_uniform!(map = map, expected = 100, confidence = 50);
    }

    #[test]
    fn neighbouring_binades() {
        let rng = &mut thread_rng();
        let top = NormalizedFloat::new(u64::MAX, 0, P);
        let bottom = NormalizedFloat::new(1 << 63, 1, P);
        let next = NormalizedFloat::new((1 << 63) + 1, 1, P);

        // Three values in total, one below the binade boundary and two above it
        let inclusive: Uniform<NormalizedFloat> = Uniform::new_inclusive(top, next);
        let samples: Vec<NormalizedFloat> =
            from_fn(|| Some(inclusive.sample(rng))).take(300).collect();
        assert!(samples.iter().all(|&v| top <= v && v <= next));
        assert!([top, bottom, next].iter().all(|v| samples.contains(v)));

        let exclusive: Uniform<NormalizedFloat> = Uniform::new(top, next);
        let samples: Vec<NormalizedFloat> =
            from_fn(|| Some(exclusive.sample(rng))).take(300).collect();
        assert!(samples.iter().all(|&v| v == top || v == bottom));
        assert!(samples.contains(&top) && samples.contains(&bottom));

        // The upper binade has nothing below an exclusive bound at its minimum
        let only_top: Uniform<NormalizedFloat> = Uniform::new(top, bottom);
        for _ in 0..100 {
            assert_eq!(only_top.sample(rng), top);
        }
    }

    #[should_panic]
    #[test]
    fn empty_range() {
        let z = NormalizedFloat::new(1 << 63, 0, P);
        let _: Uniform<NormalizedFloat> = Uniform::new(z, z);
    }

    #[should_panic]
    #[test]
    fn mixed_precisions() {
        let low = NormalizedFloat::new(1 << 63, 0, P);
        let high = NormalizedFloat::new(1 << 52, 20, Precision::new(53).unwrap());
        let _: Uniform<NormalizedFloat> = Uniform::new(low, high);
    }
}
