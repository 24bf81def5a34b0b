// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


//! Union of HLL sketches.
//!
//! The union keeps an internal HLL8 sketch, the gadget, that absorbs every input. The gadget
//! starts at `lg_max_k` and shrinks to the smallest `lg_config_k` it is given, folding the
//! buckets it already holds. Inputs of any mode, target type and precision can be mixed.
//!
//! # Example
//!
//! ```
//! # use datasketches_hll::hll::HllSketch;
//! # use datasketches_hll::hll::HllType;
//! # use datasketches_hll::hll::HllUnion;
//! let mut union = HllUnion::new(12);
//!
//! let mut sketch1 = HllSketch::new(12, HllType::Hll8);
//! sketch1.update("foo");
//! sketch1.update("bar");
//!
//! let mut sketch2 = HllSketch::new(12, HllType::Hll8);
//! sketch2.update("bar");
//! sketch2.update("baz");
//!
//! union.update(&sketch1).unwrap();
//! union.update(&sketch2).unwrap();
//!
//! let result = union.get_result(HllType::Hll8);
//! assert!((result.estimate() - 3.0).abs() < 0.01);
//! ```

use std::hash::Hash;

use crate::common::NumStdDev;
use crate::error::Error;
use crate::hash::DEFAULT_UPDATE_SEED;
use crate::hash::compute_seed_hash;
use crate::hll::HllType;
use crate::hll::MAX_LG_K;
use crate::hll::MIN_LG_K;
use crate::hll::check_lg_k;
use crate::hll::mode::Mode;
use crate::hll::sketch::HllSketch;
use crate::hll::sketch::checked_seed_hash;

/// Combines HLL sketches into one.
#[derive(Debug, Clone)]
pub struct HllUnion {
    lg_max_k: u8,
    gadget: HllSketch,
}

impl HllUnion {
    /// Creates an empty union with the default seed.
    ///
    /// `lg_max_k` caps the precision of the result; inputs with more buckets are folded down.
    ///
    /// # Panics
    ///
    /// Panics if `lg_max_k` is not in `[4, 21]`.
    pub fn new(lg_max_k: u8) -> Self {
        assert!(
            (MIN_LG_K..=MAX_LG_K).contains(&lg_max_k),
            "lg_max_k must be in [{MIN_LG_K}, {MAX_LG_K}], got {lg_max_k}"
        );
        Self::from_parts(
            lg_max_k,
            DEFAULT_UPDATE_SEED,
            compute_seed_hash(DEFAULT_UPDATE_SEED),
        )
    }

    /// Creates an empty union for sketches built with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if
    /// `lg_max_k` is not in `[4, 21]` or the seed cannot be used.
    pub fn with_seed(lg_max_k: u8, seed: u32) -> Result<Self, Error> {
        check_lg_k(lg_max_k)?;
        let seed_hash = checked_seed_hash(seed)?;
        Ok(Self::from_parts(lg_max_k, seed, seed_hash))
    }

    pub(super) fn from_parts(lg_max_k: u8, seed: u32, seed_hash: u16) -> Self {
        Self {
            lg_max_k,
            gadget: HllSketch::from_parts(lg_max_k, HllType::Hll8, seed, seed_hash),
        }
    }

    /// The precision ceiling given at construction.
    pub fn lg_max_k(&self) -> u8 {
        self.lg_max_k
    }

    /// Current precision of the union: `lg_max_k` or the smallest input precision seen.
    pub fn lg_config_k(&self) -> u8 {
        self.gadget.lg_config_k()
    }

    /// Returns true if nothing has been merged in.
    pub fn is_empty(&self) -> bool {
        self.gadget.is_empty()
    }

    /// Presents a single value, as [`HllSketch::update`] would.
    pub fn update_value<T: Hash>(&mut self, value: T) {
        self.gadget.update(value);
    }

    /// Presents raw bytes, as [`HllSketch::update_bytes`] would.
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.gadget.update_bytes(bytes);
    }

    /// Merges a sketch into the union.
    ///
    /// The union's precision drops to `sketch.lg_config_k()` if that is smaller, even when
    /// the sketch is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IncompatibleSketch`](crate::error::ErrorKind::IncompatibleSketch)
    /// if the sketch was built with a different seed. The union is unchanged on error.
    pub fn update(&mut self, sketch: &HllSketch) -> Result<(), Error> {
        if sketch.seed_hash != self.gadget.seed_hash {
            return Err(Error::seed_hash_mismatch(
                self.gadget.seed_hash,
                sketch.seed_hash,
            ));
        }

        let lg_target = self.gadget.lg_config_k.min(sketch.lg_config_k);
        if self.gadget.lg_config_k > lg_target {
            self.gadget = downsampled(&self.gadget, lg_target);
        }
        self.gadget.out_of_order = true;

        match &sketch.mode {
            Mode::List { list, .. } => {
                for coupon in list.container().iter() {
                    self.gadget.update_coupon(coupon);
                }
            }
            Mode::Set { set, .. } => {
                for coupon in set.container().iter() {
                    self.gadget.update_coupon(coupon);
                }
            }
            Mode::Hll(src) => {
                if let Mode::Hll(dst) = &mut self.gadget.mode {
                    dst.merge_from(src);
                    return Ok(());
                }
                let mut array = src.folded(lg_target, HllType::Hll8);
                if let Some(coupons) = self.gadget.mode.coupons() {
                    for coupon in coupons.iter() {
                        array.update(coupon, false);
                    }
                }
                self.gadget.mode = Mode::Hll(array);
            }
        }
        Ok(())
    }

    /// Returns the union as a sketch with `hll_type` buckets.
    pub fn get_result(&self, hll_type: HllType) -> HllSketch {
        self.gadget.copy_as(hll_type)
    }

    /// Returns the union as an HLL8 sketch.
    pub fn result(&self) -> HllSketch {
        self.get_result(HllType::Hll8)
    }

    /// Empties the union and restores `lg_max_k`.
    pub fn reset(&mut self) {
        self.gadget = HllSketch::from_parts(
            self.lg_max_k,
            HllType::Hll8,
            self.gadget.seed,
            self.gadget.seed_hash,
        );
    }

    /// Cardinality estimate of the union so far.
    pub fn estimate(&self) -> f64 {
        self.gadget.estimate()
    }

    /// Estimate from the bucket values alone.
    pub fn composite_estimate(&self) -> f64 {
        self.gadget.composite_estimate()
    }

    /// Approximate lower error bound.
    pub fn lower_bound(&self, num_std_dev: NumStdDev) -> f64 {
        self.gadget.lower_bound(num_std_dev)
    }

    /// Approximate upper error bound.
    pub fn upper_bound(&self, num_std_dev: NumStdDev) -> f64 {
        self.gadget.upper_bound(num_std_dev)
    }
}

/// The gadget at a lower precision.
fn downsampled(gadget: &HllSketch, lg_target: u8) -> HllSketch {
    let mut smaller =
        HllSketch::from_parts(lg_target, HllType::Hll8, gadget.seed, gadget.seed_hash);
    smaller.out_of_order = gadget.out_of_order;
    match &gadget.mode {
        Mode::Hll(array) => smaller.mode = Mode::Hll(array.folded(lg_target, HllType::Hll8)),
        coupon_mode => {
            if let Some(coupons) = coupon_mode.coupons() {
                for coupon in coupons.iter() {
                    smaller.update_coupon(coupon);
                }
            }
        }
    }
    smaller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hll::CurMode;

    #[test]
    fn test_empty_input_still_lowers_precision() {
        let mut union = HllUnion::new(12);
        union.update(&HllSketch::new(7, HllType::Hll4)).unwrap();
        assert_eq!(union.lg_config_k(), 7);
        assert!(union.is_empty());
        assert_eq!(union.lg_max_k(), 12);

        union.reset();
        assert_eq!(union.lg_config_k(), 12);
    }

    #[test]
    fn test_coupon_gadget_absorbs_hll_input() {
        let mut union = HllUnion::new(10);
        union.update_value("only in the gadget");

        let mut sketch = HllSketch::new(10, HllType::Hll4);
        for i in 0..1000 {
            sketch.update(i);
        }
        union.update(&sketch).unwrap();
        assert_eq!(union.result().current_mode(), CurMode::Hll);

        let mut expected = sketch.clone();
        expected.update("only in the gadget");
        let mut expected_union = HllUnion::new(10);
        expected_union.update(&expected).unwrap();
        assert_eq!(union.estimate(), expected_union.estimate());
        assert_eq!(
            union.lower_bound(NumStdDev::Two),
            expected_union.lower_bound(NumStdDev::Two)
        );
    }

    #[test]
    fn test_downsampled_hll_gadget_matches_direct_fold() {
        let mut big = HllSketch::new(12, HllType::Hll8);
        let mut small = HllSketch::new(8, HllType::Hll6);
        for i in 0..20_000 {
            big.update(i);
            small.update(i + 10_000);
        }

        let mut union = HllUnion::new(12);
        union.update(&big).unwrap();
        union.update(&small).unwrap();
        assert_eq!(union.lg_config_k(), 8);

        let mut reversed = HllUnion::new(12);
        reversed.update(&small).unwrap();
        reversed.update(&big).unwrap();
        assert_eq!(reversed.lg_config_k(), 8);
        assert_eq!(union.estimate(), reversed.estimate());
        assert_eq!(
            union.upper_bound(NumStdDev::One),
            reversed.upper_bound(NumStdDev::One)
        );
    }
}
