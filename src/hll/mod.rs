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


//! HyperLogLog sketches for cardinality estimation.
//!
//! An [`HllSketch`] estimates the number of distinct items in a stream using memory that
//! grows with the configured precision rather than with the stream. `lg_config_k` selects
//! `k = 2^lg_config_k` buckets; the relative standard error is about `0.83 / sqrt(k)` while
//! updates arrive in order, and about `1.04 / sqrt(k)` after merging.
//!
//! # Modes
//!
//! A sketch changes representation as it fills up. The transitions are one way:
//!
//! - **LIST**: up to 8 coupons in a small array, deduplicated by linear scan.
//! - **SET**: an open-addressing hash table of coupons, doubled as it fills. Skipped for
//!   `lg_config_k < 8`, where the HLL array is already small.
//! - **HLL**: `k` buckets, each holding the longest run of leading zeros seen for items hashed
//!   into it.
//!
//! # HLL types
//!
//! The HLL array is stored with one of three bucket widths:
//!
//! - [`HllType::Hll4`]: 4 bits per bucket plus a small exception table, about `k / 2` bytes.
//! - [`HllType::Hll6`]: 6 bits per bucket, about `3k / 4` bytes.
//! - [`HllType::Hll8`]: one byte per bucket, `k` bytes. Fastest to update and merge.
//!
//! All three produce identical estimates for the same input.
//!
//! # Coupons
//!
//! Every update is hashed to 128 bits and reduced to a 32-bit coupon: the low 26 bits select a
//! bucket and the high 6 bits hold one plus the number of leading zeros of the other half of
//! the hash.
//!
//! # Estimators
//!
//! While a sketch only ever saw sequential updates it reports the HIP estimate, which is
//! unbiased and about 20% tighter than the classic estimator. Merged sketches are marked out
//! of order and fall back to a composite of a bias-corrected HLL estimate and linear counting.
//! [`HllSketch::estimator_kind`] tells which estimator is in effect.
//!
//! # Usage
//!
//! ```rust
//! # use datasketches_hll::common::NumStdDev;
//! # use datasketches_hll::hll::HllSketch;
//! # use datasketches_hll::hll::HllType;
//! let mut sketch = HllSketch::new(12, HllType::Hll8);
//! for i in 0..1000 {
//!     sketch.update(i);
//! }
//! let estimate = sketch.estimate();
//! assert!(sketch.lower_bound(NumStdDev::Two) <= estimate);
//! assert!(estimate <= sketch.upper_bound(NumStdDev::Two));
//! assert!((estimate - 1000.0).abs() < 100.0);
//! ```
//!
//! # Union
//!
//! ```rust
//! # use datasketches_hll::hll::HllSketch;
//! # use datasketches_hll::hll::HllType;
//! # use datasketches_hll::hll::HllUnion;
//! let mut left = HllSketch::new(12, HllType::Hll4);
//! let mut right = HllSketch::new(10, HllType::Hll6);
//! left.update("apple");
//! right.update("banana");
//!
//! let mut union = HllUnion::new(12);
//! union.update(&left).unwrap();
//! union.update(&right).unwrap();
//!
//! let result = union.get_result(HllType::Hll4);
//! assert_eq!(result.lg_config_k(), 10);
//! assert!(result.is_out_of_order());
//! assert!((result.estimate() - 2.0).abs() < 0.01);
//! ```
//!
//! # Serialization
//!
//! [`HllSketch::serialize`] writes the compact DataSketches binary layout and
//! [`HllSketch::serialize_updatable`] the updatable one; [`HllSketch::deserialize`] reads both.

mod accumulators;
mod array;
mod array4;
mod array6;
mod array8;
mod aux_map;
mod composite_interpolation;
mod container;
mod coupon_mapping;
mod cubic_interpolation;
mod estimator;
mod harmonic_numbers;
mod hash_set;
mod list;
mod mode;
mod serialization;
mod sketch;
mod union;

pub use self::estimator::rel_err;
pub use self::serialization::max_updatable_serialization_bytes;
pub use self::sketch::CompactHllSketch;
pub use self::sketch::HllSketch;
pub use self::sketch::HllSketchBuilder;
pub use self::union::HllUnion;

/// Smallest supported `lg_config_k`.
pub const MIN_LG_K: u8 = 4;
/// Largest supported `lg_config_k`.
pub const MAX_LG_K: u8 = 21;

/// Encoding of the HLL bucket array.
///
/// Types are ordered by width, so `max` picks the richer of two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HllType {
    /// 4 bits per bucket. Values that do not fit next to the current minimum are kept in a
    /// small auxiliary hash map, which adds roughly 3% for `lg_config_k > 13`.
    Hll4,
    /// 6 bits per bucket.
    Hll6,
    /// 8 bits per bucket.
    Hll8,
}

impl HllType {
    pub(crate) fn from_id(id: u8) -> Option<HllType> {
        match id {
            0 => Some(HllType::Hll4),
            1 => Some(HllType::Hll6),
            2 => Some(HllType::Hll8),
            _ => None,
        }
    }

    pub(crate) fn id(self) -> u8 {
        self as u8
    }
}

/// The representation a sketch currently uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurMode {
    /// Small unsorted list of coupons.
    List,
    /// Hash set of coupons.
    Set,
    /// Dense bucket array.
    Hll,
}

impl CurMode {
    pub(crate) fn from_id(id: u8) -> Option<CurMode> {
        match id {
            0 => Some(CurMode::List),
            1 => Some(CurMode::Set),
            2 => Some(CurMode::Hll),
            _ => None,
        }
    }

    pub(crate) fn id(self) -> u8 {
        self as u8
    }
}

/// Which estimator produced the value returned by `estimate()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimatorKind {
    /// Coupon count mapped through the collision table (LIST and SET modes).
    Coupon,
    /// Historical inverse probability accumulator; valid for in-order sketches only.
    Hip,
    /// Blend of the bias-corrected HLL estimate and linear counting.
    Composite,
}

const KEY_BITS_26: u32 = 26;
const KEY_MASK_26: u32 = (1 << KEY_BITS_26) - 1;

/// Relative standard error of the coupon estimator.
const COUPON_RSE_FACTOR: f64 = 0.409;
const COUPON_RSE: f64 = COUPON_RSE_FACTOR / (1 << 13) as f64;

/// Hash tables resize once they are more than 3/4 full.
const RESIZE_NUMERATOR: u32 = 3;
const RESIZE_DENOMINATOR: u32 = 4;

/// Packs a bucket index and a value into a coupon.
#[inline]
fn pack_coupon(slot: u32, value: u8) -> u32 {
    (u32::from(value) << KEY_BITS_26) | (slot & KEY_MASK_26)
}

/// Splits a coupon into its 26-bit bucket index and 6-bit value.
#[inline]
fn unpack_coupon(coupon: u32) -> (u32, u8) {
    (get_slot(coupon), get_value(coupon))
}

#[inline]
fn get_slot(coupon: u32) -> u32 {
    coupon & KEY_MASK_26
}

#[inline]
fn get_value(coupon: u32) -> u8 {
    (coupon >> KEY_BITS_26) as u8
}

/// Bucket index of a coupon in a sketch with `2^lg_k` buckets.
#[inline]
fn slot_of(coupon: u32, lg_k: u8) -> u32 {
    coupon & ((1 << lg_k) - 1)
}

/// Reduces a 128-bit hash to a coupon. The value is never zero, so neither is the coupon.
fn coupon_from_hash((lo, hi): (u64, u64)) -> u32 {
    let slot = lo as u32 & KEY_MASK_26;
    let value = hi.leading_zeros().min(62) + 1;
    (value << KEY_BITS_26) | slot
}

fn check_lg_k(lg_k: u8) -> Result<(), crate::error::Error> {
    if (MIN_LG_K..=MAX_LG_K).contains(&lg_k) {
        Ok(())
    } else {
        Err(crate::error::Error::invalid_argument(format!(
            "lg_k must be in [{MIN_LG_K}, {MAX_LG_K}], got {lg_k}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_coupon() {
        let coupon = pack_coupon(12345, 42);
        assert_eq!(unpack_coupon(coupon), (12345, 42));
        assert_eq!(slot_of(coupon, 4), 12345 & 15);
        assert_eq!(slot_of(coupon, 21), 12345);

        let max = pack_coupon(KEY_MASK_26, 63);
        assert_eq!(max, u32::MAX);
        assert_eq!(unpack_coupon(max), (KEY_MASK_26, 63));
    }

    #[test]
    fn test_coupon_from_hash() {
        assert_eq!(
            unpack_coupon(coupon_from_hash((u64::MAX, u64::MAX))),
            (KEY_MASK_26, 1)
        );
        assert_eq!(unpack_coupon(coupon_from_hash((7, 4))), (7, 62));
        // long zero runs are capped so the value fits in six bits
        assert_eq!(unpack_coupon(coupon_from_hash((7, 1))), (7, 63));
        assert_eq!(unpack_coupon(coupon_from_hash((7, 0))), (7, 63));
        assert_eq!(unpack_coupon(coupon_from_hash((7, 1 << 60))), (7, 4));
    }

    #[test]
    fn test_type_ordering() {
        assert_eq!(HllType::Hll4.max(HllType::Hll6), HllType::Hll6);
        assert_eq!(HllType::Hll8.max(HllType::Hll4), HllType::Hll8);
        for t in [HllType::Hll4, HllType::Hll6, HllType::Hll8] {
            assert_eq!(HllType::from_id(t.id()), Some(t));
        }
        assert_eq!(HllType::from_id(3), None);
    }
}
