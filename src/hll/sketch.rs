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


//! The HLL sketch and its builder.

use std::fmt;
use std::hash::Hash;

use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::common::NumStdDev;
use crate::error::Error;
use crate::hash::DEFAULT_UPDATE_SEED;
use crate::hash::compute_seed_hash;
use crate::hash::hash_bytes;
use crate::hash::hash_value;
use crate::hll::CurMode;
use crate::hll::EstimatorKind;
use crate::hll::HllType;
use crate::hll::MAX_LG_K;
use crate::hll::MIN_LG_K;
use crate::hll::check_lg_k;
use crate::hll::coupon_from_hash;
use crate::hll::mode::Mode;
use crate::hll::serialization::OUT_OF_ORDER_FLAG;
use crate::hll::serialization::Preamble;
use crate::hll::union::HllUnion;

/// Seed hash for `seed`, rejecting the seeds whose hash is the reserved value zero.
pub(super) fn checked_seed_hash(seed: u32) -> Result<u16, Error> {
    match compute_seed_hash(seed) {
        0 => Err(Error::invalid_argument("seed hashes to zero").with_context("seed", seed)),
        seed_hash => Ok(seed_hash),
    }
}

/// Builder for [`HllSketch`].
#[derive(Debug, Clone)]
pub struct HllSketchBuilder {
    lg_config_k: u8,
    hll_type: HllType,
    seed: u32,
}

impl HllSketchBuilder {
    /// Starts a builder for `2^lg_config_k` buckets, HLL4 storage and the default seed.
    pub fn new(lg_config_k: u8) -> Self {
        Self {
            lg_config_k,
            hll_type: HllType::Hll4,
            seed: DEFAULT_UPDATE_SEED,
        }
    }

    /// Sets the bucket width used once the sketch reaches HLL mode.
    pub fn hll_type(mut self, hll_type: HllType) -> Self {
        self.hll_type = hll_type;
        self
    }

    /// Sets the hash seed. Only sketches with the same seed can be merged.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the sketch.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if
    /// `lg_config_k` is not in `[4, 21]` or the seed cannot be used.
    ///
    /// # Examples
    ///
    /// ```
    /// # use datasketches_hll::hll::HllSketchBuilder;
    /// # use datasketches_hll::hll::HllType;
    /// let sketch = HllSketchBuilder::new(14)
    ///     .hll_type(HllType::Hll6)
    ///     .seed(42)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(sketch.lg_config_k(), 14);
    /// assert!(HllSketchBuilder::new(3).build().is_err());
    /// ```
    pub fn build(self) -> Result<HllSketch, Error> {
        check_lg_k(self.lg_config_k)?;
        let seed_hash = checked_seed_hash(self.seed)?;
        Ok(HllSketch::from_parts(
            self.lg_config_k,
            self.hll_type,
            self.seed,
            seed_hash,
        ))
    }
}

/// A HyperLogLog sketch.
///
/// See the [module documentation](crate::hll) for an overview.
#[derive(Clone)]
pub struct HllSketch {
    pub(super) lg_config_k: u8,
    pub(super) seed: u32,
    pub(super) seed_hash: u16,
    pub(super) out_of_order: bool,
    pub(super) mode: Mode,
}

impl HllSketch {
    /// Creates an empty sketch with the default seed.
    ///
    /// # Panics
    ///
    /// Panics if `lg_config_k` is not in `[4, 21]`. Use [`HllSketchBuilder`] for a fallible
    /// constructor.
    pub fn new(lg_config_k: u8, hll_type: HllType) -> Self {
        assert!(
            (MIN_LG_K..=MAX_LG_K).contains(&lg_config_k),
            "lg_config_k must be in [{MIN_LG_K}, {MAX_LG_K}], got {lg_config_k}"
        );
        Self::from_parts(
            lg_config_k,
            hll_type,
            DEFAULT_UPDATE_SEED,
            compute_seed_hash(DEFAULT_UPDATE_SEED),
        )
    }

    pub(super) fn from_parts(lg_config_k: u8, hll_type: HllType, seed: u32, seed_hash: u16) -> Self {
        Self {
            lg_config_k,
            seed,
            seed_hash,
            out_of_order: false,
            mode: Mode::new(hll_type),
        }
    }

    /// Log2 of the number of buckets.
    pub fn lg_config_k(&self) -> u8 {
        self.lg_config_k
    }

    /// The bucket width used in HLL mode.
    pub fn target_type(&self) -> HllType {
        self.mode.hll_type()
    }

    /// The current representation: LIST, SET or HLL.
    pub fn current_mode(&self) -> CurMode {
        self.mode.cur_mode()
    }

    /// The hash seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns true if no value has been presented since creation or the last reset.
    pub fn is_empty(&self) -> bool {
        self.mode.is_empty()
    }

    /// Whether the sketch is the product of a merge, which disables the HIP estimator.
    pub fn is_out_of_order(&self) -> bool {
        self.out_of_order
    }

    /// Presents a value to the sketch.
    ///
    /// The value is hashed through its [`Hash`] impl with the sketch seed, so equal values of
    /// the same type always land on the same coupon.
    pub fn update<T: Hash>(&mut self, value: T) {
        self.update_coupon(coupon_from_hash(hash_value(value, self.seed)));
    }

    /// Presents raw bytes to the sketch. An empty slice is ignored.
    ///
    /// Bytes are hashed without a length prefix, matching what other DataSketches libraries
    /// produce for byte arrays.
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.update_coupon(coupon_from_hash(hash_bytes(bytes, self.seed)));
    }

    pub(super) fn update_coupon(&mut self, coupon: u32) {
        self.mode
            .update(self.lg_config_k, coupon, !self.out_of_order);
    }

    /// Empties the sketch, keeping its configuration.
    pub fn reset(&mut self) {
        self.out_of_order = false;
        self.mode = Mode::new(self.mode.hll_type());
    }

    /// Best estimate of the number of distinct items seen.
    pub fn estimate(&self) -> f64 {
        self.mode.estimate(self.out_of_order)
    }

    /// The order-independent estimate.
    ///
    /// Equal to [`estimate`](Self::estimate) for out-of-order sketches and in LIST and SET
    /// modes.
    pub fn composite_estimate(&self) -> f64 {
        self.mode.composite_estimate()
    }

    /// Which estimator [`estimate`](Self::estimate) reports.
    pub fn estimator_kind(&self) -> EstimatorKind {
        match (&self.mode, self.out_of_order) {
            (Mode::List { .. } | Mode::Set { .. }, _) => EstimatorKind::Coupon,
            (Mode::Hll(_), false) => EstimatorKind::Hip,
            (Mode::Hll(_), true) => EstimatorKind::Composite,
        }
    }

    /// Approximate lower bound of the true cardinality at the given confidence.
    pub fn lower_bound(&self, num_std_dev: NumStdDev) -> f64 {
        self.mode.lower_bound(self.out_of_order, num_std_dev)
    }

    /// Approximate upper bound of the true cardinality at the given confidence.
    pub fn upper_bound(&self, num_std_dev: NumStdDev) -> f64 {
        self.mode.upper_bound(self.out_of_order, num_std_dev)
    }

    /// Returns a copy that uses `hll_type` buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use datasketches_hll::hll::HllSketch;
    /// # use datasketches_hll::hll::HllType;
    /// let mut sketch = HllSketch::new(8, HllType::Hll8);
    /// for i in 0..10_000 {
    ///     sketch.update(i);
    /// }
    /// let small = sketch.copy_as(HllType::Hll4);
    /// assert_eq!(small.target_type(), HllType::Hll4);
    /// assert_eq!(small.estimate(), sketch.estimate());
    /// ```
    pub fn copy_as(&self, hll_type: HllType) -> HllSketch {
        HllSketch {
            lg_config_k: self.lg_config_k,
            seed: self.seed,
            seed_hash: self.seed_hash,
            out_of_order: self.out_of_order,
            mode: self.mode.copy_as(hll_type),
        }
    }

    /// Merges `other` into this sketch.
    ///
    /// The result has the smaller of the two `lg_config_k` values, the wider of the two
    /// target types, and is marked out of order.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IncompatibleSketch`](crate::error::ErrorKind::IncompatibleSketch)
    /// if the sketches were built with different seeds. `self` is unchanged on error.
    pub fn merge(&mut self, other: &HllSketch) -> Result<(), Error> {
        let lg_max_k = self.lg_config_k.max(other.lg_config_k);
        let mut union = HllUnion::from_parts(lg_max_k, self.seed, self.seed_hash);
        union.update(self)?;
        union.update(other)?;
        *self = union.get_result(self.target_type().max(other.target_type()));
        Ok(())
    }

    /// An immutable snapshot of this sketch.
    pub fn compact(&self) -> CompactHllSketch {
        let mut sketch = self.clone();
        if let Mode::Hll(array) = &mut sketch.mode {
            array.rebuild_if_stale();
        }
        CompactHllSketch { sketch }
    }

    /// Size of [`serialize`](Self::serialize) output.
    pub fn compact_serialization_bytes(&self) -> usize {
        self.mode.serialized_bytes(true)
    }

    /// Size of [`serialize_updatable`](Self::serialize_updatable) output.
    pub fn updatable_serialization_bytes(&self) -> usize {
        self.mode.serialized_bytes(false)
    }

    /// Serializes the sketch in the compact layout.
    ///
    /// # Examples
    ///
    /// ```
    /// # use datasketches_hll::hll::HllSketch;
    /// # use datasketches_hll::hll::HllType;
    /// let mut sketch = HllSketch::new(12, HllType::Hll4);
    /// sketch.update("apple");
    /// let bytes = sketch.serialize();
    /// let restored = HllSketch::deserialize(&bytes).unwrap();
    /// assert_eq!(restored.estimate(), sketch.estimate());
    /// ```
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.compact_serialization_bytes()];
        self.write_image(&mut buf, true);
        buf
    }

    /// Serializes the sketch in the updatable layout, which keeps the full hash tables.
    pub fn serialize_updatable(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.updatable_serialization_bytes()];
        self.write_image(&mut buf, false);
        buf
    }

    /// Writes the updatable layout into the front of `buf` and returns the bytes written.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`ErrorKind::InsufficientCapacity`](crate::error::ErrorKind::InsufficientCapacity) if
    /// `buf` is shorter than [`updatable_serialization_bytes`](Self::updatable_serialization_bytes);
    /// nothing is written in that case.
    pub fn serialize_updatable_into(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let required = self.updatable_serialization_bytes();
        if buf.len() < required {
            return Err(Error::insufficient_capacity(required, buf.len()));
        }
        self.write_image(&mut buf[..required], false);
        Ok(required)
    }

    fn write_image(&self, buf: &mut [u8], compact: bool) {
        let mut bytes = SketchBytes::new(buf);
        self.mode
            .preamble(self.lg_config_k, compact, self.out_of_order)
            .write(&mut bytes);
        self.mode.write_body(&mut bytes, compact);
        debug_assert_eq!(bytes.position(), self.mode.serialized_bytes(compact));
    }

    /// Reads a sketch written with the default seed, in either layout.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) if the bytes
    /// are truncated or do not describe a valid HLL sketch.
    pub fn deserialize(bytes: &[u8]) -> Result<HllSketch, Error> {
        Self::deserialize_with_seed(bytes, DEFAULT_UPDATE_SEED)
    }

    /// Reads a sketch whose updates were hashed with `seed`.
    ///
    /// The layout does not record the seed; the caller vouches for it.
    pub fn deserialize_with_seed(bytes: &[u8], seed: u32) -> Result<HllSketch, Error> {
        let seed_hash = checked_seed_hash(seed)?;
        let mut cursor = SketchSlice::new(bytes);
        let preamble = Preamble::read(&mut cursor)?;
        let mode = Mode::read_body(&preamble, &mut cursor)?;
        Ok(HllSketch {
            lg_config_k: preamble.lg_config_k,
            seed,
            seed_hash,
            out_of_order: preamble.has_flag(OUT_OF_ORDER_FLAG),
            mode,
        })
    }
}

impl fmt::Debug for HllSketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HllSketch")
            .field("lg_config_k", &self.lg_config_k)
            .field("target_type", &self.target_type())
            .field("mode", &self.current_mode())
            .field("out_of_order", &self.out_of_order)
            .field("estimate", &self.estimate())
            .finish()
    }
}

/// A read-only snapshot of an [`HllSketch`].
///
/// Any deferred bookkeeping is settled when the snapshot is taken, so it can be shared across
/// threads and queried without further work.
#[derive(Debug, Clone)]
pub struct CompactHllSketch {
    sketch: HllSketch,
}

impl CompactHllSketch {
    /// Log2 of the number of buckets.
    pub fn lg_config_k(&self) -> u8 {
        self.sketch.lg_config_k()
    }

    /// The bucket width used in HLL mode.
    pub fn target_type(&self) -> HllType {
        self.sketch.target_type()
    }

    /// The current representation.
    pub fn current_mode(&self) -> CurMode {
        self.sketch.current_mode()
    }

    /// Returns true if the snapshot holds no values.
    pub fn is_empty(&self) -> bool {
        self.sketch.is_empty()
    }

    /// Whether the snapshot came out of a merge.
    pub fn is_out_of_order(&self) -> bool {
        self.sketch.is_out_of_order()
    }

    /// The cardinality estimate.
    pub fn estimate(&self) -> f64 {
        self.sketch.estimate()
    }

    /// The estimate that ignores the HIP accumulator.
    pub fn composite_estimate(&self) -> f64 {
        self.sketch.composite_estimate()
    }

    /// Approximate lower error bound.
    pub fn lower_bound(&self, num_std_dev: NumStdDev) -> f64 {
        self.sketch.lower_bound(num_std_dev)
    }

    /// Approximate upper error bound.
    pub fn upper_bound(&self, num_std_dev: NumStdDev) -> f64 {
        self.sketch.upper_bound(num_std_dev)
    }

    /// Serializes the snapshot in the compact layout.
    pub fn serialize(&self) -> Vec<u8> {
        self.sketch.serialize()
    }

    /// Returns an updatable sketch with the same content.
    pub fn to_sketch(&self) -> HllSketch {
        self.sketch.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hll::max_updatable_serialization_bytes;
    use crate::hll::pack_coupon;

    #[test]
    fn test_estimator_kind_follows_mode_and_order() {
        let mut sketch = HllSketch::new(4, HllType::Hll8);
        assert_eq!(sketch.estimator_kind(), EstimatorKind::Coupon);
        for i in 0..100 {
            sketch.update(i);
        }
        assert_eq!(sketch.estimator_kind(), EstimatorKind::Hip);

        let other = sketch.clone();
        sketch.merge(&other).unwrap();
        assert_eq!(sketch.estimator_kind(), EstimatorKind::Composite);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut sketch = HllSketchBuilder::new(10)
            .hll_type(HllType::Hll6)
            .seed(7)
            .build()
            .unwrap();
        for i in 0..5000 {
            sketch.update(i);
        }
        sketch.reset();
        assert!(sketch.is_empty());
        assert_eq!(sketch.current_mode(), CurMode::List);
        assert_eq!(sketch.target_type(), HllType::Hll6);
        assert_eq!(sketch.seed(), 7);
        assert_eq!(sketch.estimate(), 0.0);
    }

    #[test]
    fn test_update_bytes_ignores_empty_input() {
        let mut sketch = HllSketch::new(10, HllType::Hll4);
        sketch.update_bytes(&[]);
        assert!(sketch.is_empty());
        sketch.update_bytes(b"x");
        sketch.update_bytes(b"x");
        assert_eq!(sketch.estimate(), 1.0);
    }

    #[test]
    fn test_max_updatable_bytes_fits_a_full_aux_table() {
        let lg_k = 10;
        let mut sketch = HllSketch::new(lg_k, HllType::Hll4);
        // 7 of every 8 buckets land 21 above the minimum, well past the nibble range
        for slot in 0..1u32 << lg_k {
            let value = if slot % 8 == 0 { 1 } else { 21 };
            sketch.update_coupon(pack_coupon(slot, value));
        }
        assert_eq!(sketch.current_mode(), CurMode::Hll);

        let max = max_updatable_serialization_bytes(lg_k, HllType::Hll4);
        assert_eq!(sketch.updatable_serialization_bytes(), max);
        let mut buf = vec![0u8; max];
        let written = sketch.serialize_updatable_into(&mut buf).unwrap();
        assert_eq!(written, max);
        assert_eq!(buf, sketch.serialize_updatable());
    }

    #[test]
    fn test_compact_snapshot_is_settled() {
        let mut sketch = HllSketch::new(4, HllType::Hll4);
        for i in 0..2000 {
            sketch.update(i);
        }
        let snapshot = sketch.compact();
        if let Mode::Hll(array) = &snapshot.sketch.mode {
            assert!(!array.is_stale());
        }
        assert_eq!(snapshot.estimate(), sketch.estimate());
        assert_eq!(snapshot.to_sketch().serialize(), snapshot.serialize());

        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompactHllSketch>();
    }

    #[test]
    fn test_debug_output() {
        let sketch = HllSketch::new(12, HllType::Hll4);
        let debug = format!("{sketch:?}");
        assert!(debug.contains("lg_config_k: 12"), "{debug}");
        assert!(debug.contains("mode: List"), "{debug}");
    }
}
