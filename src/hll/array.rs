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


//! The HLL mode: `k` buckets in one of three widths, plus the running estimator state.

use std::sync::OnceLock;

use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::common::NumStdDev;
use crate::error::Error;
use crate::hll::HllType;
use crate::hll::accumulators::Accumulators;
use crate::hll::array4::AUX_TOKEN;
use crate::hll::array4::Array4;
use crate::hll::array6::Array6;
use crate::hll::array8::Array8;
use crate::hll::aux_map::AuxMap;
use crate::hll::aux_map::initial_lg_aux_size;
use crate::hll::aux_map::max_lg_aux_size;
use crate::hll::estimator;
use crate::hll::get_value;
use crate::hll::pack_coupon;
use crate::hll::serialization::COUPON_BYTES;
use crate::hll::serialization::HLL_HEADER_BYTES;
use crate::hll::serialization::Preamble;
use crate::hll::serialization::REBUILD_CUR_MIN_FLAG;
use crate::hll::serialization::hll_array_bytes;
use crate::hll::serialization::make_error;
use crate::hll::slot_of;
use crate::hll::unpack_coupon;

/// Largest value a bucket can hold.
const MAX_SLOT_VALUE: u8 = 63;

/// Relative slack allowed between stored and rescanned kxq sums.
const KXQ_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone)]
enum Slots {
    Hll4(Array4),
    Hll6(Array6),
    Hll8(Array8),
}

/// Bucket array with its accumulators.
///
/// When `stale` is set the bucket values are authoritative but the accumulators are not:
/// only `acc.cur_min` is kept, as the base HLL4 nibbles are encoded against. Mutating
/// operations rebuild first. The first read scans the buckets once and keeps the result in
/// `scanned` until the next mutation.
#[derive(Debug, Clone)]
pub(super) struct HllArray {
    lg_config_k: u8,
    slots: Slots,
    acc: Accumulators,
    hip_accum: f64,
    stale: bool,
    scanned: OnceLock<Accumulators>,
}

impl HllArray {
    pub fn new(lg_config_k: u8, hll_type: HllType) -> Self {
        let slots = match hll_type {
            HllType::Hll4 => Slots::Hll4(Array4::new(lg_config_k)),
            HllType::Hll6 => Slots::Hll6(Array6::new(lg_config_k)),
            HllType::Hll8 => Slots::Hll8(Array8::new(lg_config_k)),
        };
        Self {
            lg_config_k,
            slots,
            acc: Accumulators::new(lg_config_k),
            hip_accum: 0.0,
            stale: false,
            scanned: OnceLock::new(),
        }
    }

    /// Builds an array holding exactly `values`, with freshly computed accumulators.
    pub fn from_values(lg_config_k: u8, hll_type: HllType, values: &[u8], hip_accum: f64) -> Self {
        debug_assert_eq!(values.len(), 1 << lg_config_k);
        let acc = Accumulators::scan(values.iter().copied(), hll_type == HllType::Hll4);
        let slots = match hll_type {
            HllType::Hll4 => Slots::Hll4(Array4::from_values(lg_config_k, values, acc.cur_min)),
            HllType::Hll6 => {
                let mut array = Array6::new(lg_config_k);
                for (slot, &value) in values.iter().enumerate() {
                    if value != 0 {
                        array.put(slot as u32, value);
                    }
                }
                Slots::Hll6(array)
            }
            HllType::Hll8 => Slots::Hll8(Array8::from_bytes(values.into())),
        };
        Self {
            lg_config_k,
            slots,
            acc,
            hip_accum,
            stale: false,
            scanned: OnceLock::new(),
        }
    }

    pub fn lg_config_k(&self) -> u8 {
        self.lg_config_k
    }

    pub fn hll_type(&self) -> HllType {
        match self.slots {
            Slots::Hll4(_) => HllType::Hll4,
            Slots::Hll6(_) => HllType::Hll6,
            Slots::Hll8(_) => HllType::Hll8,
        }
    }

    #[cfg(test)]
    pub fn hip_accum(&self) -> f64 {
        self.hip_accum
    }

    pub fn set_hip_accum(&mut self, hip_accum: f64) {
        self.hip_accum = hip_accum;
    }

    #[cfg(test)]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Current accumulators, recomputed from the buckets if they are stale.
    pub fn accumulators(&self) -> Accumulators {
        if self.stale {
            *self.scanned.get_or_init(|| self.scan())
        } else {
            self.acc
        }
    }

    fn scan(&self) -> Accumulators {
        Accumulators::scan(self.values(), self.hll_type() == HllType::Hll4)
    }

    pub fn get(&self, slot: u32) -> u8 {
        match &self.slots {
            Slots::Hll4(array) => array.get(slot, self.acc.cur_min),
            Slots::Hll6(array) => array.get(slot),
            Slots::Hll8(array) => array.get(slot),
        }
    }

    /// All bucket values in slot order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        (0..1u32 << self.lg_config_k).map(move |slot| self.get(slot))
    }

    /// Raises `slot` to `value` without touching the accumulators.
    fn put(&mut self, slot: u32, value: u8) {
        match &mut self.slots {
            Slots::Hll4(array) => array.set(slot, self.acc.cur_min, value),
            Slots::Hll6(array) => array.put(slot, value),
            Slots::Hll8(array) => array.put(slot, value),
        }
    }

    /// Applies a coupon, keeping the accumulators current.
    ///
    /// With `track_hip` the HIP accumulator is credited with the inverse probability of the
    /// change, read before the change is applied.
    pub fn update(&mut self, coupon: u32, track_hip: bool) {
        self.rebuild_if_stale();

        let slot = slot_of(coupon, self.lg_config_k);
        let new_value = get_value(coupon);
        if new_value <= self.acc.cur_min {
            return;
        }
        let old_value = self.get(slot);
        if new_value <= old_value {
            return;
        }

        if track_hip {
            let k = (1u32 << self.lg_config_k) as f64;
            self.hip_accum += k / self.acc.kxq_sum();
        }
        self.put(slot, new_value);
        self.acc.replace(old_value, new_value);

        if old_value == self.acc.cur_min {
            self.acc.num_at_cur_min -= 1;
            if self.acc.num_at_cur_min == 0 && matches!(self.slots, Slots::Hll4(_)) {
                // every bucket moved above cur_min; shift the base on the next mutation
                self.stale = true;
            }
        }
    }

    /// Recomputes the accumulators, and for HLL4 re-encodes against the true minimum.
    pub fn rebuild_if_stale(&mut self) {
        if !self.stale {
            return;
        }
        if let Slots::Hll4(array) = &mut self.slots {
            self.acc.cur_min = array.rebase(self.acc.cur_min);
        }
        // rebasing re-encodes nibbles but keeps every value, so a cached scan still holds
        self.acc = match self.scanned.take() {
            Some(acc) => acc,
            None => self.scan(),
        };
        self.stale = false;
    }

    /// Bucket-wise maximum with `src`, whose `lg_config_k` must not be smaller.
    ///
    /// Larger sources are folded by keeping the low bits of each slot index.
    pub fn merge_from(&mut self, src: &HllArray) {
        debug_assert!(src.lg_config_k >= self.lg_config_k);
        let same_k = src.lg_config_k == self.lg_config_k;
        match (&mut self.slots, &src.slots) {
            (Slots::Hll8(dst), Slots::Hll8(other)) if same_k => dst.merge_max(other.bytes()),
            _ => {
                let dst_mask = (1u32 << self.lg_config_k) - 1;
                for (slot, value) in src.values().enumerate() {
                    let dst_slot = slot as u32 & dst_mask;
                    if value > self.get(dst_slot) {
                        self.put(dst_slot, value);
                    }
                }
            }
        }
        self.stale = true;
        self.scanned = OnceLock::new();
    }

    /// Copies the buckets into a new array of `2^lg_target` buckets and the given width.
    pub fn folded(&self, lg_target: u8, hll_type: HllType) -> HllArray {
        debug_assert!(lg_target <= self.lg_config_k);
        if lg_target == self.lg_config_k {
            return self.copy_as(hll_type);
        }
        let mask = (1usize << lg_target) - 1;
        let mut values = vec![0u8; 1 << lg_target];
        for (slot, value) in self.values().enumerate() {
            let dst = &mut values[slot & mask];
            *dst = (*dst).max(value);
        }
        HllArray::from_values(lg_target, hll_type, &values, 0.0)
    }

    pub fn copy_as(&self, hll_type: HllType) -> HllArray {
        if hll_type == self.hll_type() && !self.stale {
            return self.clone();
        }
        let values: Vec<u8> = self.values().collect();
        HllArray::from_values(self.lg_config_k, hll_type, &values, self.hip_accum)
    }

    pub fn composite_estimate(&self) -> f64 {
        estimator::composite_estimate(self.lg_config_k, &self.accumulators())
    }

    pub fn estimate(&self, out_of_order: bool) -> f64 {
        if out_of_order {
            self.composite_estimate()
        } else {
            self.hip_accum
        }
    }

    pub fn lower_bound(&self, out_of_order: bool, num_std_dev: NumStdDev) -> f64 {
        estimator::hll_lower_bound(
            self.lg_config_k,
            self.estimate(out_of_order),
            out_of_order,
            &self.accumulators(),
            num_std_dev,
        )
    }

    pub fn upper_bound(&self, out_of_order: bool, num_std_dev: NumStdDev) -> f64 {
        estimator::hll_upper_bound(
            self.lg_config_k,
            self.estimate(out_of_order),
            out_of_order,
            num_std_dev,
        )
    }

    /// Value of preamble byte 4: the aux table size for HLL4, 0 otherwise.
    pub fn lg_arr(&self) -> u8 {
        match &self.slots {
            Slots::Hll4(array) => array
                .aux()
                .map_or_else(|| initial_lg_aux_size(self.lg_config_k), AuxMap::lg_size),
            Slots::Hll6(_) | Slots::Hll8(_) => 0,
        }
    }

    /// Value of preamble byte 6.
    pub fn cur_min(&self) -> u8 {
        self.acc.cur_min
    }

    /// Preamble flag bits owned by the array.
    pub fn flags(&self) -> u8 {
        if self.stale { REBUILD_CUR_MIN_FLAG } else { 0 }
    }

    fn aux_count(&self) -> u32 {
        match &self.slots {
            Slots::Hll4(array) => array.aux().map_or(0, AuxMap::count),
            Slots::Hll6(_) | Slots::Hll8(_) => 0,
        }
    }

    fn slot_bytes(&self) -> &[u8] {
        match &self.slots {
            Slots::Hll4(array) => array.bytes(),
            Slots::Hll6(array) => array.bytes(),
            Slots::Hll8(array) => array.bytes(),
        }
    }

    pub fn serialized_bytes(&self, compact: bool) -> usize {
        let aux_entries = match (&self.slots, compact) {
            (Slots::Hll4(_), true) => self.aux_count() as usize,
            (Slots::Hll4(_), false) => 1 << self.lg_arr(),
            (Slots::Hll6(_) | Slots::Hll8(_), _) => 0,
        };
        HLL_HEADER_BYTES + self.slot_bytes().len() + COUPON_BYTES * aux_entries
    }

    /// Writes everything after the preamble.
    pub fn write_body(&self, bytes: &mut SketchBytes, compact: bool) {
        bytes.write_f64_le(self.hip_accum);
        bytes.write_f64_le(self.acc.kxq0);
        bytes.write_f64_le(self.acc.kxq1);
        bytes.write_u32_le(self.acc.num_at_cur_min);
        bytes.write_u32_le(self.aux_count());
        bytes.write(self.slot_bytes());

        let Slots::Hll4(array) = &self.slots else {
            return;
        };
        match (array.aux(), compact) {
            (Some(aux), true) => {
                let mut entries: Vec<(u32, u8)> = aux.iter().collect();
                entries.sort_unstable_by_key(|&(slot, _)| slot);
                for (slot, value) in entries {
                    bytes.write_u32_le(pack_coupon(slot, value));
                }
            }
            (Some(aux), false) => {
                for &entry in aux.table() {
                    bytes.write_u32_le(entry);
                }
            }
            (None, true) => {}
            (None, false) => {
                for _ in 0..1u32 << self.lg_arr() {
                    bytes.write_u32_le(0);
                }
            }
        }
    }

    /// Reads the body of an HLL-mode image described by `preamble`.
    pub fn read_body(
        preamble: &Preamble,
        cursor: &mut SketchSlice,
        compact: bool,
    ) -> Result<Self, Error> {
        let lg_config_k = preamble.lg_config_k;
        let k = 1u32 << lg_config_k;
        let cur_min = preamble.count_or_min;

        let hip_accum = cursor.read_f64_le().map_err(make_error("hip_accum"))?;
        let kxq0 = cursor.read_f64_le().map_err(make_error("kxq0"))?;
        let kxq1 = cursor.read_f64_le().map_err(make_error("kxq1"))?;
        let num_at_cur_min = cursor.read_u32_le().map_err(make_error("num_at_cur_min"))?;
        let aux_count = cursor.read_u32_le().map_err(make_error("aux_count"))?;

        if cur_min > MAX_SLOT_VALUE {
            return Err(Error::invalid_data(format!("cur_min {cur_min} exceeds {MAX_SLOT_VALUE}")));
        }
        if preamble.hll_type != HllType::Hll4 && cur_min != 0 {
            return Err(Error::invalid_data(format!(
                "cur_min must be 0 for {:?}, got {cur_min}",
                preamble.hll_type
            )));
        }
        if num_at_cur_min > k {
            return Err(Error::invalid_data(format!(
                "num_at_cur_min {num_at_cur_min} exceeds k = {k}"
            )));
        }
        if preamble.hll_type != HllType::Hll4 && aux_count != 0 {
            return Err(Error::invalid_data(format!(
                "{:?} sketches carry no aux entries, got {aux_count}",
                preamble.hll_type
            )));
        }

        let num_bytes = hll_array_bytes(lg_config_k, preamble.hll_type);
        if cursor.remaining() < num_bytes {
            return Err(Error::insufficient_data("hll_array"));
        }
        let mut slot_bytes = vec![0u8; num_bytes].into_boxed_slice();
        cursor
            .read_exact(&mut slot_bytes)
            .map_err(make_error("hll_array"))?;

        let slots = match preamble.hll_type {
            HllType::Hll4 => {
                let aux = if compact {
                    read_compact_aux(cursor, lg_config_k, aux_count)?
                } else {
                    read_updatable_aux(cursor, lg_config_k, preamble.lg_arr, aux_count)?
                };
                let array = Array4::from_parts(lg_config_k, slot_bytes, aux);
                check_aux_tokens(&array, aux_count)?;
                check_aux_values(&array, cur_min)?;
                Slots::Hll4(array)
            }
            HllType::Hll6 => Slots::Hll6(Array6::from_bytes(slot_bytes)),
            HllType::Hll8 => Slots::Hll8(Array8::from_bytes(slot_bytes)),
        };

        let mut array = HllArray {
            lg_config_k,
            slots,
            acc: Accumulators {
                cur_min,
                num_at_cur_min,
                kxq0,
                kxq1,
            },
            hip_accum,
            stale: preamble.has_flag(REBUILD_CUR_MIN_FLAG),
            scanned: OnceLock::new(),
        };
        if let Some(value) = array.values().find(|&v| v > MAX_SLOT_VALUE) {
            return Err(Error::invalid_data(format!(
                "bucket value {value} exceeds {MAX_SLOT_VALUE}"
            )));
        }
        let scanned = array.scan();
        if array.stale {
            array.scanned = OnceLock::from(scanned);
        } else {
            check_accumulators(&array.acc, &scanned)?;
        }
        Ok(array)
    }
}

/// Header accumulators of an up-to-date image must describe its buckets.
fn check_accumulators(header: &Accumulators, scanned: &Accumulators) -> Result<(), Error> {
    if header.cur_min != scanned.cur_min || header.num_at_cur_min != scanned.num_at_cur_min {
        return Err(Error::invalid_data("accumulators disagree with buckets")
            .with_context("cur_min", header.cur_min)
            .with_context("num_at_cur_min", header.num_at_cur_min)
            .with_context("scanned_cur_min", scanned.cur_min)
            .with_context("scanned_num_at_cur_min", scanned.num_at_cur_min));
    }
    // incremental sums drift from a fresh scan by rounding only
    let drift = (header.kxq_sum() - scanned.kxq_sum()).abs();
    if drift.is_nan() || drift > KXQ_TOLERANCE * scanned.kxq_sum() {
        return Err(Error::invalid_data("kxq accumulators disagree with buckets")
            .with_context("kxq0", header.kxq0)
            .with_context("kxq1", header.kxq1));
    }
    Ok(())
}

fn read_compact_aux(
    cursor: &mut SketchSlice,
    lg_config_k: u8,
    aux_count: u32,
) -> Result<Option<AuxMap>, Error> {
    if aux_count == 0 {
        return Ok(None);
    }
    if aux_count > 1 << lg_config_k {
        return Err(Error::invalid_data(format!(
            "aux count {aux_count} exceeds k = {}",
            1u32 << lg_config_k
        )));
    }
    if cursor.remaining() < COUPON_BYTES * aux_count as usize {
        return Err(Error::insufficient_data("aux_entries"));
    }

    let mut aux = AuxMap::new(lg_config_k);
    for index in 0..aux_count {
        let entry = cursor.read_u32_le().map_err(make_error("aux_entries"))?;
        let (slot, value) = unpack_coupon(entry);
        if slot >= 1 << lg_config_k {
            return Err(Error::invalid_data("aux entry slot out of range")
                .with_context("index", index)
                .with_context("slot", slot));
        }
        if !aux.insert(slot, value) {
            return Err(Error::invalid_data("duplicate aux entry").with_context("slot", slot));
        }
    }
    Ok(Some(aux))
}

fn read_updatable_aux(
    cursor: &mut SketchSlice,
    lg_config_k: u8,
    lg_arr: u8,
    aux_count: u32,
) -> Result<Option<AuxMap>, Error> {
    if lg_arr > max_lg_aux_size(lg_config_k) {
        return Err(Error::invalid_data(format!(
            "aux table lg size {lg_arr} too large for lg_config_k {lg_config_k}"
        )));
    }
    let len = 1usize << lg_arr;
    if cursor.remaining() < COUPON_BYTES * len {
        return Err(Error::insufficient_data("aux_table"));
    }
    let mut entries = vec![0u32; len].into_boxed_slice();
    for entry in entries.iter_mut() {
        *entry = cursor.read_u32_le().map_err(make_error("aux_table"))?;
    }
    if aux_count == 0 && entries.iter().all(|&e| e == 0) {
        return Ok(None);
    }
    let aux = AuxMap::from_table(lg_config_k, lg_arr, entries)
        .ok_or_else(|| Error::invalid_data("corrupt aux table"))?;
    if aux.count() != aux_count {
        return Err(Error::invalid_data(format!(
            "aux table holds {} entries, header says {aux_count}",
            aux.count()
        )));
    }
    Ok(Some(aux))
}

/// Aux entries hold values that did not fit next to `cur_min`.
fn check_aux_values(array: &Array4, cur_min: u8) -> Result<(), Error> {
    let Some(aux) = array.aux() else {
        return Ok(());
    };
    let min_value = cur_min + AUX_TOKEN;
    if let Some((slot, value)) = aux
        .iter()
        .find(|&(_, v)| v < min_value || v > MAX_SLOT_VALUE)
    {
        return Err(Error::invalid_data(format!(
            "aux value {value} outside [{min_value}, {MAX_SLOT_VALUE}]"
        ))
        .with_context("slot", slot));
    }
    Ok(())
}

/// Every exception nibble must have exactly one aux entry.
fn check_aux_tokens(array: &Array4, aux_count: u32) -> Result<(), Error> {
    let tokens = array.num_aux_tokens();
    if tokens != aux_count {
        return Err(Error::invalid_data(format!(
            "{tokens} buckets reference the aux table, header says {aux_count}"
        )));
    }
    if let Some(aux) = array.aux() {
        if let Some((slot, _)) = aux.iter().find(|&(slot, _)| array.get_raw(slot) != AUX_TOKEN) {
            return Err(Error::invalid_data("aux entry for an inline bucket").with_context("slot", slot));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hll::CurMode;
    use crate::hll::serialization::COMPACT_FLAG;
    use crate::hll::serialization::PREAMBLE_BYTES;

    fn coupon(slot: u32, value: u8) -> u32 {
        pack_coupon(slot, value)
    }

    fn all_types() -> [HllType; 3] {
        [HllType::Hll4, HllType::Hll6, HllType::Hll8]
    }

    #[test]
    fn test_update_keeps_accumulators_current() {
        for hll_type in all_types() {
            let mut array = HllArray::new(4, hll_type);
            array.update(coupon(3, 5), true);
            array.update(coupon(3, 2), true);
            array.update(coupon(9, 1), true);

            assert_eq!(array.get(3), 5);
            assert_eq!(array.get(9), 1);
            let acc = array.accumulators();
            assert_eq!(acc.cur_min, 0);
            assert_eq!(acc.num_at_cur_min, 14);
            let expected = Accumulators::scan(array.values(), hll_type == HllType::Hll4);
            assert_eq!(acc, expected);
            // 16 / 16 for the first change, then 16 / (15 + 1/32)
            let hip = 1.0 + 16.0 / (15.0 + 1.0 / 32.0);
            assert!((array.hip_accum() - hip).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hll4_shifts_cur_min_when_all_buckets_rise() {
        let mut array = HllArray::new(4, HllType::Hll4);
        for slot in 0..16 {
            array.update(coupon(slot, 2 + (slot % 3) as u8), false);
        }
        assert!(array.is_stale());
        assert_eq!(array.accumulators().cur_min, 2);

        array.update(coupon(0, 20), false);
        assert!(!array.is_stale());
        assert_eq!(array.cur_min(), 2);
        assert_eq!(array.accumulators().num_at_cur_min, 5);
        // 20 - 2 = 18 does not fit in a nibble
        assert_eq!(array.aux_count(), 1);
        assert_eq!(array.get(0), 20);
        assert_eq!(array.get(1), 3);
    }

    #[test]
    fn test_types_agree_on_values_and_estimates() {
        let coupons: Vec<u32> = (0..5000u32)
            .map(|i| {
                let mixed = i.wrapping_mul(0x9E37_79B9);
                coupon(mixed % 1024, (mixed >> 27) as u8 % 30 + 1)
            })
            .collect();
        let arrays: Vec<HllArray> = all_types()
            .into_iter()
            .map(|hll_type| {
                let mut array = HllArray::new(10, hll_type);
                for &c in &coupons {
                    array.update(c, true);
                }
                array
            })
            .collect();
        let values: Vec<u8> = arrays[0].values().collect();
        for array in &arrays[1..] {
            assert_eq!(array.values().collect::<Vec<u8>>(), values);
            assert_eq!(array.hip_accum(), arrays[0].hip_accum());
            assert_eq!(array.composite_estimate(), arrays[0].composite_estimate());
        }
    }

    #[test]
    fn test_merge_from_folds_larger_source() {
        let mut src = HllArray::new(6, HllType::Hll6);
        src.update(coupon(5, 7), true);
        src.update(coupon(5 + 16, 9), true);
        src.update(coupon(40, 3), true);

        let mut dst = HllArray::new(4, HllType::Hll4);
        dst.update(coupon(5, 8), true);
        dst.merge_from(&src);
        assert!(dst.is_stale());
        assert_eq!(dst.get(5), 9);
        assert_eq!(dst.get(40 & 15), 3);

        dst.rebuild_if_stale();
        assert!(!dst.is_stale());
        assert_eq!(dst.accumulators().num_at_cur_min, 14);
    }

    #[test]
    fn test_folded_and_copy_as() {
        let mut array = HllArray::new(8, HllType::Hll8);
        for slot in 0..256 {
            array.update(coupon(slot, (slot % 20 + 1) as u8), true);
        }
        let folded = array.folded(4, HllType::Hll4);
        assert_eq!(folded.lg_config_k(), 4);
        for slot in 0..16u32 {
            let expected = (0..16u32).map(|hi| ((hi * 16 + slot) % 20 + 1) as u8).max();
            assert_eq!(Some(folded.get(slot)), expected);
        }

        let copy = array.copy_as(HllType::Hll4);
        assert_eq!(copy.hll_type(), HllType::Hll4);
        assert_eq!(copy.hip_accum(), array.hip_accum());
        assert_eq!(copy.values().collect::<Vec<u8>>(), array.values().collect::<Vec<u8>>());
    }

    fn body(array: &HllArray, compact: bool) -> Vec<u8> {
        let mut buf = vec![0u8; array.serialized_bytes(compact) - PREAMBLE_BYTES];
        let mut bytes = SketchBytes::new(&mut buf);
        array.write_body(&mut bytes, compact);
        assert_eq!(bytes.position(), buf.len());
        buf
    }

    fn preamble_of(array: &HllArray, compact: bool) -> Preamble {
        Preamble {
            lg_config_k: array.lg_config_k(),
            lg_arr: array.lg_arr(),
            flags: array.flags() | if compact { COMPACT_FLAG } else { 0 },
            count_or_min: array.cur_min(),
            cur_mode: CurMode::Hll,
            hll_type: array.hll_type(),
        }
    }

    fn round_trip(array: &HllArray, compact: bool) -> HllArray {
        let buf = body(array, compact);
        let preamble = preamble_of(array, compact);
        HllArray::read_body(&preamble, &mut SketchSlice::new(&buf), compact).unwrap()
    }

    #[test]
    fn test_body_round_trip_with_aux() {
        let mut array = HllArray::new(5, HllType::Hll4);
        array.update(coupon(1, 20), true);
        array.update(coupon(2, 33), true);
        array.update(coupon(3, 4), true);
        for compact in [true, false] {
            let restored = round_trip(&array, compact);
            assert_eq!(restored.values().collect::<Vec<u8>>(), array.values().collect::<Vec<u8>>());
            assert_eq!(restored.accumulators(), array.accumulators());
            assert_eq!(restored.hip_accum(), array.hip_accum());
            assert_eq!(restored.aux_count(), 2);
        }
    }

    #[test]
    fn test_body_rejects_corruption() {
        let mut array = HllArray::new(4, HllType::Hll8);
        array.update(coupon(1, 5), true);
        let buf = body(&array, true);
        let preamble = Preamble {
            lg_config_k: 4,
            lg_arr: 0,
            flags: COMPACT_FLAG,
            count_or_min: 0,
            cur_mode: CurMode::Hll,
            hll_type: HllType::Hll8,
        };

        let truncated = &buf[..buf.len() - 1];
        let err = HllArray::read_body(&preamble, &mut SketchSlice::new(truncated), true);
        assert!(err.is_err());

        let mut bad_value = buf.clone();
        *bad_value.last_mut().unwrap() = 64;
        let err = HllArray::read_body(&preamble, &mut SketchSlice::new(&bad_value), true);
        assert!(err.is_err());

        let nonzero_min = Preamble {
            count_or_min: 1,
            ..preamble
        };
        let err = HllArray::read_body(&nonzero_min, &mut SketchSlice::new(&buf), true);
        assert!(err.is_err());
    }

    #[test]
    fn test_stale_reads_scan_once() {
        let mut array = HllArray::new(4, HllType::Hll4);
        for slot in 0..16 {
            array.update(coupon(slot, 2 + (slot % 3) as u8), true);
        }
        assert!(array.is_stale());
        assert!(array.scanned.get().is_none());

        let first = array.lower_bound(true, NumStdDev::Two);
        let cached = *array.scanned.get().unwrap();
        assert_eq!(cached, Accumulators::scan(array.values(), true));
        for _ in 0..3 {
            assert_eq!(array.lower_bound(true, NumStdDev::Two), first);
            assert_eq!(array.composite_estimate(), array.composite_estimate());
        }
        // the deferred rebuild still waits for the next mutation
        assert!(array.is_stale());

        array.update(coupon(1, 9), true);
        assert!(!array.is_stale());
        assert!(array.scanned.get().is_none());
        assert_eq!(array.cur_min(), cached.cur_min);
        assert_eq!(array.accumulators(), Accumulators::scan(array.values(), true));
    }

    #[test]
    fn test_merge_drops_cached_scan() {
        let mut dst = HllArray::new(4, HllType::Hll8);
        let mut src = HllArray::new(4, HllType::Hll8);
        src.update(coupon(1, 5), true);
        dst.merge_from(&src);
        assert_eq!(dst.accumulators().num_at_cur_min, 15);
        assert!(dst.scanned.get().is_some());

        let mut more = HllArray::new(4, HllType::Hll6);
        more.update(coupon(2, 3), true);
        dst.merge_from(&more);
        assert_eq!(dst.accumulators().num_at_cur_min, 14);
    }

    #[test]
    fn test_stale_image_loads_with_scan() {
        let mut array = HllArray::new(4, HllType::Hll4);
        for slot in 0..16 {
            array.update(coupon(slot, 3), false);
        }
        assert!(array.is_stale());
        for compact in [true, false] {
            let restored = round_trip(&array, compact);
            assert!(restored.is_stale());
            assert_eq!(restored.scanned.get(), Some(&array.accumulators()));
            assert_eq!(body(&restored, compact), body(&array, compact));
        }
    }

    #[test]
    fn test_body_rejects_inconsistent_accumulators() {
        let mut array = HllArray::new(6, HllType::Hll8);
        for slot in 0..40 {
            array.update(coupon(slot, (slot % 7 + 1) as u8), true);
        }
        let buf = body(&array, true);
        let preamble = preamble_of(&array, true);
        let read = |bytes: &[u8], preamble: &Preamble| {
            HllArray::read_body(preamble, &mut SketchSlice::new(bytes), true)
        };
        assert!(read(&buf, &preamble).is_ok());

        // num_at_cur_min sits after hip_accum, kxq0 and kxq1
        let mut zero_count = buf.clone();
        zero_count[24..28].copy_from_slice(&0u32.to_le_bytes());
        let err = read(&zero_count, &preamble).unwrap_err();
        assert_eq!(err.message(), "accumulators disagree with buckets");

        let mut bad_kxq = buf.clone();
        bad_kxq[8..16].copy_from_slice(&1e9f64.to_le_bytes());
        let err = read(&bad_kxq, &preamble).unwrap_err();
        assert_eq!(err.message(), "kxq accumulators disagree with buckets");

        let mut nan_kxq = buf.clone();
        nan_kxq[16..24].copy_from_slice(&f64::NAN.to_le_bytes());
        assert!(read(&nan_kxq, &preamble).is_err());

        // a stale image skips the check, since its counters are rebuilt on load
        let stale = Preamble {
            flags: preamble.flags | REBUILD_CUR_MIN_FLAG,
            ..preamble
        };
        let restored = read(&zero_count, &stale).unwrap();
        assert_eq!(restored.accumulators().num_at_cur_min, 24);
    }

    #[test]
    fn test_hll4_body_rejects_out_of_range_values() {
        let mut array = HllArray::new(4, HllType::Hll4);
        array.update(coupon(1, 14), true);
        array.update(coupon(2, 20), true);
        let buf = body(&array, true);
        let preamble = preamble_of(&array, true);

        let raised = |cur_min: u8| Preamble {
            count_or_min: cur_min,
            flags: preamble.flags | REBUILD_CUR_MIN_FLAG,
            ..preamble
        };
        // aux value 20 cannot sit below cur_min + 15
        let err = HllArray::read_body(&raised(10), &mut SketchSlice::new(&buf), true).unwrap_err();
        assert!(err.message().starts_with("aux value 20"), "{err}");

        // nibble 14 on top of cur_min 50 overflows the 6-bit range
        let mut inline_only = HllArray::new(4, HllType::Hll4);
        inline_only.update(coupon(1, 14), true);
        let buf = body(&inline_only, true);
        let preamble = preamble_of(&inline_only, true);
        let high = Preamble {
            count_or_min: 50,
            flags: preamble.flags | REBUILD_CUR_MIN_FLAG,
            ..preamble
        };
        let err = HllArray::read_body(&high, &mut SketchSlice::new(&buf), true).unwrap_err();
        assert_eq!(err.message(), "bucket value 64 exceeds 63");

        // a non-stale image must name the true minimum
        let wrong_min = Preamble {
            count_or_min: 1,
            ..preamble
        };
        assert!(HllArray::read_body(&wrong_min, &mut SketchSlice::new(&buf), true).is_err());
    }
}
