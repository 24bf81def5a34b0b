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


//! Mode transitions and the coupon-mode halves of the binary layout.

use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::common::NumStdDev;
use crate::error::Error;
use crate::hll::CurMode;
use crate::hll::HllType;
use crate::hll::array::HllArray;
use crate::hll::container::COUPON_EMPTY;
use crate::hll::container::Container;
use crate::hll::hash_set::CouponHashSet;
use crate::hll::hash_set::LG_INIT_SET_SIZE;
use crate::hll::list::CouponList;
use crate::hll::list::LG_INIT_LIST_SIZE;
use crate::hll::serialization::COMPACT_FLAG;
use crate::hll::serialization::COUPON_BYTES;
use crate::hll::serialization::EMPTY_FLAG;
use crate::hll::serialization::LIST_HEADER_BYTES;
use crate::hll::serialization::LIST_LG_ARR;
use crate::hll::serialization::OUT_OF_ORDER_FLAG;
use crate::hll::serialization::Preamble;
use crate::hll::serialization::SET_HEADER_BYTES;
use crate::hll::serialization::make_error;

/// Below this `lg_config_k` a full LIST goes straight to HLL.
const LG_MIN_K_FOR_SET: u8 = 8;

#[derive(Debug, Clone)]
pub(super) enum Mode {
    List { list: CouponList, hll_type: HllType },
    Set { set: CouponHashSet, hll_type: HllType },
    Hll(HllArray),
}

impl Mode {
    pub fn new(hll_type: HllType) -> Self {
        Mode::List {
            list: CouponList::default(),
            hll_type,
        }
    }

    pub fn cur_mode(&self) -> CurMode {
        match self {
            Mode::List { .. } => CurMode::List,
            Mode::Set { .. } => CurMode::Set,
            Mode::Hll(_) => CurMode::Hll,
        }
    }

    pub fn hll_type(&self) -> HllType {
        match self {
            Mode::List { hll_type, .. } | Mode::Set { hll_type, .. } => *hll_type,
            Mode::Hll(array) => array.hll_type(),
        }
    }

    /// The coupons of a LIST or SET sketch.
    pub fn coupons(&self) -> Option<&Container> {
        match self {
            Mode::List { list, .. } => Some(list.container()),
            Mode::Set { set, .. } => Some(set.container()),
            Mode::Hll(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coupons().is_some_and(Container::is_empty)
    }

    /// Applies one coupon, promoting when the current representation fills up.
    pub fn update(&mut self, lg_config_k: u8, coupon: u32, track_hip: bool) {
        match self {
            Mode::List { list, hll_type } => {
                if !list.update(coupon) || !list.is_full() {
                    return;
                }
                *self = if lg_config_k < LG_MIN_K_FOR_SET {
                    Mode::Hll(promote_to_hll(lg_config_k, *hll_type, list.container()))
                } else {
                    let mut set = CouponHashSet::new(LG_INIT_SET_SIZE);
                    for c in list.container().iter() {
                        set.update(c);
                    }
                    Mode::Set {
                        set,
                        hll_type: *hll_type,
                    }
                };
            }
            Mode::Set { set, hll_type } => {
                if !set.update(coupon) || !set.needs_resize() {
                    return;
                }
                if set.container().lg_size() + 3 >= lg_config_k {
                    *self = Mode::Hll(promote_to_hll(lg_config_k, *hll_type, set.container()));
                } else {
                    *set = set.grown();
                }
            }
            Mode::Hll(array) => array.update(coupon, track_hip),
        }
    }

    pub fn estimate(&self, out_of_order: bool) -> f64 {
        match self {
            Mode::List { list, .. } => list.container().estimate(),
            Mode::Set { set, .. } => set.container().estimate(),
            Mode::Hll(array) => array.estimate(out_of_order),
        }
    }

    pub fn composite_estimate(&self) -> f64 {
        match self {
            Mode::List { list, .. } => list.container().estimate(),
            Mode::Set { set, .. } => set.container().estimate(),
            Mode::Hll(array) => array.composite_estimate(),
        }
    }

    pub fn lower_bound(&self, out_of_order: bool, num_std_dev: NumStdDev) -> f64 {
        match self {
            Mode::List { list, .. } => list.container().lower_bound(num_std_dev),
            Mode::Set { set, .. } => set.container().lower_bound(num_std_dev),
            Mode::Hll(array) => array.lower_bound(out_of_order, num_std_dev),
        }
    }

    pub fn upper_bound(&self, out_of_order: bool, num_std_dev: NumStdDev) -> f64 {
        match self {
            Mode::List { list, .. } => list.container().upper_bound(num_std_dev),
            Mode::Set { set, .. } => set.container().upper_bound(num_std_dev),
            Mode::Hll(array) => array.upper_bound(out_of_order, num_std_dev),
        }
    }

    /// The same content with a different target type. Coupon modes only relabel.
    pub fn copy_as(&self, hll_type: HllType) -> Mode {
        match self {
            Mode::List { list, .. } => Mode::List {
                list: list.clone(),
                hll_type,
            },
            Mode::Set { set, .. } => Mode::Set {
                set: set.clone(),
                hll_type,
            },
            Mode::Hll(array) => Mode::Hll(array.copy_as(hll_type)),
        }
    }

    pub fn serialized_bytes(&self, compact: bool) -> usize {
        match (self, compact) {
            (Mode::List { list, .. }, true) => {
                LIST_HEADER_BYTES + COUPON_BYTES * list.container().len() as usize
            }
            (Mode::List { list, .. }, false) => {
                LIST_HEADER_BYTES + COUPON_BYTES * list.container().capacity() as usize
            }
            (Mode::Set { set, .. }, true) => {
                SET_HEADER_BYTES + COUPON_BYTES * set.container().len() as usize
            }
            (Mode::Set { set, .. }, false) => {
                SET_HEADER_BYTES + COUPON_BYTES * set.container().capacity() as usize
            }
            (Mode::Hll(array), _) => array.serialized_bytes(compact),
        }
    }

    pub fn preamble(&self, lg_config_k: u8, compact: bool, out_of_order: bool) -> Preamble {
        let mut flags = 0;
        if compact {
            flags |= COMPACT_FLAG;
        }
        if out_of_order {
            flags |= OUT_OF_ORDER_FLAG;
        }
        let (lg_arr, count_or_min) = match self {
            Mode::List { list, .. } => {
                let count = list.container().len();
                if count == 0 {
                    flags |= EMPTY_FLAG;
                }
                (LIST_LG_ARR, count as u8)
            }
            Mode::Set { set, .. } => (set.container().lg_size(), 0),
            Mode::Hll(array) => {
                flags |= array.flags();
                (array.lg_arr(), array.cur_min())
            }
        };
        Preamble {
            lg_config_k,
            lg_arr,
            flags,
            count_or_min,
            cur_mode: self.cur_mode(),
            hll_type: self.hll_type(),
        }
    }

    pub fn write_body(&self, bytes: &mut SketchBytes, compact: bool) {
        match self {
            Mode::List { list, .. } => {
                let container = list.container();
                if compact {
                    container.iter().for_each(|c| bytes.write_u32_le(c));
                } else {
                    container.table().iter().for_each(|&c| bytes.write_u32_le(c));
                }
            }
            Mode::Set { set, .. } => {
                let container = set.container();
                bytes.write_u32_le(container.len());
                if compact {
                    container.sorted().into_iter().for_each(|c| bytes.write_u32_le(c));
                } else {
                    container.table().iter().for_each(|&c| bytes.write_u32_le(c));
                }
            }
            Mode::Hll(array) => array.write_body(bytes, compact),
        }
    }

    /// Reads the body that follows `preamble`.
    pub fn read_body(preamble: &Preamble, cursor: &mut SketchSlice) -> Result<Mode, Error> {
        let compact = preamble.has_flag(COMPACT_FLAG);
        if preamble.has_flag(EMPTY_FLAG) && preamble.cur_mode != CurMode::List {
            return Err(Error::invalid_data(format!(
                "empty flag set on a {:?} mode sketch",
                preamble.cur_mode
            )));
        }
        match preamble.cur_mode {
            CurMode::List => read_list(preamble, cursor, compact),
            CurMode::Set => read_set(preamble, cursor, compact),
            CurMode::Hll => Ok(Mode::Hll(HllArray::read_body(preamble, cursor, compact)?)),
        }
    }
}

/// Replays coupons into a fresh array and seeds the HIP accumulator with their estimate.
fn promote_to_hll(lg_config_k: u8, hll_type: HllType, coupons: &Container) -> HllArray {
    let mut array = HllArray::new(lg_config_k, hll_type);
    for coupon in coupons.iter() {
        array.update(coupon, false);
    }
    array.set_hip_accum(coupons.estimate());
    array
}

fn read_coupons(cursor: &mut SketchSlice, n: usize, tag: &'static str) -> Result<Box<[u32]>, Error> {
    if cursor.remaining() < COUPON_BYTES * n {
        return Err(Error::insufficient_data(tag));
    }
    let mut coupons = vec![COUPON_EMPTY; n].into_boxed_slice();
    for coupon in coupons.iter_mut() {
        *coupon = cursor.read_u32_le().map_err(make_error(tag))?;
    }
    Ok(coupons)
}

fn read_list(preamble: &Preamble, cursor: &mut SketchSlice, compact: bool) -> Result<Mode, Error> {
    let count = preamble.count_or_min as usize;
    let capacity = 1usize << LG_INIT_LIST_SIZE;
    if count >= capacity {
        return Err(Error::invalid_data(format!(
            "LIST mode holds at most {} coupons, got {count}",
            capacity - 1
        )));
    }
    if preamble.has_flag(EMPTY_FLAG) && count != 0 {
        return Err(Error::invalid_data(format!(
            "empty flag set but list count is {count}"
        )));
    }

    let coupons = if compact {
        read_coupons(cursor, count, "list_coupons")?
    } else {
        if preamble.lg_arr != LIST_LG_ARR {
            return Err(Error::invalid_data(format!(
                "LIST lg_arr must be {LIST_LG_ARR}, got {}",
                preamble.lg_arr
            )));
        }
        let table = read_coupons(cursor, capacity, "list_coupons")?;
        if table[count..].iter().any(|&c| c != COUPON_EMPTY) {
            return Err(Error::invalid_data("coupons past the list count"));
        }
        table
    };

    let mut list = CouponList::default();
    for (index, &coupon) in coupons[..count].iter().enumerate() {
        if coupon == COUPON_EMPTY {
            return Err(Error::invalid_data("empty coupon in list").with_context("index", index));
        }
        if !list.update(coupon) {
            return Err(Error::invalid_data("duplicate coupon in list").with_context("index", index));
        }
    }
    Ok(Mode::List {
        list,
        hll_type: preamble.hll_type,
    })
}

fn read_set(preamble: &Preamble, cursor: &mut SketchSlice, compact: bool) -> Result<Mode, Error> {
    let lg_config_k = preamble.lg_config_k;
    if lg_config_k < LG_MIN_K_FOR_SET {
        return Err(Error::invalid_data(format!(
            "SET mode requires lg_config_k >= {LG_MIN_K_FOR_SET}, got {lg_config_k}"
        )));
    }
    let lg_max_set = lg_config_k - 3;
    let count = cursor.read_u32_le().map_err(make_error("set_count"))?;

    let set = if compact {
        let mut lg_size = LG_INIT_SET_SIZE;
        while 4 * u64::from(count) > 3 * (1u64 << lg_size) {
            lg_size += 1;
        }
        // keep the writer's table size when it is usable
        if (lg_size..=lg_max_set).contains(&preamble.lg_arr) {
            lg_size = preamble.lg_arr;
        }
        if lg_size > lg_max_set {
            return Err(Error::invalid_data(format!(
                "{count} coupons exceed the SET capacity for lg_config_k {lg_config_k}"
            )));
        }
        let coupons = read_coupons(cursor, count as usize, "set_coupons")?;
        let mut set = CouponHashSet::new(lg_size);
        for (index, &coupon) in coupons.iter().enumerate() {
            if coupon == COUPON_EMPTY {
                return Err(Error::invalid_data("empty coupon in set").with_context("index", index));
            }
            if !set.update(coupon) {
                return Err(
                    Error::invalid_data("duplicate coupon in set").with_context("index", index)
                );
            }
        }
        set
    } else {
        let lg_size = preamble.lg_arr;
        if !(LG_INIT_SET_SIZE..=lg_max_set).contains(&lg_size) {
            return Err(Error::invalid_data(format!(
                "SET lg_arr {lg_size} out of range [{LG_INIT_SET_SIZE}, {lg_max_set}]"
            )));
        }
        let table = read_coupons(cursor, 1 << lg_size, "set_coupons")?;
        let len = table.iter().filter(|&&c| c != COUPON_EMPTY).count() as u32;
        if len != count {
            return Err(Error::invalid_data(format!(
                "SET table holds {len} coupons, header says {count}"
            )));
        }
        let set = CouponHashSet::from_container(Container::from_table(lg_size, table, len));
        if set.needs_resize() {
            return Err(Error::invalid_data("SET table is over its load factor"));
        }
        if !set.container().iter().all(|c| set.contains(c)) {
            return Err(Error::invalid_data("SET table entries are not reachable"));
        }
        set
    };

    Ok(Mode::Set {
        set,
        hll_type: preamble.hll_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hll::pack_coupon;

    fn coupon(i: u32) -> u32 {
        pack_coupon(i.wrapping_mul(0x9E37_79B9) >> 6, (i % 20 + 1) as u8)
    }

    #[test]
    fn test_small_k_skips_set() {
        let mut mode = Mode::new(HllType::Hll4);
        for i in 0..7 {
            mode.update(4, coupon(i), true);
        }
        assert_eq!(mode.cur_mode(), CurMode::List);
        mode.update(4, coupon(7), true);
        assert_eq!(mode.cur_mode(), CurMode::Hll);
        assert_eq!(mode.hll_type(), HllType::Hll4);
    }

    #[test]
    fn test_list_set_hll_sequence() {
        let lg_config_k = 10;
        let mut mode = Mode::new(HllType::Hll8);
        let mut seen = vec![];
        for i in 0.. {
            mode.update(lg_config_k, coupon(i), true);
            if seen.last() != Some(&mode.cur_mode()) {
                seen.push(mode.cur_mode());
            }
            if mode.cur_mode() == CurMode::Hll {
                break;
            }
            if let Mode::Set { set, .. } = &mode {
                // never promoted while under the load factor of the largest table
                assert!(set.container().lg_size() <= lg_config_k - 3);
            }
        }
        assert_eq!(seen, vec![CurMode::List, CurMode::Set, CurMode::Hll]);
    }

    #[test]
    fn test_promotion_seeds_hip_with_coupon_estimate() {
        let mut mode = Mode::new(HllType::Hll6);
        for i in 0..7 {
            mode.update(6, coupon(i), true);
        }
        let before = mode.estimate(false);
        mode.update(6, coupon(7), true);
        let Mode::Hll(array) = &mode else {
            panic!("expected HLL mode");
        };
        assert!(array.hip_accum() > before);
        assert!((array.hip_accum() - 8.0).abs() < 0.01);
    }

    #[test]
    fn test_duplicates_do_not_promote() {
        let mut mode = Mode::new(HllType::Hll8);
        for _ in 0..100 {
            mode.update(12, coupon(1), true);
        }
        assert_eq!(mode.cur_mode(), CurMode::List);
        assert_eq!(mode.estimate(false), 1.0);
    }
}
