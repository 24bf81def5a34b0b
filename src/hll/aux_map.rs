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


//! Exception table for HLL4 buckets whose value does not fit in a nibble.
//!
//! Entries are coupons `value << 26 | slot` in an open-addressing table probed the same way
//! as the coupon hash set, keyed by slot alone.

use crate::hll::RESIZE_DENOMINATOR;
use crate::hll::RESIZE_NUMERATOR;
use crate::hll::get_slot;
use crate::hll::get_value;
use crate::hll::pack_coupon;

const ENTRY_EMPTY: u32 = 0;

/// Initial `lg` size of the aux table, indexed by `lg_config_k`.
const LG_AUX_ARR_INTS: [u8; 27] = [
    0, 2, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
];

pub(super) fn initial_lg_aux_size(lg_config_k: u8) -> u8 {
    LG_AUX_ARR_INTS[lg_config_k as usize]
}

/// Largest `lg` size the aux table reaches: one entry per bucket still stays under the
/// 3/4 load factor at `2 * k`.
pub(super) fn max_lg_aux_size(lg_config_k: u8) -> u8 {
    lg_config_k + 1
}

#[derive(Debug, Clone)]
pub(super) struct AuxMap {
    lg_size: u8,
    lg_config_k: u8,
    entries: Box<[u32]>,
    count: u32,
}

enum Probe {
    Found(usize),
    Vacant(usize),
}

impl AuxMap {
    pub fn new(lg_config_k: u8) -> Self {
        Self::with_lg_size(lg_config_k, initial_lg_aux_size(lg_config_k))
    }

    pub fn with_lg_size(lg_config_k: u8, lg_size: u8) -> Self {
        Self {
            lg_size,
            lg_config_k,
            entries: vec![ENTRY_EMPTY; 1 << lg_size].into_boxed_slice(),
            count: 0,
        }
    }

    /// Adopts a table read back from bytes.
    ///
    /// Returns `None` unless every entry can be found again by probing from its slot.
    pub fn from_table(lg_config_k: u8, lg_size: u8, entries: Box<[u32]>) -> Option<Self> {
        debug_assert_eq!(entries.len(), 1 << lg_size);
        let count = entries.iter().filter(|&&e| e != ENTRY_EMPTY).count() as u32;
        let map = Self {
            lg_size,
            lg_config_k,
            entries,
            count,
        };
        if count == 1 << lg_size {
            return None;
        }
        let reachable = map.iter().all(|(slot, value)| map.get(slot) == Some(value));
        reachable.then_some(map)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn lg_size(&self) -> u8 {
        self.lg_size
    }

    /// The raw table, as written by the updatable serializer.
    pub fn table(&self) -> &[u32] {
        &self.entries
    }

    pub fn get(&self, slot: u32) -> Option<u8> {
        match self.find(slot) {
            Probe::Found(index) => Some(get_value(self.entries[index])),
            Probe::Vacant(_) => None,
        }
    }

    /// Adds a new slot. Returns `false`, leaving the map unchanged, if the slot is present.
    pub fn insert(&mut self, slot: u32, value: u8) -> bool {
        match self.find(slot) {
            Probe::Found(_) => false,
            Probe::Vacant(index) => {
                self.entries[index] = pack_coupon(slot, value);
                self.count += 1;
                if RESIZE_DENOMINATOR * self.count > RESIZE_NUMERATOR * (1 << self.lg_size) {
                    self.grow();
                }
                true
            }
        }
    }

    /// Overwrites an existing slot. Returns `false` if the slot is absent.
    pub fn replace(&mut self, slot: u32, value: u8) -> bool {
        match self.find(slot) {
            Probe::Found(index) => {
                self.entries[index] = pack_coupon(slot, value);
                true
            }
            Probe::Vacant(_) => false,
        }
    }

    /// `(slot, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        let k_mask = (1u32 << self.lg_config_k) - 1;
        self.entries
            .iter()
            .filter(|&&e| e != ENTRY_EMPTY)
            .map(move |&e| (get_slot(e) & k_mask, get_value(e)))
    }

    fn find(&self, slot: u32) -> Probe {
        let mask = (1u32 << self.lg_size) - 1;
        let k_mask = (1u32 << self.lg_config_k) - 1;
        let stride = (slot >> self.lg_size) | 1;

        let start = slot & mask;
        let mut probe = start;
        loop {
            let entry = self.entries[probe as usize];
            if entry == ENTRY_EMPTY {
                return Probe::Vacant(probe as usize);
            }
            if get_slot(entry) & k_mask == slot {
                return Probe::Found(probe as usize);
            }
            probe = (probe + stride) & mask;
            if probe == start {
                unreachable!("aux map has no empty slots");
            }
        }
    }

    fn grow(&mut self) {
        let bigger = Self::with_lg_size(self.lg_config_k, self.lg_size + 1);
        let old = std::mem::replace(self, bigger);
        for (slot, value) in old.iter() {
            self.insert(slot, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_replace() {
        let mut map = AuxMap::new(10);
        assert!(map.insert(10, 20));
        assert!(map.insert(50, 30));
        assert!(!map.insert(10, 21));
        assert_eq!(map.get(10), Some(20));
        assert_eq!(map.get(50), Some(30));
        assert_eq!(map.get(999), None);

        assert!(map.replace(50, 35));
        assert!(!map.replace(999, 35));
        assert_eq!(map.get(50), Some(35));
        assert_eq!(map.count(), 2);
    }

    #[test]
    fn test_grows_past_three_quarters() {
        let mut map = AuxMap::new(4);
        assert_eq!(map.lg_size(), 2);
        for slot in 0..3 {
            map.insert(slot, 16);
        }
        assert_eq!(map.lg_size(), 2);
        map.insert(3, 17);
        assert_eq!(map.lg_size(), 3);
        for slot in 0..4 {
            assert!(map.get(slot).is_some());
        }
    }

    #[test]
    fn test_from_table_rejects_unreachable_entries() {
        let mut map = AuxMap::new(10);
        map.insert(5, 20);
        map.insert(6, 21);
        let table: Box<[u32]> = map.table().into();
        let restored = AuxMap::from_table(10, map.lg_size(), table.clone()).unwrap();
        assert_eq!(restored.count(), 2);
        assert_eq!(restored.get(6), Some(21));

        // entry for slot 5 moved away from its probe sequence
        let mut shuffled = table.to_vec();
        shuffled.rotate_left(1);
        shuffled.rotate_left(1);
        assert!(AuxMap::from_table(10, map.lg_size(), shuffled.into()).is_none());
    }
}
