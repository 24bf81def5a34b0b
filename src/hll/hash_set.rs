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


//! The SET mode: an open-addressing hash table of coupons.
//!
//! Coupons are already hash derived, so the low bits pick the home slot and the bits above
//! them pick an odd stride, which visits every slot of a power-of-two table.

use crate::hll::KEY_MASK_26;
use crate::hll::RESIZE_DENOMINATOR;
use crate::hll::RESIZE_NUMERATOR;
use crate::hll::container::COUPON_EMPTY;
use crate::hll::container::Container;

/// `lg` of the table size right after promotion from LIST.
pub(super) const LG_INIT_SET_SIZE: u8 = 5;

#[derive(Debug, Clone)]
pub(super) struct CouponHashSet {
    container: Container,
}

enum Probe {
    Found(usize),
    Vacant(usize),
}

impl Default for CouponHashSet {
    fn default() -> Self {
        Self::new(LG_INIT_SET_SIZE)
    }
}

impl CouponHashSet {
    pub fn new(lg_size: u8) -> Self {
        Self {
            container: Container::new(lg_size),
        }
    }

    pub fn from_container(container: Container) -> Self {
        Self { container }
    }

    /// Inserts `coupon` unless present. Returns whether it was added.
    pub fn update(&mut self, coupon: u32) -> bool {
        match self.find(coupon) {
            Probe::Found(_) => false,
            Probe::Vacant(index) => {
                self.container.table_mut()[index] = coupon;
                self.container.increment_len();
                true
            }
        }
    }

    pub fn contains(&self, coupon: u32) -> bool {
        matches!(self.find(coupon), Probe::Found(_))
    }

    /// Whether the load factor passed 3/4 and the table must grow or promote.
    pub fn needs_resize(&self) -> bool {
        RESIZE_DENOMINATOR * self.container.len() > RESIZE_NUMERATOR * self.container.capacity()
    }

    /// Returns a copy with twice the capacity.
    pub fn grown(&self) -> Self {
        let mut grown = Self::new(self.container.lg_size() + 1);
        for coupon in self.container.iter() {
            grown.update(coupon);
        }
        grown
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    fn find(&self, coupon: u32) -> Probe {
        let lg_size = self.container.lg_size();
        let table = self.container.table();
        let mask = (1u32 << lg_size) - 1;
        let stride = ((coupon & KEY_MASK_26) >> lg_size) | 1;

        let start = coupon & mask;
        let mut probe = start;
        loop {
            let entry = table[probe as usize];
            if entry == COUPON_EMPTY {
                return Probe::Vacant(probe as usize);
            }
            if entry == coupon {
                return Probe::Found(probe as usize);
            }
            probe = (probe + stride) & mask;
            if probe == start {
                // the load factor check keeps at least a quarter of the table free
                unreachable!("coupon hash set has no empty slots");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hll::pack_coupon;

    #[test]
    fn test_insert_and_contains() {
        let mut set = CouponHashSet::default();
        // same home slot, different strides
        let a = pack_coupon(3, 1);
        let b = pack_coupon(3 + 32, 1);
        let c = pack_coupon(3 + 64, 2);
        assert!(set.update(a));
        assert!(set.update(b));
        assert!(set.update(c));
        assert!(!set.update(b));
        assert!(set.contains(a) && set.contains(b) && set.contains(c));
        assert!(!set.contains(pack_coupon(4, 1)));
        assert_eq!(set.container().len(), 3);
    }

    #[test]
    fn test_resize_threshold_and_growth() {
        let mut set = CouponHashSet::default();
        for slot in 0..24 {
            set.update(pack_coupon(slot * 7, 1));
            assert!(!set.needs_resize(), "slot {slot}");
        }
        set.update(pack_coupon(1000, 1));
        assert!(set.needs_resize());

        let grown = set.grown();
        assert_eq!(grown.container().lg_size(), 6);
        assert_eq!(grown.container().len(), 25);
        assert!(!grown.needs_resize());
        assert!(set.container().iter().all(|c| grown.contains(c)));
    }
}
