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


//! Coupon storage shared by the LIST and SET modes, and the coupon estimator.

use crate::common::NumStdDev;
use crate::hll::COUPON_RSE;
use crate::hll::coupon_mapping::X_ARR;
use crate::hll::coupon_mapping::Y_ARR;
use crate::hll::cubic_interpolation::using_x_and_y_tables;

/// Marks an unused entry. Real coupons always carry a non-zero value.
pub(super) const COUPON_EMPTY: u32 = 0;

/// A power-of-two array of coupons plus the number of occupied entries.
#[derive(Debug, Clone)]
pub(super) struct Container {
    lg_size: u8,
    coupons: Box<[u32]>,
    len: u32,
}

impl Container {
    pub fn new(lg_size: u8) -> Self {
        Self {
            lg_size,
            coupons: vec![COUPON_EMPTY; 1 << lg_size].into_boxed_slice(),
            len: 0,
        }
    }

    /// Wraps a table read back from bytes. `len` must match the occupied entries.
    pub fn from_table(lg_size: u8, coupons: Box<[u32]>, len: u32) -> Self {
        debug_assert_eq!(coupons.len(), 1 << lg_size);
        Self {
            lg_size,
            coupons,
            len,
        }
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn lg_size(&self) -> u8 {
        self.lg_size
    }

    pub fn capacity(&self) -> u32 {
        self.coupons.len() as u32
    }

    /// Every entry, including empty ones, in storage order.
    pub fn table(&self) -> &[u32] {
        &self.coupons
    }

    pub fn table_mut(&mut self) -> &mut [u32] {
        &mut self.coupons
    }

    pub fn increment_len(&mut self) {
        self.len += 1;
    }

    /// Occupied entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.coupons.iter().copied().filter(|&c| c != COUPON_EMPTY)
    }

    /// Occupied entries in ascending order, as written by the compact serializer.
    pub fn sorted(&self) -> Vec<u32> {
        let mut coupons: Vec<u32> = self.iter().collect();
        coupons.sort_unstable();
        coupons
    }

    pub fn estimate(&self) -> f64 {
        let n = self.len as f64;
        n.max(mapped_cardinality(n))
    }

    pub fn lower_bound(&self, num_std_dev: NumStdDev) -> f64 {
        let n = self.len as f64;
        let bound = mapped_cardinality(n) / (1.0 + num_std_dev.as_f64() * COUPON_RSE);
        n.max(bound)
    }

    pub fn upper_bound(&self, num_std_dev: NumStdDev) -> f64 {
        let n = self.len as f64;
        let bound = mapped_cardinality(n) / (1.0 - num_std_dev.as_f64() * COUPON_RSE);
        n.max(bound)
    }
}

fn mapped_cardinality(coupon_count: f64) -> f64 {
    using_x_and_y_tables(&X_ARR, &Y_ARR, coupon_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_container() {
        let container = Container::new(3);
        assert!(container.is_empty());
        assert_eq!(container.capacity(), 8);
        assert_eq!(container.estimate(), 0.0);
        assert_eq!(container.lower_bound(NumStdDev::Three), 0.0);
        assert_eq!(container.upper_bound(NumStdDev::Three), 0.0);
    }

    #[test]
    fn test_small_counts_are_nearly_exact() {
        let mut table = vec![COUPON_EMPTY; 32].into_boxed_slice();
        for (i, entry) in table.iter_mut().take(20).enumerate() {
            *entry = (1 << 26) | (i as u32 * 3 + 1);
        }
        let container = Container::from_table(5, table, 20);
        let estimate = container.estimate();
        assert!((estimate - 20.0).abs() < 1e-6);
        assert!(container.lower_bound(NumStdDev::Two) >= 20.0);
        assert!(container.upper_bound(NumStdDev::Two) > estimate);
        assert_eq!(container.iter().count(), 20);
        let sorted = container.sorted();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    }
}
