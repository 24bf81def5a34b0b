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


//! The LIST mode: a handful of coupons kept in arrival order.

use crate::hll::container::COUPON_EMPTY;
use crate::hll::container::Container;

/// `lg` of the list capacity; the list holds 8 coupons before promotion.
pub(super) const LG_INIT_LIST_SIZE: u8 = 3;

/// Unsorted, duplicate-free coupon list.
#[derive(Debug, Clone)]
pub(super) struct CouponList {
    container: Container,
}

impl Default for CouponList {
    fn default() -> Self {
        Self {
            container: Container::new(LG_INIT_LIST_SIZE),
        }
    }
}

impl CouponList {
    /// Appends `coupon` unless it is already present. Returns whether it was added.
    ///
    /// The list must not be full; the mode controller promotes it as soon as it fills.
    pub fn update(&mut self, coupon: u32) -> bool {
        let mut inserted = false;
        for entry in self.container.table_mut().iter_mut() {
            if *entry == coupon {
                break;
            }
            if *entry == COUPON_EMPTY {
                *entry = coupon;
                inserted = true;
                break;
            }
        }
        if inserted {
            self.container.increment_len();
        }
        inserted
    }

    pub fn is_full(&self) -> bool {
        self.container.len() == self.container.capacity()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hll::pack_coupon;

    #[test]
    fn test_deduplicates_and_fills() {
        let mut list = CouponList::default();
        assert!(list.update(pack_coupon(1, 1)));
        assert!(!list.update(pack_coupon(1, 1)));
        // same slot with a different value is a different coupon
        assert!(list.update(pack_coupon(1, 2)));
        for slot in 2..8 {
            assert!(!list.is_full());
            assert!(list.update(pack_coupon(slot, 1)));
        }
        assert!(list.is_full());
        assert_eq!(list.container().len(), 8);
        assert_eq!(list.container().iter().next(), Some(pack_coupon(1, 1)));
    }
}
