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


//! Running statistics over the HLL bucket array.
//!
//! `kxq0 + kxq1` is the sum of `2^-v` over all bucket values `v`. The sum is split at
//! `v = 32` so tiny contributions from large values are not lost against the dominant ones.

/// Statistics derived from the bucket array.
///
/// Maintained incrementally on every bucket increase, or recomputed from scratch by
/// [`Accumulators::scan`] after bulk changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Accumulators {
    /// Offset below which no bucket value lies. Always 0 for HLL6 and HLL8.
    pub cur_min: u8,
    /// Buckets whose value equals `cur_min`.
    pub num_at_cur_min: u32,
    pub kxq0: f64,
    pub kxq1: f64,
}

impl Accumulators {
    /// Statistics of an all-zero array of `2^lg_k` buckets.
    pub fn new(lg_k: u8) -> Self {
        let k = 1u32 << lg_k;
        Self {
            cur_min: 0,
            num_at_cur_min: k,
            kxq0: k as f64,
            kxq1: 0.0,
        }
    }

    /// Recomputes everything from the bucket values.
    ///
    /// With `track_min` the minimum is the true minimum value; otherwise it stays at 0 and
    /// `num_at_cur_min` counts the zero buckets.
    pub fn scan(values: impl Iterator<Item = u8>, track_min: bool) -> Self {
        let mut acc = Self {
            cur_min: if track_min { u8::MAX } else { 0 },
            num_at_cur_min: 0,
            kxq0: 0.0,
            kxq1: 0.0,
        };
        for value in values {
            acc.add(value);
            if value == acc.cur_min {
                acc.num_at_cur_min += 1;
            } else if track_min && value < acc.cur_min {
                acc.cur_min = value;
                acc.num_at_cur_min = 1;
            }
        }
        if acc.cur_min == u8::MAX {
            acc.cur_min = 0;
        }
        acc
    }

    pub fn kxq_sum(&self) -> f64 {
        self.kxq0 + self.kxq1
    }

    /// Moves one bucket's contribution from `old_value` to `new_value`.
    pub fn replace(&mut self, old_value: u8, new_value: u8) {
        self.remove(old_value);
        self.add(new_value);
    }

    fn add(&mut self, value: u8) {
        if value < 32 {
            self.kxq0 += inv_pow2(value);
        } else {
            self.kxq1 += inv_pow2(value);
        }
    }

    fn remove(&mut self, value: u8) {
        if value < 32 {
            self.kxq0 -= inv_pow2(value);
        } else {
            self.kxq1 -= inv_pow2(value);
        }
    }
}

/// Returns `2^-value`.
#[inline]
fn inv_pow2(value: u8) -> f64 {
    f64::from_bits((1023 - u64::from(value)) << 52)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inv_pow2() {
        assert_eq!(inv_pow2(0), 1.0);
        assert_eq!(inv_pow2(1), 0.5);
        assert_eq!(inv_pow2(10), 1.0 / 1024.0);
        assert_eq!(inv_pow2(63), 2f64.powi(-63));
    }

    #[test]
    fn test_incremental_matches_scan() {
        let mut values = vec![0u8; 16];
        let mut acc = Accumulators::new(4);
        for (slot, value) in [(0, 3), (5, 40), (0, 7), (9, 1)] {
            acc.replace(values[slot], value);
            values[slot] = value;
        }
        let scanned = Accumulators::scan(values.iter().copied(), false);
        assert_eq!(scanned.cur_min, 0);
        assert_eq!(scanned.num_at_cur_min, 13);
        assert_eq!(acc.kxq0, scanned.kxq0);
        assert_eq!(acc.kxq1, scanned.kxq1);
        assert!(acc.kxq1 > 0.0 && acc.kxq1 < 1e-11);
    }

    #[test]
    fn test_scan_tracks_min() {
        let values = [3u8, 5, 3, 9];
        let acc = Accumulators::scan(values.iter().copied(), true);
        assert_eq!((acc.cur_min, acc.num_at_cur_min), (3, 2));
        let pinned = Accumulators::scan(values.iter().copied(), false);
        assert_eq!((pinned.cur_min, pinned.num_at_cur_min), (0, 0));
    }
}
