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


//! Harmonic numbers for the HLL bitmap (linear counting) estimator.

const NUM_EXACT: usize = 25;
const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// H(n) for n in 0..25, computed at compile time.
static EXACT_HARMONIC: [f64; NUM_EXACT] = {
    let mut table = [0.0; NUM_EXACT];
    let mut n = 1;
    while n < NUM_EXACT {
        table[n] = table[n - 1] + 1.0 / n as f64;
        n += 1;
    }
    table
};

/// Returns H(n) = 1 + 1/2 + ... + 1/n.
///
/// Small n use an exact table; larger n use the asymptotic expansion.
pub(super) fn harmonic_number(n: u64) -> f64 {
    if (n as usize) < NUM_EXACT {
        return EXACT_HARMONIC[n as usize];
    }

    let x = n as f64;
    let inv_sq = 1.0 / (x * x);
    let series = inv_sq * (1.0 / 12.0 - inv_sq * (1.0 / 120.0 - inv_sq * (1.0 / 252.0)));
    x.ln() + EULER_MASCHERONI + 1.0 / (2.0 * x) - series
}

/// Estimates distinct items thrown into `k` buckets from the number of buckets hit.
///
/// Expects `num_hit < k`; the all-hit case is handled by the caller.
pub(super) fn bitmap_estimate(k: u32, num_hit: u32) -> f64 {
    debug_assert!(num_hit < k);
    let k = u64::from(k);
    let num_unhit = k - u64::from(num_hit);
    k as f64 * (harmonic_number(k) - harmonic_number(num_unhit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct(n: u64) -> f64 {
        (1..=n).map(|i| 1.0 / i as f64).sum()
    }

    #[test]
    fn test_exact_table() {
        assert_eq!(harmonic_number(0), 0.0);
        assert_eq!(harmonic_number(1), 1.0);
        assert!((harmonic_number(3) - 11.0 / 6.0).abs() < 1e-12);
        assert!((harmonic_number(24) - direct(24)).abs() < 1e-12);
    }

    #[test]
    fn test_asymptotic_matches_direct_sum() {
        for n in [25, 26, 100, 1000, 65536] {
            assert!((harmonic_number(n) - direct(n)).abs() < 1e-9, "n={n}");
        }
    }

    #[test]
    fn test_bitmap_estimate() {
        assert_eq!(bitmap_estimate(1024, 0), 0.0);
        // one hit bucket means one item
        assert!((bitmap_estimate(1024, 1) - 1.0).abs() < 1e-9);
        let half = bitmap_estimate(1024, 512);
        // k * ln(2) for half the buckets hit
        assert!((half - 1024.0 * 2f64.ln()).abs() < 1.0, "{half}");
    }
}
