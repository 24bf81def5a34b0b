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


//! Cardinality estimators and confidence bounds for the HLL mode.

use crate::common::NumStdDev;
use crate::hll::MAX_LG_K;
use crate::hll::MIN_LG_K;
use crate::hll::accumulators::Accumulators;
use crate::hll::composite_interpolation;
use crate::hll::cubic_interpolation::using_x_arr_and_y_stride;
use crate::hll::harmonic_numbers;

/// `sqrt(ln 2)`: RSE factor of the HIP estimator.
const HLL_HIP_RSE_FACTOR: f64 = 0.8325546;
/// `sqrt(3 ln 2 - 1)`: RSE factor of the classic HLL estimator.
const HLL_NON_HIP_RSE_FACTOR: f64 = 1.03896;

/// Classic HLL estimate `alpha(k) * k^2 / sum(2^-v)`.
pub(super) fn raw_estimate(lg_k: u8, kxq_sum: f64) -> f64 {
    let k = (1u32 << lg_k) as f64;
    let correction = match lg_k {
        4 => 0.673,
        5 => 0.697,
        6 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / k),
    };
    correction * k * k / kxq_sum
}

/// Maps a raw estimate through the per-`lg_k` bias table.
///
/// Below the table the result is 0; above it the last point's slope is extended.
pub(super) fn bias_corrected_estimate(lg_k: u8, raw: f64) -> f64 {
    let x_arr = composite_interpolation::get_x_arr(lg_k);
    let last = composite_interpolation::get_x_arr_length() - 1;
    let y_stride = composite_interpolation::get_y_stride(lg_k) as f64;

    if raw < x_arr[0] {
        return 0.0;
    }
    if raw > x_arr[last] {
        let final_y = y_stride * last as f64;
        return raw * (final_y / x_arr[last]);
    }
    using_x_arr_and_y_stride(x_arr, y_stride, raw)
}

/// Linear counting over the buckets that were never hit.
///
/// Only buckets at value 0 are known to be unhit, so once `cur_min > 0` every bucket counts
/// as hit and the log form for a full bitmap is used.
pub(super) fn linear_counting_estimate(lg_k: u8, cur_min: u8, num_at_cur_min: u32) -> f64 {
    let k = 1u32 << lg_k;
    let num_unhit = if cur_min == 0 { num_at_cur_min } else { 0 };
    if num_unhit == 0 {
        return k as f64 * (k as f64 / 0.5).ln();
    }
    harmonic_numbers::bitmap_estimate(k, k - num_unhit)
}

/// The estimate reported by out-of-order sketches.
///
/// Averaging the two candidates before comparing against the crossover point avoids the
/// bias of switching on either one alone.
pub(super) fn composite_estimate(lg_k: u8, acc: &Accumulators) -> f64 {
    let raw = raw_estimate(lg_k, acc.kxq_sum());
    let x_arr = composite_interpolation::get_x_arr(lg_k);
    let last = composite_interpolation::get_x_arr_length() - 1;
    if raw < x_arr[0] {
        return 0.0;
    }

    let adjusted = bias_corrected_estimate(lg_k, raw);
    if raw > x_arr[last] {
        return adjusted;
    }

    let k = (1u32 << lg_k) as f64;
    if adjusted > 3.0 * k {
        return adjusted;
    }

    let linear = linear_counting_estimate(lg_k, acc.cur_min, acc.num_at_cur_min);
    let crossover = match lg_k {
        4 => 0.718,
        5 => 0.672,
        _ => 0.64,
    };
    if (adjusted + linear) / 2.0 > crossover * k {
        adjusted
    } else {
        linear
    }
}

/// Relative error of an HLL-mode bound.
///
/// Lower-bound errors are positive and upper-bound errors negative, so both bounds are
/// `estimate / (1 + rel_err)`. Up to `lg_k = 12` the errors are empirical quantiles; beyond
/// that they follow the asymptotic RSE.
///
/// # Panics
///
/// Panics if `lg_k` is not in `[4, 21]`.
pub fn rel_err(upper_bound: bool, out_of_order: bool, lg_k: u8, num_std_dev: NumStdDev) -> f64 {
    assert!(
        (MIN_LG_K..=MAX_LG_K).contains(&lg_k),
        "lg_k must be in [{MIN_LG_K}, {MAX_LG_K}], got {lg_k}"
    );

    if lg_k > 12 {
        let rse_factor = if out_of_order {
            HLL_NON_HIP_RSE_FACTOR
        } else {
            HLL_HIP_RSE_FACTOR
        };
        let sign = if upper_bound { -1.0 } else { 1.0 };
        let k = (1u32 << lg_k) as f64;
        return sign * num_std_dev.as_f64() * rse_factor / k.sqrt();
    }

    let index = (lg_k - MIN_LG_K) as usize * 3 + (num_std_dev.as_u8() - 1) as usize;
    match (out_of_order, upper_bound) {
        (false, false) => HIP_LB[index],
        (false, true) => HIP_UB[index],
        (true, false) => NON_HIP_LB[index],
        (true, true) => NON_HIP_UB[index],
    }
}

/// Never below the number of buckets known to be non-zero.
pub(super) fn hll_lower_bound(
    lg_k: u8,
    estimate: f64,
    out_of_order: bool,
    acc: &Accumulators,
    num_std_dev: NumStdDev,
) -> f64 {
    let k = 1u32 << lg_k;
    let num_non_zeros = if acc.cur_min == 0 {
        k - acc.num_at_cur_min
    } else {
        k
    };
    let bound = estimate / (1.0 + rel_err(false, out_of_order, lg_k, num_std_dev));
    bound.max(num_non_zeros as f64)
}

pub(super) fn hll_upper_bound(
    lg_k: u8,
    estimate: f64,
    out_of_order: bool,
    num_std_dev: NumStdDev,
) -> f64 {
    estimate / (1.0 + rel_err(true, out_of_order, lg_k, num_std_dev))
}

// Quantiles Q(.84134), Q(.97725), Q(.99865) for the lower bounds and Q(.15866), Q(.02275),
// Q(.00135) for the upper bounds, three entries per lg_k from 4 to 12.

static HIP_LB: [f64; 27] = [
    0.207316195, 0.502865572, 0.882303765, // 4
    0.146981579, 0.335426881, 0.557052, // 5
    0.104026721, 0.227683872, 0.365888317, // 6
    0.073614601, 0.156781585, 0.245740374, // 7
    0.05205248, 0.108783763, 0.168030442, // 8
    0.036770852, 0.075727545, 0.11593785, // 9
    0.025990219, 0.053145536, 0.080772263, // 10
    0.018373987, 0.037266176, 0.056271814, // 11
    0.012936253, 0.02613829, 0.039387631, // 12
];

static HIP_UB: [f64; 27] = [
    -0.207805347, -0.355574279, -0.475535095, // 4
    -0.146988328, -0.262390832, -0.360864026, // 5
    -0.103877775, -0.191503663, -0.269311582, // 6
    -0.073452978, -0.138513438, -0.198487447, // 7
    -0.051982806, -0.099703123, -0.144128618, // 8
    -0.036768609, -0.07138158, -0.104430324, // 9
    -0.025991325, -0.050854296, -0.0748143, // 10
    -0.01834533, -0.036121138, -0.05327616, // 11
    -0.012920332, -0.025572893, -0.037896952, // 12
];

static NON_HIP_LB: [f64; 27] = [
    0.254409839, 0.682266712, 1.304022158, // 4
    0.181817353, 0.443389054, 0.778776219, // 5
    0.129432281, 0.295782195, 0.49252279, // 6
    0.091640655, 0.201175925, 0.323664385, // 7
    0.064858051, 0.138523393, 0.218805328, // 8
    0.045851855, 0.095925072, 0.148635751, // 9
    0.032454144, 0.067009668, 0.102660669, // 10
    0.022921382, 0.046868565, 0.071307398, // 11
    0.016155679, 0.032825719, 0.049677541, // 12
];

static NON_HIP_UB: [f64; 27] = [
    -0.256980172, -0.411905944, -0.52651057, // 4
    -0.182332109, -0.310275547, -0.412660505, // 5
    -0.129314228, -0.230142294, -0.315636197, // 6
    -0.091584836, -0.16834013, -0.236346847, // 7
    -0.06487411, -0.122045231, -0.174112107, // 8
    -0.04591465, -0.08784505, -0.126917615, // 9
    -0.032433119, -0.062897613, -0.091862929, // 10
    -0.022960633, -0.044875401, -0.065736049, // 11
    -0.016186662, -0.031827816, -0.046973459, // 12
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_estimate_correction_factors() {
        assert!((raw_estimate(4, 16.0) - 0.673 * 16.0).abs() < 1e-12);
        assert!((raw_estimate(5, 32.0) - 0.697 * 32.0).abs() < 1e-12);
        assert!((raw_estimate(6, 64.0) - 0.709 * 64.0).abs() < 1e-12);
        let k = 1024.0;
        let alpha = 0.7213 / (1.0 + 1.079 / k);
        assert!((raw_estimate(10, 512.0) - alpha * k * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_array_estimates_zero() {
        for lg_k in 4..=21 {
            let acc = Accumulators::new(lg_k);
            assert_eq!(composite_estimate(lg_k, &acc), 0.0, "lg_k={lg_k}");
        }
    }

    #[test]
    fn test_linear_counting() {
        // nothing hit
        assert_eq!(linear_counting_estimate(10, 0, 1024), 0.0);
        // everything hit
        let full = 1024.0 * (2048f64).ln();
        assert_eq!(linear_counting_estimate(10, 0, 0), full);
        assert_eq!(linear_counting_estimate(10, 2, 17), full);
        let half = linear_counting_estimate(10, 0, 512);
        assert!((half - 1024.0 * 2f64.ln()).abs() < 1.0);
    }

    #[test]
    fn test_bias_corrected_outside_the_table() {
        let x_arr = composite_interpolation::get_x_arr(10);
        assert_eq!(bias_corrected_estimate(10, x_arr[0] * 0.5), 0.0);
        let beyond = bias_corrected_estimate(10, 1e6);
        assert!((beyond / 1e6 - 1.0).abs() < 0.05, "{beyond}");
        let inside = bias_corrected_estimate(10, 2000.0);
        assert!(inside > 1500.0 && inside < 2500.0, "{inside}");
    }

    #[test]
    fn test_composite_uses_linear_counting_when_sparse() {
        let lg_k = 8;
        let mut acc = Accumulators::new(lg_k);
        for _ in 0..50 {
            acc.replace(0, 1);
            acc.num_at_cur_min -= 1;
        }
        let expected = 256.0
            * (harmonic_numbers::harmonic_number(256) - harmonic_numbers::harmonic_number(206));
        let estimate = composite_estimate(lg_k, &acc);
        assert!((estimate - expected).abs() < 1e-6, "{estimate} vs {expected}");
    }

    #[test]
    fn test_rel_err_sign_and_magnitude() {
        for lg_k in 4..=21 {
            for nsd in [NumStdDev::One, NumStdDev::Two, NumStdDev::Three] {
                for ooo in [false, true] {
                    assert!(rel_err(false, ooo, lg_k, nsd) > 0.0);
                    assert!(rel_err(true, ooo, lg_k, nsd) < 0.0);
                }
                assert!(rel_err(false, true, lg_k, nsd) > rel_err(false, false, lg_k, nsd));
            }
        }
        assert!((rel_err(false, false, 16, NumStdDev::One) - 0.8325546 / 256.0).abs() < 1e-12);
        assert_eq!(rel_err(true, true, 10, NumStdDev::Two), -0.062897613);
    }
}
