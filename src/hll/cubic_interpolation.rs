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


//! Four-point Lagrange interpolation over monotone lookup tables.

/// Interpolates `y(x)` from paired `x_arr` / `y_arr` tables.
///
/// `x` must lie within `[x_arr[0], x_arr[last]]`.
pub(super) fn using_x_and_y_tables(x_arr: &[f64], y_arr: &[f64], x: f64) -> f64 {
    debug_assert!(x_arr.len() >= 4 && x_arr.len() == y_arr.len());
    let last = x_arr.len() - 1;
    debug_assert!(x >= x_arr[0] && x <= x_arr[last]);

    if x == x_arr[last] {
        return y_arr[last];
    }

    let start = window_start(find_straddle(x_arr, x), x_arr.len());
    cubic_interpolate(
        &x_arr[start..start + 4],
        [y_arr[start], y_arr[start + 1], y_arr[start + 2], y_arr[start + 3]],
        x,
    )
}

/// Interpolates `y(x)` where the i-th y value is implicitly `y_stride * i`.
pub(super) fn using_x_arr_and_y_stride(x_arr: &[f64], y_stride: f64, x: f64) -> f64 {
    debug_assert!(x_arr.len() >= 4);
    let last = x_arr.len() - 1;
    debug_assert!(x >= x_arr[0] && x <= x_arr[last]);

    if x == x_arr[last] {
        return y_stride * last as f64;
    }

    let start = window_start(find_straddle(x_arr, x), x_arr.len());
    let y = |i: usize| y_stride * (start + i) as f64;
    cubic_interpolate(&x_arr[start..start + 4], [y(0), y(1), y(2), y(3)], x)
}

/// Picks the first of four points so that the straddling pair sits in the middle when possible.
fn window_start(straddle: usize, len: usize) -> usize {
    if straddle == 0 {
        0
    } else if straddle >= len - 2 {
        len - 4
    } else {
        straddle - 1
    }
}

fn cubic_interpolate(xs: &[f64], ys: [f64; 4], x: f64) -> f64 {
    let mut sum = 0.0;
    for i in 0..4 {
        let mut term = ys[i];
        for j in 0..4 {
            if i != j {
                term *= (x - xs[j]) / (xs[i] - xs[j]);
            }
        }
        sum += term;
    }
    sum
}

/// Returns `i` such that `x_arr[i] <= x < x_arr[i + 1]`.
fn find_straddle(x_arr: &[f64], x: f64) -> usize {
    let mut left = 0;
    let mut right = x_arr.len() - 1;
    debug_assert!(x_arr[left] <= x && x < x_arr[right]);

    while left + 1 < right {
        let middle = left + (right - left) / 2;
        if x_arr[middle] <= x {
            left = middle;
        } else {
            right = middle;
        }
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproduces_a_cubic_exactly() {
        let f = |x: f64| 2.0 * x * x * x - x * x + 3.0;
        let x_arr = [0.0, 1.0, 2.0, 4.0, 8.0, 16.0];
        let y_arr = x_arr.map(f);
        for x in [0.0, 0.5, 1.5, 3.0, 7.9, 12.0, 16.0] {
            let got = using_x_and_y_tables(&x_arr, &y_arr, x);
            assert!((got - f(x)).abs() < 1e-6, "x={x}: {got} vs {}", f(x));
        }
    }

    #[test]
    fn test_y_stride_is_linear_on_linear_table() {
        let x_arr: Vec<f64> = (0..10).map(|i| 3.0 * i as f64).collect();
        for x in [0.0, 1.0, 13.5, 26.9, 27.0] {
            let got = using_x_arr_and_y_stride(&x_arr, 2.0, x);
            assert!((got - 2.0 * x / 3.0).abs() < 1e-9, "x={x}: {got}");
        }
    }

    #[test]
    fn test_find_straddle() {
        let x_arr = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(find_straddle(&x_arr, 1.0), 0);
        assert_eq!(find_straddle(&x_arr, 2.0), 1);
        assert_eq!(find_straddle(&x_arr, 7.99), 2);
    }
}
