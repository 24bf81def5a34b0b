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


use datasketches_hll::common::NumStdDev;
use datasketches_hll::error::ErrorKind;
use datasketches_hll::hll::CurMode;
use datasketches_hll::hll::EstimatorKind;
use datasketches_hll::hll::HllSketch;
use datasketches_hll::hll::HllSketchBuilder;
use datasketches_hll::hll::HllType;
use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::le;
use googletest::prelude::near;

const ALL_TYPES: [HllType; 3] = [HllType::Hll4, HllType::Hll6, HllType::Hll8];

fn assert_bounds_bracket(sketch: &HllSketch) {
    for nsd in [NumStdDev::One, NumStdDev::Two, NumStdDev::Three] {
        assert_that!(sketch.estimate(), ge(sketch.lower_bound(nsd)));
        assert_that!(sketch.estimate(), le(sketch.upper_bound(nsd)));
    }
}

#[test]
fn test_empty() {
    for hll_type in ALL_TYPES {
        let sketch = HllSketch::new(12, hll_type);
        assert!(sketch.is_empty());
        assert!(!sketch.is_out_of_order());
        assert_eq!(sketch.current_mode(), CurMode::List);
        assert_eq!(sketch.estimate(), 0.0);
        assert_eq!(sketch.lower_bound(NumStdDev::One), 0.0);
        assert_eq!(sketch.upper_bound(NumStdDev::One), 0.0);
    }
}

#[test]
fn test_one_value() {
    let mut sketch = HllSketch::new(12, HllType::Hll8);
    sketch.update(1);
    assert!(!sketch.is_empty());
    assert_eq!(sketch.estimate(), 1.0);
    assert_bounds_bracket(&sketch);
}

#[test]
fn test_duplicates_are_idempotent() {
    let mut once = HllSketch::new(10, HllType::Hll6);
    let mut many = HllSketch::new(10, HllType::Hll6);
    for i in 0..5000 {
        once.update(i);
    }
    for _ in 0..4 {
        for i in 0..5000 {
            many.update(i);
        }
    }
    assert_eq!(many.estimate(), once.estimate());
    assert_eq!(many.serialize(), once.serialize());
}

#[test]
fn test_estimate_is_monotone() {
    for hll_type in ALL_TYPES {
        let mut sketch = HllSketch::new(8, hll_type);
        let mut last = 0.0;
        for i in 0..20_000 {
            sketch.update(i);
            let estimate = sketch.estimate();
            assert_that!(estimate, ge(last));
            last = estimate;
        }
    }
}

#[test]
fn test_small_lg_k_goes_from_list_to_hll() {
    let mut sketch = HllSketch::new(4, HllType::Hll4);
    for i in 0..7u64 {
        sketch.update(i);
        assert_eq!(sketch.current_mode(), CurMode::List);
    }
    sketch.update(7u64);
    assert_eq!(sketch.current_mode(), CurMode::Hll);
    assert_eq!(sketch.estimator_kind(), EstimatorKind::Hip);
    assert_that!(sketch.estimate(), near(8.0, 0.01));
}

#[test]
fn test_mode_progression() {
    let mut sketch = HllSketch::new(12, HllType::Hll8);
    let mut modes = vec![sketch.current_mode()];
    for i in 0..5000 {
        sketch.update(i);
        if modes.last() != Some(&sketch.current_mode()) {
            modes.push(sketch.current_mode());
        }
    }
    assert_eq!(modes, vec![CurMode::List, CurMode::Set, CurMode::Hll]);
}

#[test]
fn test_types_give_identical_estimates() {
    let mut sketches: Vec<HllSketch> = ALL_TYPES
        .into_iter()
        .map(|hll_type| HllSketch::new(11, hll_type))
        .collect();
    for i in 0..50_000u64 {
        for sketch in &mut sketches {
            sketch.update(i);
        }
    }
    for sketch in &sketches[1..] {
        assert_eq!(sketch.estimate(), sketches[0].estimate());
        assert_eq!(sketch.composite_estimate(), sketches[0].composite_estimate());
        assert_eq!(
            sketch.lower_bound(NumStdDev::Two),
            sketches[0].lower_bound(NumStdDev::Two)
        );
    }
}

#[test]
fn test_accuracy_over_seeds() {
    const N: u64 = 1_000_000;
    // three standard errors for k = 1024
    const HIP_TOLERANCE: f64 = 3.0 * 0.8325546 / 32.0;
    const COMPOSITE_TOLERANCE: f64 = 3.0 * 1.03896 / 32.0;

    for seed in [1, 9001, 123_456] {
        let mut sketch = HllSketchBuilder::new(10)
            .hll_type(HllType::Hll8)
            .seed(seed)
            .build()
            .unwrap();
        for i in 0..N {
            sketch.update(i);
        }
        assert_that!(sketch.estimate(), near(N as f64, HIP_TOLERANCE * N as f64));
        assert_bounds_bracket(&sketch);
        assert_that!(
            sketch.composite_estimate(),
            near(N as f64, COMPOSITE_TOLERANCE * N as f64)
        );
    }
}

#[test]
fn test_large_cardinality() {
    const N: u64 = 100_000;
    let mut sketch = HllSketch::new(14, HllType::Hll4);
    for i in 0..N {
        sketch.update(i);
    }
    assert_that!(sketch.estimate(), near(N as f64, 0.03 * N as f64));
    assert_bounds_bracket(&sketch);
}

#[test]
fn test_different_types_of_values() {
    let mut sketch = HllSketch::new(10, HllType::Hll8);
    sketch.update(42i32);
    sketch.update("hello");
    sketch.update(100u64);
    sketch.update(true);
    sketch.update(vec![1, 2, 3]);
    sketch.update_bytes(b"raw bytes");
    assert_that!(sketch.estimate(), near(6.0, 0.01));
}

#[test]
fn test_copy_as_preserves_estimates() {
    let mut sketch = HllSketch::new(10, HllType::Hll4);
    for i in 0..30_000 {
        sketch.update(i);
    }
    for hll_type in ALL_TYPES {
        let copy = sketch.copy_as(hll_type);
        assert_that!(copy.target_type(), eq(hll_type));
        assert_eq!(copy.estimate(), sketch.estimate());
        assert_eq!(copy.composite_estimate(), sketch.composite_estimate());
    }
}

#[test]
fn test_builder_rejects_bad_lg_k() {
    for lg_k in [0, 3, 22, 30] {
        let err = HllSketchBuilder::new(lg_k).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
#[should_panic(expected = "lg_config_k must be in [4, 21]")]
fn test_invalid_lg_k_low() {
    HllSketch::new(3, HllType::Hll8);
}

#[test]
#[should_panic(expected = "lg_config_k must be in [4, 21]")]
fn test_invalid_lg_k_high() {
    HllSketch::new(22, HllType::Hll8);
}
