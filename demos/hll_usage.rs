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
use datasketches_hll::hll::HllSketch;
use datasketches_hll::hll::HllType;
use datasketches_hll::hll::HllUnion;

fn main() {
    // lg_k=12 means 4096 buckets, ~1.3% relative error while updates stay in order
    let mut sketch = HllSketch::new(12, HllType::Hll8);
    println!("Created HLL sketch with lg_k=12 (K=4096)");
    println!("Initial estimate: {}", sketch.estimate());

    println!("\nAdding 10,000 unique integers...");
    for i in 0..10_000 {
        sketch.update(i);
    }
    let actual = 10_000.0;
    let estimate = sketch.estimate();
    println!("Estimated unique values: {estimate:.2}");
    println!("Relative error: {:.2}%", ((estimate - actual) / actual * 100.0).abs());
    println!(
        "95% interval: [{:.2}, {:.2}] ({:?} estimator)",
        sketch.lower_bound(NumStdDev::Two),
        sketch.upper_bound(NumStdDev::Two),
        sketch.estimator_kind()
    );

    println!("\nAdding the same 10,000 values again...");
    for i in 0..10_000 {
        sketch.update(i);
    }
    println!("Estimate after duplicates: {:.2}", sketch.estimate());

    println!("\nSerializing sketch...");
    let bytes = sketch.serialize();
    println!("Compact size: {} bytes", bytes.len());
    println!("Updatable size: {} bytes", sketch.updatable_serialization_bytes());
    let small = sketch.copy_as(HllType::Hll4);
    println!("Compact size as HLL4: {} bytes", small.compact_serialization_bytes());

    let restored = match HllSketch::deserialize(&bytes) {
        Ok(restored) => restored,
        Err(err) => {
            eprintln!("failed to read sketch back: {err}");
            return;
        }
    };
    println!("Estimate after deserialization: {:.2}", restored.estimate());
    println!("\nDebug: {restored:?}");

    println!("\nUnion with a second stream that overlaps by half...");
    let mut other = HllSketch::new(10, HllType::Hll6);
    for i in 5_000..15_000 {
        other.update(i);
    }
    let mut union = HllUnion::new(12);
    for input in [&sketch, &other] {
        if let Err(err) = union.update(input) {
            eprintln!("failed to merge: {err}");
            return;
        }
    }
    let result = union.get_result(HllType::Hll4);
    println!(
        "Union estimate: {:.2} at lg_k={} (expected ~15,000)",
        result.estimate(),
        result.lg_config_k()
    );
    println!("\nDebug: {result:?}");
}
