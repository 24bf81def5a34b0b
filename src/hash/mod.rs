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


//! Seeded MurmurHash3 (x64, 128-bit) front door for sketch updates.

use std::hash::Hash;
use std::hash::Hasher;

/// The default update seed, shared with the other DataSketches libraries.
///
/// Sketches can only be merged when they were built with the same seed.
pub(crate) const DEFAULT_UPDATE_SEED: u32 = 9001;

/// Hashes a value with `seed`, returning the two 64-bit halves.
pub(crate) fn hash_value<T: Hash>(value: T, seed: u32) -> (u64, u64) {
    let mut hasher = mur3::Hasher128::with_seed(seed);
    value.hash(&mut hasher);
    hasher.finish128()
}

/// Hashes raw bytes with `seed`, without any length prefix.
pub(crate) fn hash_bytes(bytes: &[u8], seed: u32) -> (u64, u64) {
    let mut hasher = mur3::Hasher128::with_seed(seed);
    hasher.write(bytes);
    hasher.finish128()
}

/// Computes the 16-bit seed hash compared before sketches are combined.
///
/// Zero marks "no seed hash", so seeds hashing to zero are rejected at construction.
pub(crate) fn compute_seed_hash(seed: u32) -> u16 {
    let (h1, _) = hash_bytes(&u64::from(seed).to_le_bytes(), 0);
    (h1 & 0xffff) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_per_seed() {
        assert_eq!(hash_value(42u64, 9001), hash_value(42u64, 9001));
        assert_ne!(hash_value(42u64, 9001), hash_value(42u64, 9002));
        assert_eq!(hash_bytes(b"apple", 1), hash_bytes(b"apple", 1));
        assert_ne!(hash_bytes(b"apple", 1), hash_bytes(b"apples", 1));
    }

    #[test]
    fn test_seed_hash_distinguishes_seeds() {
        let default = compute_seed_hash(DEFAULT_UPDATE_SEED);
        assert_ne!(default, 0);
        assert_eq!(default, compute_seed_hash(DEFAULT_UPDATE_SEED));
        assert_ne!(default, compute_seed_hash(DEFAULT_UPDATE_SEED + 1));
    }
}
