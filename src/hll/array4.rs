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


//! 4-bit bucket storage.
//!
//! Each byte holds two buckets, the even slot in the low nibble. A nibble stores the bucket
//! value minus the sketch-wide `cur_min`; offsets of 15 or more are replaced by
//! [`AUX_TOKEN`] and the true value lives in an [`AuxMap`].

use crate::hll::aux_map::AuxMap;

/// Nibble marking a bucket whose value is held in the aux map.
pub(super) const AUX_TOKEN: u8 = 15;

#[derive(Debug, Clone)]
pub(super) struct Array4 {
    lg_config_k: u8,
    bytes: Box<[u8]>,
    aux: Option<AuxMap>,
}

impl Array4 {
    pub fn new(lg_config_k: u8) -> Self {
        Self {
            lg_config_k,
            bytes: vec![0u8; Self::num_bytes(lg_config_k)].into_boxed_slice(),
            aux: None,
        }
    }

    /// Bytes needed for `2^lg_config_k` nibbles.
    pub fn num_bytes(lg_config_k: u8) -> usize {
        1 << (lg_config_k - 1)
    }

    /// Builds the array from bucket values, storing them relative to `cur_min`.
    ///
    /// No value may be below `cur_min`.
    pub fn from_values(lg_config_k: u8, values: &[u8], cur_min: u8) -> Self {
        let mut array = Self::new(lg_config_k);
        array.encode_all(values, cur_min);
        array
    }

    /// Adopts bytes read back from a serialized sketch.
    pub fn from_parts(lg_config_k: u8, bytes: Box<[u8]>, aux: Option<AuxMap>) -> Self {
        debug_assert_eq!(bytes.len(), Self::num_bytes(lg_config_k));
        Self {
            lg_config_k,
            bytes,
            aux,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn aux(&self) -> Option<&AuxMap> {
        self.aux.as_ref()
    }

    #[inline]
    pub fn get_raw(&self, slot: u32) -> u8 {
        let byte = self.bytes[(slot >> 1) as usize];
        if slot & 1 == 0 { byte & 0x0F } else { byte >> 4 }
    }

    #[inline]
    fn put_raw(&mut self, slot: u32, nibble: u8) {
        debug_assert!(nibble <= AUX_TOKEN);
        let byte = &mut self.bytes[(slot >> 1) as usize];
        *byte = if slot & 1 == 0 {
            (*byte & 0xF0) | nibble
        } else {
            (*byte & 0x0F) | (nibble << 4)
        };
    }

    /// The true value of `slot`.
    pub fn get(&self, slot: u32, cur_min: u8) -> u8 {
        let raw = self.get_raw(slot);
        if raw < AUX_TOKEN {
            return cur_min + raw;
        }
        let value = self.aux.as_ref().and_then(|aux| aux.get(slot));
        debug_assert!(value.is_some(), "slot {slot} holds AUX_TOKEN but has no aux entry");
        value.unwrap_or(cur_min + AUX_TOKEN)
    }

    /// Raises `slot` to `new_value`, which must exceed its current value.
    pub fn set(&mut self, slot: u32, cur_min: u8, new_value: u8) {
        debug_assert!(new_value >= cur_min);
        let offset = new_value - cur_min;
        if self.get_raw(slot) == AUX_TOKEN {
            // the old offset was already 15 or more, so the new one is too
            let replaced = self.aux.as_mut().is_some_and(|aux| aux.replace(slot, new_value));
            debug_assert!(replaced, "slot {slot} holds AUX_TOKEN but has no aux entry");
        } else if offset >= AUX_TOKEN {
            self.put_raw(slot, AUX_TOKEN);
            let lg_config_k = self.lg_config_k;
            self.aux
                .get_or_insert_with(|| AuxMap::new(lg_config_k))
                .insert(slot, new_value);
        } else {
            self.put_raw(slot, offset);
        }
    }

    /// Re-encodes the array against its true minimum and returns that minimum.
    ///
    /// Values that now fit in a nibble leave the aux map.
    pub fn rebase(&mut self, cur_min: u8) -> u8 {
        let k = 1u32 << self.lg_config_k;
        let values: Vec<u8> = (0..k).map(|slot| self.get(slot, cur_min)).collect();
        let new_min = values.iter().copied().min().unwrap_or(cur_min);
        if new_min != cur_min {
            self.aux = None;
            self.encode_all(&values, new_min);
        }
        new_min
    }

    /// Number of nibbles holding [`AUX_TOKEN`].
    pub fn num_aux_tokens(&self) -> u32 {
        let k = 1u32 << self.lg_config_k;
        (0..k).filter(|&slot| self.get_raw(slot) == AUX_TOKEN).count() as u32
    }

    fn encode_all(&mut self, values: &[u8], cur_min: u8) {
        for (slot, &value) in values.iter().enumerate() {
            let offset = value - cur_min;
            if offset < AUX_TOKEN {
                self.put_raw(slot as u32, offset);
            } else {
                self.put_raw(slot as u32, AUX_TOKEN);
                let lg_config_k = self.lg_config_k;
                self.aux
                    .get_or_insert_with(|| AuxMap::new(lg_config_k))
                    .insert(slot as u32, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_packing() {
        let mut array = Array4::new(4);
        array.put_raw(0, 5);
        array.put_raw(1, 7);
        assert_eq!(array.bytes()[0], 0x75);
        assert_eq!(array.get_raw(0), 5);
        assert_eq!(array.get_raw(1), 7);

        array.put_raw(0, 0);
        assert_eq!(array.bytes()[0], 0x70);
    }

    #[test]
    fn test_fourteen_stays_inline_fifteen_goes_to_aux() {
        let mut array = Array4::new(4);
        array.set(2, 0, 14);
        assert_eq!(array.get_raw(2), 14);
        assert!(array.aux().is_none());
        assert_eq!(array.get(2, 0), 14);

        array.set(3, 0, 15);
        assert_eq!(array.get_raw(3), AUX_TOKEN);
        assert_eq!(array.aux().map(|aux| aux.count()), Some(1));
        assert_eq!(array.get(3, 0), 15);

        // raising an exception keeps it in the aux map
        array.set(3, 0, 40);
        assert_eq!(array.get(3, 0), 40);
        assert_eq!(array.aux().map(|aux| aux.count()), Some(1));

        // raising an inline value across the boundary moves it to the aux map
        array.set(2, 0, 15);
        assert_eq!(array.get_raw(2), AUX_TOKEN);
        assert_eq!(array.get(2, 0), 15);
        assert_eq!(array.num_aux_tokens(), 2);
    }

    #[test]
    fn test_boundary_is_relative_to_cur_min() {
        let mut array = Array4::new(4);
        array.set(0, 2, 16);
        assert_eq!(array.get_raw(0), 14);
        array.set(1, 2, 17);
        assert_eq!(array.get_raw(1), AUX_TOKEN);
        assert_eq!(array.get(0, 2), 16);
        assert_eq!(array.get(1, 2), 17);
    }

    #[test]
    fn test_rebase_pulls_values_out_of_aux() {
        let mut values = vec![3u8; 16];
        values[5] = 17;
        values[6] = 30;
        let mut array = Array4::from_values(4, &values, 0);
        assert_eq!(array.num_aux_tokens(), 2);

        assert_eq!(array.rebase(0), 3);
        // 17 - 3 = 14 fits, 30 - 3 = 27 does not
        assert_eq!(array.get_raw(5), 14);
        assert_eq!(array.get_raw(6), AUX_TOKEN);
        assert_eq!(array.aux().map(|aux| aux.count()), Some(1));
        for (slot, &value) in values.iter().enumerate() {
            assert_eq!(array.get(slot as u32, 3), value);
        }
        assert_eq!(array.rebase(3), 3);
    }
}
