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


//! 6-bit bucket storage: four buckets in every three bytes, little-endian bit order.

const VAL_MASK_6: u16 = 0x3F;

#[derive(Debug, Clone)]
pub(super) struct Array6 {
    bytes: Box<[u8]>,
}

impl Array6 {
    pub fn new(lg_config_k: u8) -> Self {
        Self {
            bytes: vec![0u8; Self::num_bytes(lg_config_k)].into_boxed_slice(),
        }
    }

    /// Bytes needed for `2^lg_config_k` 6-bit fields, plus one so that every field can be
    /// read through a two-byte window.
    pub fn num_bytes(lg_config_k: u8) -> usize {
        let k = 1usize << lg_config_k;
        (k * 3) / 4 + 1
    }

    pub fn from_bytes(bytes: Box<[u8]>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn window(slot: u32) -> (usize, u32) {
        let bit = slot * 6;
        ((bit >> 3) as usize, bit & 7)
    }

    #[inline]
    pub fn get(&self, slot: u32) -> u8 {
        let (index, shift) = Self::window(slot);
        let pair = u16::from_le_bytes([self.bytes[index], self.bytes[index + 1]]);
        ((pair >> shift) & VAL_MASK_6) as u8
    }

    #[inline]
    pub fn put(&mut self, slot: u32, value: u8) {
        debug_assert!(u16::from(value) <= VAL_MASK_6);
        let (index, shift) = Self::window(slot);
        let mut pair = u16::from_le_bytes([self.bytes[index], self.bytes[index + 1]]);
        pair &= !(VAL_MASK_6 << shift);
        pair |= u16::from(value) << shift;
        [self.bytes[index], self.bytes[index + 1]] = pair.to_le_bytes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_bytes() {
        assert_eq!(Array6::num_bytes(4), 13);
        assert_eq!(Array6::num_bytes(10), 769);
    }

    #[test]
    fn test_neighbours_are_independent() {
        let mut array = Array6::new(4);
        for slot in 0..16 {
            array.put(slot, (slot as u8 * 4 + 3) & 0x3F);
        }
        for slot in 0..16 {
            assert_eq!(array.get(slot), (slot as u8 * 4 + 3) & 0x3F, "slot {slot}");
        }

        array.put(5, 63);
        array.put(6, 0);
        assert_eq!(array.get(4), 19);
        assert_eq!(array.get(5), 63);
        assert_eq!(array.get(6), 0);
        assert_eq!(array.get(7), 31);
    }

    #[test]
    fn test_bit_layout() {
        let mut array = Array6::new(4);
        array.put(0, 0b11_1111);
        array.put(1, 0b00_0001);
        // slot 0 fills bits 0..6, slot 1 starts at bit 6
        assert_eq!(array.bytes()[0], 0b0111_1111);
        assert_eq!(array.bytes()[1], 0b0000_0000);
    }
}
