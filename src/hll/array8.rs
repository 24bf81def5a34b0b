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


//! 8-bit bucket storage, one byte per bucket.

#[derive(Debug, Clone)]
pub(super) struct Array8 {
    bytes: Box<[u8]>,
}

impl Array8 {
    pub fn new(lg_config_k: u8) -> Self {
        Self {
            bytes: vec![0u8; Self::num_bytes(lg_config_k)].into_boxed_slice(),
        }
    }

    pub fn num_bytes(lg_config_k: u8) -> usize {
        1 << lg_config_k
    }

    pub fn from_bytes(bytes: Box<[u8]>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn get(&self, slot: u32) -> u8 {
        self.bytes[slot as usize]
    }

    #[inline]
    pub fn put(&mut self, slot: u32, value: u8) {
        self.bytes[slot as usize] = value;
    }

    /// Bucket-wise maximum with another array of the same size.
    pub fn merge_max(&mut self, other: &[u8]) {
        debug_assert_eq!(self.bytes.len(), other.len());
        for (dst, &src) in self.bytes.iter_mut().zip(other) {
            *dst = (*dst).max(src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_max() {
        let mut array = Array8::new(4);
        array.put(0, 5);
        array.put(1, 9);
        let mut other = [0u8; 16];
        other[0] = 7;
        other[1] = 2;
        other[15] = 1;
        array.merge_max(&other);
        assert_eq!(array.get(0), 7);
        assert_eq!(array.get(1), 9);
        assert_eq!(array.get(15), 1);
        assert_eq!(array.get(2), 0);
    }
}
