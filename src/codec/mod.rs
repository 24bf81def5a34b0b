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


//! Little-endian readers and writers shared by the serializers.

mod family;

pub(crate) use self::family::Family;

use std::io;
use std::io::Cursor;

use byteorder::ByteOrder;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

/// Writes little-endian values into a pre-sized byte region.
///
/// The region is sized up front from the sketch's serialized size, so writes never grow it.
pub(crate) struct SketchBytes<'a> {
    bytes: &'a mut [u8],
    pos: usize,
}

impl<'a> SketchBytes<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn advance(&mut self, n: usize) -> &mut [u8] {
        let start = self.pos;
        self.pos += n;
        &mut self.bytes[start..self.pos]
    }

    pub fn write(&mut self, buf: &[u8]) {
        self.advance(buf.len()).copy_from_slice(buf);
    }

    pub fn write_u8(&mut self, n: u8) {
        self.advance(1)[0] = n;
    }

    pub fn write_u32_le(&mut self, n: u32) {
        LittleEndian::write_u32(self.advance(4), n);
    }

    pub fn write_f64_le(&mut self, n: f64) {
        LittleEndian::write_f64(self.advance(8), n);
    }
}

/// Reads little-endian values from a byte slice.
pub(crate) struct SketchSlice<'a> {
    slice: Cursor<&'a [u8]>,
}

impl<'a> SketchSlice<'a> {
    pub fn new(slice: &'a [u8]) -> Self {
        Self {
            slice: Cursor::new(slice),
        }
    }

    /// Bytes left after the current position.
    pub fn remaining(&self) -> usize {
        let len = self.slice.get_ref().len() as u64;
        len.saturating_sub(self.slice.position()) as usize
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        io::Read::read_exact(&mut self.slice, buf)
    }

    pub fn read_u8(&mut self) -> io::Result<u8> {
        self.slice.read_u8()
    }

    pub fn read_u32_le(&mut self) -> io::Result<u32> {
        self.slice.read_u32::<LittleEndian>()
    }

    pub fn read_f64_le(&mut self) -> io::Result<f64> {
        self.slice.read_f64::<LittleEndian>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_mixed_values() {
        let mut buf = [0u8; 13];
        let mut out = SketchBytes::new(&mut buf);
        out.write_u8(7);
        out.write_u32_le(0x0403_0201);
        out.write_f64_le(1.5);
        assert_eq!(out.position(), 13);
        assert_eq!(&buf[..5], &[7, 1, 2, 3, 4]);

        let mut input = SketchSlice::new(&buf);
        assert_eq!(input.read_u8().unwrap(), 7);
        assert_eq!(input.read_u32_le().unwrap(), 0x0403_0201);
        assert_eq!(input.remaining(), 8);
        assert_eq!(input.read_f64_le().unwrap(), 1.5);
        assert_eq!(input.remaining(), 0);
        assert!(input.read_u8().is_err());
    }
}
