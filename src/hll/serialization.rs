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


//! Binary layout of HLL sketches.
//!
//! The layout follows the Apache DataSketches HLL format so sketches can be exchanged with
//! the Java and C++ libraries. All multi-byte fields are little endian.
//!
//! # Preamble (all modes)
//!
//! | Byte | Field | Description |
//! |------|-------|-------------|
//! | 0 | preamble_ints | 2 (LIST), 3 (SET) or 10 (HLL) |
//! | 1 | serial_version | Always 1 |
//! | 2 | family_id | 7 for HLL |
//! | 3 | lg_config_k | Log2 of the bucket count |
//! | 4 | lg_arr | LIST/SET: log2 of the coupon table. HLL4: log2 of the aux table, or 0 |
//! | 5 | flags | Bit flags (see below) |
//! | 6 | list_count / cur_min | Coupon count in LIST mode, `cur_min` in HLL mode |
//! | 7 | mode | Bits 0-1: current mode. Bits 2-3: target HLL type |
//!
//! # Body
//!
//! - LIST: coupons from byte 8.
//! - SET: `u32` coupon count at byte 8, coupons from byte 12.
//! - HLL: `f64` HIP accumulator at 8, `f64` kxq0 at 16, `f64` kxq1 at 24, `u32` number of
//!   buckets at `cur_min` at 32, `u32` aux count at 36, bucket bytes from 40, then the aux
//!   entries for HLL4.
//!
//! Compact images store only the occupied coupons (sorted) and aux entries; updatable
//! images store the full tables so they can be loaded without rehashing.
//!
//! # Flags (byte 5)
//!
//! | Bit | Name | Description |
//! |-----|------|-------------|
//! | 0 | BIG_ENDIAN | Rejected on read |
//! | 1 | READ_ONLY | Ignored |
//! | 2 | EMPTY | Empty LIST sketch |
//! | 3 | COMPACT | Compact image |
//! | 4 | OUT_OF_ORDER | Sketch was merged; HIP is not valid |
//! | 5 | REBUILD_CUR_MIN | `cur_min` and its count must be recomputed after loading |

use crate::codec::Family;
use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::error::Error;
use crate::hll::CurMode;
use crate::hll::HllType;
use crate::hll::MAX_LG_K;
use crate::hll::MIN_LG_K;
use crate::hll::array4::Array4;
use crate::hll::array6::Array6;
use crate::hll::array8::Array8;
use crate::hll::aux_map::max_lg_aux_size;

pub(super) const SERIAL_VERSION: u8 = 1;

pub(super) const LIST_PREINTS: u8 = 2;
pub(super) const SET_PREINTS: u8 = 3;
pub(super) const HLL_PREINTS: u8 = 10;

pub(super) const BIG_ENDIAN_FLAG: u8 = 1;
pub(super) const EMPTY_FLAG: u8 = 1 << 2;
pub(super) const COMPACT_FLAG: u8 = 1 << 3;
pub(super) const OUT_OF_ORDER_FLAG: u8 = 1 << 4;
pub(super) const REBUILD_CUR_MIN_FLAG: u8 = 1 << 5;

pub(super) const PREAMBLE_BYTES: usize = 8;
pub(super) const LIST_HEADER_BYTES: usize = 8;
pub(super) const SET_HEADER_BYTES: usize = 12;
pub(super) const HLL_HEADER_BYTES: usize = 40;
pub(super) const COUPON_BYTES: usize = 4;

/// `lg_arr` written for LIST sketches; the list always has room for 8 coupons.
pub(super) const LIST_LG_ARR: u8 = 3;

pub(super) fn make_error(tag: &'static str) -> impl FnOnce(std::io::Error) -> Error {
    move |_| Error::insufficient_data(tag)
}

/// The fixed 8-byte header common to every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Preamble {
    pub lg_config_k: u8,
    pub lg_arr: u8,
    pub flags: u8,
    /// Byte 6: list count in LIST mode, `cur_min` in HLL mode, unused in SET mode.
    pub count_or_min: u8,
    pub cur_mode: CurMode,
    pub hll_type: HllType,
}

impl Preamble {
    pub fn preamble_ints(&self) -> u8 {
        match self.cur_mode {
            CurMode::List => LIST_PREINTS,
            CurMode::Set => SET_PREINTS,
            CurMode::Hll => HLL_PREINTS,
        }
    }

    pub fn has_flag(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }

    pub fn write(&self, bytes: &mut SketchBytes) {
        bytes.write_u8(self.preamble_ints());
        bytes.write_u8(SERIAL_VERSION);
        bytes.write_u8(Family::HLL.id);
        bytes.write_u8(self.lg_config_k);
        bytes.write_u8(self.lg_arr);
        bytes.write_u8(self.flags);
        bytes.write_u8(self.count_or_min);
        bytes.write_u8(self.cur_mode.id() | (self.hll_type.id() << 2));
    }

    /// Reads and validates the header, leaving `cursor` at the start of the body.
    pub fn read(cursor: &mut SketchSlice) -> Result<Self, Error> {
        if cursor.remaining() < PREAMBLE_BYTES {
            return Err(Error::insufficient_data("preamble"));
        }

        let preamble_ints = cursor.read_u8().map_err(make_error("preamble_ints"))?;
        let serial_version = cursor.read_u8().map_err(make_error("serial_version"))?;
        let family_id = cursor.read_u8().map_err(make_error("family_id"))?;
        let lg_config_k = cursor.read_u8().map_err(make_error("lg_config_k"))?;
        let lg_arr = cursor.read_u8().map_err(make_error("lg_arr"))?;
        let flags = cursor.read_u8().map_err(make_error("flags"))?;
        let count_or_min = cursor.read_u8().map_err(make_error("count_or_min"))?;
        let mode = cursor.read_u8().map_err(make_error("mode"))?;

        Family::HLL.validate_id(family_id)?;
        if serial_version != SERIAL_VERSION {
            return Err(Error::unsupported_serial_version(
                SERIAL_VERSION,
                serial_version,
            ));
        }
        if !(MIN_LG_K..=MAX_LG_K).contains(&lg_config_k) {
            return Err(Error::invalid_data(format!(
                "lg_config_k {lg_config_k} is out of range [{MIN_LG_K}, {MAX_LG_K}]"
            )));
        }
        if flags & BIG_ENDIAN_FLAG != 0 {
            return Err(Error::invalid_data("big-endian sketch images are not supported"));
        }

        let cur_mode = CurMode::from_id(mode & 0x3)
            .ok_or_else(|| Error::invalid_data(format!("invalid current mode: {}", mode & 0x3)))?;
        let hll_type = HllType::from_id(mode >> 2)
            .ok_or_else(|| Error::invalid_data(format!("invalid target HLL type: {}", mode >> 2)))?;

        let preamble = Preamble {
            lg_config_k,
            lg_arr,
            flags,
            count_or_min,
            cur_mode,
            hll_type,
        };
        if preamble_ints != preamble.preamble_ints() {
            return Err(Error::invalid_preamble_ints(
                preamble.preamble_ints(),
                preamble_ints,
            ));
        }
        Ok(preamble)
    }
}

/// Bytes of the bucket array for the given width.
pub(super) fn hll_array_bytes(lg_config_k: u8, hll_type: HllType) -> usize {
    match hll_type {
        HllType::Hll4 => Array4::num_bytes(lg_config_k),
        HllType::Hll6 => Array6::num_bytes(lg_config_k),
        HllType::Hll8 => Array8::num_bytes(lg_config_k),
    }
}

/// Upper bound on the updatable image of any sketch with this configuration.
///
/// Useful for sizing the buffer passed to
/// [`HllSketch::serialize_updatable_into`](crate::hll::HllSketch::serialize_updatable_into).
/// HLL4 reserves room for the largest aux table a sketch can grow, `2^(lg_config_k + 1)`
/// entries, so the bound holds however the values are spread.
///
/// # Panics
///
/// Panics if `lg_config_k` is not in `[4, 21]`.
///
/// # Examples
///
/// ```
/// # use datasketches_hll::hll::HllType;
/// # use datasketches_hll::hll::max_updatable_serialization_bytes;
/// assert_eq!(max_updatable_serialization_bytes(10, HllType::Hll8), 40 + 1024);
/// ```
pub fn max_updatable_serialization_bytes(lg_config_k: u8, hll_type: HllType) -> usize {
    assert!(
        (MIN_LG_K..=MAX_LG_K).contains(&lg_config_k),
        "lg_config_k must be in [{MIN_LG_K}, {MAX_LG_K}], got {lg_config_k}"
    );
    let aux_bytes = match hll_type {
        HllType::Hll4 => COUPON_BYTES << max_lg_aux_size(lg_config_k),
        HllType::Hll6 | HllType::Hll8 => 0,
    };
    HLL_HEADER_BYTES + hll_array_bytes(lg_config_k, hll_type) + aux_bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> Preamble {
        Preamble {
            lg_config_k: 12,
            lg_arr: 5,
            flags: COMPACT_FLAG | OUT_OF_ORDER_FLAG,
            count_or_min: 0,
            cur_mode: CurMode::Set,
            hll_type: HllType::Hll6,
        }
    }

    #[test]
    fn test_preamble_layout() {
        let mut buf = [0u8; PREAMBLE_BYTES];
        sample().write(&mut SketchBytes::new(&mut buf));
        assert_eq!(buf, [3, 1, 7, 12, 5, 8 | 16, 0, 1 | (1 << 2)]);

        let read = Preamble::read(&mut SketchSlice::new(&buf)).unwrap();
        assert_eq!(read, sample());
    }

    #[test]
    fn test_preamble_rejects_bad_headers() {
        let mut buf = [0u8; PREAMBLE_BYTES];
        sample().write(&mut SketchBytes::new(&mut buf));

        let check = |patch: &dyn Fn(&mut [u8; PREAMBLE_BYTES]), kind: ErrorKind| {
            let mut bad = buf;
            patch(&mut bad);
            let err = Preamble::read(&mut SketchSlice::new(&bad)).unwrap_err();
            assert_eq!(err.kind(), kind, "{err}");
        };
        check(&|b| b[0] = 2, ErrorKind::InvalidData);
        check(&|b| b[1] = 2, ErrorKind::InvalidData);
        check(&|b| b[2] = 3, ErrorKind::InvalidData);
        check(&|b| b[3] = 3, ErrorKind::InvalidData);
        check(&|b| b[3] = 22, ErrorKind::InvalidData);
        check(&|b| b[5] |= BIG_ENDIAN_FLAG, ErrorKind::InvalidData);
        check(&|b| b[7] = 3, ErrorKind::InvalidData);
        check(&|b| b[7] = 3 << 2, ErrorKind::InvalidData);

        let err = Preamble::read(&mut SketchSlice::new(&buf[..7])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(err.message(), "insufficient data while reading preamble");
    }

    #[test]
    fn test_max_updatable_serialization_bytes() {
        assert_eq!(max_updatable_serialization_bytes(4, HllType::Hll8), 40 + 16);
        assert_eq!(max_updatable_serialization_bytes(4, HllType::Hll6), 40 + 13);
        assert_eq!(max_updatable_serialization_bytes(4, HllType::Hll4), 40 + 8 + 4 * 32);
        assert_eq!(max_updatable_serialization_bytes(12, HllType::Hll4), 40 + 2048 + 4 * 8192);
        assert_eq!(max_updatable_serialization_bytes(21, HllType::Hll6), 40 + 1572865);
    }
}
