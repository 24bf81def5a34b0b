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


/// Width of a confidence interval, in standard deviations.
///
/// Passed to the `lower_bound` / `upper_bound` accessors of the sketches. Wider intervals are
/// more likely to contain the true cardinality.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumStdDev {
    /// One standard deviation (\~68.3% confidence).
    One = 1,
    /// Two standard deviations (\~95.4% confidence).
    Two = 2,
    /// Three standard deviations (\~99.7% confidence).
    Three = 3,
}

impl NumStdDev {
    /// Returns the number of standard deviations as an `u8`.
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Returns the number of standard deviations as an `f64`.
    pub const fn as_f64(&self) -> f64 {
        *self as u8 as f64
    }

    /// Converts 1, 2 or 3 into a `NumStdDev`.
    pub const fn from_u8(n: u8) -> Option<Self> {
        match n {
            1 => Some(NumStdDev::One),
            2 => Some(NumStdDev::Two),
            3 => Some(NumStdDev::Three),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        for n in 1..=3 {
            let nsd = NumStdDev::from_u8(n).unwrap();
            assert_eq!(nsd.as_u8(), n);
            assert_eq!(nsd.as_f64(), n as f64);
        }
        assert_eq!(NumStdDev::from_u8(0), None);
        assert_eq!(NumStdDev::from_u8(4), None);
    }
}
