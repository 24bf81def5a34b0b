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


//! Error types for sketch construction, merging and (de)serialization.

use std::fmt;

/// The category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument supplied by the caller is out of range.
    InvalidArgument,
    /// Serialized sketch bytes are malformed or inconsistent.
    InvalidData,
    /// Two sketches cannot be combined, for example because their seeds differ.
    IncompatibleSketch,
    /// A caller-supplied buffer is too small for the requested write.
    InsufficientCapacity,
}

impl ErrorKind {
    /// Returns the name of this kind as a static string.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::InvalidData => "InvalidData",
            ErrorKind::IncompatibleSketch => "IncompatibleSketch",
            ErrorKind::InsufficientCapacity => "InsufficientCapacity",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into_static())
    }
}

/// The error returned by every fallible operation in this crate.
///
/// # Examples
///
/// ```
/// # use datasketches_hll::error::Error;
/// # use datasketches_hll::error::ErrorKind;
/// let err = Error::new(ErrorKind::InvalidArgument, "lg_k out of range").with_context("lg_k", 3);
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// assert_eq!(err.message(), "lg_k out of range");
/// assert_eq!(err.context(), &[("lg_k", "3".to_string())]);
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Attaches a key/value pair describing where the error happened.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context entries in the order they were attached.
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg)
    }

    pub(crate) fn invalid_data(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidData, msg)
    }

    pub(crate) fn insufficient_data(tag: &'static str) -> Self {
        Self::invalid_data(format!("insufficient data while reading {tag}"))
    }

    pub(crate) fn invalid_family(expected: u8, actual: u8, name: &'static str) -> Self {
        Self::invalid_data(format!(
            "invalid family: expected {expected} ({name}), got {actual}"
        ))
    }

    pub(crate) fn unsupported_serial_version(expected: u8, actual: u8) -> Self {
        Self::invalid_data(format!(
            "unsupported serial version: expected {expected}, got {actual}"
        ))
    }

    pub(crate) fn invalid_preamble_ints(expected: u8, actual: u8) -> Self {
        Self::invalid_data(format!(
            "invalid preamble ints: expected {expected}, got {actual}"
        ))
    }

    pub(crate) fn seed_hash_mismatch(expected: u16, actual: u16) -> Self {
        Self::new(
            ErrorKind::IncompatibleSketch,
            format!("seed hash mismatch: expected {expected:#06x}, got {actual:#06x}"),
        )
    }

    pub(crate) fn insufficient_capacity(required: usize, available: usize) -> Self {
        Self::new(
            ErrorKind::InsufficientCapacity,
            format!("buffer holds {available} bytes but {required} are required"),
        )
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f
                .debug_struct("Error")
                .field("kind", &self.kind)
                .field("message", &self.message)
                .field("context", &self.context)
                .finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}: {v}")?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_display_without_context() {
        let err = Error::invalid_argument("lg_k must be in [4, 21], got 3");
        assert_snapshot!(err, @"InvalidArgument => lg_k must be in [4, 21], got 3");
    }

    #[test]
    fn test_display_with_context() {
        let err = Error::insufficient_data("coupons")
            .with_context("mode", "LIST")
            .with_context("index", 5);
        assert_snapshot!(err, @"InvalidData, context: { mode: LIST, index: 5 } => insufficient data while reading coupons");
    }

    #[test]
    fn test_seed_hash_mismatch() {
        let err = Error::seed_hash_mismatch(0x93cc, 0x0001);
        assert_eq!(err.kind(), ErrorKind::IncompatibleSketch);
        assert_snapshot!(err, @"IncompatibleSketch => seed hash mismatch: expected 0x93cc, got 0x0001");
    }

    #[test]
    fn test_insufficient_capacity() {
        let err = Error::insufficient_capacity(1064, 64);
        assert_eq!(err.kind(), ErrorKind::InsufficientCapacity);
        assert_snapshot!(err, @"InsufficientCapacity => buffer holds 64 bytes but 1064 are required");
    }
}
