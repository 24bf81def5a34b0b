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


//! # HyperLogLog Cardinality Sketches
//!
//! This crate provides streaming cardinality estimation in the HyperLogLog family. A sketch
//! ingests a stream of items and keeps a compact summary from which the number of distinct
//! items, together with statistical error bounds, can be read at any time.
//!
//! The binary layout written by [`hll::HllSketch::serialize`] is the layout used by the
//! DataSketches libraries, so sketches can be exchanged across systems.
//!
//! See the [`hll`] module for the sketch, the union and usage examples.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod common;
pub mod error;
pub mod hll;

mod codec;
mod hash;
