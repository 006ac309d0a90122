// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Metric name hashing shared with the managed side.
//!
//! Values are FarmHash `Fingerprint64`, which is stable across processes,
//! platforms and library versions, so a hash computed here can be compared
//! with one stored or computed elsewhere.

/// FarmHash `Fingerprint64` of raw bytes.
#[inline]
pub fn fingerprint64(bytes: &[u8]) -> u64 {
    farmhash::fingerprint64(bytes)
}

/// Hash of a metric name, reinterpreted as a Java `long`.
pub fn hash_string(name: &str) -> i64 {
    fingerprint64(name.as_bytes()) as i64
}
