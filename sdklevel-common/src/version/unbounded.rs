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

//! Dynamic version checks that terminate on build errors.
//!
//! Use [`crate::version::sdk_level`] when the version is known at build time.
//! These are for versions that only arrive at runtime, for example from an
//! artifact's manifest. A malformed version or a version naming a codename
//! that has since been finalized panics; release builds abort on panic.

use crate::props::PropertySource;
use crate::version::VersionGate;
use crate::FatalExt;

/// Checks if the device is running `version` or newer.
pub fn is_at_least(version: &str) -> bool {
    VersionGate::system()
        .and_then(|gate| gate.is_at_least(version))
        .or_fatal()
}

/// Checks if the device is running `version` or older.
pub fn is_at_most(version: &str) -> bool {
    VersionGate::system()
        .and_then(|gate| gate.is_at_most(version))
        .or_fatal()
}

pub fn is_at_least_with<P: PropertySource>(gate: &VersionGate<P>, version: &str) -> bool {
    gate.is_at_least(version).or_fatal()
}

pub fn is_at_most_with<P: PropertySource>(gate: &VersionGate<P>, version: &str) -> bool {
    gate.is_at_most(version).or_fatal()
}
