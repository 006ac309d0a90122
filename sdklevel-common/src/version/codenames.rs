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

use crate::props::{PropertySource, PROP_KNOWN_CODENAMES};
use crate::version::{DeviceState, VersionCodes};
use crate::{GateError, GateResult};
use log::debug;
use std::fmt;

/// Codenames that preceded each finalized level, for platforms that do not
/// publish `ro.build.version.known_codenames`.
pub const PREVIOUS_CODENAMES: &[(i32, &str)] = &[
    (VersionCodes::Q, "Q"),
    (VersionCodes::R, "Q,R"),
    (VersionCodes::S, "Q,R,S"),
    (VersionCodes::S_V2, "Q,R,S,Sv2"),
];

/// Comma joined set of codenames known to a device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownCodenames(String);

impl KnownCodenames {
    pub fn new(joined: impl Into<String>) -> Self {
        Self(joined.into())
    }

    /// Exact, case sensitive membership.
    pub fn contains(&self, codename: &str) -> bool {
        self.iter().any(|c| c == codename)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').filter(|c| !c.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adds `codename` unless it is empty or already present.
    pub fn include(mut self, codename: &str) -> Self {
        if codename.is_empty() || self.contains(codename) {
            return self;
        }
        if !self.0.is_empty() {
            self.0.push(',');
        }
        self.0.push_str(codename);
        self
    }
}

impl fmt::Display for KnownCodenames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Resolves which codenames a device knows about.
///
/// Devices at or above `cutover_level` publish the set themselves; older ones
/// are looked up in a fixed table. A pre-release device always knows the
/// codename it is running.
#[derive(Debug, Clone, Copy)]
pub struct CodenameTable {
    entries: &'static [(i32, &'static str)],
    cutover_level: i32,
}

impl CodenameTable {
    pub const fn new(entries: &'static [(i32, &'static str)], cutover_level: i32) -> Self {
        Self {
            entries,
            cutover_level,
        }
    }

    pub fn cutover_level(&self) -> i32 {
        self.cutover_level
    }

    pub fn lookup(&self, finalized_level: i32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(level, _)| *level == finalized_level)
            .map(|(_, codenames)| *codenames)
    }

    pub fn resolve<P: PropertySource + ?Sized>(
        &self,
        device: &DeviceState,
        props: &P,
    ) -> GateResult<KnownCodenames> {
        let known = self.resolve_published(device, props)?;
        if device.is_release() {
            Ok(known)
        } else {
            Ok(known.include(&device.codename))
        }
    }

    fn resolve_published<P: PropertySource + ?Sized>(
        &self,
        device: &DeviceState,
        props: &P,
    ) -> GateResult<KnownCodenames> {
        if device.finalized_level >= self.cutover_level {
            return match props.find(PROP_KNOWN_CODENAMES) {
                Some(v) if !v.is_empty() => Ok(KnownCodenames::new(v)),
                _ => Err(GateError::MissingProperty(PROP_KNOWN_CODENAMES.to_string())),
            };
        }

        match self.lookup(device.finalized_level) {
            Some(v) => Ok(KnownCodenames::new(v)),
            None => {
                debug!(
                    "no known codenames for finalized level {}",
                    device.finalized_level
                );
                Ok(KnownCodenames::default())
            }
        }
    }
}

impl Default for CodenameTable {
    fn default() -> Self {
        Self::new(PREVIOUS_CODENAMES, VersionCodes::T)
    }
}
