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

use crate::props::{PropertySource, PROP_CODENAME};
use crate::{GateError, GateResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Codename reported by builds of a finalized release.
pub const RELEASE_CODENAME: &str = "REL";

/// A caller supplied target version: a finalized API level or a codename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specifier {
    Numeric(i32),
    Codename(String),
}

impl Specifier {
    /// Classifies `version`.
    ///
    /// A version starting with an uppercase ASCII letter is a codename. Anything
    /// else must parse completely as a positive `i32`. Versions are expected to be
    /// build time constants, so every failure here is fatal.
    pub fn parse(version: &str) -> GateResult<Self> {
        let first = match version.chars().next() {
            Some(c) => c,
            None => return Err(GateError::EmptyVersion),
        };

        if first.is_ascii_uppercase() {
            return Ok(Self::Codename(version.to_string()));
        }

        let value = version
            .parse::<i32>()
            .map_err(|e| GateError::invalid_version(version, e))?;
        if value <= 0 {
            return Err(GateError::invalid_version(version, "must be positive"));
        }

        Ok(Self::Numeric(value))
    }

    pub fn is_codename(&self) -> bool {
        matches!(self, Self::Codename(_))
    }

    pub fn as_codename(&self) -> Option<&str> {
        match self {
            Self::Codename(c) => Some(c),
            Self::Numeric(_) => None,
        }
    }
}

impl FromStr for Specifier {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{}", v),
            Self::Codename(c) => write!(f, "{}", c),
        }
    }
}

/// Version facts of the running device, read fresh for every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Latest finalized API level. A pre-release build reports the level of the
    /// release it is based on.
    pub finalized_level: i32,

    /// In-development codename, or [`RELEASE_CODENAME`].
    pub codename: String,
}

impl DeviceState {
    pub fn new(finalized_level: i32, codename: impl Into<String>) -> Self {
        Self {
            finalized_level,
            codename: codename.into(),
        }
    }

    pub fn read<P: PropertySource + ?Sized>(props: &P) -> Self {
        Self::new(
            props.device_api_level(),
            props.get_property(PROP_CODENAME, ""),
        )
    }

    /// True on builds of a finalized release, where no codename is in flight.
    pub fn is_release(&self) -> bool {
        self.codename == RELEASE_CODENAME
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_release() {
            write!(f, "{} (release)", self.finalized_level)
        } else {
            write!(f, "{} (pre-release {})", self.finalized_level, self.codename)
        }
    }
}
