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

use crate::conf::{DeviceConf, LogConf};
use crate::GateResult;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top level configuration, read from a TOML file.
///
/// ```toml
/// [device]
/// prop_file = "/system/build.prop"
/// env_override = true
///
/// [log]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GateConf {
    pub device: DeviceConf,
    pub log: LogConf,
}

impl GateConf {
    pub const ENV_CONF_FILE: &'static str = "SDKLEVEL_CONF_FILE";

    pub fn from<T: AsRef<Path>>(path: T) -> GateResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let conf = Self::parse(&content)?;
        debug!("loaded conf from {}: {:?}", path.display(), conf);
        Ok(conf)
    }

    pub fn parse(content: &str) -> GateResult<Self> {
        let conf: Self = toml::from_str(content)?;
        conf.log.max_level()?;
        Ok(conf)
    }

    /// Reads the file named by `SDKLEVEL_CONF_FILE`, or defaults when it is unset.
    pub fn from_env() -> GateResult<Self> {
        match std::env::var(Self::ENV_CONF_FILE) {
            Ok(path) if !path.is_empty() => Self::from(path),
            _ => Ok(Self::default()),
        }
    }
}
