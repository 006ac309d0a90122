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

use crate::props::{
    BuildPropFile, EnvProperties, LayeredProperties, MapProperties, PROP_CODENAME,
    PROP_KNOWN_CODENAMES, PROP_SDK,
};
use crate::{GateError, GateResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

/// Where device facts are read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceConf {
    // build.prop style file; a missing file contributes no properties.
    pub prop_file: String,

    // Whether RO_BUILD_VERSION_* environment variables override the file.
    pub env_override: bool,

    // Fixed overrides, mainly for running on a host.
    pub api_level: Option<i32>,
    pub codename: Option<String>,
    pub known_codenames: Option<String>,
}

impl DeviceConf {
    fn overrides(&self) -> MapProperties {
        let mut props = MapProperties::new();
        if let Some(level) = self.api_level {
            props.insert(PROP_SDK, level.to_string());
        }
        if let Some(codename) = &self.codename {
            props.insert(PROP_CODENAME, codename.as_str());
        }
        if let Some(known) = &self.known_codenames {
            props.insert(PROP_KNOWN_CODENAMES, known.as_str());
        }
        props
    }

    /// Builds the property stack: fixed overrides, then environment, then the prop file.
    pub fn create_source(&self) -> GateResult<LayeredProperties> {
        let mut source = LayeredProperties::new();

        let overrides = self.overrides();
        if !overrides.is_empty() {
            source.push(overrides);
        }

        if self.env_override {
            source.push(EnvProperties::new());
        }

        if !self.prop_file.is_empty() {
            match BuildPropFile::load(&self.prop_file) {
                Ok(file) => source.push(file),
                Err(GateError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                    debug!("prop file {} not found, skipped", self.prop_file)
                }
                Err(e) => return Err(e),
            }
        }

        Ok(source)
    }
}

impl Default for DeviceConf {
    fn default() -> Self {
        Self {
            prop_file: BuildPropFile::DEFAULT_PATH.to_string(),
            env_override: true,
            api_level: None,
            codename: None,
            known_codenames: None,
        }
    }
}
