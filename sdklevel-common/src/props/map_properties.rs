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

use crate::props::{PropertySource, PROP_CODENAME, PROP_KNOWN_CODENAMES, PROP_SDK};
use std::collections::HashMap;

/// In-memory properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapProperties {
    values: HashMap<String, String>,
}

impl MapProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties of a device at `api_level` running `codename` ("REL" for release builds).
    pub fn device(api_level: i32, codename: impl Into<String>) -> Self {
        Self::new()
            .with(PROP_SDK, api_level.to_string())
            .with(PROP_CODENAME, codename)
    }

    pub fn with_known_codenames(self, codenames: impl Into<String>) -> Self {
        self.with(PROP_KNOWN_CODENAMES, codenames)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySource for MapProperties {
    fn find(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl From<HashMap<String, String>> for MapProperties {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}
