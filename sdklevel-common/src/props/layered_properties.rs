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

use crate::props::PropertySource;

/// Stack of property sources; the first layer with a non-empty value wins.
#[derive(Default)]
pub struct LayeredProperties {
    layers: Vec<Box<dyn PropertySource + Send + Sync>>,
}

impl LayeredProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: impl PropertySource + Send + Sync + 'static) {
        self.layers.push(Box::new(source));
    }

    pub fn with(mut self, source: impl PropertySource + Send + Sync + 'static) -> Self {
        self.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl PropertySource for LayeredProperties {
    fn find(&self, key: &str) -> Option<String> {
        let mut empty = None;
        for layer in &self.layers {
            match layer.find(key) {
                Some(v) if !v.is_empty() => return Some(v),
                Some(v) => empty = Some(v),
                None => (),
            }
        }
        empty
    }
}

impl std::fmt::Debug for LayeredProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredProperties")
            .field("layers", &self.layers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{MapProperties, PROP_CODENAME, PROP_SDK};

    #[test]
    fn test_first_layer_wins() {
        let props = LayeredProperties::new()
            .with(MapProperties::new().with(PROP_SDK, "34"))
            .with(MapProperties::device(33, "REL"));

        assert_eq!(props.len(), 2);
        assert_eq!(props.device_api_level(), 34);
        assert_eq!(props.get_property(PROP_CODENAME, ""), "REL");
    }

    #[test]
    fn test_empty_value_falls_through() {
        let props = LayeredProperties::new()
            .with(MapProperties::new().with(PROP_CODENAME, "").with("ro.a", ""))
            .with(MapProperties::new().with(PROP_CODENAME, "UpsideDownCake"));

        assert_eq!(props.get_property(PROP_CODENAME, ""), "UpsideDownCake");
        assert_eq!(props.find("ro.a"), Some(String::new()));
        assert_eq!(props.find("ro.b"), None);
        assert!(LayeredProperties::new().find(PROP_SDK).is_none());
    }
}
