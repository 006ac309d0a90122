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

//! Platform property lookup.
//!
//! The gate never caches what it reads: every check goes back to the
//! [`PropertySource`], so a source always reflects current ground truth.

mod build_prop_file;
mod env_properties;
mod layered_properties;
mod map_properties;

pub use build_prop_file::BuildPropFile;
pub use env_properties::EnvProperties;
pub use layered_properties::LayeredProperties;
pub use map_properties::MapProperties;

use crate::conf::GateConf;
use crate::GateResult;

pub const PROP_SDK: &str = "ro.build.version.sdk";
pub const PROP_CODENAME: &str = "ro.build.version.codename";
pub const PROP_KNOWN_CODENAMES: &str = "ro.build.version.known_codenames";

pub trait PropertySource {
    /// Raw lookup. `None` when the key is not set.
    fn find(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `default` if it is unset or empty.
    fn get_property(&self, key: &str, default: &str) -> String {
        match self.find(key) {
            Some(v) if !v.is_empty() => v,
            _ => default.to_string(),
        }
    }

    /// Finalized API level of the device, `-1` if it cannot be determined.
    fn device_api_level(&self) -> i32 {
        self.get_property(PROP_SDK, "")
            .trim()
            .parse::<i32>()
            .unwrap_or(-1)
    }
}

impl<P: PropertySource + ?Sized> PropertySource for &P {
    fn find(&self, key: &str) -> Option<String> {
        (**self).find(key)
    }
}

impl<P: PropertySource + ?Sized> PropertySource for Box<P> {
    fn find(&self, key: &str) -> Option<String> {
        (**self).find(key)
    }
}

/// Property sources of the running system, configured from `SDKLEVEL_CONF_FILE`.
pub fn system_properties() -> GateResult<LayeredProperties> {
    GateConf::from_env()?.device.create_source()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_methods() {
        let props = MapProperties::new()
            .with(PROP_SDK, " 33 ")
            .with(PROP_CODENAME, "");

        assert_eq!(props.device_api_level(), 33);
        assert_eq!(props.get_property(PROP_CODENAME, "REL"), "REL");
        assert_eq!(props.get_property("ro.unknown", "x"), "x");
    }

    #[test]
    fn test_unparsable_api_level() {
        let props = MapProperties::new().with(PROP_SDK, "thirty");
        assert_eq!(props.device_api_level(), -1);
        assert_eq!(MapProperties::new().device_api_level(), -1);
    }

    #[test]
    fn test_boxed_source() {
        let props: Box<dyn PropertySource> = Box::new(MapProperties::new().with(PROP_SDK, "30"));
        assert_eq!(props.device_api_level(), 30);
        assert_eq!((&props).device_api_level(), 30);
    }
}
