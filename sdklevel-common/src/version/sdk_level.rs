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

use crate::conf::DeviceConf;
use crate::props::{self, LayeredProperties, PropertySource, PROP_CODENAME};
use crate::version::RELEASE_CODENAME;
use log::warn;

/// Finalized API levels.
pub struct VersionCodes;

impl VersionCodes {
    pub const Q: i32 = 29;
    pub const R: i32 = 30;
    pub const S: i32 = 31;
    pub const S_V2: i32 = 32;
    pub const T: i32 = 33;
    pub const U: i32 = 34;
    pub const V: i32 = 35;
    pub const BAKLAVA: i32 = 36;
}

/// Checks for versions known at build time.
///
/// Prefer these over [`crate::version::VersionGate`] whenever the target
/// version is a constant: they skip classification and codename resolution.
#[derive(Debug, Clone)]
pub struct SdkLevel<P> {
    props: P,
}

impl<P: PropertySource> SdkLevel<P> {
    pub fn new(props: P) -> Self {
        Self { props }
    }

    fn api_level(&self) -> i32 {
        self.props.device_api_level()
    }

    /// True on a pre-release build whose codename sorts at or after `codename`.
    pub fn is_at_least_pre_release_codename(&self, codename: &str) -> bool {
        let device_codename = self.props.get_property(PROP_CODENAME, "");
        device_codename != RELEASE_CODENAME && device_codename.as_str() >= codename
    }

    pub fn is_at_least_r(&self) -> bool {
        self.api_level() >= VersionCodes::R
    }

    pub fn is_at_least_s(&self) -> bool {
        self.api_level() >= VersionCodes::S
    }

    pub fn is_at_least_sv2(&self) -> bool {
        self.api_level() >= VersionCodes::S_V2
    }

    pub fn is_at_least_t(&self) -> bool {
        self.api_level() >= VersionCodes::T
    }

    pub fn is_at_least_u(&self) -> bool {
        self.api_level() >= VersionCodes::U
    }

    pub fn is_at_least_v(&self) -> bool {
        self.api_level() >= VersionCodes::V
    }

    // Baklava pre-release builds report the V level. Codenames stopped sorting
    // alphabetically at Baklava, so the codename check is bounded by that level.
    pub fn is_at_least_b(&self) -> bool {
        let level = self.api_level();
        level >= VersionCodes::BAKLAVA
            || (level >= VersionCodes::V && self.is_at_least_pre_release_codename("Baklava"))
    }
}

// Conf and IO errors fall back to the default sources.
fn system() -> SdkLevel<LayeredProperties> {
    let props = props::system_properties()
        .or_else(|e| {
            warn!("system properties unavailable, using defaults: {}", e);
            DeviceConf::default().create_source()
        })
        .unwrap_or_else(|e| {
            warn!("default properties unavailable: {}", e);
            LayeredProperties::new()
        });
    SdkLevel::new(props)
}

pub fn is_at_least_r() -> bool {
    system().is_at_least_r()
}

pub fn is_at_least_s() -> bool {
    system().is_at_least_s()
}

pub fn is_at_least_sv2() -> bool {
    system().is_at_least_sv2()
}

pub fn is_at_least_t() -> bool {
    system().is_at_least_t()
}

pub fn is_at_least_u() -> bool {
    system().is_at_least_u()
}

pub fn is_at_least_v() -> bool {
    system().is_at_least_v()
}

pub fn is_at_least_b() -> bool {
    system().is_at_least_b()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::MapProperties;

    #[test]
    fn test_finalized_levels() {
        let level = SdkLevel::new(MapProperties::device(31, "REL"));
        assert!(level.is_at_least_r());
        assert!(level.is_at_least_s());
        assert!(!level.is_at_least_sv2());
        assert!(!level.is_at_least_t());
        assert!(!level.is_at_least_b());
    }

    #[test]
    fn test_unknown_level() {
        let level = SdkLevel::new(MapProperties::new());
        assert!(!level.is_at_least_r());
        assert!(!level.is_at_least_b());
    }

    #[test]
    fn test_pre_release_codename() {
        let level = SdkLevel::new(MapProperties::device(35, "Baklava"));
        assert!(level.is_at_least_v());
        assert!(level.is_at_least_b());

        let level = SdkLevel::new(MapProperties::device(34, "VanillaIceCream"));
        assert!(level.is_at_least_u());
        assert!(!level.is_at_least_v());
        // Lexicographic: "VanillaIceCream" >= "Baklava", but the level rules it out.
        assert!(level.is_at_least_pre_release_codename("Baklava"));
        assert!(!level.is_at_least_b());

        let level = SdkLevel::new(MapProperties::device(35, "REL"));
        assert!(!level.is_at_least_pre_release_codename("Baklava"));
        assert!(!level.is_at_least_b());

        let level = SdkLevel::new(MapProperties::device(36, "REL"));
        assert!(level.is_at_least_b());
    }
}
