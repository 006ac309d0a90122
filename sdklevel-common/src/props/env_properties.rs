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

/// Reads properties from environment variables.
///
/// `ro.build.version.sdk` is looked up as `RO_BUILD_VERSION_SDK`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProperties;

impl EnvProperties {
    pub fn new() -> Self {
        Self
    }

    pub fn env_key(key: &str) -> String {
        key.chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect()
    }
}

impl PropertySource for EnvProperties {
    fn find(&self, key: &str) -> Option<String> {
        std::env::var(Self::env_key(key)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key() {
        assert_eq!(
            EnvProperties::env_key("ro.build.version.sdk"),
            "RO_BUILD_VERSION_SDK"
        );
        assert_eq!(
            EnvProperties::env_key("ro.build.version.known_codenames"),
            "RO_BUILD_VERSION_KNOWN_CODENAMES"
        );
        assert_eq!(EnvProperties::env_key("a-b.c"), "A_B_C");
    }

    #[test]
    fn test_env_lookup() {
        std::env::set_var("SDKLEVEL_ENV_PROPS_TEST", "Tiramisu");
        let props = EnvProperties::new();
        assert_eq!(
            props.find("sdklevel.env_props.test"),
            Some("Tiramisu".to_string())
        );
        assert_eq!(props.find("sdklevel.env_props.absent"), None);
    }
}
