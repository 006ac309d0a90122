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


#[cfg(test)]
mod tests {
    use sdklevel_common::conf::GateConf;
    use sdklevel_common::version::sdk_level;
    use std::fs;

    // Runs in its own test binary: it owns the process environment.
    #[test]
    fn test_malformed_conf_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let conf_file = dir.path().join("broken.toml");
        fs::write(&conf_file, "[device\nprop_file = ").unwrap();

        std::env::set_var(GateConf::ENV_CONF_FILE, &conf_file);
        std::env::set_var("RO_BUILD_VERSION_SDK", "33");
        std::env::set_var("RO_BUILD_VERSION_CODENAME", "REL");
        assert!(GateConf::from_env().is_err());

        assert!(sdk_level::is_at_least_t());
        assert!(!sdk_level::is_at_least_u());

        std::env::set_var(GateConf::ENV_CONF_FILE, dir.path().join("absent.toml"));
        assert!(sdk_level::is_at_least_s());
        assert!(!sdk_level::is_at_least_b());

        std::env::remove_var(GateConf::ENV_CONF_FILE);
    }
}
