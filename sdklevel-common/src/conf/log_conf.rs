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

use crate::{err_box, GateResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConf {
    // One of trace, debug, info, warn, error.
    pub level: String,

    pub ansi: bool,

    pub display_thread: bool,

    pub display_target: bool,
}

impl LogConf {
    pub fn max_level(&self) -> GateResult<Level> {
        match Level::from_str(self.level.trim()) {
            Ok(v) => Ok(v),
            Err(_) => err_box!("invalid log level: {}", self.level),
        }
    }
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: false,
            display_thread: false,
            display_target: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        let mut conf = LogConf::default();
        assert_eq!(conf.max_level().unwrap(), Level::INFO);

        conf.level = "DEBUG".to_string();
        assert_eq!(conf.max_level().unwrap(), Level::DEBUG);

        conf.level = "verbose".to_string();
        assert!(conf.max_level().is_err());
    }
}
