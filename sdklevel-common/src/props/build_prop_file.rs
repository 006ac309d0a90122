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
use crate::GateResult;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Properties parsed from a `build.prop` style file.
///
/// One `key=value` per line. Blank lines, `#` comments and lines without `=`
/// (such as `import` directives) are skipped. A later definition of a key
/// overrides an earlier one. Values are not length limited, which matters for
/// `ro.build.version.known_codenames`.
#[derive(Debug, Clone, Default)]
pub struct BuildPropFile {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl BuildPropFile {
    pub const DEFAULT_PATH: &'static str = "/system/build.prop";

    pub fn load(path: impl AsRef<Path>) -> GateResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut file = Self::parse(&content);
        debug!(
            "loaded {} properties from {}",
            file.values.len(),
            path.display()
        );
        file.path = Some(path.to_path_buf());
        Ok(file)
    }

    pub fn parse(content: &str) -> Self {
        let mut values = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) => {
                    values.insert(key.trim().to_string(), value.trim().to_string());
                }
                None => debug!("skip build.prop line: {}", line),
            }
        }

        Self { path: None, values }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySource for BuildPropFile {
    fn find(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
