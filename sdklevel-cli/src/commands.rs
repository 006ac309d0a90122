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

use clap::Subcommand;
use sdklevel_common::hash;
use sdklevel_common::props::PropertySource;
use sdklevel_common::version::{self, VersionGate};
use sdklevel_common::GateResult;
use serde_json::json;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether the device runs the given version or newer
    AtLeast {
        /// API level (e.g. 33) or codename (e.g. UpsideDownCake)
        version: String,
    },

    /// Check whether the device runs the given version or older
    AtMost {
        /// API level (e.g. 33) or codename (e.g. UpsideDownCake)
        version: String,
    },

    /// Show the device's version facts
    Device {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Print the expresslog hash of a metric name
    Hash { name: String },

    /// Show cli version
    Version,
}

impl Commands {
    pub fn execute<P: PropertySource>(&self, gate: &VersionGate<P>) -> GateResult<()> {
        match self {
            Commands::AtLeast { version } => {
                println!("{}", gate.is_at_least(version)?);
            }

            Commands::AtMost { version } => {
                println!("{}", gate.is_at_most(version)?);
            }

            Commands::Device { json } => {
                let device = gate.device_state();
                let known = gate
                    .known_codenames(&device)
                    .map(|v| v.iter().map(String::from).collect::<Vec<_>>());

                if *json {
                    let known = match &known {
                        Ok(v) => json!(v),
                        Err(e) => json!({ "error": e.to_string() }),
                    };
                    let value = json!({
                        "api_level": device.finalized_level,
                        "codename": device.codename,
                        "release": device.is_release(),
                        "known_codenames": known,
                    });
                    println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
                } else {
                    println!("api level:       {}", device.finalized_level);
                    println!("codename:        {}", device.codename);
                    println!("release:         {}", device.is_release());
                    match known {
                        Ok(v) => println!("known codenames: {}", v.join(",")),
                        Err(e) => println!("known codenames: <{}>", e),
                    }
                }
            }

            Commands::Hash { name } => {
                println!("{}", hash::hash_string(name));
            }

            Commands::Version => {
                println!("sdklevel {}", version::VERSION);
            }
        }

        Ok(())
    }
}
