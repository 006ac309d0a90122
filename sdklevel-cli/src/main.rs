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

mod commands;

use clap::Parser;
use commands::Commands;
use log::debug;
use sdklevel_common::conf::GateConf;
use sdklevel_common::utils::Logger;
use sdklevel_common::version::{self, VersionGate};
use sdklevel_common::GateResult;

#[derive(Parser, Debug)]
#[command(author, version = version::VERSION, about, long_about = None)]
pub struct SdkLevelArgs {
    /// Configuration file path (optional)
    #[arg(
        short,
        long,
        help = "Configuration file path (optional)",
        global = true
    )]
    pub conf: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl SdkLevelArgs {
    pub fn get_conf(&self) -> GateResult<GateConf> {
        match &self.conf {
            Some(path) => GateConf::from(path),
            None => GateConf::from_env(),
        }
    }
}

fn main() -> GateResult<()> {
    let args = SdkLevelArgs::parse();

    let conf = args.get_conf()?;
    Logger::init(conf.log.clone())?;
    debug!("conf: {:?}", conf);

    let gate = VersionGate::new(conf.device.create_source()?);
    let result = args.command.execute(&gate);

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }

    result
}
