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

use crate::conf::LogConf;
use crate::{err_msg, GateResult};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LogConf> = OnceCell::new();

/// Process wide logging setup.
///
/// Library code logs through the `log` facade; records are forwarded into a
/// `tracing` fmt subscriber writing to stderr.
pub struct Logger;

impl Logger {
    /// Installs the global subscriber. Only the first call has any effect.
    pub fn init(conf: LogConf) -> GateResult<()> {
        LOGGER.get_or_try_init(|| {
            let level = conf.max_level()?;

            tracing_log::LogTracer::init().map_err(|e| err_msg!("init log tracer: {}", e))?;

            let subscriber = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(conf.ansi)
                .with_thread_names(conf.display_thread)
                .with_target(conf.display_target)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| err_msg!("set global subscriber: {}", e))?;

            Ok::<LogConf, crate::GateError>(conf)
        })?;

        Ok(())
    }

    pub fn conf() -> Option<&'static LogConf> {
        LOGGER.get()
    }
}
