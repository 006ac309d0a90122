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

#![allow(clippy::missing_safety_doc)]

pub mod expresslog;
pub mod native;

use jni::sys::{jint, JNI_ERR, JNI_VERSION_1_4};
use jni::JavaVM;
use log::{error, warn};
use sdklevel_common::conf::GateConf;
use sdklevel_common::utils::Logger;
use sdklevel_common::GateResult;
use std::os::raw::c_void;

fn init_logger(conf: GateResult<GateConf>) -> GateResult<()> {
    Logger::init(conf?.log)
}

#[no_mangle]
pub extern "system" fn JNI_OnLoad(vm: JavaVM, _reserved: *mut c_void) -> jint {
    if let Err(e) = init_logger(GateConf::from_env()) {
        eprintln!("sdklevel: logger init failed: {}", e);
        warn!("logger init failed: {}", e);
    }

    let mut env = match vm.get_env() {
        Ok(env) => env,
        Err(e) => {
            error!("GetEnv failed: {}", e);
            return JNI_ERR;
        }
    };

    match expresslog::register_utils(&mut env) {
        Ok(_) => JNI_VERSION_1_4,
        Err(e) => {
            error!("jni expresslog registration failure: {}", e);
            JNI_ERR
        }
    }
}
