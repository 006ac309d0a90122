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

//! C entry points for native callers.
//!
//! A malformed version, a null pointer or a finalized codename is a build
//! error: the panic cannot unwind across `extern "C"` and aborts the process.

use sdklevel_common::version::unbounded;
use sdklevel_common::{FatalExt, GateError};
use std::ffi::CStr;
use std::os::raw::c_char;

unsafe fn version_str<'a>(version: *const c_char) -> &'a str {
    assert!(!version.is_null(), "version must not be null");
    let bytes = CStr::from_ptr(version);
    bytes
        .to_str()
        .map_err(|e| GateError::invalid_version(bytes.to_string_lossy(), e))
        .or_fatal()
}

#[no_mangle]
pub unsafe extern "C" fn sdklevel_is_at_least(version: *const c_char) -> bool {
    unbounded::is_at_least(version_str(version))
}

#[no_mangle]
pub unsafe extern "C" fn sdklevel_is_at_most(version: *const c_char) -> bool {
    unbounded::is_at_most(version_str(version))
}

#[no_mangle]
pub unsafe extern "C" fn sdklevel_hash_string(name: *const c_char) -> i64 {
    if name.is_null() {
        return 0;
    }
    match CStr::from_ptr(name).to_str() {
        Ok(v) => sdklevel_common::hash::hash_string(v),
        Err(_) => 0,
    }
}
