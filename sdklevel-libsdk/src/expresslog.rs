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

//! Native methods of `com.android.modules.expresslog.Utils`.

use jni::errors::Result as JniResult;
use jni::objects::{JClass, JString};
use jni::sys::jlong;
use jni::{JNIEnv, NativeMethod};
use log::{debug, error};
use sdklevel_common::hash;
use std::os::raw::c_void;

pub const UTILS_CLASS_NAME: &str = "com/android/modules/expresslog/Utils";

pub const HASH_STRING_NAME: &str = "hashString";
pub const HASH_STRING_SIG: &str = "(Ljava/lang/String;)J";

/// `static native long hashString(String name)`
///
/// Hashes the bytes the VM hands out for the string, which are UTF-8 for any
/// string without NUL or supplementary characters. Returns 0 when the string
/// is null or cannot be read.
#[no_mangle]
pub extern "system" fn Java_com_android_modules_expresslog_Utils_hashString<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    name: JString<'local>,
) -> jlong {
    if name.is_null() {
        return 0;
    }

    match env.get_string(&name) {
        Ok(chars) => hash::fingerprint64(chars.to_bytes()) as jlong,
        Err(e) => {
            debug!("hashString: unreadable string: {}", e);
            0
        }
    }
}

pub fn register_utils(env: &mut JNIEnv) -> JniResult<()> {
    let utils = env.find_class(UTILS_CLASS_NAME).map_err(|e| {
        error!("class not found '{}'", UTILS_CLASS_NAME);
        e
    })?;

    env.register_native_methods(&utils, &native_methods())?;
    debug!("registered natives of {}", UTILS_CLASS_NAME);
    Ok(())
}

fn native_methods() -> Vec<NativeMethod> {
    vec![NativeMethod {
        name: HASH_STRING_NAME.into(),
        sig: HASH_STRING_SIG.into(),
        fn_ptr: Java_com_android_modules_expresslog_Utils_hashString as *mut c_void,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_methods() {
        let methods = native_methods();
        assert_eq!(methods.len(), 1);
        assert!(!methods[0].fn_ptr.is_null());
    }

    #[test]
    fn test_jni_names() {
        // Exported symbol must match the class and method it implements.
        let symbol = format!(
            "Java_{}_{}",
            UTILS_CLASS_NAME.replace('/', "_"),
            HASH_STRING_NAME
        );
        assert_eq!(
            symbol,
            "Java_com_android_modules_expresslog_Utils_hashString"
        );
        assert!(HASH_STRING_SIG.ends_with(")J"));
    }
}
