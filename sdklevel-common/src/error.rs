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

use log::error;
use thiserror::Error;

pub type GateResult<T> = Result<T, GateError>;

/// Errors raised while gating on the platform version.
///
/// Everything for which [`GateError::is_fatal`] returns true is a programmer or
/// build error: the caller passed a malformed version constant, or the artifact
/// was built against a codename that has since been finalized. These must never
/// be retried or downgraded; the panicking API in [`crate::version::unbounded`]
/// turns them into process termination.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("version string must not be empty")]
    EmptyVersion,

    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("'{0}' is not a codename")]
    NotCodename(String),

    #[error(
        "artifact with a known codename {0} must be recompiled with a finalized integer version"
    )]
    KnownCodename(String),

    #[error("required platform property {0} is not set")]
    MissingProperty(String),

    #[error("configuration error: {0}")]
    Conf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Common(String),
}

impl GateError {
    pub fn invalid_version(version: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::EmptyVersion
                | Self::InvalidVersion { .. }
                | Self::NotCodename(_)
                | Self::KnownCodename(_)
                | Self::MissingProperty(_)
        )
    }
}

impl From<toml::de::Error> for GateError {
    fn from(value: toml::de::Error) -> Self {
        Self::Conf(value.to_string())
    }
}

impl From<String> for GateError {
    fn from(value: String) -> Self {
        Self::Common(value)
    }
}

impl From<&str> for GateError {
    fn from(value: &str) -> Self {
        Self::Common(value.to_string())
    }
}

/// Unwraps a gate result, terminating on error.
pub trait FatalExt<T> {
    fn or_fatal(self) -> T;
}

impl<T> FatalExt<T> for GateResult<T> {
    fn or_fatal(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                error!("{}", e);
                panic!("{}", e)
            }
        }
    }
}

#[macro_export]
macro_rules! err_msg {
    ($($arg:tt)*) => {
        $crate::error::GateError::Common(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! err_box {
    ($($arg:tt)*) => {
        Err($crate::err_msg!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(GateError::EmptyVersion.is_fatal());
        assert!(GateError::invalid_version("0", "must be positive").is_fatal());
        assert!(GateError::KnownCodename("R".to_string()).is_fatal());
        assert!(GateError::MissingProperty("ro.build.version.known_codenames".into()).is_fatal());

        assert!(!GateError::Conf("bad".to_string()).is_fatal());
        assert!(!err_msg!("oops {}", 1).is_fatal());
    }

    #[test]
    fn test_error_display() {
        let e = GateError::KnownCodename("R".to_string());
        assert_eq!(
            e.to_string(),
            "artifact with a known codename R must be recompiled with a finalized integer version"
        );

        let e = GateError::invalid_version("3x", "trailing characters");
        assert_eq!(e.to_string(), "invalid version '3x': trailing characters");
    }

    #[test]
    fn test_err_box() {
        fn fail() -> GateResult<()> {
            err_box!("failed at {}", "step")
        }
        assert_eq!(fail().unwrap_err().to_string(), "failed at step");
    }

    #[test]
    #[should_panic(expected = "version string must not be empty")]
    fn test_or_fatal_panics() {
        let r: GateResult<bool> = Err(GateError::EmptyVersion);
        r.or_fatal();
    }
}
