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

//! Platform version gating.
//!
//! Checks whether the running device is at least, or at most, a given platform
//! version. A version is either a finalized API level (`"33"`) or the codename
//! of a release still in development (`"UpsideDownCake"`).
//!
//! # Release train
//!
//! Exactly one codename is in flight at a time. A pre-release build reports the
//! finalized level it is based on, plus its codename. A release build reports
//! the codename `REL`. Each device knows the codenames of its own release train:
//! a fixed table for older levels, `ro.build.version.known_codenames` from T on.
//!
//! # Example
//!
//! ```rust
//! use sdklevel_common::props::MapProperties;
//! use sdklevel_common::version::VersionGate;
//!
//! let gate = VersionGate::new(MapProperties::device(30, "S"));
//!
//! assert!(gate.is_at_least("30").unwrap());
//! assert!(gate.is_at_least("S").unwrap());
//! assert!(!gate.is_at_most("30").unwrap());
//! ```

mod checker;
mod codenames;
pub mod sdk_level;
mod types;
pub mod unbounded;

pub use checker::VersionGate;
pub use codenames::{CodenameTable, KnownCodenames, PREVIOUS_CODENAMES};
pub use sdk_level::{SdkLevel, VersionCodes};
pub use types::{DeviceState, Specifier, RELEASE_CODENAME};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
