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

use crate::props::{self, LayeredProperties, PropertySource};
use crate::version::{CodenameTable, DeviceState, KnownCodenames, Specifier};
use crate::{GateError, GateResult};
use log::{debug, warn};

/// Runtime version checks against a version only known at runtime.
///
/// Device facts are read from the property source on every call, nothing is
/// cached. Errors returned by the checks are build errors (see
/// [`GateError::is_fatal`]).
#[derive(Debug, Clone)]
pub struct VersionGate<P> {
    props: P,
    table: CodenameTable,
}

impl VersionGate<LayeredProperties> {
    /// Gate over the running system's properties.
    pub fn system() -> GateResult<Self> {
        Ok(Self::new(props::system_properties()?))
    }
}

impl<P: PropertySource> VersionGate<P> {
    pub fn new(props: P) -> Self {
        Self::with_table(props, CodenameTable::default())
    }

    pub fn with_table(props: P, table: CodenameTable) -> Self {
        Self { props, table }
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn device_state(&self) -> DeviceState {
        DeviceState::read(&self.props)
    }

    pub fn known_codenames(&self, device: &DeviceState) -> GateResult<KnownCodenames> {
        self.table.resolve(device, &self.props)
    }

    /// Whether the device's release train has reached `codename`.
    pub fn is_known_codename(&self, codename: &str) -> GateResult<bool> {
        match Specifier::parse(codename)? {
            Specifier::Codename(c) => {
                let device = self.device_state();
                Ok(self.known_codenames(&device)?.contains(&c))
            }
            Specifier::Numeric(_) => Err(GateError::NotCodename(codename.to_string())),
        }
    }

    /// Checks if the device is running `version` or newer.
    pub fn is_at_least(&self, version: &str) -> GateResult<bool> {
        let specifier = Specifier::parse(version)?;
        let device = self.device_state();

        let res = match &specifier {
            // The finalized level of a pre-release build is its base release, so
            // it is past every earlier level either way.
            Specifier::Numeric(v) => device.finalized_level >= *v,

            // A codename unknown to a release build is future work.
            Specifier::Codename(c) if device.is_release() => {
                self.check_unfinalized(&device, c)?;
                false
            }

            Specifier::Codename(c) => self.known_codenames(&device)?.contains(c),
        };

        debug!("is_at_least({}) on {}: {}", specifier, device, res);
        Ok(res)
    }

    /// Checks if the device is running `version` or older.
    pub fn is_at_most(&self, version: &str) -> GateResult<bool> {
        let specifier = Specifier::parse(version)?;
        let device = self.device_state();

        let res = match &specifier {
            Specifier::Numeric(v) if device.is_release() => device.finalized_level <= *v,

            // Several releases can be in development on top of the same finalized
            // level, and that level is already behind them, hence strict.
            Specifier::Numeric(v) => device.finalized_level < *v,

            // Mirrors is_at_least returning false, not its negation.
            Specifier::Codename(c) if device.is_release() => {
                self.check_unfinalized(&device, c)?;
                true
            }

            Specifier::Codename(c) => {
                !self.known_codenames(&device)?.contains(c) || *c == device.codename
            }
        };

        debug!("is_at_most({}) on {}: {}", specifier, device, res);
        Ok(res)
    }

    // On a release build, artifacts targeting a codename that has since been
    // finalized must be rebuilt against the integer level.
    fn check_unfinalized(&self, device: &DeviceState, codename: &str) -> GateResult<()> {
        if self.known_codenames(device)?.contains(codename) {
            warn!(
                "codename {} is finalized on device {}, rebuild against the API level",
                codename, device
            );
            return Err(GateError::KnownCodename(codename.to_string()));
        }
        Ok(())
    }
}
