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

#[cfg(test)]
mod tests {
    use sdklevel_common::props::MapProperties;
    use sdklevel_common::version::{unbounded, SdkLevel, VersionCodes, VersionGate};
    use sdklevel_common::GateError;

    fn release(level: i32) -> VersionGate<MapProperties> {
        VersionGate::new(MapProperties::device(level, "REL"))
    }

    fn pre_release(level: i32, codename: &str) -> VersionGate<MapProperties> {
        VersionGate::new(MapProperties::device(level, codename))
    }

    #[test]
    fn test_release_device_numeric_range() {
        for m in 1..=40 {
            let gate = release(m);
            for n in 1..=40 {
                let at_least = gate.is_at_least(&n.to_string()).unwrap();
                let at_most = gate.is_at_most(&n.to_string()).unwrap();
                assert_eq!(at_least, n <= m, "is_at_least({}) on {}", n, m);
                assert_eq!(at_most, m <= n, "is_at_most({}) on {}", n, m);
            }
        }
    }

    #[test]
    fn test_release_device_at_30() {
        let gate = release(30);
        assert!(gate.is_at_least("29").unwrap());
        assert!(!gate.is_at_least("31").unwrap());
        assert!(gate.is_at_most("30").unwrap());
        assert!(!gate.is_at_most("29").unwrap());
    }

    #[test]
    fn test_release_device_codenames() {
        let gate = release(31);
        assert!(gate.is_known_codename("R").unwrap());
        assert!(!gate.is_known_codename("T").unwrap());

        let err = gate.is_at_least("R").unwrap_err();
        assert!(matches!(err, GateError::KnownCodename(ref c) if c == "R"));
        assert!(err.is_fatal());

        assert!(!gate.is_at_least("Z").unwrap());
        // Unknown codenames are not the negation of is_at_least on release builds.
        assert!(gate.is_at_most("Z").unwrap());
    }

    #[test]
    fn test_pre_release_device() {
        let gate = pre_release(30, "S");
        assert!(gate.is_at_least("S").unwrap());
        assert!(!gate.is_at_least("T").unwrap());
        assert!(gate.is_at_least("30").unwrap());
        assert!(!gate.is_at_most("30").unwrap());
    }

    #[test]
    fn test_known_codenames_after_cutover() {
        let props = MapProperties::device(VersionCodes::U, "REL")
            .with_known_codenames("Q,R,S,Sv2,Tiramisu,UpsideDownCake");
        let gate = VersionGate::new(props);

        assert!(matches!(
            gate.is_at_least("Tiramisu"),
            Err(GateError::KnownCodename(_))
        ));
        assert!(!gate.is_at_least("VanillaIceCream").unwrap());
        assert!(gate.is_at_least("34").unwrap());

        let gate = release(VersionCodes::U);
        assert!(matches!(
            gate.is_at_most("VanillaIceCream"),
            Err(GateError::MissingProperty(_))
        ));
    }

    #[test]
    fn test_fast_paths_agree_with_gate() {
        let cases = [
            (VersionCodes::R, "REL"),
            (VersionCodes::S, "REL"),
            (VersionCodes::S, "Sv2"),
            (VersionCodes::S_V2, "Tiramisu"),
            (VersionCodes::T, "REL"),
            (VersionCodes::V, "REL"),
        ];

        for (level, codename) in cases {
            let props = MapProperties::device(level, codename);
            let fast = SdkLevel::new(&props);
            let gate = VersionGate::new(&props);

            assert_eq!(fast.is_at_least_r(), gate.is_at_least("30").unwrap());
            assert_eq!(fast.is_at_least_s(), gate.is_at_least("31").unwrap());
            assert_eq!(fast.is_at_least_sv2(), gate.is_at_least("32").unwrap());
            assert_eq!(fast.is_at_least_t(), gate.is_at_least("33").unwrap());
            assert_eq!(fast.is_at_least_u(), gate.is_at_least("34").unwrap());
            assert_eq!(fast.is_at_least_v(), gate.is_at_least("35").unwrap());
        }
    }

    #[test]
    fn test_baklava_fast_path_agrees_with_gate() {
        let props = MapProperties::device(VersionCodes::V, "Baklava")
            .with_known_codenames("Q,R,S,Sv2,Tiramisu,UpsideDownCake,VanillaIceCream,Baklava");
        assert!(SdkLevel::new(&props).is_at_least_b());
        assert!(VersionGate::new(&props).is_at_least("Baklava").unwrap());

        let props = MapProperties::device(VersionCodes::BAKLAVA, "REL");
        assert!(SdkLevel::new(&props).is_at_least_b());
        assert!(VersionGate::new(&props).is_at_least("36").unwrap());
    }

    #[test]
    #[should_panic]
    fn test_finalized_codename_terminates() {
        unbounded::is_at_least_with(&release(31), "R");
    }
}
