//! Unit and file-based tests for sc-profile.

const PROFILES_JSON: &str = r#"{
  "Normal": {
    "emeraldST": [
      { "name": "E1", "time": 0,   "interval": 60 },
      { "name": "E2", "time": 120, "interval": 30 },
      { "name": "E3", "time": 240, "interval": 15 }
    ],
    "diamondST": [
      { "name": "D1", "time": 0,   "interval": 90 },
      { "name": "D2", "time": 300, "interval": 45 }
    ]
  },
  "Easy": {
    "emeraldST": [ { "name": "E1", "time": 0, "interval": 30 } ],
    "diamondST": [ { "name": "D1", "time": 0, "interval": 60 } ]
  }
}"#;

const PROFILES_CSV: &str = "\
profile,resource,name,time,interval\n\
Normal,emerald,E1,0,60\n\
Normal,emerald,E2,120,30\n\
Normal,diamond,D1,0,90\n\
Easy,Emerald,E1,0,30\n\
Easy,diamond,D1,0,60\n\
Normal,emerald,E3,240,15\n\
Normal,diamond,D2,300,45\n\
";

// ── Resource / ProfileSet ─────────────────────────────────────────────────────

#[cfg(test)]
mod profile {
    use sc_core::ConfigErrorKind;
    use sc_table::{SpawnRow, SpawnTable};

    use crate::{ProfileSet, Resource, SpawnProfile};

    fn single(interval: u64) -> SpawnTable {
        SpawnTable::new(vec![SpawnRow::new("r", 0, interval).unwrap()]).unwrap()
    }

    fn profile(name: &str) -> SpawnProfile {
        SpawnProfile::new(name, single(10), single(20))
    }

    #[test]
    fn labels_singular_and_plural() {
        assert_eq!(Resource::Emerald.label(1), "Emerald");
        assert_eq!(Resource::Emerald.label(0), "Emeralds");
        assert_eq!(Resource::Diamond.label(1), "Diamond");
        assert_eq!(Resource::Diamond.label(7), "Diamonds");
    }

    #[test]
    fn csv_names_parse() {
        assert_eq!(Resource::from_csv_name(" DIAMOND "), Some(Resource::Diamond));
        assert_eq!(Resource::from_csv_name("emerald"), Some(Resource::Emerald));
        assert_eq!(Resource::from_csv_name("gold"), None);
    }

    #[test]
    fn table_by_resource() {
        let p = profile("x");
        assert_eq!(p.table(Resource::Emerald).rows()[0].interval(), 10);
        assert_eq!(p.table(Resource::Diamond).rows()[0].interval(), 20);
    }

    #[test]
    fn set_sorted_by_name() {
        let set = ProfileSet::new(vec![profile("b"), profile("c"), profile("a")]).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(set.first().name(), "a");
        assert_eq!(set.position("c"), Some(2));
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn empty_set_rejected() {
        let err = ProfileSet::new(vec![]).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::NoProfiles);
    }
}

// ── JSON loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod json {
    use std::io::Cursor;
    use std::io::Write;

    use sc_core::ConfigErrorKind;

    use super::PROFILES_JSON;
    use crate::{load_profiles_json, load_profiles_reader, profiles_from_str, ProfileError, Resource};

    fn config_err(json: &str) -> sc_core::ConfigError {
        match profiles_from_str(json) {
            Err(ProfileError::Config(e)) => e,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn loads_and_sorts() {
        let set = profiles_from_str(PROFILES_JSON).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), ["Easy", "Normal"]);

        let normal = set.get("Normal").unwrap();
        assert_eq!(normal.table(Resource::Emerald).len(), 3);
        assert_eq!(normal.table(Resource::Diamond).len(), 2);
        assert_eq!(normal.table(Resource::Emerald).num_spawns(239), 5);
    }

    #[test]
    fn reader_and_file_agree() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("profiles.json");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(PROFILES_JSON.as_bytes()))
            .unwrap();

        let from_file = load_profiles_json(&path).unwrap();
        let from_reader = load_profiles_reader(Cursor::new(PROFILES_JSON)).unwrap();
        assert_eq!(
            from_file.names().collect::<Vec<_>>(),
            from_reader.names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_profiles_json(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }

    #[test]
    fn start_times_normalized_on_load() {
        let set = profiles_from_str(
            r#"{ "p": {
                "emeraldST": [ { "name": "a", "time": 0, "interval": 60 },
                               { "name": "b", "time": 100, "interval": 30 } ],
                "diamondST": [ { "name": "a", "time": 0, "interval": 60 } ] } }"#,
        )
        .unwrap();
        let rows = set.first().table(Resource::Emerald).rows();
        assert_eq!(rows[1].time(), 120);
    }

    #[test]
    fn table_error_names_profile_and_row() {
        let err = config_err(
            r#"{ "Hard": {
                "emeraldST": [ { "name": "a", "time": 0, "interval": 30 },
                               { "name": "b", "time": 10, "interval": 60 } ],
                "diamondST": [ { "name": "a", "time": 0, "interval": 60 } ] } }"#,
        );
        assert_eq!(err.kind, ConfigErrorKind::IntervalsNotDecreasing);
        assert_eq!(err.profile.as_deref(), Some("Hard"));
        assert_eq!(err.row.as_deref(), Some("b"));
        assert!(err.to_string().contains("Profile: Hard"));
    }

    #[test]
    fn negative_time_is_config_error() {
        let err = config_err(
            r#"{ "p": {
                "emeraldST": [ { "name": "neg", "time": -5, "interval": 30 } ],
                "diamondST": [ { "name": "a", "time": 0, "interval": 60 } ] } }"#,
        );
        assert_eq!(err.kind, ConfigErrorKind::NegativeTime);
        assert_eq!(err.row.as_deref(), Some("neg"));
    }

    #[test]
    fn zero_interval_is_config_error() {
        let err = config_err(
            r#"{ "p": {
                "emeraldST": [ { "name": "a", "time": 0, "interval": 30 } ],
                "diamondST": [ { "name": "zero", "time": 0, "interval": 0 } ] } }"#,
        );
        assert_eq!(err.kind, ConfigErrorKind::ZeroInterval);
    }

    #[test]
    fn missing_table() {
        let err = config_err(
            r#"{ "p": { "emeraldST": [ { "name": "a", "time": 0, "interval": 30 } ] } }"#,
        );
        assert_eq!(err.kind, ConfigErrorKind::MissingTable);
        assert_eq!(err.profile.as_deref(), Some("p"));
    }

    #[test]
    fn empty_table() {
        let err = config_err(
            r#"{ "p": { "emeraldST": [],
                        "diamondST": [ { "name": "a", "time": 0, "interval": 60 } ] } }"#,
        );
        assert_eq!(err.kind, ConfigErrorKind::EmptyTable);
    }

    #[test]
    fn empty_root_rejected() {
        assert_eq!(config_err("{}").kind, ConfigErrorKind::NoProfiles);
    }

    #[test]
    fn fractional_time_is_decode_error() {
        let err = profiles_from_str(
            r#"{ "p": {
                "emeraldST": [ { "name": "a", "time": 0.5, "interval": 30 } ],
                "diamondST": [ { "name": "a", "time": 0, "interval": 60 } ] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
    }

    #[test]
    fn non_object_root_is_decode_error() {
        assert!(matches!(profiles_from_str("[]").unwrap_err(), ProfileError::Json(_)));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use std::io::Cursor;

    use sc_core::ConfigErrorKind;

    use super::{PROFILES_CSV, PROFILES_JSON};
    use crate::{load_profiles_csv, load_profiles_csv_reader, profiles_from_str, ProfileError, Resource};

    #[test]
    fn csv_matches_json() {
        let from_csv = load_profiles_csv_reader(Cursor::new(PROFILES_CSV)).unwrap();
        let from_json = profiles_from_str(PROFILES_JSON).unwrap();
        for (a, b) in from_csv.iter().zip(from_json.iter()) {
            assert_eq!(a.name(), b.name());
            for r in Resource::ALL {
                assert_eq!(a.table(r), b.table(r));
            }
        }
        assert_eq!(from_csv.len(), from_json.len());
    }

    #[test]
    fn csv_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, PROFILES_CSV).unwrap();
        let set = load_profiles_csv(&path).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn unknown_resource() {
        let csv = "profile,resource,name,time,interval\np,gold,g1,0,10\n";
        match load_profiles_csv_reader(Cursor::new(csv)) {
            Err(ProfileError::Config(e)) => {
                assert_eq!(e.kind, ConfigErrorKind::UnknownResource);
                assert_eq!(e.profile.as_deref(), Some("p"));
                assert_eq!(e.row.as_deref(), Some("g1"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_resource_table() {
        let csv = "profile,resource,name,time,interval\np,emerald,e1,0,10\n";
        match load_profiles_csv_reader(Cursor::new(csv)) {
            Err(ProfileError::Config(e)) => assert_eq!(e.kind, ConfigErrorKind::MissingTable),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn bad_number_is_csv_error() {
        let csv = "profile,resource,name,time,interval\np,emerald,e1,zero,10\n";
        assert!(matches!(
            load_profiles_csv_reader(Cursor::new(csv)).unwrap_err(),
            ProfileError::Csv(_)
        ));
    }

    #[test]
    fn header_only_rejected() {
        let csv = "profile,resource,name,time,interval\n";
        match load_profiles_csv_reader(Cursor::new(csv)) {
            Err(ProfileError::Config(e)) => assert_eq!(e.kind, ConfigErrorKind::NoProfiles),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
