//! End-to-end registry tests: build from definitions, resolve codecs, and
//! exercise the resolved codecs against real records.

use std::sync::Arc;
use std::thread;

use apache_avro::types::Value;
use schema_registry::definition::builtin;
use schema_registry::{AvroCompiler, SchemaDefinition, SchemaError, SchemaRegistry};

fn parcel_registry() -> SchemaRegistry {
    SchemaRegistry::build(builtin::parcel_event(), &AvroCompiler).unwrap()
}

#[test]
fn v1_and_v2_resolve_to_distinct_codecs() {
    let registry = parcel_registry();

    let v1 = registry.resolve("parcelEvent", "v1").unwrap();
    assert_eq!(v1.field_count(), Some(4));
    assert!(!v1.field_names().contains(&"Weight"));

    let v2 = registry.resolve("parcelEvent", "v2").unwrap();
    assert_eq!(v2.field_count(), Some(5));
    assert!(v2.field_names().contains(&"Weight"));

    assert_ne!(v1.fingerprint(), v2.fingerprint());
}

#[test]
fn resolved_v2_codec_round_trips_a_record() {
    let registry = parcel_registry();
    let codec = registry.resolve("parcelEvent", "v2").unwrap();

    let record = Value::Record(vec![
        ("ID".into(), Value::String("evt-7".into())),
        ("ParcelNumber".into(), Value::String("PN-100".into())),
        ("CreatedAt".into(), Value::String("2024-03-01T09:00:00Z".into())),
        ("UpdatedAt".into(), Value::String("2024-03-02T10:30:00Z".into())),
        ("Weight".into(), Value::Double(2.5)),
    ]);

    let bytes = codec.encode(record.clone()).unwrap();
    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn unknown_version_is_isolated() {
    let registry = parcel_registry();
    let err = registry.resolve("parcelEvent", "v3").unwrap_err();
    assert!(matches!(err, SchemaError::UnknownVersion { .. }));

    // v1 and v2 are unaffected by the failed lookup.
    assert!(registry.resolve("parcelEvent", "v1").is_ok());
    assert!(registry.resolve("parcelEvent", "v2").is_ok());
}

#[test]
fn unknown_entity_is_isolated() {
    let registry = parcel_registry();
    let err = registry.resolve("shipmentEvent", "v1").unwrap_err();
    assert!(matches!(err, SchemaError::UnknownEntity { .. }));
}

#[test]
fn malformed_definition_fails_the_whole_build() {
    let mut defs = builtin::parcel_event();
    defs.push(SchemaDefinition::new(
        "shipmentEvent",
        "v1",
        serde_json::json!({"type": "record"}),
    ));

    let result = SchemaRegistry::build(defs, &AvroCompiler);
    match result {
        Err(SchemaError::Compilation { entity, version, .. }) => {
            assert_eq!(entity, "shipmentEvent");
            assert_eq!(version, "v1");
        }
        Err(other) => panic!("expected Compilation error, got {other}"),
        Ok(_) => panic!("build should have failed"),
    }
}

#[test]
fn concurrent_resolution_agrees_with_single_threaded() {
    let registry = Arc::new(parcel_registry());

    let expected_v1 = registry.resolve("parcelEvent", "v1").unwrap().fingerprint().clone();
    let expected_v2 = registry.resolve("parcelEvent", "v2").unwrap().fingerprint().clone();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let expected_v1 = expected_v1.clone();
            let expected_v2 = expected_v2.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let v1 = registry.resolve("parcelEvent", "v1").unwrap();
                    assert_eq!(v1.fingerprint(), &expected_v1);

                    let v2 = registry.resolve("parcelEvent", "v2").unwrap();
                    assert_eq!(v2.fingerprint(), &expected_v2);

                    if i % 2 == 0 {
                        assert!(matches!(
                            registry.resolve("parcelEvent", "v3"),
                            Err(SchemaError::UnknownVersion { .. })
                        ));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn definitions_loaded_from_disk_build_the_same_registry() {
    let dir = tempfile::tempdir().unwrap();
    let entity_dir = dir.path().join("parcelEvent");
    std::fs::create_dir(&entity_dir).unwrap();
    for def in builtin::parcel_event() {
        std::fs::write(entity_dir.join(format!("{}.avsc", def.version)), def.raw()).unwrap();
    }

    let defs = schema_registry::definition::load_dir(dir.path()).unwrap();
    let from_disk = SchemaRegistry::build(defs, &AvroCompiler).unwrap();
    let from_builtin = parcel_registry();

    for version in ["v1", "v2"] {
        assert_eq!(
            from_disk.resolve("parcelEvent", version).unwrap().fingerprint(),
            from_builtin.resolve("parcelEvent", version).unwrap().fingerprint(),
        );
    }
}
