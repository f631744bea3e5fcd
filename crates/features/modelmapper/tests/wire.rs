use bitsd_domain::{RawRecord, Status};
use bitsd_modelmapper::json::{decode, decode_value};
use bitsd_modelmapper::{
    ArrayTemperatureEvent, ContentPolicy, Event, MapperError, RawEnvelope, RawSnapshot, Snapshot,
};
use serde_json::json;

fn latest_data() -> serde_json::Value {
    json!({
        "status": { "value": "open", "modifiedby": "BITS", "timestamp": 1_380_000_000_000_i64 },
        "tempint": { "value": 22.5, "sensor": 0, "modifiedby": "BITS", "timestamp": 1_380_000_300_000_i64 },
        "version": 3,
        "tempinthist": [
            { "value": 22.5, "sensor": 0, "timestamp": 300 },
            { "value": 22.0, "sensor": 0, "timestamp": 200 },
            { "value": 21.5, "sensor": 0, "timestamp": 100 }
        ]
    })
}

#[test]
fn wrapped_temperature_is_unwrapped() {
    let envelope: RawEnvelope =
        decode(r#"{"tempint": {"value": 19.5, "sensor": 2, "timestamp": 5000}}"#).unwrap();
    let event = Event::create(&envelope).unwrap();

    assert_eq!(event.kind(), "tempint");
    let Event::Temperature(sample) = event else { panic!("expected a temperature event") };
    assert_eq!(sample.temperature_f64(), 19.5);
    assert_eq!(sample.when().epoch_millis(), 5000);
}

#[test]
fn wrapped_status_and_message_are_unwrapped() {
    let status: RawEnvelope = decode_value(json!({
        "status": { "value": "closed", "modifiedby": "BITS", "timestamp": 1 }
    }))
    .unwrap();
    assert!(matches!(Event::create(&status), Ok(Event::Status(s)) if s.status() == Status::Closed));

    let message: RawEnvelope = decode_value(json!({
        "msg": { "value": "ciao", "user": "stefano", "timestamp": 2 }
    }))
    .unwrap();
    let Ok(Event::Message(m)) = Event::create(&message) else { panic!("expected a message event") };
    assert_eq!(m.text(), Some("ciao"));
}

#[test]
fn unknown_or_ambiguous_envelopes_are_rejected() {
    let unknown: RawEnvelope = decode_value(json!({ "door": { "value": 1 } })).unwrap();
    let err = Event::create(&unknown).unwrap_err();
    assert_eq!(err.reason(), Some("unknown record kind `door`"));

    let ambiguous: RawEnvelope = decode_value(json!({
        "status": { "value": "open", "modifiedby": "BITS", "timestamp": 1 },
        "msg": { "value": "hi", "user": "a", "timestamp": 1 }
    }))
    .unwrap();
    let err = Event::create(&ambiguous).unwrap_err();
    assert_eq!(err.field(), Some("<envelope>"));
}

#[test]
fn envelope_forwards_content_policy() {
    let envelope = RawEnvelope::wrap(
        "msg",
        RawRecord::new().with("value", 7).with("user", "a").with("timestamp", 1),
    );
    assert!(Event::create(&envelope).is_ok());
    assert!(Event::create_with(&envelope, ContentPolicy::RequireText).is_err());
}

#[test]
fn events_serialize_tagged_by_kind() {
    let envelope: RawEnvelope = decode_value(json!({
        "status": { "value": 1, "modifiedby": "BITS", "timestamp": 1000 }
    }))
    .unwrap();
    let event = Event::create(&envelope).unwrap();

    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({
            "kind": "status",
            "event": { "status": "open", "from": { "name": "BITS" }, "when": 1000 }
        })
    );
}

#[test]
fn snapshot_maps_every_member() {
    let raw: RawSnapshot = decode_value(latest_data()).unwrap();
    let snapshot = Snapshot::create(&raw).unwrap();

    assert_eq!(snapshot.status().status(), Status::Open);
    assert_eq!(snapshot.temperature().temperature_f64(), 22.5);
    assert_eq!(snapshot.version(), 3);
    assert!(snapshot.message().is_none());

    let history: Vec<i64> = snapshot.history().iter().map(|e| e.when().epoch_millis()).collect();
    assert_eq!(history, [100, 200, 300]);

    let direct = ArrayTemperatureEvent::create(raw.tempinthist.as_deref().unwrap()).unwrap();
    assert_eq!(snapshot.history(), direct.as_slice());
}

#[test]
fn snapshot_accepts_null_message() {
    let mut doc = latest_data();
    doc["msg"] = serde_json::Value::Null;
    let snapshot = Snapshot::create(&decode_value(doc).unwrap()).unwrap();
    assert!(snapshot.message().is_none());

    let mut doc = latest_data();
    doc["msg"] = json!({ "value": "back at 6", "user": "alice", "timestamp": 9 });
    let snapshot = Snapshot::create(&decode_value(doc).unwrap()).unwrap();
    assert_eq!(snapshot.message().and_then(|m| m.text()), Some("back at 6"));
}

#[test]
fn snapshot_history_errors_keep_both_locations() {
    let mut doc = latest_data();
    doc["tempinthist"][2]["sensor"] = json!("kitchen");
    let err = Snapshot::create(&decode_value(doc).unwrap()).unwrap_err();

    assert_eq!(err.field(), Some("sensor"));
    assert_eq!(err.context_str(), Some("tempinthist: temperature record 2"));
}

#[test]
fn snapshot_requires_version() {
    let mut doc = latest_data();
    doc.as_object_mut().unwrap().remove("version");
    let err = Snapshot::create(&decode_value(doc).unwrap()).unwrap_err();
    assert_eq!(err.field(), Some("version"));

    let mut doc = latest_data();
    doc["version"] = json!("v3");
    let err = Snapshot::create(&decode_value(doc).unwrap()).unwrap_err();
    assert_eq!(err.reason(), Some("expected a non-negative integer, found `v3`"));
}

#[test]
fn nested_record_values_fail_decoding() {
    let err = decode::<RawEnvelope>(r#"{"msg": {"value": [1, 2]}}"#).unwrap_err();
    assert!(matches!(err, MapperError::Json { .. }));
}

#[test]
fn envelope_with_repeated_kind_fails_to_decode() {
    let err = decode::<RawEnvelope>(
        r#"{"msg": {"value": "a", "user": "u", "timestamp": 1},
            "msg": {"value": "b", "user": "u", "timestamp": 2}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MapperError::Json { .. }));
}
