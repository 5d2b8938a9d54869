use crate::model::{RawEvent, SourceKind, StreamKind};
use crate::stream::{WireError, WireMessage, decode};
use pretty_assertions::assert_eq;

#[test]
fn decodes_snapshot_with_source_name() {
    let text = r#"{
        "type": "snapshot",
        "sourceName": "/var/log/app.log",
        "events": [
            {"timestamp": "2024-01-01T00:00:00Z", "source": "file", "stream": "", "message": "hello"}
        ]
    }"#;

    let message = decode(text).unwrap();

    assert_eq!(
        message,
        WireMessage::snapshot(
            vec![RawEvent::new(
                "2024-01-01T00:00:00Z",
                SourceKind::File,
                StreamKind::Unknown,
                "hello"
            )],
            Some("/var/log/app.log".to_string())
        )
    );
}

#[test]
fn decodes_docker_event() {
    let text = r#"{"type":"event","event":{"timestamp":"t","source":"docker","stream":"stderr","message":"boom"}}"#;

    let message = decode(text).unwrap();

    assert_eq!(
        message,
        WireMessage::event(RawEvent::new(
            "t",
            SourceKind::Container,
            StreamKind::Stderr,
            "boom"
        ))
    );
}

#[test]
fn missing_stream_defaults_to_unknown() {
    let text = r#"{"type":"event","event":{"timestamp":"t","source":"file","message":"x"}}"#;

    let WireMessage::Event { event } = decode(text).unwrap() else {
        panic!("expected event");
    };

    assert_eq!(event.stream, StreamKind::Unknown);
}

#[test]
fn round_trips_through_json() {
    let message = WireMessage::event(RawEvent::new("t", SourceKind::File, StreamKind::Unknown, "x"));

    let decoded = decode(&message.to_json()).unwrap();

    assert_eq!(decoded, message);
}

#[test]
fn rejects_malformed_envelopes() {
    let cases = [
        "not json",
        r#"{"type":"unknown"}"#,
        r#"{"type":"snapshot"}"#,
        r#"{"type":"event"}"#,
        r#"{"type":"event","event":{"timestamp":"t","source":"socket","message":"x"}}"#,
        r#"{"type":"event","event":{"timestamp":"t","source":"file","stream":"stdin","message":"x"}}"#,
        r#"[1,2,3]"#,
    ];

    for text in cases {
        assert!(
            matches!(decode(text), Err(WireError::Malformed { .. })),
            "accepted: {text}"
        );
    }
}

#[test]
fn rejects_empty_frames() {
    assert!(matches!(decode(""), Err(WireError::Empty)));
    assert!(matches!(decode("  \n"), Err(WireError::Empty)));
}
