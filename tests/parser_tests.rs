use frame_trace_studio::parser::{load_trace, parse_trace_bytes};
use frame_trace_studio::utils::error::TraceError;
use serde_json::json;
use std::path::Path;

fn to_bytes(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}

#[test]
fn test_parse_falcor_style_trace() {
    let doc = to_bytes(json!({
        "frame_count": 2,
        "capture_name": "run 1",
        "events": {
            "/onFrameRender/gpu_time": {
                "records": [16.5, 16.7],
                "stats": { "mean": 16.6 }
            },
            "/onFrameRender/RenderGraphExe::execute()/VAO/gpu_time": {
                "records": [1.25, 1.5]
            }
        }
    }));

    let trace = parse_trace_bytes(&doc).unwrap();

    assert_eq!(trace.frame_count(), 2);
    assert_eq!(
        trace.channel("/onFrameRender/gpu_time").unwrap(),
        &[16.5, 16.7]
    );
    assert_eq!(trace.channel_names().len(), 2);
}

#[test]
fn test_missing_events_is_malformed() {
    let doc = to_bytes(json!({ "frame_count": 4 }));
    assert!(matches!(
        parse_trace_bytes(&doc),
        Err(TraceError::MalformedTrace(_))
    ));
}

#[test]
fn test_length_mismatch_only_on_access() {
    let doc = to_bytes(json!({
        "frame_count": 4,
        "events": { "/short": { "records": [1.0, 2.0, 3.0] } }
    }));

    // Loading succeeds
    let trace = parse_trace_bytes(&doc).unwrap();

    // Accessing fails
    assert!(matches!(
        trace.channel("/short"),
        Err(TraceError::MalformedTrace(_))
    ));
}

#[test]
fn test_zero_frame_trace() {
    let doc = to_bytes(json!({ "frame_count": 0, "events": {} }));
    let trace = parse_trace_bytes(&doc).unwrap();

    assert_eq!(trace.frame_count(), 0);
    assert!(trace.channel_names().is_empty());
}

#[test]
fn test_load_trace_from_bytes_source() {
    let doc = to_bytes(json!({
        "frame_count": 1,
        "events": { "/frame": { "records": [2.0] } }
    }));

    let trace = load_trace(doc.as_slice()).unwrap();
    assert_eq!(trace.channel("/frame").unwrap(), &[2.0]);
}

#[test]
fn test_load_trace_from_path_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.json");
    std::fs::write(
        &path,
        to_bytes(json!({ "frame_count": 1, "events": { "/frame": { "records": [4.0] } } })),
    )
    .unwrap();

    let trace = load_trace(path.as_path()).unwrap();
    assert_eq!(trace.channel("/frame").unwrap(), &[4.0]);
}

#[test]
fn test_load_trace_unreadable_path() {
    assert!(matches!(
        load_trace(Path::new("/no/such/trace.json")),
        Err(TraceError::Io(_))
    ));
}

#[test]
fn test_wrongly_typed_structure_is_malformed() {
    let string_count = to_bytes(json!({ "frame_count": "3", "events": {} }));
    assert!(matches!(
        parse_trace_bytes(&string_count),
        Err(TraceError::MalformedTrace(_))
    ));

    let array_events = to_bytes(json!({ "frame_count": 3, "events": [] }));
    assert!(matches!(
        parse_trace_bytes(&array_events),
        Err(TraceError::MalformedTrace(_))
    ));
}

#[test]
fn test_negative_frame_time_is_malformed() {
    let doc = to_bytes(json!({
        "frame_count": 3,
        "events": { "/onFrameRender/gpu_time": { "records": [1000.0, -2000.0, 1000.0] } }
    }));

    let trace = parse_trace_bytes(&doc).unwrap();
    assert!(matches!(
        trace.channel("/onFrameRender/gpu_time"),
        Err(TraceError::MalformedTrace(_))
    ));
}
