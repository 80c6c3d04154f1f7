use frame_trace_studio::commands::{
    execute_compare, validate_args, validate_report_file, CompareArgs,
};
use frame_trace_studio::output::read_report;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::Path;

const FRAME: &str = "/onFrameRender/gpu_time";
const VAO: &str = "/onFrameRender/RenderGraphExe::execute()/VAO/gpu_time";
const SVAO: &str = "/onFrameRender/RenderGraphExe::execute()/SVAO/gpu_time";
const PREPASS: &str = "/onFrameRender/RenderGraphExe::execute()/VAOPrepass/gpu_time";

fn write_json(path: &Path, value: serde_json::Value) {
    fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}

/// Write a baseline and an optimized trace plus a config comparing them
fn setup_workspace(dir: &Path, weight: f64) -> std::path::PathBuf {
    write_json(
        &dir.join("BaselineTrace.json"),
        json!({
            "frame_count": 3,
            "events": {
                FRAME: { "records": [1000.0, 1000.0, 1000.0] },
                VAO: { "records": [1.0, 2.0, 3.0] },
                SVAO: { "records": [10.0, 20.0, 30.0] }
            }
        }),
    );
    write_json(
        &dir.join("SampleTrace.json"),
        json!({
            "frame_count": 2,
            "events": {
                FRAME: { "records": [2000.0, 2000.0] },
                PREPASS: { "records": [1.0, 1.0] },
                VAO: { "records": [2.0, 2.0] },
                SVAO: { "records": [3.0, 3.0] },
                "/onFrameRender/RenderGraphExe::execute()/Other/gpu_time": { "records": [] }
            }
        }),
    );

    let config = format!(
        r#"
frame_time_channel = "{FRAME}"
smoothing_weight = {weight}
output = "{output}"
summary = false

[[entries]]
label = "SVAO (Baseline)"
trace = "BaselineTrace.json"
channels = ["{VAO}", "{SVAO}"]

[[entries]]
label = "SVAO++"
trace = "SampleTrace.json"
channels = ["{PREPASS}", "{VAO}", "{SVAO}"]
"#,
        output = dir.join("out/comparison.json").display(),
    );

    let config_path = dir.join("frame-trace.toml");
    fs::write(&config_path, config).unwrap();
    config_path
}

#[test]
fn test_execute_compare_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = setup_workspace(dir.path(), 0.0);

    let args = CompareArgs {
        config_path,
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let report = execute_compare(args).unwrap();

    assert_eq!(report.series.len(), 2);
    assert_eq!(report.series[0].label, "SVAO (Baseline)");
    assert_eq!(report.series[0].time_axis, vec![1.0, 2.0, 3.0]);
    assert_eq!(report.series[0].values, vec![11.0, 22.0, 33.0]);
    assert_eq!(report.series[1].time_axis, vec![2.0, 4.0]);
    assert_eq!(report.series[1].values, vec![6.0, 6.0]);

    let written_path = dir.path().join("out/comparison.json");
    let written = read_report(&written_path).unwrap();
    assert_eq!(written.series[1].label, "SVAO++");
    assert_eq!(written.series[1].values, vec![6.0, 6.0]);

    validate_report_file(&written_path).unwrap();
}

#[test]
fn test_execute_compare_output_override() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = setup_workspace(dir.path(), 0.5);
    let override_path = dir.path().join("override.json");

    let args = CompareArgs {
        config_path,
        output: Some(override_path.clone()),
    };
    let report = execute_compare(args).unwrap();

    assert!(override_path.exists());
    assert!(!dir.path().join("out/comparison.json").exists());
    assert_eq!(report.smoothing_weight, 0.5);
    assert_eq!(report.series[1].values, vec![6.0, 6.0]);
}

#[test]
fn test_execute_compare_unknown_channel() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = setup_workspace(dir.path(), 0.0);

    // Baseline trace has no prepass channel
    let config = fs::read_to_string(&config_path)
        .unwrap()
        .replacen(
            &format!("channels = [\"{VAO}\", \"{SVAO}\"]"),
            &format!("channels = [\"{PREPASS}\"]"),
            1,
        );
    fs::write(&config_path, config).unwrap();

    let result = execute_compare(CompareArgs {
        config_path,
        ..Default::default()
    });
    assert!(result.is_err());
    assert!(!dir.path().join("out/comparison.json").exists());
}

#[test]
fn test_execute_compare_missing_trace() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = setup_workspace(dir.path(), 0.0);
    fs::remove_file(dir.path().join("SampleTrace.json")).unwrap();

    let result = execute_compare(CompareArgs {
        config_path,
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_validate_report_file_rejects_mismatched_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    write_json(
        &path,
        json!({
            "version": "1.0.0",
            "generated_at": "2026-01-01T00:00:00Z",
            "frame_time_channel": FRAME,
            "smoothing_weight": 0.0,
            "series": [{
                "label": "x",
                "channels": [],
                "time_axis": [1.0, 2.0],
                "values": [1.0],
                "stats": { "count": 1, "mean": 1.0, "median": 1.0, "min": 1.0, "max": 1.0, "p95": 1.0 },
                "mean_change_percent": 0.0
            }]
        }),
    );

    assert!(validate_report_file(&path).is_err());
}
