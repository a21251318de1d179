use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BIN: &str = "loadtest-analyzer";

const ARTIFACTS: [&str; 10] = [
    "01-dashboard.html",
    "02-performance-comparison.html",
    "03-percentile-distribution.html",
    "04-error-rate-throughput.html",
    "05-endpoint-heatmap.html",
    "06-scalability.html",
    "07-time-distribution.html",
    "08-radar.html",
    "report.txt",
    "report.json",
];

fn write_result_log(dir: &Path, file_name: &str, error_every: usize) {
    let mut content =
        String::from("timeStamp,elapsed,label,responseCode,success,bytes,Latency\n");
    for i in 0..50 {
        let label = if i % 2 == 0 { "GET /api/books" } else { "POST /api/books" };
        let success = error_every == 0 || i % error_every != 0;
        content.push_str(&format!(
            "{},{},{},{},{},512,{}\n",
            1715349600000_i64 + i as i64 * 200,
            100 + i * 10,
            label,
            if success { 200 } else { 500 },
            success,
            90 + i * 10
        ));
    }
    fs::write(dir.join(file_name), content).unwrap();
}

fn analyzer(workdir: &TempDir) -> Command {
    let mut command = Command::cargo_bin(BIN).unwrap();
    command
        .current_dir(workdir.path())
        .env_remove("LOADTEST_OUTPUT_DIR")
        .env_remove("LOADTEST_DEFAULT_INPUT")
        .env_remove("LOADTEST_PREVIEW_LINES");
    command
}

#[test]
fn missing_default_input_should_print_instructions_and_succeed() {
    let workdir = tempfile::tempdir().unwrap();

    analyzer(&workdir)
        .assert()
        .success()
        .stdout(predicate::str::contains("jmeter -n -t"))
        .stdout(predicate::str::contains("tests/jmeter/results.jtl"));

    assert!(!workdir.path().join("analysis-charts").exists());
}

#[test]
fn default_input_should_be_analyzed_when_present() {
    let workdir = tempfile::tempdir().unwrap();
    let jmeter_dir = workdir.path().join("tests/jmeter");
    fs::create_dir_all(&jmeter_dir).unwrap();
    write_result_log(&jmeter_dir, "results.jtl", 10);

    analyzer(&workdir)
        .assert()
        .success()
        .stdout(predicate::str::contains("LOAD TEST ANALYSIS - DETAILED REPORT"));

    for artifact in ARTIFACTS {
        assert!(
            workdir.path().join("analysis-charts").join(artifact).is_file(),
            "missing {artifact}"
        );
    }
}

#[test]
fn should_compare_named_runs() {
    let workdir = tempfile::tempdir().unwrap();
    write_result_log(workdir.path(), "baseline.jtl", 0);
    write_result_log(workdir.path(), "stress.jtl", 4);

    analyzer(&workdir)
        .args([
            "--input",
            "baseline=baseline.jtl",
            "--input",
            "stress.jtl",
            "-o",
            "out",
            "--preview-lines",
            "200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("BASELINE"))
        .stdout(predicate::str::contains("STRESS"))
        .stdout(predicate::str::contains("END OF REPORT"));

    let json = fs::read_to_string(workdir.path().join("out/report.json")).unwrap();
    assert!(json.contains("\"baseline\""));
    assert!(json.contains("\"stress\""));
    assert!(json.contains("\"throughput\": 5.102"));
}

#[test]
fn should_analyze_scanned_directory() {
    let workdir = tempfile::tempdir().unwrap();
    let logs = workdir.path().join("logs");
    fs::create_dir(&logs).unwrap();
    write_result_log(&logs, "b-peak.csv", 2);
    write_result_log(&logs, "a-warmup.jtl", 0);
    fs::write(logs.join("readme.md"), "not a log").unwrap();

    analyzer(&workdir)
        .args(["--scan-dir", "logs", "-o", "out", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(workdir.path().join("out/report.txt")).unwrap();
    assert!(text.contains("Runs analyzed: 2"));
    let warmup = text.find("A-WARMUP").unwrap();
    let peak = text.find("B-PEAK").unwrap();
    assert!(warmup < peak);
}

#[test]
fn unreadable_input_should_still_produce_report() {
    let workdir = tempfile::tempdir().unwrap();
    write_result_log(workdir.path(), "good.jtl", 0);
    fs::write(workdir.path().join("empty.jtl"), "").unwrap();

    analyzer(&workdir)
        .args(["-i", "good.jtl", "-i", "empty.jtl", "-i", "gone=missing.jtl", "-o", "out"])
        .assert()
        .success();

    for artifact in ARTIFACTS {
        assert!(workdir.path().join("out").join(artifact).is_file());
    }
    let text = fs::read_to_string(workdir.path().join("out/report.txt")).unwrap();
    assert!(text.contains("Runs analyzed: 3"));
    assert!(text.contains("GONE"));
}

#[test]
fn failed_artifact_should_fail_the_run_but_not_the_others() {
    let workdir = tempfile::tempdir().unwrap();
    write_result_log(workdir.path(), "run.jtl", 0);
    // A directory in place of the chart file makes that one write fail.
    fs::create_dir_all(workdir.path().join("out/01-dashboard.html")).unwrap();

    analyzer(&workdir)
        .args(["-i", "run.jtl", "-o", "out", "-q"])
        .assert()
        .failure();

    for artifact in ARTIFACTS.iter().skip(1) {
        assert!(workdir.path().join("out").join(artifact).is_file());
    }
}

#[test]
fn invalid_configuration_should_fail() {
    let workdir = tempfile::tempdir().unwrap();
    fs::write(
        workdir.path().join("analyzer.toml"),
        "[chart]\nacceptable_error_rate = 50.0\ncritical_error_rate = 10.0\n",
    )
    .unwrap();

    analyzer(&workdir)
        .args(["--config", "analyzer.toml"])
        .assert()
        .failure();
}
