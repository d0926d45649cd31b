mod support;

use assert_cmd::Command;
use clap::Parser;
use lbry_batch::cli::{resolve_config, run, Cli};
use lbry_batch_core::config::License;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Duration;
use support::{closed_port, fake_daemon, fake_daemon_rejecting, fake_image_host};
use tempfile::tempdir;

fn lbry_batch() -> Command {
    let mut cmd = Command::cargo_bin("lbry-batch").expect("Binary exists");
    cmd.env_remove("LBRY_BATCH_PORT")
        .env_remove("LBRY_BATCH_THUMBNAIL_ENDPOINT")
        .env("RUST_LOG", "warn");
    cmd
}

fn media_dir(dir: &Path) {
    fs::write(dir.join("a.mp4"), b"video").unwrap();
    fs::write(dir.join("a.txt"), "First upload").unwrap();
    fs::write(dir.join("a.png"), b"png").unwrap();
    fs::write(dir.join("b (live).mp3"), b"audio").unwrap();
    fs::write(dir.join("notes.md"), "ignored").unwrap();
}

#[test]
fn help_lists_publish_flags() {
    lbry_batch()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--optimize-file")
                .and(predicate::str::contains("--license-url"))
                .and(predicate::str::contains("--fee-amount")),
        );
}

#[test]
fn channel_name_is_required() {
    let dir = tempdir().unwrap();
    lbry_batch()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CHANNEL_NAME"));
}

#[test]
fn missing_directory_is_rejected() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");
    lbry_batch()
        .arg(&missing)
        .arg("@channel")
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "The directory {} does not exist.",
            missing.display()
        )));
}

#[test]
fn out_of_range_port_is_rejected() {
    let dir = tempdir().unwrap();
    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--port", "70000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The port 70000 is not between 0 and 65535.",
        ));
}

#[test]
fn license_url_requires_other_license() {
    let dir = tempdir().unwrap();
    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--license", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--license-url should be specified if and only if --license='Other'",
        ));

    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--license-url", "https://example.com/license"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--license-url should be specified"));
}

#[test]
fn unknown_language_is_rejected_by_the_parser() {
    let dir = tempdir().unwrap();
    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--languages", "en", "xx-nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xx-nope"));
}

#[test]
fn unreachable_daemon_fails_before_publishing() {
    let dir = tempdir().unwrap();
    media_dir(dir.path());
    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--port", &closed_port().to_string(), "--timeout", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"));
}

#[test]
fn empty_directory_publishes_nothing() {
    let daemon = fake_daemon();
    let dir = tempdir().unwrap();
    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--port", &daemon.port.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No media files found"));

    let methods = daemon.requests();
    assert!(methods.iter().any(|r| r.contains(r#""method":"version""#)));
    assert!(!methods.iter().any(|r| r.contains(r#""method":"publish""#)));
}

#[test]
fn empty_directory_still_checks_daemon_port() {
    let dir = tempdir().unwrap();
    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--port", &closed_port().to_string(), "--timeout", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"))
        .stdout(predicate::str::contains("No media files found").not());
}

#[test]
fn aborted_batch_writes_partial_report() {
    let daemon = fake_daemon_rejecting(Some("blive"));
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp4"), b"video").unwrap();
    fs::write(dir.path().join("b (live).mp3"), b"audio").unwrap();
    let report = dir.path().join("report.json");

    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--port", &daemon.port.to_string(), "--delay", "0"])
        .arg("--report")
        .arg(&report)
        .assert()
        .failure()
        .stdout(predicate::str::contains("lbry://a#claim-a"))
        .stderr(predicate::str::contains(
            "publishing b (live).mp3 failed after 1 claim(s): Stream name is already taken",
        ));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(written["claims"].as_array().unwrap().len(), 1);
}

#[test]
fn report_write_failure_keeps_abort_reason() {
    let daemon = fake_daemon_rejecting(Some("a"));
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp4"), b"video").unwrap();
    let unwritable = dir.path().join("missing-dir").join("report.json");

    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--port", &daemon.port.to_string()])
        .arg("--report")
        .arg(&unwritable)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Error: publishing a.mp4 failed after 0 claim(s)")
                .and(predicate::str::contains("Failed to write report for aborted batch")),
        );
}

#[test]
fn publishes_directory_against_local_daemon() {
    let daemon = fake_daemon();
    let images = fake_image_host();
    let dir = tempdir().unwrap();
    media_dir(dir.path());
    let report = dir.path().join("report.json");

    lbry_batch()
        .arg(dir.path())
        .arg("@channel")
        .args(["--port", &daemon.port.to_string()])
        .args(["--thumbnail-endpoint", &format!("{}/api/claim/publish", images.url())])
        .args(["--delay", "0", "--tags", "music", "live"])
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("lbry://a#claim-a")
                .and(predicate::str::contains("lbry://blive#claim-blive"))
                .and(predicate::str::contains("https://odysee.com/@channel/a#claim-a"))
                .and(predicate::str::contains("Published 2 of 2 files.")),
        );

    let publishes: Vec<String> = daemon
        .requests()
        .into_iter()
        .filter(|r| r.contains(r#""method":"publish""#))
        .collect();
    assert_eq!(publishes.len(), 2);
    assert!(publishes[0].contains(r#""thumbnail_url":"https://spee.ch/thumb.png""#));
    assert!(publishes[0].contains(r#""description":"First upload""#));
    assert!(publishes[0].contains(r#""tags":["music","live"]"#));
    assert_eq!(images.requests().len(), 1);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let claims = written["claims"].as_array().unwrap();
    assert_eq!(claims.len(), 2);
    assert_eq!(claims[1]["file_name"], "b (live).mp3");
    assert_eq!(claims[1]["claim_id"], "claim-blive");
}

#[test]
fn flags_override_yaml_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("defaults.yaml");
    fs::write(
        &config,
        "port: 6000\nbid: 0.5\ntags: [podcast]\nlanguages: [fr]\ndelay_secs: 3\nlicense: Public Domain\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "lbry-batch",
        dir.path().to_str().unwrap(),
        "@channel",
        "--config",
        config.to_str().unwrap(),
        "--port",
        "7000",
        "--tags",
        "music",
    ]);
    let resolved = resolve_config(&cli).unwrap();

    assert_eq!(resolved.port, 7000);
    assert_eq!(resolved.tags, ["music"]);
    assert_eq!(resolved.bid, "0.5");
    assert_eq!(resolved.languages, ["fr"]);
    assert_eq!(resolved.publish_delay, Duration::from_secs(3));
    assert_eq!(resolved.license, Some(License::PublicDomain));
    assert_eq!(resolved.file_directory, dir.path().canonicalize().unwrap());
}

#[test]
fn defaults_apply_without_flags_or_file() {
    let dir = tempdir().unwrap();
    let cli = Cli::parse_from(["lbry-batch", dir.path().to_str().unwrap(), "@channel"]);
    let resolved = resolve_config(&cli).unwrap();

    assert_eq!(resolved.bid, "0.0001");
    assert_eq!(resolved.languages, ["en"]);
    assert_eq!(resolved.publish_delay, Duration::from_secs(10));
    assert!(resolved.request_timeout.is_none());
    assert!(!resolved.optimize_file);
    assert!(!resolved.charges_fee());
}

use std::sync::{Arc, Mutex};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, Layer, Registry};

/// Custom Layer to collect emitted event messages.
struct EventCollector {
    events: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for EventCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.events.lock().unwrap().push(format!("{:?}", event));
    }
}

#[tokio::test]
async fn emits_trace_initialised_event() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = EventCollector {
        events: events.clone(),
    };
    let subscriber = Registry::default().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    let cli = Cli::parse_from(["lbry-batch", "/definitely/not/here", "@channel"]);
    let _ = run(cli).await;

    let event_msgs = events.lock().unwrap();
    assert!(
        event_msgs.iter().any(|msg| msg.contains("trace_initialised")),
        "Expected a 'trace_initialised' trace event, got: {:?}",
        event_msgs
    );
}
