mod common;
use common::{reset_home, rwt, sample_stream};
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_writes_default_config() {
    let home = reset_home("init_config");

    rwt("init_config").arg("init").assert().success();

    let content = fs::read_to_string(home.join("rwintime.conf")).expect("config written");
    assert!(content.contains("max_bars: 30"));
    assert!(content.contains("label_mode: app"));

    rwt("init_config")
        .arg("init")
        .assert()
        .success()
        .stderr(contains("already exists"));
}

#[test]
fn test_config_print_and_check() {
    let home = reset_home("config_check");
    fs::write(home.join("rwintime.conf"), "max_bars: 3\n").expect("write config");

    rwt("config_check")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("max_bars: 3"));

    rwt("config_check")
        .args(["config", "--check"])
        .assert()
        .success()
        .stderr(contains("stream_file"));
}

#[test]
fn test_config_defaults_drive_show() {
    let home = reset_home("config_drives_show");
    let stream_path = home.join("rwintime.json");
    sample_stream().save(&stream_path).expect("save");
    fs::write(
        home.join("rwintime.conf"),
        format!(
            "stream_file: {}\nlabel_mode: window\nmax_bars: 1\n",
            stream_path.display()
        ),
    )
    .expect("write config");

    rwt("config_drives_show")
        .args(["show", "--what", "stats"])
        .assert()
        .success()
        .stdout(contains("Top 1 active Windows"))
        .stdout(contains("notes.txt - Vim"));
}

#[test]
fn test_broken_config_is_reported() {
    let home = reset_home("config_broken");
    fs::write(home.join("rwintime.conf"), "max_bars: [").expect("write config");

    rwt("config_broken")
        .args(["show"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_unknown_time_format_is_a_config_error() {
    let home = reset_home("config_bad_time_format");
    let stream_path = home.join("rwintime.json");
    sample_stream().save(&stream_path).expect("save");
    fs::write(
        home.join("rwintime.conf"),
        format!(
            "stream_file: {}\ntime_format: \"%Q\"\n",
            stream_path.display()
        ),
    )
    .expect("write config");

    for what in ["list", "stats", "timeline"] {
        rwt("config_bad_time_format")
            .args(["show", "--what", what])
            .assert()
            .failure()
            .stderr(contains("invalid time_format"));
    }
}
