#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local, TimeZone};
use rwintime::models::{snapshot::Snapshot, stream::Stream, window::Window};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with an isolated configuration directory for `name`.
pub fn rwt(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rwintime");
    cmd.env("RWINTIME_HOME", test_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Fresh (emptied) config directory inside the system temp dir
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rwintime_test_{name}"));
    path
}

pub fn reset_home(name: &str) -> PathBuf {
    let home = test_home(name);
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create test home");
    home
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rwintime_{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn snap(secs: i64, windows: &[(i64, &str)], active: i64, visible: &[i64]) -> Snapshot {
    Snapshot {
        time: Local
            .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid local time")
            + Duration::seconds(secs),
        windows: windows.iter().map(|(id, n)| Window::new(*id, *n)).collect(),
        active,
        visible: visible.to_vec(),
    }
}

/// A small working session:
/// Vim active, then Chrome/Gmail, then Vim again; a terminal always open.
pub fn sample_stream() -> Stream {
    let w = &[
        (1, "notes.txt - Vim"),
        (2, "Inbox - user@example.com - Gmail - Google Chrome"),
        (3, "Terminal"),
    ];
    Stream::new(vec![
        snap(0, w, 1, &[1, 3]),
        snap(30, w, 1, &[1, 3]),
        snap(60, w, 2, &[2]),
        snap(90, w, 2, &[2]),
        snap(120, w, 1, &[1, 3]),
    ])
    .expect("ordered stream")
}

/// Write `stream` as the stream file of test home `name`; returns its path.
pub fn write_stream(name: &str, stream: &Stream) -> String {
    let path = reset_home(name).join("stream.json");
    stream.save(&path).expect("save stream");
    path.to_string_lossy().to_string()
}

pub const SNAPSHOT_JSON: &str = r#"{"Time": "2025-03-01T09:00:00Z", "Windows": [{"ID": 1, "Name": "notes.txt - Vim"}, {"ID": 2, "Name": "Slack - Team - #general"}], "Active": 1, "Visible": [1, 2]}"#;
