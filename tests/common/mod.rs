#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let out = tmp.path().join("out");
        fs::create_dir_all(&out).expect("create out dir");

        let catalog = make_fixture_catalog(tmp.path());

        Self {
            _tmp: tmp,
            home,
            catalog,
            out,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pixseek");
        cmd.env("HOME", &self.home)
            .env_remove("PIXSEEK_API_KEY")
            .env_remove("PIXSEEK_SOURCE")
            .env_remove("PIXSEEK_LOG");
        cmd
    }

    pub fn cmd_catalog(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--source")
            .arg(self.catalog.to_str().expect("catalog path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd_catalog()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn record(id: u64, tags: &str) -> Value {
    json!({
        "id": id,
        "tags": tags,
        "pageURL": format!("https://pixabay.example/photos/{}", id),
        "webformatURL": format!("https://cdn.example/{}_640.jpg", id),
        "largeImageURL": format!("https://cdn.example/{}_1280.jpg", id),
        "likes": id % 7,
        "views": id * 10,
        "comments": id % 3,
        "downloads": id * 2,
        "user": "fixture",
        "imageWidth": 1280
    })
}

/// 40 cat photos, 41 dog photos and 85 bird photos.
fn make_fixture_catalog(base: &Path) -> PathBuf {
    let mut hits = Vec::new();
    for i in 0..40 {
        hits.push(record(1000 + i, "cat, kitten, pet"));
    }
    for i in 0..41 {
        hits.push(record(2000 + i, "dog, puppy, pet"));
    }
    for i in 0..85 {
        hits.push(record(3000 + i, "bird, nature"));
    }
    let path = base.join("catalog.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&json!({ "hits": hits })).expect("serialize catalog"),
    )
    .expect("write catalog");
    path
}
