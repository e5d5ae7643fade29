mod common;

use common::TestEnv;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn single_page_query_hides_load_more() {
    let env = TestEnv::new();
    let out = env.run_json(&["search", "cat", "--pages", "3"]);
    assert_eq!(out["ok"], true);
    let data = &out["data"];
    assert_eq!(data["query"], "cat");
    assert_eq!(data["total_hits"], 40);
    assert_eq!(data["pages_fetched"], 1);
    assert_eq!(data["exhausted"], true);
    assert_eq!(data["items"].as_array().map(Vec::len), Some(40));
    assert_eq!(data["notices"][0], "Hooray! We found 40 images.");
    assert_eq!(data["notices"].as_array().map(Vec::len), Some(1));
}

#[test]
fn one_extra_hit_loads_a_second_page_then_ends() {
    let env = TestEnv::new();
    let out = env.run_json(&["search", "dog"]);
    assert_eq!(out["data"]["exhausted"], false);
    assert_eq!(out["data"]["items"].as_array().map(Vec::len), Some(40));

    let out = env.run_json(&["search", "dog", "--all"]);
    let data = &out["data"];
    assert_eq!(data["pages_fetched"], 2);
    assert_eq!(data["items"].as_array().map(Vec::len), Some(41));
    assert_eq!(data["items"][40]["id"], 2040);
    assert_eq!(data["exhausted"], true);
    assert_eq!(
        data["notices"][1],
        "We're sorry, but you've reached the end of search results."
    );
}

#[test]
fn eighty_five_hits_take_three_pages() {
    let env = TestEnv::new();
    let out = env.run_json(&["search", "bird", "--pages", "2"]);
    assert_eq!(out["data"]["pages_fetched"], 2);
    assert_eq!(out["data"]["exhausted"], false);

    let out = env.run_json(&["search", "bird", "--pages", "3"]);
    assert_eq!(out["data"]["pages_fetched"], 3);
    assert_eq!(out["data"]["items"].as_array().map(Vec::len), Some(85));
    assert_eq!(out["data"]["exhausted"], true);
}

#[test]
fn per_page_flag_changes_page_size() {
    let env = TestEnv::new();
    let out = env.run_json(&["--per-page", "10", "search", "cat", "--pages", "2"]);
    assert_eq!(out["data"]["items"].as_array().map(Vec::len), Some(20));
    assert_eq!(out["data"]["exhausted"], false);
}

#[test]
fn no_results_is_not_a_failure() {
    let env = TestEnv::new();
    let out = env.run_json(&["search", "giraffe"]);
    assert_eq!(out["data"]["total_hits"], 0);
    assert_eq!(out["data"]["pages_fetched"], 0);
    assert_eq!(
        out["data"]["notices"][0],
        "Sorry, there are no images matching your search query. Please try again."
    );
}

#[test]
fn blank_query_fails_with_notice() {
    let env = TestEnv::new();
    env.cmd_catalog()
        .args(["search", "   "])
        .assert()
        .failure()
        .stderr(contains("The search bar cannot be empty"));
}

#[test]
fn blank_query_json_carries_notice_in_failed_envelope() {
    let env = TestEnv::new();
    let out = env
        .cmd_catalog()
        .args(["--json", "search", "  "])
        .assert()
        .failure()
        .stderr(contains("search query is empty"))
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).expect("json envelope");
    assert_eq!(v["ok"], false);
    assert_eq!(
        v["data"]["notices"][0],
        "The search bar cannot be empty. Please type any criteria in the search bar."
    );
    assert_eq!(v["data"]["error"], "search query is empty");
}

#[test]
fn text_mode_prints_rows_and_notices() {
    let env = TestEnv::new();
    env.cmd_catalog()
        .args(["search", "dog"])
        .assert()
        .success()
        .stdout(contains("2000\tdog, puppy, pet\thttps://cdn.example/2000_1280.jpg"))
        .stdout(contains("2040").not())
        .stderr(contains("Hooray! We found 41 images."))
        .stderr(contains("[more available]"));
}

#[test]
fn html_gallery_is_written() {
    let env = TestEnv::new();
    let path = env.out.join("cats.html");
    env.cmd_catalog()
        .args(["search", "cat", "--html", path.to_str().expect("utf8")])
        .assert()
        .success();
    let html = fs::read_to_string(&path).expect("gallery html");
    assert_eq!(html.matches("class=\"photo-card\"").count(), 40);
    assert!(html.contains("<title>cat</title>"));
}

#[test]
fn browse_handles_a_session_from_stdin() {
    let env = TestEnv::new();
    let out = env
        .cmd_catalog()
        .arg("--json")
        .arg("browse")
        .write_stdin("dog\n:more\n:more\n\ncat\n:top\n:q\nbird\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let steps: Vec<Value> = String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(steps.len(), 6);

    assert_eq!(steps[0]["data"]["more_available"], true);
    assert_eq!(steps[1]["data"]["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(steps[1]["data"]["more_available"], false);
    assert!(steps[2]["data"]["error"].is_string());
    assert_eq!(
        steps[3]["data"]["notices"][0],
        "The search bar cannot be empty. Please type any criteria in the search bar."
    );
    assert_eq!(steps[4]["data"]["query"], "cat");
    assert_eq!(steps[4]["data"]["more_available"], false);
    assert_eq!(steps[5]["data"]["event"], "top");
    assert_eq!(steps[5]["data"]["notices"][0], "showing 40 images for \"cat\"");
}

#[test]
fn browse_survives_undecodable_input() {
    let env = TestEnv::new();
    let out = env
        .cmd_catalog()
        .arg("--json")
        .arg("browse")
        .write_stdin(&b"\xff\xfe\ndog\n:more\n"[..])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let steps: Vec<Value> = String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(steps.len(), 3);
    assert!(
        steps[0]["data"]["error"]
            .as_str()
            .is_some_and(|e| e.contains("not valid UTF-8"))
    );
    assert_eq!(steps[1]["data"]["query"], "dog");
    assert_eq!(steps[2]["data"]["items"].as_array().map(Vec::len), Some(1));
}

#[test]
fn browse_help_lists_control_words() {
    let env = TestEnv::new();
    env.cmd()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(contains(":more").and(contains(":top")).and(contains(":quit")));
}

#[test]
fn browse_rewrites_gallery_after_each_step() {
    let env = TestEnv::new();
    let path = env.out.join("browse.html");
    env.cmd_catalog()
        .args(["browse", "--html", path.to_str().expect("utf8")])
        .write_stdin("dog\n:more\n")
        .assert()
        .success()
        .stderr(contains("We're sorry, but you've reached the end of search results."));
    let html = fs::read_to_string(&path).expect("gallery html");
    assert_eq!(html.matches("class=\"photo-card\"").count(), 41);
}

#[test]
fn remote_source_requires_api_key() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "cat"])
        .assert()
        .failure()
        .stderr(contains("no API key configured"));
}

#[test]
fn missing_catalog_is_reported() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--source", "does-not-exist.json", "search", "cat"])
        .assert()
        .failure()
        .stderr(contains("could not read catalog"));
}

#[test]
fn config_file_and_redacted_show() {
    let env = TestEnv::new();
    let cfg_dir = env.home.join(".config/pixseek");
    fs::create_dir_all(&cfg_dir).expect("config dir");
    fs::write(
        cfg_dir.join("config.toml"),
        "[api]\nkey = \"super-secret\"\nper_page = 25\n",
    )
    .expect("write config");

    let out = env
        .cmd()
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).expect("utf8");
    assert!(!text.contains("super-secret"));
    let v: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(v["data"]["api_key"], "<redacted>");
    assert_eq!(v["data"]["per_page"], 25);
    assert_eq!(v["data"]["source"], "https://pixabay.com/api/");

    let out = env.run_json(&["search", "cat", "--pages", "2"]);
    assert_eq!(out["data"]["items"].as_array().map(Vec::len), Some(40));
    assert_eq!(out["data"]["pages_fetched"], 2);
}

#[test]
fn config_path_points_into_home() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains(".config/pixseek/config.toml"));
}
