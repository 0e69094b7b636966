use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

const SEED: &str = r#"[
  {"id": 1, "name": "bob", "email": "bob@example.com", "phone": "+1 555-0101"},
  {"id": 2, "name": "Alice", "email": "alice@example.com", "phone": "+44 20 7946 0000",
   "company": {"name": "Acme", "catchPhrase": "We make things"},
   "address": {"street": "Main St", "suite": "Apt. 1", "city": "Springfield", "zipcode": "12345"},
   "website": "alice.dev"},
  {"id": 3, "name": "anna", "email": "anna@example.com", "phone": "+91 98765 43210"}
]"#;

struct Env {
    temp: TempDir,
    db_path: PathBuf,
    seed_path: PathBuf,
}

impl Env {
    fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        let db_path = temp.path().join("rolodex.sqlite3");
        let seed_path = temp.path().join("seed.json");
        fs::write(&seed_path, SEED).expect("write seed");
        Self {
            temp,
            db_path,
            seed_path,
        }
    }

    fn output(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let mut cmd = cargo_bin_cmd!("rolodex");
        cmd.env("XDG_CONFIG_HOME", self.temp.path().join("config"))
            .args(["--db-path", path_str(&self.db_path)])
            .args(["--seed-file", path_str(&self.seed_path)])
            .args(args);
        if let Some(input) = stdin {
            cmd.write_stdin(input);
        }
        cmd.output().expect("run command")
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.output(args, None);
        assert!(output.status.success(), "command failed: {:?}", output);
        String::from_utf8(output.stdout).expect("utf8")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        serde_json::from_str(&self.run(&full)).expect("parse json")
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

#[test]
fn list_groups_seeded_contacts_by_letter() {
    let env = Env::new();
    let out = env.run(&["list"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "A");
    assert!(lines[1].contains("Alice"));
    assert!(lines[2].contains("anna"));
    assert_eq!(lines[3], "B");
    assert!(lines[4].contains("bob"));

    let groups = env.run_json(&["list", "--search", "al"]);
    let groups = groups.as_array().expect("array");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["key"], "A");
    assert_eq!(groups[0]["contacts"].as_array().expect("contacts").len(), 1);
    assert_eq!(groups[0]["contacts"][0]["name"], "Alice");
}

#[test]
fn list_reports_when_nothing_matches() {
    let env = Env::new();
    let out = env.run(&["list", "--search", "zzz"]);
    assert_eq!(out.trim(), "No contacts found.");
}

#[test]
fn add_joins_code_and_filtered_number() {
    let env = Env::new();
    let created = env.run_json(&[
        "add",
        "--name",
        "Aaron",
        "--email",
        "aaron@example.com",
        "--phone",
        "(555) abc-1234",
        "--code",
        "+44",
        "--city",
        "London",
    ]);
    assert_eq!(created["phone"], "+44 (555) -1234");
    assert_eq!(created["address"]["city"], "London");
    assert!(created["id"].as_i64().expect("id") > 3);

    let names: Vec<String> = env.run_json(&["list"])[0]["contacts"]
        .as_array()
        .expect("contacts")
        .iter()
        .map(|c| c["name"].as_str().expect("name").to_string())
        .collect();
    assert_eq!(names, ["Aaron", "Alice", "anna"]);
}

#[test]
fn add_defaults_to_first_dialing_code() {
    let env = Env::new();
    let created = env.run_json(&[
        "add", "--name", "Zed", "--email", "z@example.com", "--phone", "12345",
    ]);
    assert_eq!(created["phone"], "+91 12345");
}

#[test]
fn add_reports_every_missing_field() {
    let env = Env::new();
    let output = env.output(
        &["add", "--name", " ", "--email", "", "--phone", "abc"],
        None,
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Name is required"));
    assert!(stderr.contains("Email is required"));
    assert!(stderr.contains("Phone is required"));
}

#[test]
fn add_rejects_unknown_dialing_code() {
    let env = Env::new();
    let output = env.output(
        &[
            "add", "--name", "Zed", "--email", "z@example.com", "--phone", "1", "--code", "+999",
        ],
        None,
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn edit_keeps_stored_code_and_company_catch_phrase() {
    let env = Env::new();
    let updated = env.run_json(&["edit", "2", "--phone", "20 0000 1111", "--company", "Acme Ltd"]);
    assert_eq!(updated["phone"], "+44 20 0000 1111");
    assert_eq!(updated["company"]["name"], "Acme Ltd");
    assert_eq!(updated["company"]["catchPhrase"], "We make things");
    assert_eq!(updated["address"]["suite"], "Apt. 1");
}

#[test]
fn edit_without_changes_is_invalid() {
    let env = Env::new();
    let output = env.output(&["edit", "2"], None);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn show_prints_links_and_missing_values() {
    let env = Env::new();
    let out = env.run(&["show", "2"]);
    assert!(out.contains("company: Acme \"We make things\""));
    assert!(out.contains("address: Main St, Apt. 1, Springfield, 12345"));
    assert!(out.contains("email: mailto:alice@example.com"));
    assert!(out.contains("call: tel:+44 20 7946 0000"));
    assert!(out.contains("message: sms:+44 20 7946 0000"));
    assert!(out.contains("website: http://alice.dev"));

    let out = env.run(&["show", "1"]);
    assert!(out.contains("company: N/A"));
    assert!(out.contains("address: N/A"));
}

#[test]
fn show_unknown_contact_is_not_found() {
    let env = Env::new();
    let output = env.output(&["show", "999"], None);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn delete_asks_for_confirmation() {
    let env = Env::new();
    let output = env.output(&["delete", "1"], Some("n\n"));
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Are you sure you want to delete this contact? (y/n)"));
    assert!(env.run(&["list"]).contains("bob"));

    let output = env.output(&["delete", "1"], Some("y\n"));
    assert!(output.status.success());
    assert!(!env.run(&["list"]).contains("bob"));
}

#[test]
fn delete_unknown_id_is_noop() {
    let env = Env::new();
    let result = env.run_json(&["delete", "999", "--yes"]);
    assert_eq!(result["deleted"], false);
    assert_eq!(env.run_json(&["list"]).as_array().expect("groups").len(), 2);
}

#[test]
fn codes_and_features_need_no_database() {
    let env = Env::new();
    let codes = env.run_json(&["codes"]);
    assert_eq!(codes[0]["code"], "+91");
    assert_eq!(codes.as_array().expect("codes").len(), 13);

    let out = env.run(&["features"]);
    assert!(out.contains("Debounced Search"));
    assert!(!env.db_path.exists());
}

#[test]
fn broken_seed_file_warns_and_starts_empty() {
    let env = Env::new();
    fs::write(&env.seed_path, "not json").expect("write seed");
    let output = env.output(&["list"], None);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("failed to fetch seed contacts"));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8").trim(),
        "No contacts found."
    );

    fs::write(&env.seed_path, SEED).expect("restore seed");
    assert!(env.run(&["list"]).contains("Alice"));
}
