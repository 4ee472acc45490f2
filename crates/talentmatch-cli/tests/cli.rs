use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESUME_ANN: &str = "\
Ann Lee
ann.lee@example.com
555-123-4567

Skills
Java, SQL, Docker

Work Experience
Backend Engineer at Acme 2018 - 2023
";

const RESUME_BOB: &str = "\
Bob Stone
bob@example.com

Skills
Python

Education
BSc Computer Science, State University 2015
";

const POSTING: &str = "\
Job Title: Backend Engineer
We need 3+ years of experience.

Required Skills:
Java, Databases, Python
";

/// Temp workspace with a config whose store lives inside it.
struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let store = dir.path().join("store.json");
        fs::write(
            &config,
            serde_json::json!({ "store": { "path": store } }).to_string(),
        )
        .unwrap();
        Self { dir, config }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("talentmatch").unwrap();
        cmd.arg("--config").arg(&self.config);
        cmd
    }
}

#[test]
fn test_resume_json_output() {
    let ws = Workspace::new();
    let resume = ws.write("ann.txt", RESUME_ANN);

    let output = ws.cmd().arg("resume").arg(&resume).output().unwrap();
    assert!(output.status.success());

    let candidate: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(candidate["name"], "Ann Lee");
    assert_eq!(candidate["email"], "ann.lee@example.com");
    assert_eq!(candidate["phone"], "555-123-4567");
    assert_eq!(candidate["skills"], serde_json::json!(["Java", "SQL", "Docker"]));
}

#[test]
fn test_resume_text_output() {
    let ws = Workspace::new();
    let resume = ws.write("bob.md", RESUME_BOB);

    ws.cmd()
        .args(["resume", "--format", "text"])
        .arg(&resume)
        .assert()
        .success()
        .stdout(predicate::str::contains("Candidate: Bob Stone"))
        .stdout(predicate::str::contains("Skills: Python"));
}

#[test]
fn test_resume_csv_output_ends_with_single_newline() {
    let ws = Workspace::new();
    let resume = ws.write("ann.txt", RESUME_ANN);

    let output = ws
        .cmd()
        .args(["resume", "--format", "csv"])
        .arg(&resume)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.ends_with('\n') && !stdout.ends_with("\n\n"));
}

#[test]
fn test_resume_unsupported_format() {
    let ws = Workspace::new();
    let resume = ws.write("ann.docx", RESUME_ANN);

    ws.cmd()
        .arg("resume")
        .arg(&resume)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported document format"));
}

#[test]
fn test_job_validate_rejects_posting_without_skills() {
    let ws = Workspace::new();
    let posting = ws.write("job.txt", "Office Manager\nKeep things tidy.\n");

    ws.cmd()
        .args(["job", "--validate"])
        .arg(&posting)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no required skills found"));
}

#[test]
fn test_match_resume_files() {
    let ws = Workspace::new();
    ws.write("ann.txt", RESUME_ANN);
    ws.write("bob.txt", RESUME_BOB);
    let posting = ws.write("job.txt", POSTING);
    let pattern = ws.path().join("*.txt");

    // job.txt matches the glob too and parses as a candidate without skills
    let output = ws
        .cmd()
        .args(["match", "--format", "csv", "--threshold", "50", "--job"])
        .arg(&posting)
        .arg(pattern.to_str().unwrap())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n') && !stdout.ends_with("\n\n"));
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("rank,candidate_id,name,score"));
    assert!(rows[1].starts_with("1,0,Ann Lee,76.7,66.7,100.0"));
}

#[test]
fn test_match_stored_records() {
    let ws = Workspace::new();
    let ann = ws.write("ann.txt", RESUME_ANN);
    let bob = ws.write("bob.txt", RESUME_BOB);
    let posting = ws.write("job.txt", POSTING);

    for resume in [&ann, &bob] {
        ws.cmd().args(["resume", "--save"]).arg(resume).assert().success();
    }
    ws.cmd().args(["job", "--save"]).arg(&posting).assert().success();

    ws.cmd()
        .args(["store", "list", "candidates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee"))
        .stdout(predicate::str::contains("Bob Stone"));

    let output = ws
        .cmd()
        .args(["match", "--stored", "--job-id", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["candidate"]["name"], "Ann Lee");
    assert_eq!(results[0]["candidate"]["id"], 1);
    assert_eq!(results[0]["matched_skills"], serde_json::json!(["Java", "Databases"]));
    assert_eq!(results[1]["candidate"]["name"], "Bob Stone");
    assert_eq!(results[1]["missing_skills"], serde_json::json!(["Java", "Databases"]));
}

#[test]
fn test_match_without_candidates_fails() {
    let ws = Workspace::new();
    let posting = ws.write("job.txt", POSTING);

    ws.cmd()
        .args(["match", "--stored", "--job"])
        .arg(&posting)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No candidates to match"));
}

#[test]
fn test_match_invalid_job_fails() {
    let ws = Workspace::new();
    ws.write("ann.txt", RESUME_ANN);
    let posting = ws.write("job.md", "Office Manager\n");
    let pattern = ws.path().join("*.txt");

    ws.cmd()
        .args(["match", "--job"])
        .arg(&posting)
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no required skills"));
}

#[test]
fn test_store_delete() {
    let ws = Workspace::new();
    let ann = ws.write("ann.txt", RESUME_ANN);
    ws.cmd().args(["resume", "--save"]).arg(&ann).assert().success();

    ws.cmd()
        .args(["store", "delete", "candidates", "1"])
        .assert()
        .success();
    ws.cmd()
        .args(["store", "show", "candidates", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No stored candidate with id 1"));
}

#[test]
fn test_config_set_and_get() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "matching.default_threshold", "42.5"])
        .assert()
        .success();
    ws.cmd()
        .args(["config", "get", "matching.default_threshold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42.5"));
    ws.cmd()
        .args(["config", "set", "matching.nonexistent", "1"])
        .assert()
        .failure();
}
