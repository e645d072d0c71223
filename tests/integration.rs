use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn folio_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("folio");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();

    fs::write(
        data_dir.join("projects.json"),
        r#"[
            {
                "title": "Nebula Scanner",
                "description": "Network reconnaissance toolkit",
                "category": "Cybersecurity",
                "technologies": ["Rust", "gRPC"],
                "github": "https://github.com/example/nebula-scanner",
                "status": "Active"
            },
            {
                "title": "Rustic Pipelines",
                "description": "Batch data pipelines",
                "category": "AI/ML",
                "technologies": ["Python"]
            }
        ]"#,
    )
    .unwrap();

    fs::write(
        data_dir.join("skills.json"),
        r#"{
            "categories": [
                {
                    "name": "Languages",
                    "skills": [
                        {"name": "Rust", "description": "Systems language", "level": 80},
                        {"name": "Python", "description": "Scripting and ML", "level": 90}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    fs::write(
        data_dir.join("experience.json"),
        r#"[
            {
                "title": "Security Engineer",
                "company": "Acme Corp",
                "duration": "2021 - Present",
                "description": "Led internal tooling work.",
                "achievements": ["Cut triage time in half"],
                "technologies": ["Rust", "Kubernetes"]
            }
        ]"#,
    )
    .unwrap();

    fs::write(
        data_dir.join("youtube.json"),
        r#"{
            "channelStats": {"subscribers": "12.4K", "videos": "87", "views": "1.2M", "hours": "44K"},
            "featuredVideos": [
                {"videoId": "abc123", "title": "Intro to Scanning", "description": "Walkthrough",
                 "duration": "12:30", "views": "5.1K"}
            ]
        }"#,
    )
    .unwrap();

    let config_content = format!(
        r#"[sources]
projects = "{root}/data/projects.json"
skills = "{root}/data/skills.json"
experience = "{root}/data/experience.json"
videos = "{root}/data/youtube.json"

[retrieval]
final_limit = 12

[watch]
debounce_ms = 300
"#,
        root = root.display()
    );

    let config_path = root.join("folio.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_folio(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = folio_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run folio binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_sources_lists_all_four() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["sources"]);
    assert!(success);
    for name in ["projects", "skills", "experience", "videos"] {
        assert!(stdout.contains(name), "missing {} in: {}", name, stdout);
    }
    assert!(stdout.contains("true"));
    assert!(!stdout.contains("false"));
}

#[test]
fn test_load_reports_counts() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_folio(&config_path, &["load"]);
    assert!(success, "load failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("projects: 2 items"));
    assert!(stdout.contains("skills: 2 items (1 categories)"));
    assert!(stdout.contains("experience: 1 items"));
    assert!(stdout.contains("videos: 1 featured"));
    // 2 projects + 2 skills + 3 technologies (Rust and Python dedupe
    // against the skills).
    assert!(
        stdout.contains("corpus: 7 records (2 projects, 2 skills, 3 technologies)"),
        "unexpected corpus line in: {}",
        stdout
    );
    assert!(stdout.contains("ok"));
}

#[test]
fn test_load_survives_one_failed_source() {
    let (tmp, config_path) = setup_test_env();
    fs::remove_file(tmp.path().join("data").join("skills.json")).unwrap();

    let (stdout, _, success) = run_folio(&config_path, &["load"]);
    assert!(success, "single failed source must not fail the command");
    assert!(stdout.contains("error loading skills"));
    assert!(stdout.contains("projects: 2 items"));
    // Technologies now derive from project tags only.
    assert!(stdout.contains("corpus: 5 records (2 projects, 0 skills, 3 technologies)"));
}

#[test]
fn test_load_distinguishes_malformed_from_unreachable() {
    let (tmp, config_path) = setup_test_env();
    fs::write(
        tmp.path().join("data").join("skills.json"),
        r#"{"categories": "oops"}"#,
    )
    .unwrap();

    let (stdout, _, success) = run_folio(&config_path, &["load"]);
    assert!(success);
    assert!(
        stdout.contains("wrong shape"),
        "expected shape error in: {}",
        stdout
    );
}

#[test]
fn test_load_all_failed_exits_nonzero() {
    let (tmp, config_path) = setup_test_env();
    fs::remove_dir_all(tmp.path().join("data")).unwrap();

    let (_, stderr, success) = run_folio(&config_path, &["load"]);
    assert!(!success);
    assert!(stderr.contains("all sources failed"));
}

#[test]
fn test_load_json_format() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["load", "--format", "json"]);
    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["sources"]["projects"], 2);
    assert_eq!(report["corpus"]["technologies"], 3);
    assert!(report["failures"].as_array().unwrap().is_empty());
}

#[test]
fn test_search_exact_title_ranks_first() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["search", "rust"]);
    assert!(success);
    assert!(
        stdout.contains("1. [SKILL] Rust (80%)"),
        "expected exact skill match first, got: {}",
        stdout
    );
    assert!(stdout.contains("Nebula Scanner"), "tag match missing: {}", stdout);
}

#[test]
fn test_search_filter_restricts_kind() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) =
        run_folio(&config_path, &["search", "rust", "--filter", "projects"]);
    assert!(success);
    assert!(stdout.contains("[PROJECT]"));
    assert!(!stdout.contains("[SKILL]"));
    assert!(!stdout.contains("[TECHNOLOGY]"));
}

#[test]
fn test_search_short_query_returns_no_results() {
    let (_tmp, config_path) = setup_test_env();

    for query in ["", "r", "  r  "] {
        let (stdout, _, success) = run_folio(&config_path, &["search", query]);
        assert!(success, "short query should not fail");
        assert!(stdout.contains("No results."));
    }
}

#[test]
fn test_search_whitespace_padded_two_char_query() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["search", "  Py"]);
    assert!(success);
    assert!(stdout.contains("Python"), "expected Python match: {}", stdout);
}

#[test]
fn test_search_no_match() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["search", "zz-no-such-tech"]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_search_deterministic() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout1, _, _) = run_folio(&config_path, &["search", "rust"]);
    let (stdout2, _, _) = run_folio(&config_path, &["search", "rust"]);
    assert_eq!(stdout1, stdout2);
}

#[test]
fn test_search_json_format() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) =
        run_folio(&config_path, &["search", "rust", "--format", "json"]);
    assert!(success);
    let hits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let hits = hits.as_array().unwrap();
    assert!(!hits.is_empty());
    assert_eq!(hits[0]["kind"], "skill");
    assert_eq!(hits[0]["title"], "Rust");
    assert_eq!(hits[0]["level"], 80);
    // Technology hits omit category and level entirely.
    let tech = hits
        .iter()
        .find(|h| h["kind"] == "technology")
        .expect("expected a technology hit");
    assert!(tech.get("category").is_none());
    assert!(tech.get("level").is_none());
}

#[test]
fn test_search_limit_caps_results() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) =
        run_folio(&config_path, &["search", "rust", "--limit", "1", "--format", "json"]);
    assert!(success);
    let hits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 1);
}

#[test]
fn test_search_degrades_when_one_source_fails() {
    let (tmp, config_path) = setup_test_env();
    fs::remove_file(tmp.path().join("data").join("skills.json")).unwrap();

    let (stdout, stderr, success) = run_folio(&config_path, &["search", "rust"]);
    assert!(success, "search must survive a failed source");
    assert!(stderr.contains("warning"), "expected warning: {}", stderr);
    // The skill is gone; the project and its tag-derived technology remain.
    assert!(!stdout.contains("[SKILL]"));
    assert!(stdout.contains("Nebula Scanner"));
}

#[test]
fn test_show_projects() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["show", "projects"]);
    assert!(success);
    assert!(stdout.contains("Nebula Scanner"));
    assert!(stdout.contains("technologies: Rust, gRPC"));
    assert!(stdout.contains("github:"));
}

#[test]
fn test_show_skills_renders_bars() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["show", "skills"]);
    assert!(success);
    assert!(stdout.contains("[LANGUAGES]"));
    assert!(stdout.contains("80%"));
    assert!(stdout.contains("#"));
}

#[test]
fn test_show_experience() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["show", "experience"]);
    assert!(success);
    assert!(stdout.contains("Security Engineer @ Acme Corp"));
    assert!(stdout.contains("Cut triage time in half"));
}

#[test]
fn test_show_videos() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_folio(&config_path, &["show", "videos"]);
    assert!(success);
    assert!(stdout.contains("12.4K subscribers"));
    assert!(stdout.contains("Intro to Scanning"));
    assert!(stdout.contains("watch?v=abc123"));
}

#[test]
fn test_show_failed_source_errors_inline() {
    let (tmp, config_path) = setup_test_env();
    fs::remove_file(tmp.path().join("data").join("experience.json")).unwrap();

    let (_, stderr, success) = run_folio(&config_path, &["show", "experience"]);
    assert!(!success);
    assert!(
        stderr.contains("experience.json"),
        "error should name the source: {}",
        stderr
    );
}

#[test]
fn test_unknown_filter_rejected() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) =
        run_folio(&config_path, &["search", "rust", "--filter", "everything"]);
    assert!(!success);
    assert!(stderr.contains("invalid value") || stderr.contains("possible values"));
}

#[test]
fn test_missing_config_errors() {
    let (tmp, _) = setup_test_env();
    let missing = tmp.path().join("nope.toml");

    let (_, stderr, success) = run_folio(&missing, &["sources"]);
    assert!(!success);
    assert!(stderr.contains("config"), "expected config error: {}", stderr);
}
