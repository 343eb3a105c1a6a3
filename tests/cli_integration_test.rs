//! Integration tests that run the built binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const ALL_FILES: [&str; 9] = [
    "customers.sql",
    "products.sql",
    "orders.sql",
    "order_items.sql",
    "students.sql",
    "courses.sql",
    "enrollments.sql",
    "professors.sql",
    "course_assignments.sql",
];

fn sql_seeder_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sql-seeder"))
}

#[test]
fn test_bare_invocation_writes_all_files_to_working_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = sql_seeder_bin()
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let notices: Vec<&str> = stdout.lines().collect();
    let expected: Vec<String> = ALL_FILES
        .iter()
        .map(|f| format!("Generated: {}", f))
        .collect();
    assert_eq!(notices, expected);

    for file in ALL_FILES {
        let content = fs::read_to_string(temp_dir.path().join(file)).unwrap();
        assert_eq!(content.lines().count(), 100, "{}", file);
        assert!(content.lines().all(|l| l.ends_with(");")), "{}", file);
    }
}

#[test]
fn test_generate_with_flags() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    let output = sql_seeder_bin()
        .args([
            "generate",
            "--seed",
            "1",
            "--dialect",
            "postgres",
            "--kinds",
            "customers",
            "--count",
            "5",
            "--reference-date",
            "2025-01-15",
            "--output-dir",
        ])
        .arg(&out)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Generated: "));
    assert!(stdout.trim_end().ends_with("customers.sql"));

    let content = fs::read_to_string(out.join("customers.sql")).unwrap();
    assert_eq!(content.lines().count(), 5);
    assert!(content
        .lines()
        .all(|l| l.starts_with("INSERT INTO Customers (")));
    assert!(!out.join("products.sql").exists());

    // Same seed and date reproduce the file
    let again = temp_dir.path().join("again");
    let status = sql_seeder_bin()
        .args([
            "generate",
            "--seed",
            "1",
            "--dialect",
            "postgres",
            "--kinds",
            "customers",
            "--count",
            "5",
            "--reference-date",
            "2025-01-15",
            "--output-dir",
        ])
        .arg(&again)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        content,
        fs::read_to_string(again.join("customers.sql")).unwrap()
    );
}

#[test]
fn test_kinds_json_output() {
    let output = sql_seeder_bin().args(["kinds", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds = json.as_array().unwrap();
    assert_eq!(kinds.len(), 9);

    assert_eq!(kinds[0]["kind"], "customers");
    assert_eq!(kinds[0]["domain"], "ecommerce");
    assert_eq!(kinds[0]["table"], "Customers");
    assert_eq!(kinds[0]["file"], "customers.sql");
    assert_eq!(kinds[0]["columns"].as_array().unwrap().len(), 7);

    let files: Vec<&str> = kinds.iter().map(|k| k["file"].as_str().unwrap()).collect();
    assert_eq!(files, ALL_FILES);
}

#[test]
fn test_invalid_dialect_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = sql_seeder_bin()
        .current_dir(temp_dir.path())
        .args(["generate", "--dialect", "oracle"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    assert!(!temp_dir.path().join("customers.sql").exists());
}
