#![cfg(feature = "cli")]
use std::process::{Command, Output};

fn run(cnf: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trailsat"))
        .args(["-q", cnf])
        .output()
        .expect("failed to run trailsat")
}

#[test]
fn satisfiable_instance_prints_a_model() {
    let output = run("cnfs/scenario-a.cnf");
    assert_eq!(output.status.code(), Some(10));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.first(), Some(&"s SATISFIABLE"));
    assert_eq!(lines.last(), Some(&"v 0"));
    let model = lines[1..lines.len() - 1]
        .iter()
        .map(|l| l.trim_start_matches("v ").parse::<i32>().expect("a literal"))
        .collect::<Vec<i32>>();
    assert_eq!(model.len(), 3);
    // -x3 is a unit clause, and exactly one of x1 and x2 holds
    assert!(model.contains(&-3));
    assert!(model.contains(&1) != model.contains(&2));
}

#[test]
fn unsatisfiable_instance() {
    let output = run("cnfs/scenario-b.cnf");
    assert_eq!(output.status.code(), Some(20));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["s UNSATISFIABLE"]);
}

#[test]
fn broken_input_is_an_error() {
    let output = run("cnfs/broken.cnf");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load"), "{stderr}");
}

#[test]
fn missing_file_is_an_error() {
    let output = run("cnfs/no-such-file.cnf");
    assert_eq!(output.status.code(), Some(1));
}
