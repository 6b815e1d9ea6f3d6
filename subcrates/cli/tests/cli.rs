use std::{path::Path, process::Command};

use assert_fs::TempDir;


fn run_random_files(arguments: &[&str], root: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_random-files"))
        .args(arguments)
        .arg(root)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run random-files")
}


#[test]
fn prints_one_line_per_created_entry() {
    let temporary_directory = TempDir::new().unwrap();
    let root = temporary_directory.path().join("fixture");

    let output = run_random_files(
        &[
            "--depth",
            "1",
            "--files",
            "2",
            "--dirs",
            "3",
            "--filesize",
            "16",
            "--random-size",
            "false",
            "--seed",
            "4242",
        ],
        &root,
    );

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // 2 root files, 3 directories with 2 files each.
    assert_eq!(lines.len(), 2 + 3 + 3 * 2);
    assert!(lines.iter().all(|line| Path::new(line).exists()));

    temporary_directory.close().unwrap();
}


#[test]
fn same_seed_prints_same_relative_paths_and_digests() {
    let temporary_directory = TempDir::new().unwrap();
    let first_root = temporary_directory.path().join("first");
    let second_root = temporary_directory.path().join("second");

    let arguments = ["--depth", "2", "--random-fanout", "--md5", "--seed", "99"];

    let first = run_random_files(&arguments, &first_root);
    let second = run_random_files(&arguments, &second_root);

    assert!(first.status.success() && second.status.success());

    let first_stdout = String::from_utf8(first.stdout).unwrap();
    let second_stdout = String::from_utf8(second.stdout).unwrap();

    assert_eq!(
        first_stdout.replace(&first_root.display().to_string(), ""),
        second_stdout.replace(&second_root.display().to_string(), "")
    );

    temporary_directory.close().unwrap();
}


#[test]
fn quiet_mode_prints_nothing() {
    let temporary_directory = TempDir::new().unwrap();

    let output = run_random_files(
        &["-q", "--depth", "0", "--files", "3"],
        temporary_directory.path(),
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_dir(temporary_directory.path()).unwrap().count(),
        3
    );

    temporary_directory.close().unwrap();
}


#[test]
fn invalid_size_range_fails_without_creating_entries() {
    let temporary_directory = TempDir::new().unwrap();
    let root = temporary_directory.path().join("never-filled");

    let output = run_random_files(&["--filesize", "5", "--min-size", "5"], &root);

    assert!(!output.status.success());
    assert!(!root.exists());

    temporary_directory.close().unwrap();
}
