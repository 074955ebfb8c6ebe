//! Test harness for dotls integration tests

use std::path::Path;
use std::process::Command;

pub use dotls::test_utils::TestDir;

/// Build a command for the dotls binary with a predictable environment:
/// UTC times, no color, default year style.
pub fn dotls_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dotls"));
    cmd.env("TZ", "UTC0")
        .env("DOTLS_COLOR", "never")
        .env_remove("DOTLS_YEAR")
        .env_remove("RUST_LOG");
    cmd
}

/// Run dotls with raw arguments and return (stdout, stderr, exit code).
pub fn run_dotls_args(args: &[&str]) -> (String, String, Option<i32>) {
    let output = dotls_command()
        .args(args)
        .output()
        .expect("Failed to run dotls");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code())
}

/// List `dir`, sorted when `sort` is set. Returns (stdout, stderr, success).
pub fn run_dotls(dir: &Path, sort: bool) -> (String, String, bool) {
    let path = dir.to_str().expect("temp dir path is UTF-8");
    let mut args = vec![path];
    if sort {
        args.push("-s");
    }
    let (stdout, stderr, code) = run_dotls_args(&args);
    (stdout, stderr, code == Some(0))
}

/// First whitespace-separated field of each output line.
pub fn listed_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_listed_names() {
        let names = listed_names(".a     1 01/01/2024  0:00\n.bb    2 01/01/2024  0:00\n");
        assert_eq!(names, vec![".a", ".bb"]);
    }
}
