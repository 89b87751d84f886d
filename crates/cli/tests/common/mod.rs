//! Common helpers for CLI integration tests.

use std::path::Path;
use std::process::Output;

use serde_json::Value;

/// Run the built binary with the given arguments inside `cwd`.
pub async fn run_filerev(cwd: &Path, args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_filerev"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "error")
        .env_remove("FILEREV_CONFIG")
        .kill_on_drop(true)
        .output()
        .await
        .expect("Failed to spawn filerev")
}

/// Run the built binary with a config file passed through `FILEREV_CONFIG`.
pub async fn run_with_config(cwd: &Path, config: &str) -> Output {
    run_with_config_logged(cwd, config, "error").await
}

/// Like [`run_with_config`], logging to stderr at `level`.
pub async fn run_with_config_logged(cwd: &Path, config: &str, level: &str) -> Output {
    let config_path = cwd.join("filerev.toml");
    tokio::fs::write(&config_path, config).await.unwrap();

    tokio::process::Command::new(env!("CARGO_BIN_EXE_filerev"))
        .current_dir(cwd)
        .env("FILEREV_CONFIG", &config_path)
        .env("RUST_LOG", level)
        .kill_on_drop(true)
        .output()
        .await
        .expect("Failed to spawn filerev")
}

/// Parse a written summary file.
pub async fn read_summary(path: &Path) -> Value {
    let content = tokio::fs::read_to_string(path).await.unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Sorted names of the entries directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
