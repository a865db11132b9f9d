#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// The built binary with every `COMPOSECTL_*` variable cleared.
pub fn composectl() -> Command {
    let mut cmd = Command::cargo_bin("composectl").unwrap();
    cmd.env_remove("COMPOSECTL_COMPOSE_BIN")
        .env_remove("COMPOSECTL_BASE_DIR")
        .env_remove("COMPOSECTL_CONFIG")
        .env_remove("COMPOSECTL_LOG");
    cmd
}

/// A scratch base directory holding a settings file that pins the compose
/// program, so the user's own config dir is never consulted.
pub fn stack_dir(compose_command: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), &format!("compose_command: [{compose_command}]\n"));
    dir
}

pub fn write_settings(dir: &Path, yaml: &str) {
    std::fs::write(dir.join("composectl.yml"), yaml).unwrap();
}
