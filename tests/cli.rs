// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::TempDir;

/// Command with settings file isolated to temporary directory.
fn textfmt(config_dir: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("textfmt")?;
    cmd.arg("--config").arg(config_dir.join("config.toml"));
    Ok(cmd)
}

#[test]
fn truncate_with_default_ellipsis() -> Result<()> {
    let dir = TempDir::new()?;
    textfmt(dir.path())?
        .args(["truncate", "hello world", "8"])
        .assert()
        .success()
        .stdout("hello...\n");

    Ok(())
}

#[test]
fn truncate_with_flag_ellipsis() -> Result<()> {
    let dir = TempDir::new()?;
    textfmt(dir.path())?
        .args(["truncate", "hello world", "8", "--ellipsis", "…"])
        .assert()
        .success()
        .stdout("hello w…\n");

    Ok(())
}

#[test]
fn truncate_negative_length() -> Result<()> {
    let dir = TempDir::new()?;
    textfmt(dir.path())?
        .args(["truncate", "hello world", "-5"])
        .assert()
        .success()
        .stdout("\n");

    Ok(())
}

#[test]
fn capitalize_text() -> Result<()> {
    let dir = TempDir::new()?;
    textfmt(dir.path())?
        .args(["capitalize", "hELLO"])
        .assert()
        .success()
        .stdout("HELLO\n");

    Ok(())
}

#[test]
fn size_with_default_decimals() -> Result<()> {
    let dir = TempDir::new()?;
    textfmt(dir.path())?
        .args(["size", "1536"])
        .assert()
        .success()
        .stdout("1.5 KB\n");

    Ok(())
}

#[test]
fn size_with_flag_decimals() -> Result<()> {
    let dir = TempDir::new()?;
    textfmt(dir.path())?
        .args(["size", "1536", "--decimals", "0"])
        .assert()
        .success()
        .stdout("2 KB\n");

    Ok(())
}

#[test]
fn size_of_negative_bytes() -> Result<()> {
    let dir = TempDir::new()?;
    textfmt(dir.path())?
        .args(["size", "-100"])
        .assert()
        .success()
        .stdout("0 B\n");

    Ok(())
}

#[test]
fn settings_file_supplies_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("config.toml"),
        "[truncate]\nellipsis = \"~\"\n\n[file_size]\ndecimals = 0\n",
    )?;

    textfmt(dir.path())?
        .args(["truncate", "hello world", "6"])
        .assert()
        .success()
        .stdout("hello~\n");

    textfmt(dir.path())?
        .args(["size", "1536"])
        .assert()
        .success()
        .stdout("2 KB\n");

    // Flags still win over the settings file.
    textfmt(dir.path())?
        .args(["size", "1536", "-d", "1"])
        .assert()
        .success()
        .stdout("1.5 KB\n");

    Ok(())
}

#[test]
fn invalid_settings_file_fails() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("config.toml"), "[file_size]\ndecimals = \"two\"\n")?;

    textfmt(dir.path())?
        .args(["size", "1536"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());

    Ok(())
}
