#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const KMA_HEADER: &str = "#Template\\tScore\\tExpected\\tTemplate_length\\tTemplate_Identity\\tTemplate_Coverage\\tQuery_Identity\\tQuery_Coverage\\tDepth\\tq_value\\tp_value\\n";

/// Isolated home, database, tool and output directories for one test
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let env = Self {
            temp_dir: TempDir::new()?,
        };
        fs::create_dir_all(env.home())?;
        fs::create_dir_all(env.bin_dir())?;
        fs::create_dir_all(env.db_dir())?;
        Ok(env)
    }

    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.temp_dir.path().join("bin")
    }

    pub fn db_dir(&self) -> PathBuf {
        self.temp_dir.path().join("db")
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Install an executable shell script into the fake tool directory
    pub fn install_tool(&self, name: &str, body: &str) -> Result<PathBuf> {
        let path = self.bin_dir().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}", body))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }
        Ok(path)
    }

    /// Create placeholder database volumes
    pub fn create_databases(&self) -> Result<()> {
        for name in ["agr_blastdb.nsq", "agr_blastdb.nin", "agr_kma.comp.b", "agr_kma.name", "agr_references.fasta"] {
            fs::write(self.db_dir().join(name), "")?;
        }
        Ok(())
    }

    /// `agrtyper` with PATH restricted to the fake tools plus the system shell utilities
    pub fn cmd(&self) -> Command {
        let mut cmd = agrtyper_cmd();
        cmd.env("AGRTYPER_HOME", self.home())
            .env("PATH", format!("{}:/usr/bin:/bin", self.bin_dir().display()));
        cmd
    }

    /// `agrtyper` with PATH containing no aligners at all
    pub fn cmd_without_tools(&self) -> Command {
        let mut cmd = agrtyper_cmd();
        cmd.env("AGRTYPER_HOME", self.home())
            .env("PATH", self.bin_dir());
        cmd
    }
}

pub fn agrtyper_cmd() -> Command {
    let mut cmd = Command::cargo_bin("agrtyper").expect("agrtyper binary should build");
    cmd.env_remove("AGRTYPER_DB_DIR").env_remove("AGRTYPER_LOG");
    cmd
}

/// Mock blastn writing `report` (printf escapes allowed) to its `-out` path
pub fn mock_blastn(report: &str) -> String {
    format!(
        r#"
out=""
while [ "$#" -gt 0 ]; do
    case "$1" in
        -out) shift; out="$1" ;;
    esac
    shift
done
printf '{}' > "$out"
"#,
        report
    )
}

/// Mock kma writing `report` to `<-o prefix>.res`
pub fn mock_kma(report: &str) -> String {
    format!(
        r#"
prefix=""
while [ "$#" -gt 0 ]; do
    case "$1" in
        -o) shift; prefix="$1" ;;
    esac
    shift
done
printf '{}' > "$prefix.res"
"#,
        report
    )
}

pub fn read_result(output_dir: &Path) -> Result<serde_json::Value> {
    let text = fs::read_to_string(output_dir.join("result.json"))?;
    Ok(serde_json::from_str(&text)?)
}
