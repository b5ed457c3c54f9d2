//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a kvage command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME inside the temporary home directory
    /// - Current directory set to the test working directory
    /// - No inherited AGE_KEY_FILE, KVAGE_FILE or KVAGE_LOG
    /// - NO_COLOR so output can be matched literally
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("kvage").expect("failed to find kvage binary");
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.config_root());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("AGE_KEY_FILE");
        cmd.env_remove("KVAGE_FILE");
        cmd.env_remove("KVAGE_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// A kvage command with AGE_KEY_FILE pointing at the generated key.
    pub fn kv(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("AGE_KEY_FILE", self.key_path());
        cmd
    }

    /// Shortcut for `kvage generate-key`.
    pub fn generate_key(&self) -> Output {
        self.cmd()
            .arg("generate-key")
            .output()
            .expect("failed to run kvage generate-key")
    }

    /// Shortcut for `kvage set`.
    pub fn set(&self, key: &str, val: &str) -> Output {
        self.kv()
            .args(["set", key, val])
            .output()
            .expect("failed to run kvage set")
    }

    /// Shortcut for `kvage get`.
    pub fn get(&self, key: &str) -> Output {
        self.kv()
            .args(["get", key])
            .output()
            .expect("failed to run kvage get")
    }

    /// Shortcut for `kvage rm`.
    pub fn rm(&self, key: &str) -> Output {
        self.kv()
            .args(["rm", key])
            .output()
            .expect("failed to run kvage rm")
    }

    /// Shortcut for `kvage list`.
    pub fn list(&self) -> Output {
        self.kv()
            .arg("list")
            .output()
            .expect("failed to run kvage list")
    }

    /// Shortcut for `kvage list --filter`.
    pub fn list_filtered(&self, filter: &str) -> Output {
        self.kv()
            .args(["list", "--filter", filter])
            .output()
            .expect("failed to run kvage list --filter")
    }

    /// Shortcut for `kvage export`.
    pub fn export(&self) -> Output {
        self.kv()
            .arg("export")
            .output()
            .expect("failed to run kvage export")
    }

    /// Shortcut for `kvage export --filter`.
    pub fn export_filtered(&self, filter: &str) -> Output {
        self.kv()
            .args(["export", "--filter", filter])
            .output()
            .expect("failed to run kvage export --filter")
    }

    /// Shortcut for `kvage encrypt` with stdin.
    pub fn encrypt(&self, input: &str) -> Output {
        self.kv()
            .arg("encrypt")
            .write_stdin(input)
            .output()
            .expect("failed to run kvage encrypt")
    }

    /// Shortcut for `kvage decrypt` with stdin.
    pub fn decrypt(&self, input: &str) -> Output {
        self.kv()
            .arg("decrypt")
            .write_stdin(input)
            .output()
            .expect("failed to run kvage decrypt")
    }

    /// Shortcut for `kvage where`.
    pub fn where_(&self) -> Output {
        self.cmd()
            .arg("where")
            .output()
            .expect("failed to run kvage where")
    }
}
