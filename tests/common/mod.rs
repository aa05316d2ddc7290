use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the compiled marquee binary
pub fn marquee_binary() -> String {
    let binary_path = if cfg!(debug_assertions) {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/marquee")
    } else {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/marquee")
    };

    if std::path::Path::new(binary_path).exists() {
        binary_path.to_string()
    } else {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/marquee").to_string()
    }
}

/// Helper struct to run marquee commands against an isolated config directory
pub struct MarqueeTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl MarqueeTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        MarqueeTest {
            temp_dir,
            binary_path: marquee_binary(),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("MARQUEE_CONFIG_DIR", self.temp_dir.path())
            .env_remove("MARQUEE_SERVER_URL")
            .output()
            .expect("Failed to execute marquee command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }
}
