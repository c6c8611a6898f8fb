use std::env;
use std::process::Command;

/// Environment variable with extra space-separated cargo features.
pub const FEATURES_ENV: &str = "RADIXFFT_FEATURES";

/// Options derived from the host machine used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Detect build configuration from the current machine.
pub fn detect_config() -> BuildConfig {
    let nproc = detect_nproc();
    let extra = env::var(FEATURES_ENV).unwrap_or_default();
    compute_config(nproc, &extra)
}

fn detect_nproc() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(nproc: usize, extra: &str) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();

    if nproc > 1 {
        features.push("parallel".into());
    }

    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }

    BuildConfig { features }
}

fn with_features(mut cmd: Command, cfg: &BuildConfig) -> Command {
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("build");
    with_features(cmd, cfg)
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");
    with_features(cmd, cfg)
}

/// Library build without `std`, checking the `alloc`-only configuration.
pub fn no_std_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--lib", "--no-default-features"]);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--manifest-path", "radixfft-bench/Cargo.toml"]);
    // The bench crate only forwards `parallel`.
    if cfg.features.iter().any(|f| f == "parallel") {
        cmd.args(["--features", "parallel"]);
    }
    cmd
}
