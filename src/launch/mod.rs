//! Binary selection and delegation.
//!
//! A launch is a straight pipeline: read the version, resolve the platform
//! (while the revision query, if any, runs alongside), name the binary, then
//! run it with inherited stdio and hand back its exit code.

mod naming;

pub use naming::{BINARY_PREFIX, BinaryName, NamingStrategy};

use anyhow::Result;
use log::{debug, info};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::platform::{DefaultPlatformDetector, PlatformDetector, PlatformKey};
use crate::runtime::Runtime;
use crate::version::{query_revision, read_version};

/// Exit code used when the child did not report one of its own.
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Everything resolved before the child is started.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    pub revision: Option<String>,
    pub platform: PlatformKey,
    pub binary: BinaryName,
    pub path: PathBuf,
}

pub struct Launcher<R: Runtime, D: PlatformDetector> {
    runtime: R,
    detector: D,
    config: Config,
}

impl<R: Runtime, D: PlatformDetector> Launcher<R, D> {
    pub fn new(runtime: R, detector: D, config: Config) -> Self {
        Self {
            runtime,
            detector,
            config,
        }
    }

    /// Resolve version, revision and platform into the binary to run.
    ///
    /// The revision query is awaited here, so the plan never carries a
    /// revision that has not arrived yet.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn plan(&self) -> Result<LaunchPlan> {
        let local = async {
            let version = read_version(&self.runtime, &self.config.install_dir)?;
            let platform = PlatformKey::resolve(&self.detector.detect())?;
            Ok::<_, anyhow::Error>((version, platform))
        };
        let revision = async {
            if self.config.naming.needs_revision() {
                query_revision(&self.runtime).await.map(Some)
            } else {
                Ok(None)
            }
        };

        let ((version, platform), revision) = tokio::try_join!(local, revision)?;

        let binary = BinaryName::new(platform, &version, revision.as_deref());
        let path = self.config.bin_dir().join(binary.as_str());
        debug!("Resolved {} to {}", platform, path.display());

        Ok(LaunchPlan {
            revision,
            platform,
            binary,
            path,
        })
    }

    /// Run the planned binary and return the exit code the launcher should use.
    #[tracing::instrument(level = "debug", skip(self, plan), fields(binary = %plan.binary))]
    pub async fn delegate(&self, plan: &LaunchPlan, args: &[OsString]) -> i32 {
        info!("Using binary: {}", plan.binary);

        match self.runtime.run_inherited(&plan.path, args).await {
            Ok(Some(code)) => code,
            Ok(None) => {
                debug!("{} exited without a status code", plan.path.display());
                FALLBACK_EXIT_CODE
            }
            Err(err) => {
                debug!("{:#}", err);
                FALLBACK_EXIT_CODE
            }
        }
    }

    pub async fn run(&self, args: &[OsString]) -> Result<i32> {
        let plan = self.plan().await?;
        Ok(self.delegate(&plan, args).await)
    }
}

/// Resolve configuration from the environment and launch the matching binary.
#[tracing::instrument(level = "debug", skip(runtime, args))]
pub async fn launch<R: Runtime>(runtime: R, args: Vec<OsString>) -> Result<i32> {
    let config = Config::new(&runtime)?;
    debug!("Launcher configuration: {:?}", config);
    let launcher = Launcher::new(runtime, DefaultPlatformDetector, config);
    launcher.run(&args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MockPlatformDetector, Platform};
    use crate::runtime::{CommandOutput, MockRuntime};
    use crate::test_utils::test_install_dir;
    use mockall::predicate::eq;
    use std::path::Path;

    fn config(naming: NamingStrategy) -> Config {
        Config {
            install_dir: test_install_dir(),
            naming,
        }
    }

    fn detector(os: &'static str, arch: &'static str) -> MockPlatformDetector {
        let mut detector = MockPlatformDetector::new();
        detector
            .expect_detect()
            .returning(move || Platform::new(os, arch));
        detector
    }

    fn expect_version(runtime: &mut MockRuntime, contents: &'static str) {
        runtime
            .expect_read_to_string()
            .with(eq(test_install_dir().join(".version")))
            .returning(move |_| Ok(contents.to_string()));
    }

    #[tokio::test]
    async fn test_plan_plain_linux_x64() {
        let mut runtime = MockRuntime::new();
        expect_version(&mut runtime, "2.0.0");
        runtime.expect_output().never();

        let launcher = Launcher::new(
            runtime,
            detector("linux", "x64"),
            config(NamingStrategy::Plain),
        );
        let plan = launcher.plan().await.unwrap();

        assert_eq!(plan.binary.as_str(), "main-linux-amd64-2.0.0");
        assert_eq!(
            plan.path,
            test_install_dir().join("bin").join("main-linux-amd64-2.0.0")
        );
        assert_eq!(plan.revision, None);
        assert_eq!(plan.platform, PlatformKey::LinuxAmd64);
    }

    #[tokio::test]
    async fn test_plan_with_revision() {
        let mut runtime = MockRuntime::new();
        expect_version(&mut runtime, "1.2.3\n");
        runtime
            .expect_output()
            .withf(|program, _| program == "git")
            .times(1)
            .returning(|_, _| {
                Ok(CommandOutput {
                    success: true,
                    stdout: "abc1234\n".to_string(),
                    stderr: String::new(),
                })
            });

        let launcher = Launcher::new(
            runtime,
            detector("darwin", "arm64"),
            config(NamingStrategy::Revision),
        );
        let plan = launcher.plan().await.unwrap();

        assert_eq!(plan.binary.as_str(), "main-darwin-arm64-1.2.3-abc1234");
        assert_eq!(plan.revision.as_deref(), Some("abc1234"));
    }

    #[tokio::test]
    async fn test_missing_marker_stops_before_platform() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("No such file or directory")));
        runtime.expect_run_inherited().never();
        let mut detector = MockPlatformDetector::new();
        detector.expect_detect().never();

        let launcher = Launcher::new(runtime, detector, config(NamingStrategy::Plain));
        let err = launcher.run(&[]).await.unwrap_err();

        assert!(format!("{:#}", err).starts_with("Error reading version file"));
    }

    #[tokio::test]
    async fn test_unsupported_platform_never_delegates() {
        let mut runtime = MockRuntime::new();
        expect_version(&mut runtime, "2.0.0");
        runtime.expect_run_inherited().never();

        let launcher = Launcher::new(
            runtime,
            detector("windows", "x64"),
            config(NamingStrategy::Plain),
        );
        let err = launcher.run(&[]).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unsupported platform (windows) and architecture (x64)"
        );
    }

    #[tokio::test]
    async fn test_revision_failure_never_delegates() {
        let mut runtime = MockRuntime::new();
        expect_version(&mut runtime, "2.0.0");
        runtime.expect_output().returning(|_, _| {
            Ok(CommandOutput {
                success: false,
                stdout: String::new(),
                stderr: "fatal: not a git repository".to_string(),
            })
        });
        runtime.expect_run_inherited().never();

        let launcher = Launcher::new(
            runtime,
            detector("linux", "arm64"),
            config(NamingStrategy::Revision),
        );
        let err = launcher.run(&[]).await.unwrap_err();

        assert!(err.to_string().contains("fatal: not a git repository"));
    }

    #[tokio::test]
    async fn test_run_forwards_args_and_exit_code() {
        let mut runtime = MockRuntime::new();
        expect_version(&mut runtime, "2.0.0");
        runtime
            .expect_run_inherited()
            .withf(|program, args| {
                program == test_install_dir().join("bin/main-linux-amd64-2.0.0").as_path()
                    && args == [OsString::from("--help"), OsString::from("deploy")]
            })
            .times(1)
            .returning(|_, _| Ok(Some(7)));

        let launcher = Launcher::new(
            runtime,
            detector("linux", "x64"),
            config(NamingStrategy::Plain),
        );
        let code = launcher
            .run(&[OsString::from("--help"), OsString::from("deploy")])
            .await
            .unwrap();

        assert_eq!(code, 7);
    }

    #[tokio::test]
    async fn test_delegate_exit_codes() {
        for (outcome, expected) in [(Some(0), 0), (Some(255), 255), (None, 1)] {
            let mut runtime = MockRuntime::new();
            runtime
                .expect_run_inherited()
                .returning(move |_, _| Ok(outcome));

            let launcher = Launcher::new(
                runtime,
                detector("linux", "x64"),
                config(NamingStrategy::Plain),
            );
            let plan = LaunchPlan {
                revision: None,
                platform: PlatformKey::LinuxAmd64,
                binary: BinaryName::new(PlatformKey::LinuxAmd64, "2.0.0", None),
                path: Path::new("/nowhere").to_path_buf(),
            };

            assert_eq!(launcher.delegate(&plan, &[]).await, expected);
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_delegate_spawn_failure_falls_back() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run_inherited()
            .returning(|_, _| Err(anyhow::anyhow!("Failed to start /nowhere")));

        let launcher = Launcher::new(
            runtime,
            detector("linux", "x64"),
            config(NamingStrategy::Plain),
        );
        let plan = LaunchPlan {
            revision: None,
            platform: PlatformKey::LinuxAmd64,
            binary: BinaryName::new(PlatformKey::LinuxAmd64, "2.0.0", None),
            path: Path::new("/nowhere").to_path_buf(),
        };

        assert_eq!(launcher.delegate(&plan, &[]).await, FALLBACK_EXIT_CODE);
    }
}
