//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the host facts and
//! side effects the launcher depends on, so every pipeline step can be
//! exercised against a mock.
//!
//! # Structure
//!
//! - `env` - Environment variables, current directory and executable
//! - `fs` - File reads and path canonicalization
//! - `process` - Captured and stdio-inheriting child processes

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::env as std_env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    /// Like [`Runtime::env_var`], but without requiring the value to be Unicode.
    fn env_var_os(&self, key: &str) -> Option<OsString>;
    fn current_dir(&self) -> Result<PathBuf>;
    fn current_exe(&self) -> Result<PathBuf>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Canonicalize a path by resolving all symlinks and returning the canonical absolute path.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    // Processes
    /// Run `program` in the current directory to completion, capturing stdout and stderr.
    async fn output(&self, program: &str, args: &[String]) -> Result<CommandOutput>;

    /// Run `program` with the parent's stdin, stdout and stderr, waiting for it to exit.
    ///
    /// Returns the child's exit code, or `None` when it terminated without one
    /// (e.g. killed by a signal). Fails only if the child could not be started.
    async fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<Option<i32>>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn env_var_os(&self, key: &str) -> Option<OsString> {
        self.env_var_os_impl(key)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    async fn output(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.output_impl(program, args).await
    }

    async fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<Option<i32>> {
        self.run_inherited_impl(program, args).await
    }
}
