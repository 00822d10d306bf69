use crate::config::Config;
use crate::error::Error;
use crate::harness::Stage;
use itertools::Itertools;
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Resolved compiler ready to build the driver program.
#[derive(Debug, Clone)]
pub struct Toolchain {
    compiler: PathBuf,
    extra_args: Vec<String>,
}

impl Toolchain {
    /// Find compiler executable.
    ///
    /// # Arguments
    ///
    /// * `compiler`: path to compiler, if there is no such file then compiler is searched in `PATH`
    /// * `extra_args`: arguments appended after source, object and output arguments
    pub fn resolve(compiler: &str, extra_args: &[String]) -> Result<Self, Error> {
        let compiler = if Path::new(compiler).exists() {
            absolute(Path::new(compiler))?
        } else {
            which::which(compiler).map_err(|e| Error::CompilerNotFound(compiler.to_string(), e))?
        };

        Ok(Self {
            compiler,
            extra_args: extra_args.to_vec(),
        })
    }

    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Return `<compiler> <source> <object> -o <executable> [extra args]` running inside
    /// the working directory.
    pub fn command(&self, config: &Config) -> Command {
        let mut cmd = Command::new(&self.compiler);
        cmd.arg(&config.source)
            .arg(&config.object)
            .arg("-o")
            .arg(&config.executable)
            .args(&self.extra_args)
            .current_dir(&config.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run compiler and wait for it. Compiler diagnostics go straight to the inherited streams.
    pub fn build(&self, config: &Config) -> Result<ExitStatus, Error> {
        let mut cmd = self.command(config);
        info!(
            target: "harness",
            "build: {} {}",
            self.compiler.display(),
            cmd.get_args().map(|a| a.to_string_lossy()).join(" ")
        );

        cmd.status()
            .map_err(|e| Error::Spawn(Stage::Build, self.compiler.display().to_string(), e))
    }
}

/// Make path absolute against the current directory, child processes run in another one.
pub(crate) fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
