use crate::config::Config;
use crate::error::Error;
use crate::harness::Stage;
use crate::toolchain::absolute;
use log::info;
use std::process::{Command, ExitStatus, Stdio};

/// Execute freshly built program without arguments and wait for it.
///
/// Program shares stdin, stdout and stderr with the harness, its output is not captured.
pub fn run_program(config: &Config) -> Result<ExitStatus, Error> {
    let program = absolute(&config.executable_path())?;
    info!(target: "harness", "run: {}", program.display());

    Command::new(&program)
        .current_dir(&config.work_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::Spawn(Stage::Run, program.display().to_string(), e))
}
