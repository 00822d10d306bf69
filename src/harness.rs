use crate::codegen::DriverSource;
use crate::config::Config;
use crate::error::Error;
use crate::muted_error;
use crate::reference::{display, reference_answer};
use crate::runner::run_program;
use crate::toolchain::Toolchain;
use log::{error, info, warn};
use std::fs;
use std::io::Write;
use std::process::ExitStatus;
use strum_macros::Display;

/// Harness step that runs an external process.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum Stage {
    #[strum(serialize = "build")]
    Build,
    #[strum(serialize = "run")]
    Run,
}

/// Observer of external process results.
pub trait HarnessHook {
    /// Called when step process exits (whatever exit status).
    fn on_exit(&self, stage: Stage, status: ExitStatus);
    /// Called when step process can't be started.
    fn on_spawn_error(&self, stage: Stage, err: &Error);
}

/// Hook that only writes step results into the log.
#[derive(Default)]
pub struct LogHook;

impl HarnessHook for LogHook {
    fn on_exit(&self, stage: Stage, status: ExitStatus) {
        if status.success() {
            info!(target: "harness", "{stage} step done");
        } else {
            warn!(target: "harness", "{stage} step failed ({status})");
        }
    }

    fn on_spawn_error(&self, stage: Stage, err: &Error) {
        error!(target: "harness", "{stage} step not started: {err:#}");
    }
}

/// Result of a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Process finished with exit status.
    Exited(ExitStatus),
    /// Process not started, contains a reason.
    NotStarted(String),
}

impl StepOutcome {
    pub fn success(&self) -> bool {
        matches!(self, StepOutcome::Exited(status) if status.success())
    }
}

/// Results of a single harness pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub build: StepOutcome,
    pub run: StepOutcome,
    /// Reference answer (`s + t - 5.0`).
    pub answer: f64,
}

impl Report {
    /// Return an error describing the first failed step.
    pub fn check(&self) -> Result<(), Error> {
        for (stage, outcome) in [(Stage::Build, &self.build), (Stage::Run, &self.run)] {
            match outcome {
                StepOutcome::Exited(status) if !status.success() => {
                    return Err(Error::StepFailed(stage, *status));
                }
                StepOutcome::NotStarted(reason) => {
                    return Err(Error::StepNotStarted(stage, reason.clone()));
                }
                StepOutcome::Exited(_) => {}
            }
        }
        Ok(())
    }
}

/// Generates, builds and runs a `myfunc` driver, then prints the reference answer.
///
/// Section labels and the reference answer go into `out`, build and run processes
/// inherit the harness standard streams.
pub struct Harness<W: Write, H: HarnessHook> {
    config: Config,
    out: W,
    hooks: H,
}

impl<W: Write, H: HarnessHook> Harness<W, H> {
    pub fn new(config: Config, out: W, hooks: H) -> Self {
        Self { config, out, hooks }
    }

    /// Do a single pass: `mine:`, program output, `ans:` and the reference answer.
    ///
    /// Build and run failures don't interrupt the pass, they are reported to hooks
    /// and returned as a part of [`Report`].
    pub fn run(&mut self, s: f64, t: f64) -> Result<Report, Error> {
        writeln!(self.out, "mine:")?;
        self.out.flush()?;

        self.generate(s, t)?;

        let build = self.build();
        let build = self.observe(Stage::Build, build)?;
        let run = run_program(&self.config);
        let run = self.observe(Stage::Run, run)?;

        let answer = reference_answer(s, t);
        writeln!(self.out, "ans:")?;
        writeln!(self.out, "{}", display(answer))?;
        self.out.flush()?;

        Ok(Report { build, run, answer })
    }

    fn generate(&self, s: f64, t: f64) -> Result<(), Error> {
        fs::create_dir_all(&self.config.work_dir)?;
        let path = self.config.source_path();
        DriverSource::new(s, t).write_to(&path)?;
        info!(target: "harness", "source written into {}", path.display());

        // executable from a previous pass must not outlive a failed build
        muted_error!(fs::remove_file(self.config.executable_path()));
        Ok(())
    }

    fn build(&self) -> Result<ExitStatus, Error> {
        let toolchain = Toolchain::resolve(&self.config.compiler, &self.config.compiler_args)?;
        toolchain.build(&self.config)
    }

    fn observe(
        &self,
        stage: Stage,
        result: Result<ExitStatus, Error>,
    ) -> Result<StepOutcome, Error> {
        match result {
            Ok(status) => {
                self.hooks.on_exit(stage, status);
                Ok(StepOutcome::Exited(status))
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                self.hooks.on_spawn_error(stage, &e);
                Ok(StepOutcome::NotStarted(e.to_string()))
            }
        }
    }
}
