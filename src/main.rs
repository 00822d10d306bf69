use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use mcrun::config::Config;
use mcrun::harness::{Harness, LogHook};
use mcrun::number::parse_lenient;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// First `myfunc` argument, non-numeric text is treated as zero
    #[arg(allow_hyphen_values = true, default_value = "0")]
    s: String,

    /// Second `myfunc` argument, non-numeric text is treated as zero
    #[arg(allow_hyphen_values = true, default_value = "0")]
    t: String,

    /// Directory for generated source, build artifacts and program execution
    #[arg(short = 'C', long, env = "MCRUN_WORK_DIR")]
    work_dir: Option<PathBuf>,

    /// Compiler executable (path or name in PATH)
    #[arg(long, env = "MCRUN_COMPILER")]
    compiler: Option<String>,

    /// Pre-built object file that defines `myfunc`
    #[arg(long)]
    object: Option<PathBuf>,

    /// Generated source file name
    #[arg(long)]
    source: Option<PathBuf>,

    /// Built executable name
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: ~/.config/mcrun/config.toml)
    #[arg(long, env = "MCRUN_CONFIG")]
    config: Option<PathBuf>,

    /// Exit with non-zero code if build or run step fails
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(work_dir) = &self.work_dir {
            config.work_dir = work_dir.clone();
        }
        if let Some(compiler) = &self.compiler {
            config.compiler = compiler.clone();
        }
        if let Some(object) = &self.object {
            config.object = object.clone();
        }
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(output) = &self.output {
            config.executable = output.clone();
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref()).context("load configuration")?;
    args.apply(&mut config);

    let s = parse_lenient(&args.s);
    let t = parse_lenient(&args.t);

    let stdout = std::io::stdout();
    let mut harness = Harness::new(config, stdout.lock(), LogHook);
    let report = harness.run(s, t).context("harness pass")?;

    if args.strict {
        report.check()?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("mcrun: {e:#}");
        std::process::exit(1);
    }
}
