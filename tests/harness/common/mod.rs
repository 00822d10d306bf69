use mcrun::config::Config;
use mcrun::error::Error;
use mcrun::harness::{HarnessHook, Stage};
use std::cell::RefCell;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct TestInfo {
    pub exits: Arc<RefCell<Vec<(Stage, Option<i32>)>>>,
    pub spawn_errors: Arc<RefCell<Vec<Stage>>>,
}

#[derive(Default)]
pub struct TestHooks {
    info: TestInfo,
}

impl TestHooks {
    pub fn new(info: TestInfo) -> Self {
        Self { info }
    }
}

impl HarnessHook for TestHooks {
    fn on_exit(&self, stage: Stage, status: ExitStatus) {
        self.info.exits.borrow_mut().push((stage, status.code()));
    }

    fn on_spawn_error(&self, stage: Stage, _: &Error) {
        self.info.spawn_errors.borrow_mut().push(stage);
    }
}

/// Write an executable shell script.
pub fn write_script(path: &Path, body: &str) -> PathBuf {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perm = fs::metadata(path).unwrap().permissions();
    perm.set_mode(0o755);
    fs::set_permissions(path, perm).unwrap();
    path.to_path_buf()
}

/// Create compiler stand-in that saves its arguments into `cc-args.txt` and produces
/// an executable printing `program_output`.
pub fn fake_compiler(dir: &Path, program_output: &str) -> PathBuf {
    let body = format!(
        r#"echo "$@" > cc-args.txt
printf '#!/bin/sh\necho {program_output}\n' > "$4"
chmod +x "$4""#
    );
    write_script(&dir.join("fake-cc.sh"), &body)
}

pub fn config_with_compiler(work_dir: &Path, compiler: impl Into<String>) -> Config {
    Config {
        work_dir: work_dir.to_path_buf(),
        compiler: compiler.into(),
        ..Config::default()
    }
}
