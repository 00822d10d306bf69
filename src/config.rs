use crate::error::Error;
use crate::{muted_error, weak_error};
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Harness configuration: where artifacts live and how they are built.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory for generated source, object file and executable.
    /// Also the working directory of the compiler and of the built program.
    pub work_dir: PathBuf,
    /// Compiler executable, a path or a name looked up in `PATH`.
    pub compiler: String,
    /// Arguments appended after the fixed compiler arguments.
    pub compiler_args: Vec<String>,
    /// Pre-built object file that defines `myfunc`.
    pub object: PathBuf,
    /// Generated source file name.
    pub source: PathBuf,
    /// Built executable name.
    pub executable: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            compiler: "clang++".to_string(),
            compiler_args: vec![],
            object: PathBuf::from("output.o"),
            source: PathBuf::from("func.cpp"),
            executable: PathBuf::from("func"),
        }
    }
}

impl Config {
    const DEFAULT_PATH: &'static str = ".config/mcrun/config.toml";

    /// Return default configuration updated with values from a config file.
    ///
    /// # Arguments
    ///
    /// * `path`: explicit config file path, errors while reading or parsing it are returned;
    ///   if `None` then `~/.config/mcrun/config.toml` is used, and it's fine if it is missing
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let file = match path {
            Some(path) => Some(ConfigFile::read(path)?),
            None => Self::default_file_path().and_then(|path| {
                let data = muted_error!(read_to_string(&path))?;
                weak_error!(ConfigFile::parse(&path, &data), "ignore config file:")
            }),
        };

        let mut config = Config::default();
        if let Some(file) = file {
            config.apply(file);
        }
        Ok(config)
    }

    fn default_file_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(Self::DEFAULT_PATH))
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(work_dir) = file.work_dir {
            self.work_dir = work_dir;
        }
        if let Some(compiler) = file.compiler {
            self.compiler = compiler;
        }
        if let Some(compiler_args) = file.compiler_args {
            self.compiler_args = compiler_args;
        }
        if let Some(object) = file.object {
            self.object = object;
        }
        if let Some(source) = file.source {
            self.source = source;
        }
        if let Some(executable) = file.executable {
            self.executable = executable;
        }
    }

    /// Path of the generated source file.
    pub fn source_path(&self) -> PathBuf {
        self.work_dir.join(&self.source)
    }

    /// Path of the built executable.
    pub fn executable_path(&self) -> PathBuf {
        self.work_dir.join(&self.executable)
    }
}

/// Config file representation, every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    work_dir: Option<PathBuf>,
    compiler: Option<String>,
    compiler_args: Option<Vec<String>>,
    object: Option<PathBuf>,
    source: Option<PathBuf>,
    executable: Option<PathBuf>,
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Self, Error> {
        let data = read_to_string(path).map_err(|e| Error::ConfigRead(path.to_path_buf(), e))?;
        Self::parse(path, &data)
    }

    fn parse(path: &Path, data: &str) -> Result<Self, Error> {
        toml::de::from_str(data).map_err(|e| Error::ConfigParse(path.to_path_buf(), e))
    }
}
