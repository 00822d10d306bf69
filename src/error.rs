use crate::harness::Stage;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // --------------------------------- generic errors --------------------------------------------
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // --------------------------------- configuration errors --------------------------------------
    #[error("read config file {0}: {1}")]
    ConfigRead(PathBuf, std::io::Error),
    #[error("parse config file {0}: {1}")]
    ConfigParse(PathBuf, toml::de::Error),

    // --------------------------------- process errors --------------------------------------------
    #[error("compiler `{0}` not found: {1}")]
    CompilerNotFound(String, which::Error),
    #[error("{0} step: spawn `{1}`: {2}")]
    Spawn(Stage, String, std::io::Error),
    #[error("{0} step failed ({1})")]
    StepFailed(Stage, ExitStatus),
    #[error("{0} step not started: {1}")]
    StepNotStarted(Stage, String),
}

impl Error {
    /// Return true if error means that the harness pass can't go on.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::ConfigRead(_, _) => true,
            Error::ConfigParse(_, _) => true,
            Error::CompilerNotFound(_, _) => false,
            Error::Spawn(_, _, _) => false,
            Error::StepFailed(_, _) => false,
            Error::StepNotStarted(_, _) => false,
        }
    }
}

#[macro_export]
macro_rules! _error {
    ($log_fn: path, $res: expr) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "harness", "{:#}", e);
                None
            }
        }
    };
    ($log_fn: path, $res: expr, $msg: tt) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "harness", concat!($msg, " {:#}"), e);
                None
            }
        }
    };
}

/// Transforms `Result` into `Option` and logs an error if it occurs.
#[macro_export]
macro_rules! weak_error {
    ($res: expr) => {
        $crate::_error!(log::warn, $res)
    };
    ($res: expr, $msg: tt) => {
        $crate::_error!(log::warn, $res, $msg)
    };
}

/// Transforms `Result` into `Option` and put error into debug logs if it occurs.
#[macro_export]
macro_rules! muted_error {
    ($res: expr) => {
        $crate::_error!(log::debug, $res)
    };
    ($res: expr, $msg: tt) => {
        $crate::_error!(log::debug, $res, $msg)
    };
}
