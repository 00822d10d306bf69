pub mod codegen;
pub mod config;
pub mod error;
pub mod harness;
pub mod number;
pub mod reference;
pub mod runner;
pub mod toolchain;
