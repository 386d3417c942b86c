//! # sdr-module
//!
//! Contracts for external decoder processes fed with sample streams.
//!
//! A module describes the command line of an external tool and the sample
//! format it reads on stdin and writes on stdout. Spawning the process and
//! pumping buffers through it is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use sdr_module::{Format, PopenModule, rtl433::Rtl433Module};
//!
//! let module = Rtl433Module::new(48000, true);
//! assert_eq!(module.command()[0], "rtl_433");
//! assert_eq!(module.input_format(), Format::ComplexShort);
//!
//! // configured, not yet spawned
//! let _cmd = module.process();
//! ```
//!
//! ## Modules
//!
//! - [`rtl433`] - rtl_433 ISM band decoder

#[macro_use]
extern crate log;

use std::process::{Command, Stdio};

use strum::{Display, EnumString};

/// rtl_433 ISM band decoder.
pub mod rtl433;

/// Sample encodings exchanged with external processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    /// Raw bytes / text.
    Char,
    /// Signed 16-bit samples.
    Short,
    /// 32-bit float samples.
    Float,
    /// Interleaved signed 16-bit I/Q pairs.
    ComplexShort,
    /// Interleaved 32-bit float I/Q pairs.
    ComplexFloat,
    /// Interleaved 8-bit I/Q pairs.
    ComplexChar,
}

/// An external process that consumes one sample stream and produces another.
pub trait PopenModule {
    /// Program and arguments, program first.
    fn command(&self) -> Vec<String>;

    /// Format written to the process's stdin.
    fn input_format(&self) -> Format;

    /// Format read from the process's stdout.
    fn output_format(&self) -> Format;

    /// Builds the process with piped stdin/stdout, without spawning it.
    fn process(&self) -> Command {
        let args = self.command();
        debug!(
            "decoder command: {} ({} -> {})",
            args.join(" "),
            self.input_format(),
            self.output_format()
        );
        let mut iter = args.into_iter();
        let mut cmd = Command::new(iter.next().unwrap_or_default());
        cmd.args(iter)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        cmd
    }
}
