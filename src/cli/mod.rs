//! CLI subcommand implementations for the `pddl` binary.
//!
//! CLI argument parsing uses clap derive macros, with the top-level
//! [`app::Cli`] struct and [`app::Commands`] enum defined in [`app`] and
//! shared between `main.rs` and `build.rs` (for man page generation) via
//! `include!()`.
//!
//! Each subcommand module has an `Options` struct holding the parsed
//! arguments and a `pub fn execute(opts, writer) -> Result<_, PddlError>`
//! entry point. The `writer: &mut dyn Write` parameter allows output to be
//! captured in tests or redirected to a file via the global `--output` flag.
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `pddl extract` | [`extract`] | Print DDL, or write the schema tree of an object to a JSON file |
//! | `pddl completions` | (inline in `main.rs`) | Shell completion scripts |
//!
//! The `wprintln!` macro wraps `writeln!` to convert `io::Error` into `PddlError`.

pub mod app;
pub mod extract;

/// Write a line to the given writer, converting io::Error to PddlError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::PddlError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::PddlError::Io(e.to_string()))
    };
}

pub(crate) use wprintln;
