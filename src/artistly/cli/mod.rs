//! # CLI Layer
//!
//! One possible client of the artistly library, and the only place that:
//! - Parses arguments (clap, in [`setup`])
//! - Writes to stdout/stderr and decides exit codes
//! - Sets up logging
//!
//! Each handler in [`commands`] turns flags into library inputs (a
//! `FilterState`, an `ArtistApplication`), calls one `ArtistlyApi` method and
//! hands the resulting `CmdResult` to [`render`]. Pages render through the
//! minijinja templates in [`templates`], or as JSON with `--json`.
//!
//! Business rules are not tested here; the command layer owns them. CLI tests
//! check that arguments reach the API and that output lands where it should.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
