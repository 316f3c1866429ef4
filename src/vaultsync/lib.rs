//! # vaultsync
//!
//! Mirrors category folders of an Obsidian vault into an Astro content tree,
//! rewriting each note's front matter into the shape the site expects.
//!
//! ```text
//! <vault>/<category>/<note>.md  ──convert──▶  <content>/<category>/<note>.md
//! ```
//!
//! The work splits in two:
//!
//! - [`convert`]: the pure text transformation. Given a file name, the note
//!   text and its category it returns the converted note, or `None` when the
//!   note has no `---` front matter block. No I/O happens here, so it is where
//!   most of the testing lives.
//! - [`sync`]: the driver. Lists each `<vault>/<category>` folder, filters by
//!   extension and exclusion substrings, runs the conversion and writes the
//!   result to the mirrored path.
//!
//! Configuration ([`config::SyncConfig`]) is loaded once by the binary and
//! passed down explicitly; nothing reads global state.
//!
//! ## Module Overview
//!
//! - [`config`]: `settings.json` loading and path/filter helpers
//! - [`convert`]: front matter parsing, tag, date and link handling
//! - [`sync`]: the directory walk
//! - [`model`]: notes and front matter types
//! - [`error`]: error types

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod sync;
