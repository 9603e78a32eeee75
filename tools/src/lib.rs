//! # Latinize Tools
//!
//! Song lyrics in Russian are often shared as [LRC](https://en.wikipedia.org/wiki/LRC_(file_format))
//! files, which a lot of car stereos, music players and karaoke machines can't display. This crate
//! provides a command-line utility that rewrites such a file in Latin script, while keeping the
//! `[ar:...]`, `[ti:...]` etc. metadata lines as they are.
//!
//! ```console
//! latinize
//! Command-line tool for transliterating Cyrillic lyric files to Latin script
//!
//! USAGE:
//!     latinize [OPTIONS] [ARGS]
//!
//! ARGS:
//!     <INPUT>     The lyric file to transliterate
//!     <OUTPUT>    Where to write the transliterated lyrics
//!
//! OPTIONS:
//!     -h, --help                        Print help information
//!         --map <PATH>                  Use the transliteration map in this JSON file instead of
//!                                       the built-in one
//!         --write-default-map <PATH>    Export the built-in map as JSON, so it can be used as a
//!                                       starting point for edits
//! ```
//!
//! ## Example
//!
//! ```console
//! $ latinize --write-default-map my_map.json
//! Default map written to: my_map.json
//! $ latinize kino.lrc kino_latin.lrc --map my_map.json
//! Transliteration completed: kino_latin.lrc
//! ```
//!
//! Set `RUST_LOG=debug` to see what is being loaded and written.

pub mod convert;
