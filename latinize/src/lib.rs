//! Transliterate lyric files from Cyrillic to Latin script.
//!
//! The heart of this crate is a [`MappingTable`](map::MappingTable): a lookup from single
//! characters to replacement strings. The built-in table romanizes the 33 letters of the
//! Russian alphabet, but any table can be loaded from a flat JSON object instead.
//!
//! Lyric files (`.lrc`) carry metadata lines like `[ar:Artist]` or `[ti:Title]`. These are
//! detected by [`is_tag_line()`](line::is_tag_line) and left alone, while every other line is
//! rewritten character by character.
//!
//! ```
//! use latinize::{line::transliterate_line, map::MappingTable};
//!
//! let table = MappingTable::default();
//! assert_eq!(transliterate_line("Привет, мир!", &table), "Privet, mir!");
//! assert_eq!(transliterate_line("[ar:Кино]", &table), "[ar:Кино]");
//! ```

pub mod line;
pub mod lyrics;
pub mod map;
