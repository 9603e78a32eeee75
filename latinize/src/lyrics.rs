//! Whole lyric documents (`.lrc` and plain text)

use crate::{line::transliterate_line, map::MappingTable};
use std::{
    io::{self, Read, Write},
    path::Path,
};
use thiserror::Error;
use tracing::debug;

/// The line ending written after every line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// The line ending written after every line
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A lyric document, held in memory as its individual lines
///
/// Lines are split on `\r\n`, `\n` and a lone `\r`. A trailing line ending does not produce an
/// extra empty line, and every line is followed by [`LINE_ENDING`] when written back out.
/// Transliterating a [`Lyrics`] never adds or removes lines: line _i_ of the output is derived
/// from line _i_ of the input only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lyrics {
    lines: Vec<String>,
}

impl Lyrics {
    /// Split a text into lines
    pub fn from_text(text: &str) -> Self {
        let mut rest = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = Vec::new();

        while let Some(end) = rest.find(['\r', '\n']) {
            lines.push(rest[..end].to_owned());

            let ending = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + ending..];
        }

        if !rest.is_empty() {
            lines.push(rest.to_owned());
        }

        Self { lines }
    }

    /// Read [`Lyrics`] from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R) -> Result<Self, io::Error>
    where
        R: Read,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        Ok(Self::from_text(&text))
    }

    /// Read [`Lyrics`] from a file on disk
    pub fn from_path<P>(path: P) -> Result<Self, io::Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let lyrics = Self::from_reader(std::fs::File::open(path)?)?;

        debug!(path = %path.display(), lines = lyrics.len(), "Read lyrics");
        Ok(lyrics)
    }

    /// The lines that make up the document, without line endings
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The number of lines in the document
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Are there _any_ lines in the document?
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Transliterate every line with a [`MappingTable`], keeping the line order
    pub fn transliterate(&self, table: &MappingTable) -> Self {
        self.lines
            .iter()
            .map(|line| transliterate_line(line, table).into_owned())
            .collect()
    }

    /// Serialize the [`Lyrics`] to an arbitrary I/O writer
    pub fn to_writer<W>(&self, mut writer: W) -> Result<(), io::Error>
    where
        W: Write,
    {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(LINE_ENDING.as_bytes())?;
        }

        Ok(())
    }

    /// Serialize the [`Lyrics`] to a file on disk
    ///
    /// The whole document is rendered before the file is created, so nothing is written if
    /// rendering fails.
    pub fn to_path<P>(&self, path: P) -> Result<(), io::Error>
    where
        P: AsRef<Path>,
    {
        let mut text = Vec::new();
        self.to_writer(&mut text)?;

        std::fs::write(path, text)
    }
}

impl FromIterator<String> for Lyrics {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// Errors that might be returned from [`transliterate_file()`]
#[derive(Debug, Error)]
pub enum TransliterateFileError {
    /// The input could not be read
    #[error("Could not read the lyrics")]
    Read(#[source] io::Error),

    /// The output could not be written
    #[error("Could not write the transliterated lyrics")]
    Write(#[source] io::Error),
}

/// Read a lyric file, transliterate it and write the result to another path
///
/// Returns the number of lines written. The output is only touched once the input has been read
/// and transliterated completely.
pub fn transliterate_file<P, Q>(
    input: P,
    output: Q,
    table: &MappingTable,
) -> Result<usize, TransliterateFileError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let lyrics = Lyrics::from_path(input).map_err(TransliterateFileError::Read)?;
    let latin = lyrics.transliterate(table);

    latin.to_path(output).map_err(TransliterateFileError::Write)?;

    Ok(latin.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_text() {
        let lyrics = Lyrics::from_text("one\r\ntwo\n\nfour\n");
        assert_eq!(lyrics.lines(), ["one", "two", "", "four"]);

        assert!(Lyrics::from_text("").is_empty());
        assert_eq!(Lyrics::from_text("\n").lines(), [""]);
        assert_eq!(Lyrics::from_text("no ending").len(), 1);
        assert_eq!(Lyrics::from_text("\u{feff}[ar:Кино]\n").lines(), ["[ar:Кино]"]);
    }

    #[test]
    fn carriage_returns() {
        assert_eq!(Lyrics::from_text("one\rtwo\r").lines(), ["one", "two"]);
        assert_eq!(Lyrics::from_text("\r\r\n\n").lines(), ["", "", ""]);
        assert_eq!(Lyrics::from_text("a\r\nb\rc\nd").lines(), ["a", "b", "c", "d"]);

        // Every line gets its own tag check
        let lyrics = Lyrics::from_text("[ar:Кино]\rконь\r[ti:я]");
        let latin = lyrics.transliterate(&MappingTable::default());
        assert_eq!(latin.lines(), ["[ar:Кино]", "kon", "[ti:я]"]);
    }

    #[test]
    fn sample() {
        let table = MappingTable::default();
        let lyrics = Lyrics::from_text(include_str!("../test/sample.lrc"));
        let expected = Lyrics::from_text(include_str!("../test/sample_latin.lrc"));

        let latin = lyrics.transliterate(&table);
        assert_eq!(latin.len(), lyrics.len());
        assert_eq!(latin, expected);

        // Tag lines are copied verbatim
        assert_eq!(latin.lines()[0], "[ti:Звезда по имени Солнце]");
        assert_eq!(latin.lines()[1], "[ar:Кино]");
    }

    #[test]
    fn line_correspondence() {
        let table = MappingTable::default();
        let lyrics = Lyrics::from_text("я\n\n[ar:я]\nЪ\nя ");

        let latin = lyrics.transliterate(&table);
        assert_eq!(latin.lines(), ["ya", "", "[ar:я]", "", "ya "]);
    }

    #[test]
    fn to_writer() -> anyhow::Result<()> {
        let lyrics = Lyrics::from_text("Kino\n[ar:Кино]");

        let mut dest = Vec::new();
        lyrics.to_writer(Cursor::new(&mut dest))?;

        assert_eq!(
            String::from_utf8(dest)?,
            format!("Kino{LINE_ENDING}[ar:Кино]{LINE_ENDING}")
        );

        Ok(())
    }

    #[test]
    fn invalid_utf8() {
        assert!(Lyrics::from_reader(Cursor::new([0x41u8, 0xc3, 0x28])).is_err());
    }

    #[test]
    fn file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("song.lrc");
        let output = dir.path().join("song.latin.lrc");

        std::fs::write(&input, include_str!("../test/sample.lrc"))?;

        let count = transliterate_file(&input, &output, &MappingTable::default())?;
        assert_eq!(count, 8);

        let written = Lyrics::from_path(&output)?;
        assert_eq!(
            written,
            Lyrics::from_text(include_str!("../test/sample_latin.lrc"))
        );

        Ok(())
    }

    #[test]
    fn missing_input_leaves_output_alone() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("out.lrc");
        std::fs::write(&output, "untouched")?;

        let result = transliterate_file(
            dir.path().join("missing.lrc"),
            &output,
            &MappingTable::default(),
        );

        assert!(matches!(result, Err(TransliterateFileError::Read(_))));
        assert_eq!(std::fs::read_to_string(&output)?, "untouched");

        Ok(())
    }
}
