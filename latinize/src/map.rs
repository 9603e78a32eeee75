//! Character-to-string replacement tables

use serde::{Serialize, Serializer};
use std::{
    collections::HashMap,
    io::{self, Read, Write},
    path::Path,
    slice,
    str::FromStr,
};
use thiserror::Error;
use tracing::debug;

/// An immutable lookup from a single character to its replacement string
///
/// Every key is exactly one Unicode code point. Values may be empty (the character is
/// dropped from the output, e.g. for the hard and soft signs) or span multiple characters
/// (e.g. `Щ` becoming `Shch`).
///
/// A table is built once, either through [`MappingTable::default()`] for the built-in
/// Russian romanization or by loading a JSON object with [`MappingTable::from_path()`]
/// and friends. A loaded table _replaces_ the default entirely: characters it has no
/// entry for are left untouched by the transformer.
///
/// Entries remember the order they were first inserted in, which is the order they are
/// exported in. Two tables with the same entries compare equal regardless of that order.
#[derive(Debug, Clone)]
pub struct MappingTable {
    entries: HashMap<char, String>,
    order: Vec<char>,
}

impl MappingTable {
    /// The romanization used when no external table is supplied
    const DEFAULT_ENTRIES: [(char, &'static str); 66] = [
        ('А', "A"),
        ('Б', "B"),
        ('В', "V"),
        ('Г', "G"),
        ('Д', "D"),
        ('Е', "E"),
        ('Ё', "Yo"),
        ('Ж', "Zh"),
        ('З', "Z"),
        ('И', "I"),
        ('Й', "Y"),
        ('К', "K"),
        ('Л', "L"),
        ('М', "M"),
        ('Н', "N"),
        ('О', "O"),
        ('П', "P"),
        ('Р', "R"),
        ('С', "S"),
        ('Т', "T"),
        ('У', "U"),
        ('Ф', "F"),
        ('Х', "Kh"),
        ('Ц', "Ts"),
        ('Ч', "Ch"),
        ('Ш', "Sh"),
        ('Щ', "Shch"),
        ('Ъ', ""),
        ('Ы', "Y"),
        ('Ь', ""),
        ('Э', "E"),
        ('Ю', "Yu"),
        ('Я', "Ya"),
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('д', "d"),
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "zh"),
        ('з', "z"),
        ('и', "i"),
        ('й', "y"),
        ('к', "k"),
        ('л', "l"),
        ('м', "m"),
        ('н', "n"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ];

    fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Look up the replacement for a character, if the table has one
    pub fn get(&self, ch: char) -> Option<&str> {
        self.entries.get(&ch).map(String::as_str)
    }

    /// The number of characters that have a replacement
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Does the table contain _any_ entries?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries, in the order they were first inserted
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            chars: self.order.iter(),
        }
    }

    // A repeated character keeps its original position, but takes the new replacement
    fn insert(&mut self, ch: char, replacement: String) {
        if self.entries.insert(ch, replacement).is_none() {
            self.order.push(ch);
        }
    }

    /// Parse a table from a flat JSON object
    ///
    /// Keys must be exactly one character. Values must be strings, where `null` is read as
    /// the empty string. When a key occurs more than once, the last occurrence wins.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        // A leading byte order mark is allowed, but serde_json doesn't skip it
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);

        if json.trim().is_empty() {
            return Err(FormatError::Empty);
        }

        // serde_json is built with `preserve_order`, so the object keeps the document's key order
        let raw: Option<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(json)?;
        let raw = raw.ok_or(FormatError::Empty)?;

        let mut table = Self::empty();
        for (key, value) in raw {
            let replacement: Option<String> = serde_json::from_value(value)?;

            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => table.insert(ch, replacement.unwrap_or_default()),
                _ => return Err(FormatError::InvalidKey { key }),
            }
        }

        debug!(entries = table.len(), "Parsed mapping table");

        Ok(table)
    }

    /// Read a table from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;

        Ok(Self::from_json(&json)?)
    }

    /// Read a table from a JSON file on disk
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading mapping table");

        let file = std::fs::File::open(path)?;
        Ok(Self::from_reader(file)?)
    }

    /// Serialize the table to an arbitrary I/O writer as indented JSON
    ///
    /// Entries are written in insertion order, so the default table comes out in alphabet order.
    pub fn to_writer<W>(&self, writer: W) -> Result<(), io::Error>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Serialize the table to a JSON file on disk
    pub fn to_path<P>(&self, path: P) -> Result<(), io::Error>
    where
        P: AsRef<Path>,
    {
        let mut json = Vec::new();
        self.to_writer(&mut json)?;

        std::fs::write(path, json)
    }
}

impl Default for MappingTable {
    /// The built-in Russian romanization (33 upper and 33 lower case letters)
    fn default() -> Self {
        Self::DEFAULT_ENTRIES
            .iter()
            .map(|(ch, replacement)| (*ch, (*replacement).to_owned()))
            .collect()
    }
}

impl FromIterator<(char, String)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (ch, replacement) in iter {
            table.insert(ch, replacement);
        }

        table
    }
}

impl PartialEq for MappingTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for MappingTable {}

impl Serialize for MappingTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl FromStr for MappingTable {
    type Err = FormatError;

    #[inline]
    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Self::from_json(json)
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = (char, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`MappingTable`]
pub struct Iter<'a> {
    table: &'a MappingTable,
    chars: slice::Iter<'a, char>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (char, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.chars
            .find_map(|ch| table.get(*ch).map(|replacement| (*ch, replacement)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

/// Errors that describe why a JSON source is not a valid [`MappingTable`]
#[derive(Debug, Error)]
pub enum FormatError {
    /// The source contained no table at all (empty, whitespace or `null`)
    #[error("The map JSON is empty")]
    Empty,

    /// The source is not a flat JSON object of strings
    #[error("The map JSON is invalid")]
    Parse(#[from] serde_json::Error),

    /// Every key needs to be exactly one character
    #[error("Invalid key '{key}', each key must be exactly one character")]
    InvalidKey { key: String },
}

/// Errors that might be returned from [`MappingTable::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// The contents were not a valid table
    #[error("Parsing the map failed")]
    Format(#[from] FormatError),
}

/// Errors that might be returned from [`MappingTable::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Could not open the file for reading
    #[error("Could not open the file for reading")]
    FileOpen(#[from] io::Error),

    /// Deserialization from the file failed
    #[error("Reading the map from file failed")]
    Read(#[from] FromReaderError),
}
