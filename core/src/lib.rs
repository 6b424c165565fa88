#![cfg_attr(docsrs, feature(doc_cfg))]
// Copied from the top of the repo README with minor edits
//! Phrasebook is a library for working with bilingual phrasebook documents:
//! JSON files pairing phrases in one language with their translations in
//! another, as produced by human-curated sources such as travel phrasebooks
//! and collaborative dictionaries.
//!
//! A phrasebook document holds shared [`Meta`]data (the language pair, given
//! as ISO 639-3 codes, and default source attribution) and an ordered list of
//! [`Entry`]s. Each entry carries one phrase, its category tags, an optional
//! usage note, and an ordered list of [`Translation`]s, each of which may
//! come with example sentences. Attribution can be overridden per entry and
//! per translation; [`Phrasebook::entry_attribution`] and
//! [`Phrasebook::translation_attribution`] resolve the override chain.
//!
//! Parsing is strict about structure (a missing `phrase` or `content` is an
//! error) but lenient about everything else; [`Phrasebook::validate`] reports
//! the problems lenient parsing lets through.

use std::{fs, io, path::Path, str::FromStr};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

pub use crate::{
    attribution::Attribution,
    errors::{ParseError, PhrasebookError, SerializeError},
    iter::EntryIter,
    model::{Entry, Meta, Translation},
    validation::{LangField, ValidationIssue, is_iso_639_3_shape},
};

mod attribution;
pub mod errors;
mod iter;
mod model;
mod validation;

#[cfg(feature = "rayon")]
pub use crate::iter::rayon::ParEntryIter;

/// A bilingual phrasebook document.
///
/// A serialized phrasebook looks like this:
///
/// ```json
#[doc = include_str!("../data/phrasebook.sample.json")]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Phrasebook {
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    pub(crate) entries: Vec<Entry>,
}

impl Phrasebook {
    /// Create an empty phrasebook for the given metadata.
    #[must_use]
    pub const fn new(meta: Meta) -> Self {
        Phrasebook {
            meta,
            entries: Vec::new(),
        }
    }

    /// Load a phrasebook from a JSON file.
    ///
    /// Fails if the file can't be read, or if the document is structurally
    /// invalid: an entry without a `phrase`, or a translation without
    /// `content`. All other fields may be absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PhrasebookError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|io_err| {
            PhrasebookError::FailedToRead(path.to_owned(), io_err)
        })?;
        let book: Phrasebook =
            serde_json::from_str(&content).map_err(|json_err| {
                PhrasebookError::Malformed(path.to_owned(), json_err)
            })?;
        debug!(
            "loaded {} entries ({} -> {}) from {}",
            book.entries.len(),
            book.meta.lang(),
            book.meta.translation_lang(),
            path.display(),
        );
        Ok(book)
    }

    /// Parse a phrasebook from anything that reads JSON.
    ///
    /// Prefer [`Phrasebook::load`] for files; its errors name the offending
    /// path.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, ParseError> {
        serde_json::from_reader(reader).map_err(ParseError::from)
    }

    /// Serialize to two-space-indented JSON, with non-ASCII text left
    /// unescaped.
    ///
    /// This matches the layout the documents are distributed in, so a loaded
    /// phrasebook serializes back to a structurally equivalent document.
    pub fn to_json_pretty(&self) -> Result<String, SerializeError> {
        serde_json::to_string_pretty(self).map_err(SerializeError::from)
    }

    /// Write the phrasebook to a file as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PhrasebookError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|io_err| {
            PhrasebookError::FailedToWrite(path.to_owned(), io_err)
        })?;
        debug!(
            "wrote {} entries to {}",
            self.entries.len(),
            path.display(),
        );
        Ok(())
    }

    /// The document metadata.
    #[inline]
    #[must_use]
    pub const fn meta(&self) -> &Meta {
        &self.meta
    }

    /// The entries, in presentation order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append an entry.
    ///
    /// Designed to support method chaining:
    ///
    /// ```
    /// # use phrasebook::{Entry, Meta, Phrasebook, Translation};
    /// let mut book = Phrasebook::new(Meta::new("eng", "tgl"));
    /// let mut entry = Entry::new("Thank you.");
    /// entry.category("basics").translation(Translation::new("Salamat."));
    /// book.entry(entry);
    /// ```
    pub fn entry(&mut self, entry: Entry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Iterate through the entries.
    pub fn iter(&self) -> EntryIter<'_> {
        EntryIter(self.entries.iter())
    }

    /// Get how many entries there are in the phrasebook.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries in the phrasebook.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of translations across all entries.
    #[must_use]
    pub fn translation_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.translations.len())
            .sum()
    }

    /// Total number of example sentences across all translations.
    #[must_use]
    pub fn example_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|entry| &entry.translations)
            .map(|translation| translation.examples.len())
            .sum()
    }

    /// Tally of category tags across all entries.
    ///
    /// Sorted by descending count, ties broken alphabetically. Duplicate tags
    /// on a single entry are counted as often as they appear.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .flat_map(|entry| entry.categories.iter().map(String::as_str))
            .counts()
            .into_iter()
            .sorted_by(|(category_a, count_a), (category_b, count_b)| {
                count_b.cmp(count_a).then_with(|| category_a.cmp(category_b))
            })
            .collect()
    }

    /// Resolve the source attribution for `entry`.
    ///
    /// Entry-level fields win over the document-level defaults, each field
    /// independently. It is not validated that `entry` belongs to this
    /// phrasebook.
    #[must_use]
    pub fn entry_attribution<'a>(&'a self, entry: &'a Entry) -> Attribution<'a> {
        Attribution::for_entry(&self.meta, entry)
    }

    /// Resolve the source attribution for `translation` within `entry`.
    ///
    /// Translation-level fields win over entry-level fields, which win over
    /// the document-level defaults, each field independently. It is not
    /// validated that the entry and translation belong to this phrasebook.
    #[must_use]
    pub fn translation_attribution<'a>(
        &'a self,
        entry: &'a Entry,
        translation: &'a Translation,
    ) -> Attribution<'a> {
        Attribution::for_translation(&self.meta, entry, translation)
    }

    /// Check the document for problems lenient parsing lets through:
    /// malformed language codes, empty phrases or translations, entries with
    /// nothing to say.
    ///
    /// Returns an empty `Vec` for a clean document.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validation::validate(self)
    }
}

impl FromStr for Phrasebook {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(ParseError::from)
    }
}
