//! Post-load consistency checks.
//!
//! Parsing is intentionally lenient: any structurally valid document loads.
//! [`Phrasebook::validate`](crate::Phrasebook::validate) reports the problems
//! lenient parsing lets through, without rejecting the document.

use std::fmt;

use thiserror::Error;

use crate::Phrasebook;

/// Which language field of the document [`Meta`](crate::Meta) an issue
/// refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangField {
    /// `meta.lang`, the language of the phrases.
    Lang,
    /// `meta.translation_lang`, the language of the translations.
    TranslationLang,
}

impl fmt::Display for LangField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LangField::Lang => f.write_str("lang"),
            LangField::TranslationLang => f.write_str("translation_lang"),
        }
    }
}

/// A consistency problem found by
/// [`Phrasebook::validate`](crate::Phrasebook::validate).
///
/// Issues are warnings. A document that produces them has still loaded and
/// can be worked with.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A `meta` language code is not shaped like an ISO 639-3 code.
    #[error("meta.{field}: {code:?} is not an ISO 639-3 code")]
    BadLanguageCode {
        /// The field the code was read from.
        field: LangField,
        /// The offending code.
        code: String,
    },
    /// An entry's phrase is empty or whitespace.
    #[error("entry {index}: phrase is empty")]
    EmptyPhrase {
        /// Position of the entry within the document.
        index: usize,
    },
    /// An entry has no translations.
    #[error("entry {index} ({phrase:?}): no translations")]
    NoTranslations {
        /// Position of the entry within the document.
        index: usize,
        /// The entry's phrase.
        phrase: String,
    },
    /// A translation's content is empty or whitespace.
    #[error(
        "entry {index} ({phrase:?}): translation {translation_index} is empty"
    )]
    EmptyTranslation {
        /// Position of the entry within the document.
        index: usize,
        /// The entry's phrase.
        phrase: String,
        /// Position of the translation within the entry.
        translation_index: usize,
    },
}

/// Returns `true` if `code` is shaped like an ISO 639-3 code: exactly three
/// ASCII lowercase letters.
///
/// Shape only. Codes are not checked against the ISO 639-3 registry, so e.g.
/// `"zzz"` passes.
#[must_use]
pub fn is_iso_639_3_shape(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|byte| byte.is_ascii_lowercase())
}

pub(crate) fn validate(book: &Phrasebook) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let meta = book.meta();
    [
        (LangField::Lang, meta.lang()),
        (LangField::TranslationLang, meta.translation_lang()),
    ]
    .into_iter()
    .filter(|(_, code)| !is_iso_639_3_shape(code))
    .for_each(|(field, code)| {
        issues.push(ValidationIssue::BadLanguageCode {
            field,
            code: code.to_owned(),
        });
    });

    book.iter().enumerate().for_each(|(index, entry)| {
        if entry.phrase().trim().is_empty() {
            issues.push(ValidationIssue::EmptyPhrase { index });
        }
        if entry.translations().is_empty() {
            issues.push(ValidationIssue::NoTranslations {
                index,
                phrase: entry.phrase().to_owned(),
            });
        }
        entry.translations().iter().enumerate().for_each(
            |(translation_index, translation)| {
                if translation.content().trim().is_empty() {
                    issues.push(ValidationIssue::EmptyTranslation {
                        index,
                        phrase: entry.phrase().to_owned(),
                        translation_index,
                    });
                }
            },
        );
    });

    issues
}
