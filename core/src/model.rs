use serde::{Deserialize, Serialize};

/// Document-level metadata: the language pair and the default source
/// attribution for every entry in the phrasebook.
///
/// `lang` and `translation_lang` are expected to be ISO 639-3 codes. They are
/// not checked while parsing; see
/// [`Phrasebook::validate`](crate::Phrasebook::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) lang: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) translation_lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source_link: Option<String>,
}

impl Meta {
    /// Create metadata for a language pair, with no default attribution.
    pub fn new(
        lang: impl Into<String>,
        translation_lang: impl Into<String>,
    ) -> Self {
        Meta {
            lang: lang.into(),
            translation_lang: translation_lang.into(),
            source_title: None,
            source_link: None,
        }
    }

    /// Set the document-level source attribution.
    ///
    /// Designed to support method chaining:
    ///
    /// ```
    /// # use phrasebook::Meta;
    /// let mut meta = Meta::new("eng", "tgl");
    /// meta.source(
    ///     "Tagalog Wikivoyage Phrasebook",
    ///     "https://en.wikivoyage.org/wiki/Tagalog_phrasebook",
    /// );
    /// ```
    pub fn source(
        &mut self,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> &mut Self {
        self.source_title = Some(title.into());
        self.source_link = Some(link.into());
        self
    }

    /// The language the phrases are written in.
    #[inline]
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The language the translations are written in.
    #[inline]
    #[must_use]
    pub fn translation_lang(&self) -> &str {
        &self.translation_lang
    }

    /// The default source title for the whole document, if set.
    #[inline]
    #[must_use]
    pub fn source_title(&self) -> Option<&str> {
        self.source_title.as_deref()
    }

    /// The default source URL for the whole document, if set.
    #[inline]
    #[must_use]
    pub fn source_link(&self) -> Option<&str> {
        self.source_link.as_deref()
    }
}

/// One phrase with its category tags, usage note, and translations.
///
/// Entry order within a [`Phrasebook`](crate::Phrasebook) reflects
/// presentation order and is preserved through parsing and serialization.
/// Category order carries no meaning and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub(crate) phrase: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) usage_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source_link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) translations: Vec<Translation>,
}

impl Entry {
    /// Create an entry for a phrase, with no translations yet.
    pub fn new(phrase: impl Into<String>) -> Self {
        Entry {
            phrase: phrase.into(),
            categories: Vec::new(),
            usage_note: None,
            source_title: None,
            source_link: None,
            translations: Vec::new(),
        }
    }

    /// Tag the entry with a category.
    pub fn category(&mut self, category: impl Into<String>) -> &mut Self {
        self.categories.push(category.into());
        self
    }

    /// Append a translation.
    pub fn translation(&mut self, translation: Translation) -> &mut Self {
        self.translations.push(translation);
        self
    }

    /// Set the usage note.
    pub fn note(&mut self, usage_note: impl Into<String>) -> &mut Self {
        self.usage_note = Some(usage_note.into());
        self
    }

    /// Set an entry-level source title, overriding the document default.
    pub fn source_title_override(
        &mut self,
        title: impl Into<String>,
    ) -> &mut Self {
        self.source_title = Some(title.into());
        self
    }

    /// Set an entry-level source URL, overriding the document default.
    pub fn source_link_override(
        &mut self,
        link: impl Into<String>,
    ) -> &mut Self {
        self.source_link = Some(link.into());
        self
    }

    /// The phrase itself.
    #[inline]
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The category tags on this entry.
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The usage note, if one is recorded.
    #[inline]
    #[must_use]
    pub fn usage_note(&self) -> Option<&str> {
        self.usage_note.as_deref()
    }

    /// The entry-level source title override, if set.
    ///
    /// For the resolved attribution, use
    /// [`Phrasebook::entry_attribution`](crate::Phrasebook::entry_attribution).
    #[inline]
    #[must_use]
    pub fn source_title(&self) -> Option<&str> {
        self.source_title.as_deref()
    }

    /// The entry-level source URL override, if set.
    #[inline]
    #[must_use]
    pub fn source_link(&self) -> Option<&str> {
        self.source_link.as_deref()
    }

    /// The translations of this phrase, in presentation order.
    #[inline]
    #[must_use]
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }
}

/// One rendering of a phrase into the translation language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Translation {
    pub(crate) content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source_link: Option<String>,
}

impl Translation {
    /// Create a translation with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Translation {
            content: content.into(),
            examples: Vec::new(),
            source_title: None,
            source_link: None,
        }
    }

    /// Append an example sentence.
    pub fn example(&mut self, example: impl Into<String>) -> &mut Self {
        self.examples.push(example.into());
        self
    }

    /// Set a translation-level source title, overriding entry and document
    /// defaults.
    pub fn source_title_override(
        &mut self,
        title: impl Into<String>,
    ) -> &mut Self {
        self.source_title = Some(title.into());
        self
    }

    /// Set a translation-level source URL, overriding entry and document
    /// defaults.
    pub fn source_link_override(
        &mut self,
        link: impl Into<String>,
    ) -> &mut Self {
        self.source_link = Some(link.into());
        self
    }

    /// The translated text.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Example sentences, in presentation order.
    #[inline]
    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// The translation-level source title override, if set.
    #[inline]
    #[must_use]
    pub fn source_title(&self) -> Option<&str> {
        self.source_title.as_deref()
    }

    /// The translation-level source URL override, if set.
    #[inline]
    #[must_use]
    pub fn source_link(&self) -> Option<&str> {
        self.source_link.as_deref()
    }
}
