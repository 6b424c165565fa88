//! Source attribution and its override chain.

use crate::model::{Entry, Meta, Translation};

/// A resolved source attribution.
///
/// `source_title` and `source_link` may be set at three levels: on the
/// document [`Meta`], on an [`Entry`], and on a [`Translation`]. Each field
/// resolves independently to the most specific level that sets it, so a
/// translation may override only the link while still inheriting the
/// document-level title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribution<'a> {
    title: Option<&'a str>,
    link: Option<&'a str>,
}

impl<'a> Attribution<'a> {
    pub(crate) fn for_entry(meta: &'a Meta, entry: &'a Entry) -> Self {
        Attribution {
            title: entry
                .source_title
                .as_deref()
                .or(meta.source_title.as_deref()),
            link: entry.source_link.as_deref().or(meta.source_link.as_deref()),
        }
    }

    pub(crate) fn for_translation(
        meta: &'a Meta,
        entry: &'a Entry,
        translation: &'a Translation,
    ) -> Self {
        let entry_level = Self::for_entry(meta, entry);
        Attribution {
            title: translation.source_title.as_deref().or(entry_level.title),
            link: translation.source_link.as_deref().or(entry_level.link),
        }
    }

    /// The source title, from the most specific level that sets one.
    #[inline]
    #[must_use]
    pub const fn title(&self) -> Option<&'a str> {
        self.title
    }

    /// The source URL, from the most specific level that sets one.
    #[inline]
    #[must_use]
    pub const fn link(&self) -> Option<&'a str> {
        self.link
    }
}
