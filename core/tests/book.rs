#![allow(missing_docs)]

use phrasebook::{
    Entry, LangField, Meta, Phrasebook, Translation, ValidationIssue,
    is_iso_639_3_shape,
};

fn wikivoyage_book() -> Phrasebook {
    let mut meta = Meta::new("eng", "tgl");
    meta.source(
        "Tagalog Wikivoyage Phrasebook",
        "https://en.wikivoyage.org/wiki/Tagalog_phrasebook",
    );
    let mut book = Phrasebook::new(meta);

    let mut hello = Entry::new("Hello.");
    let mut kumusta = Translation::new("Kumusta.");
    kumusta.example("Kumusta, kaibigan?");
    hello.category("basics").translation(kumusta);
    book.entry(hello);

    let mut thanks = Entry::new("Thank you.");
    thanks
        .category("basics")
        .category("politeness")
        .translation(Translation::new("Salamat."));
    book.entry(thanks);

    book
}

#[test]
fn attribution_inherits_document_defaults() {
    let book = wikivoyage_book();
    let entry = &book.entries()[0];

    let attribution = book.entry_attribution(entry);
    assert_eq!(attribution.title(), Some("Tagalog Wikivoyage Phrasebook"));
    assert_eq!(
        attribution.link(),
        Some("https://en.wikivoyage.org/wiki/Tagalog_phrasebook"),
    );
}

#[test]
fn entry_overrides_win_over_document_defaults() {
    let mut book = wikivoyage_book();
    let mut entry = Entry::new("How much?");
    entry
        .source_title_override("Shopping appendix")
        .translation(Translation::new("Magkano?"));
    book.entry(entry);

    let entry = book.entries().last().unwrap();
    let attribution = book.entry_attribution(entry);
    assert_eq!(attribution.title(), Some("Shopping appendix"));
    // The link wasn't overridden, so it still comes from the document level
    assert_eq!(
        attribution.link(),
        Some("https://en.wikivoyage.org/wiki/Tagalog_phrasebook"),
    );
}

#[test]
fn translation_overrides_win_over_entry_overrides() {
    let mut book = wikivoyage_book();

    let mut translation = Translation::new("Magkano?");
    translation.source_link_override("https://example.com/shopping");
    let mut entry = Entry::new("How much?");
    entry
        .source_title_override("Shopping appendix")
        .source_link_override("https://example.com/appendix")
        .translation(translation);
    book.entry(entry);

    let entry = book.entries().last().unwrap();
    let translation = &entry.translations()[0];
    let attribution = book.translation_attribution(entry, translation);
    // Fields resolve independently: the translation only overrode the link
    assert_eq!(attribution.title(), Some("Shopping appendix"));
    assert_eq!(attribution.link(), Some("https://example.com/shopping"));
}

#[test]
fn clean_book_validates_without_issues() {
    assert!(wikivoyage_book().validate().is_empty());
}

#[test]
fn language_code_shapes() {
    assert!(is_iso_639_3_shape("tgl"));
    assert!(is_iso_639_3_shape("zzz"));
    assert!(!is_iso_639_3_shape("en"));
    assert!(!is_iso_639_3_shape("ENG"));
    assert!(!is_iso_639_3_shape("engl"));
    assert!(!is_iso_639_3_shape(""));
    assert!(!is_iso_639_3_shape("e1g"));
}

#[test]
fn bad_language_codes_are_flagged() {
    let book = Phrasebook::new(Meta::new("english", "tgl"));
    assert_eq!(book.validate(), [ValidationIssue::BadLanguageCode {
        field: LangField::Lang,
        code: "english".to_owned(),
    }]);
}

#[test]
fn empty_and_untranslated_entries_are_flagged() {
    let mut book = Phrasebook::new(Meta::new("eng", "tgl"));
    let mut blank = Entry::new("   ");
    blank.translation(Translation::new("Kumusta."));
    book.entry(blank);
    book.entry(Entry::new("Goodbye."));
    let mut empty_translation = Entry::new("Thank you.");
    empty_translation.translation(Translation::new(""));
    book.entry(empty_translation);

    assert_eq!(book.validate(), [
        ValidationIssue::EmptyPhrase { index: 0 },
        ValidationIssue::NoTranslations {
            index: 1,
            phrase: "Goodbye.".to_owned(),
        },
        ValidationIssue::EmptyTranslation {
            index: 2,
            phrase: "Thank you.".to_owned(),
            translation_index: 0,
        },
    ]);
}

#[test]
fn iteration_is_double_ended_and_sized() {
    let book = wikivoyage_book();
    let mut iter = book.iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back().unwrap().phrase(), "Thank you.");
    assert_eq!(iter.next().unwrap().phrase(), "Hello.");
    assert!(iter.next().is_none());
}

#[cfg(feature = "rayon")]
#[test]
fn par_iter_sees_every_entry() {
    use rayon::iter::ParallelIterator;

    let book = wikivoyage_book();
    let serial = book.iter().map(|entry| entry.translations().len()).sum::<usize>();
    let parallel = book
        .par_iter()
        .map(|entry| entry.translations().len())
        .sum::<usize>();
    assert_eq!(serial, parallel);
}

#[test]
fn category_counts_sort_by_frequency_then_name() {
    let mut book = wikivoyage_book();
    let mut entry = Entry::new("Help!");
    entry
        .category("politeness")
        .category("emergency")
        .translation(Translation::new("Saklolo!"));
    book.entry(entry);

    assert_eq!(book.category_counts(), [
        ("basics", 2),
        ("politeness", 2),
        ("emergency", 1),
    ]);
}

#[test]
fn built_books_serialize_without_empty_fields() {
    let book = wikivoyage_book();
    let value: serde_json::Value =
        serde_json::from_str(&book.to_json_pretty().unwrap()).unwrap();

    // Unset optional fields are omitted rather than serialized empty
    let hello = &value["entries"][0];
    assert!(hello.get("usage_note").is_none());
    assert!(hello.get("source_title").is_none());
    assert_eq!(hello["phrase"], "Hello.");
    assert_eq!(value["meta"]["translation_lang"], "tgl");
}
