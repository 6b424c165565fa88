use std::{fmt, path::PathBuf};

use phrasebook::{Phrasebook, ValidationIssue};

/// Everything the CLI reports about one loaded phrasebook file.
#[derive(Debug)]
pub struct Summary {
    path: PathBuf,
    book: Phrasebook,
    issues: Vec<ValidationIssue>,
    top_categories: usize,
}

impl Summary {
    pub fn new(path: PathBuf, book: Phrasebook, top_categories: usize) -> Self {
        let issues = book.validate();
        Summary {
            path,
            book,
            issues,
            top_categories,
        }
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn format(&self, format: OutputFormat) -> SummaryFormatter<'_> {
        SummaryFormatter {
            summary: self,
            format,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct SummaryFormatter<'a> {
    summary: &'a Summary,
    format: OutputFormat,
}

impl fmt::Display for SummaryFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SummaryFormatter { summary, format } = *self;
        match format {
            OutputFormat::Human => {
                let book = &summary.book;
                writeln!(f, "{}:", summary.path.display())?;
                write!(
                    f,
                    "  {} -> {}",
                    book.meta().lang(),
                    book.meta().translation_lang(),
                )?;
                if let Some(title) = book.meta().source_title() {
                    write!(f, " ({title})")?;
                }
                writeln!(f)?;
                writeln!(
                    f,
                    "  {} entries, {} translations, {} examples",
                    book.len(),
                    book.translation_count(),
                    book.example_count(),
                )?;

                let counts = book.category_counts();
                if !counts.is_empty() {
                    writeln!(f, "  top categories:")?;
                    counts.iter().take(summary.top_categories).try_for_each(
                        |(category, count)| {
                            writeln!(f, "    {category:?} => {count}")
                        },
                    )?;
                }

                // Little bit of extra work as the formatter shouldn't leave a
                // trailing newline
                if summary.issues.is_empty() {
                    write!(f, "  no issues")?;
                } else {
                    writeln!(f, "  {} issues:", summary.issues.len())?;
                    let last = summary.issues.len() - 1;
                    summary.issues.iter().enumerate().try_for_each(
                        |(index, issue)| {
                            if index != last {
                                writeln!(f, "    {issue}")
                            } else {
                                write!(f, "    {issue}")
                            }
                        },
                    )?;
                }
            },
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub enum OutputFormat {
    Human,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use phrasebook::{Entry, Meta, Phrasebook, Translation};

    use super::{OutputFormat, Summary};

    fn demo_book() -> Phrasebook {
        let mut meta = Meta::new("eng", "tgl");
        meta.source(
            "Tagalog Wikivoyage Phrasebook",
            "https://en.wikivoyage.org/wiki/Tagalog_phrasebook",
        );
        let mut book = Phrasebook::new(meta);
        let mut entry = Entry::new("Hello.");
        let mut translation = Translation::new("Kumusta.");
        translation.example("Kumusta, kaibigan?");
        entry.category("basics").translation(translation);
        book.entry(entry);
        book
    }

    #[test]
    fn human_format_summarizes_a_clean_book() {
        let summary =
            Summary::new(PathBuf::from("demo.json"), demo_book(), 5);
        let rendered = summary.format(OutputFormat::Human).to_string();

        assert_eq!(rendered, concat!(
            "demo.json:\n",
            "  eng -> tgl (Tagalog Wikivoyage Phrasebook)\n",
            "  1 entries, 1 translations, 1 examples\n",
            "  top categories:\n",
            "    \"basics\" => 1\n",
            "  no issues",
        ));
    }

    #[test]
    fn human_format_lists_issues_without_trailing_newline() {
        let mut book = demo_book();
        book.entry(Entry::new("Goodbye."));
        book.entry(Entry::new(""));
        let summary = Summary::new(PathBuf::from("demo.json"), book, 5);
        let rendered = summary.format(OutputFormat::Human).to_string();

        assert!(rendered.contains("  3 issues:\n"));
        assert!(rendered.contains("entry 1 (\"Goodbye.\"): no translations\n"));
        assert!(rendered.contains("entry 2: phrase is empty\n"));
        assert!(rendered.ends_with("entry 2 (\"\"): no translations"));
    }
}
