//! Human scripture-reference parsing.
//!
//! The lectionary cites passages the way service books print them:
//! `;`-separated passages, each with an optional book prefix that carries
//! over to the next, `,`-separated verse ranges with `.` or `:` between
//! chapter and verse, cross-chapter spans (`Matt 26.40-27.2`), bare
//! chapter lists (`Prov 10, 3, 8`), and chapter memory across ranges
//! (`Matt 10.1, 5-8` stays in chapter 10).

use std::sync::OnceLock;

use regex::Regex;

use crate::books;
use crate::error::BibleError;

// Optional book prefix, then a specification starting with a digit. The
// prefix may itself contain digits ("1 Cor"), so the digit that starts
// the specification is the first one not followed by more book text.
fn ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:([\w\s]+?)\s+)?(\d.*)$").unwrap())
}

// Chapter/verse range: `26.40-27.2` gives groups (26, 40, 27, 2); every
// part except the first number is optional.
fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:(\d+)[.:])?(\d+)(?:-(?:(\d+)[.:])?(\d+))?").unwrap())
}

/// One parsed verse range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseSpan {
    /// Canonical book code.
    pub book: &'static str,
    /// Starting chapter, and verse if the span is not a whole chapter.
    pub from: (u16, Option<u16>),
    /// Ending chapter and verse; `None` for single verses and whole
    /// chapters.
    pub to: Option<(u16, u16)>,
}

impl VerseSpan {
    /// Returns whether a verse at `(book, chapter, verse)` falls inside
    /// this span.
    pub fn contains(&self, book: &str, chapter: u16, verse: u16) -> bool {
        if book != self.book {
            return false;
        }
        let (from_chapter, from_verse) = self.from;
        match (from_verse, self.to) {
            // Whole chapter.
            (None, _) => chapter == from_chapter,
            // Single verse.
            (Some(v), None) => chapter == from_chapter && verse == v,
            (Some(first), Some((to_chapter, last))) => {
                if from_chapter == to_chapter {
                    chapter == from_chapter && verse >= first && verse <= last
                } else {
                    (chapter == from_chapter && verse >= first)
                        || (chapter > from_chapter && chapter < to_chapter)
                        || (chapter == to_chapter && verse <= last)
                }
            }
        }
    }
}

/// Parses a human reference into its verse spans, in citation order.
///
/// # Errors
///
/// Returns [`BibleError::UnknownBook`] for an unrecognized book name and
/// [`BibleError::Malformed`] when the grammar does not match or a passage
/// has no book in scope.
pub fn parse(reference: &str) -> Result<Vec<VerseSpan>, BibleError> {
    let malformed = || BibleError::Malformed {
        reference: reference.to_string(),
    };

    let mut spans = Vec::new();
    let mut book: Option<&'static str> = None;

    for passage in reference.split(';').map(str::trim) {
        let captures = ref_re().captures(passage).ok_or_else(malformed)?;
        if let Some(name) = captures.get(1) {
            book = Some(books::normalize(name.as_str())?);
        }
        let book = book.ok_or_else(malformed)?;
        let specification = captures.get(2).ok_or_else(malformed)?.as_str();

        // Chapter memory: `10.1, 5-8` keeps chapter 10 for the second
        // range. A whole chapter cannot be remembered into.
        let mut previous_chapter: Option<u16> = None;

        for verse_range in specification.split(',').map(str::trim) {
            let captures = range_re().captures(verse_range).ok_or_else(malformed)?;
            let number = |i: usize| -> Result<Option<u16>, BibleError> {
                captures
                    .get(i)
                    .map(|m| m.as_str().parse().map_err(|_| malformed()))
                    .transpose()
            };
            let mut first_chapter = number(1)?;
            let mut first_verse = number(2)?;
            let last_chapter = number(3)?;
            let last_verse = number(4)?;

            if books::is_chapterless(book) {
                first_chapter = Some(1);
            }
            if first_chapter.is_none() {
                first_chapter = previous_chapter;
            }
            if first_chapter.is_none() {
                // No chapter anywhere in scope: the bare number was a
                // whole chapter, not a verse.
                first_chapter = first_verse.take();
            }
            let first_chapter = first_chapter.ok_or_else(malformed)?;

            let span = match (first_verse, last_verse) {
                (Some(first), Some(last)) => {
                    let to_chapter = last_chapter.unwrap_or(first_chapter);
                    VerseSpan {
                        book,
                        from: (first_chapter, Some(first)),
                        to: Some((to_chapter, last)),
                    }
                }
                (Some(_), None) => VerseSpan {
                    book,
                    from: (first_chapter, first_verse),
                    to: None,
                },
                (None, _) => VerseSpan {
                    book,
                    from: (first_chapter, None),
                    to: None,
                },
            };
            spans.push(span);

            if last_chapter.is_some() {
                previous_chapter = last_chapter;
            } else if first_verse.is_some() {
                previous_chapter = Some(first_chapter);
            }
        }
    }

    if spans.is_empty() {
        return Err(malformed());
    }
    Ok(spans)
}
