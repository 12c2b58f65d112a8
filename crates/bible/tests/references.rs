//! Reference-lookup corpus over a dense synthetic verse table.
//!
//! Each chapter is seeded with its real verse count, so the expected
//! passage lengths are the real ones for these citations.

use typikon_bible::MemoryBible;
use typikon_records::{PassageResolver, Pericope, Verse};

fn seed_chapter(bible: MemoryBible, book: &str, chapter: u16, verses: u16) -> MemoryBible {
    bible.with_verses(
        (1..=verses)
            .map(|verse| Verse {
                book: book.to_string(),
                chapter,
                verse,
                content: format!("{book} {chapter}:{verse}"),
            })
            .collect(),
    )
}

fn corpus_bible() -> MemoryBible {
    // (canonical code, chapter, real verse count), canonical order.
    let chapters: &[(&str, u16, u16)] = &[
        ("GEN", 17, 27),
        ("2KI", 2, 25),
        ("JOB", 38, 41),
        ("JOB", 42, 17),
        ("PRO", 3, 35),
        ("PRO", 8, 36),
        ("PRO", 10, 32),
        ("WIS", 3, 19),
        ("BAR", 3, 37),
        ("BAR", 4, 37),
        ("JON", 1, 17),
        ("JON", 2, 10),
        ("JON", 3, 10),
        ("JON", 4, 11),
        ("MAT", 1, 25),
        ("MAT", 4, 25),
        ("MAT", 5, 48),
        ("MAT", 6, 34),
        ("MAT", 7, 29),
        ("MAT", 10, 42),
        ("MAT", 11, 30),
        ("MAT", 26, 75),
        ("MAT", 27, 66),
        ("MRK", 15, 47),
        ("LUK", 22, 71),
        ("JHN", 13, 38),
        ("1CO", 5, 13),
        ("GAL", 3, 29),
        ("1JN", 2, 29),
        ("JUD", 1, 25),
    ];
    let mut bible = MemoryBible::new();
    for &(book, chapter, verses) in chapters {
        bible = seed_chapter(bible, book, chapter, verses);
    }
    bible
}

fn pericope(book: &str, verses: &str) -> Pericope {
    Pericope {
        book: book.to_string(),
        verses: verses.to_string(),
        display: format!("{book} {verses}"),
        ..Default::default()
    }
}

#[test]
fn reference_corpus_verse_counts() {
    let bible = corpus_bible();
    let cases: &[(&str, &str, usize)] = &[
        ("Matt", "1.1-25", 25),
        ("Matt", "4.25-5.13", 14),
        ("Matt", "10.32-36, 11.1", 6),
        ("Matt", "6.31-34, 7.9-11", 7),
        ("Matt", "10.1, 5-8", 5),
        ("Mark", "15.22, 25, 33-41", 11),
        // single chapter book
        ("Jude", "1-10", 10),
        ("1 John", "2.7-17", 11),
        ("Gen", "17.1-2, 4, 5-7, 8, 9-10, 11-12, 14", 12),
        // discontinuous chapters
        ("Job", "38.1-23; 42.1-5", 28),
        // multiple books
        ("1 Cor", "5.6-8; Gal 3.13-14", 5),
        // individual full chapters
        ("Prov", "10, 3, 8", 32 + 35 + 36),
        // multiple chapters
        ("Jonah", "1.1-4.11", 17 + 10 + 10 + 11),
        // deuterocanonical
        ("4 Kgs", "2.6-14", 9),
        ("Baruch", "3.35-4.4", 3 + 4),
        ("Wis", "3.1-9", 9),
    ];
    for &(book, verses, count) in cases {
        let passage = bible.passage(&pericope(book, verses)).unwrap();
        assert_eq!(passage.len(), count, "{book} {verses}");
    }
}

#[test]
fn mixed_separators_across_books() {
    // Holy Thursday's long composite citation, with colons.
    let bible = corpus_bible();
    let passage = bible
        .passage(&pericope(
            "Matt",
            "26:2-20; John 13:3-17; Matt 26:21-39; Luke 22:43-45; Matt 26:40-27:2",
        ))
        .unwrap();
    assert_eq!(passage.len(), 94);
}

#[test]
fn passages_come_back_in_canonical_order() {
    let bible = corpus_bible();
    let passage = bible.passage(&pericope("Job", "42.1-5; 38.1-3")).unwrap();
    // Table order, not citation order.
    assert_eq!(passage[0].chapter, 38);
    assert_eq!(passage.last().unwrap().chapter, 42);
    assert_eq!(passage.len(), 8);
}

#[test]
fn verses_missing_from_the_table_shrink_the_passage() {
    let bible = corpus_bible();
    // Chapter 2 of Matthew is not seeded.
    let passage = bible.passage(&pericope("Matt", "1.18-2.23")).unwrap();
    assert_eq!(passage.len(), 8, "only 1.18-25 exists");
}
