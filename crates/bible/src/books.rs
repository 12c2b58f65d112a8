//! Book-name normalization.
//!
//! Lectionary citations name books loosely: `Matt`, `Matthew`, `1 Cor`,
//! `I Corinthians`, and the Orthodox `3 Kgs` for what Western bibles call
//! 1 Kings. Everything funnels down to one canonical three-character code
//! per book, which is the key the verse table is stored under.

use crate::error::BibleError;

/// Books cited without a chapter number.
///
/// A reference like `Jude 1-10` gives verses, not chapters; these books
/// read as if the chapter were always 1.
const CHAPTERLESS: &[&str] = &["OBA", "PHM", "2JN", "3JN", "JUD"];

/// `(canonical code, aliases)` in canonical reading order.
///
/// Aliases are matched case-insensitively with whitespace collapsed and
/// trailing periods dropped. The Kingdoms entries carry the Orthodox
/// numbering: 1-2 Kingdoms are 1-2 Samuel, 3-4 Kingdoms are 1-2 Kings.
const BOOKS: &[(&str, &[&str])] = &[
    ("GEN", &["gen", "genesis"]),
    ("EXO", &["ex", "exo", "exod", "exodus"]),
    ("LEV", &["lev", "leviticus"]),
    ("NUM", &["num", "numbers"]),
    ("DEU", &["deut", "deu", "deuteronomy"]),
    ("JOS", &["josh", "jos", "joshua"]),
    ("JDG", &["judg", "jdg", "judges"]),
    ("RUT", &["ruth", "rut"]),
    ("1SA", &["1 sam", "1 samuel", "1 kgs", "1 kingdoms"]),
    ("2SA", &["2 sam", "2 samuel", "2 kgs", "2 kingdoms"]),
    ("1KI", &["1 kings", "3 kgs", "3 kingdoms"]),
    ("2KI", &["2 kings", "4 kgs", "4 kingdoms"]),
    ("1CH", &["1 chr", "1 chron", "1 chronicles"]),
    ("2CH", &["2 chr", "2 chron", "2 chronicles"]),
    ("EZR", &["ezra", "ezr", "1 esdras"]),
    ("NEH", &["neh", "nehemiah", "2 esdras"]),
    ("TOB", &["tob", "tobit"]),
    ("JDT", &["jdt", "judith"]),
    ("EST", &["esth", "est", "esther"]),
    ("1MA", &["1 macc", "1 maccabees"]),
    ("2MA", &["2 macc", "2 maccabees"]),
    ("3MA", &["3 macc", "3 maccabees"]),
    ("JOB", &["job"]),
    ("PSA", &["ps", "psa", "psalm", "psalms", "psalter"]),
    ("PRO", &["prov", "pro", "proverbs"]),
    ("ECC", &["eccl", "ecc", "ecclesiastes"]),
    ("SNG", &["song", "sng", "song of songs", "song of solomon", "canticles"]),
    ("WIS", &["wis", "wisdom", "wisdom of solomon"]),
    ("SIR", &["sir", "sirach", "ecclesiasticus"]),
    ("ISA", &["is", "isa", "isaiah"]),
    ("JER", &["jer", "jeremiah"]),
    ("LAM", &["lam", "lamentations"]),
    ("BAR", &["bar", "baruch"]),
    ("EZK", &["ezek", "ezk", "ezekiel"]),
    ("DAN", &["dan", "daniel"]),
    ("HOS", &["hos", "hosea"]),
    ("JOL", &["joel", "jol"]),
    ("AMO", &["amos", "amo"]),
    ("OBA", &["obad", "oba", "obadiah"]),
    ("JON", &["jonah", "jon"]),
    ("MIC", &["mic", "micah"]),
    ("NAM", &["nah", "nam", "nahum"]),
    ("HAB", &["hab", "habakkuk"]),
    ("ZEP", &["zeph", "zep", "zephaniah"]),
    ("HAG", &["hag", "haggai"]),
    ("ZEC", &["zech", "zec", "zechariah"]),
    ("MAL", &["mal", "malachi"]),
    ("MAT", &["matt", "mat", "mt", "matthew"]),
    ("MRK", &["mark", "mrk", "mk"]),
    ("LUK", &["luke", "luk", "lk"]),
    ("JHN", &["john", "jhn", "jn"]),
    ("ACT", &["acts", "act"]),
    ("ROM", &["rom", "romans"]),
    ("1CO", &["1 cor", "1 corinthians"]),
    ("2CO", &["2 cor", "2 corinthians"]),
    ("GAL", &["gal", "galatians"]),
    ("EPH", &["eph", "ephesians"]),
    ("PHP", &["phil", "php", "philippians"]),
    ("COL", &["col", "colossians"]),
    ("1TH", &["1 thess", "1 thes", "1 thessalonians"]),
    ("2TH", &["2 thess", "2 thes", "2 thessalonians"]),
    ("1TI", &["1 tim", "1 timothy"]),
    ("2TI", &["2 tim", "2 timothy"]),
    ("TIT", &["titus", "tit"]),
    ("PHM", &["philem", "phm", "philemon"]),
    ("HEB", &["heb", "hebrews"]),
    ("JAS", &["jas", "james"]),
    ("1PE", &["1 pet", "1 peter"]),
    ("2PE", &["2 pet", "2 peter"]),
    ("1JN", &["1 john", "1 jn"]),
    ("2JN", &["2 john", "2 jn"]),
    ("3JN", &["3 john", "3 jn"]),
    ("JUD", &["jude"]),
    ("REV", &["rev", "revelation", "apocalypse"]),
];

/// Normalizes a cited book name to its canonical code.
///
/// Roman-numeral ordinals (`I Cor`, `III John`) are rewritten to arabic
/// before the alias lookup.
///
/// # Errors
///
/// Returns [`BibleError::UnknownBook`] if the name matches no alias.
pub fn normalize(name: &str) -> Result<&'static str, BibleError> {
    let folded = fold(name);
    if folded.is_empty() {
        return Err(BibleError::UnknownBook {
            name: name.to_string(),
        });
    }
    // Already-canonical codes pass straight through.
    if let Some((code, _)) = BOOKS.iter().find(|(code, _)| code.eq_ignore_ascii_case(&folded)) {
        return Ok(code);
    }
    BOOKS
        .iter()
        .find(|(_, aliases)| aliases.contains(&folded.as_str()))
        .map(|(code, _)| *code)
        .ok_or_else(|| BibleError::UnknownBook {
            name: name.to_string(),
        })
}

/// Returns whether a canonical code names a chapterless book.
pub fn is_chapterless(code: &str) -> bool {
    CHAPTERLESS.contains(&code)
}

/// The canonical book ordering index, for sorting spans into reading
/// order.
pub fn canonical_index(code: &str) -> Option<usize> {
    BOOKS.iter().position(|(c, _)| *c == code)
}

fn fold(name: &str) -> String {
    let collapsed = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase();
    let collapsed = collapsed.trim_end_matches('.').to_string();

    // "i cor" / "ii tim" / "iii john" style ordinals.
    for (roman, arabic) in [("iii ", "3 "), ("ii ", "2 "), ("i ", "1 ")] {
        if let Some(rest) = collapsed.strip_prefix(roman) {
            return format!("{arabic}{rest}");
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lectionary_spellings_normalize() {
        let cases = [
            ("Matt", "MAT"),
            ("Matthew", "MAT"),
            ("Mark", "MRK"),
            ("Luke", "LUK"),
            ("John", "JHN"),
            ("1 John", "1JN"),
            ("I John", "1JN"),
            ("1 Cor", "1CO"),
            ("Gal", "GAL"),
            ("Gen", "GEN"),
            ("Prov", "PRO"),
            ("Jonah", "JON"),
            ("Baruch", "BAR"),
            ("Wis", "WIS"),
            ("Jude", "JUD"),
        ];
        for (name, code) in cases {
            assert_eq!(normalize(name).unwrap(), code, "normalize({name})");
        }
    }

    #[test]
    fn orthodox_kingdoms_numbering() {
        assert_eq!(normalize("1 Kgs").unwrap(), "1SA");
        assert_eq!(normalize("2 Kgs").unwrap(), "2SA");
        assert_eq!(normalize("3 Kgs").unwrap(), "1KI");
        assert_eq!(normalize("4 Kgs").unwrap(), "2KI");
        assert_eq!(normalize("1 Kings").unwrap(), "1KI");
    }

    #[test]
    fn folding_is_forgiving() {
        assert_eq!(normalize("  matt  ").unwrap(), "MAT");
        assert_eq!(normalize("Matt.").unwrap(), "MAT");
        assert_eq!(normalize("1  Cor").unwrap(), "1CO");
        assert_eq!(normalize("MAT").unwrap(), "MAT");
    }

    #[test]
    fn unknown_books_are_rejected() {
        assert!(matches!(
            normalize("Hezekiah"),
            Err(BibleError::UnknownBook { .. })
        ));
        assert!(matches!(normalize(""), Err(BibleError::UnknownBook { .. })));
    }

    #[test]
    fn chapterless_set() {
        for code in ["OBA", "PHM", "2JN", "3JN", "JUD"] {
            assert!(is_chapterless(code), "{code} is chapterless");
        }
        assert!(!is_chapterless("MAT"));
        assert!(!is_chapterless("PSA"));
    }

    #[test]
    fn canonical_order_is_total_over_the_table() {
        assert_eq!(canonical_index("GEN"), Some(0));
        assert!(canonical_index("MAT").unwrap() < canonical_index("REV").unwrap());
        assert_eq!(canonical_index("XYZ"), None);
    }

    #[test]
    fn aliases_are_unique_across_books() {
        let mut seen = std::collections::BTreeSet::new();
        for (code, aliases) in BOOKS {
            assert!(seen.insert(*code), "duplicate code {code}");
            for alias in *aliases {
                assert!(seen.insert(*alias), "duplicate alias {alias}");
            }
        }
    }
}
