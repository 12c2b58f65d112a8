//! Output views: JSON shapes and plain-text rendering for the CLI.

use serde::Serialize;

use typikon_day::{Day, Reading};
use typikon_records::Verse;

/// JSON view of a composite day.
///
/// Field names follow the store's public API conventions
/// (`pascha_distance`, `julian_day_number`, description strings next to
/// their ordinals).
#[derive(Debug, Serialize)]
pub struct DayView {
    pub pascha_distance: i32,
    pub julian_day_number: i64,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
    pub tone: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eothinon_gospel: Option<u8>,
    pub summary_title: Option<String>,
    pub titles: Vec<String>,
    pub feast_level: i8,
    pub feast_level_description: String,
    pub feasts: Vec<String>,
    pub fast_level: u8,
    pub fast_level_desc: String,
    pub fast_exception: u8,
    pub fast_exception_desc: String,
    pub saints: Vec<String>,
    pub service_notes: Vec<String>,
}

impl DayView {
    pub fn from_day(day: &Day) -> Self {
        Self {
            pascha_distance: day.pdist(),
            julian_day_number: day.jdn(),
            year: day.date().year(),
            month: day.month(),
            day: day.day(),
            weekday: day.weekday().index(),
            tone: day.tone(),
            eothinon_gospel: day.eothinon_gospel(),
            summary_title: day.summary_title(),
            titles: day.titles().to_vec(),
            feast_level: day.feast_level(),
            feast_level_description: day.feast_level_desc().to_string(),
            feasts: day.feasts().to_vec(),
            fast_level: day.fast_level().value(),
            fast_level_desc: day.fast_level_desc().to_string(),
            fast_exception: day.fast_exception(),
            fast_exception_desc: day.fast_exception_desc().to_string(),
            saints: day.saints().to_vec(),
            service_notes: day.service_notes().to_vec(),
        }
    }
}

/// JSON view of one selected reading.
#[derive(Debug, Serialize)]
pub struct ReadingView {
    pub source: String,
    pub book: String,
    pub description: String,
    pub display: String,
    pub short_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage: Option<Vec<VerseView>>,
}

#[derive(Debug, Serialize)]
pub struct VerseView {
    pub book: String,
    pub chapter: u16,
    pub verse: u16,
    pub content: String,
}

impl ReadingView {
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            source: reading.record.source.clone(),
            book: reading.record.pericope.book.clone(),
            description: reading.record.desc.clone(),
            display: reading.record.pericope.display.clone(),
            short_display: reading.record.pericope.sdisplay.clone(),
            passage: reading
                .passage
                .as_ref()
                .map(|verses| verses.iter().map(VerseView::from_verse).collect()),
        }
    }
}

impl VerseView {
    fn from_verse(verse: &Verse) -> Self {
        Self {
            book: verse.book.clone(),
            chapter: verse.chapter,
            verse: verse.verse,
            content: verse.content.clone(),
        }
    }
}

/// Prints the full text view of one day.
pub fn print_day(day: &Day) {
    println!(
        "{} ({}, pdist {})",
        day.gregorian_date(),
        day.weekday(),
        day.pdist()
    );
    if let Some(title) = day.summary_title() {
        println!("{title}");
    }
    for feast in day.feasts() {
        println!("Feast: {feast}");
    }
    for saint in day.saints() {
        println!("Commemorated: {saint}");
    }
    println!("Tone {}", day.tone());
    if let Some(eothinon) = day.eothinon_gospel() {
        println!("Eothinon {eothinon}");
    }
    println!(
        "Fast: {} ({})",
        day.fast_level_desc(),
        day.fast_exception_desc()
    );
    for note in day.service_notes() {
        println!("Note: {note}");
    }
    for story in day.stories() {
        if !story.story.is_empty() {
            println!();
            println!("{}", story.title);
            println!("{}", story.story);
        }
    }
}

/// Prints the one-line month view of a day.
pub fn print_day_line(day: &Day) {
    let title = day.summary_title().unwrap_or_default();
    println!(
        "{} {:>9} tone {} | {} | {}",
        day.gregorian_date(),
        day.weekday().name(),
        day.tone(),
        day.fast_level_desc(),
        title
    );
}

/// Prints one reading, with its passage when fetched.
pub fn print_reading(reading: &Reading) {
    let record = &reading.record;
    if record.desc.is_empty() {
        println!("{} ({})", record.pericope.display, record.source);
    } else {
        println!(
            "{} ({}, {})",
            record.pericope.display, record.source, record.desc
        );
    }
    if let Some(passage) = &reading.passage {
        for verse in passage {
            println!("  {}.{} {}", verse.chapter, verse.verse, verse.content);
        }
    }
}
