//! Fake data generation helpers.
//!
//! Wraps the `fake` crate's fakers and a few fixed vocabularies behind a
//! single RNG, so a seeded run always produces the same values.

use chrono::{Datelike, Months, NaiveDate};
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::{Word, Words};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use std::ops::RangeInclusive;

/// Color names for product specs
const COLOR_NAMES: &[&str] = &[
    "AliceBlue",
    "Aqua",
    "Beige",
    "Black",
    "Chocolate",
    "Coral",
    "Crimson",
    "DarkGreen",
    "DarkOrange",
    "Gold",
    "Gray",
    "Indigo",
    "Ivory",
    "Khaki",
    "Lavender",
    "LightBlue",
    "Maroon",
    "MintCream",
    "Navy",
    "Olive",
    "Orchid",
    "Peru",
    "Plum",
    "RoyalBlue",
    "Salmon",
    "SeaGreen",
    "Silver",
    "Tan",
    "Teal",
    "Tomato",
    "Turquoise",
    "Violet",
    "White",
];

/// Fake data generator driven by a single RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a full person name
    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// Generate an email address on a reserved example domain
    pub fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    /// Generate a digit-only phone number of `len` digits (no leading zero)
    pub fn phone_digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|i| {
                let low = if i == 0 { 1 } else { 0 };
                char::from(b'0' + self.rng.random_range(low..=9u8))
            })
            .collect()
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    /// Generate a single-line street address
    pub fn street_address(&mut self) -> String {
        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let city: String = CityName().fake_with_rng(&mut self.rng);
        let state: String = StateAbbr().fake_with_rng(&mut self.rng);
        let zip: String = ZipCode().fake_with_rng(&mut self.rng);
        format!("{} {}, {}, {} {}", building, street, city, state, zip)
    }

    /// Generate a single lorem word
    pub fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    /// Generate a lorem word with its first letter capitalized
    pub fn title_word(&mut self) -> String {
        capitalize(&self.word())
    }

    /// Generate a sentence (capitalized, with period)
    pub fn sentence(&mut self, word_count: RangeInclusive<usize>) -> String {
        let count = self.rng.random_range(word_count);
        let words: Vec<String> = Words(count..count + 1).fake_with_rng(&mut self.rng);
        let mut text = capitalize(&words.join(" "));
        text.push('.');
        text
    }

    /// Generate text made of whole sentences, at most `max_chars` long
    pub fn text(&mut self, max_chars: usize) -> String {
        let mut text = String::new();
        loop {
            let sentence = self.sentence(3..=10);
            let needed = if text.is_empty() {
                sentence.len()
            } else {
                text.len() + 1 + sentence.len()
            };
            if needed > max_chars {
                break;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&sentence);
        }

        if text.is_empty() {
            // A single sentence was already too long; cut it at a word boundary
            let sentence = self.sentence(3..=10);
            let limit = max_chars.saturating_sub(1);
            let cut = sentence[..limit.min(sentence.len())]
                .rfind(' ')
                .unwrap_or(limit.min(sentence.len()));
            text = sentence[..cut].trim_end_matches('.').to_string();
            text.push('.');
        }
        text
    }

    /// Generate a job title, truncated to `max_chars` characters
    pub fn job_title(&mut self, max_chars: usize) -> String {
        let title: String = Title().fake_with_rng(&mut self.rng);
        title.chars().take(max_chars).collect()
    }

    pub fn color_name(&mut self) -> &'static str {
        *self.pick(COLOR_NAMES)
    }

    /// Generate a random (version 4) UUID string
    pub fn uuid_v4(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// Pick between `size.start()` and `size.end()` distinct elements, in random order
    pub fn sample_subset<'a, T>(
        &mut self,
        items: &'a [T],
        size: RangeInclusive<usize>,
    ) -> Vec<&'a T> {
        let amount = self.rng.random_range(size).min(items.len());
        rand::seq::index::sample(&mut self.rng, items.len(), amount)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Generate a random integer in range (inclusive)
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Generate a uniform number in range, rounded to two decimals
    pub fn decimal(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..=max);
        (value * 100.0).round() / 100.0
    }

    /// Generate 0 or 1
    pub fn flag(&mut self) -> i64 {
        self.rng.random_range(0..=1)
    }

    /// Generate a date in `start..=end`
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let days = (end - start).num_days().max(0);
        let offset = self.rng.random_range(0..=days);
        start + chrono::Duration::days(offset)
    }

    /// Generate a date in the reference date's year, not after the reference date
    pub fn date_this_year(&mut self, reference: NaiveDate) -> NaiveDate {
        let start = NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference);
        self.date_between(start, reference)
    }

    /// Generate a birth date for someone aged `min_age..=max_age` on the reference date
    pub fn date_of_birth(&mut self, reference: NaiveDate, min_age: u32, max_age: u32) -> NaiveDate {
        let latest = years_before(reference, min_age);
        let earliest = years_before(reference, max_age + 1) + chrono::Duration::days(1);
        self.date_between(earliest, latest)
    }

    /// Generate a `HH:MM:SS` time of day
    pub fn time_of_day(&mut self) -> String {
        let hour = self.rng.random_range(0..24);
        let minute = self.rng.random_range(0..60);
        let second = self.rng.random_range(0..60);
        format!("{:02}:{:02}:{:02}", hour, minute, second)
    }

    /// Generate a course code like `C48213`
    pub fn course_code(&mut self) -> String {
        format!("C{}", self.int_range(10000, 99999))
    }
}

/// Same calendar day `years` earlier (Feb 29 clamps to Feb 28)
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(date)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fake() -> FakeData<ChaCha8Rng> {
        FakeData::new(ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn test_deterministic_generation() {
        let mut fake1 = fake();
        let mut fake2 = fake();

        assert_eq!(fake1.full_name(), fake2.full_name());
        assert_eq!(fake1.street_address(), fake2.street_address());
        assert_eq!(fake1.decimal(10.0, 100.0), fake2.decimal(10.0, 100.0));
    }

    #[test]
    fn test_decimal_precision_and_bounds() {
        let mut fake = fake();
        for _ in 0..1000 {
            let value = fake.decimal(5.0, 500.0);
            assert!((5.0..=500.0).contains(&value));
            assert_eq!(value, (value * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn test_phone_digits() {
        let mut fake = fake();
        for _ in 0..100 {
            let phone = fake.phone_digits(10);
            assert_eq!(phone.len(), 10);
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
            assert!(!phone.starts_with('0'));
        }
    }

    #[test]
    fn test_street_address_is_single_line() {
        let mut fake = fake();
        let address = fake.street_address();
        assert!(!address.contains('\n'));
        assert_eq!(address.matches(", ").count(), 2);
    }

    #[test]
    fn test_sentence_shape() {
        let mut fake = fake();
        let sentence = fake.sentence(4..=8);
        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().unwrap().is_uppercase());
        let words = sentence.split_whitespace().count();
        assert!((4..=8).contains(&words));
    }

    #[test]
    fn test_text_respects_max_chars() {
        let mut fake = fake();
        for _ in 0..200 {
            let text = fake.text(100);
            assert!(!text.is_empty());
            assert!(text.len() <= 100, "too long: {}", text);
            assert!(text.ends_with('.'));
        }
    }

    #[test]
    fn test_text_shorter_than_a_sentence() {
        let mut fake = fake();
        let text = fake.text(12);
        assert!(text.len() <= 12, "too long: {}", text);
        assert!(text.ends_with('.'));
    }

    #[test]
    fn test_job_title_truncation() {
        let mut fake = fake();
        for _ in 0..100 {
            assert!(fake.job_title(20).chars().count() <= 20);
        }
    }

    #[test]
    fn test_job_title_is_prefix_of_full_title() {
        let mut full = fake();
        let mut short = fake();
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..50 {
            let title = full.job_title(usize::MAX);
            let cut = short.job_title(20);
            assert!(!title.is_empty());
            assert!(title.starts_with(&cut), "{} vs {}", title, cut);
            distinct.insert(title);
        }
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_uuid_v4_format() {
        let mut fake = fake();
        let id = fake.uuid_v4();
        assert_eq!(id.len(), 36);
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(fake.uuid_v4(), id);
    }

    #[test]
    fn test_sample_subset_is_distinct() {
        let mut fake = fake();
        let tags = ["New", "Sale", "Featured", "Limited"];
        for _ in 0..100 {
            let subset = fake.sample_subset(&tags, 1..=4);
            assert!((1..=4).contains(&subset.len()));
            let mut sorted = subset.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), subset.len());
        }
    }

    #[test]
    fn test_date_of_birth_age_window() {
        let mut fake = fake();
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        for _ in 0..500 {
            let birth = fake.date_of_birth(reference, 17, 30);
            assert!(birth <= years_before(reference, 17));
            assert!(birth > years_before(reference, 31));
        }
    }

    #[test]
    fn test_date_this_year() {
        let mut fake = fake();
        let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        for _ in 0..100 {
            let date = fake.date_this_year(reference);
            assert_eq!(date.year(), 2024);
            assert!(date <= reference);
        }
    }

    #[test]
    fn test_time_of_day_format() {
        let mut fake = fake();
        let time = fake.time_of_day();
        assert_eq!(time.len(), 8);
        assert!(chrono::NaiveTime::parse_from_str(&time, "%H:%M:%S").is_ok());
    }

    #[test]
    fn test_course_code_range() {
        let mut fake = fake();
        for _ in 0..100 {
            let code = fake.course_code();
            let number: u32 = code.strip_prefix('C').unwrap().parse().unwrap();
            assert!((10000..=99999).contains(&number));
        }
    }
}
