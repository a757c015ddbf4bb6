use mongodb::bson::DateTime;
use rand::{distributions::Alphanumeric, seq::SliceRandom, Rng};
use std::ops::RangeInclusive;
use time::{Duration, OffsetDateTime};

use super::corpus;
use super::model::{Address, UserRecord};

/// Anything that can hand out one user record at a time.
pub trait RecordSource {
    fn next_record(&mut self) -> UserRecord;
}

/// Sample-data distributions. Illustrative defaults, not business rules.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub active_probability: f64,
    pub age_years: RangeInclusive<i64>,
    pub created_within: Duration,
    pub password_length: usize,
    pub bio_sentences: RangeInclusive<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            active_probability: 0.9,
            age_years: 18..=80,
            created_within: Duration::days(730),
            password_length: 12,
            bio_sentences: 3..=6,
        }
    }
}

const EMAIL_SEPARATORS: [char; 2] = ['.', '_'];
/// Exclusive upper bound of the numeric suffix on emails and usernames.
const SUFFIX_LIMIT: u32 = 1_000_000;

pub struct UserGenerator<R> {
    rng: R,
    config: GeneratorConfig,
    now: OffsetDateTime,
}

impl<R: Rng> UserGenerator<R> {
    pub fn new(rng: R, config: GeneratorConfig) -> Self {
        Self::with_clock(rng, config, OffsetDateTime::now_utc())
    }

    /// Pins the reference instant used for birth and creation dates.
    pub fn with_clock(rng: R, config: GeneratorConfig, now: OffsetDateTime) -> Self {
        Self { rng, config, now }
    }

    pub fn generate(&mut self) -> UserRecord {
        let first_name = self.pick(corpus::FIRST_NAMES);
        let last_name = self.pick(corpus::LAST_NAMES);
        let domain = self.pick(corpus::MAIL_DOMAINS);
        let sep = *EMAIL_SEPARATORS.choose(&mut self.rng).unwrap_or(&'.');
        let suffix = self.rng.gen_range(1..SUFFIX_LIMIT);
        let email = derive_email(&first_name, &last_name, sep, suffix, &domain);

        let record = UserRecord {
            id: None,
            email,
            username: self.username(),
            password: self.password(),
            date_of_birth: self.birthdate(),
            phone: self.phone(),
            address: self.address(),
            bio: self.paragraph(),
            avatar: format!(
                "https://avatars.githubusercontent.com/u/{}",
                self.rng.gen_range(1..100_000_000u32)
            ),
            created_at: self.created_at(),
            is_active: self
                .rng
                .gen_bool(self.config.active_probability.clamp(0.0, 1.0)),
            first_name,
            last_name,
        };
        debug_assert!(record.is_complete());
        record
    }

    fn pick(&mut self, words: &[&str]) -> String {
        words
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("unknown")
            .to_string()
    }

    fn username(&mut self) -> String {
        let word = self.pick(corpus::USERNAME_WORDS);
        let name = self.pick(corpus::FIRST_NAMES);
        let sep = *["", ".", "_"].choose(&mut self.rng).unwrap_or(&"");
        let n = self.rng.gen_range(1..SUFFIX_LIMIT);
        format!("{name}{sep}{word}{n}").to_lowercase()
    }

    fn password(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(self.config.password_length)
            .map(char::from)
            .collect()
    }

    fn birthdate(&mut self) -> DateTime {
        let min_age = *self.config.age_years.start();
        let max_age = *self.config.age_years.end();
        // born between (now - max_age - 1y, now - min_age]
        let youngest = self.now - Duration::days(min_age * 365);
        let oldest = self.now - Duration::days((max_age + 1) * 365) + Duration::days(1);
        self.between(oldest, youngest)
    }

    fn created_at(&mut self) -> DateTime {
        self.between(self.now - self.config.created_within, self.now)
    }

    fn between(&mut self, from: OffsetDateTime, to: OffsetDateTime) -> DateTime {
        let lo = to_millis(from);
        let hi = to_millis(to);
        let ms = if hi > lo { self.rng.gen_range(lo..=hi) } else { lo };
        DateTime::from_millis(ms)
    }

    fn phone(&mut self) -> String {
        format!(
            "({}) {:03}-{:04}",
            self.rng.gen_range(200..1000u16),
            self.rng.gen_range(0..1000u16),
            self.rng.gen_range(0..10_000u16)
        )
    }

    fn address(&mut self) -> Address {
        let number: u32 = self.rng.gen_range(1..10_000);
        let street = format!(
            "{} {} {}",
            number,
            self.pick(corpus::STREET_NAMES),
            self.pick(corpus::STREET_SUFFIXES)
        );
        Address {
            street,
            city: self.pick(corpus::CITIES),
            state: self.pick(corpus::STATES),
            zip_code: format!("{:05}", self.rng.gen_range(501..100_000u32)),
            country: self.pick(corpus::COUNTRIES),
        }
    }

    fn paragraph(&mut self) -> String {
        let count = self.rng.gen_range(self.config.bio_sentences.clone()).max(1);
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sentence(&mut self) -> String {
        let len = self.rng.gen_range(4..=10);
        let words: Vec<String> = (0..len).map(|_| self.pick(corpus::LOREM)).collect();
        let mut s = words.join(" ");
        if let Some(first) = s.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        s.push('.');
        s
    }
}

impl<R: Rng> RecordSource for UserGenerator<R> {
    fn next_record(&mut self) -> UserRecord {
        self.generate()
    }
}

/// `{first}{sep}{last}{suffix}@{domain}`, lowercase, name parts reduced to
/// ASCII alphanumerics.
pub fn derive_email(
    first_name: &str,
    last_name: &str,
    sep: char,
    suffix: u32,
    domain: &str,
) -> String {
    let clean = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase()
    };
    format!(
        "{}{}{}{}@{}",
        clean(first_name),
        sep,
        clean(last_name),
        suffix,
        domain.to_lowercase()
    )
}

fn to_millis(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}
