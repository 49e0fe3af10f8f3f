//! English and Arabic UI strings.
//!
//! Lookups never fail: a key missing from the active table renders as the
//! key itself so gaps are visible instead of blank.

mod ar;
mod en;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::Locale;

type Table = HashMap<&'static str, &'static str>;

static EN: LazyLock<Table> = LazyLock::new(|| en::TABLE.iter().copied().collect());
static AR: LazyLock<Table> = LazyLock::new(|| ar::TABLE.iter().copied().collect());

fn table(locale: Locale) -> &'static Table {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

/// Look up `key` in `locale`'s table, returning the key when absent.
#[must_use]
pub fn translate(locale: Locale, key: &str) -> &str {
    match table(locale).get(key) {
        Some(value) => *value,
        None => key,
    }
}

/// A translation handle for one locale, passed into templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate `key`; missing keys come back unchanged.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.locale, key)
    }

    /// Value for `<html lang>`.
    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.locale.code()
    }

    /// Value for `<html dir>`.
    #[must_use]
    pub const fn dir(&self) -> &'static str {
        self.locale.direction().as_str()
    }
}
