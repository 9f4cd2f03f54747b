//! Page/page-size slicing of a filtered view.

use crate::config::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// A normalized page request. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Normalize numeric input: missing or zero falls back to the default,
    /// negative values are clamped to 1.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: normalize(page, DEFAULT_PAGE),
            per_page: normalize(per_page, DEFAULT_PER_PAGE),
        }
    }

    /// Normalize raw query-string input. Values are read like a leading
    /// integer (`"2abc"` is 2); anything unreadable takes the default.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self::new(
            page.and_then(parse_leading_int),
            per_page.and_then(parse_leading_int),
        )
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// The items on this page; out-of-range pages yield fewer or no items.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    pub fn paginate<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        Page {
            items: self.slice(items),
            total: items.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One slice of a larger sequence plus the sequence's full length.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total: usize,
}

fn normalize(value: Option<i64>, default: usize) -> usize {
    match value {
        None | Some(0) => default,
        Some(v) if v < 0 => 1,
        Some(v) => usize::try_from(v).unwrap_or(usize::MAX),
    }
}

/// Parse the leading integer of `raw`, ignoring leading whitespace and any
/// trailing garbage. Returns `None` when no digits are found or on overflow.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    format!("{sign}{}", &rest[..digits]).parse().ok()
}

