// SPDX-License-Identifier: MIT

//!
//! The free-text era parser
//!
//! Turns heterogeneous human-written date expressions from the site content
//! ("c. 3rd century BCE", "1920s", "Bronze Age 3300–1800 BCE", "Present")
//! into normalized [`Era`] year ranges.  The parser never errors: anything it
//! can't recognise comes back as `None`, which callers must treat as
//! "undated" and fail open on (include the item, don't filter it out).
//!

use crate::{Era, Year};
use log::trace;

/// A BCE/CE marker found in a date expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EraMark {
    Bce,
    Ce,
}

/// The closed ordinal vocabulary for century expressions (1st…21st)
#[rustfmt::skip]
const ORDINALS: &[(&str, i64)] = &[
    ("1st", 1), ("first", 1),
    ("2nd", 2), ("second", 2),
    ("3rd", 3), ("third", 3),
    ("4th", 4), ("fourth", 4),
    ("5th", 5), ("fifth", 5),
    ("6th", 6), ("sixth", 6),
    ("7th", 7), ("seventh", 7),
    ("8th", 8), ("eighth", 8),
    ("9th", 9), ("ninth", 9),
    ("10th", 10), ("tenth", 10),
    ("11th", 11), ("eleventh", 11),
    ("12th", 12), ("twelfth", 12),
    ("13th", 13), ("thirteenth", 13),
    ("14th", 14), ("fourteenth", 14),
    ("15th", 15), ("fifteenth", 15),
    ("16th", 16), ("sixteenth", 16),
    ("17th", 17), ("seventeenth", 17),
    ("18th", 18), ("eighteenth", 18),
    ("19th", 19), ("nineteenth", 19),
    ("20th", 20), ("twentieth", 20),
    ("21st", 21), ("twenty-first", 21),
];

/// Parse a free-text date/era description into a normalized year range
///
/// Range endpoints are returned in written order, NOT sorted: a
/// descending-written range like "5th–3rd century BCE" comes back with
/// `start_year > end_year`.  See [`Era`] for why that's deliberate.
pub fn parse_era_string(raw: &str) -> Option<Era> {
    let cleaned = strip_approximation(&strip_parentheticals(raw));

    if let Some((left, right)) = split_range(&cleaned) {
        let mut left = left.trim().to_string();
        let right = right.trim().to_string();

        // "5th–3rd century BCE" leaves the first part with neither the
        // century word nor the era marker; borrow both from the second part
        // so each side parses independently
        if right.to_lowercase().contains("century") && !left.to_lowercase().contains("century") {
            left.push_str(" century");
        }
        let inherited = find_era_marker(&right);

        let start = parse_single_date(&left, inherited);
        let end = parse_single_date(&right, None);
        return match (start, end) {
            // Written order preserved, not sorted
            (Some(start), Some(end)) => Some(Era::from(start, end)),
            (Some(year), None) | (None, Some(year)) => Some(Era::at(year)),
            (None, None) => {
                trace!("no year information in range `{raw}`");
                None
            }
        };
    }

    parse_single_date(&cleaned, None).map(Era::at)
}

/// Remove parenthetical asides, e.g. "(traditionally)"
fn strip_parentheticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Remove approximation markers ("c.", "~") from each token
fn strip_approximation(s: &str) -> String {
    s.split_whitespace()
        .filter_map(|token| {
            let token = token.trim_start_matches('~');
            let token = token
                .strip_prefix("c.")
                .or_else(|| token.strip_prefix("C."))
                .unwrap_or(token);
            (!token.is_empty()).then_some(token)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a two-endpoint range on an en/em dash, a spaced hyphen, or the word
/// "to".  An unspaced plain hyphen is not a separator (it appears inside
/// ordinal words like "twenty-first")
fn split_range(s: &str) -> Option<(&str, &str)> {
    for dash in ['–', '—'] {
        if let Some(idx) = s.find(dash) {
            return Some((&s[..idx], &s[idx + dash.len_utf8()..]));
        }
    }
    if let Some(idx) = s.find(" - ") {
        return Some((&s[..idx], &s[idx + 3..]));
    }
    for to in [" to ", " To ", " TO "] {
        if let Some(idx) = s.find(to) {
            return Some((&s[..idx], &s[idx + to.len()..]));
        }
    }
    None
}

/// The word-ish tokens of an expression.  Interior hyphens survive so that
/// "twenty-first" stays one token
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .filter(|token| !token.is_empty())
}

/// Find an explicit era marker (BCE, BC, CE, AD) in an expression
fn find_era_marker(s: &str) -> Option<EraMark> {
    for token in words(s) {
        match token.to_ascii_lowercase().as_str() {
            "bce" | "bc" => return Some(EraMark::Bce),
            "ce" | "ad" => return Some(EraMark::Ce),
            _ => {}
        }
    }
    None
}

/// Parse one cleaned token as a single date.  First match wins:
/// "present", ordinal century, decade, bare 1–5 digit year
fn parse_single_date(s: &str, inherited: Option<EraMark>) -> Option<Year> {
    let marker = find_era_marker(s).or(inherited);
    let lower = s.to_lowercase();

    if lower.contains("present") {
        return Some(Year::present());
    }

    // Ordinal century, resolved to the century's midpoint year
    if lower.contains("century") {
        if let Some(century) = words(&lower).find_map(ordinal_value) {
            let year = match marker {
                Some(EraMark::Bce) => -(century * 100) + 50,
                _ => (century - 1) * 100 + 50,
            };
            return Year::try_from(year).ok();
        }
    }

    // Decade, resolved to its midpoint, e.g. "1920s" -> 1925.  Era markers
    // are ignored here, as the source application always wrote decades CE
    for token in words(&lower) {
        if let Some(stem) = token.strip_suffix('s') {
            if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(decade) = stem.parse::<i64>() {
                    return Year::try_from(decade + 5).ok();
                }
            }
        }
    }

    // Bare 1-5 digit year with an optional era marker
    for token in words(&lower) {
        if (1..=5).contains(&token.len()) && token.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(number) = token.parse::<i64>() {
                let year = match marker {
                    Some(EraMark::Bce) => -number,
                    _ => number,
                };
                return Year::try_from(year).ok();
            }
        }
    }

    trace!("no era pattern matched in `{s}`");
    None
}

/// Look up an ordinal token in the closed 1st…21st vocabulary
fn ordinal_value(token: &str) -> Option<i64> {
    ORDINALS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| *value)
}
