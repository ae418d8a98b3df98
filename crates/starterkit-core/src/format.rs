//! Display formatting helpers for catalog values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::StarterKitError;
use crate::palette::Rgb;
use crate::theme::Theme;

/// Locales the site text is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    KoKr,
    EnUs,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::KoKr => "ko-KR",
            Locale::EnUs => "en-US",
        }
    }
}

impl FromStr for Locale {
    type Err = StarterKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko-KR" | "ko" => Ok(Locale::KoKr),
            "en-US" | "en" => Ok(Locale::EnUs),
            other => Err(StarterKitError::InvalidLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

pub fn status_variant(status: &str) -> BadgeVariant {
    match status {
        "stable" | "active" => BadgeVariant::Default,
        "beta" | "inactive" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}

/// Human label for a component or account status. Unknown values pass through.
pub fn status_label(status: &str, locale: Locale) -> String {
    let label = match (status, locale) {
        ("stable", Locale::KoKr) => "안정",
        ("beta", Locale::KoKr) => "베타",
        ("experimental", Locale::KoKr) => "실험적",
        ("active", Locale::KoKr) => "활성",
        ("inactive", Locale::KoKr) => "비활성",
        ("stable", Locale::EnUs) => "Stable",
        ("beta", Locale::EnUs) => "Beta",
        ("experimental", Locale::EnUs) => "Experimental",
        ("active", Locale::EnUs) => "Active",
        ("inactive", Locale::EnUs) => "Inactive",
        (other, _) => other,
    };
    label.to_string()
}

/// Format an ISO date (`2024-01-15`) or RFC 3339 timestamp as a long date.
pub fn format_date(input: &str, locale: Locale) -> Result<String, StarterKitError> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(input).map(|dt| dt.date_naive()))
        .map_err(|_| StarterKitError::InvalidDate(input.to_string()))?;

    Ok(match locale {
        Locale::KoKr => format!("{}년 {}월 {}일", date.year(), date.month(), date.day()),
        Locale::EnUs => date.format("%B %-d, %Y").to_string(),
    })
}

/// Format a won amount: `₩1,200,000`. KRW has no minor unit.
pub fn format_krw(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-₩{grouped}")
    } else {
        format!("₩{grouped}")
    }
}

/// Background/foreground pair for an HTTP method badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Method badge colors, one pair per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodBadge {
    light: BadgeColors,
    dark: BadgeColors,
}

impl MethodBadge {
    const fn new(light: (Rgb, Rgb), dark: (Rgb, Rgb)) -> Self {
        Self {
            light: BadgeColors {
                background: light.0,
                foreground: light.1,
            },
            dark: BadgeColors {
                background: dark.0,
                foreground: dark.1,
            },
        }
    }

    pub fn colors(&self, theme: Theme) -> BadgeColors {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

const NEUTRAL_BADGE: MethodBadge = MethodBadge::new(
    (Rgb::new(0xf3, 0xf4, 0xf6), Rgb::new(0x37, 0x41, 0x51)),
    (Rgb::new(0xf3, 0xf4, 0xf6), Rgb::new(0x37, 0x41, 0x51)),
);

/// Badge colors for an uppercase HTTP method name. Anything else, including
/// lowercase spellings, gets a neutral gray.
pub fn method_badge(method: &str) -> MethodBadge {
    match method {
        "GET" => MethodBadge::new(
            (Rgb::new(0xdb, 0xea, 0xfe), Rgb::new(0x1d, 0x4e, 0xd8)),
            (Rgb::new(0x17, 0x25, 0x54), Rgb::new(0x60, 0xa5, 0xfa)),
        ),
        "POST" => MethodBadge::new(
            (Rgb::new(0xdc, 0xfc, 0xe7), Rgb::new(0x15, 0x80, 0x3d)),
            (Rgb::new(0x05, 0x2e, 0x16), Rgb::new(0x4a, 0xde, 0x80)),
        ),
        "PUT" => MethodBadge::new(
            (Rgb::new(0xfe, 0xf9, 0xc3), Rgb::new(0xa1, 0x62, 0x07)),
            (Rgb::new(0x42, 0x20, 0x06), Rgb::new(0xfa, 0xcc, 0x15)),
        ),
        "PATCH" => MethodBadge::new(
            (Rgb::new(0xff, 0xed, 0xd5), Rgb::new(0xc2, 0x41, 0x0c)),
            (Rgb::new(0x43, 0x14, 0x07), Rgb::new(0xfb, 0x92, 0x3c)),
        ),
        "DELETE" => MethodBadge::new(
            (Rgb::new(0xfe, 0xe2, 0xe2), Rgb::new(0xb9, 0x1c, 0x1c)),
            (Rgb::new(0x45, 0x0a, 0x0a), Rgb::new(0xf8, 0x71, 0x71)),
        ),
        _ => NEUTRAL_BADGE,
    }
}
