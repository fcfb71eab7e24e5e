#![forbid(unsafe_code)]

//! Layout direction for navigation slide transitions.
//!
//! Hosts report whether they lay content out left-to-right or right-to-left.
//! When a host has no opinion, [`detect_system_layout_direction`] derives one
//! from the process locale.

use std::env;

/// Script direction of the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LayoutDirection {
    /// Latin, Cyrillic, CJK and most other scripts.
    #[default]
    LeftToRight,
    /// Arabic, Hebrew and related scripts.
    RightToLeft,
}

/// Language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "iw", "ks", "ps", "sd", "ug", "ur", "yi",
];

impl LayoutDirection {
    /// Classify a locale tag such as `"ar-EG"`, `"he_IL.UTF-8"` or `"ku-Arab"`.
    ///
    /// Unknown or malformed tags are left-to-right.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let Some(tag) = normalize_locale_tag(locale) else {
            return Self::LeftToRight;
        };
        let mut parts = tag.split('-');
        let language = parts.next().unwrap_or_default();
        if RTL_LANGUAGES
            .iter()
            .any(|rtl| language.eq_ignore_ascii_case(rtl))
        {
            return Self::RightToLeft;
        }
        // Script subtag overrides the language default (e.g. ku-Arab, pa-Arab).
        if parts.any(|sub| sub.eq_ignore_ascii_case("arab") || sub.eq_ignore_ascii_case("hebr")) {
            return Self::RightToLeft;
        }
        Self::LeftToRight
    }

    /// Whether this is [`LayoutDirection::RightToLeft`].
    #[inline]
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
        }
    }
}

/// Detect the layout direction from `LC_ALL`, then `LANG`.
///
/// Falls back to left-to-right when neither is set.
#[must_use]
pub fn detect_system_layout_direction() -> LayoutDirection {
    let lc_all = env::var("LC_ALL").ok();
    let lang = env::var("LANG").ok();
    detect_from(lc_all.as_deref(), lang.as_deref())
}

fn detect_from(lc_all: Option<&str>, lang: Option<&str>) -> LayoutDirection {
    lc_all
        .and_then(normalize_locale_tag)
        .or_else(|| lang.and_then(normalize_locale_tag))
        .map_or(LayoutDirection::LeftToRight, |tag| {
            LayoutDirection::for_locale(&tag)
        })
}

/// Strip encoding and modifier suffixes and turn `_` into `-`.
fn normalize_locale_tag(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw).trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(raw.replace('_', "-"))
}
