#![forbid(unsafe_code)]

//! String catalog: languages, lookup with fallback, interpolation.
//!
//! # Lookup
//! Keys are dotted paths like `settings.dark_mode`. [`Catalog::get`] tries
//! the requested language first and falls back to English; only a key absent
//! from both tables yields `None`.
//!
//! # Interpolation
//! Templates carry `{name}` placeholders. [`interpolate`] runs a single
//! left-to-right pass: supplied arguments are substituted, unknown
//! placeholders stay intact for the translator to spot, and substituted
//! values are never re-scanned, so a value containing braces cannot expand
//! recursively.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Lang
// ---------------------------------------------------------------------------

/// Languages the portfolio ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ja];

    /// Fallback language; every key is authored here first.
    pub const DEFAULT: Lang = Lang::En;

    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
        }
    }

    /// Display name in its own language.
    pub const fn name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ja => "日本語",
        }
    }

    const fn index(self) -> usize {
        match self {
            Lang::En => 0,
            Lang::Ja => 1,
        }
    }

    /// Matches a BCP 47-ish tag to a supported language.
    ///
    /// Only the primary subtag is considered, case-insensitively, so
    /// `"en"`, `"EN"`, `"en-US"`, and `"ja_JP"` all resolve. Anything else
    /// is `None` and callers typically fall back to [`Lang::DEFAULT`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Lang> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        Lang::ALL
            .into_iter()
            .find(|lang| primary.eq_ignore_ascii_case(lang.code()))
    }
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

/// Substitutes `{name}` placeholders from `args` in one pass.
///
/// Unknown placeholders are kept verbatim, an unclosed `{` is treated as
/// literal text, and substituted values are not re-scanned.
///
/// ```
/// use foldio_i18n::interpolate;
///
/// let out = interpolate("{count} of {total} projects", &[("count", "3")]);
/// assert_eq!(out, "3 of {total} projects");
/// ```
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let token = &after[..close];
                match args.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(token);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                // unclosed brace, keep the tail as-is
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// LangStrings
// ---------------------------------------------------------------------------

/// The string table for one language.
#[derive(Debug, Clone, Default)]
pub struct LangStrings {
    entries: HashMap<String, String>,
}

impl LangStrings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Every key, in English and Japanese. Kept alphabetical by key.
const BUILTIN: &[(&str, &str, &str)] = &[
    ("about.contact", "Get in touch", "お問い合わせ"),
    ("about.title", "About me", "自己紹介"),
    ("footer.copyright", "© {year} {name}", "© {year} {name}"),
    ("nav.about", "About", "プロフィール"),
    ("nav.projects", "Projects", "プロジェクト"),
    ("nav.settings", "Settings", "設定"),
    ("projects.count", "{count} projects", "{count}件のプロジェクト"),
    ("projects.empty", "Nothing here yet", "まだ何もありません"),
    ("projects.filter_all", "All", "すべて"),
    ("settings.accent", "Accent color", "アクセントカラー"),
    ("settings.console", "Console color", "本体カラー"),
    ("settings.dark_mode", "Dark mode", "ダークモード"),
    ("settings.language", "Language", "言語"),
    ("settings.pattern", "Background pattern", "背景パターン"),
    ("settings.scanlines", "Scanlines", "走査線"),
];

/// String tables for all supported languages.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: [LangStrings; 2],
}

impl Catalog {
    /// An empty catalog with no keys in any language.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The strings the portfolio shell ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let mut en = LangStrings::new();
        let mut ja = LangStrings::new();
        for &(key, english, japanese) in BUILTIN {
            en.insert(key, english);
            ja.insert(key, japanese);
        }

        let mut catalog = Self::new();
        catalog.add_lang(Lang::En, en);
        catalog.add_lang(Lang::Ja, ja);
        catalog
    }

    /// Replaces the whole table for one language.
    pub fn add_lang(&mut self, lang: Lang, strings: LangStrings) {
        self.tables[lang.index()] = strings;
    }

    /// Adds or replaces one entry in one language.
    pub fn insert(&mut self, lang: Lang, key: impl Into<String>, value: impl Into<String>) {
        self.tables[lang.index()].insert(key, value);
    }

    /// Looks a key up without any fallback.
    #[must_use]
    pub fn raw(&self, lang: Lang, key: &str) -> Option<&str> {
        self.tables[lang.index()].get(key)
    }

    /// Looks a key up, falling back to [`Lang::DEFAULT`].
    #[must_use]
    pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
        self.raw(lang, key).or_else(|| self.raw(Lang::DEFAULT, key))
    }

    /// Resolves a key and interpolates `args` into it.
    #[must_use]
    pub fn format(&self, lang: Lang, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(lang, key).map(|template| interpolate(template, args))
    }

    /// How completely `lang` covers the keys of [`Lang::DEFAULT`].
    #[must_use]
    pub fn coverage(&self, lang: Lang) -> Coverage {
        let reference = &self.tables[Lang::DEFAULT.index()];
        let table = &self.tables[lang.index()];

        let mut missing: Vec<String> = reference
            .keys()
            .filter(|key| !table.contains_key(key))
            .map(str::to_owned)
            .collect();
        missing.sort_unstable();

        Coverage {
            total_keys: reference.len(),
            present: reference.len() - missing.len(),
            missing,
        }
    }
}

/// Translation completeness of one language against the default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    /// Keys in the reference (default-language) table.
    pub total_keys: usize,
    /// Of those, keys the measured language also has.
    pub present: usize,
    /// The gap, sorted.
    pub missing: Vec<String>,
}

impl Coverage {
    /// Percent of reference keys covered; an empty reference counts as
    /// fully covered.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total_keys == 0 {
            100.0
        } else {
            self.present as f64 * 100.0 / self.total_keys as f64
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn from_code_tolerates_regions_and_case() {
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_code("ja_JP"), Some(Lang::Ja));
        assert_eq!(Lang::from_code("Ja-jp-x-private"), Some(Lang::Ja));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn interpolate_substitutes_known_tokens() {
        let out = interpolate("© {year} {name}", &[("year", "2025"), ("name", "mei")]);
        assert_eq!(out, "© 2025 mei");
    }

    #[test]
    fn interpolate_keeps_unknown_tokens() {
        let out = interpolate("{count} of {total}", &[("count", "3")]);
        assert_eq!(out, "3 of {total}");
    }

    #[test]
    fn interpolate_does_not_recurse() {
        assert_eq!(
            interpolate("Hello {name}!", &[("name", "{name}")]),
            "Hello {name}!"
        );
        assert_eq!(
            interpolate("Hello {name}!", &[("name", "{other}")]),
            "Hello {other}!"
        );
    }

    #[test]
    fn interpolate_treats_unclosed_brace_as_literal() {
        assert_eq!(interpolate("50% { done", &[("done", "x")]), "50% { done");
        assert_eq!(interpolate("tail{", &[]), "tail{");
    }

    #[test]
    fn interpolate_handles_multibyte_text() {
        let out = interpolate("{count}件のプロジェクト", &[("count", "7")]);
        assert_eq!(out, "7件のプロジェクト");
    }

    #[test]
    fn get_falls_back_to_english() {
        let mut catalog = Catalog::new();
        let mut en = LangStrings::new();
        en.insert("nav.projects", "Projects");
        catalog.add_lang(Lang::En, en);

        assert_eq!(catalog.get(Lang::Ja, "nav.projects"), Some("Projects"));
        assert_eq!(catalog.raw(Lang::Ja, "nav.projects"), None);
    }

    #[test]
    fn japanese_wins_when_present() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(Lang::Ja, "nav.settings"), Some("設定"));
        assert_eq!(catalog.get(Lang::En, "nav.settings"), Some("Settings"));
    }

    #[test]
    fn format_resolves_then_interpolates() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.format(Lang::En, "projects.count", &[("count", "12")]),
            Some("12 projects".to_owned())
        );
        assert_eq!(
            catalog.format(Lang::Ja, "projects.count", &[("count", "12")]),
            Some("12件のプロジェクト".to_owned())
        );
    }

    #[test]
    fn missing_key_is_none_everywhere() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(Lang::En, "no.such.key"), None);
        assert_eq!(catalog.format(Lang::Ja, "no.such.key", &[]), None);
    }

    #[test]
    fn builtin_is_fully_translated() {
        let catalog = Catalog::builtin();
        for lang in Lang::ALL {
            let coverage = catalog.coverage(lang);
            assert_eq!(coverage.total_keys, BUILTIN.len());
            assert!(
                coverage.missing.is_empty(),
                "{lang:?} missing: {:?}",
                coverage.missing
            );
            assert_eq!(coverage.percent(), 100.0);
        }
    }

    #[test]
    fn coverage_reports_the_gap_sorted() {
        let mut catalog = Catalog::builtin();
        let mut ja = LangStrings::new();
        ja.insert("nav.settings", "設定");
        catalog.add_lang(Lang::Ja, ja);

        let coverage = catalog.coverage(Lang::Ja);
        assert_eq!(coverage.total_keys, BUILTIN.len());
        assert_eq!(coverage.present, 1);
        assert_eq!(coverage.missing.len(), BUILTIN.len() - 1);
        assert!(coverage.missing.windows(2).all(|w| w[0] <= w[1]));
        assert!((coverage.percent() - 100.0 / BUILTIN.len() as f64).abs() < 1e-9);
    }

    #[test]
    fn empty_catalog_covers_nothing_but_counts_as_complete() {
        let catalog = Catalog::new();
        let coverage = catalog.coverage(Lang::Ja);
        assert_eq!(coverage.total_keys, 0);
        assert_eq!(coverage.percent(), 100.0);
    }
}
