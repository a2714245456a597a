//! Property-based invariant tests for the string catalog.
//!
//! Verifies structural guarantees of interpolation, lookup, and coverage:
//!
//! 1.  Interpolation with no placeholders is identity
//! 2.  Interpolation is idempotent (no recursive substitution)
//! 3.  Missing args leave placeholder tokens intact
//! 4.  Interpolation never panics on arbitrary templates
//! 5.  Missing key always returns None
//! 6.  Keys present in English resolve for every language
//! 7.  from_code never panics and strips region subtags
//! 8.  Insert-then-get round trips
//! 9.  format agrees with get + interpolate
//! 10. Coverage percent is in [0, 100]

use foldio_i18n::{Catalog, Lang, LangStrings, interpolate};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_lang() -> impl Strategy<Value = Lang> {
    prop_oneof![Just(Lang::En), Just(Lang::Ja)]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Interpolation with no placeholders is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn no_placeholders_is_identity(text in "[a-zA-Z0-9 .,!?]*") {
        prop_assert_eq!(interpolate(&text, &[]), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Interpolation is idempotent (no recursive substitution)
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn interpolation_not_recursive() {
    let mut catalog = Catalog::new();
    let mut en = LangStrings::new();
    en.insert("test", "Hello {name}!");
    catalog.add_lang(Lang::En, en);

    // A value that itself contains a placeholder must not be re-expanded.
    let result = catalog.format(Lang::En, "test", &[("name", "{name}")]);
    assert_eq!(result, Some("Hello {name}!".into()));

    let result = catalog.format(Lang::En, "test", &[("name", "{other}")]);
    assert_eq!(result, Some("Hello {other}!".into()));
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Missing args leave placeholder tokens intact
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_args_preserve_tokens(name in "[a-z]{1,10}") {
        let template = format!("Value: {{{name}}}");
        prop_assert_eq!(interpolate(&template, &[]), template);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Interpolation never panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolation_never_panics(template in ".*", value in ".*") {
        // braces in arbitrary positions, multibyte text, unclosed tails
        let _ = interpolate(&template, &[("x", value.as_str())]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Missing key always returns None
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_key_returns_none(key in "[a-z.]{1,20}", lang in arb_lang()) {
        let catalog = Catalog::new();
        prop_assert_eq!(catalog.get(lang, &key), None);
        prop_assert_eq!(catalog.format(lang, &key, &[]), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. English keys resolve for every language
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn english_backs_every_language(
        key in "[a-z]{1,12}\\.[a-z]{1,12}",
        value in "[a-zA-Z ]{1,30}",
        lang in arb_lang(),
    ) {
        let mut catalog = Catalog::new();
        catalog.insert(Lang::En, key.as_str(), value.as_str());
        prop_assert_eq!(catalog.get(lang, &key), Some(value.as_str()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. from_code never panics and strips region subtags
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn from_code_total(code in ".*") {
        let _ = Lang::from_code(&code);
    }

    #[test]
    fn from_code_strips_regions(region in "[A-Za-z]{1,8}") {
        for lang in Lang::ALL {
            let dashed = format!("{}-{region}", lang.code());
            let underscored = format!("{}_{region}", lang.code());
            prop_assert_eq!(Lang::from_code(&dashed), Some(lang));
            prop_assert_eq!(Lang::from_code(&underscored), Some(lang));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Insert-then-get round trips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn insert_get_round_trip(
        key in "[a-z.]{1,20}",
        value in ".*",
        lang in arb_lang(),
    ) {
        let mut catalog = Catalog::new();
        catalog.insert(lang, key.as_str(), value.as_str());
        prop_assert_eq!(catalog.raw(lang, &key), Some(value.as_str()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. format agrees with get + interpolate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn format_is_get_then_interpolate(
        value in "[a-zA-Z {}]*",
        arg in "[a-z0-9]{0,10}",
        lang in arb_lang(),
    ) {
        let mut catalog = Catalog::new();
        catalog.insert(Lang::En, "k", value.as_str());

        let args = [("name", arg.as_str())];
        let direct = catalog.format(lang, "k", &args);
        let composed = catalog.get(lang, "k").map(|t| interpolate(t, &args));
        prop_assert_eq!(direct, composed);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Coverage percent is bounded
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn coverage_percent_bounded(
        en_keys in prop::collection::hash_set("[a-z]{1,8}", 0..20),
        ja_keys in prop::collection::hash_set("[a-z]{1,8}", 0..20),
    ) {
        let mut catalog = Catalog::new();
        for key in &en_keys {
            catalog.insert(Lang::En, key.as_str(), "value");
        }
        for key in &ja_keys {
            catalog.insert(Lang::Ja, key.as_str(), "value");
        }

        let coverage = catalog.coverage(Lang::Ja);
        let percent = coverage.percent();
        prop_assert!((0.0..=100.0).contains(&percent), "percent was {percent}");
        prop_assert_eq!(coverage.total_keys, en_keys.len());
        prop_assert_eq!(coverage.present + coverage.missing.len(), coverage.total_keys);
    }
}
