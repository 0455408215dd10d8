use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures the Arabic locale provides exactly the keys present in the
/// primary (en-US) `blueboost-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any unindented line of the form `key =` as a message definition
/// - Skips blank, attribute and continuation lines
///
/// If you add a locale:
/// 1. Create `ui/i18n/<locale>/blueboost-ui.ftl`
/// 2. Copy all keys from `en-US/blueboost-ui.ftl`
/// 3. Register it below and run `cargo test -p blueboost-ui`.
#[test]
fn all_locales_have_all_primary_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/blueboost-ui.ftl");
    const AR_SA: &str = include_str!("../i18n/ar-SA/blueboost-ui.ftl");

    let primary_keys = extract_keys(EN_US);
    assert!(!primary_keys.is_empty(), "Primary (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("ar-SA", AR_SA)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);

        let missing: BTreeSet<&String> = primary_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }

        let extra: BTreeSet<&String> = keys.difference(&primary_keys).collect();
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) absent from en-US:\n  {}",
                extra.len(),
                extra.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: keep both files in step.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn arabic_values_keep_the_arabic_brand() {
    const AR_SA: &str = include_str!("../i18n/ar-SA/blueboost-ui.ftl");
    let cta = AR_SA
        .lines()
        .find(|line| line.starts_with("cta-title"))
        .expect("cta-title defined");
    assert!(cta.contains("بلو بوست"), "{cta}");
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();
    for line in src.lines() {
        if let Some(key) = message_key(line) {
            keys.insert(key.to_string());
        }
    }
    keys
}

fn message_key(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty()
        && !key.contains(' ')
        && !key.starts_with('-')
        && !key.starts_with('[')
        && !key.starts_with('@');
    valid.then_some(key)
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if let Some(key) = message_key(raw) {
            if !seen.insert(key) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
