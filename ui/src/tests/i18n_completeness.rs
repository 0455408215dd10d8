use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{Language, TranslationTable};
use crate::sections::{
    COMPANY_LINKS, FAQ_ENTRIES, GAME_KEYS, LEGAL_LINKS, MENU_ITEMS, STATS,
};

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Extract all `.t("...")` calls with a literal key from source files under `src/`.
///
/// NOTE: This will not catch keys held in constant tables or built with
/// `format!`; those are listed explicitly in the tests below.
fn literal_keys_in_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (at, needle) in content.match_indices(".t(\"") {
            let rest = &content[at + needle.len()..];
            let Some(end) = rest.find('"') else {
                continue;
            };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
        }
    }

    found
}

fn assert_defined_everywhere<'a>(table: &TranslationTable, keys: impl IntoIterator<Item = &'a str>) {
    let mut missing = Vec::new();
    for key in keys {
        for language in Language::ALL {
            if !table.contains(language, key) {
                missing.push(format!("{language}: {key}"));
            }
        }
    }
    assert!(
        missing.is_empty(),
        "Referenced translation keys without a message ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn literal_lookups_resolve_in_every_language() {
    let table = TranslationTable::embedded().expect("embedded tables load");
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = literal_keys_in_source(&src_root);
    assert!(!referenced.is_empty(), "no .t(\"..\") calls found under {src_root:?}");

    assert_defined_everywhere(&table, referenced.iter().map(String::as_str));

    let unused: Vec<_> = table
        .keys(Language::English)
        .into_iter()
        .filter(|k| !referenced.contains(k))
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} keys not looked up by literal (first 20 shown):\n{}",
            unused.len(),
            unused.iter().take(20).cloned().collect::<Vec<_>>().join(", ")
        );
    }
}

#[test]
fn table_driven_keys_resolve_in_every_language() {
    let table = TranslationTable::embedded().expect("embedded tables load");

    assert_defined_everywhere(&table, GAME_KEYS);
    assert_defined_everywhere(&table, MENU_ITEMS);
    assert_defined_everywhere(&table, COMPANY_LINKS);
    assert_defined_everywhere(&table, LEGAL_LINKS);
    assert_defined_everywhere(&table, STATS.map(|(_, label)| label));
    assert_defined_everywhere(
        &table,
        FAQ_ENTRIES
            .iter()
            .flat_map(|(question, answer)| std::iter::once(*question).chain(*answer)),
    );

    let testimonial_keys: Vec<String> = (1..=8)
        .flat_map(|n| ["name", "location", "text"].map(|field| format!("testimonial{n}-{field}")))
        .collect();
    assert_defined_everywhere(&table, testimonial_keys.iter().map(String::as_str));
}

#[test]
fn secondary_language_has_no_gaps() {
    let table = TranslationTable::embedded().expect("embedded tables load");
    assert_eq!(table.missing_keys(Language::Arabic), Vec::<String>::new());
}
