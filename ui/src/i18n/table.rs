//! Per-language message tables backed by Fluent bundles.
//!
//! Each language ships one `.ftl` file under `ui/i18n/<locale>/blueboost-ui.ftl`,
//! embedded at compile time through `rust-embed`. Lookups are strictly per
//! language: a key missing from Arabic does *not* fall back to English here;
//! the fallback policy lives in [`LocalizationState`](super::LocalizationState).

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use fluent::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use super::{I18nError, Language};

/// Fluent "domain": the canonical file name in every locale folder.
pub const DOMAIN: &str = "blueboost-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

struct LanguageBundle {
    bundle: FluentBundle<FluentResource>,
    keys: BTreeSet<String>,
}

pub struct TranslationTable {
    languages: HashMap<Language, LanguageBundle>,
}

impl TranslationTable {
    /// Loads the embedded `.ftl` file of every [`Language`].
    pub fn embedded() -> Result<Self, I18nError> {
        let mut sources = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let path = asset_path(language);
            let file = Localizations::get(&path)
                .ok_or(I18nError::MissingAsset { language, path: path.clone() })?;
            let source = String::from_utf8_lossy(&file.data).into_owned();
            sources.push((language, source));
        }
        let borrowed: Vec<(Language, &str)> =
            sources.iter().map(|(lang, src)| (*lang, src.as_str())).collect();
        Self::from_sources(&borrowed)
    }

    /// Builds a table from literal Fluent sources.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut languages = HashMap::new();
        for (language, source) in sources {
            languages.insert(*language, build_bundle(*language, source)?);
        }
        Ok(Self { languages })
    }

    /// Formats `key` for `language`, or `None` if that language has no such message.
    pub fn lookup(&self, language: Language, key: &str) -> Option<String> {
        let entry = self.languages.get(&language)?;
        let message = entry.bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = Vec::new();
        let text = entry.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(%language, key, ?errors, "[i18n] formatting reported errors");
        }
        Some(text.into_owned())
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.languages
            .get(&language)
            .map(|entry| entry.keys.contains(key))
            .unwrap_or(false)
    }

    pub fn keys(&self, language: Language) -> BTreeSet<String> {
        self.languages
            .get(&language)
            .map(|entry| entry.keys.clone())
            .unwrap_or_default()
    }

    /// Keys the primary language defines that `language` lacks.
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let own = self.keys(language);
        self.keys(Language::default())
            .into_iter()
            .filter(|key| !own.contains(key))
            .collect()
    }
}

impl fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for language in Language::ALL {
            if let Some(entry) = self.languages.get(&language) {
                map.entry(&language, &entry.keys.len());
            }
        }
        map.finish()
    }
}

fn asset_path(language: Language) -> String {
    format!("{}/{DOMAIN}.ftl", language.locale())
}

fn build_bundle(language: Language, source: &str) -> Result<LanguageBundle, I18nError> {
    let resource = FluentResource::try_new(source.to_owned()).map_err(|(_, errors)| {
        I18nError::Parse {
            language,
            messages: join_errors(&errors),
        }
    })?;
    let keys = message_ids(&resource);

    let langid: LanguageIdentifier = language
        .locale()
        .parse()
        .map_err(|err| I18nError::Parse {
            language,
            messages: format!("invalid locale identifier: {err}"),
        })?;
    let mut bundle = FluentBundle::new(vec![langid]);
    // Isolation marks would leak U+2068/U+2069 into plain strings.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::Bundle {
            language,
            messages: join_errors(&errors),
        })?;

    Ok(LanguageBundle { bundle, keys })
}

fn join_errors<E: fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Identifiers of the resource's messages; terms and comments are not messages.
fn message_ids(resource: &FluentResource) -> BTreeSet<String> {
    resource
        .entries()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}
