//! Localization
//!
//! Fluent bundles are embedded at compile time from `locales/<lang>/main.ftl`.
//! Lookups fall back to English, then to the message key itself.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_langneg::{
    negotiate_languages, LanguageIdentifier as NegotiatedId, NegotiationStrategy,
};
use rust_embed::RustEmbed;
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Locales;

const FALLBACK_LANGUAGE: &str = "en";
const RESOURCE_NAME: &str = "main.ftl";

/// Translated UI strings for the active language
pub struct LocaleManager {
    language: String,
    bundle: FluentBundle<FluentResource>,
    fallback: FluentBundle<FluentResource>,
}

impl fmt::Debug for LocaleManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleManager")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Default for LocaleManager {
    fn default() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }
}

impl LocaleManager {
    /// Load the best available match for `requested` (e.g. "de", "de-AT")
    pub fn new(requested: &str) -> Self {
        let language = Self::negotiate(requested);
        Self {
            bundle: Self::load_bundle(&language),
            fallback: Self::load_bundle(FALLBACK_LANGUAGE),
            language,
        }
    }

    /// Language codes with an embedded translation, sorted
    pub fn available_languages() -> Vec<String> {
        let mut languages: Vec<String> = Locales::iter()
            .filter_map(|path| path.split_once('/').map(|(lang, _)| lang.to_string()))
            .collect();
        languages.sort();
        languages.dedup();
        languages
    }

    /// Active language code
    pub fn current_language(&self) -> &str {
        &self.language
    }

    /// Switch language; unknown codes fall back to English
    pub fn set_language(&mut self, requested: &str) {
        let language = Self::negotiate(requested);
        if language != self.language {
            tracing::info!("Switching UI language to {}", language);
            self.bundle = Self::load_bundle(&language);
            self.language = language;
        }
    }

    /// Translate a message
    pub fn t(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translate a message with `{ $name }` arguments
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        [&self.bundle, &self.fallback]
            .into_iter()
            .find_map(|bundle| {
                let pattern = bundle.get_message(key)?.value()?;
                let mut errors = Vec::new();
                let text = bundle.format_pattern(pattern, args, &mut errors);
                if !errors.is_empty() {
                    tracing::warn!("Fluent errors in '{}': {:?}", key, errors);
                }
                Some(text.into_owned())
            })
            .unwrap_or_else(|| key.to_string())
    }

    fn negotiate(requested: &str) -> String {
        let available: Vec<NegotiatedId> = Self::available_languages()
            .iter()
            .filter_map(|code| code.parse().ok())
            .collect();
        let requested: Vec<NegotiatedId> = requested.parse().into_iter().collect();
        let default: NegotiatedId = FALLBACK_LANGUAGE.parse().unwrap_or_default();

        negotiate_languages(
            &requested,
            &available,
            Some(&default),
            NegotiationStrategy::Filtering,
        )
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
    }

    fn load_bundle(language: &str) -> FluentBundle<FluentResource> {
        let langid: LanguageIdentifier = language.parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);

        let path = format!("{language}/{RESOURCE_NAME}");
        let Some(file) = Locales::get(&path) else {
            tracing::warn!("Missing locale resource {}", path);
            return bundle;
        };

        let source = String::from_utf8_lossy(&file.data).into_owned();
        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                tracing::warn!("Parse errors in {}: {:?}", path, errors);
                resource
            }
        };
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!("Duplicate messages in {}: {:?}", path, errors);
        }
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_languages() {
        let languages = LocaleManager::available_languages();
        assert!(languages.contains(&"en".to_string()));
        assert!(languages.contains(&"de".to_string()));
    }

    #[test]
    fn test_translate_and_fallback() {
        let en = LocaleManager::new("en");
        assert_eq!(en.t("btn-add-step"), "+ Add Step");
        assert_eq!(en.t("no-such-key"), "no-such-key");

        let de = LocaleManager::new("de-AT");
        assert_eq!(de.current_language(), "de");
        assert_eq!(de.t("btn-confirm"), "Bestätigen");
    }

    #[test]
    fn test_unknown_language_uses_english() {
        let mut locale = LocaleManager::new("xx");
        assert_eq!(locale.current_language(), "en");
        locale.set_language("de");
        assert_eq!(locale.current_language(), "de");
    }

    #[test]
    fn test_args() {
        let en = LocaleManager::new("en");
        assert_eq!(en.t_args("label-steps", &[("count", "5")]), "5 steps");
    }
}
