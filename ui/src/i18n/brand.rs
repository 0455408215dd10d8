//! Splitting translated text around the brand name so it can be styled apart.

use super::Language;

/// Brand token as it appears inside translated strings.
pub const BRAND_EN: &str = "BlueBoost";
pub const BRAND_AR: &str = "بلو بوست";

pub fn brand_token(language: Language) -> &'static str {
    match language {
        Language::English => BRAND_EN,
        Language::Arabic => BRAND_AR,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSplit {
    pub before: String,
    pub brand: Option<String>,
    pub after: String,
}

/// Splits `text` on the first occurrence of `token`. Without a match the whole
/// text lands in `before`.
pub fn split_brand(text: &str, token: &str) -> BrandSplit {
    match text.split_once(token).filter(|_| !token.is_empty()) {
        Some((before, after)) => BrandSplit {
            before: before.to_string(),
            brand: Some(token.to_string()),
            after: after.to_string(),
        },
        None => BrandSplit {
            before: text.to_string(),
            brand: None,
            after: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_first_occurrence() {
        let split = split_brand("Join the BlueBoost community", BRAND_EN);
        assert_eq!(split.before, "Join the ");
        assert_eq!(split.brand.as_deref(), Some("BlueBoost"));
        assert_eq!(split.after, " community");
    }

    #[test]
    fn arabic_brand_is_found() {
        let split = split_brand("انضم إلى مجتمع بلو بوست", BRAND_AR);
        assert_eq!(split.before, "انضم إلى مجتمع ");
        assert_eq!(split.after, "");
        assert!(split.brand.is_some());
    }

    #[test]
    fn no_token_keeps_text_whole() {
        let split = split_brand("Sign Up", BRAND_EN);
        assert_eq!(split.before, "Sign Up");
        assert_eq!(split.brand, None);
        assert!(split.after.is_empty());
    }

    #[test]
    fn brand_follows_language() {
        assert_eq!(brand_token(Language::English), BRAND_EN);
        assert_eq!(brand_token(Language::Arabic), BRAND_AR);
    }

    #[test]
    fn empty_token_never_matches() {
        assert_eq!(split_brand("abc", "").brand, None);
    }
}
