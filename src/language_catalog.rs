use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language catalog for the selection controls
///
/// A static, ordered table mapping language codes to display names. The
/// table is loaded once at startup and never mutated; iteration order is
/// the insertion order below, which is also the display order.
/// One entry in the language catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Short language code passed to the translation provider
    pub code: &'static str,
    /// Display name shown in the selection controls
    pub name: &'static str,
}

/// The supported languages, in display order
static CATALOG: &[LanguageEntry] = &[
    LanguageEntry { code: "en", name: "English" },
    LanguageEntry { code: "hi", name: "Hindi" },
    LanguageEntry { code: "bn", name: "Bengali" },
    LanguageEntry { code: "ta", name: "Tamil" },
    LanguageEntry { code: "te", name: "Telugu" },
    LanguageEntry { code: "mr", name: "Marathi" },
    LanguageEntry { code: "gu", name: "Gujarati" },
    LanguageEntry { code: "kn", name: "Kannada" },
    LanguageEntry { code: "ml", name: "Malayalam" },
    LanguageEntry { code: "pa", name: "Punjabi" },
    LanguageEntry { code: "or", name: "Odia" },
    LanguageEntry { code: "as", name: "Assamese" },
    LanguageEntry { code: "ur", name: "Urdu" },
    LanguageEntry { code: "ne", name: "Nepali" },
    LanguageEntry { code: "si", name: "Sinhala" },
    LanguageEntry { code: "ar", name: "Arabic" },
    LanguageEntry { code: "fr", name: "French" },
    LanguageEntry { code: "de", name: "German" },
    LanguageEntry { code: "es", name: "Spanish" },
    LanguageEntry { code: "it", name: "Italian" },
    LanguageEntry { code: "pt", name: "Portuguese" },
    LanguageEntry { code: "ja", name: "Japanese" },
    LanguageEntry { code: "ko", name: "Korean" },
    LanguageEntry { code: "zh-CN", name: "Chinese (Simplified)" },
    LanguageEntry { code: "zh-TW", name: "Chinese (Traditional)" },
    LanguageEntry { code: "ru", name: "Russian" },
    LanguageEntry { code: "tr", name: "Turkish" },
    LanguageEntry { code: "vi", name: "Vietnamese" },
    LanguageEntry { code: "th", name: "Thai" },
    LanguageEntry { code: "id", name: "Indonesian" },
    LanguageEntry { code: "ms", name: "Malay" },
    LanguageEntry { code: "sw", name: "Swahili" },
    LanguageEntry { code: "fi", name: "Finnish" },
    LanguageEntry { code: "no", name: "Norwegian" },
    LanguageEntry { code: "da", name: "Danish" },
    LanguageEntry { code: "sv", name: "Swedish" },
    LanguageEntry { code: "pl", name: "Polish" },
    LanguageEntry { code: "hu", name: "Hungarian" },
    LanguageEntry { code: "cs", name: "Czech" },
    LanguageEntry { code: "ro", name: "Romanian" },
    LanguageEntry { code: "sk", name: "Slovak" },
    LanguageEntry { code: "bg", name: "Bulgarian" },
    LanguageEntry { code: "hr", name: "Croatian" },
    LanguageEntry { code: "sr", name: "Serbian" },
    LanguageEntry { code: "sl", name: "Slovenian" },
    LanguageEntry { code: "lt", name: "Lithuanian" },
    LanguageEntry { code: "lv", name: "Latvian" },
    LanguageEntry { code: "et", name: "Estonian" },
    LanguageEntry { code: "is", name: "Icelandic" },
    LanguageEntry { code: "el", name: "Greek" },
    LanguageEntry { code: "he", name: "Hebrew" },
    LanguageEntry { code: "fa", name: "Persian" },
    LanguageEntry { code: "uk", name: "Ukrainian" },
    LanguageEntry { code: "bs", name: "Bosnian" },
    LanguageEntry { code: "mk", name: "Macedonian" },
    LanguageEntry { code: "sq", name: "Albanian" },
    LanguageEntry { code: "tl", name: "Tagalog" },
    LanguageEntry { code: "zu", name: "Zulu" },
    LanguageEntry { code: "xh", name: "Xhosa" },
    LanguageEntry { code: "af", name: "Afrikaans" },
    LanguageEntry { code: "jw", name: "Javanese" },
    LanguageEntry { code: "cy", name: "Welsh" },
    LanguageEntry { code: "ga", name: "Irish" },
    LanguageEntry { code: "la", name: "Latin" },
    LanguageEntry { code: "ht", name: "Haitian Creole" },
    LanguageEntry { code: "yi", name: "Yiddish" },
    LanguageEntry { code: "eo", name: "Esperanto" },
    LanguageEntry { code: "ca", name: "Catalan" },
    LanguageEntry { code: "gl", name: "Galician" },
    LanguageEntry { code: "eu", name: "Basque" },
    LanguageEntry { code: "haw", name: "Hawaiian" },
];

/// Index by code for constant-time lookup
static BY_CODE: Lazy<HashMap<&'static str, &'static LanguageEntry>> =
    Lazy::new(|| CATALOG.iter().map(|entry| (entry.code, entry)).collect());

/// Get all catalog entries in display order
pub fn all() -> &'static [LanguageEntry] {
    CATALOG
}

/// Look up a catalog entry by its code
pub fn find(code: &str) -> Option<&'static LanguageEntry> {
    BY_CODE.get(code).copied()
}

/// Check whether a code is part of the catalog
pub fn is_supported(code: &str) -> bool {
    BY_CODE.contains_key(code)
}

/// Get a display name for a code
///
/// Prefers the catalog name. Codes outside the catalog fall back to the
/// ISO 639-1 English name, and finally to the code itself so callers
/// always have something printable.
pub fn display_name(code: &str) -> String {
    if let Some(entry) = find(code) {
        return entry.name.to_string();
    }

    if let Some(language) = isolang::Language::from_639_1(code) {
        return language.to_name().to_string();
    }

    code.to_string()
}
