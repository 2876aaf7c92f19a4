/*!
 * Tests for the language catalog
 */

use std::collections::HashSet;

use voxlate::language_catalog;

#[test]
fn test_all_shouldContainFullTable() {
    assert_eq!(language_catalog::all().len(), 73);
}

#[test]
fn test_all_shouldPreserveInsertionOrder() {
    let entries = language_catalog::all();
    assert_eq!(entries[0].code, "en");
    assert_eq!(entries[0].name, "English");
    assert_eq!(entries[16].code, "fr");
    assert_eq!(entries.last().unwrap().code, "haw");
}

#[test]
fn test_all_shouldHaveUniqueCodes() {
    let codes: HashSet<&str> = language_catalog::all().iter().map(|e| e.code).collect();
    assert_eq!(codes.len(), language_catalog::all().len());
}

#[test]
fn test_find_withCatalogCode_shouldReturnEntry() {
    let entry = language_catalog::find("de").unwrap();
    assert_eq!(entry.name, "German");
}

#[test]
fn test_find_withUnknownCode_shouldReturnNone() {
    assert!(language_catalog::find("xx").is_none());
    assert!(language_catalog::find("").is_none());
}

#[test]
fn test_isSupported_shouldMatchCatalogMembership() {
    assert!(language_catalog::is_supported("zh-CN"));
    assert!(language_catalog::is_supported("haw"));
    assert!(!language_catalog::is_supported("klingon"));
}

#[test]
fn test_displayName_withCatalogCode_shouldUseCatalogName() {
    assert_eq!(language_catalog::display_name("zh-TW"), "Chinese (Traditional)");
}

#[test]
fn test_displayName_withIsoCodeOutsideCatalog_shouldFallBackToIsoName() {
    // Dutch is a valid ISO 639-1 code but not part of the catalog
    assert!(!language_catalog::is_supported("nl"));
    assert_eq!(language_catalog::display_name("nl"), "Dutch");
}

#[test]
fn test_displayName_withUnknownCode_shouldEchoCode() {
    assert_eq!(language_catalog::display_name("zz"), "zz");
    assert_eq!(language_catalog::display_name(""), "");
}
