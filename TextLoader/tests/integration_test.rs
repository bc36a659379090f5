mod common;

use common::{config_for, key, host_hash, utf16_with_bom, write_file};
use pretty_assertions::assert_eq;
use std::ffi::{CStr, CString};
use tempfile::tempdir;
use textloader::prelude::*;

fn text(catalog: &Catalog, source: &str) -> Option<String> {
    catalog
        .get(key(source))
        .map(|s: &CStr| s.to_string_lossy().into_owned())
}

#[test]
fn test_single_language_file() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "mod/strings.tr", b"Hello\tHallo\nWorld\tWelt");

    let (catalog, summary) = load_catalog(&config_for(dir.path()), "de", host_hash);
    assert_eq!(summary.files_read, 1);
    assert_eq!(catalog.len(), 2);
    assert_eq!(text(&catalog, "Hello").as_deref(), Some("Hallo"));
    assert_eq!(text(&catalog, "World").as_deref(), Some("Welt"));
}

#[test]
fn test_multi_language_sections() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "multi.tr", b"[en]\nHi\tHi\n[de,fr]\nHi\tSalut\n[]\nGlobal\tG");

    let (catalog, _) = load_catalog(&config_for(dir.path()), "fr", host_hash);
    assert_eq!(catalog.len(), 2);
    assert_eq!(text(&catalog, "Hi").as_deref(), Some("Salut"));
    assert_eq!(text(&catalog, "Global").as_deref(), Some("G"));
}

#[test]
fn test_comments_and_blank_rows() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "c.tr", b";\theader\n\nKey\tVal");

    let (catalog, _) = load_catalog(&config_for(dir.path()), "en", host_hash);
    assert_eq!(catalog.len(), 1);
    assert_eq!(text(&catalog, "Key").as_deref(), Some("Val"));
}

#[test]
fn test_quoted_separators() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "q.tr", b"\"a\tb\"\t\"c\"\"d\"");

    let table = Table::read_tsv(&path).unwrap();
    assert_eq!(table.row(0), [b"a\tb".to_vec(), b"c\"d".to_vec()]);

    let (catalog, _) = load_catalog(&config_for(dir.path()), "en", host_hash);
    assert_eq!(text(&catalog, "a\tb").as_deref(), Some("c\"d"));
}

#[test]
fn test_later_file_wins() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a/first.tr", b"Foo\tBar");
    write_file(dir.path(), "b.tr", b"Foo\tBaz");

    let files = find_translation_files(dir.path(), "tr");
    assert_eq!(files.last().unwrap(), &dir.path().join("b.tr"));

    let (catalog, summary) = load_catalog(&config_for(dir.path()), "en", host_hash);
    assert_eq!(summary.entries, 2);
    assert_eq!(catalog.len(), 1);
    assert_eq!(text(&catalog, "Foo").as_deref(), Some("Baz"));
}

#[test]
fn test_language_switch_rebuilds() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "ui.tr",
        b"[en]\nOnlyEnglish\tE\nShared\tShared-en\n[de]\nShared\tShared-de\n[]\nAll\tA",
    );
    let config = config_for(dir.path());

    let (en, _) = load_catalog(&config, "en", host_hash);
    let (de, _) = load_catalog(&config, "de", host_hash);

    assert_eq!(text(&en, "OnlyEnglish").as_deref(), Some("E"));
    assert_eq!(text(&de, "OnlyEnglish"), None);
    assert_eq!(text(&en, "Shared").as_deref(), Some("Shared-en"));
    assert_eq!(text(&de, "Shared").as_deref(), Some("Shared-de"));
    assert_eq!(text(&de, "All").as_deref(), Some("A"));
}

#[test]
fn test_loading_is_deterministic() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "x/one.tr", b"A\t1\nB\t2");
    write_file(dir.path(), "y/two.TR", b"[de]\nA\teins\n[]\nC\t3");
    let config = config_for(dir.path());

    let (first, _) = load_catalog(&config, "de", host_hash);
    let (second, _) = load_catalog(&config, "de", host_hash);
    assert_eq!(first, second);
    assert_eq!(text(&first, "A").as_deref(), Some("eins"));
}

#[test]
fn test_utf16_files_match_utf8() {
    let content = "[de]\nSchließen\tClose\n\"multi\r\nline\"\tZeile\n";
    let utf8_dir = tempdir().unwrap();
    let le_dir = tempdir().unwrap();
    let be_dir = tempdir().unwrap();
    write_file(utf8_dir.path(), "t.tr", content.as_bytes());
    write_file(le_dir.path(), "t.tr", &utf16_with_bom(content, false));
    write_file(be_dir.path(), "t.tr", &utf16_with_bom(content, true));

    let (utf8, _) = load_catalog(&config_for(utf8_dir.path()), "de", host_hash);
    let (le, _) = load_catalog(&config_for(le_dir.path()), "de", host_hash);
    let (be, _) = load_catalog(&config_for(be_dir.path()), "de", host_hash);

    assert_eq!(utf8.len(), 2);
    assert_eq!(text(&utf8, "multi\r\nline").as_deref(), Some("Zeile"));
    assert_eq!(le, utf8);
    assert_eq!(be, utf8);
}

#[test]
fn test_legacy_encoded_bytes_are_not_reencoded() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "cp1252.tr", b"[fr]\nCaf\xE9\tTh\xE9\nPlain\tOK");

    let (catalog, summary) = load_catalog(&config_for(dir.path()), "fr", host_hash);
    assert_eq!(summary.entries, 2);

    let raw_key = host_hash(&CString::new(b"Caf\xE9".to_vec()).unwrap());
    let replaced_key = key("Caf\u{FFFD}");
    assert_eq!(catalog.get(raw_key).map(CStr::to_bytes), Some(&b"Th\xE9"[..]));
    assert!(!catalog.contains_key(replaced_key));
    assert_eq!(text(&catalog, "Plain").as_deref(), Some("OK"));
}

#[test]
fn test_empty_and_header_only_files() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "empty.tr", b"");
    write_file(dir.path(), "header.tr", b"[de]\n");

    let (catalog, summary) = load_catalog(&config_for(dir.path()), "de", host_hash);
    assert!(catalog.is_empty());
    assert_eq!(summary.files_read, 1);
    assert_eq!(summary.files_skipped, 1);
}

#[test]
fn test_other_extensions_ignored() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "notes.txt", b"Foo\tIgnored");
    write_file(dir.path(), "real.Tr", b"Foo\tUsed");

    let (catalog, _) = load_catalog(&config_for(dir.path()), "en", host_hash);
    assert_eq!(text(&catalog, "Foo").as_deref(), Some("Used"));
}

#[test]
fn test_missing_plugin_root() {
    let dir = tempdir().unwrap();
    let config = config_for(&dir.path().join("plugins"));

    let (catalog, summary) = load_catalog(&config, "en", host_hash);
    assert!(catalog.is_empty());
    assert_eq!(summary, LoadSummary::default());
}

#[test]
fn test_unquote_roundtrip_on_parsed_cells() {
    use textloader::formats::table::{quoted, unquoted};

    let table = Table::parse_bytes(
        b"plain\t\"tab\there\"\t\"say \"\"hi\"\"\"\t\"\"\"\"",
        Separator::TAB,
    );
    for cell in table.row(0) {
        let requoted = quoted(cell, Separator::TAB);
        assert_eq!(&*unquoted(&requoted), cell.as_slice());
    }
}
