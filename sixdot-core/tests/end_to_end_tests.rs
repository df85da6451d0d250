//! End-to-end tests for the complete translation pipeline

use sixdot_core::{BrailleTranslator, CapitalizationRule, Config, DotPattern, Input};
use std::io::Cursor;

/// Build the expected output from pattern codes
fn cells(codes: &[&str]) -> String {
    codes
        .iter()
        .map(|code| DotPattern::from_code(code).to_unicode_scalar())
        .collect()
}

#[test]
fn test_spanish_sentence() {
    let translator = BrailleTranslator::new();

    let out = translator.translate("¿Qué día es?");
    let expected = cells(&[
        "26",    // ¿
        "46",    // capital
        "12345", // q
        "136",   // u
        "2346",  // é
        "0",     // space
        "145",   // d
        "34",    // í
        "1",     // a
        "0",     // space
        "15",    // e
        "234",   // s
        "26",    // ?
    ]);
    assert_eq!(out, expected);
}

#[test]
fn test_price_with_decimal_separator() {
    let translator = BrailleTranslator::new();

    // "3,50 euros": one numeric indicator for the whole amount
    let out = translator.translate("3,50 euros");
    let expected = cells(&[
        "3456", "14", "2", "15", "245", "0", "15", "136", "1235", "135", "234",
    ]);
    assert_eq!(out, expected);
}

#[test]
fn test_date_with_slashes_reopens_numbers() {
    let translator = BrailleTranslator::new();

    // '/' is not a separator, so each group needs its own indicator
    let out = translator.translate("1/2");
    assert_eq!(out, cells(&["3456", "1", "34", "3456", "12"]));
}

#[test]
fn test_acronym_and_name() {
    let translator = BrailleTranslator::new();

    let out = translator.translate("ONU y Ana");
    let expected = cells(&[
        "46", "135", "1345", "136", // ONU, one indicator
        "0", "13456", "0", // y
        "46", "1", "1345", "1", // Ana
    ]);
    assert_eq!(out, expected);
}

#[test]
fn test_math_expression() {
    let translator = BrailleTranslator::new();

    let out = translator.translate("2+2=4");
    let expected = cells(&["3456", "12", "346", "3456", "12", "2356", "3456", "145"]);
    assert_eq!(out, expected);
}

#[test]
fn test_multiline_text_keeps_newlines() {
    let translator = BrailleTranslator::new();

    let out = translator.translate("sí\nno");
    assert_eq!(out, format!("{}\n{}", cells(&["234", "34"]), cells(&["1345", "135"])));
}

#[test]
fn test_unknown_symbols_are_kept() {
    let translator = BrailleTranslator::new();

    let out = translator.translate("5€ & más");
    let expected = format!(
        "{}€{}&{}",
        cells(&["3456", "15"]),
        cells(&["0"]),
        cells(&["0", "134", "12356", "234"])
    );
    assert_eq!(out, expected);
}

#[test]
fn test_per_letter_compatibility_mode() {
    let config = Config::builder()
        .capitalization(CapitalizationRule::PerLetter)
        .build()
        .unwrap();
    let translator = BrailleTranslator::with_config(config).unwrap();

    let out = translator.translate("ONU");
    assert_eq!(out, cells(&["46", "135", "46", "1345", "46", "136"]));
}

#[test]
fn test_process_reader_matches_direct_translation() {
    let translator = BrailleTranslator::new();
    let text = "El Niño llegó en 1997.";

    let output = translator
        .process_stream(Cursor::new(text.as_bytes().to_vec()))
        .unwrap();
    assert_eq!(output.braille, translator.translate(text));
    assert_eq!(output.metadata.stats.number_prefixes, 1);
    // 'E' and 'N' are capitals in mixed-case words
    assert_eq!(output.metadata.stats.capital_prefixes, 2);
    assert!(output.is_fully_translated());
}

#[test]
fn test_process_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("entrada.txt");
    std::fs::write(&path, "Hola, MUNDO").unwrap();

    let translator = BrailleTranslator::new();
    let output = translator.process(Input::from_file(&path)).unwrap();

    assert_eq!(output.metadata.stats.capital_prefixes, 2);
    assert_eq!(output.braille, translator.translate("Hola, MUNDO"));
}
