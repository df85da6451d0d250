//! Tests for the unified API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::domain::CapitalizationRule;
    use crate::traits::Translator;
    use std::io::Cursor;

    #[test]
    fn test_translator_creation() {
        // Default translator
        let translator = BrailleTranslator::new();
        assert_eq!(translator.config(), &Config::default());

        // Custom config
        let config = Config::builder()
            .capitalization(CapitalizationRule::PerLetter)
            .build()
            .unwrap();
        let custom = BrailleTranslator::with_config(config).unwrap();
        assert_eq!(
            custom.engine().capitalization(),
            CapitalizationRule::PerLetter
        );
    }

    #[test]
    fn test_basic_processing() {
        let translator = BrailleTranslator::new();
        let output = translator.process(Input::from_text("Hola 2")).unwrap();

        assert_eq!(output.braille, translator.translate("Hola 2"));
        assert_eq!(output.metadata.bytes_processed, 6);
        assert_eq!(output.metadata.stats.chars_scanned, 6);
        assert_eq!(output.metadata.stats.capital_prefixes, 1);
        assert_eq!(output.metadata.stats.number_prefixes, 1);
        assert!(output.is_fully_translated());
    }

    #[test]
    fn test_stream_processing() {
        let translator = BrailleTranslator::new();
        let reader = Cursor::new("año".as_bytes().to_vec());
        let output = translator.process_stream(reader).unwrap();

        assert_eq!(output.braille, "\u{2801}\u{283B}\u{2815}");
    }

    #[test]
    fn test_input_limit() {
        let config = Config::builder().max_input_bytes(4).build().unwrap();
        let translator = BrailleTranslator::with_config(config).unwrap();

        assert!(translator.process(Input::from_text("hola")).is_ok());

        let err = translator.process(Input::from_text("holas")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        // Direct translation has no limit
        assert_eq!(translator.translate("holas").chars().count(), 5);
    }

    #[test]
    fn test_invalid_bytes_are_reported() {
        let translator = BrailleTranslator::new();
        let result = translator.process(Input::from_bytes(vec![0xC3]));
        assert!(matches!(result, Err(Error::Infrastructure(_))));
    }

    #[test]
    fn test_empty_input() {
        let translator = BrailleTranslator::new();
        let output = translator.process(Input::from_text("")).unwrap();

        assert!(output.braille.is_empty());
        assert_eq!(output.cell_count(), 0);
    }

    #[test]
    fn test_translator_trait_object() {
        let translators: Vec<Box<dyn Translator>> = vec![
            Box::new(BrailleTranslator::new()),
            Box::new(crate::domain::TranslationEngine::new()),
        ];

        for translator in &translators {
            assert_eq!(translator.translate("a"), "\u{2801}");
            assert_eq!(translator.name(), "spanish-uncontracted");
        }
    }

    #[test]
    fn test_translator_is_shareable_across_threads() {
        let translator = std::sync::Arc::new(BrailleTranslator::new());

        let handles: Vec<_> = ["1", "A", "ñ"]
            .into_iter()
            .map(|text| {
                let translator = translator.clone();
                std::thread::spawn(move || translator.translate(text))
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0], "\u{283C}\u{2801}");
        assert_eq!(results[1], "\u{2828}\u{2801}");
        assert_eq!(results[2], "\u{283B}");
    }
}
