use proptest::prelude::*;

use sable_options::ParseOptions;

use crate::{parse_statement, parse_syntax_tree};

fn check_tree(text: &str) -> Result<(), TestCaseError> {
    let tree = parse_syntax_tree(text, &ParseOptions::default());
    prop_assert_eq!(tree.root().full_text(), text);
    let len = u32::try_from(text.len()).unwrap();
    prop_assert_eq!(tree.root().full_span().end, len);
    for diagnostic in tree.diagnostics() {
        prop_assert!(diagnostic.span.start <= diagnostic.span.end);
        prop_assert!(diagnostic.span.end <= len, "{diagnostic:?} past end of {text:?}");
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_round_trip_arbitrary_text(text in "\\PC{0,64}") {
        check_tree(&text)?;
    }

    #[test]
    fn prop_round_trip_code_like_text(
        text in "[a-z0-9 \"'@$#{}()\\[\\];.,/*\\n\\r\\t<>=!&|?:+-]{0,80}"
    ) {
        check_tree(&text)?;
    }

    #[test]
    fn prop_round_trip_keyword_soup(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "class", "struct", "record", "namespace", "using", "public", "static",
                "void", "int", "var", "if", "else", "for", "foreach", "in", "return",
                "new", "is", "not", "and", "or", "switch", "case", "default", "=>",
                "x", "y", "{", "}", "(", ")", "[", "]", "<", ">", ";", ",", ".", "..",
                "=", "?", ":", "+", "\"s\"", "1", "#if", "\n",
            ]),
            0..40,
        )
    ) {
        check_tree(&words.join(" "))?;
    }

    #[test]
    fn prop_statement_fragments_round_trip(text in "[a-z0-9 (){};=+.<>,]{0,48}") {
        let parsed = parse_statement(&text, 0, &ParseOptions::default(), true);
        prop_assert_eq!(parsed.node().full_text(), text.as_str());
    }

    #[test]
    fn prop_parsing_is_deterministic(text in "[a-z0-9 \"{}()\\[\\];.,<>=!?:+-]{0,60}") {
        let first = parse_syntax_tree(&text, &ParseOptions::default());
        let second = parse_syntax_tree(&text, &ParseOptions::default());
        prop_assert_eq!(first.root().debug_tree(), second.root().debug_tree());
        prop_assert_eq!(first.diagnostics(), second.diagnostics());
    }
}
