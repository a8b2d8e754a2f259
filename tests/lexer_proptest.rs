//! Property-based tests for line classification

use orgtree::org::lexing::{classify_line, Lexer};
use orgtree::org::options::TabHandling;
use orgtree::org::stream::LineStream;
use orgtree::org::token::LineType;
use orgtree::org::{parse, parse_inline};
use proptest::prelude::*;

/// Lines drawn from every category plus random noise
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\*{1,4} [A-Za-z]{1,8}( :[a-z]{1,4}:)?",
        "\\*{1,3} (TODO|DONE) (\\[#[ABC]\\] )?[a-z ]{0,10}",
        " {0,4}(-|\\+|[0-9]{1,2}\\.) (\\[[ X-]\\] )?[a-z ]{0,10}",
        " {0,4}- [a-z]{1,5} :: [a-z ]{0,10}",
        "\\| [a-z]{0,3} \\| [a-z]{0,3} \\|",
        "\\|-{1,4}\\+-{1,4}\\|",
        "#\\+(TITLE|AUTHOR|OPTIONS): [a-z:]{0,10}",
        "#\\+(BEGIN|END)_(SRC|QUOTE)",
        ": [a-z ]{0,10}",
        "# [a-z]{0,10}",
        "-{5,8}",
        " {0,3}",
        "[ -~]{0,30}",
    ]
}

proptest! {
    #[test]
    fn classification_is_idempotent(line in line_strategy()) {
        let first = classify_line(&line, 1, TabHandling::PerCharacter);
        let second = classify_line(&line, 1, TabHandling::PerCharacter);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lexer_emits_one_token_per_line(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let source = lines.join("\n");
        let mut lexer = Lexer::new(LineStream::new(&source), TabHandling::PerCharacter);
        let mut count = 0;
        while let Some(token) = lexer.next_token() {
            count += 1;
            prop_assert_eq!(token.line_number, count);
        }
        prop_assert_eq!(count, source.split('\n').count());
    }

    #[test]
    fn header_depth_and_tags(depth in 1usize..6, title in "[A-Za-z]{1,8}", tags in prop::collection::vec("[a-z]{1,5}", 0..4)) {
        let mut line = format!("{} {}", "*".repeat(depth), title);
        if !tags.is_empty() {
            line.push_str(&format!(" :{}:", tags.join(":")));
        }
        let token = classify_line(&line, 1, TabHandling::PerCharacter);
        prop_assert!(token.line_type.is_header());
        let header = token.header().unwrap();
        prop_assert_eq!(header.depth, depth);
        prop_assert_eq!(&header.content, &title);
        prop_assert_eq!(&header.tags, &tags);
    }

    #[test]
    fn sibling_items_share_a_list(items in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let source = items.iter().map(|item| format!("- {}", item)).collect::<Vec<_>>().join("\n");
        let doc = parse(&source).unwrap();
        prop_assert_eq!(doc.nodes.len(), 1);
        prop_assert_eq!(doc.nodes[0].children.len(), items.len());
    }

    #[test]
    fn tab_expansion_reaches_next_stop(tabs in 0usize..4, spaces in 0usize..4, width in 1usize..9) {
        let line = format!("{}{}x", "\t".repeat(tabs), " ".repeat(spaces));
        let token = classify_line(&line, 1, TabHandling::Expand(width));
        prop_assert_eq!(token.indentation, tabs * width + spaces);
        prop_assert_eq!(token.line_type, LineType::Line);
    }

    #[test]
    fn inline_parsing_keeps_plain_text(text in "[a-zA-Z0-9 ,.]{1,40}") {
        let node = parse_inline(&text).unwrap();
        prop_assert_eq!(node.text_content(), text);
    }
}
