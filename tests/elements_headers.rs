//! Headers and TODO items
//!
//! Sample based tests use the curated files under docs/samples/elements/header; the rstest
//! cases cover classification edge cases that a sample would bury.

use orgtree::org::testing::assert_ast;
use orgtree::org::testing::samples::Samples;
use orgtree::org::{parse, parse_with_options, ParseOptions};
use rstest::rstest;

#[test]
fn test_header_01_plain() {
    // 01-plain.org: three headers of increasing depth
    let doc = Samples::header(1).parse();

    assert_ast(&doc)
        .item_count(3)
        .item(0, |item| {
            item.line(1)
                .assert_header()
                .depth(1)
                .no_todo()
                .tags(&[])
                .title("Introduction");
        })
        .item(1, |item| {
            item.assert_header().depth(2).title("Background");
        })
        .item(2, |item| {
            item.assert_header().depth(3).title("Details");
        });
}

#[test]
fn test_header_02_todo_priority_tags() {
    // 02-todo-priority-tags.org: TODO with priority and tags, DONE child, plain header
    let doc = Samples::header(2).parse();

    assert_ast(&doc)
        .item_count(3)
        .item(0, |item| {
            item.assert_header()
                .depth(1)
                .todo("TODO")
                .priority('A')
                .tags(&["work", "urgent"])
                .title("Write the report");
        })
        .item(1, |item| {
            item.assert_header()
                .depth(2)
                .todo("DONE")
                .tags(&[])
                .title("Collect data");
        })
        .item(2, |item| {
            item.assert_header().no_todo().title("Someday");
        });
}

#[rstest]
#[case("* Foo", 1, "Foo", &[])]
#[case("** Foo :a:b:", 2, "Foo", &["a", "b"])]
#[case("*** Foo bar :x:", 3, "Foo bar", &["x"])]
#[case("* Dup :a:a:", 1, "Dup", &["a", "a"])]
#[case("* Ratio 1:2", 1, "Ratio 1:2", &[])]
#[case("*", 1, "", &[])]
fn test_header_depth_title_and_tags(
    #[case] source: &str,
    #[case] depth: usize,
    #[case] title: &str,
    #[case] tags: &[&str],
) {
    let doc = parse(source).unwrap();
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_header().depth(depth).title(title).tags(tags);
    });
}

#[rstest]
#[case("*bold* text")]
#[case("*not a header")]
fn test_star_without_space_is_not_a_header(#[case] source: &str) {
    let doc = parse(source).unwrap();
    assert_ast(&doc).item(0, |item| {
        item.assert_paragraph();
    });
}

#[test]
fn test_unconfigured_keyword_stays_in_the_title() {
    let doc = parse("* WAITING [#b] Reply").unwrap();
    assert_ast(&doc).item(0, |item| {
        item.assert_header().no_todo().title("WAITING [#b] Reply");
    });

    let options = ParseOptions::default().with_todo_keywords(["WAITING"]);
    let doc = parse_with_options("* WAITING [#b] Reply", options).unwrap();
    assert_ast(&doc).item(0, |item| {
        item.assert_header()
            .todo("WAITING")
            .priority('B')
            .title("Reply");
    });
}

#[test]
fn test_header_title_is_inline_parsed() {
    let doc = parse("* A *bold* [[target][move]]").unwrap();
    assert_ast(&doc).item(0, |item| {
        item.child_count(1).child(0, |title| {
            title
                .node_type("inlineContainer")
                .child_types(&["text", "bold", "text", "link"])
                .child(3, |link| {
                    link.assert_link("target").text("move");
                });
        });
    });
}

#[test]
fn test_headers_do_not_own_following_content() {
    let doc = parse("* Section\nbody text\n** Sub\n- item").unwrap();
    assert_ast(&doc).item_types(&["header", "paragraph", "header", "list"]);
}
