//! Treeviz snapshots of whole documents
//!
//! Inline snapshots keep the expected tree next to the test. Update them with
//! `cargo insta review` after an intended change.

use orgtree::org::formats::treeviz::to_treeviz_str;
use orgtree::org::testing::samples::Samples;

#[test]
fn test_kitchen_sink_tree() {
    let doc = Samples::document(1).parse();

    insta::assert_snapshot!(to_treeviz_str(&doc), @r"
⧉ Document
├─ # title Kitchen sink
├─ # options toc:nil
├─ § * TODO [#B] :project:
│ └─ ◦ Plan
├─ ¶
│ └─ ➔
│   ├─ ◦ Some intro text with
│   ├─ 𝐁
│   │ └─ ◦ bold
│   ├─ ◦  and a
│   ├─ ⊕ file:notes.org
│   │ └─ ◦ note
│   └─ ◦ .
├─ ☰ unordered, 2 items
│ ├─ • [ ]
│ │ └─ ◦ first
│ └─ • [X]
│   ├─ ◦ second
│   └─ ▦ 2 rows
│     ├─ ≡ 2 cells
│     │ ├─ ▫ header
│     │ │ └─ ¶
│     │ │   └─ ◦ k
│     │ └─ ▫ header
│     │   └─ ¶
│     │     └─ ◦ v
│     └─ ≡ 2 cells
│       ├─ ▫
│       │ └─ ¶
│       │   └─ ◦ a
│       └─ ▫
│         └─ ¶
│           └─ ◦ 1
├─ § **
│ └─ ◦ Notes
├─ ▤ LOGBOOK
│ └─ ☰ unordered, 1 item
│   └─ •
│     └─ ◦ logged
├─ 𝒱
│ └─ ◦ preformatted line
├─ ―
└─ # example
  └─ ◦ raw *text*
");
}

#[test]
fn test_definition_list_tree() {
    let doc = Samples::list(3).parse();

    insta::assert_snapshot!(to_treeviz_str(&doc), @r"
⧉ Document
└─ ≔ 3 items
  ├─ • [X] Tea ::
  │ └─ ◦ a hot drink
  ├─ • [ ] Coffee ::
  │ └─ ◦ another hot drink
  └─ • Water ::
    └─ ◦ plain
");
}

#[test]
fn test_quote_block_tree() {
    let doc = Samples::block(2).parse();

    insta::assert_snapshot!(to_treeviz_str(&doc), @r"
⧉ Document
└─ # quote
  ├─ ¶
  │ └─ ◦ Everything should be made as simple as p...
  └─ ☰ unordered, 1 item
    └─ •
      └─ ◦ but not simpler
");
}

#[test]
fn test_kitchen_sink_metadata() {
    let doc = Samples::document(1).parse();
    assert_eq!(doc.title.as_deref(), Some("Kitchen sink"));
    assert!(doc.directive_values.is_empty());
}
