//! Testing utilities for parser tests
//!
//!     Org is forgiving: almost any text parses into something. A test that feeds the parser a
//!     hand typed string which is subtly off (a missing space after a bullet, a tab where a
//!     space was meant) will still pass, only it exercises a different element than the one
//!     its name promises. Tests therefore follow two rules.
//!
//! Rule 1: Prefer the curated samples
//!
//!     `docs/samples/` holds small org files, each a known good example of one element kind,
//!     plus a few whole documents. [samples::Samples] loads and parses them:
//!
//!     ```rust,ignore
//!     use orgtree::org::testing::samples::Samples;
//!
//!     let doc = Samples::element("list-nested").parse().unwrap();
//!     let source = Samples::document("kitchen-sink").source();
//!     ```
//!
//!     Short inline strings are fine for edge cases a sample would obscure (a lone `:END:`,
//!     an empty table cell), as long as the test name says what the string is.
//!
//! Rule 2: Assert on the tree, not on counts
//!
//!     A node count says little about whether the tree is right. [assert_ast] walks the tree
//!     with a fluent API, checking kinds and attributes at every level. Panics carry the path
//!     of the failing node, e.g. `items[1]:children[0]`.
//!
//!     ```rust,ignore
//!     use orgtree::org::testing::assert_ast;
//!
//!     assert_ast(&doc)
//!         .item_count(2)
//!         .item(0, |item| {
//!             item.assert_header().depth(1).todo("TODO").title("Write tests");
//!         })
//!         .item(1, |item| {
//!             item.assert_list()
//!                 .ordered(false)
//!                 .item(0, |element| {
//!                     element.text("first");
//!                 });
//!         });
//!     ```
//!
//!     For whole documents a [treeviz](crate::org::formats::treeviz) snapshot is usually the
//!     better fit.

mod ast_assertions;
mod matchers;
pub mod samples;

pub use ast_assertions::{
    assert_ast, assert_node, DirectiveAssertion, DocumentAssertion, HeaderAssertion,
    ListAssertion, ListElementAssertion, NodeAssertion, TableAssertion,
};
pub use matchers::TextMatch;
