//! Fixture documents shared by the viewer crates' test suites.

use crate::{Annotation, Document, SymbolRow};

/// A small module with a class declaration and two members, one of which
/// references the class. Shape:
///
/// ```text
/// root         Module  L1:1
/// └─ node_1    Class   L3:5   (symbol table: self, count)
///    ├─ node_2 Method  L4:9   referenced -> node_1
///    └─ node_3 Call    L5:13  referenced -> node_2, error target e1
/// ```
pub fn class_with_members() -> Document {
    let mut b = Document::builder();
    b.open("root", Annotation::new("Module", 1, 1)).unwrap();
    b.open(
        "node_1",
        Annotation::new("Class", 3, 5).with_symbols(vec![
            SymbolRow::new("self", "Greeter"),
            SymbolRow::new("count", "Integer"),
        ]),
    )
    .unwrap();
    b.leaf("node_2", Annotation::new("Method", 4, 9).with_reference("node_1"))
        .unwrap();
    b.leaf(
        "node_3",
        Annotation::new("Call", 5, 13)
            .with_reference("node_2")
            .with_error_target("e1"),
    )
    .unwrap();
    b.close().unwrap();
    b.close().unwrap();
    b.finish().unwrap()
}

/// A node whose reference points outside the document.
pub fn dangling_reference() -> Document {
    let mut b = Document::builder();
    b.open("root", Annotation::new("Module", 1, 1)).unwrap();
    b.leaf("node_1", Annotation::new("Use", 2, 1).with_reference("other_doc_node"))
        .unwrap();
    b.close().unwrap();
    b.finish().unwrap()
}

/// The JSON annotation dump equivalent of [`class_with_members`].
pub const CLASS_WITH_MEMBERS_JSON: &str = r#"[
  {
    "id": "root",
    "kind": "Module",
    "line": 1,
    "char": 1,
    "children": [
      {
        "id": "node_1",
        "kind": "Class",
        "line": 3,
        "char": 5,
        "symbols": [
          { "name": "self", "describes": "Greeter" },
          { "name": "count", "describes": "Integer" }
        ],
        "children": [
          { "id": "node_2", "kind": "Method", "line": 4, "char": 9, "refNodeId": "node_1" },
          { "id": "node_3", "kind": "Call", "line": 5, "char": 13, "refNodeId": "node_2", "errorTarget": "e1" }
        ]
      }
    ]
  }
]"#;
