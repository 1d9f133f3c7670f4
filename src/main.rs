//! Command-line walkthrough of the viewer overlay.
//!
//! Replays a gesture script against a sample annotated document and prints
//! the navigation state after each step:
//!
//! ```text
//! treescope click:node_2 hover:node_1 leave next prev reselect link
//! ```

use doc_model::NodeId;
use doc_model::json::document_from_json;
use overlay::Overlay;
use std::env;
use url::Url;

const SAMPLE_DUMP: &str = r#"[
  {
    "id": "root",
    "kind": "Module",
    "line": 1,
    "char": 1,
    "children": [
      { "id": "node_1", "kind": "Use", "line": 2, "char": 1 },
      {
        "id": "node_2",
        "kind": "Class",
        "line": 4,
        "char": 1,
        "symbols": [
          { "name": "greet", "describes": "method (String) -> String" },
          { "name": "count", "describes": "attribute Integer" }
        ],
        "children": [
          { "id": "node_3", "kind": "Method", "line": 5, "char": 5, "refNodeId": "node_2" },
          { "id": "node_4", "kind": "Call", "line": 6, "char": 9, "refNodeId": "node_3" }
        ]
      }
    ]
  }
]"#;

const DEFAULT_SCRIPT: &[&str] = &["click:node_3", "hover:node_2", "leave", "next", "prev", "link"];

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("treescope: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let doc = document_from_json(SAMPLE_DUMP)?;
    let base = Url::parse("file:///out/ast.html")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let script: Vec<&str> = if args.is_empty() {
        DEFAULT_SCRIPT.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut overlay = Overlay::new(doc);
    for gesture in script {
        println!("> {gesture}");
        apply(&mut overlay, &base, gesture);
        print_state(&overlay);
        println!();
    }
    Ok(())
}

fn apply(overlay: &mut Overlay, base: &Url, gesture: &str) {
    match gesture.split_once(':') {
        Some(("click", id)) => overlay.click_node(&NodeId::from(id)),
        Some(("ref", id)) => overlay.click_reference(&NodeId::from(id)),
        Some(("goto", raw)) => overlay.fragment_changed(raw),
        Some(("hover", id)) => overlay.hover_reference_enter(&NodeId::from(id)),
        None => match gesture {
            "leave" => overlay.hover_reference_leave(),
            "next" => {
                overlay.select_next();
            }
            "prev" => {
                overlay.select_previous();
            }
            "reselect" => {
                overlay.reselect();
            }
            "reset" => overlay.clear_hover_highlight(),
            "close-breadcrumb" => overlay.close_breadcrumb(),
            "close-symbols" => overlay.close_symbol_table(),
            "link" => println!("  share: {}", overlay.share_link(base)),
            _ => log::warn!("unknown gesture {gesture:?}, skipping"),
        },
        Some(_) => log::warn!("unknown gesture {gesture:?}, skipping"),
    }
}

fn print_state(overlay: &Overlay) {
    println!("  fragment: {}", overlay.fragment().as_deref().unwrap_or("(none)"));

    if overlay.breadcrumb().is_visible() {
        for row in overlay.breadcrumb().rows() {
            println!("  breadcrumb: {} {} L{}:{}", row.id, row.kind, row.line, row.column);
        }
    } else {
        println!("  breadcrumb: (closed)");
    }

    match overlay.visible_symbols() {
        Some((id, rows)) => {
            for row in rows {
                println!("  symbols[{id}]: {} = {}", row.name, row.describes);
            }
        }
        None => println!("  symbols: (none)"),
    }

    let marks = overlay.highlights();
    println!(
        "  highlight: hover={} declaration={}",
        marks.hover().map(NodeId::as_str).unwrap_or("-"),
        marks.declaration().map(NodeId::as_str).unwrap_or("-"),
    );
}
