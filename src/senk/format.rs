//! # Plain-text outline format
//!
//! Each node is stored as one line: `indent` space characters followed by the
//! text verbatim. Lines are joined with `\n` and no trailing newline is written.
//!
//! ```text
//! Groceries
//!  milk
//!  eggs
//!   free range
//! ```
//!
//! Parsing is total: any string yields a document. Only the ASCII space counts
//! as indentation; tabs and other whitespace stay part of the text. A text that
//! itself begins with spaces cannot be told apart from indentation, so such
//! lines come back with a deeper indent and the spaces stripped.

use crate::model::{Document, Node};

pub fn serialize(document: &Document) -> String {
    document
        .iter()
        .map(|node| format!("{}{}", " ".repeat(node.indent), node.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn deserialize(text: &str) -> Document {
    let nodes = text.split('\n').map(parse_line).collect();
    // from_nodes repairs the empty case, though split always yields one line
    Document::from_nodes(nodes)
}

fn parse_line(line: &str) -> Node {
    let content = line.trim_start_matches(' ');
    Node::new(content, line.len() - content.len())
}
