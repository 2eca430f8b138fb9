//! Nested-list rendering of a flat outline.
//!
//! [`walk`] turns indent deltas into open/close events the way a nested `<ul>`
//! tree is built: going from level `a` to a deeper level `b` opens `b - a`
//! lists at once, going back up closes `a - b`. Jumps of several levels are
//! not validated, they simply produce empty intermediate lists.

use crate::model::{Document, Node};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OutlineEvent<'a> {
    Open,
    Close,
    Item { index: usize, node: &'a Node },
}

pub fn walk(document: &Document) -> Vec<OutlineEvent<'_>> {
    let mut events = Vec::with_capacity(document.len() * 2);
    // the root list is opened by the first node
    let mut level: isize = -1;

    for (index, node) in document.iter().enumerate() {
        let indent = node.indent as isize;
        for _ in level..indent {
            events.push(OutlineEvent::Open);
        }
        for _ in indent..level {
            events.push(OutlineEvent::Close);
        }
        level = indent;
        events.push(OutlineEvent::Item { index, node });
    }

    for _ in -1..level {
        events.push(OutlineEvent::Close);
    }
    events
}

pub fn to_html(document: &Document) -> String {
    let mut html = String::new();
    for event in walk(document) {
        match event {
            OutlineEvent::Open => html.push_str("<ul>"),
            OutlineEvent::Close => html.push_str("</ul>"),
            OutlineEvent::Item { index, node } => {
                html.push_str(&format!(
                    "<li data-index=\"{}\">{}</li>",
                    index,
                    escape_html(&node.text)
                ));
            }
        }
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
