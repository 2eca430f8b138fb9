//! Core data types: the outline [`Document`] and the note records that carry it.
//!
//! A document is a flat sequence of [`Node`]s. Tree structure is implied by the
//! indent deltas between consecutive nodes; nothing here checks that a child sits
//! exactly one level below its parent, so jumps of several levels are legal.

use crate::error::{PreconditionViolation, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of the outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub text: String,
    pub indent: usize,
}

impl Node {
    pub fn new(text: impl Into<String>, indent: usize) -> Self {
        Self {
            text: text.into(),
            indent,
        }
    }

    /// Length of the text in chars, the unit every cursor offset is measured in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Splits the text at a char offset, clamped to the end of the text.
    pub fn split_at_char(&self, offset: usize) -> (&str, &str) {
        self.text.split_at(byte_index(&self.text, offset))
    }
}

/// Byte position of the `offset`-th char of `text`, clamped to the end of the text.
pub(crate) fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// The ordered sequence of nodes making up one note.
///
/// Positional accessors bounds-check and report a [`PreconditionViolation`]
/// instead of panicking. Callers that remove nodes are expected to call
/// [`Document::ensure_non_empty`] before handing the document back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document holding a single empty line.
    pub fn new() -> Self {
        Self::from_nodes(Vec::new())
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut doc = Self { nodes };
        doc.ensure_non_empty();
        doc
    }

    /// Appends an empty root-level node if the sequence is empty.
    /// Returns true when a node had to be synthesized.
    pub fn ensure_non_empty(&mut self) -> bool {
        if self.nodes.is_empty() {
            self.nodes.push(Node::default());
            return true;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.nodes.len() {
            return Err(PreconditionViolation::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            }
            .into());
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Node> {
        self.check_index(index)?;
        Ok(&self.nodes[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Node> {
        self.check_index(index)?;
        Ok(&mut self.nodes[index])
    }

    pub fn set(&mut self, index: usize, node: Node) -> Result<()> {
        *self.get_mut(index)? = node;
        Ok(())
    }

    /// Inserts before `index`; `index == len()` appends.
    pub fn insert_at(&mut self, index: usize, node: Node) -> Result<()> {
        if index > self.nodes.len() {
            return Err(PreconditionViolation::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            }
            .into());
        }
        self.nodes.insert(index, node);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Node> {
        self.check_index(index)?;
        Ok(self.nodes.remove(index))
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.nodes.swap(i, j);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Where the caret should land inside the focused line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    At(usize),
    End,
}

impl Cursor {
    /// Negative offsets mean "end of text".
    pub fn from_offset(offset: i64) -> Self {
        if offset < 0 {
            Cursor::End
        } else {
            Cursor::At(offset as usize)
        }
    }

    /// Concrete char offset within `text`.
    pub fn resolve(&self, text: &str) -> usize {
        let len = text.chars().count();
        match self {
            Cursor::At(offset) => (*offset).min(len),
            Cursor::End => len,
        }
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cursor::At(offset) => write!(f, "{}", offset),
            Cursor::End => write!(f, "end"),
        }
    }
}

/// Which line should receive input focus after a command, and where the caret goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusDirective {
    pub index: usize,
    pub cursor: Cursor,
}

impl FocusDirective {
    pub fn new(index: usize, cursor: Cursor) -> Self {
        Self { index, cursor }
    }

    pub fn at(index: usize, offset: usize) -> Self {
        Self::new(index, Cursor::At(offset))
    }

    pub fn end_of(index: usize) -> Self {
        Self::new(index, Cursor::End)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteMeta {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteMeta {
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A stored note: metadata plus the serialized outline text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub meta: NoteMeta,
    pub content: String,
}

impl Note {
    pub fn new(id: String, content: String) -> Self {
        Self {
            meta: NoteMeta::new(id),
            content,
        }
    }
}

/// Generates an id for notes created without one.
pub fn fresh_note_id() -> String {
    Uuid::new_v4().to_string()
}

/// Note ids end up as file names, so keep them to a single path component.
pub fn is_valid_note_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(|c: char| c == '/' || c == '\\')
        && !id.chars().any(char::is_control)
}
