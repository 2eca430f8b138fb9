//! # Senk Architecture
//!
//! Senk is an **outline note editor core**. A note is a list of lines, each
//! with an indent level, shown as a nested bulleted list and edited one line
//! at a time through keyboard commands. The library owns the document model
//! and the editing rules; everything that draws widgets, captures keys or
//! talks to storage is a collaborator around it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads a note, runs one command, persists the snapshot    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Editor Core (session.rs, commands/, keymap.rs, format.rs)  │
//! │  - Pure, synchronous, single-owner document mutation        │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract NoteStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The editing loop
//!
//! A host (terminal UI, web front-end, the bundled CLI) reports each key it
//! wants handled as a command plus context: focused line, selection bounds,
//! modifiers. The session mutates its document and answers with
//! - whether the command applied (if not, the host's default text editing runs),
//! - a focus directive: which line to focus and where to put the caret,
//! - the serialized document whenever it changed, for the host to store.
//!
//! There is no undo history and no concurrent editing: one session, one input
//! stream, each command runs to completion before the next.
//!
//! ## Module Overview
//!
//! - [`model`]: `Node`, `Document`, focus directives, note records
//! - [`format`]: plain-text serialization (indent as leading spaces)
//! - [`commands`]: the command engine
//! - [`keymap`]: key events to commands
//! - [`session`]: a document plus its editing loop
//! - [`render`]: nested-list rendering
//! - [`store`]: storage abstraction and implementations
//! - [`api`]: the API facade, entry point for all operations
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod keymap;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
