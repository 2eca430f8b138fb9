use chrono::{DateTime, Utc};
use colored::Colorize;
use senk::api::{CmdMessage, MessageLevel};
use senk::config::SenkConfig;
use senk::model::{Document, FocusDirective, NoteMeta};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const CARET: &str = "│";
const TIME_WIDTH: usize = 14;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Prints the outline, marking the caret on the focused line if there is one.
pub(crate) fn print_outline(
    document: &Document,
    config: &SenkConfig,
    focus: Option<FocusDirective>,
    numbers: bool,
) {
    let number_width = document.last_index().to_string().len();
    for (index, node) in document.iter().enumerate() {
        let mut line = String::new();
        if numbers {
            let number = format!("{:>width$} ", index, width = number_width);
            line.push_str(&number.dimmed().to_string());
        }
        line.push_str(&" ".repeat(node.indent * config.indent_width));
        line.push_str(&config.bullet.cyan().to_string());
        line.push(' ');

        match focus {
            Some(f) if f.index == index => {
                let (head, tail) = node.split_at_char(f.cursor.resolve(&node.text));
                line.push_str(&format!("{}{}{}", head.bold(), CARET.yellow(), tail.bold()));
            }
            _ => line.push_str(&node.text),
        }
        println!("{}", line);
    }
}

pub(crate) fn print_focus(focus: Option<FocusDirective>) {
    match focus {
        Some(f) => println!(
            "{}",
            format!("focus: line {}, cursor {}", f.index, f.cursor).dimmed()
        ),
        None => println!("{}", "not handled".dimmed()),
    }
}

pub(crate) fn print_notes(notes: &[NoteMeta]) {
    let id_width = notes.iter().map(|n| n.id.width()).max().unwrap_or(0);
    for note in notes {
        let padding = id_width - note.id.width();
        println!(
            "  {}{}  {}",
            note.id.yellow(),
            " ".repeat(padding),
            format_time_ago(note.updated_at).dimmed()
        );
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
