//! # Rendering Module
//!
//! Turns API results into terminal text: the contact table, the single-contact
//! detail block and leveled messages. Layout (column widths, truncation) is
//! Unicode-aware; colors are only applied to messages so tables stay
//! copy-pasteable.

use chrono::{DateTime, Utc};
use colored::Colorize;
use contacts::api::{CmdMessage, MessageLevel};
use contacts::model::Contact;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a single cell may get before it is truncated.
pub const MAX_CELL_WIDTH: usize = 40;

const HEADERS: [&str; 6] = [
    "Id",
    "Name",
    "Phone Number",
    "Email",
    "Contact Type",
    "Date Created",
];

/// Renders contacts as a bordered table.
pub fn render_contact_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let rows: Vec<[String; 6]> = contacts.iter().map(table_row).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut output = String::new();
    output.push_str(&separator);
    output.push_str(&render_row(&HEADERS.map(String::from), &widths));
    output.push_str(&separator);
    for row in &rows {
        output.push_str(&render_row(row, &widths));
    }
    output.push_str(&separator);
    output
}

/// Renders the short detail block for one contact.
pub fn render_contact_details(contact: &Contact) -> String {
    format!(
        "Name: {}\nPhone Number: {}\nEmail: {}\n",
        contact.name,
        contact.phone_number,
        contact.email_or_empty()
    )
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn table_row(contact: &Contact) -> [String; 6] {
    [
        contact.id.to_string(),
        truncate_to_width(&contact.name, MAX_CELL_WIDTH),
        truncate_to_width(&contact.phone_number, MAX_CELL_WIDTH),
        truncate_to_width(contact.email_or_empty(), MAX_CELL_WIDTH),
        contact.contact_type.to_string(),
        format_time_ago(contact.created_at),
    ]
}

fn render_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(widths.iter()) {
        let padding = w.saturating_sub(cell.width());
        line.push_str(&format!(" {}{} |", cell, " ".repeat(padding)));
    }
    line.push('\n');
    line
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use contacts::model::ContactType;

    fn contact(id: u32, name: &str, email: Option<&str>) -> Contact {
        let mut c = Contact::new(
            id,
            name.to_string(),
            format!("555-{:04}", id),
            email.map(String::from),
            ContactType::Work,
        );
        c.created_at = Utc::now() - Duration::hours(3);
        c
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_contact_table(&[]).trim(), "No contacts found.");
    }

    #[test]
    fn test_table_has_header_and_one_row_per_contact() {
        let output = render_contact_table(&[contact(1, "Alice", None), contact(2, "Bob", Some("b@x.com"))]);
        let lines: Vec<&str> = output.lines().collect();

        // separator, header, separator, 2 rows, separator
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Phone Number"));
        assert!(lines[3].contains("Alice"));
        assert!(lines[4].contains("b@x.com"));
        assert!(lines[4].contains("Work"));
        assert!(lines[4].contains("3 hours ago"));
    }

    #[test]
    fn test_table_rows_are_aligned() {
        let output = render_contact_table(&[contact(1, "Al", None), contact(22, "Bartholomew", None)]);
        let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_long_cells_are_truncated() {
        let long = "x".repeat(MAX_CELL_WIDTH + 10);
        let output = render_contact_table(&[contact(1, &long, None)]);
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn test_details_block() {
        let output = render_contact_details(&contact(1, "Alice", Some("a@x.com")));
        assert_eq!(
            output,
            "Name: Alice\nPhone Number: 555-0001\nEmail: a@x.com\n"
        );
    }

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
