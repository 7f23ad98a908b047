//! # Record Codec
//!
//! Converts between a [`Contact`] and the single line of text that represents it
//! in the backing file:
//!
//! ```text
//! Id: 1 | Name: Alice | Phone No: 555-0100 | E-mail: a@x.com | Type: Personal | Time Created: 2026-10-16T09:30:00Z
//! ```
//!
//! ## Format Contract
//!
//! - Six fields, always in this order, joined by ` | `.
//! - Every value is preceded by its exact label and a single space.
//! - An absent e-mail is written as an empty value.
//! - The contact type is written as its canonical label (`Personal`, `Work`, ...).
//! - Timestamps are written as RFC 3339 with second precision.
//!
//! The format is meant to be read (and repaired) by a human, which makes it
//! prefix-fragile: renaming a label breaks every existing file. Nothing outside
//! this module knows the labels, so a future format change only touches here.
//!
//! ## Decoding Leniency
//!
//! Decoding accepts more than encoding produces:
//! - segments past the sixth are ignored
//! - whitespace around values is trimmed
//! - the literal timestamp `now` (any case) means the current time
//! - timestamps in the older `10/16/2026 2:30:00 PM` shape are read as UTC

use crate::error::{ContactError, Result};
use crate::model::{Contact, ContactType};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};

pub const DELIMITER: char = '|';
pub const FIELD_COUNT: usize = 6;

pub const ID_LABEL: &str = "Id:";
pub const NAME_LABEL: &str = "Name:";
pub const PHONE_LABEL: &str = "Phone No:";
pub const EMAIL_LABEL: &str = "E-mail:";
pub const TYPE_LABEL: &str = "Type:";
pub const CREATED_LABEL: &str = "Time Created:";

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

pub fn encode(contact: &Contact) -> String {
    format!(
        "{} {} | {} {} | {} {} | {} {} | {} {} | {} {}",
        ID_LABEL,
        contact.id,
        NAME_LABEL,
        contact.name,
        PHONE_LABEL,
        contact.phone_number,
        EMAIL_LABEL,
        contact.email_or_empty(),
        TYPE_LABEL,
        contact.contact_type,
        CREATED_LABEL,
        encode_timestamp(&contact.created_at),
    )
}

pub fn decode(line: &str) -> Result<Contact> {
    let segments = split_segments(line)?;

    let id_text = field_value(segments[0], ID_LABEL)?;
    let id = id_text
        .parse::<u32>()
        .map_err(|_| ContactError::MalformedRecord(format!("invalid id '{}'", id_text)))?;

    let name = field_value(segments[1], NAME_LABEL)?.to_string();
    let phone_number = field_value(segments[2], PHONE_LABEL)?.to_string();
    let email = match field_value(segments[3], EMAIL_LABEL)? {
        "" => None,
        e => Some(e.to_string()),
    };
    let contact_type: ContactType = field_value(segments[4], TYPE_LABEL)?.parse()?;
    let created_at = decode_timestamp(field_value(segments[5], CREATED_LABEL)?)?;

    Ok(Contact {
        id,
        name,
        phone_number,
        email,
        contact_type,
        created_at,
    })
}

/// Whether `line` is the record for `phone`.
///
/// Compares only the phone segment (label included) instead of decoding the
/// whole line, so it also finds records whose other fields are damaged.
pub fn line_has_phone(line: &str, phone: &str) -> bool {
    line.split(DELIMITER)
        .nth(2)
        .and_then(|segment| segment.trim().strip_prefix(PHONE_LABEL))
        .is_some_and(|value| value.trim() == phone)
}

/// Replaces the name and e-mail segments of an existing record line.
///
/// Every other segment is carried over byte for byte, so the id, phone, type
/// and creation time cannot drift through an update.
pub fn rewrite_name_email(line: &str, name: &str, email: Option<&str>) -> Result<String> {
    let mut segments: Vec<String> = split_segments(line)?
        .into_iter()
        .map(str::to_string)
        .collect();
    segments[1] = format!(" {} {} ", NAME_LABEL, name);
    segments[3] = format!(" {} {} ", EMAIL_LABEL, email.unwrap_or(""));
    Ok(segments.join("|"))
}

pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn decode_timestamp(text: &str) -> Result<DateTime<Utc>> {
    if text.eq_ignore_ascii_case("now") {
        return Ok(Utc::now().trunc_subsecs(0));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| ContactError::UnparsableTimestamp(text.to_string()))
}

fn split_segments(line: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = line.split(DELIMITER).collect();
    if segments.len() < FIELD_COUNT {
        return Err(ContactError::MalformedRecord(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            segments.len()
        )));
    }
    Ok(segments)
}

fn field_value<'a>(segment: &'a str, label: &str) -> Result<&'a str> {
    segment
        .trim_start()
        .strip_prefix(label)
        .map(str::trim)
        .ok_or_else(|| ContactError::MalformedRecord(format!("missing label '{}'", label)))
}
