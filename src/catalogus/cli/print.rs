use catalogus::api::{CmdMessage, MessageLevel};
use catalogus::model::Record;
use catalogus::settings::Settings;
use colored::Colorize;
use console::Term;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 120;
const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 12;
const LOCATION_WIDTH: usize = 33;
const DATE_WIDTH: usize = 10;
const MIN_DESCRIPTION_WIDTH: usize = 10;
const LOCATION_PREVIEW_CHARS: usize = 30;
const PINNED_MARKER: &str = "✅";
const UNPINNED_MARKER: &str = "⬜";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let line_width = Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH);
    let fixed = ID_WIDTH + NAME_WIDTH + LABEL_WIDTH + LOCATION_WIDTH + DATE_WIDTH + 2 + 6;
    let description_width = line_width
        .saturating_sub(fixed)
        .max(MIN_DESCRIPTION_WIDTH);

    let header = format!(
        "{} {} {} {} {} {} {}",
        pad("id", ID_WIDTH),
        pad("name", NAME_WIDTH),
        pad("label", LABEL_WIDTH),
        pad("description", description_width),
        pad("location", LOCATION_WIDTH),
        pad("date", DATE_WIDTH),
        "top"
    );
    println!("{}", header.bold());

    for record in records {
        let marker = if record.pinned {
            PINNED_MARKER
        } else {
            UNPINNED_MARKER
        };
        println!(
            "{} {} {} {} {} {} {}",
            pad(&record.id.to_string(), ID_WIDTH).yellow(),
            pad(&one_line(&record.name), NAME_WIDTH),
            pad(&one_line(&record.label), LABEL_WIDTH).cyan(),
            pad(&one_line(&record.description), description_width),
            pad(&location_preview(&record.location), LOCATION_WIDTH).dimmed(),
            pad(&record.date, DATE_WIDTH),
            marker
        );
    }
}

pub(super) fn print_full_record(record: &Record) {
    let pinned = if record.pinned { " (top)" } else { "" };
    println!(
        "{} {}{}",
        record.id.to_string().yellow(),
        record.name.bold(),
        pinned.green()
    );
    println!("--------------------------------");
    print_field("Label", &record.label);
    print_field("Date", &record.date);
    print_field("Location", &record.location);
    print_field("Description", &record.description);
    for (key, value) in &record.extra {
        print_field(key, &value.to_string());
    }
}

pub(super) fn print_settings(settings: &Settings) {
    for key in Settings::keys() {
        if let Some(value) = settings.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn print_field(name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if value.contains('\n') {
        println!("{}:", name.dimmed());
        for line in value.lines() {
            println!("    {}", line);
        }
    } else {
        println!("{} {}", format!("{}:", name).dimmed(), value);
    }
}

/// The first thirty characters, with an ellipsis when cut.
fn location_preview(location: &str) -> String {
    let flat = one_line(location);
    if flat.chars().count() > LOCATION_PREVIEW_CHARS {
        let cut: String = flat.chars().take(LOCATION_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}

fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate or right-pad to exactly `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width);
    let fill = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
