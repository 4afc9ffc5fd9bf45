use chrono::{DateTime, Utc};
use colored::{Color, Colorize};
use shoplist::api::{CmdMessage, MessageLevel};
use shoplist::config::ShopConfig;
use shoplist::format::format_entry;
use shoplist::model::Theme;
use shoplist::selector::DisplayEntry;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Colours used for list output, following the stored theme.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    section: Color,
    active: Color,
    index: Color,
}

impl Palette {
    pub(super) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                section: Color::BrightCyan,
                active: Color::BrightGreen,
                index: Color::BrightBlack,
            },
            Theme::Light => Self {
                section: Color::Blue,
                active: Color::Green,
                index: Color::Black,
            },
        }
    }
}

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

/// The whole list: sections as headers, items with their shop checkbox.
pub(super) fn render_entries(entries: &[DisplayEntry], palette: Palette) -> String {
    if entries.is_empty() {
        return "Your list is empty. Add something with `shoplist add Milk`.\n".to_string();
    }

    let index_width = index_width(entries);
    let mut out = String::new();
    for (i, de) in entries.iter().enumerate() {
        let idx = format!("{:>width$}. ", de.position, width = index_width);

        if de.entry.is_divider() {
            if i > 0 {
                out.push('\n');
            }
            let title = if de.entry.name.is_empty() {
                "(unnamed)".to_string()
            } else {
                de.entry.name.clone()
            };
            out.push_str(&format!(
                "{}{}\n",
                idx.color(palette.index),
                format!("── {} ──", title).color(palette.section).bold()
            ));
            continue;
        }

        let indent = if de.section.is_some() { "  " } else { "" };
        let mark = if de.entry.active { CHECKED } else { UNCHECKED };

        let fixed = indent.width() + idx.width() + mark.width() + 1 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let text = truncate_to_width(&format_entry(&de.entry), available);
        let padding = available.saturating_sub(text.width());
        let shown = if de.entry.active {
            text.color(palette.active)
        } else {
            text.normal()
        };

        out.push_str(&format!(
            "{}{}{} {}{}{}\n",
            indent,
            idx.color(palette.index),
            mark,
            shown,
            " ".repeat(padding),
            format_time_ago(de.entry.last_added).dimmed()
        ));
    }
    out
}

/// This week's shop. With `grouped`, a header precedes each section's run.
pub(super) fn render_shop(entries: &[DisplayEntry], grouped: bool, palette: Palette) -> String {
    if entries.is_empty() {
        return "Nothing in this week's shop.\n".to_string();
    }

    let index_width = index_width(entries);
    let mut out = String::new();
    let mut current: Option<Option<&str>> = None;

    for de in entries {
        let section = de.section.as_deref();
        if grouped && current != Some(section) {
            if current.is_some() {
                out.push('\n');
            }
            if let Some(name) = section {
                out.push_str(&format!("{}\n", name.color(palette.section).bold()));
            }
            current = Some(section);
        }
        out.push_str(&format!(
            "{}{}\n",
            format!("{:>width$}. ", de.position, width = index_width).color(palette.index),
            format_entry(&de.entry)
        ));
    }
    out
}

pub(super) fn render_config(config: &ShopConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn index_width(entries: &[DisplayEntry]) -> usize {
    entries
        .iter()
        .map(|de| de.position.to_string().len())
        .max()
        .unwrap_or(1)
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
