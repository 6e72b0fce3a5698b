//! Helpers for the server-rendered pages.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use tally_models::PageMetadata;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes multi-line free text, keeping its line breaks.
pub fn escape_multiline(input: &str) -> String {
    escape(input).replace('\n', "<br>")
}

/// Formats `date` with a strftime `pattern`, falling back to ISO dates when
/// the stored pattern is invalid.
pub fn format_date(date: Option<DateTime<Utc>>, pattern: &str) -> String {
    let Some(date) = date else {
        return String::new();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        out = date.format("%Y-%m-%d").to_string();
    }
    out
}

pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, escape(currency))
}

/// `<head>` tags for a page's metadata.
pub fn metadata_tags(metadata: &PageMetadata) -> String {
    let mut head = format!("<title>{}</title>", escape(&metadata.title));

    if let Some(description) = &metadata.description {
        head.push_str(&format!(
            "\n    <meta name=\"description\" content=\"{}\">",
            escape(description)
        ));
    }

    head.push_str(&format!(
        "\n    <meta name=\"robots\" content=\"{}\">",
        metadata.robots.directive()
    ));

    head
}

/// Wraps a page body in a full HTML document.
pub fn document(lang: &str, head: &str, body_class: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {head}
    <link rel="stylesheet" href="/static/invoice.css">
</head>
<body class="{body_class}">
{body}
</body>
</html>"#,
        lang = escape(lang),
        head = head,
        body_class = body_class,
        body = body,
    )
}
