//! Locale negotiation and the handful of strings the server-rendered pages use.
//!
//! Locale resolution order for a request without a locale prefix:
//! the `Next-Locale` cookie, then the `Accept-Language` header, then the
//! configured default.

use tally_config::I18nConfig;
use tally_models::InvoiceStatus;

/// Cookie remembering the visitor's locale.
pub const LOCALE_COOKIE: &str = "Next-Locale";

/// Response header carrying the resolved locale.
pub const LOCALE_HEADER: &str = "x-next-locale";

/// Returns the supported locale that `path` starts with, if any.
///
/// `/sv/i/abc` → `Some("sv")`; `/svenska` → `None`.
pub fn locale_from_path<'a>(path: &str, config: &'a I18nConfig) -> Option<&'a str> {
    let first = path.trim_start_matches('/').split('/').next()?;
    config
        .locales
        .iter()
        .find(|locale| locale.as_str() == first)
        .map(String::as_str)
}

/// Picks the best supported locale from an `Accept-Language` header.
///
/// Ranges are ordered by quality; an exact match wins, otherwise the primary
/// subtag (`sv-SE` → `sv`) is tried. `*` and `q=0` ranges are ignored.
pub fn negotiate<'a>(accept_language: &str, config: &'a I18nConfig) -> Option<&'a str> {
    let mut ranges: Vec<(String, f32)> = accept_language
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim().to_lowercase();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);

            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // Stable sort keeps header order for equal weights.
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranges.iter().find_map(|(tag, _)| {
        let primary = tag.split('-').next().unwrap_or(tag);
        config
            .locales
            .iter()
            .find(|l| l.to_lowercase() == *tag)
            .or_else(|| config.locales.iter().find(|l| l.to_lowercase() == primary))
            .map(String::as_str)
    })
}

/// Strings used by the server-rendered pages.
#[derive(Debug)]
pub struct Messages {
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub landing_title: &'static str,
    pub landing_body: &'static str,
    pub closed_title: &'static str,
    pub closed_body: &'static str,
    pub copy_link: &'static str,
    pub comments: &'static str,
    pub subtotal: &'static str,
    pub powered_by: &'static str,
    pub status_draft: &'static str,
    pub status_unpaid: &'static str,
    pub status_overdue: &'static str,
    pub status_paid: &'static str,
    pub status_canceled: &'static str,
}

impl Messages {
    pub fn status(&self, status: InvoiceStatus) -> &'static str {
        match status {
            InvoiceStatus::Draft => self.status_draft,
            InvoiceStatus::Unpaid => self.status_unpaid,
            InvoiceStatus::Overdue => self.status_overdue,
            InvoiceStatus::Paid => self.status_paid,
            InvoiceStatus::Canceled => self.status_canceled,
        }
    }
}

const EN: Messages = Messages {
    not_found_title: "Not Found",
    not_found_body: "This page could not be found.",
    landing_title: "Tally",
    landing_body: "Invoicing, time tracking and files for your business.",
    closed_title: "We're in private beta",
    closed_body: "Your account is not part of the beta yet. We'll let you know as soon as there's room.",
    copy_link: "Copy link",
    comments: "Comments",
    subtotal: "Subtotal",
    powered_by: "Powered by",
    status_draft: "Draft",
    status_unpaid: "Unpaid",
    status_overdue: "Overdue",
    status_paid: "Paid",
    status_canceled: "Canceled",
};

const SV: Messages = Messages {
    not_found_title: "Hittades inte",
    not_found_body: "Sidan kunde inte hittas.",
    landing_title: "Tally",
    landing_body: "Fakturering, tidrapportering och filer för ditt företag.",
    closed_title: "Vi är i privat beta",
    closed_body: "Ditt konto är inte med i betan än. Vi hör av oss så snart det finns plats.",
    copy_link: "Kopiera länk",
    comments: "Kommentarer",
    subtotal: "Delsumma",
    powered_by: "Drivs av",
    status_draft: "Utkast",
    status_unpaid: "Obetald",
    status_overdue: "Förfallen",
    status_paid: "Betald",
    status_canceled: "Makulerad",
};

/// Page strings for `locale`, falling back to English.
pub fn messages(locale: &str) -> &'static Messages {
    match locale {
        "sv" => &SV,
        _ => &EN,
    }
}
