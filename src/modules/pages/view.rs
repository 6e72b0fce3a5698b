use tally_models::{PageMetadata, Robots};

use crate::i18n::messages;
use crate::utils::html::{document, escape, metadata_tags};

fn simple_page(locale: &str, class: &str, title: &str, body: &str) -> String {
    let metadata = PageMetadata {
        title: title.to_string(),
        description: None,
        robots: Robots::NONE,
    };

    let main = format!(
        r#"<main class="{class}">
  <h1>{title}</h1>
  <p>{body}</p>
</main>"#,
        class = class,
        title = escape(title),
        body = escape(body),
    );

    document(locale, &metadata_tags(&metadata), class, &main)
}

pub fn render_landing(locale: &str) -> String {
    let msg = messages(locale);
    simple_page(locale, "landing", msg.landing_title, msg.landing_body)
}

pub fn render_closed(locale: &str) -> String {
    let msg = messages(locale);
    simple_page(locale, "closed", msg.closed_title, msg.closed_body)
}

pub fn render_not_found(locale: &str) -> String {
    let msg = messages(locale);
    simple_page(locale, "not-found", msg.not_found_title, msg.not_found_body)
}
