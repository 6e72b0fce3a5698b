//! HTML for the public invoice page.
//!
//! The page is composed of four parts: the customer header, the invoice
//! template laid out at the paper size's pixel dimensions, the toolbar and
//! the comments panel. A small "Powered by" link sits in the corner.

use tally_models::{Invoice, PageMetadata};

use crate::i18n::{Messages, messages};
use crate::utils::html::{
    document, escape, escape_multiline, format_amount, format_date, metadata_tags,
};

/// Request-independent values the page needs besides the invoice.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: &'a str,
    pub public_url: &'a str,
}

pub fn render_invoice_page(invoice: &Invoice, metadata: &PageMetadata, ctx: PageContext<'_>) -> String {
    let msg = messages(ctx.locale);
    let dims = invoice.dimensions();

    let body = format!(
        r#"<div class="invoice-page dotted-bg">
  <div class="invoice-column" style="max-width: {width}px">
{header}
    <div class="invoice-sheet">
{template}
    </div>
  </div>
{toolbar}
{comments}
{powered_by}
</div>"#,
        width = dims.width,
        header = render_header(invoice, msg),
        template = render_template(invoice, msg),
        toolbar = render_toolbar(invoice, msg),
        comments = render_comments(msg),
        powered_by = render_powered_by(msg, ctx.public_url),
    );

    document(ctx.locale, &metadata_tags(metadata), "invoice", &body)
}

pub fn render_not_found(metadata: &PageMetadata, locale: &str) -> String {
    let msg = messages(locale);

    let body = format!(
        r#"<main class="not-found">
  <h1>404</h1>
  <h2>{title}</h2>
  <p>{body}</p>
</main>"#,
        title = escape(msg.not_found_title),
        body = escape(msg.not_found_body),
    );

    document(locale, &metadata_tags(metadata), "not-found", &body)
}

fn render_header(invoice: &Invoice, msg: &Messages) -> String {
    let name = invoice
        .display_customer_name()
        .map(escape)
        .unwrap_or_default();

    let website = invoice
        .customer_website()
        .map(|site| {
            let href = if site.starts_with("http://") || site.starts_with("https://") {
                site.to_string()
            } else {
                format!("https://{site}")
            };
            format!(
                r#"<a class="customer-website" href="{}" target="_blank" rel="noreferrer">{}</a>"#,
                escape(&href),
                escape(site)
            )
        })
        .unwrap_or_default();

    format!(
        r#"    <header class="customer-header">
      <div class="customer">
        <span class="customer-name">{name}</span>
        {website}
      </div>
      <span class="status status-{status}">{status_label}</span>
    </header>"#,
        status = invoice.status.as_str(),
        status_label = escape(msg.status(invoice.status)),
    )
}

fn render_template(invoice: &Invoice, msg: &Messages) -> String {
    let template = &invoice.template;
    let dims = invoice.dimensions();
    let currency = &invoice.currency;

    let rows: String = invoice
        .line_items
        .iter()
        .map(|item| {
            format!(
                "\n          <tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                escape(&item.name),
                item.quantity,
                format_amount(item.price, currency),
                format_amount(item.total(), currency),
            )
        })
        .collect();

    let mut totals = vec![(msg.subtotal, invoice.subtotal())];
    if template.include_discount
        && let Some(discount) = invoice.discount
    {
        totals.push((template.discount_label.as_str(), -discount));
    }
    if template.include_vat
        && let Some(vat) = invoice.vat
    {
        totals.push((template.vat_label.as_str(), vat));
    }
    if template.include_tax
        && let Some(tax) = invoice.tax
    {
        totals.push((template.tax_label.as_str(), tax));
    }

    let totals: String = totals
        .into_iter()
        .map(|(label, value)| {
            format!(
                "\n          <div class=\"summary-row\"><span>{}</span><span>{}</span></div>",
                escape(label),
                format_amount(value, currency)
            )
        })
        .collect();

    format!(
        r#"      <article class="invoice-template size-{size}" style="width: {width}px; height: {height}px">
        <h1 class="invoice-title">{title}</h1>
        <dl class="invoice-meta">
          <dt>{no_label}</dt><dd>{number}</dd>
          <dt>{issue_label}</dt><dd>{issue_date}</dd>
          <dt>{due_label}</dt><dd>{due_date}</dd>
        </dl>
        <section class="parties">
          <div><h3>{from_label}</h3><p>{from}</p></div>
          <div><h3>{customer_label}</h3><p>{customer}</p></div>
        </section>
        <table class="line-items">
          <thead><tr><th>{description_label}</th><th class="num">{quantity_label}</th><th class="num">{price_label}</th><th class="num">{total_label}</th></tr></thead>
          <tbody>{rows}
          </tbody>
        </table>
        <section class="summary">{totals}
          <div class="summary-row summary-total"><span>{total_label}</span><span>{amount}</span></div>
        </section>
        <footer class="invoice-footer">
          <div><h3>{payment_label}</h3><p>{payment}</p></div>
          <div><h3>{note_label}</h3><p>{note}</p></div>
        </footer>
      </article>"#,
        size = template.size.as_str(),
        width = dims.width,
        height = dims.height,
        title = escape(&template.title),
        no_label = escape(&template.invoice_no_label),
        number = escape(&invoice.invoice_number),
        issue_label = escape(&template.issue_date_label),
        issue_date = escape(&format_date(invoice.issue_date, &template.date_format)),
        due_label = escape(&template.due_date_label),
        due_date = escape(&format_date(invoice.due_date, &template.date_format)),
        from_label = escape(&template.from_label),
        from = invoice.from_details.as_deref().map(escape_multiline).unwrap_or_default(),
        customer_label = escape(&template.customer_label),
        customer = invoice
            .customer_details
            .as_deref()
            .map(escape_multiline)
            .unwrap_or_default(),
        description_label = escape(&template.description_label),
        quantity_label = escape(&template.quantity_label),
        price_label = escape(&template.price_label),
        total_label = escape(&template.total_label),
        rows = rows,
        totals = totals,
        amount = format_amount(invoice.amount, currency),
        payment_label = escape(&template.payment_label),
        payment = invoice
            .payment_details
            .as_deref()
            .map(escape_multiline)
            .unwrap_or_default(),
        note_label = escape(&template.note_label),
        note = invoice.note.as_deref().map(escape_multiline).unwrap_or_default(),
    )
}

fn render_toolbar(invoice: &Invoice, msg: &Messages) -> String {
    let customer_id = invoice
        .customer
        .as_ref()
        .map(|c| c.id.to_string())
        .unwrap_or_default();

    format!(
        r#"  <nav class="invoice-toolbar" data-invoice-id="{id}" data-size="{size}" data-customer-id="{customer_id}">
    <button type="button" data-action="copy-link">{copy}</button>
    <button type="button" data-action="toggle-comments" aria-controls="invoice-comments">{comments}</button>
  </nav>"#,
        id = invoice.id,
        size = invoice.template.size.as_str(),
        customer_id = customer_id,
        copy = escape(msg.copy_link),
        comments = escape(msg.comments),
    )
}

fn render_comments(msg: &Messages) -> String {
    format!(
        r#"  <aside id="invoice-comments" class="invoice-comments" hidden>
    <h2>{}</h2>
  </aside>"#,
        escape(msg.comments)
    )
}

fn render_powered_by(msg: &Messages, public_url: &str) -> String {
    format!(
        r#"  <div class="powered-by">
    <a href="{}?utm_source=invoice" target="_blank" rel="noreferrer">{} <span>tally</span></a>
  </div>"#,
        escape(public_url.trim_end_matches('/')),
        escape(msg.powered_by)
    )
}
