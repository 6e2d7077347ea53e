// Markup rendering of the registration page.
//
// Purpose
// - Turn the page state into the document the browser shows: the form, its error slots, the results table.
//
// Responsibilities
// - Keep the element identifiers the page contract names (registrationForm, error-*, #registrations tbody).
// - Escape every user supplied value.

use crate::modules::registrations::adapters::outbound::in_memory_page::InMemoryPage;
use crate::modules::registrations::core::fields::{FormField, ValidatedField};
use crate::modules::registrations::core::ports::{RegistrationForm, RegistrationTable};

const TABLE_HEADINGS: [&str; 5] = ["Timestamp", "Full name", "Email", "Phone", "Birth date"];

pub fn render_page(page: &InMemoryPage) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Course registration</title>\n</head>\n<body>\n<h1>Course registration</h1>\n",
    );
    render_form(page, &mut html);
    render_table(page, &mut html);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(page: &InMemoryPage, html: &mut String) {
    html.push_str("<form id=\"registrationForm\" method=\"post\" action=\"/register\">\n");
    html.push_str(&format!(
        "<input type=\"hidden\" id=\"timestamp\" name=\"timestamp\" value=\"{}\">\n",
        escape(page.timestamp())
    ));
    text_input(page, html, ValidatedField::FullName, "text", "Full name");
    text_input(page, html, ValidatedField::Email, "email", "Email");
    text_input(page, html, ValidatedField::Phone, "tel", "Phone");
    text_input(page, html, ValidatedField::BirthDate, "date", "Birth date");

    let checked = if page.read_field(FormField::Terms).is_checked() {
        " checked"
    } else {
        ""
    };
    html.push_str(&format!(
        "<label><input type=\"checkbox\" id=\"terms\" name=\"terms\"{checked}> I accept the terms</label>\n"
    ));
    error_slot(page, html, ValidatedField::Terms);
    html.push_str("<button type=\"submit\">Register</button>\n</form>\n");
}

fn text_input(
    page: &InMemoryPage,
    html: &mut String,
    field: ValidatedField,
    input_type: &str,
    label: &str,
) {
    let name = field.form_field().name();
    let value = page.read_field(field.form_field());
    html.push_str(&format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" value=\"{}\">\n",
        escape(value.as_text())
    ));
    error_slot(page, html, field);
}

fn error_slot(page: &InMemoryPage, html: &mut String, field: ValidatedField) {
    html.push_str(&format!(
        "<span class=\"error\" id=\"{}\">{}</span>\n",
        field.error_slot_id(),
        escape(page.error(field))
    ));
}

fn render_table(page: &InMemoryPage, html: &mut String) {
    html.push_str("<table id=\"registrations\">\n<thead>\n<tr>");
    for heading in TABLE_HEADINGS {
        html.push_str(&format!("<th>{heading}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in page.rows() {
        html.push_str("<tr>");
        for cell in row.cells() {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
