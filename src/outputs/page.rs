//! HTML rendering of the search form and the result page.
//!
//! The page is a [`fmt::Display`] value assembled with `writeln!`. Every piece
//! of text that comes from the user or from a portal goes through `html_escape`.

use crate::models::Report;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt;

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.35rem .5rem;text-align:left}\
.Positif{color:#1a7f37}.Negatif{color:#cf222e}.Netral{color:#57606a}\
.error{color:#cf222e}";

/// Render the whole page.
///
/// # Arguments
///
/// * `keyword` - Value the keyword field is pre-filled with
/// * `date` - Value the date field is pre-filled with
/// * `report` - Search outcome to show below the form; `None` before the first search
///
/// # Returns
///
/// A complete HTML document.
pub fn render_page(keyword: &str, date: &str, report: Option<&Report>) -> String {
    Page {
        keyword,
        date,
        report,
    }
    .to_string()
}

struct Page<'a> {
    keyword: &'a str,
    date: &'a str,
    report: Option<&'a Report>,
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"id\">\n<head>\n<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>Portal Sentiment</title>\n<style>{STYLE}</style>\n</head>\n<body>")?;
        writeln!(out, "<h1>News portal sentiment</h1>")?;
        write_form(out, self.keyword, self.date)?;
        if let Some(report) = self.report {
            write_report(out, report)?;
        }
        writeln!(out, "</body>\n</html>")
    }
}

fn write_form(out: &mut fmt::Formatter<'_>, keyword: &str, date: &str) -> fmt::Result {
    writeln!(out, "<form method=\"post\" action=\"/\">")?;
    writeln!(
        out,
        "<label>Keyword <input type=\"text\" name=\"keyword\" value=\"{}\" required></label>",
        attr(keyword)
    )?;
    writeln!(
        out,
        "<label>Date <input type=\"date\" name=\"date\" value=\"{}\"></label>",
        attr(date)
    )?;
    writeln!(out, "<button type=\"submit\">Search</button>\n</form>")
}

fn write_report(out: &mut fmt::Formatter<'_>, report: &Report) -> fmt::Result {
    writeln!(
        out,
        "<h2>Results for &quot;{}&quot; ({})</h2>",
        text(&report.keyword),
        text(&report.date)
    )?;
    writeln!(
        out,
        "<img src=\"/static/{}\" alt=\"Article count per portal\">",
        attr(&report.chart_file)
    )?;
    writeln!(
        out,
        "<p><a href=\"/download_csv/{}\">Download dataset (CSV)</a></p>",
        attr(&report.csv_file)
    )?;

    writeln!(out, "<h3>Sentiment per portal</h3>")?;
    writeln!(
        out,
        "<table>\n<tr><th>Portal</th><th>Positif</th><th>Negatif</th><th>Netral</th><th>Total</th></tr>"
    )?;
    for (portal, tally) in &report.tallies {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            portal.display_name(),
            tally.positive,
            tally.negative,
            tally.neutral,
            tally.total()
        )?;
    }
    writeln!(out, "</table>")?;

    for result in &report.results {
        writeln!(
            out,
            "<h3>{} ({})</h3>",
            result.portal.display_name(),
            result.articles.len()
        )?;
        if let Some(err) = &result.error {
            writeln!(out, "<p class=\"error\">Could not fetch results: {}</p>", text(err))?;
        }
        if result.articles.is_empty() {
            writeln!(out, "<p>No articles found.</p>")?;
            continue;
        }
        writeln!(out, "<ol>")?;
        for article in &result.articles {
            writeln!(
                out,
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
                attr(&article.url),
                text(&article.title)
            )?;
        }
        writeln!(out, "</ol>")?;
    }

    writeln!(out, "<h3>Sentiment</h3>")?;
    writeln!(
        out,
        "<table>\n<tr><th>Media</th><th>Judul</th><th>Sentimen</th><th>Tanggal input</th></tr>"
    )?;
    for record in &report.records {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>",
            record.media,
            text(&record.judul),
            record.sentimen.label(),
            record.sentimen,
            text(&record.tanggal_input)
        )?;
    }
    writeln!(out, "</table>")
}
