// src/render.rs
//! Presentation of a ranked `Report`: console listing, HTML table, CSV.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use html_escape::encode_text;

use crate::config::options::OutputFormat;
use crate::rank::Report;

pub fn render(report: &Report, format: OutputFormat) -> Result<String, csv::Error> {
    match format {
        OutputFormat::Console => Ok(to_console(report)),
        OutputFormat::Html => Ok(to_html(report)),
        OutputFormat::Csv => to_csv(report, ','),
    }
}

/// Aligned text table; never wraps, however wide the terminal.
pub fn to_console(report: &Report) -> String {
    let numeric = report.numeric_columns();

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(report.headers.iter().map(Cell::new).collect::<Vec<_>>());

    for row in &report.rows {
        let cells: Vec<Cell> = row
            .iter()
            .enumerate()
            .map(|(ci, v)| {
                let cell = Cell::new(v);
                if numeric.get(ci).copied().unwrap_or(false) {
                    cell.set_alignment(CellAlignment::Right)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }
    table.to_string()
}

/// Minimal HTML `<table>`: header row in `<thead>`, data rows in `<tbody>`.
pub fn to_html(report: &Report) -> String {
    let mut head = s!(r#"<thead><tr style="text-align: right;">"#);
    for h in &report.headers {
        head.push_str(&format!("<th>{}</th>", encode_text(h)));
    }
    head.push_str("</tr></thead>\n");

    let mut body = s!("<tbody>");
    for row in &report.rows {
        body.push_str("<tr>");
        for v in row {
            body.push_str(&format!("<td>{}</td>", encode_text(&v.to_string())));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>");

    join!(
        r#"<table border="1" cellpadding="5px" class="table table-striped">"#,
        &head,
        &body,
        "</table>\n"
    )
}

/// Header row + one record per ranked row. Missing cells are empty fields.
pub fn to_csv(report: &Report, sep: char) -> Result<String, csv::Error> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(sep as u8)
        .from_writer(Vec::new());
    w.write_record(&report.headers)?;
    for row in report.string_rows() {
        w.write_record(&row)?;
    }
    let buf = w.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
