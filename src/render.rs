use crate::forecast::{Day, ForecastDocument, ReadingValue, TideKind};

use std::fmt::Write;

/// Id of the container element the renderer writes into.
pub const SURFACE_ID: &str = "conteudo";

/// Shown instead of the forecast when retrieval or decoding fails.
pub const LOAD_ERROR_TEXT: &str = "Erro ao carregar os dados.";

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 1em; }\n\
.dia { border: 1px solid #ccc; border-radius: 6px; padding: 0.5em 1em; margin: 1em 0; }\n\
.hora { margin: 0.5em 0; }\n\
.tide { margin-top: 0.5em; color: #035; }";

/// The container element that receives rendered output. The renderer owns the
/// entire subtree, so rendering always starts by clearing it.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    children: Vec<String>,
}

impl HtmlSurface {
    pub fn new() -> HtmlSurface {
        HtmlSurface::default()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: String) {
        self.children.push(node);
    }

    /// Replace all content with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.children.push(escape(text));
    }

    pub fn inner_html(&self) -> String {
        self.children.concat()
    }

    /// Serialize the surface into a minimal standalone page.
    pub fn to_page(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Previsões</title>\n<style>\n{PAGE_STYLE}\n</style>\n</head>\n<body>\n\
             <div id=\"{SURFACE_ID}\">{}</div>\n</body>\n</html>\n",
            self.inner_html()
        )
    }
}

/// Render the first beach of the document into the surface. Further beaches
/// are ignored, matching the single-beach behavior of the original page.
pub fn render(document: &ForecastDocument, surface: &mut HtmlSurface) {
    surface.clear();

    let Some(beach) = document.beaches.first() else {
        return;
    };
    surface.append(format!("<h2>🌊 Praia: {}</h2>", escape(&beach.name)));
    for day in &beach.days {
        surface.append(render_day(day));
    }
}

fn render_day(day: &Day) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"dia\">");
    let _ = write!(out, "<h3>📅 {}</h3>", escape(&day.label));

    for hour in &day.hours {
        let _ = write!(
            out,
            "<div class=\"hora\"><strong>🕒 {}</strong><ul>",
            escape(&hour.label)
        );
        for reading in &hour.readings {
            let _ = write!(
                out,
                "<li>{}: {}</li>",
                escape(&reading.name),
                render_value(&reading.value)
            );
        }
        out.push_str("</ul></div>");
    }

    if !day.tides.is_empty() {
        let entries: Vec<String> = day
            .tides
            .iter()
            .map(|tide| {
                format!(
                    "{} - {} ({:.2} m)",
                    escape(&tide.time),
                    tide_label(&tide.kind),
                    tide.height
                )
            })
            .collect();
        let _ = write!(
            out,
            "<div class=\"tide\"><strong>🌊 Marés:</strong><br>{}</div>",
            entries.join("<br>")
        );
    }

    out.push_str("</div>");
    out
}

/// Numbers render with exactly two decimal places, text renders as-is.
fn render_value(value: &ReadingValue) -> String {
    match value {
        ReadingValue::Number(n) => format!("{n:.2}"),
        ReadingValue::Text(s) => escape(s),
    }
}

fn tide_label(kind: &TideKind) -> &'static str {
    match kind {
        TideKind::High => "Alta",
        TideKind::Low => "Baixa",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
