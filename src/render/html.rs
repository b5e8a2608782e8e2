// file: src/render/html.rs
// description: HTML markup for views, as a fragment or a standalone page
// reference: Tailwind card grid layout

use crate::render::{Card, View};
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub fn escape(text: &str) -> String {
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

/// Escapes text for a single-quoted script string literal.
fn escape_script_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the output region.
pub fn render_fragment(view: &View) -> String {
    match view {
        View::Prompt { message } | View::NoResults { message } => format!(
            "<h2 class=\"text-2xl font-semibold text-center text-gray-700\">{}</h2>",
            escape(message)
        ),
        View::Error { title, detail } => format!(
            "<div style=\"text-align: center; padding: 20px;\">\
             <p style=\"color: #dc3545; font-weight: bold;\">{}</p>\
             <p style=\"color: #6c757d;\">{}</p>\
             </div>",
            escape(title),
            escape(detail)
        ),
        View::Grid { heading, cards } => {
            let mut html = format!(
                "<h2 class=\"text-3xl font-bold text-center mb-10 text-gray-800\">{}</h2>\n\
                 <div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 p-4\">\n",
                escape(heading)
            );
            for card in cards {
                html.push_str(&render_card(card));
            }
            html.push_str("</div>");
            html
        }
    }
}

fn render_card(card: &Card) -> String {
    let mut html = String::new();
    // The inline handler clears itself before swapping, so the fallback is tried once.
    let _ = write!(
        html,
        "  <div class=\"card bg-white border border-gray-200 rounded-xl overflow-hidden shadow-lg p-5\">\n\
         \x20   <img src=\"{src}\" alt=\"{alt}\" \
         class=\"w-full h-48 object-cover rounded-lg mb-4 border border-gray-100\" \
         onerror=\"this.onerror=null; this.src='{fallback}';\">\n\
         \x20   <span class=\"text-xs font-medium bg-indigo-100 text-indigo-800 px-3 py-1 rounded-full\">{badge}</span>\n\
         \x20   <h3 class=\"text-xl font-bold text-gray-800 mt-2 mb-2\">{title}</h3>\n\
         \x20   <p class=\"text-gray-600 text-sm\">{body}</p>\n\
         \x20 </div>\n",
        src = escape(&card.image.src),
        alt = escape(&card.image.alt),
        fallback = escape(&escape_script_string(&card.image.fallback)),
        badge = escape(&card.badge),
        title = escape(&card.title),
        body = escape(&card.body),
    );
    html
}

/// Standalone document wrapping the fragment for `query`.
pub fn render_page(view: &View, query: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"it\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Raccomandazioni di viaggio</title>\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n\
         </head>\n\
         <body class=\"bg-gray-50\">\n\
         <main class=\"max-w-6xl mx-auto py-10\">\n\
         <input id=\"searchInput\" type=\"text\" value=\"{query}\" readonly \
         class=\"w-full border rounded-lg px-4 py-2 mb-8\">\n\
         <section id=\"recommendations-output\">\n{fragment}\n</section>\n\
         <footer class=\"text-xs text-center text-gray-400 mt-10\">{generated}</footer>\n\
         </main>\n\
         </body>\n\
         </html>\n",
        query = escape(query),
        fragment = render_fragment(view),
        generated = generated_at.to_rfc3339(),
    )
}
