// file: src/render/text.rs
// description: terminal rendering of views with optional ANSI coloring

use crate::render::View;
use crate::utils::Validator;
use colored::*;

const MAX_BODY_CHARS: usize = 160;

pub fn render(view: &View, colored_output: bool) -> String {
    let paint = |plain: &str, styled: ColoredString| {
        if colored_output {
            styled.to_string()
        } else {
            plain.to_string()
        }
    };

    match view {
        View::Prompt { message } => paint(message, message.yellow()),
        View::NoResults { message } => paint(message, message.dimmed()),
        View::Error { title, detail } => {
            format!("{}\n{}", paint(title, title.red().bold()), detail)
        }
        View::Grid { heading, cards } => {
            let mut out = paint(heading, heading.bold());
            out.push('\n');
            out.push_str(&"=".repeat(heading.chars().count()));

            for card in cards {
                let badge = format!("[{}]", card.badge);
                out.push_str(&format!(
                    "\n\n{} {}\n  {}\n  {}",
                    paint(&badge, badge.cyan()),
                    paint(&card.title, card.title.bold()),
                    Validator::truncate_text(&card.body, MAX_BODY_CHARS),
                    paint(&card.image.src, card.image.src.dimmed()),
                ));
            }
            out
        }
    }
}
