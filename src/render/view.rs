// file: src/render/view.rs
// description: display structure produced from search results
// reference: card grid with heading, badge, title, body and fallback image

use crate::config::DisplayConfig;
use crate::models::ResultItem;
use serde::Serialize;

/// Badge text for results that carry no category.
pub const DEFAULT_BADGE: &str = "Destinazione";

/// Everything the output region can show. Each render replaces the previous view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    Prompt { message: String },
    Error { title: String, detail: String },
    NoResults { message: String },
    Grid { heading: String, cards: Vec<Card> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub image: CardImage,
    pub badge: String,
    pub title: String,
    pub body: String,
}

/// Image source with a single-use fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    pub fallback: String,
    fallback_used: bool,
}

impl CardImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            fallback: fallback.into(),
            fallback_used: false,
        }
    }

    /// Called when `src` fails to load. Swaps to the fallback the first time and
    /// returns the new source; afterwards returns `None` so a broken fallback
    /// cannot trigger another swap.
    pub fn on_error(&mut self) -> Option<&str> {
        if self.fallback_used {
            return None;
        }
        self.fallback_used = true;
        self.src = self.fallback.clone();
        Some(&self.src)
    }

    pub fn fallback_used(&self) -> bool {
        self.fallback_used
    }
}

impl View {
    pub fn card_count(&self) -> usize {
        match self {
            View::Grid { cards, .. } => cards.len(),
            _ => 0,
        }
    }
}

/// Turns search outcomes into views using the configured wording and image paths.
#[derive(Debug, Clone)]
pub struct Renderer {
    display: DisplayConfig,
}

impl Renderer {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn prompt(&self) -> View {
        View::Prompt {
            message: self.display.prompt_message.clone(),
        }
    }

    pub fn load_error(&self) -> View {
        View::Error {
            title: self.display.error_title.clone(),
            detail: self.display.error_detail.clone(),
        }
    }

    /// Expects results already de-duplicated.
    pub fn results(&self, items: &[ResultItem]) -> View {
        if items.is_empty() {
            return View::NoResults {
                message: self.display.no_results_message.clone(),
            };
        }

        View::Grid {
            heading: self.display.heading.clone(),
            cards: items.iter().map(|item| self.card(item)).collect(),
        }
    }

    fn card(&self, item: &ResultItem) -> Card {
        let badge = if item.category.is_empty() {
            DEFAULT_BADGE.to_string()
        } else {
            item.category.clone()
        };

        Card {
            image: CardImage::new(
                format!("{}{}", self.display.image_base_path, item.image_url),
                item.name.as_str(),
                self.display.fallback_image_url.as_str(),
            ),
            badge,
            title: item.name.clone(),
            body: item.description.clone(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
