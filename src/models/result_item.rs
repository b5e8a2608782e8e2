// file: src/models/result_item.rs
// description: display-ready search hit tagged with its category label
// reference: derived per search from a dataset Place

use crate::models::Place;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub name: String,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    pub description: String,

    /// Label assigned at match time: "Spiaggia", "Tempio" or the owning country's name
    pub category: String,
}

impl ResultItem {
    pub fn from_place(place: &Place, category: impl Into<String>) -> Self {
        Self {
            name: place.name.clone(),
            image_url: place.image_url.clone(),
            description: place.description.clone(),
            category: category.into(),
        }
    }

    /// Identity used by de-duplication.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.category)
    }
}
