// file: src/models/dataset.rs
// description: travel dataset document model as served in travel_recommendation_api.json
// reference: serde field renames for the camelCase wire format

use serde::{Deserialize, Deserializer, Serialize};

/// Root document. Collections absent from the document, or set to `null`, load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub beaches: Vec<Place>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub temples: Vec<Place>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub countries: Vec<Country>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,

    /// Relative fragment, resolved against the configured image base path
    #[serde(rename = "imageUrl")]
    pub image_url: String,

    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub cities: Vec<Place>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Dataset {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }

    /// Beaches, temples and every city of every country.
    pub fn place_count(&self) -> usize {
        self.beaches.len() + self.temples.len() + self.city_count()
    }

    /// Every place in traversal order: beaches, temples, then cities country by country.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.beaches
            .iter()
            .chain(self.temples.iter())
            .chain(self.countries.iter().flat_map(|c| c.cities.iter()))
    }

    pub fn is_empty(&self) -> bool {
        self.place_count() == 0 && self.countries.is_empty()
    }
}

impl Place {
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            description: description.into(),
        }
    }
}

impl Country {
    pub fn new(name: impl Into<String>, cities: Vec<Place>) -> Self {
        Self {
            name: name.into(),
            cities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "countries": [
            {
                "id": 1,
                "name": "Australia",
                "cities": [
                    {"name": "Sydney, Australia", "imageUrl": "sydney.jpg", "description": "Harbour city."},
                    {"name": "Melbourne, Australia", "imageUrl": "melbourne.jpg", "description": "Laneways."}
                ]
            }
        ],
        "temples": [
            {"id": 1, "name": "Angkor Wat, Cambodia", "imageUrl": "angkor.jpg", "description": "Temple complex."}
        ],
        "beaches": []
    }"#;

    #[test]
    fn test_parse_camel_case_document() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();

        assert_eq!(dataset.countries.len(), 1);
        assert_eq!(dataset.countries[0].cities[0].image_url, "sydney.jpg");
        assert_eq!(
            dataset.temples,
            vec![Place::new("Angkor Wat, Cambodia", "angkor.jpg", "Temple complex.")]
        );
        assert_eq!(dataset.place_count(), 3);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let dataset = Dataset::from_json(r#"{"beaches": []}"#).unwrap();
        assert!(dataset.temples.is_empty());
        assert!(dataset.countries.is_empty());
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_null_collections_load_as_empty() {
        let raw = r#"{
            "beaches": [{"name": "Bora Bora", "imageUrl": "bb.jpg", "description": "d"}],
            "temples": null,
            "countries": [{"name": "Atlantis", "cities": null}]
        }"#;

        let dataset = Dataset::from_json(raw).unwrap();
        assert_eq!(dataset.beaches.len(), 1);
        assert!(dataset.temples.is_empty());
        assert!(dataset.countries[0].cities.is_empty());
    }

    #[test]
    fn test_places_traversal_order() {
        let dataset = Dataset {
            beaches: vec![Place::new("B", "b.jpg", "")],
            temples: vec![Place::new("T", "t.jpg", "")],
            countries: vec![Country::new("C", vec![Place::new("City", "c.jpg", "")])],
        };

        let names: Vec<&str> = dataset.places().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "T", "City"]);
    }

    #[test]
    fn test_rejects_place_without_image() {
        let raw = r#"{"beaches": [{"name": "Bora Bora", "description": "d"}]}"#;
        assert!(Dataset::from_json(raw).is_err());
    }
}
