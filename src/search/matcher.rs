// file: src/search/matcher.rs
// description: query normalization and first-match-wins category dispatch
// reference: keyword rules over the beaches, temples and countries collections

use crate::models::{Dataset, ResultItem};
use tracing::debug;

pub const BEACH_CATEGORY: &str = "Spiaggia";
pub const TEMPLE_CATEGORY: &str = "Tempio";

const BEACH_KEYWORDS: [&str; 2] = ["beach", "spiaggia"];
const TEMPLE_KEYWORDS: [&str; 2] = ["temple", "tempio"];

/// A lowercased, trimmed, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

/// Which collection a query is dispatched to. Evaluated in declaration order,
/// so a term mentioning a beach keyword never reaches the geography lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIntent {
    Beaches,
    Temples,
    Geography,
}

impl SearchQuery {
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let term = raw.to_lowercase().trim().to_string();
        if term.is_empty() {
            None
        } else {
            Some(Self { term })
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn intent(&self) -> QueryIntent {
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| self.term.contains(k));

        if contains_any(&BEACH_KEYWORDS) {
            QueryIntent::Beaches
        } else if contains_any(&TEMPLE_KEYWORDS) {
            QueryIntent::Temples
        } else {
            QueryIntent::Geography
        }
    }
}

/// Collects every place the query selects, in dataset traversal order.
///
/// The geography branch checks the country name and each city name
/// independently, so a city can appear twice; callers de-duplicate.
pub fn match_items(query: &SearchQuery, dataset: &Dataset) -> Vec<ResultItem> {
    let intent = query.intent();
    debug!("Query {:?} dispatched as {:?}", query.term(), intent);

    match intent {
        QueryIntent::Beaches => dataset
            .beaches
            .iter()
            .map(|place| ResultItem::from_place(place, BEACH_CATEGORY))
            .collect(),
        QueryIntent::Temples => dataset
            .temples
            .iter()
            .map(|place| ResultItem::from_place(place, TEMPLE_CATEGORY))
            .collect(),
        QueryIntent::Geography => {
            let mut results = Vec::new();

            for country in &dataset.countries {
                if country.name.to_lowercase().contains(query.term()) {
                    results.extend(
                        country
                            .cities
                            .iter()
                            .map(|city| ResultItem::from_place(city, country.name.as_str())),
                    );
                }

                for city in &country.cities {
                    if city.name.to_lowercase().contains(query.term()) {
                        results.push(ResultItem::from_place(city, country.name.as_str()));
                    }
                }
            }

            results
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Place};
    use pretty_assertions::assert_eq;

    fn sample_dataset() -> Dataset {
        Dataset {
            beaches: vec![
                Place::new("Bora Bora, French Polynesia", "bora.jpg", "Lagoon."),
                Place::new("Copacabana Beach, Brazil", "copa.jpg", "Promenade."),
            ],
            temples: vec![Place::new("Angkor Wat, Cambodia", "angkor.jpg", "Temple complex.")],
            countries: vec![
                Country::new(
                    "Australia",
                    vec![
                        Place::new("Sydney, Australia", "sydney.jpg", "Opera house."),
                        Place::new("Melbourne, Australia", "melbourne.jpg", "Laneways."),
                    ],
                ),
                Country::new(
                    "Japan",
                    vec![
                        Place::new("Tokyo, Japan", "tokyo.jpg", "Capital."),
                        Place::new("Kyoto, Japan", "kyoto.jpg", "Shrines."),
                    ],
                ),
            ],
        }
    }

    fn names(items: &[ResultItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_parse_normalizes_term() {
        let query = SearchQuery::parse("  AusTRALia \n").unwrap();
        assert_eq!(query.term(), "australia");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse("   \t"), None);
    }

    #[test]
    fn test_intent_priority() {
        assert_eq!(SearchQuery::parse("Beaches").unwrap().intent(), QueryIntent::Beaches);
        assert_eq!(SearchQuery::parse("spiaggia").unwrap().intent(), QueryIntent::Beaches);
        assert_eq!(SearchQuery::parse("TEMPLES").unwrap().intent(), QueryIntent::Temples);
        assert_eq!(SearchQuery::parse("tempio").unwrap().intent(), QueryIntent::Temples);
        assert_eq!(SearchQuery::parse("kyoto").unwrap().intent(), QueryIntent::Geography);
        // Beach keywords shadow both temples and geography.
        assert_eq!(
            SearchQuery::parse("temple beach australia").unwrap().intent(),
            QueryIntent::Beaches
        );
    }

    #[test]
    fn test_beach_query_returns_all_beaches() {
        let dataset = sample_dataset();
        let results = match_items(&SearchQuery::parse("Beach").unwrap(), &dataset);

        let expected: Vec<ResultItem> = dataset
            .beaches
            .iter()
            .map(|p| ResultItem::from_place(p, "Spiaggia"))
            .collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_temple_query_returns_all_temples() {
        let dataset = sample_dataset();
        let results = match_items(&SearchQuery::parse("temple").unwrap(), &dataset);

        assert_eq!(names(&results), vec!["Angkor Wat, Cambodia"]);
        assert!(results.iter().all(|r| r.category == TEMPLE_CATEGORY));
    }

    #[test]
    fn test_country_query_returns_its_cities() {
        let dataset = sample_dataset();
        let results = match_items(&SearchQuery::parse("japan").unwrap(), &dataset);

        // Country match adds both cities, then each city name also contains "japan".
        assert_eq!(
            names(&results),
            vec!["Tokyo, Japan", "Kyoto, Japan", "Tokyo, Japan", "Kyoto, Japan"]
        );
        assert!(results.iter().all(|r| r.category == "Japan"));
    }

    #[test]
    fn test_city_query_returns_single_city() {
        let dataset = sample_dataset();
        let results = match_items(&SearchQuery::parse("kyo").unwrap(), &dataset);

        assert_eq!(names(&results), vec!["Tokyo, Japan", "Kyoto, Japan"]);
    }

    #[test]
    fn test_unknown_term_matches_nothing() {
        let dataset = sample_dataset();
        let results = match_items(&SearchQuery::parse("xyznotfound").unwrap(), &dataset);
        assert!(results.is_empty());
    }
}
