//! Search criteria and query-string serialization.
//!
//! The two search endpoints share one filter set. Serialization follows the
//! rules the Melodies API expects:
//!
//! - scalars (`q`, `page`, `sort`, `per_page`) are emitted once when set;
//! - tag lists become repeated `key[]=value` pairs in input order;
//! - tempo and duration ranges are emitted only as complete pairs.
//!
//! The range gate is intentional. A lone `minTempo` or `maxDuration` is
//! dropped rather than sent as an open-ended range, so callers must supply
//! both bounds to filter on a range.
//!
//! "Set" means present and non-empty / non-zero, matching how the API treats
//! falsy values. Out-of-range values (e.g. `perPage` above 200) are forwarded
//! as-is; rejecting them is the API's job.
//!
//! Numbers are JSON numbers, not integers. Integral values render without a
//! fractional part (`90.0` becomes `90`), anything else is kept (`120.5`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Sort order accepted by the search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Latest,
    Shuffle,
    Featured,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Shuffle => "shuffle",
            Self::Featured => "featured",
        }
    }
}

// Filters for `search_tracks` and `simplified_search_tracks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    #[schemars(description = "General search query for all track data")]
    pub q: Option<String>,

    #[serde(default)]
    #[schemars(description = "Page of results to retrieve")]
    pub page: Option<f64>,

    #[serde(default)]
    #[schemars(description = "Sorting of results")]
    pub sort: Option<SortOrder>,

    #[serde(default)]
    #[schemars(description = "Array of genres to search for")]
    pub genre: Option<Vec<String>>,

    #[serde(default)]
    #[schemars(description = "Array of moods to search for")]
    pub mood: Option<Vec<String>>,

    #[serde(default)]
    #[schemars(description = "Array of instruments to search for")]
    pub instrument: Option<Vec<String>>,

    #[serde(default)]
    #[schemars(description = "Array of purposes to search for")]
    pub purpose: Option<Vec<String>>,

    #[serde(default)]
    #[schemars(description = "Minimal tempo in BPM (must be used with maxTempo)")]
    pub min_tempo: Option<f64>,

    #[serde(default)]
    #[schemars(description = "Maximal tempo in BPM (must be used with minTempo)")]
    pub max_tempo: Option<f64>,

    #[serde(default)]
    #[schemars(description = "Minimal duration in seconds (must be used with maxDuration)")]
    pub min_duration: Option<f64>,

    #[serde(default)]
    #[schemars(description = "Maximal duration in seconds (must be used with minDuration)")]
    pub max_duration: Option<f64>,

    #[serde(default)]
    #[schemars(description = "Amount of results per page (default 15, max 200)")]
    pub per_page: Option<f64>,
}

impl SearchCriteria {
    /// Serialize the criteria into the ordered query the API expects.
    pub fn to_query(&self) -> SerializedQuery {
        let mut query = SerializedQuery::new();

        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            query.append("q", q);
        }
        query.append_nonzero("page", self.page);
        if let Some(sort) = self.sort {
            query.append("sort", sort.as_str());
        }

        query.extend_list("genre", self.genre.as_deref());
        query.extend_list("mood", self.mood.as_deref());
        query.extend_list("instrument", self.instrument.as_deref());
        query.extend_list("purpose", self.purpose.as_deref());

        query.append_range("min_tempo", "max_tempo", self.min_tempo, self.max_tempo);
        query.append_range(
            "min_duration",
            "max_duration",
            self.min_duration,
            self.max_duration,
        );

        query.append_nonzero("per_page", self.per_page);
        query
    }
}

/// Ordered multi-map of query parameters. Repeated keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializedQuery {
    pairs: Vec<(String, String)>,
}

impl SerializedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `key=value` pair.
    pub fn append(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Append `key=value` when the value is set and non-zero.
    pub fn append_nonzero(&mut self, key: &str, value: Option<f64>) {
        if let Some(value) = value.filter(|v| *v != 0.0) {
            self.append(key, value);
        }
    }

    /// Append one `key[]=item` pair per list element, in order.
    fn extend_list(&mut self, key: &str, items: Option<&[String]>) {
        let bracketed = format!("{key}[]");
        for item in items.unwrap_or_default() {
            self.append(bracketed.as_str(), item);
        }
    }

    /// Append a min/max pair only when both bounds are set.
    fn append_range(&mut self, min_key: &str, max_key: &str, min: Option<f64>, max: Option<f64>) {
        let nonzero = |v: Option<f64>| v.filter(|v| *v != 0.0);
        if let (Some(min), Some(max)) = (nonzero(min), nonzero(max)) {
            self.append(min_key, min);
            self.append(max_key, max);
        }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencoded rendering, e.g. `q=piano&genre%5B%5D=jazz`.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &SerializedQuery) -> Vec<&str> {
        query.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_empty_criteria_emit_nothing() {
        assert!(SearchCriteria::default().to_query().is_empty());
    }

    #[test]
    fn test_piano_scenario_order() {
        let criteria = SearchCriteria {
            q: Some("piano".to_string()),
            genre: Some(vec!["jazz".to_string(), "classical".to_string()]),
            min_tempo: Some(90.0),
            max_tempo: Some(120.0),
            ..Default::default()
        };

        let query = criteria.to_query();
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("q", "piano"),
                ("genre[]", "jazz"),
                ("genre[]", "classical"),
                ("min_tempo", "90"),
                ("max_tempo", "120"),
            ]
        );
    }

    #[test]
    fn test_lone_tempo_bound_is_dropped() {
        for (min, max) in [(Some(90.0), None), (None, Some(120.0))] {
            let criteria = SearchCriteria {
                min_tempo: min,
                max_tempo: max,
                ..Default::default()
            };
            let query = criteria.to_query();
            assert!(!query.contains_key("min_tempo"));
            assert!(!query.contains_key("max_tempo"));
        }
    }

    #[test]
    fn test_lone_duration_bound_is_dropped() {
        let criteria = SearchCriteria {
            min_duration: Some(30.0),
            ..Default::default()
        };
        let query = criteria.to_query();
        assert!(!query.contains_key("min_duration"));
        assert!(!query.contains_key("max_duration"));
    }

    #[test]
    fn test_zero_bound_closes_range_gate() {
        let criteria = SearchCriteria {
            min_tempo: Some(0.0),
            max_tempo: Some(120.0),
            ..Default::default()
        };
        assert!(criteria.to_query().is_empty());
    }

    #[test]
    fn test_full_duration_range_is_emitted() {
        let criteria = SearchCriteria {
            min_duration: Some(60.0),
            max_duration: Some(180.0),
            ..Default::default()
        };
        let query = criteria.to_query();
        assert_eq!(query.get("min_duration"), Some("60"));
        assert_eq!(query.get("max_duration"), Some("180"));
    }

    #[test]
    fn test_list_fields_keep_order_and_count() {
        let criteria = SearchCriteria {
            mood: Some(vec!["a".into(), "b".into(), "c".into()]),
            instrument: Some(vec![]),
            purpose: None,
            ..Default::default()
        };
        let query = criteria.to_query();
        assert_eq!(query.get_all("mood[]"), vec!["a", "b", "c"]);
        assert!(!query.contains_key("instrument[]"));
        assert!(!query.contains_key("purpose[]"));
    }

    #[test]
    fn test_full_emission_order() {
        let criteria = SearchCriteria {
            q: Some("rain".into()),
            page: Some(2.0),
            sort: Some(SortOrder::Featured),
            genre: Some(vec!["ambient".into()]),
            mood: Some(vec!["calm".into()]),
            instrument: Some(vec!["piano".into()]),
            purpose: Some(vec!["vlog".into()]),
            min_tempo: Some(60.0),
            max_tempo: Some(80.0),
            min_duration: Some(30.0),
            max_duration: Some(240.0),
            per_page: Some(500.0),
        };
        let query = criteria.to_query();
        assert_eq!(
            keys(&query),
            vec![
                "q",
                "page",
                "sort",
                "genre[]",
                "mood[]",
                "instrument[]",
                "purpose[]",
                "min_tempo",
                "max_tempo",
                "min_duration",
                "max_duration",
                "per_page",
            ]
        );
        // Not clamped to the API maximum.
        assert_eq!(query.get("per_page"), Some("500"));
        assert_eq!(query.get("sort"), Some("featured"));
    }

    #[test]
    fn test_falsy_scalars_are_skipped() {
        let criteria = SearchCriteria {
            q: Some(String::new()),
            page: Some(0.0),
            per_page: Some(0.0),
            ..Default::default()
        };
        assert!(criteria.to_query().is_empty());
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let criteria = SearchCriteria {
            q: Some("lofi".into()),
            genre: Some(vec!["hiphop".into(), "jazz".into()]),
            min_tempo: Some(70.0),
            max_tempo: Some(90.0),
            ..Default::default()
        };
        assert_eq!(criteria.to_query(), criteria.to_query());
    }

    #[test]
    fn test_query_string_encodes_brackets() {
        let mut query = SerializedQuery::new();
        query.append("q", "piano");
        query.append("genre[]", "jazz");
        assert_eq!(
            query.to_query_string().unwrap(),
            "q=piano&genre%5B%5D=jazz"
        );
    }

    #[test]
    fn test_criteria_from_camel_case_json() {
        let json = r#"{
            "q": "piano",
            "sort": "shuffle",
            "genre": ["jazz"],
            "minTempo": 90,
            "maxTempo": 120,
            "perPage": 50,
            "unrelated": true
        }"#;
        let criteria: SearchCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.sort, Some(SortOrder::Shuffle));
        assert_eq!(criteria.min_tempo, Some(90.0));
        assert_eq!(criteria.per_page, Some(50.0));
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let result: Result<SearchCriteria, _> = serde_json::from_str(r#"{"sort": "oldest"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_float_bounds_are_accepted_and_rendered() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"minTempo": 90.0, "maxTempo": 120.5, "page": 2.0}"#).unwrap();
        let query = criteria.to_query();

        assert_eq!(query.get("page"), Some("2"));
        assert_eq!(query.get("min_tempo"), Some("90"));
        assert_eq!(query.get("max_tempo"), Some("120.5"));
    }

    #[test]
    fn test_zero_float_is_unset() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"perPage": 0.0, "minDuration": 0.0, "maxDuration": 60}"#)
                .unwrap();
        assert!(criteria.to_query().is_empty());
    }
}
