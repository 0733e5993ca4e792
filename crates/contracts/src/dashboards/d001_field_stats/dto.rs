use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /api/analytics/field-stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldStatsResponse {
    pub total_people: u64,
    pub field_stats: Vec<FieldStats>,
}

/// Aggregated answers for one custom field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub field_key: String,
    pub field_label: String,
    pub field_type: String,
    pub total_responses: u64,

    /// Filled for select / radio / checkbox / multiselect fields
    #[serde(default)]
    pub value_counts: BTreeMap<String, u64>,

    /// Filled for number fields with at least one numeric answer
    #[serde(default)]
    pub numeric_stats: Option<NumericStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub count: u64,
}

impl FieldStats {
    /// Value counts ordered by count (descending), then by value
    pub fn sorted_counts(&self) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = self
            .value_counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Share of people who answered, in percent
    pub fn response_rate(&self, total_people: u64) -> f64 {
        if total_people == 0 {
            return 0.0;
        }
        self.total_responses as f64 * 100.0 / total_people as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_from(json: &str) -> FieldStatsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_sorted_counts() {
        let resp = stats_from(
            r#"{"total_people":4,"field_stats":[{"field_key":"color","field_label":"Color","field_type":"select","total_responses":4,"value_counts":{"red":1,"blue":2,"green":1},"numeric_stats":null}]}"#,
        );
        let counts = resp.field_stats[0].sorted_counts();
        assert_eq!(
            counts,
            vec![
                ("blue".to_string(), 2),
                ("green".to_string(), 1),
                ("red".to_string(), 1)
            ]
        );
        assert_eq!(resp.field_stats[0].response_rate(resp.total_people), 100.0);
    }

    #[test]
    fn test_numeric_stats_and_zero_people() {
        let resp = stats_from(
            r#"{"total_people":0,"field_stats":[{"field_key":"age","field_label":"Age","field_type":"number","total_responses":0,"value_counts":{},"numeric_stats":{"min":1.0,"max":3.0,"avg":2.0,"count":2}}]}"#,
        );
        let stats = &resp.field_stats[0];
        assert_eq!(stats.numeric_stats.map(|n| n.count), Some(2));
        assert_eq!(stats.response_rate(0), 0.0);
    }
}
