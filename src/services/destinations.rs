use reqwest::Method;

use crate::api::envelope::{DataEnvelope, ListEnvelope};
use crate::api::{ApiClient, ApiError, Auth, Endpoint};
use crate::models::{Destination, DestinationDetail};

/// Catalog accessor.
///
/// Every derived view re-fetches the whole collection and sorts or filters
/// it locally; the backend offers no server-side ordering or paging.
#[derive(Debug, Clone)]
pub struct DestinationService {
    client: ApiClient,
}

impl DestinationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /destinations`
    pub async fn list_all(&self) -> Result<Vec<Destination>, ApiError> {
        let request = self
            .client
            .request(Method::GET, Endpoint::Destinations, Auth::IfPresent)?;
        let envelope: ListEnvelope<Destination> = self.client.send(request).await?;
        Ok(envelope.data)
    }

    /// Top `limit` destinations by average rating.
    pub async fn list_popular(&self, limit: usize) -> Result<Vec<Destination>, ApiError> {
        Ok(rank_popular(self.list_all().await?, limit))
    }

    /// The `limit` most recently created destinations.
    pub async fn list_new(&self, limit: usize) -> Result<Vec<Destination>, ApiError> {
        Ok(rank_newest(self.list_all().await?, limit))
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Destination>, ApiError> {
        Ok(filter_category(self.list_all().await?, category))
    }

    /// `GET /destinations/:id`, ratings included.
    pub async fn get_by_id(&self, id: &str) -> Result<DestinationDetail, ApiError> {
        let request = self
            .client
            .request(Method::GET, Endpoint::Destination(id), Auth::IfPresent)?;
        let envelope: DataEnvelope<DestinationDetail> = self.client.send(request).await?;
        Ok(envelope.data)
    }
}

/// Sort non-increasing by `average_rating` and keep the first `limit`.
///
/// The sort is stable: ties keep the order the server returned.
pub fn rank_popular(mut destinations: Vec<Destination>, limit: usize) -> Vec<Destination> {
    destinations.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    destinations.truncate(limit);
    destinations
}

/// Sort non-increasing by `created_at` and keep the first `limit`.
///
/// Unparseable timestamps sort after every valid one.
pub fn rank_newest(mut destinations: Vec<Destination>, limit: usize) -> Vec<Destination> {
    destinations.sort_by_key(|d| std::cmp::Reverse(d.created_at_timestamp()));
    destinations.truncate(limit);
    destinations
}

pub fn filter_category(destinations: Vec<Destination>, category: &str) -> Vec<Destination> {
    destinations
        .into_iter()
        .filter(|d| d.in_category(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPoint, Photos};
    use proptest::prelude::*;

    fn dest(id: &str, rating: f64, created_at: &str, category: &str) -> Destination {
        Destination {
            id: id.to_string(),
            name: id.to_uppercase(),
            photos: Photos::default(),
            geo: GeoPoint::default(),
            category: category.to_string(),
            average_rating: rating,
            description: None,
            address: None,
            tags: vec![],
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    fn ids(destinations: &[Destination]) -> Vec<&str> {
        destinations.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn popular_sorts_by_rating_and_keeps_ties_stable() {
        let input = vec![
            dest("a", 3.0, "", "beach"),
            dest("b", 4.5, "", "beach"),
            dest("c", 4.5, "", "beach"),
            dest("d", 5.0, "", "beach"),
        ];
        assert_eq!(ids(&rank_popular(input, 3)), vec!["d", "b", "c"]);
    }

    #[test]
    fn popular_limit_larger_than_collection() {
        let input = vec![dest("a", 1.0, "", "x"), dest("b", 2.0, "", "x")];
        assert_eq!(rank_popular(input, 10).len(), 2);
        assert!(rank_popular(Vec::new(), 3).is_empty());
    }

    #[test]
    fn newest_sorts_by_timestamp_not_string() {
        let input = vec![
            dest("old", 0.0, "2023-12-31T23:00:00.000Z", "x"),
            dest("offset", 0.0, "2024-01-01T01:00:00+02:00", "x"),
            dest("new", 0.0, "2024-03-01T00:00:00.000Z", "x"),
            dest("bad", 0.0, "not a date", "x"),
        ];
        // 01:00+02:00 is 23:00Z on Dec 31, same instant as "old"; stable order keeps "old" first.
        assert_eq!(
            ids(&rank_newest(input, 4)),
            vec!["new", "old", "offset", "bad"]
        );
    }

    #[test]
    fn category_filter_is_case_insensitive_exact() {
        let input = vec![
            dest("a", 0.0, "", "Beach"),
            dest("b", 0.0, "", "beaches"),
            dest("c", 0.0, "", "BEACH"),
        ];
        assert_eq!(ids(&filter_category(input, "beach")), vec!["a", "c"]);
    }

    fn arb_catalogue() -> impl Strategy<Value = Vec<Destination>> {
        let entry = (0.0f64..=5.0, prop::option::of(0i64..4_000_000_000));
        prop::collection::vec(entry, 0..40).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (rating, secs))| {
                    let created_at = secs
                        .and_then(|s| chrono::DateTime::from_timestamp(s, 0))
                        .map(|ts| ts.to_rfc3339())
                        .unwrap_or_else(|| "unknown".to_string());
                    dest(&format!("d{i}"), rating, &created_at, "x")
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn popular_keeps_limit_and_order(catalogue in arb_catalogue(), limit in 0usize..50) {
            let expected = limit.min(catalogue.len());
            let ranked = rank_popular(catalogue, limit);
            prop_assert_eq!(ranked.len(), expected);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].average_rating >= pair[1].average_rating);
            }
        }

        #[test]
        fn newest_keeps_limit_and_order(catalogue in arb_catalogue(), limit in 0usize..50) {
            let expected = limit.min(catalogue.len());
            let ranked = rank_newest(catalogue, limit);
            prop_assert_eq!(ranked.len(), expected);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].created_at_timestamp() >= pair[1].created_at_timestamp());
            }
        }
    }
}
