//! Behavioral analytics page.

use crate::fixtures::{ClusterPoint, FixtureStore, HistogramBucket};

/// View controller for the behavioral analytics page: anomaly-score
/// distribution histogram and the session cluster scatter plot.
#[derive(Debug)]
pub struct BehaviorPage<'a> {
    store: &'a FixtureStore,
}

impl<'a> BehaviorPage<'a> {
    pub fn new(store: &'a FixtureStore) -> Self {
        Self { store }
    }

    pub fn anomaly_distribution(&self) -> &'a [HistogramBucket] {
        &self.store.anomaly_distribution
    }

    pub fn clusters(&self) -> &'a [ClusterPoint] {
        &self.store.behavior_clusters
    }

    /// Total sessions across all histogram buckets.
    pub fn scored_sessions(&self) -> u64 {
        self.store
            .anomaly_distribution
            .iter()
            .map(|b| u64::from(b.count))
            .sum()
    }

    /// Highest-risk point in the scatter plot, if any.
    pub fn riskiest_cluster(&self) -> Option<&'a ClusterPoint> {
        self.store.behavior_clusters.iter().max_by_key(|p| p.risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_covers_the_full_score_range() {
        let store = FixtureStore::builtin();
        let page = BehaviorPage::new(&store);

        let dist = page.anomaly_distribution();
        assert_eq!(dist.len(), 5);
        assert_eq!(dist[0].range, "0-20");
        assert_eq!(dist[0].label, "Normal");
        assert_eq!(dist[4].range, "80-100");
        assert_eq!(dist[4].count, 89);
        assert_eq!(page.scored_sessions(), 2909);
    }

    #[test]
    fn riskiest_cluster_is_the_top_malicious_point() {
        let store = FixtureStore::builtin();
        let page = BehaviorPage::new(&store);

        assert_eq!(page.clusters().len(), 10);
        let top = page.riskiest_cluster().unwrap();
        assert_eq!(top.cluster, "Malicious");
        assert_eq!(top.risk, 97);
        assert_eq!((top.x, top.y, top.size), (90, 95, 45));
    }
}
