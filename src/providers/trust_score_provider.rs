use std::collections::HashMap;

use crate::stores::seed;
use crate::types::dto::trust::TrustScore;

/// Read-only lookup of reputation records, keyed by user id
///
/// The records are static; scores are not computed from request history
/// in this version.
pub struct TrustScoreProvider {
    scores: HashMap<String, TrustScore>,
}

impl TrustScoreProvider {
    pub fn new(records: Vec<TrustScore>) -> Self {
        Self {
            scores: records
                .into_iter()
                .map(|score| (score.user_id.clone(), score))
                .collect(),
        }
    }

    /// Create a provider holding the seed records
    pub fn seeded() -> Self {
        Self::new(seed::trust_scores())
    }

    /// Trust score for the given user, if one is recorded
    pub fn get(&self, user_id: &str) -> Option<TrustScore> {
        self.scores.get(user_id).cloned()
    }
}
