//! Ordering of assembled candidates by criterion score

use super::assemble::RouteCandidate;
use super::criteria::Criterion;

/// Stable descending sort by the chosen criterion's score.
///
/// Candidates with equal scores keep their enumeration order. A candidate
/// without a score for the criterion counts as 0; assembled routes always
/// carry every score, but the contract tolerates hand-built ones that don't.
/// `total_cmp` keeps the order total even for non-finite scores.
pub fn rank_routes(routes: &mut [RouteCandidate], criterion: Criterion) {
    routes.sort_by(|a, b| {
        let score_a = a.scores.get(&criterion).copied().unwrap_or(0.0);
        let score_b = b.scores.get(&criterion).copied().unwrap_or(0.0);
        score_b.total_cmp(&score_a)
    });
}
