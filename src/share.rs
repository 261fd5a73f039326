//! Share-URL query contract.
//!
//! A results link carries `score`, `total` and `accuracy` for display,
//! plus `g` (deputy tokens) and `pg` (proposal tokens) so the receiving
//! page can rebuild the full results view with no local state. Parsing
//! is best effort throughout: absent, empty or mangled parameters
//! degrade to nothing, never to an error.

use crate::encoding::{decode_guesses, encode_guesses, Guess};
use crate::roster::Rosters;
use crate::stats::Summary;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareParams {
    pub score: Option<u32>,
    pub total: Option<u32>,
    pub accuracy: Option<u32>,
    pub deputy_guesses: Vec<Guess>,
    pub project_guesses: Vec<Guess>,
}

impl ShareParams {
    /// Whether the URL carried someone's results at all.
    pub fn has_results(&self) -> bool {
        !self.deputy_guesses.is_empty() || !self.project_guesses.is_empty() || self.score.is_some()
    }

    pub fn all_guesses(&self) -> Vec<Guess> {
        let mut all = self.deputy_guesses.clone();
        all.extend(self.project_guesses.iter().cloned());
        all
    }
}

/// Build the query string for a share link from the player's guesses.
pub fn build_share_query(
    deputy_guesses: &[Guess],
    project_guesses: &[Guess],
    rosters: &Rosters,
) -> String {
    let mut combined = deputy_guesses.to_vec();
    combined.extend(project_guesses.iter().cloned());
    let summary = Summary::from_guesses(&combined);

    let mut query = format!(
        "score={}&total={}&accuracy={}",
        summary.party_correct,
        summary.total,
        summary.accuracy_percent()
    );

    let deputy_tokens = encode_guesses(deputy_guesses, rosters);
    if !deputy_tokens.is_empty() {
        query.push_str("&g=");
        query.push_str(&deputy_tokens);
    }
    let project_tokens = encode_guesses(project_guesses, rosters);
    if !project_tokens.is_empty() {
        query.push_str("&pg=");
        query.push_str(&project_tokens);
    }

    query
}

/// Parse a query string (with or without the leading `?`) back into
/// share parameters, resolving tokens against the current rosters.
pub fn parse_share_query(query: &str, rosters: &Rosters) -> ShareParams {
    let mut params = ShareParams::default();

    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "score" => params.score = value.parse().ok(),
            "total" => params.total = value.parse().ok(),
            "accuracy" => params.accuracy = value.parse().ok(),
            "g" => params.deputy_guesses = decode_guesses(value, rosters),
            "pg" => params.project_guesses = decode_guesses(value, rosters),
            _ => {}
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::GuessKind;
    use crate::parties::Party;
    use crate::roster::tests::sample_rosters;

    fn guesses_from(rosters: &Rosters) -> (Vec<Guess>, Vec<Guess>) {
        let deputy = &rosters.deputies[2];
        let proposal = &rosters.proposals[1];
        let deputies = vec![Guess::new(
            deputy.id.clone(),
            deputy.name.clone(),
            GuessKind::Deputy,
            deputy.party,
            Party::Ch.bloc(),
            Party::Ch,
        )];
        let projects = vec![Guess::new(
            proposal.id.clone(),
            proposal.title.clone(),
            GuessKind::Project,
            proposal.party,
            Party::Ps.bloc(),
            Party::Ps,
        )];
        (deputies, projects)
    }

    #[test]
    fn query_round_trip() {
        let rosters = sample_rosters();
        let (deputies, projects) = guesses_from(&rosters);

        let query = build_share_query(&deputies, &projects, &rosters);
        assert_eq!(query, "score=1&total=2&accuracy=50&g=d2c&pg=p1a");

        let params = parse_share_query(&query, &rosters);
        assert!(params.has_results());
        assert_eq!(params.score, Some(1));
        assert_eq!(params.total, Some(2));
        assert_eq!(params.accuracy, Some(50));
        assert_eq!(params.deputy_guesses, deputies);
        assert_eq!(params.project_guesses, projects);
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        let rosters = sample_rosters();
        let params = parse_share_query("?score=3&total=5", &rosters);
        assert_eq!(params.score, Some(3));
        assert_eq!(params.total, Some(5));
        assert!(params.has_results());
    }

    #[test]
    fn empty_or_foreign_queries_carry_nothing() {
        let rosters = sample_rosters();
        for query in ["", "?", "utm_source=share&ref=results", "g=&pg="] {
            let params = parse_share_query(query, &rosters);
            assert!(!params.has_results(), "query {query:?}");
        }
    }

    #[test]
    fn malformed_values_degrade_individually() {
        let rosters = sample_rosters();
        let params = parse_share_query("score=abc&total=4&g=d1b-junk!&pg=zz", &rosters);
        assert_eq!(params.score, None);
        assert_eq!(params.total, Some(4));
        assert_eq!(params.deputy_guesses.len(), 1);
        assert!(params.project_guesses.is_empty());
    }

    #[test]
    fn guesses_without_tokens_omit_the_parameters() {
        let rosters = sample_rosters();
        let query = build_share_query(&[], &[], &rosters);
        assert_eq!(query, "score=0&total=0&accuracy=0");
        assert!(!query.contains("&g="));
    }
}
