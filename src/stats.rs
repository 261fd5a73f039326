use crate::encoding::Guess;
use crate::parties::{Party, PARTY_ORDER};

/// Aggregate score for a list of completed guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub bloc_correct: usize,
    pub party_correct: usize,
}

impl Summary {
    pub fn from_guesses(guesses: &[Guess]) -> Summary {
        Summary {
            total: guesses.len(),
            bloc_correct: guesses.iter().filter(|g| g.is_bloc_correct).count(),
            party_correct: guesses.iter().filter(|g| g.is_party_correct).count(),
        }
    }

    /// Party-level accuracy, rounded to whole percent. 0 when nothing
    /// has been played yet.
    pub fn accuracy_percent(&self) -> u32 {
        percent(self.party_correct, self.total)
    }

    pub fn bloc_accuracy_percent(&self) -> u32 {
        percent(self.bloc_correct, self.total)
    }
}

/// How often a party was guessed, and how often that guess was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyAccuracy {
    pub party: Party,
    pub guessed: usize,
    pub correct: usize,
}

impl PartyAccuracy {
    pub fn accuracy_percent(&self) -> u32 {
        percent(self.correct, self.guessed)
    }
}

/// Per-party breakdown in picker order, parties never guessed omitted.
pub fn per_party(guesses: &[Guess]) -> Vec<PartyAccuracy> {
    PARTY_ORDER
        .iter()
        .filter_map(|&party| {
            let guessed = guesses.iter().filter(|g| g.party_guess == party).count();
            if guessed == 0 {
                return None;
            }
            let correct = guesses
                .iter()
                .filter(|g| g.party_guess == party && g.is_party_correct)
                .count();
            Some(PartyAccuracy {
                party,
                guessed,
                correct,
            })
        })
        .collect()
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::GuessKind;

    fn guess(party: Party, party_guess: Party) -> Guess {
        Guess::new(
            "id".to_owned(),
            "name".to_owned(),
            GuessKind::Deputy,
            party,
            party_guess.bloc(),
            party_guess,
        )
    }

    #[test]
    fn summary_counts_and_rounds() {
        let guesses = vec![
            guess(Party::Ps, Party::Ps),   // party + bloc correct
            guess(Party::Ps, Party::Be),   // bloc correct only
            guess(Party::Psd, Party::Ps),  // both wrong
        ];
        let summary = Summary::from_guesses(&guesses);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.bloc_correct, 2);
        assert_eq!(summary.party_correct, 1);
        assert_eq!(summary.accuracy_percent(), 33);
        assert_eq!(summary.bloc_accuracy_percent(), 67);
    }

    #[test]
    fn empty_summary_is_all_zero() {
        let summary = Summary::from_guesses(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.accuracy_percent(), 0);
    }

    #[test]
    fn per_party_skips_unguessed_parties() {
        let guesses = vec![
            guess(Party::Ps, Party::Ps),
            guess(Party::Be, Party::Ps),
            guess(Party::Ch, Party::Ch),
        ];
        let breakdown = per_party(&guesses);
        assert_eq!(breakdown.len(), 2);

        let ps = breakdown.iter().find(|b| b.party == Party::Ps).unwrap();
        assert_eq!(ps.guessed, 2);
        assert_eq!(ps.correct, 1);
        assert_eq!(ps.accuracy_percent(), 50);

        assert!(breakdown.iter().all(|b| b.party != Party::Pan));
    }

    #[test]
    fn bloc_consistency_holds_for_constructed_guesses() {
        for party in crate::parties::ALL_PARTIES {
            for guessed in crate::parties::ALL_PARTIES {
                let g = guess(party, guessed);
                assert_eq!(g.is_bloc_correct, g.bloc == g.bloc_guess);
                assert_eq!(g.bloc, g.party.bloc());
            }
        }
    }
}
