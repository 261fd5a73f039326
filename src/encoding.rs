//! Share-link codec for completed guesses.
//!
//! Each guess travels as `<kind><index><party>`: a one-character kind
//! prefix (`d` deputy, `p` project), the record's roster position in
//! base 36, and the one-character code of the guessed party. Tokens are
//! joined with `-`. Decoding is best effort: a token that no longer
//! resolves against the current rosters is dropped, never an error, so
//! links keep working (partially) across roster updates.

use serde::{Deserialize, Serialize};

use crate::parties::{Bloc, Party};
use crate::roster::Rosters;

const TOKEN_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuessKind {
    #[default]
    #[serde(rename = "deputy")]
    Deputy,
    #[serde(rename = "project")]
    Project,
}

impl GuessKind {
    fn prefix(self) -> char {
        match self {
            GuessKind::Deputy => 'd',
            GuessKind::Project => 'p',
        }
    }

    fn from_prefix(prefix: char) -> Option<GuessKind> {
        match prefix {
            'd' => Some(GuessKind::Deputy),
            'p' => Some(GuessKind::Project),
            _ => None,
        }
    }
}

/// One completed round: what the card actually was and what the player
/// guessed. Immutable once created; the correctness flags are fixed at
/// construction and `bloc` always equals `party.bloc()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub id: String,
    pub name: String,
    // Pre-proposal versions stored guesses without a kind field.
    #[serde(default)]
    pub kind: GuessKind,
    pub party: Party,
    pub bloc: Bloc,
    #[serde(rename = "blocGuess")]
    pub bloc_guess: Bloc,
    #[serde(rename = "partyGuess")]
    pub party_guess: Party,
    #[serde(rename = "isBlocCorrect")]
    pub is_bloc_correct: bool,
    #[serde(rename = "isPartyCorrect")]
    pub is_party_correct: bool,
}

impl Guess {
    pub fn new(
        id: String,
        name: String,
        kind: GuessKind,
        party: Party,
        bloc_guess: Bloc,
        party_guess: Party,
    ) -> Guess {
        let bloc = party.bloc();
        Guess {
            id,
            name,
            kind,
            party,
            bloc,
            bloc_guess,
            party_guess,
            is_bloc_correct: bloc == bloc_guess,
            is_party_correct: party == party_guess,
        }
    }
}

/// Serialize guesses into a token string for a share URL.
///
/// Order-preserving; guesses whose id is no longer in the applicable
/// roster are dropped. Empty input yields an empty string.
pub fn encode_guesses(guesses: &[Guess], rosters: &Rosters) -> String {
    let tokens: Vec<String> = guesses
        .iter()
        .filter_map(|guess| {
            let index = match guess.kind {
                GuessKind::Deputy => rosters.deputy_index(&guess.id),
                GuessKind::Project => rosters.proposal_index(&guess.id),
            }?;
            Some(format!(
                "{}{}{}",
                guess.kind.prefix(),
                to_base36(index),
                guess.party_guess.code()
            ))
        })
        .collect();
    tokens.join(&TOKEN_SEPARATOR.to_string())
}

/// Reconstruct guesses from a token string against the current rosters.
///
/// Malformed or unresolvable tokens are skipped. Blocs and correctness
/// flags are recomputed here from the party registry; the wire format
/// carries neither and embedded values would not be trusted anyway.
pub fn decode_guesses(encoded: &str, rosters: &Rosters) -> Vec<Guess> {
    encoded
        .split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .filter_map(|token| decode_token(token, rosters))
        .collect()
}

fn decode_token(token: &str, rosters: &Rosters) -> Option<Guess> {
    let (head, party_char) = split_last_char(token)?;

    // Legacy links predate proposals and carry no kind prefix; anything
    // not starting with a known prefix is an unprefixed deputy index.
    let (kind, index_str) = match head.chars().next().and_then(GuessKind::from_prefix) {
        Some(kind) => (kind, &head[1..]),
        None => (GuessKind::Deputy, head),
    };

    let index = from_base36(index_str)?;
    let party_guess = Party::from_code(party_char)?;
    let bloc_guess = party_guess.bloc();

    match kind {
        GuessKind::Deputy => {
            let deputy = rosters.deputies.get(index)?;
            Some(Guess::new(
                deputy.id.clone(),
                deputy.name.clone(),
                kind,
                deputy.party,
                bloc_guess,
                party_guess,
            ))
        }
        GuessKind::Project => {
            let proposal = rosters.proposals.get(index)?;
            Some(Guess::new(
                proposal.id.clone(),
                proposal.title.clone(),
                kind,
                proposal.party,
                bloc_guess,
                party_guess,
            ))
        }
    }
}

fn split_last_char(token: &str) -> Option<(&str, char)> {
    let (index, last) = token.char_indices().last()?;
    Some((&token[..index], last))
}

fn to_base36(mut value: usize) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let digit = (value % 36) as u32;
        digits.push(char::from_digit(digit, 36).unwrap_or('0'));
        value /= 36;
    }
    digits.iter().rev().collect()
}

fn from_base36(digits: &str) -> Option<usize> {
    usize::from_str_radix(digits, 36).ok()
}
