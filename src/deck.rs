use rand::Rng;

use crate::encoding::GuessKind;
use crate::parties::Party;
use crate::roster::{Deputy, Proposal, Rosters};
use crate::shuffle::shuffle;

/// A proposal card is inserted after every this-many deputy cards.
pub const PROPOSAL_INTERVAL: usize = 3;

/// One card in a play session, tagged by the roster it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    Deputy(Deputy),
    Proposal(Proposal),
}

impl Card {
    pub fn id(&self) -> &str {
        match self {
            Card::Deputy(deputy) => &deputy.id,
            Card::Proposal(proposal) => &proposal.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Card::Deputy(deputy) => &deputy.name,
            Card::Proposal(proposal) => &proposal.title,
        }
    }

    pub fn party(&self) -> Party {
        match self {
            Card::Deputy(deputy) => deputy.party,
            Card::Proposal(proposal) => proposal.party,
        }
    }

    pub fn kind(&self) -> GuessKind {
        match self {
            Card::Deputy(_) => GuessKind::Deputy,
            Card::Proposal(_) => GuessKind::Project,
        }
    }
}

/// Draw a fresh session seed. The one place the platform RNG is used;
/// every ordering decision after this point is a pure function of the
/// returned value.
pub fn draw_seed() -> i64 {
    rand::thread_rng().gen()
}

/// Compose the session deck for `seed`.
///
/// Deputies are shuffled with `seed`, proposals with `seed + 1` so both
/// orders derive from the single persisted value without mirroring each
/// other. Proposals are interleaved after every third deputy until they
/// run out; deputies always continue to the end. Total length is
/// `|deputies| + min(|proposals|, |deputies| / 3)`.
pub fn build_deck(rosters: &Rosters, seed: i64) -> Vec<Card> {
    let deputies = shuffle(&rosters.deputies, seed);
    let proposals = shuffle(&rosters.proposals, seed.wrapping_add(1));

    let mut deck = Vec::with_capacity(deputies.len() + proposals.len());
    let mut proposals = proposals.into_iter();

    for (position, deputy) in deputies.into_iter().enumerate() {
        deck.push(Card::Deputy(deputy));
        if (position + 1) % PROPOSAL_INTERVAL == 0 {
            if let Some(proposal) = proposals.next() {
                deck.push(Card::Proposal(proposal));
            }
        }
    }

    deck
}
