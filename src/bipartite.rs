//! Bipartite stable matching (Gale–Shapley), independent of [`Graph`](crate::graph::Graph).

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// The result of [`stable_marriage`]: a bidirectional mapping between
/// matched proposers and receivers.
///
/// Storage is opaque `mate` lookup tables behind a symmetric accessor, kept
/// per-side so the proposer of a pair can still be told apart from the
/// receiver once matching is done.
#[derive(Debug, Clone)]
pub struct StableMatching<Id> {
    proposer_to_receiver: HashMap<Id, Id>,
    receiver_to_proposer: HashMap<Id, Id>,
}

impl<Id> StableMatching<Id>
where
    Id: Clone + Eq + Hash,
{
    /// The partner matched to `id`, if any. Symmetric:
    /// `get_partner(a) == Some(b)` iff `get_partner(b) == Some(a)`.
    pub fn get_partner(&self, id: &Id) -> Option<&Id> {
        self.proposer_to_receiver
            .get(id)
            .or_else(|| self.receiver_to_proposer.get(id))
    }

    /// Every matched pair, each once, proposer side first.
    pub fn pairs(&self) -> impl Iterator<Item = (&Id, &Id)> {
        self.proposer_to_receiver.iter()
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.proposer_to_receiver.len()
    }

    /// Whether no pair was matched.
    pub fn is_empty(&self) -> bool {
        self.proposer_to_receiver.is_empty()
    }
}

/// Compute a stable matching between `proposer_prefs` and `receiver_prefs`
/// via Gale–Shapley. Each map takes an id to its preference list, most
/// preferred first. The two id universes are disjoint but this isn't
/// enforced.
///
/// The result is stable (no blocking pair) and proposer-optimal (every
/// proposer gets the best partner achievable in any stable matching). A
/// proposer or receiver whose preferences are empty, or entirely rejected,
/// is left unmatched.
pub fn stable_marriage<Id>(
    proposer_prefs: &HashMap<Id, Vec<Id>>,
    receiver_prefs: &HashMap<Id, Vec<Id>>,
) -> StableMatching<Id>
where
    Id: Clone + Eq + Hash,
{
    // Rank tables let us compare preference without O(n) scans per proposal.
    let receiver_rank: HashMap<&Id, HashMap<&Id, usize>> = receiver_prefs
        .iter()
        .map(|(receiver, prefs)| {
            let ranks = prefs.iter().enumerate().map(|(i, p)| (p, i)).collect();
            (receiver, ranks)
        })
        .collect();

    let mut next_proposal: HashMap<Id, usize> = HashMap::new();
    let mut free: VecDeque<Id> = VecDeque::new();
    for proposer in proposer_prefs.keys() {
        next_proposal.insert(proposer.clone(), 0);
        free.push_back(proposer.clone());
    }

    let mut proposer_mate: HashMap<Id, Id> = HashMap::new();
    let mut receiver_mate: HashMap<Id, Id> = HashMap::new();

    while let Some(proposer) = free.pop_front() {
        let prefs = match proposer_prefs.get(&proposer) {
            Some(prefs) => prefs,
            None => continue,
        };
        let cursor = next_proposal.get_mut(&proposer).unwrap();
        if *cursor >= prefs.len() {
            continue; // exhausted preferences, stays unmatched
        }
        let receiver = prefs[*cursor].clone();
        *cursor += 1;

        let ranks = receiver_rank.get(&receiver);
        let proposer_rank = ranks.and_then(|r| r.get(&proposer).copied());
        let proposer_rank = match proposer_rank {
            Some(rank) => rank,
            None => {
                // Receiver didn't list this proposer at all: rejected.
                free.push_back(proposer);
                continue;
            }
        };

        match receiver_mate.get(&receiver).cloned() {
            None => {
                proposer_mate.insert(proposer.clone(), receiver.clone());
                receiver_mate.insert(receiver, proposer);
            }
            Some(current_partner) => {
                let current_rank = ranks.and_then(|r| r.get(&current_partner).copied());
                let replace = match current_rank {
                    Some(current_rank) => proposer_rank < current_rank,
                    None => true,
                };
                if replace {
                    proposer_mate.remove(&current_partner);
                    proposer_mate.insert(proposer.clone(), receiver.clone());
                    receiver_mate.insert(receiver, proposer);
                    free.push_back(current_partner);
                } else {
                    free.push_back(proposer);
                }
            }
        }
    }

    let receiver_to_proposer = proposer_mate
        .iter()
        .map(|(p, r)| (r.clone(), p.clone()))
        .collect();
    StableMatching {
        proposer_to_receiver: proposer_mate,
        receiver_to_proposer,
    }
}
