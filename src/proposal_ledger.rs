multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Proposal;

// ============================================================
// Proposal Ledger
// Proposal indices are 0-based at the API; VecMapper is 1-based.
// ============================================================

#[multiversx_sc::module]
pub trait ProposalLedgerModule {
    fn store_proposals(&self, election_id: u64, names: &ManagedVec<ManagedBuffer>) {
        let mut ledger = self.proposals(election_id);
        for name in names.iter() {
            ledger.push(&Proposal {
                name: name.clone_value(),
                vote_count: 0,
            });
        }
    }

    fn proposal_exists(&self, election_id: u64, index: u32) -> bool {
        (index as usize) < self.proposals(election_id).len()
    }

    fn proposal_at(&self, election_id: u64, index: u32) -> Proposal<Self::Api> {
        require!(
            self.proposal_exists(election_id, index),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(election_id).get(index as usize + 1)
    }

    fn add_votes(&self, election_id: u64, index: u32, weight: u64) {
        let mut proposal = self.proposal_at(election_id, index);
        require!(
            proposal.vote_count <= u64::MAX - weight,
            ERR_VOTE_OVERFLOW
        );
        proposal.vote_count += weight;
        self.proposals(election_id)
            .set(index as usize + 1, &proposal);
    }

    fn remove_votes(&self, election_id: u64, index: u32, weight: u64) {
        let mut proposal = self.proposal_at(election_id, index);
        require!(proposal.vote_count >= weight, ERR_VOTE_UNDERFLOW);
        proposal.vote_count -= weight;
        self.proposals(election_id)
            .set(index as usize + 1, &proposal);
    }

    /// First proposal holding the maximum count. Ties go to the lowest index.
    fn leading_proposal(&self, election_id: u64) -> (u32, Proposal<Self::Api>) {
        let mut leader: Option<(u32, Proposal<Self::Api>)> = None;
        for (i, proposal) in self.proposals(election_id).iter().enumerate() {
            let ahead = match &leader {
                Some((_, best)) => proposal.vote_count > best.vote_count,
                None => true,
            };
            if ahead {
                leader = Some((i as u32, proposal));
            }
        }
        match leader {
            Some(found) => found,
            None => sc_panic!(ERR_PROPOSAL_NOT_FOUND),
        }
    }

    fn total_votes(&self, election_id: u64) -> u64 {
        self.proposals(election_id)
            .iter()
            .fold(0u64, |sum, proposal| sum.saturating_add(proposal.vote_count))
    }

    // ── Storage ──

    #[storage_mapper("proposals")]
    fn proposals(&self, election_id: u64) -> VecMapper<Proposal<Self::Api>>;
}
