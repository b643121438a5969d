multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{VoterRecord, VoterStatus};
use crate::{
    config, election_directory, events, proposal_ledger, receipt_issuer, voter_registry,
};

// ============================================================
// Voting State Machine
//
// Unregistered -> Registered -> Voted | Delegated
//
// Every check runs before the first storage write, and any failed
// require! reverts the whole call, so a call either applies all of
// its effects or none.
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule:
    config::ConfigModule
    + events::EventsModule
    + proposal_ledger::ProposalLedgerModule
    + voter_registry::VoterRegistryModule
    + receipt_issuer::ReceiptIssuerModule
    + election_directory::ElectionDirectoryModule
{
    // ========================================================
    // ENDPOINT: vote
    // Adds the caller's full weight and mints a receipt.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_index: u32, election_id: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        self.cast_vote(&caller, proposal_index, election_id)
    }

    // ========================================================
    // ENDPOINT: changeVote
    // Moves the caller's weight; allowed any number of times
    // until the deadline. No new receipt.
    // ========================================================

    #[endpoint(changeVote)]
    fn change_vote(&self, new_proposal_index: u32, election_id: u64) {
        let caller = self.blockchain().get_caller();
        self.move_vote(&caller, new_proposal_index, election_id);
    }

    // ========================================================
    // ENDPOINT: delegateVote
    // Hands the caller's weight to the end of `to`'s chain.
    // ========================================================

    #[endpoint(delegateVote)]
    fn delegate_vote(&self, to: ManagedAddress, election_id: u64) {
        let caller = self.blockchain().get_caller();
        self.delegate_weight(&caller, &to, election_id);
    }

    // ========================================================
    // INTERNAL: state transitions
    // ========================================================

    fn cast_vote(&self, voter: &ManagedAddress, proposal_index: u32, election_id: u64) -> u64 {
        self.require_open_election(election_id);

        let mut record = self.voter_record(election_id, voter);
        require!(record.registered, ERR_NOT_REGISTERED);
        require!(!record.has_voted, ERR_ALREADY_VOTED);
        require!(
            self.proposal_exists(election_id, proposal_index),
            ERR_PROPOSAL_OUT_OF_RANGE
        );

        self.add_votes(election_id, proposal_index, record.weight);

        record.has_voted = true;
        record.voted_proposal = Some(proposal_index);
        self.save_voter_record(election_id, voter, &record);
        self.voted_count(election_id).update(|count| *count += 1);

        let token_id = self.mint_receipt(voter, election_id);
        self.vote_cast_event(election_id, voter, proposal_index, token_id, record.weight);

        token_id
    }

    fn move_vote(&self, voter: &ManagedAddress, new_proposal_index: u32, election_id: u64) {
        self.require_open_election(election_id);

        let mut record = self.voter_record(election_id, voter);
        let previous_index = match record.voted_proposal {
            Some(index) if record.has_voted => index,
            _ => sc_panic!(ERR_NO_VOTE_TO_CHANGE),
        };
        require!(
            self.proposal_exists(election_id, new_proposal_index),
            ERR_PROPOSAL_OUT_OF_RANGE
        );

        if previous_index == new_proposal_index {
            return;
        }

        self.remove_votes(election_id, previous_index, record.weight);
        self.add_votes(election_id, new_proposal_index, record.weight);

        record.voted_proposal = Some(new_proposal_index);
        self.save_voter_record(election_id, voter, &record);

        self.vote_changed_event(
            election_id,
            voter,
            previous_index,
            new_proposal_index,
            record.weight,
        );
    }

    fn delegate_weight(&self, delegator: &ManagedAddress, to: &ManagedAddress, election_id: u64) {
        self.require_open_election(election_id);

        let mut record = self.voter_record(election_id, delegator);
        require!(record.registered, ERR_NOT_REGISTERED);
        require!(!record.has_voted, ERR_ALREADY_VOTED);
        require!(
            self.voter_record(election_id, to).registered,
            ERR_DELEGATE_NOT_REGISTERED
        );

        let final_delegate = self.resolve_delegate(election_id, delegator, to);
        let mut delegate_record = self.voter_record(election_id, &final_delegate);
        require!(
            delegate_record.weight <= u64::MAX - record.weight,
            ERR_VOTE_OVERFLOW
        );

        // A delegate that already voted carries the new weight into its
        // chosen proposal right away; its own weight grows either way so a
        // later changeVote moves everything it represents.
        if let Some(index) = delegate_record.voted_proposal {
            self.add_votes(election_id, index, record.weight);
        }
        delegate_record.weight += record.weight;
        self.save_voter_record(election_id, &final_delegate, &delegate_record);

        record.has_voted = true;
        record.delegate = Some(final_delegate.clone());
        self.save_voter_record(election_id, delegator, &record);
        self.voted_count(election_id).update(|count| *count += 1);

        self.vote_delegated_event(election_id, delegator, &final_delegate, record.weight);
    }

    fn require_winner_available(&self, election_id: u64) {
        let election = self.require_election(election_id);
        if self.winner_after_deadline().get() {
            require!(self.deadline_passed(&election), ERR_TOO_EARLY);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalVoteCount)]
    fn get_proposal_vote_count(&self, proposal_index: u32, election_id: u64) -> u64 {
        self.require_election(election_id);
        self.proposal_at(election_id, proposal_index).vote_count
    }

    #[view(hasAddressVoted)]
    fn has_address_voted(&self, voter: &ManagedAddress, election_id: u64) -> bool {
        self.voter_record(election_id, voter).has_voted
    }

    #[view(getVoterInfo)]
    fn get_voter_info(&self, election_id: u64, voter: &ManagedAddress) -> VoterRecord<Self::Api> {
        self.require_election(election_id);
        self.voter_record(election_id, voter)
    }

    #[view(getVoterStatus)]
    fn get_voter_status(&self, election_id: u64, voter: &ManagedAddress) -> VoterStatus {
        self.require_election(election_id);
        self.voter_record(election_id, voter).status()
    }

    #[view(winningProposal)]
    fn winning_proposal(&self, election_id: u64) -> u32 {
        self.require_winner_available(election_id);
        let (index, _) = self.leading_proposal(election_id);
        index
    }

    #[view(winnerName)]
    fn winner_name(&self, election_id: u64) -> ManagedBuffer {
        self.require_winner_available(election_id);
        let (_, proposal) = self.leading_proposal(election_id);
        proposal.name
    }

    /// Sum of all proposal counts in the election.
    #[view(getTotalVotes)]
    fn get_total_votes(&self, election_id: u64) -> u64 {
        self.require_election(election_id);
        self.total_votes(election_id)
    }

    #[view(getVotedCount)]
    fn get_voted_count(&self, election_id: u64) -> u64 {
        self.require_election(election_id);
        self.voted_count(election_id).get()
    }
}
