multiversx_sc::imports!();

use crate::errors::*;
use crate::types::VoterRecord;

// ============================================================
// Voter Registry
// One record per (election, address) plus the election roster.
// ============================================================

#[multiversx_sc::module]
pub trait VoterRegistryModule {
    fn voter_record(&self, election_id: u64, voter: &ManagedAddress) -> VoterRecord<Self::Api> {
        let mapper = self.voters(election_id, voter);
        if mapper.is_empty() {
            VoterRecord::unregistered()
        } else {
            mapper.get()
        }
    }

    fn save_voter_record(
        &self,
        election_id: u64,
        voter: &ManagedAddress,
        record: &VoterRecord<Self::Api>,
    ) {
        self.voters(election_id, voter).set(record);
    }

    fn enroll(&self, election_id: u64, voter: &ManagedAddress) {
        require!(
            !self.voter_record(election_id, voter).registered,
            ERR_ALREADY_REGISTERED
        );
        self.save_voter_record(election_id, voter, &VoterRecord::registered());
        self.registered_voters(election_id).insert(voter.clone());
    }

    /// Walks the delegate chain starting at `to` and returns its end.
    ///
    /// Chains only ever point at addresses that had not delegated at the time,
    /// so the only reachable cycle is one leading back to `delegator`. The
    /// walk is additionally capped at the roster size.
    fn resolve_delegate(
        &self,
        election_id: u64,
        delegator: &ManagedAddress,
        to: &ManagedAddress,
    ) -> ManagedAddress {
        require!(to != delegator, ERR_SELF_DELEGATION);

        let max_hops = self.registered_voters(election_id).len();
        let mut current = to.clone();
        let mut hops = 0usize;
        while let Some(next) = self.voter_record(election_id, &current).delegate {
            require!(&next != delegator, ERR_DELEGATION_CYCLE);
            hops += 1;
            require!(hops <= max_hops, ERR_DELEGATION_CYCLE);
            current = next;
        }
        current
    }

    // ── Storage ──

    #[storage_mapper("voters")]
    fn voters(
        &self,
        election_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoterRecord<Self::Api>>;

    #[storage_mapper("registeredVoters")]
    fn registered_voters(&self, election_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    /// Addresses with `has_voted` set, direct or delegated
    #[storage_mapper("votedCount")]
    fn voted_count(&self, election_id: u64) -> SingleValueMapper<u64>;
}
