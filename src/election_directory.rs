multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Election, Proposal};
use crate::{config, events, proposal_ledger, voter_registry};

// ============================================================
// Election Directory
// Creates elections and routes registration to the right roster.
// ============================================================

#[multiversx_sc::module]
pub trait ElectionDirectoryModule:
    config::ConfigModule
    + events::EventsModule
    + proposal_ledger::ProposalLedgerModule
    + voter_registry::VoterRegistryModule
{
    // ========================================================
    // ENDPOINT: createElection
    // Owner-only unless creation has been opened up.
    // ========================================================

    #[endpoint(createElection)]
    fn create_election(
        &self,
        deadline: u64,
        proposal_names: MultiValueEncoded<ManagedBuffer>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.open_election(&caller, deadline, proposal_names)
    }

    // ========================================================
    // ENDPOINT: registerToVote
    // Election admin enrols an address.
    // ========================================================

    #[endpoint(registerToVote)]
    fn register_to_vote(&self, voter: ManagedAddress, election_id: u64) {
        let caller = self.blockchain().get_caller();
        let election = self.require_open_election(election_id);
        require!(caller == election.admin, ERR_NOT_ELECTION_ADMIN);

        self.enroll(election_id, &voter);
        self.voter_registered_event(election_id, &voter, &caller);
    }

    // ========================================================
    // ENDPOINT: registerForElection
    // Self-enrolment for addresses on the eligibility roster.
    // ========================================================

    #[endpoint(registerForElection)]
    fn register_for_election(&self, election_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_open_election(election_id);
        require!(self.eligible_voters().contains(&caller), ERR_NOT_ELIGIBLE);

        self.enroll(election_id, &caller);
        self.voter_registered_event(election_id, &caller, &caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn open_election(
        &self,
        creator: &ManagedAddress,
        deadline: u64,
        proposal_names: MultiValueEncoded<ManagedBuffer>,
    ) -> u64 {
        require!(
            self.open_creation().get() || *creator == self.blockchain().get_owner_address(),
            ERR_UNAUTHORIZED
        );

        let now = self.blockchain().get_block_timestamp();
        require!(deadline > now, ERR_DEADLINE_NOT_IN_FUTURE);

        let mut names = ManagedVec::new();
        for name in proposal_names {
            require!(!name.is_empty(), ERR_EMPTY_PROPOSAL_NAME);
            names.push(name);
        }
        require!(!names.is_empty(), ERR_NO_PROPOSALS);

        let election_id = self.election_count().get() + 1;
        let election = Election {
            id: election_id,
            admin: creator.clone(),
            deadline,
            created_at: now,
            proposal_count: names.len() as u32,
        };

        self.elections(election_id).set(&election);
        self.election_count().set(election_id);
        self.store_proposals(election_id, &names);

        self.election_created_event(election_id, creator, deadline, &names);

        // The creator takes part in their own election.
        self.enroll(election_id, creator);
        self.voter_registered_event(election_id, creator, creator);

        election_id
    }

    fn require_election(&self, election_id: u64) -> Election<Self::Api> {
        require!(
            !self.elections(election_id).is_empty(),
            ERR_ELECTION_NOT_FOUND
        );
        self.elections(election_id).get()
    }

    fn require_open_election(&self, election_id: u64) -> Election<Self::Api> {
        let election = self.require_election(election_id);
        require!(
            !self.deadline_passed(&election),
            ERR_DEADLINE_PASSED
        );
        election
    }

    fn deadline_passed(&self, election: &Election<Self::Api>) -> bool {
        self.blockchain().get_block_timestamp() > election.deadline
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getElection)]
    fn get_election(&self, election_id: u64) -> Election<Self::Api> {
        self.require_election(election_id)
    }

    #[view(getElectionCount)]
    fn get_election_count(&self) -> u64 {
        self.election_count().get()
    }

    #[view(isElectionOpen)]
    fn is_election_open(&self, election_id: u64) -> bool {
        let election = self.require_election(election_id);
        !self.deadline_passed(&election)
    }

    #[view(getProposals)]
    fn get_proposals(&self, election_id: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        self.require_election(election_id);
        let mut result = MultiValueEncoded::new();
        for proposal in self.proposals(election_id).iter() {
            result.push(proposal);
        }
        result
    }

    #[view(getVoterCount)]
    fn get_voter_count(&self, election_id: u64) -> u64 {
        self.require_election(election_id);
        self.registered_voters(election_id).len() as u64
    }

    #[view(getRegisteredVoters)]
    fn get_registered_voters(&self, election_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_election(election_id);
        let mut result = MultiValueEncoded::new();
        for voter in self.registered_voters(election_id).iter() {
            result.push(voter);
        }
        result
    }

    // ── Storage ──

    #[storage_mapper("electionCount")]
    fn election_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("elections")]
    fn elections(&self, election_id: u64) -> SingleValueMapper<Election<Self::Api>>;
}
