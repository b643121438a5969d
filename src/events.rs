multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("electionCreated")]
    fn election_created_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] admin: &ManagedAddress,
        #[indexed] deadline: u64,
        proposal_names: &ManagedVec<ManagedBuffer>,
    );

    #[event("voterRegistered")]
    fn voter_registered_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] registrar: &ManagedAddress,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_index: u32,
        #[indexed] token_id: u64,
        weight: u64,
    );

    #[event("voteChanged")]
    fn vote_changed_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] from_index: u32,
        #[indexed] to_index: u32,
        weight: u64,
    );

    #[event("voteDelegated")]
    fn vote_delegated_event(
        &self,
        #[indexed] election_id: u64,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        weight: u64,
    );

    #[event("receiptMinted")]
    fn receipt_minted_event(
        &self,
        #[indexed] token_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] election_id: u64,
    );

    #[event("eligibilityChanged")]
    fn eligibility_changed_event(&self, #[indexed] voter: &ManagedAddress, eligible: bool);

    #[event("configChanged")]
    fn config_changed_event(
        &self,
        #[indexed] open_creation: bool,
        #[indexed] winner_after_deadline: bool,
    );
}
