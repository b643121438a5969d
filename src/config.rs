multiversx_sc::imports!();

use crate::events;

// ============================================================
// Deploy-time policy and the contract-wide eligibility roster
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule: events::EventsModule {
    #[only_owner]
    #[endpoint(setOpenCreation)]
    fn set_open_creation(&self, open_creation: bool) {
        self.open_creation().set(open_creation);
        self.config_changed_event(open_creation, self.winner_after_deadline().get());
    }

    /// When enabled, `winnerName` refuses to answer before the deadline.
    #[only_owner]
    #[endpoint(setWinnerAfterDeadline)]
    fn set_winner_after_deadline(&self, winner_after_deadline: bool) {
        self.winner_after_deadline().set(winner_after_deadline);
        self.config_changed_event(self.open_creation().get(), winner_after_deadline);
    }

    #[only_owner]
    #[endpoint(addEligibleVoters)]
    fn add_eligible_voters(&self, voters: MultiValueEncoded<ManagedAddress>) {
        for voter in voters {
            if self.eligible_voters().insert(voter.clone()) {
                self.eligibility_changed_event(&voter, true);
            }
        }
    }

    #[only_owner]
    #[endpoint(removeEligibleVoters)]
    fn remove_eligible_voters(&self, voters: MultiValueEncoded<ManagedAddress>) {
        for voter in voters {
            if self.eligible_voters().swap_remove(&voter) {
                self.eligibility_changed_event(&voter, false);
            }
        }
    }

    // ── Views ──

    #[view(isEligible)]
    fn is_eligible(&self, voter: &ManagedAddress) -> bool {
        self.eligible_voters().contains(voter)
    }

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue2<bool, bool> {
        (self.open_creation().get(), self.winner_after_deadline().get()).into()
    }

    // ── Storage ──

    #[storage_mapper("openCreation")]
    fn open_creation(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("winnerAfterDeadline")]
    fn winner_after_deadline(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("eligibleVoters")]
    fn eligible_voters(&self) -> UnorderedSetMapper<ManagedAddress>;
}
