#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod election_directory;
pub mod errors;
pub mod events;
pub mod proposal_ledger;
pub mod receipt_issuer;
pub mod types;
pub mod voter_registry;
pub mod voting;

// ============================================================
// Contract
//
// Multi-election engine. Every election owns its proposal
// ledger and voter roster; state is keyed by election id.
// ============================================================

#[multiversx_sc::contract]
pub trait Elections:
    config::ConfigModule
    + events::EventsModule
    + proposal_ledger::ProposalLedgerModule
    + voter_registry::VoterRegistryModule
    + receipt_issuer::ReceiptIssuerModule
    + election_directory::ElectionDirectoryModule
    + voting::VotingModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `open_creation`: anyone may create elections (otherwise owner only).
    /// `winner_after_deadline`: winner views fail until the deadline passes.
    #[init]
    fn init(&self, open_creation: bool, winner_after_deadline: bool) {
        self.open_creation().set(open_creation);
        self.winner_after_deadline().set(winner_after_deadline);
        self.election_count().set(0u64);
        self.last_receipt_id().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
