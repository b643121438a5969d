multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Election — directory entry, one per election id
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Election<M: ManagedTypeApi> {
    pub id: u64,
    /// Creator of the election. Only this address may register voters.
    pub admin: ManagedAddress<M>,
    /// Last block timestamp (inclusive) at which votes are accepted
    pub deadline: u64,
    pub created_at: u64,
    pub proposal_count: u32,
}

// ============================================================
// Proposal — a named option accumulating weighted votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub vote_count: u64,
}

// ============================================================
// Voter Record — voting rights of one address in one election
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoterRecord<M: ManagedTypeApi> {
    pub registered: bool,
    /// Own vote plus every weight delegated to this address
    pub weight: u64,
    /// Set on a direct vote and on delegation
    pub has_voted: bool,
    /// Final delegate this address handed its weight to
    pub delegate: Option<ManagedAddress<M>>,
    /// Present only for direct votes
    pub voted_proposal: Option<u32>,
}

impl<M: ManagedTypeApi> VoterRecord<M> {
    pub fn unregistered() -> Self {
        VoterRecord {
            registered: false,
            weight: 0,
            has_voted: false,
            delegate: None,
            voted_proposal: None,
        }
    }

    pub fn registered() -> Self {
        VoterRecord {
            registered: true,
            weight: 1,
            has_voted: false,
            delegate: None,
            voted_proposal: None,
        }
    }

    pub fn status(&self) -> VoterStatus {
        if !self.registered {
            VoterStatus::Unregistered
        } else if self.delegate.is_some() {
            VoterStatus::Delegated
        } else if self.has_voted {
            VoterStatus::Voted
        } else {
            VoterStatus::Registered
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoterStatus {
    Unregistered,
    /// May vote or delegate.
    Registered,
    /// Voted directly. Only `changeVote` is still allowed.
    Voted,
    /// Weight handed to a delegate. Terminal.
    Delegated,
}

// ============================================================
// Receipt — non-fungible proof of participation
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Receipt<M: ManagedTypeApi> {
    pub token_id: u64,
    pub owner: ManagedAddress<M>,
    pub election_id: u64,
    pub minted_at: u64,
}
