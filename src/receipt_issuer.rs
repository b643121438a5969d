multiversx_sc::imports!();

use crate::errors::*;
use crate::events;
use crate::types::Receipt;

// ============================================================
// Receipt Token Issuer
// Non-fungible, non-transferable proof of participation.
// ============================================================

#[multiversx_sc::module]
pub trait ReceiptIssuerModule: events::EventsModule {
    fn mint_receipt(&self, owner: &ManagedAddress, election_id: u64) -> u64 {
        let token_id = self.last_receipt_id().get() + 1;
        let receipt = Receipt {
            token_id,
            owner: owner.clone(),
            election_id,
            minted_at: self.blockchain().get_block_timestamp(),
        };

        self.receipts(token_id).set(&receipt);
        self.last_receipt_id().set(token_id);
        self.receipt_of(election_id, owner).set(token_id);
        self.receipts_owned(owner).insert(token_id);

        self.receipt_minted_event(token_id, owner, election_id);
        token_id
    }

    // ── Views ──

    #[view(getReceipt)]
    fn get_receipt(&self, token_id: u64) -> Receipt<Self::Api> {
        require!(!self.receipts(token_id).is_empty(), ERR_RECEIPT_NOT_FOUND);
        self.receipts(token_id).get()
    }

    #[view(getReceiptOf)]
    fn get_receipt_of(&self, election_id: u64, owner: &ManagedAddress) -> Option<u64> {
        let mapper = self.receipt_of(election_id, owner);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(getReceiptsOf)]
    fn get_receipts_of(&self, owner: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for token_id in self.receipts_owned(owner).iter() {
            result.push(token_id);
        }
        result
    }

    #[view(getReceiptCount)]
    fn get_receipt_count(&self) -> u64 {
        self.last_receipt_id().get()
    }

    // ── Storage ──

    #[storage_mapper("lastReceiptId")]
    fn last_receipt_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("receipts")]
    fn receipts(&self, token_id: u64) -> SingleValueMapper<Receipt<Self::Api>>;

    #[storage_mapper("receiptOf")]
    fn receipt_of(&self, election_id: u64, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("receiptsOwned")]
    fn receipts_owned(&self, owner: &ManagedAddress) -> UnorderedSetMapper<u64>;
}
