use crate::access;
use crate::entities::*;
use crate::errors::*;
use crate::events::{self, Resolution, TransactionCompleted, TransactionCreated};
use crate::ledger;
use crate::store;
use crate::timeout;
use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, BytesN, Env, String};

#[contract]
pub struct DigitalEscrowContract;

#[contractimpl]
impl DigitalEscrowContract {
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        owner.require_auth();
        access::init(&env, &owner, &token)?;
        log!(&env, "Escrow initialized with owner {}", owner);
        Ok(())
    }

    /// Moves `amount` of the escrow token from `buyer` into the contract and
    /// opens a transaction for it. Returns the new transaction id.
    pub fn create_transaction(
        env: Env,
        buyer: Address,
        seller: Address,
        product_key: Bytes,
        amount: i128,
    ) -> Result<u64, Error> {
        buyer.require_auth();
        access::require_not_paused(&env)?;

        if !timeout::is_valid_amount(amount) {
            return Err(Error::InvalidAmount);
        }
        let token = access::token(&env)?;
        if seller == buyer || seller == token || seller == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        token::Client::new(&env, &token).transfer(
            &buyer,
            &env.current_contract_address(),
            &amount,
        );

        let transaction_id = store::next_id(&env)?;
        let created_at = env.ledger().timestamp();
        let transaction = EscrowTransaction {
            id: transaction_id,
            buyer: buyer.clone(),
            seller: seller.clone(),
            amount,
            product_key,
            delivery_proof: None,
            status: TransactionStatus::Created,
            created_at,
            dispute_initiated_at: None,
            resolved_to: None,
        };
        store::save(&env, &transaction);

        events::emit_transaction_created(
            &env,
            TransactionCreated {
                transaction_id,
                buyer,
                seller,
                amount,
                created_at,
            },
        );
        log!(&env, "Transaction {} created for {}", transaction_id, amount);
        Ok(transaction_id)
    }

    pub fn deliver_product(
        env: Env,
        transaction_id: u64,
        proof: String,
        seller: Address,
    ) -> Result<(), Error> {
        seller.require_auth();
        access::require_not_paused(&env)?;

        let mut transaction = store::load(&env, transaction_id)?;
        if transaction.seller != seller {
            return Err(Error::UnauthorizedAccess);
        }
        // Funds of an expired, undelivered transaction stay locked; only
        // the owner's emergency sweep can recover them.
        if timeout::is_expired(&transaction, env.ledger().timestamp()) {
            return Err(Error::TransactionExpired);
        }
        transaction.advance(TransactionStatus::Created, TransactionStatus::Delivered)?;
        transaction.delivery_proof = Some(proof);
        store::save(&env, &transaction);

        events::emit_product_delivered(&env, transaction_id, seller);
        Ok(())
    }

    pub fn confirm_receive(env: Env, transaction_id: u64, buyer: Address) -> Result<(), Error> {
        buyer.require_auth();
        access::require_not_paused(&env)?;

        let transaction = store::load(&env, transaction_id)?;
        if transaction.buyer != buyer {
            return Err(Error::UnauthorizedAccess);
        }
        let seller = transaction.seller.clone();
        Self::settle(
            &env,
            transaction,
            TransactionStatus::Delivered,
            seller,
            Resolution::Confirmed,
        )
    }

    pub fn initiate_dispute(env: Env, transaction_id: u64, buyer: Address) -> Result<(), Error> {
        buyer.require_auth();
        access::require_not_paused(&env)?;

        let mut transaction = store::load(&env, transaction_id)?;
        if transaction.buyer != buyer {
            return Err(Error::UnauthorizedAccess);
        }
        transaction.advance(TransactionStatus::Delivered, TransactionStatus::Disputed)?;
        let now = env.ledger().timestamp();
        transaction.dispute_initiated_at = Some(now);
        store::save(&env, &transaction);

        events::emit_dispute_initiated(&env, transaction_id, buyer, now);
        Ok(())
    }

    /// Mediator ruling on a disputed transaction. Only the owner may call it.
    pub fn resolve_dispute(
        env: Env,
        transaction_id: u64,
        favor_seller: bool,
        owner: Address,
    ) -> Result<(), Error> {
        access::require_not_paused(&env)?;
        access::require_owner(&env, &owner)?;

        let transaction = store::load(&env, transaction_id)?;
        let recipient = if favor_seller {
            transaction.seller.clone()
        } else {
            transaction.buyer.clone()
        };
        Self::settle(
            &env,
            transaction,
            TransactionStatus::Disputed,
            recipient,
            Resolution::Mediated,
        )
    }

    /// Refunds the buyer of a dispute the mediator left open for longer than
    /// the dispute timeout. Anyone may trigger it.
    pub fn auto_resolve_dispute(env: Env, transaction_id: u64) -> Result<(), Error> {
        access::require_not_paused(&env)?;

        let transaction = store::load(&env, transaction_id)?;
        if transaction.status != TransactionStatus::Disputed {
            return Err(Error::InvalidState);
        }
        if !timeout::is_auto_resolvable(&transaction, env.ledger().timestamp()) {
            return Err(Error::DisputeTimeoutNotReached);
        }
        let buyer = transaction.buyer.clone();
        Self::settle(
            &env,
            transaction,
            TransactionStatus::Disputed,
            buyer,
            Resolution::TimedOut,
        )
    }

    /// Pays out the caller's whole ledger balance.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        access::require_not_paused(&env)?;

        let amount = ledger::withdraw(&env, &caller)?;
        let token = access::token(&env)?;
        token::Client::new(&env, &token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        events::emit_withdrawal(&env, caller, amount);
        Ok(amount)
    }

    pub fn toggle_pause(env: Env, owner: Address) -> Result<bool, Error> {
        access::require_owner(&env, &owner)?;
        let paused = access::toggle_pause(&env);
        events::emit_pause_toggled(&env, paused);
        log!(&env, "Escrow paused: {}", paused);
        Ok(paused)
    }

    /// Sweeps every token the contract holds to the owner. Ledger balances
    /// and open transactions are left untouched.
    pub fn emergency_withdraw(env: Env, owner: Address) -> Result<i128, Error> {
        let owner = access::require_owner(&env, &owner)?;
        access::require_paused(&env)?;

        let token_client = token::Client::new(&env, &access::token(&env)?);
        let held = token_client.balance(&env.current_contract_address());
        if held <= 0 {
            return Err(Error::InvalidAmount);
        }
        token_client.transfer(&env.current_contract_address(), &owner, &held);

        events::emit_emergency_withdrawal(&env, owner, held);
        log!(&env, "Emergency withdrawal of {}", held);
        Ok(held)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let owner = access::owner(&env)?;
        owner.require_auth();

        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
        events::emit_upgraded(&env, new_wasm_hash);
        Ok(())
    }

    pub fn get_transaction(env: Env, transaction_id: u64) -> Result<EscrowTransaction, Error> {
        store::load(&env, transaction_id)
    }

    pub fn get_transaction_status(
        env: Env,
        transaction_id: u64,
    ) -> Result<TransactionStatus, Error> {
        Ok(store::load(&env, transaction_id)?.status)
    }

    pub fn get_transaction_count(env: Env) -> u64 {
        store::transaction_count(&env)
    }

    pub fn balance_of(env: Env, party: Address) -> i128 {
        ledger::balance_of(&env, &party)
    }

    pub fn is_paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        access::owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        access::token(&env)
    }
}

impl DigitalEscrowContract {
    /// Completes `transaction` from `expected`, crediting its full amount to
    /// `recipient`. This is the only place a transaction's value reaches
    /// the ledger.
    fn settle(
        env: &Env,
        mut transaction: EscrowTransaction,
        expected: TransactionStatus,
        recipient: Address,
        resolution: Resolution,
    ) -> Result<(), Error> {
        transaction.advance(expected, TransactionStatus::Completed)?;
        ledger::credit(env, &recipient, transaction.amount)?;
        transaction.resolved_to = Some(recipient.clone());
        store::save(env, &transaction);

        events::emit_transaction_completed(
            env,
            TransactionCompleted {
                transaction_id: transaction.id,
                recipient,
                amount: transaction.amount,
                resolution,
            },
        );
        Ok(())
    }
}
