//! High-level halo client.
//!
//! # Data Flow
//! ```text
//! TxParams ──validate/encode──▶ Transaction::new(ctx, nonce)
//!                                   │ sign (Signer)
//!                                   ▼
//!                           RouterClient::submit ──▶ SubmitResponse
//! ```
//!
//! The chain context (dapp, chainID, feeRecipient) is fetched once on
//! [`HaloClient::connect`] and reused for every transaction.

use thiserror::Error;

use crate::genesis::types::RouterState;
use crate::router::{RouterClient, RouterError, SubmitResponse};
use crate::signer::Signer;
use crate::transaction::{
    CallParams, NonceGenerator, ProposeParams, StakeParams, Transaction, TransferParams, TxContext,
    TxError, TxParams,
};

/// Errors from building or sending a transaction.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Router(#[from] RouterError),

    #[error(transparent)]
    Tx(#[from] TxError),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Signs and submits transactions for one account against one router.
pub struct HaloClient {
    router: RouterClient,
    signer: Signer,
    context: TxContext,
    nonces: NonceGenerator,
}

impl HaloClient {
    /// Fetch `/info` and bind the signer to the router's chain.
    pub async fn connect(router: RouterClient, signer: Signer) -> ClientResult<Self> {
        let info = router.get_info().await?;
        let context = info.tx_context()?;

        tracing::info!(
            router = %router.base_url(),
            dapp = %context.dapp,
            chain_id = %context.chain_id,
            account = %signer.address(),
            "Connected to router"
        );

        Ok(Self::with_context(router, signer, context))
    }

    /// Build a client without contacting the router.
    pub fn with_context(router: RouterClient, signer: Signer, context: TxContext) -> Self {
        Self {
            router,
            signer,
            context,
            nonces: NonceGenerator::new(),
        }
    }

    /// Account ID transactions are sent from.
    pub fn address(&self) -> String {
        self.signer.address()
    }

    /// Build and sign a transaction without submitting it.
    pub async fn prepare(&self, params: &TxParams) -> ClientResult<Transaction> {
        params.validate()?;
        let from = self.signer.address();
        if let TxParams::Join(state) = params {
            // A router may only join as itself.
            if state.router != from {
                return Err(TxError::InvalidParams(format!(
                    "router state is for '{}', wallet is '{}'",
                    state.router, from
                ))
                .into());
            }
        }
        let encoded = params.encode()?;

        let mut tx = Transaction::new(
            &self.context,
            params.action(),
            from,
            self.nonces.next(),
            encoded,
        );
        tx.sign(&self.signer).await?;

        tracing::debug!(
            action = %tx.action,
            nonce = %tx.nonce,
            hash = %tx.hex_hash(),
            "Transaction signed"
        );
        Ok(tx)
    }

    /// Build, sign and submit.
    pub async fn send(&self, params: &TxParams) -> ClientResult<SubmitResponse> {
        let tx = self.prepare(params).await?;
        Ok(self.router.submit(&tx).await?)
    }

    /// Transfer `amount` base units to `to`.
    pub async fn transfer(&self, to: &str, amount: &str) -> ClientResult<SubmitResponse> {
        let params = TxParams::Transfer(TransferParams::new(to, amount)?);
        self.send(&params).await
    }

    pub async fn stake(&self, stake_pool: &str, amount: &str) -> ClientResult<SubmitResponse> {
        let params = TxParams::Stake(StakeParams::new(stake_pool, amount)?);
        self.send(&params).await
    }

    pub async fn unstake(&self, stake_pool: &str, amount: &str) -> ClientResult<SubmitResponse> {
        let params = TxParams::Unstake(StakeParams::new(stake_pool, amount)?);
        self.send(&params).await
    }

    /// Register as a router with the given public state.
    pub async fn join(&self, state: RouterState) -> ClientResult<SubmitResponse> {
        self.send(&TxParams::Join(state)).await
    }

    pub async fn leave(&self) -> ClientResult<SubmitResponse> {
        self.send(&TxParams::Leave).await
    }

    pub async fn propose(&self, proposal: ProposeParams) -> ClientResult<SubmitResponse> {
        self.send(&TxParams::Propose(proposal)).await
    }

    /// Invoke `function` of an accepted proposal.
    pub async fn call(
        &self,
        proposal_id: &str,
        function: &str,
        params: &str,
    ) -> ClientResult<SubmitResponse> {
        let params = TxParams::Call(CallParams::new(proposal_id, function, params)?);
        self.send(&params).await
    }
}
