//! Parallel derivation of independent trial balances.

use rayon::prelude::*;
use tracing::debug;

use super::bundle::LiasseBundle;
use super::engine::{LiasseEngine, LiasseOptions};
use crate::balance::RawRecord;
use crate::statements::StatementError;

/// Derives one bundle per trial balance, in input order.
///
/// Each balance gets its own engine built from `options`, so balances share
/// settings, currency, period and reporting system but never see each
/// other's accounts.
#[must_use]
pub fn derive_batch(
    balances: &[Vec<RawRecord>],
    options: &LiasseOptions,
) -> Vec<Result<LiasseBundle, StatementError>> {
    debug!(balances = balances.len(), system = %options.system, "Deriving batch");
    balances
        .par_iter()
        .map(|records| {
            let mut engine = LiasseEngine::with_options(*options);
            engine.load_balance(records);
            engine.bundle()
        })
        .collect()
}
