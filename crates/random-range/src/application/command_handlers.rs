//! Command handlers for the range randomizer.
//!
//! This module contains the application-level handler that walks a batch
//! of items, resolves each one against its bounds, and applies the batch's
//! failure policy.

use random_core::command::Command;
use random_core::error::{ItemError, RandomError};
use random_core::source::ItemSource;
use random_core::transport::Transport;
use tracing::{debug, info, instrument, warn};

use crate::domain::bounds::Bounds;
use crate::domain::commands::GenerateRandomNumbers;
use crate::domain::description::{MAX_PARAMETER, MIN_PARAMETER};
use crate::domain::endpoint::IntegerEndpoint;
use crate::domain::outcome::ItemOutcome;
use crate::domain::response::resolve_response;

/// Resolves the random number for a single item.
///
/// Degenerate ranges are answered without touching the transport; any
/// other valid range costs exactly one `fetch_text` call.
async fn resolve_item(
    item_index: usize,
    source: &dyn ItemSource,
    transport: &dyn Transport,
    endpoint: &IntegerEndpoint,
) -> Result<i64, RandomError> {
    let min = source.integer_parameter(MIN_PARAMETER, item_index)?;
    let max = source.integer_parameter(MAX_PARAMETER, item_index)?;
    let bounds = Bounds::new(min, max)?;

    if bounds.is_degenerate() {
        debug!(item_index, value = min, "degenerate range, skipping remote call");
        return Ok(bounds.min());
    }

    let url = endpoint.integers_url(&bounds);
    debug!(item_index, min, max, "fetching random integer");
    let body = transport.fetch_text(&url).await?;
    resolve_response(&body, &bounds)
}

/// Handles the `GenerateRandomNumbers` command: resolves every item of the
/// batch in input order, one at a time.
///
/// Under `FailurePolicy::ContinueOnFail` a failing item is recorded as an
/// `ItemOutcome::Failure` and the batch goes on, so the output always has
/// one entry per input item. Under `FailurePolicy::Abort` the first failure
/// ends the batch.
///
/// # Errors
///
/// Returns `ItemError` for the first failing item when the batch policy is
/// `FailurePolicy::Abort`.
#[instrument(
    skip_all,
    fields(command = command.command_type(), correlation_id = %command.correlation_id())
)]
pub async fn handle_generate(
    command: &GenerateRandomNumbers,
    source: &dyn ItemSource,
    transport: &dyn Transport,
    endpoint: &IntegerEndpoint,
) -> Result<Vec<ItemOutcome>, ItemError> {
    let policy = source.failure_policy();
    let item_count = source.item_count();
    let mut outcomes = Vec::with_capacity(item_count);

    for item_index in 0..item_count {
        match resolve_item(item_index, source, transport, endpoint).await {
            Ok(random_number) => outcomes.push(ItemOutcome::success(random_number)),
            Err(error) if policy.continues_on_fail() => {
                warn!(item_index, %error, "item failed, continuing batch");
                outcomes.push(ItemOutcome::failure(&error, item_index));
            }
            Err(error) => {
                warn!(item_index, %error, "item failed, aborting batch");
                return Err(ItemError {
                    item_index,
                    source: error,
                });
            }
        }
    }

    info!(items = outcomes.len(), "batch resolved");
    Ok(outcomes)
}
