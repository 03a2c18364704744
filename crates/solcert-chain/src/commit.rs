//! Fetch-and-build integration
//!
//! Bridges the ledger client and the pure commitment builder. One build
//! request is one short-lived task: the four upstream snapshot reads run
//! concurrently and join all-or-nothing — if any one fails, the whole build
//! fails and no partial tree is produced.

use crate::client::ChainClient;
use crate::error::ChainResult;
use crate::source::CertificateLedger;
use crate::types::{ActivityStats, BlockRange, BlockTag};
use solcert_commitment::{build_commitment, MerkleCommitment, RegistrySnapshot};
use tracing::info;

/// Build a Merkle commitment over all certificate events in a block range
///
/// The range is validated before any network traffic. Registry snapshots
/// and both event queries are independent reads with no ordering
/// dependency, so they run concurrently; results merge only after all four
/// complete.
pub async fn build_commitment_for_range<L>(
    ledger: &L,
    range: &BlockRange,
) -> ChainResult<MerkleCommitment>
where
    L: CertificateLedger + ?Sized,
{
    range.validate()?;

    let (producers, companies, issued, purchased) = tokio::try_join!(
        ledger.producers(),
        ledger.companies(),
        ledger.issued_events(range),
        ledger.purchased_events(range),
    )?;

    info!(
        producers = producers.len(),
        companies = companies.len(),
        issued = issued.len(),
        purchased = purchased.len(),
        %range,
        "building commitment"
    );

    let registry = RegistrySnapshot::new(producers, companies);
    Ok(build_commitment(&registry, issued, purchased))
}

/// Count certificate activity over the trailing `window` blocks
pub async fn activity_stats(client: &ChainClient, window: u64) -> ChainResult<ActivityStats> {
    let current_block = client.latest_block().await?;
    let from = current_block.saturating_sub(window);
    let range = BlockRange {
        from,
        to: BlockTag::Number(current_block),
    };

    let (issued, purchased, retired) = tokio::try_join!(
        client.issued_events(&range),
        client.purchased_events(&range),
        client.retired_events(&range),
    )?;

    Ok(ActivityStats {
        current_block,
        blocks_analyzed: current_block - from + 1,
        issued: issued.len(),
        purchased: purchased.len(),
        retired: retired.len(),
    })
}
