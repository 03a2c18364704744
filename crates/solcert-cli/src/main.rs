//! Solcert CLI - Merkle commitments over certificate ledger events
//!
//! This tool provides commands for:
//! - Building the event commitment for a block range
//! - Extracting an inclusion proof for a single leaf
//! - Verifying a proof offline (no node required)
//! - Summarizing recent certificate activity
//! - Decoding the purchase settled by a transaction

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use solcert_chain::{
    activity_stats, build_commitment_for_range, BlockRange, BlockTag, ChainClient, ChainConfig,
};
use solcert_commitment::MerkleCommitment;
use solcert_primitives::Hash256;
use solcert_verifier::verify_inclusion_hex;

/// Solar certificate Merkle commitments
#[derive(Parser)]
#[command(name = "solcert")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build and verify Merkle commitments over certificate ledger events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Node connection settings shared by the networked commands
#[derive(Args)]
struct ConnectArgs {
    /// JSON-RPC endpoint of the ledger node
    #[arg(long, env = "RPC_URL")]
    rpc_url: Option<String>,

    /// Address of the certificate contract
    #[arg(long, env = "CONTRACT_ADDRESS")]
    contract: Option<String>,
}

impl ConnectArgs {
    fn client(&self) -> Result<ChainClient> {
        let mut config = ChainConfig::local();
        if let Some(url) = &self.rpc_url {
            config.rpc_url = url.clone();
        }
        if let Some(contract) = &self.contract {
            config.contract_address = contract.clone();
        }
        ChainClient::new(&config).context("failed to construct ledger client")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the Merkle commitment for a block range
    Commit {
        #[command(flatten)]
        connect: ConnectArgs,

        /// First block of the range
        #[arg(long, default_value_t = 0)]
        from: u64,

        /// Last block of the range (number or "latest")
        #[arg(long, default_value = "latest")]
        to: BlockTag,

        /// Emit the {root, leavesHex} summary as JSON
        #[arg(long)]
        json: bool,

        /// Also list the resolved label of every leaf
        #[arg(long)]
        labels: bool,
    },

    /// Build the commitment and print the proof for one leaf
    Proof {
        #[command(flatten)]
        connect: ConnectArgs,

        /// The leaf to prove, 0x-prefixed hex
        #[arg(long)]
        leaf: String,

        /// First block of the range
        #[arg(long, default_value_t = 0)]
        from: u64,

        /// Last block of the range (number or "latest")
        #[arg(long, default_value = "latest")]
        to: BlockTag,

        /// Emit the proof as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Verify an inclusion proof offline
    Verify {
        /// Expected Merkle root, 0x-prefixed hex
        #[arg(long)]
        root: String,

        /// Leaf under proof, 0x-prefixed hex
        #[arg(long)]
        leaf: String,

        /// Sibling hashes in order, repeatable
        #[arg(long = "sibling")]
        siblings: Vec<String>,

        /// Read siblings from a JSON string-array file instead
        #[arg(long)]
        proof_file: Option<PathBuf>,
    },

    /// Summarize certificate activity over recent blocks
    Stats {
        #[command(flatten)]
        connect: ConnectArgs,

        /// Number of trailing blocks to analyze
        #[arg(long, default_value_t = 1000)]
        window: u64,
    },

    /// Decode the certificate purchase settled by a transaction
    Tx {
        #[command(flatten)]
        connect: ConnectArgs,

        /// Transaction hash, 0x-prefixed hex
        hash: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Commit {
            connect,
            from,
            to,
            json,
            labels,
        } => run_commit(connect, from, to, json, labels).await,
        Commands::Proof {
            connect,
            leaf,
            from,
            to,
            json,
        } => run_proof(connect, &leaf, from, to, json).await,
        Commands::Verify {
            root,
            leaf,
            siblings,
            proof_file,
        } => run_verify(&root, &leaf, siblings, proof_file),
        Commands::Stats { connect, window } => run_stats(connect, window).await,
        Commands::Tx { connect, hash } => run_tx(connect, &hash).await,
    }
}

async fn build(connect: &ConnectArgs, from: u64, to: BlockTag) -> Result<MerkleCommitment> {
    let client = connect.client()?;
    let range = BlockRange::new(from, to)?;
    Ok(build_commitment_for_range(&client, &range).await?)
}

async fn run_commit(
    connect: ConnectArgs,
    from: u64,
    to: BlockTag,
    json: bool,
    labels: bool,
) -> Result<()> {
    let commitment = build(&connect, from, to).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&commitment)?);
        return Ok(());
    }

    match commitment.root() {
        Some(root) => println!("root: {root}"),
        None => println!("root: (no events in blocks {from}..{to})"),
    }
    for (i, entry) in commitment.entries().iter().enumerate() {
        if labels {
            println!("{:>4}. {}  {}", i + 1, entry.leaf, entry.label);
        } else {
            println!("{:>4}. {}", i + 1, entry.leaf);
        }
    }
    Ok(())
}

async fn run_proof(
    connect: ConnectArgs,
    leaf: &str,
    from: u64,
    to: BlockTag,
    json: bool,
) -> Result<()> {
    let commitment = build(&connect, from, to).await?;
    let proof = commitment.proof_for(leaf)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&proof)?);
        return Ok(());
    }

    let root = commitment
        .root()
        .map(|r| r.to_hex_prefixed())
        .unwrap_or_else(|| "(empty)".to_string());
    println!("root:  {root}");
    println!("leaf:  {leaf}");
    if proof.is_empty() {
        println!("proof: (empty - single-leaf tree)");
    } else {
        for (i, sibling) in proof.iter().enumerate() {
            println!("proof[{i}]: {sibling}");
        }
    }
    Ok(())
}

fn run_verify(
    root: &str,
    leaf: &str,
    mut siblings: Vec<String>,
    proof_file: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = proof_file {
        if !siblings.is_empty() {
            bail!("pass either --sibling flags or --proof-file, not both");
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read proof file {}", path.display()))?;
        siblings = serde_json::from_str(&raw).context("proof file is not a JSON string array")?;
    }

    let check = verify_inclusion_hex(root, leaf, &siblings)?;
    if check.valid {
        println!("valid: leaf is included under {root}");
        Ok(())
    } else {
        println!("INVALID: recombination produced {}", check.computed_root);
        std::process::exit(1);
    }
}

async fn run_stats(connect: ConnectArgs, window: u64) -> Result<()> {
    let client = connect.client()?;
    let stats = activity_stats(&client, window).await?;
    println!("current block:    {}", stats.current_block);
    println!("blocks analyzed:  {}", stats.blocks_analyzed);
    println!("issued:           {}", stats.issued);
    println!("purchased:        {}", stats.purchased);
    println!("retired:          {}", stats.retired);
    Ok(())
}

async fn run_tx(connect: ConnectArgs, hash: &str) -> Result<()> {
    let client = connect.client()?;
    let tx_hash = Hash256::from_hex(hash).context("transaction hash is not 32-byte hex")?;
    let record = client.purchase_in_transaction(&tx_hash).await?;
    println!("certificate: {}", record.certificate_id);
    println!("seller:      {}", record.seller);
    println!("buyer:       {}", record.buyer);
    println!("price (wei): {}", record.price_wei);
    println!("tx:          {}", record.tx_hash);
    Ok(())
}
