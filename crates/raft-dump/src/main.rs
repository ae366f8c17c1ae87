//! # raft-dump
//!
//! why: let operators read what a raft log store actually contains
//! relations: opens stores with raft-dump-storage, renders with raft-dump-core
//! what: cli parsing, logging setup, one JSON record per entry on stdout

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use raft_dump_core::{Dumper, MsgpackCodec, RecordEmitter};
use raft_dump_storage::FileLogStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Opt {
    /// RAFT data dir
    pub path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // stdout carries records, diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let options = Opt::parse();

    let store = FileLogStore::open(&options.path)
        .with_context(|| format!("failed to open raft store {}", options.path.display()))?;

    let codec = MsgpackCodec::new();
    let stdout = io::stdout();
    let mut emitter = RecordEmitter::new(BufWriter::new(stdout.lock()));
    Dumper::new(&codec)
        .run(&store, &mut emitter)
        .with_context(|| format!("error reading from raft store {}", options.path.display()))?;

    Ok(())
}
