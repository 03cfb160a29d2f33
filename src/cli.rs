//! Command line interface.
//!
//! Every command builds an in-memory document host from the given
//! identities, so editors without a native integration can shell out:
//!
//! ```text
//! namesake next --current /src/foo.c /src/foo.c /include/foo.h
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use namesake_core::{Direction, InMemoryHost};
use namesake_digest::digest;

#[derive(Parser, Debug)]
#[command(name = "namesake")]
#[command(about = "Cycle through open documents that share a base name", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of the default one
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the grouping digest of each name
    Digest {
        #[arg(value_name = "NAMES", required = true)]
        names: Vec<String>,
    },
    /// Print the group of the current document, in cycling order
    Group(HostArgs),
    /// Print the document an advance would switch to
    Next(HostArgs),
    /// Print the document a retreat would switch to
    Prev(HostArgs),
}

/// Open documents and the current one.
#[derive(Args, Debug)]
pub struct HostArgs {
    /// Identity of the current document
    #[arg(long, value_name = "IDENTITY")]
    pub current: String,

    /// Identities of the open documents (read from stdin, one per line, if omitted)
    #[arg(value_name = "DOCUMENTS")]
    pub documents: Vec<String>,
}

impl HostArgs {
    /// Build the host, reading documents from `input` when none were given.
    pub fn into_host(self, input: impl BufRead) -> Result<InMemoryHost> {
        let documents = if self.documents.is_empty() {
            read_documents(input)?
        } else {
            self.documents
        };
        Ok(InMemoryHost::with_current(documents, &self.current))
    }
}

fn read_documents(input: impl BufRead) -> Result<Vec<String>> {
    let mut documents = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read document list")?;
        let line = line.trim_end_matches(['\r', '\n']);
        if !line.is_empty() {
            documents.push(line.to_string());
        }
    }
    Ok(documents)
}

/// Run a command, writing its result to `out`.
pub fn run(command: Command, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Digest { names } => {
            for name in names {
                writeln!(out, "{}\t{}", name, digest(&name))?;
            }
        }
        Command::Group(args) => {
            let host = args.into_host(input)?;
            for identity in namesake_cycle::siblings(&host)? {
                writeln!(out, "{}", identity)?;
            }
        }
        Command::Next(args) => step(args, Direction::Forward, input, out)?,
        Command::Prev(args) => step(args, Direction::Backward, input, out)?,
    }
    Ok(())
}

fn step(args: HostArgs, direction: Direction, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut host = args.into_host(input)?;
    let outcome = namesake_cycle::cycle(&mut host, direction)?;
    if let Some(current) = outcome.current() {
        writeln!(out, "{}", current)?;
    }
    Ok(())
}
