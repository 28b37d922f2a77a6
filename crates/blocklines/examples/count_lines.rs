//! Counts the lines of one or more files, streaming each file in blocks.
//!
//! Every file is read on its own task, so several files are processed
//! concurrently while each one is still read strictly block by block.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=blocklines=debug cargo run -p blocklines --example count_lines -- FILE...
//! ```
//!
//! Set `BLOCK_SIZE` to change the read size (default 4096, minimum 512).

use std::{env, path::PathBuf, process::ExitCode};

use blocklines::{ReadOptions, Tally, stream_lines};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: count_lines FILE...");
        return ExitCode::FAILURE;
    }

    let mut options = ReadOptions::default();
    if let Some(size) = env::var("BLOCK_SIZE").ok().and_then(|s| s.parse().ok()) {
        options.block_size = size;
    }

    let tasks: Vec<_> = paths
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let mut tally = Tally::default();
                let result = stream_lines(&path, &options, &mut tally).await;
                (path, result.map(|_| tally))
            })
        })
        .collect();

    let mut status = ExitCode::SUCCESS;
    for task in tasks {
        match task.await {
            Ok((path, Ok(tally))) => println!(
                "{:>10} lines {:>12} bytes {:>8} longest  {}",
                tally.lines,
                tally.bytes,
                tally.longest,
                path.display()
            ),
            Ok((path, Err(e))) => {
                eprintln!("{}: {e}", path.display());
                status = ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("task failed: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
