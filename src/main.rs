//! Batch driver: walks a directory of plain-text resumes and writes one
//! JSON record per file. All filesystem work lives here; the engine
//! itself is one-text-in, one-record-out.

use anyhow::{Context, Result};
use clap::Parser;
use resume_extract::extract_resume;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use threadpool::ThreadPool;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(about = "Extract structured JSON records from plain-text resumes")]
struct Args {
    /// Directory scanned recursively for .txt resumes
    #[arg(default_value = "./resumes")]
    input: PathBuf,

    /// Directory the per-resume .json files are written to
    #[arg(short, long, default_value = "./parsed")]
    out: PathBuf,

    /// Number of worker threads
    #[arg(short, long, default_value_t = 4)]
    workers: usize,
}

fn process_file(path: &Path, out_dir: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let record = extract_resume(&text);

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    let out_path = out_dir.join(format!("{stem}.json"));
    let file = File::create(&out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &record)
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let paths: Vec<PathBuf> = WalkDir::new(&args.input)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("txt"))
        .map(|e| e.into_path())
        .collect();

    let pool = ThreadPool::new(args.workers.max(1));
    let (tx, rx) = mpsc::channel();
    for path in paths {
        let tx = tx.clone();
        let out_dir = args.out.clone();
        pool.execute(move || {
            let outcome = process_file(&path, &out_dir);
            // A send error means main has already exited; nothing to do.
            let _ = tx.send((path, outcome));
        });
    }
    drop(tx);

    let mut processed = 0usize;
    let mut failed = 0usize;
    for (path, outcome) in rx {
        match outcome {
            Ok(()) => {
                processed += 1;
                info!(file = %path.display(), "processed");
            }
            Err(err) => {
                failed += 1;
                error!(file = %path.display(), error = %err, "failed");
            }
        }
    }
    pool.join();

    info!(processed, failed, out = %args.out.display(), "done");
    Ok(())
}
