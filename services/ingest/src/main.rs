mod dataset;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use icebreak_config::{init_tracing, SearchConfig};
use icebreak_upstream::{SearchClient, UpsertRecord};

const DEFAULT_CSV_PATH: &str = "data/q_and_a.csv";

/// Split records into upsert batches of at most `size`.
fn batches(records: &[UpsertRecord], size: usize) -> Result<std::slice::Chunks<'_, UpsertRecord>> {
    ensure!(size > 0, "INGEST_BATCH_SIZE must be greater than zero");
    Ok(records.chunks(size))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));

    let config = SearchConfig::from_env().context("failed to load search config")?;
    tracing::info!(
        service = "icebreak-ingest",
        path = %path.display(),
        namespace = %config.namespace,
        "starting"
    );

    let file = File::open(&path).with_context(|| format!("unable to open {}", path.display()))?;
    let records = dataset::read_records(file)?;
    tracing::info!(records = records.len(), "records prepared");

    let batch_size = config.batch_size;
    let client = SearchClient::new(config).context("failed to build search client")?;

    let mut sent = 0usize;
    for batch in batches(&records, batch_size)? {
        client
            .upsert_records(batch)
            .await
            .with_context(|| format!("upsert failed after {sent} records"))?;
        sent += batch.len();
        tracing::info!(batch = batch.len(), sent, "batch upserted");
    }

    tracing::info!(total = sent, "upsert complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use icebreak_common::types::Submission;

    fn records(n: usize) -> Vec<UpsertRecord> {
        (0..n)
            .map(|i| {
                UpsertRecord::new(
                    format!("q{i}-ada"),
                    Submission {
                        person: "Ada".to_string(),
                        question: format!("Question {i}"),
                        answer: "tea".to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn batches_never_exceed_size() {
        let all = records(200);
        let sizes: Vec<usize> = batches(&all, 96).unwrap().map(<[_]>::len).collect();
        assert_eq!(sizes, vec![96, 96, 8]);
    }

    #[test]
    fn empty_input_yields_no_batches() {
        assert_eq!(batches(&[], 96).unwrap().count(), 0);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        assert!(batches(&records(3), 0).is_err());
    }
}
