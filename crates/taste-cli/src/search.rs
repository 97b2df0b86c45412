//! `search` command: fetch, rank, print, and export one region.

use std::path::{Path, PathBuf};

use taste_core::{AppConfig, ResultSet, COLUMN_LABELS};
use taste_scraper::{
    run_search, DiningCodeClient, PageOutcome, PageReport, SearchError, SearchRequest,
};

/// Terminal column widths (in chars) for the printed table.
const TABLE_WIDTHS: [usize; 9] = [4, 24, 40, 14, 14, 6, 8, 8, 6];

/// Search `region`, print the ranked table, and write the spreadsheet unless
/// `no_export` is set.
///
/// # Errors
///
/// Returns an error if the region is blank, the HTTP client cannot be built,
/// no page yields any record, or the spreadsheet cannot be written.
pub(crate) async fn run_search_command(
    config: &AppConfig,
    region: &str,
    output: Option<PathBuf>,
    no_export: bool,
) -> anyhow::Result<()> {
    let request = SearchRequest::new(region)?;
    let client = DiningCodeClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build search client: {e}"))?;

    let outcome = match run_search(&client, &request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            for line in page_warnings(e.pages()) {
                eprintln!("{line}");
            }
            anyhow::bail!(search_failure_message(&e));
        }
    };

    for line in page_warnings(&outcome.pages) {
        eprintln!("{line}");
    }

    let result_set = &outcome.result_set;
    println!("{} 지역 검색 결과", result_set.region());
    println!();
    for line in render_table(result_set) {
        println!("{line}");
    }

    if no_export {
        return Ok(());
    }

    let path = output.unwrap_or_else(|| default_export_path(&config.export_dir, result_set.region()));
    let blob = taste_export::export_workbook(result_set)?;
    tokio::fs::write(&path, blob.as_bytes())
        .await
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = blob.len(), "wrote spreadsheet");
    println!();
    println!("saved {} rows to {}", result_set.len(), path.display());

    Ok(())
}

/// One warning line per page that failed or came back empty.
fn page_warnings(pages: &[PageReport]) -> Vec<String> {
    pages
        .iter()
        .filter_map(|p| match &p.outcome {
            PageOutcome::Failed(e) => {
                Some(format!("warning: failed to fetch page {}: {e}", p.page))
            }
            PageOutcome::Empty => Some(format!("warning: no data found on page {}", p.page)),
            PageOutcome::Records(_) => None,
        })
        .collect()
}

/// Final error line for a search that produced nothing to show.
fn search_failure_message(error: &SearchError) -> String {
    let failed = error.failed_pages();
    if failed.is_empty() {
        error.to_string()
    } else {
        format!("{error} (pages failed: {})", join_pages(&failed))
    }
}

fn render_table(result_set: &ResultSet) -> Vec<String> {
    let header = COLUMN_LABELS.map(str::to_owned);
    std::iter::once(header)
        .chain(result_set.rows())
        .map(|cells| {
            cells
                .iter()
                .zip(TABLE_WIDTHS)
                .map(|(cell, width)| format!("{:<width$}", truncate(cell, width)))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_owned()
        })
        .collect()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        format!("{}...", value.chars().take(width.saturating_sub(3)).collect::<String>())
    } else {
        value.to_owned()
    }
}

fn default_export_path(export_dir: &Path, region: &str) -> PathBuf {
    let safe_region = region.replace(['/', '\\'], "_");
    export_dir.join(taste_export::file_name(&safe_region))
}

fn join_pages(pages: &[u32]) -> String {
    pages
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
