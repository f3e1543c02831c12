use std::time::Instant;

use super::*;

pub(super) fn cmd_fts(
    config: &Config,
    query: Option<&str>,
    index: bool,
    info: bool,
    json_mode: bool,
) -> Result<()> {
    let query = query.filter(|q| !q.trim().is_empty());
    if !index && !info && query.is_none() {
        anyhow::bail!("missing arguments: a search query, --index or --info is required");
    }

    let bear = open_bear(config)?;
    let fts = open_index(config)?;

    if info {
        return cmd_info(&fts, &bear, json_mode);
    }
    if index {
        return cmd_reindex(&fts, &bear, json_mode);
    }

    let query = query.unwrap_or_default();
    let results = fts.search(query).context("Full-text search failed")?;
    print_results("fts", query, &results, json_mode);

    Ok(())
}

fn cmd_reindex(fts: &FtsIndex, bear: &BearDb, json_mode: bool) -> Result<()> {
    let start = Instant::now();
    let indexed = fts.reindex(bear).context("Reindex failed")?;
    let elapsed = start.elapsed();

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "index",
                "path": fts.path(),
                "indexed": indexed,
                "elapsed_ms": elapsed.as_millis(),
            })
        );
    } else {
        println!(
            "  {} Indexed {} notes in {:.1}s",
            "OK".green().bold(),
            indexed.to_string().cyan(),
            elapsed.as_secs_f64(),
        );
    }

    Ok(())
}

fn cmd_info(fts: &FtsIndex, bear: &BearDb, json_mode: bool) -> Result<()> {
    let info = fts.info(bear);

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "info",
                "path": info.path,
                "index_records": info.index_records.as_ref().ok(),
                "index_error": info.index_records.as_ref().err(),
                "bear_records": info.source_records.as_ref().ok(),
                "bear_error": info.source_records.as_ref().err(),
                "in_sync": info.in_sync(),
            })
        );
        return Ok(());
    }

    println!("{info}");
    if info.in_sync() {
        println!("  {} index matches Bear", "OK".green().bold());
    } else {
        println!(
            "  {} index is out of date, run {}",
            "WARN".yellow().bold(),
            "freddie fts --index".cyan()
        );
    }

    Ok(())
}
