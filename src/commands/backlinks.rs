use super::*;
use freddie::db::Backlink;

pub(super) fn cmd_backlinks(config: &Config, term: &str, json_mode: bool) -> Result<()> {
    let bear = open_bear(config)?;
    let matches = matching_targets(bear.query_graph()?, term);

    if json_mode {
        println!("{}", backlinks_json(term, &matches));
    } else {
        print!("{}", alfred::backlinks_xml(&matches));
    }

    Ok(())
}

/// Edges whose target title contains `term`, ignoring case
fn matching_targets(edges: Vec<Backlink>, term: &str) -> Vec<Backlink> {
    let needle = term.to_lowercase();
    edges
        .into_iter()
        .filter(|edge| edge.target.title.to_lowercase().contains(&needle))
        .collect()
}

fn backlinks_json(term: &str, matches: &[Backlink]) -> serde_json::Value {
    json!({
        "command": "backlinks",
        "term": term,
        "count": matches.len(),
        "results": matches,
    })
}
