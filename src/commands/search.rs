use super::*;

pub(super) fn cmd_search(config: &Config, term: &str, json_mode: bool) -> Result<()> {
    let bear = open_bear(config)?;
    let results = bear.query_titles(term)?;
    print_results("search", term, &results, json_mode);
    Ok(())
}

pub(super) fn cmd_text(config: &Config, term: &str, json_mode: bool) -> Result<()> {
    let bear = open_bear(config)?;
    let results = bear.query_text(term)?;
    print_results("text", term, &results, json_mode);
    Ok(())
}
