use chrono::Local;

use super::*;

pub(super) fn cmd_today(config: &Config, json_mode: bool) -> Result<()> {
    let bear = open_bear(config)?;
    let title = Local::now().format("%Y-%m-%d").to_string();
    let id = bear.query_today()?;

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "today",
                "title": title,
                "id": id,
            })
        );
        return Ok(());
    }

    match id {
        Some(id) => {
            let today = SearchResult {
                id,
                title,
                tags: Vec::new(),
                body: None,
            };
            print!("{}", alfred::open_xml(&[today]));
        }
        None => print!("{}", alfred::create_xml(&title)),
    }

    Ok(())
}
