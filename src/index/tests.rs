use rusqlite::limits::Limit;
use tempfile::TempDir;

use super::*;
use crate::test_support::{BearFixture, Seed};

fn open_index() -> (TempDir, FtsIndex) {
    let dir = tempfile::tempdir().unwrap();
    let index = FtsIndex::open(&dir.path().join(INDEX_FILE)).unwrap();
    (dir, index)
}

fn fred_and_bear() -> BearFixture {
    BearFixture::new(&[
        Seed::note("1", "Fred", "bear market"),
        Seed::note("2", "Bear", "fred says hi"),
    ])
}

fn ids(results: &[crate::db::SearchResult]) -> Vec<String> {
    let mut ids: Vec<_> = results.iter().map(|r| r.id.clone()).collect();
    ids.sort();
    ids
}

#[test]
fn test_search_empty_index_returns_nothing() {
    let (_dir, index) = open_index();
    assert!(index.search("fred").unwrap().is_empty());
    assert_eq!(index.count().unwrap(), 0);
}

#[test]
fn test_search_blank_query_returns_nothing() {
    let fixture = fred_and_bear();
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();
    assert!(index.search("   ").unwrap().is_empty());
}

#[test]
fn test_reindex_then_search_fred_or_bear() {
    let fixture = fred_and_bear();
    let (_dir, index) = open_index();

    assert_eq!(index.reindex(&fixture.open()).unwrap(), 2);

    assert_eq!(ids(&index.search("fred or bear").unwrap()), vec!["1", "2"]);
    assert_eq!(ids(&index.search("bear").unwrap()), vec!["1", "2"]);
}

#[test]
fn test_search_boolean_operators() {
    let fixture = BearFixture::new(&[
        Seed::note("1", "Fred", "bear market"),
        Seed::note("2", "Bear", "fred says hi"),
        Seed::note("3", "Fred alone", "nothing else"),
    ]);
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    // every term has to land in the same column
    assert!(index.search("fred and bear").unwrap().is_empty());
    assert_eq!(ids(&index.search("fred not bear").unwrap()), vec!["1", "2", "3"]);
    assert_eq!(ids(&index.search("fred and alone").unwrap()), vec!["3"]);
    assert_eq!(ids(&index.search("bear and market").unwrap()), vec!["1"]);
}

#[test]
fn test_search_near_stays_within_one_column() {
    let fixture = BearFixture::new(&[
        Seed::note("1", "Fred", "bear market"),
        Seed::note("2", "Weekly plan", "call fred about the bear"),
    ]);
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    assert_eq!(ids(&index.search("near(fred bear, 50)").unwrap()), vec!["2"]);
}

#[test]
fn test_search_matches_substrings() {
    let fixture = BearFixture::new(&[Seed::note("1", "Morning Routine", "stretching first")]);
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    assert_eq!(ids(&index.search("ROUTINE").unwrap()), vec!["1"]);
    assert_eq!(ids(&index.search("retch").unwrap()), vec!["1"]);
}

#[test]
fn test_search_matches_title_or_body_once() {
    let fixture = BearFixture::new(&[
        Seed::note("body", "Shopping", "remember the groceries"),
        Seed::note("title", "Groceries", "milk and groceries"),
    ]);
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    // a note matching in both columns is still one result
    let results = index.search("groceries").unwrap();
    assert_eq!(ids(&results), vec!["body", "title"]);
    let title = results.iter().find(|r| r.id == "title").unwrap();
    assert_eq!(title.title, "Groceries");
}

#[test]
fn test_search_keeps_tags_containing_commas() {
    let fixture = BearFixture::new(&[Seed::note("1", "Menu", "dinner #fish, chips# #food")]);
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    let results = index.search("dinner").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tags, vec!["fish, chips".to_string(), "food".to_string()]);
}

#[test]
fn test_search_does_not_match_identifier_or_tags() {
    let fixture = BearFixture::new(&[Seed::note("ABCDEF-123", "Plain", "text #zebra")]);
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    assert!(index.search("ABCDEF").unwrap().is_empty());

    // the hashtag is part of the body
    let results = index.search("zebra").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tags, vec!["zebra".to_string()]);
}

#[test]
fn test_search_quotes_cannot_escape_match() {
    let fixture = BearFixture::new(&[Seed::note("1", "Visit O'Brien", "pub")]);
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    assert_eq!(ids(&index.search("\"o'brien\"").unwrap()), vec!["1"]);
    // stays inside the literal and only confuses the FTS5 parser
    assert!(index.search("') OR 1=1 --").is_err());
}

#[test]
fn test_search_restores_writable_connection() {
    let fixture = fred_and_bear();
    let (_dir, index) = open_index();
    let bear = fixture.open();

    index.reindex(&bear).unwrap();
    index.search("fred").unwrap();
    assert_eq!(index.reindex(&bear).unwrap(), 2);
}

#[test]
fn test_reindex_is_idempotent() {
    let fixture = BearFixture::new(&[
        Seed::note("1", "Fred", "bear market #animals/bears"),
        Seed::note("2", "Bear", "fred says hi"),
        Seed::note("3", "Old", "").archived(),
    ]);
    let (_dir, index) = open_index();
    let bear = fixture.open();

    let snapshot = |index: &FtsIndex| {
        let mut stmt = index
            .conn
            .prepare("SELECT uuid, title, body, tags FROM notes ORDER BY uuid")
            .unwrap();
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .unwrap()
            .collect::<rusqlite::Result<Vec<_>>>()
            .unwrap();
        rows
    };

    index.reindex(&bear).unwrap();
    let first = snapshot(&index);
    index.reindex(&bear).unwrap();
    let second = snapshot(&index);

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(first[0].3, "animals/bears");
}

#[test]
fn test_reindex_reflects_source_snapshot() {
    let fixture = fred_and_bear();
    let (_dir, index) = open_index();
    index.reindex(&fixture.open()).unwrap();

    // a note added after the rebuild is invisible until the next one
    rusqlite::Connection::open(&fixture.path)
        .unwrap()
        .execute(
            "INSERT INTO ZSFNOTE (ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZARCHIVED, ZTRASHED)
             VALUES ('3', 'Fresh', 'new fred', 0, 0)",
            [],
        )
        .unwrap();

    assert_eq!(index.search("fred").unwrap().len(), 2);
    index.reindex(&fixture.open()).unwrap();
    assert_eq!(index.search("fred").unwrap().len(), 3);
}

#[test]
fn test_info_after_reindex_is_in_sync() {
    let fixture = BearFixture::new(&[
        Seed::note("1", "One", ""),
        Seed::note("2", "Two", ""),
        Seed::note("3", "Three", "").trashed(),
    ]);
    let (_dir, index) = open_index();
    let bear = fixture.open();

    let before = index.info(&bear);
    assert_eq!(before.index_records, Ok(0));
    assert_eq!(before.source_records, Ok(2));
    assert!(!before.in_sync());

    index.reindex(&bear).unwrap();
    let after = index.info(&bear);
    assert_eq!(after.index_records, Ok(2));
    assert!(after.in_sync());
    assert_eq!(after.path, index.path());

    let text = after.to_string();
    assert!(text.contains("FTS Records: 2"));
    assert!(text.contains(" DB Records: 2"));
}

#[test]
fn test_info_embeds_count_errors() {
    let fixture = fred_and_bear();
    let (_dir, index) = open_index();
    index.conn.execute_batch("DROP TABLE notes;").unwrap();

    let info = index.info(&fixture.open());
    let err = info.index_records.clone().unwrap_err();
    assert!(err.contains("no such table"), "{err}");
    assert_eq!(info.source_records, Ok(2));
    assert!(info.to_string().contains("Error: "));
}

#[test]
fn test_failed_reindex_leaves_partial_index() {
    let fixture = fred_and_bear();
    rusqlite::Connection::open(&fixture.path)
        .unwrap()
        .execute(
            "INSERT INTO ZSFNOTE (ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZARCHIVED, ZTRASHED)
             VALUES (NULL, 'Broken', 'no id', 0, 0)",
            [],
        )
        .unwrap();

    let (_dir, index) = open_index();
    let bear = fixture.open();

    assert!(index.reindex(&bear).is_err());
    assert_eq!(index.count().unwrap(), 2);

    // the broken row also fails the source scan, which info reports as text
    let info = index.info(&bear);
    assert_eq!(info.index_records, Ok(2));
    assert!(info.source_records.is_err());
    assert!(!info.in_sync());
}

#[test]
fn test_reindex_stops_at_first_failed_insert() {
    let oversized = "x".repeat(50_000);
    let fixture = BearFixture::new(&[
        Seed::note("1", "First", "fits"),
        Seed::note("2", "Huge", &oversized),
        Seed::note("3", "Last", "never reached"),
    ]);
    let (_dir, index) = open_index();
    // binding the huge body now fails with SQLITE_TOOBIG
    let _ = index.conn.set_limit(Limit::SQLITE_LIMIT_LENGTH, 20_000);

    match index.reindex(&fixture.open()) {
        Err(Error::Index { id, .. }) => assert_eq!(id, "2"),
        other => panic!("expected an index error, got {other:?}"),
    }

    assert_eq!(index.count().unwrap(), 1);
    assert_eq!(ids(&index.search("fits").unwrap()), vec!["1"]);
    assert!(index.search("never").unwrap().is_empty());
}
