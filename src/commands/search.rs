use crate::domain::constants::{
    NOTICE_EMPTY_QUERY, NOTICE_END_OF_RESULTS, NOTICE_NO_RESULTS, notice_found,
};
use crate::domain::models::{ItemRow, ResultPage, SearchReport};
use crate::services::config::Settings;
use crate::services::output::{item_line, notify, print_out, print_report};
use crate::services::render::Gallery;
use crate::services::session::{SearchError, SearchOutcome, SearchSession};
use crate::services::source::{ImageSource, open_source};
use std::path::Path;

pub fn handle_search(
    json: bool,
    settings: &Settings,
    query: &str,
    pages: u32,
    all: bool,
    html: Option<&Path>,
) -> anyhow::Result<()> {
    let source = open_source(
        &settings.source,
        settings.api_key.as_deref(),
        settings.filters.clone(),
    )?;
    let mut session = SearchSession::with_per_page(source, settings.per_page);
    let mut gallery = Gallery::new();
    let report = run_search(json, &mut session, &mut gallery, query, pages, all)?;

    if let Some(path) = html {
        gallery.write_document(path, &report.query)?;
    }
    if json {
        print_report(report.error.is_none(), &report)?;
    } else if report.error.is_none() && report.pages_fetched > 0 && !report.exhausted {
        eprintln!(
            "[more available] fetched {} of {} pages; use --pages or --all",
            report.pages_fetched,
            total_pages(report.total_hits, session.per_page())
        );
    }
    match report.error {
        Some(e) => Err(anyhow::anyhow!(e)),
        None => Ok(()),
    }
}

/// Fetches page 1, then loads more until `pages` pages are in or the query
/// runs out. Text rows are printed as each page arrives.
///
/// Search failures end paging and land in `report.error`; pages already
/// fetched stay in the report.
pub fn run_search<S: ImageSource>(
    json: bool,
    session: &mut SearchSession<S>,
    gallery: &mut Gallery,
    query: &str,
    pages: u32,
    all: bool,
) -> anyhow::Result<SearchReport> {
    let mut report = SearchReport {
        query: query.trim().to_string(),
        ..Default::default()
    };
    gallery.clear();

    let first = match session.start_search(query) {
        Ok(SearchOutcome::Page(page)) => page,
        Ok(SearchOutcome::NoResults) => {
            notify(json, NOTICE_NO_RESULTS);
            report.notices.push(NOTICE_NO_RESULTS.to_string());
            return Ok(report);
        }
        Err(SearchError::EmptyQuery) => {
            notify(json, NOTICE_EMPTY_QUERY);
            report.notices.push(NOTICE_EMPTY_QUERY.to_string());
            report.error = Some(SearchError::EmptyQuery.to_string());
            return Ok(report);
        }
        Err(e) => {
            report.error = Some(e.to_string());
            return Ok(report);
        }
    };

    let found = notice_found(first.total_hits);
    notify(json, &found);
    report.notices.push(found);
    accept_page(json, &mut report, gallery, &first)?;

    let wanted = pages.max(1);
    while !session.is_exhausted() && (all || report.pages_fetched < wanted) {
        let page = match session.load_more() {
            Ok(page) => page,
            Err(e) => {
                report.error = Some(e.to_string());
                break;
            }
        };
        accept_page(json, &mut report, gallery, &page)?;
        if session.is_exhausted() {
            notify(json, NOTICE_END_OF_RESULTS);
            report.notices.push(NOTICE_END_OF_RESULTS.to_string());
        }
    }

    report.total_hits = session.total_hits();
    report.exhausted = session.is_exhausted();
    Ok(report)
}

fn accept_page(
    json: bool,
    report: &mut SearchReport,
    gallery: &mut Gallery,
    page: &ResultPage,
) -> anyhow::Result<()> {
    let rows: Vec<ItemRow> = page.hits.iter().map(ItemRow::from).collect();
    if !json {
        print_out(false, &rows, item_line)?;
    }
    gallery.append_records(&page.hits);
    report.pages_fetched += 1;
    report.total_hits = page.total_hits;
    report.items.extend(rows);
    Ok(())
}

pub fn total_pages(total_hits: u64, per_page: u32) -> u64 {
    total_hits.div_ceil(u64::from(per_page.max(1)))
}
