//! Interactive browse loop.
//!
//! The controller owns the `SearchSession` and the gallery, and every stdin
//! line is turned into one event handled against them. Failures are reported
//! and the loop keeps reading.

use crate::domain::constants::{
    NOTICE_EMPTY_QUERY, NOTICE_END_OF_RESULTS, NOTICE_NO_RESULTS, notice_found,
};
use crate::domain::models::{BrowseStep, ItemRow};
use crate::services::config::Settings;
use crate::services::output::{item_line, notify, print_line, print_out};
use crate::services::render::Gallery;
use crate::services::session::{SearchError, SearchOutcome, SearchSession, SessionState};
use crate::services::source::{ImageSource, open_source};
use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseEvent {
    Submit(String),
    LoadMore,
    Top,
    Quit,
}

pub fn parse_event(line: &str) -> BrowseEvent {
    match line.trim() {
        ":more" | ":m" => BrowseEvent::LoadMore,
        ":top" => BrowseEvent::Top,
        ":quit" | ":q" => BrowseEvent::Quit,
        _ => BrowseEvent::Submit(line.to_string()),
    }
}

pub struct BrowseController<S> {
    session: SearchSession<S>,
    gallery: Gallery,
    json: bool,
    html: Option<PathBuf>,
}

impl<S: ImageSource> BrowseController<S> {
    pub fn new(session: SearchSession<S>, json: bool, html: Option<PathBuf>) -> Self {
        BrowseController {
            session,
            gallery: Gallery::new(),
            json,
            html,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Applies one event. `Quit` yields no step.
    pub fn handle(&mut self, event: BrowseEvent) -> Option<BrowseStep> {
        let mut step = match event {
            BrowseEvent::Quit => return None,
            BrowseEvent::Submit(query) => self.submit(&query),
            BrowseEvent::LoadMore => self.load_more(),
            BrowseEvent::Top => {
                let mut step = self.step("top");
                if self.gallery.is_empty() {
                    step.notices.push("gallery is empty".to_string());
                } else {
                    step.notices.push(format!(
                        "showing {} images for \"{}\"",
                        self.gallery.len(),
                        self.session.query()
                    ));
                }
                step
            }
        };
        if let Some(path) = &self.html {
            if let Err(e) = self.gallery.write_document(path, self.session.query()) {
                tracing::warn!(path = %path.display(), error = %e, "gallery write failed");
                step.error.get_or_insert_with(|| e.to_string());
            }
        }
        Some(step)
    }

    fn submit(&mut self, query: &str) -> BrowseStep {
        self.gallery.clear();
        match self.session.start_search(query) {
            Ok(SearchOutcome::Page(page)) => {
                let mut step = self.step("search");
                step.notices.push(notice_found(page.total_hits));
                self.gallery.append_records(&page.hits);
                step.items = page.hits.iter().map(ItemRow::from).collect();
                step
            }
            Ok(SearchOutcome::NoResults) => {
                let mut step = self.step("search");
                step.notices.push(NOTICE_NO_RESULTS.to_string());
                step
            }
            Err(SearchError::EmptyQuery) => {
                let mut step = self.step("search");
                step.notices.push(NOTICE_EMPTY_QUERY.to_string());
                step
            }
            Err(e) => {
                let mut step = self.step("search");
                step.error = Some(e.to_string());
                step
            }
        }
    }

    fn load_more(&mut self) -> BrowseStep {
        match self.session.load_more() {
            Ok(page) => {
                let mut step = self.step("more");
                self.gallery.append_records(&page.hits);
                step.items = page.hits.iter().map(ItemRow::from).collect();
                if self.session.is_exhausted() {
                    step.notices.push(NOTICE_END_OF_RESULTS.to_string());
                }
                step
            }
            Err(e) => {
                let mut step = self.step("more");
                step.error = Some(e.to_string());
                step
            }
        }
    }

    fn step(&self, event: &str) -> BrowseStep {
        let has_results = matches!(self.session.state(), SessionState::HasResults { .. });
        BrowseStep {
            event: event.to_string(),
            query: self.session.query().to_string(),
            page: if has_results { self.session.page() } else { 0 },
            total_hits: self.session.total_hits(),
            more_available: has_results && !self.session.is_exhausted(),
            items: Vec::new(),
            notices: Vec::new(),
            error: None,
        }
    }

    /// Reads raw lines so one undecodable line is reported instead of
    /// ending the session.
    pub fn run(&mut self, mut input: impl BufRead) -> anyhow::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let step = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim_end_matches(['\n', '\r']);
                    let Some(step) = self.handle(parse_event(line)) else {
                        break;
                    };
                    step
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable input line");
                    let mut step = self.step("input");
                    step.error = Some(format!("input line is not valid UTF-8: {}", e));
                    step
                }
            };
            self.emit(step)?;
        }
        Ok(())
    }

    fn emit(&self, step: BrowseStep) -> anyhow::Result<()> {
        if self.json {
            return print_line(step);
        }
        print_out(false, &step.items, item_line)?;
        for n in &step.notices {
            notify(false, n);
        }
        if let Some(e) = &step.error {
            eprintln!("error: {}", e);
        }
        if step.more_available {
            eprintln!("[more available]");
        }
        Ok(())
    }
}

pub fn handle_browse(json: bool, settings: &Settings, html: Option<&Path>) -> anyhow::Result<()> {
    let source = open_source(
        &settings.source,
        settings.api_key.as_deref(),
        settings.filters.clone(),
    )?;
    let session = SearchSession::with_per_page(source, settings.per_page);
    let mut controller = BrowseController::new(session, json, html.map(Path::to_path_buf));
    let stdin = std::io::stdin();
    controller.run(stdin.lock())
}
