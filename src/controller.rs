// file: src/controller.rs
// description: page handles, event bindings and the search/clear actions
// reference: fetch, match, de-duplicate and render pipeline per search

use crate::loader::DatasetSource;
use crate::models::ResultItem;
use crate::render::{Renderer, View};
use crate::search::{SearchQuery, dedup_results, match_items};
use tracing::{debug, error, info};

/// Text field the query is typed into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub value: String,
}

/// A pressable control. Presence on the page is all that matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button;

/// Region that shows the current view. Writes always replace the whole content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRegion {
    view: Option<View>,
}

impl OutputRegion {
    pub fn replace(&mut self, view: View) {
        self.view = Some(view);
    }

    pub fn clear(&mut self) {
        self.view = None;
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn take(&mut self) -> Option<View> {
        self.view.take()
    }
}

/// Structural handles the controller acts on. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub search_input: Option<SearchInput>,
    pub search_button: Option<Button>,
    pub clear_button: Option<Button>,
    pub output: Option<OutputRegion>,
}

impl Page {
    /// A page with every element present and empty.
    pub fn complete() -> Self {
        Self {
            search_input: Some(SearchInput::default()),
            search_button: Some(Button),
            clear_button: Some(Button),
            output: Some(OutputRegion::default()),
        }
    }

    pub fn set_query(&mut self, raw: &str) {
        if let Some(input) = self.search_input.as_mut() {
            input.value = raw.to_string();
        }
    }

    pub fn current_view(&self) -> Option<&View> {
        self.output.as_ref().and_then(OutputRegion::view)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SearchClicked,
    ClearClicked,
    /// Key pressed while the search input has focus.
    KeyPressed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    SearchClick,
    ClearClick,
    EnterKey,
}

impl Trigger {
    fn matches(self, event: &Event) -> bool {
        match (self, event) {
            (Trigger::SearchClick, Event::SearchClicked) => true,
            (Trigger::ClearClick, Event::ClearClicked) => true,
            (Trigger::EnterKey, Event::KeyPressed(key)) => key == "Enter",
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Clear,
}

/// Trigger to action table built once the page is ready.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(Trigger, Action)>,
}

impl Bindings {
    /// Page-ready initialization: binds triggers only for elements that exist.
    pub fn for_page(page: &Page) -> Self {
        let mut bindings = Self::default();

        if page.search_button.is_some() {
            bindings.register(Trigger::SearchClick, Action::Search);
        }
        if page.clear_button.is_some() {
            bindings.register(Trigger::ClearClick, Action::Clear);
        }
        if page.search_input.is_some() {
            bindings.register(Trigger::EnterKey, Action::Search);
        }

        debug!("Registered {} bindings", bindings.entries.len());
        bindings
    }

    pub fn register(&mut self, trigger: Trigger, action: Action) {
        self.entries.push((trigger, action));
    }

    pub fn action_for(&self, event: &Event) -> Option<Action> {
        self.entries
            .iter()
            .find(|(trigger, _)| trigger.matches(event))
            .map(|(_, action)| *action)
    }

    pub fn triggers(&self) -> impl Iterator<Item = Trigger> + '_ {
        self.entries.iter().map(|(trigger, _)| *trigger)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const QUIT_COMMAND: &str = ":quit";
pub const CLEAR_COMMAND: &str = ":clear";

/// Maps one line typed at the interactive prompt to the event it stands for.
/// `None` means the session should end. Any other text becomes the query and
/// presses Enter in the search input.
pub fn event_for_line(line: &str, page: &mut Page) -> Option<Event> {
    match line.trim() {
        QUIT_COMMAND => None,
        CLEAR_COMMAND => Some(Event::ClearClicked),
        _ => {
            page.set_query(line);
            Some(Event::KeyPressed("Enter".to_string()))
        }
    }
}

/// What a search invocation did. Failures are already rendered; nothing propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Input or output element missing.
    Skipped,
    Prompted,
    Failed,
    Rendered { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Ignored,
    Searched(SearchOutcome),
    Cleared,
}

pub struct Controller<S> {
    source: S,
    renderer: Renderer,
}

impl<S: DatasetSource> Controller<S> {
    pub fn new(source: S, renderer: Renderer) -> Self {
        Self { source, renderer }
    }

    pub async fn dispatch(&self, bindings: &Bindings, event: &Event, page: &mut Page) -> Handled {
        match bindings.action_for(event) {
            Some(Action::Search) => Handled::Searched(self.search(page).await),
            Some(Action::Clear) => {
                self.clear(page);
                Handled::Cleared
            }
            None => Handled::Ignored,
        }
    }

    /// Reads the query from the page, fetches a fresh dataset, and replaces the
    /// output with the resulting view.
    pub async fn search(&self, page: &mut Page) -> SearchOutcome {
        let (Some(input), Some(_)) = (page.search_input.as_ref(), page.output.as_ref()) else {
            debug!("Search skipped: page elements missing");
            return SearchOutcome::Skipped;
        };

        let Some(query) = SearchQuery::parse(&input.value) else {
            Self::show(page, self.renderer.prompt());
            return SearchOutcome::Prompted;
        };

        let dataset = match self.source.fetch().await {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(
                    "Unable to load travel data from {}: {}",
                    self.source.describe(),
                    e
                );
                Self::show(page, self.renderer.load_error());
                return SearchOutcome::Failed;
            }
        };

        let results: Vec<ResultItem> = dedup_results(match_items(&query, &dataset));
        info!("Search {:?} produced {} results", query.term(), results.len());

        let count = results.len();
        Self::show(page, self.renderer.results(&results));
        SearchOutcome::Rendered { count }
    }

    pub fn clear(&self, page: &mut Page) {
        if let Some(input) = page.search_input.as_mut() {
            input.value.clear();
        }
        if let Some(output) = page.output.as_mut() {
            output.clear();
        }
    }

    /// Runs one search on a throwaway page and returns what it rendered.
    pub async fn search_view(&self, raw: &str) -> (SearchOutcome, View) {
        let mut page = Page::complete();
        page.set_query(raw);

        let outcome = self.search(&mut page).await;
        let view = page
            .output
            .as_mut()
            .and_then(OutputRegion::take)
            .unwrap_or_else(|| self.renderer.prompt());
        (outcome, view)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn show(page: &mut Page, view: View) {
        if let Some(output) = page.output.as_mut() {
            output.replace(view);
        }
    }
}
