use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::widgets::ListState;

use crate::api::ApiService;
use crate::config::AppConfig;
use crate::internal::models::{self, DetailStatus, Item};
use crate::internal::ui::refresh::RefreshTimer;
use crate::internal::ui::sort::{self, SortType};
use crate::internal::ui::{pager, view};

/// Application view modes.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ViewMode {
    Home,
    List,
    Detail,
}

/// Actions/messages sent through the app action channel. Load completions
/// carry the generation their fetch was started under so stale responses
/// can be discarded.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    Enter,
    Back,
    OpenBrowser,
    OpenList { page: u32 },
    NextPage,
    PrevPage,
    Refresh,
    CycleSort,
    ToggleComments,
    PageLoaded { generation: u64, items: Vec<Item> },
    PageLoadFailed { generation: u64, message: String },
    DetailLoaded { generation: u64, item: Option<Box<Item>>, comments: Vec<Item> },
    DetailLoadFailed { generation: u64, message: String },
}

/// Main application state. One view is mounted at a time; its data is
/// replaced wholesale on navigation, never shared.
pub struct App {
    pub running: bool,
    pub app_version: String,
    pub view_mode: ViewMode,
    pub page: u32,
    pub items: Vec<Item>,
    pub list_state: ListState,
    pub sort: SortType,
    pub loading: bool,
    pub list_error: Option<String>,
    pub detail: DetailStatus,
    pub comments: Vec<Item>,
    pub show_comments: bool,
    pub refresh: RefreshTimer,
    /// Bumped every time a fetch sequence starts; completions from an older
    /// generation lost the race and are ignored.
    pub generation: u64,
    pub api_service: Arc<ApiService>,
    pub config: AppConfig,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
    start_page: Option<u32>,
}

impl App {
    pub fn new(config: AppConfig, start_page: Option<u32>) -> Self {
        Self::with_api(config, ApiService::new(), start_page)
    }

    /// Construct with an explicit API service (tests swap in a mock base URL).
    pub fn with_api(config: AppConfig, api_service: ApiService, start_page: Option<u32>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let refresh = RefreshTimer::new(config.refresh_secs);

        Self {
            running: true,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            view_mode: ViewMode::Home,
            page: 1,
            items: Vec::new(),
            list_state: ListState::default(),
            sort: SortType::default(),
            loading: false,
            list_error: None,
            detail: DetailStatus::Idle,
            comments: Vec::new(),
            show_comments: false,
            refresh,
            generation: 0,
            api_service: Arc::new(api_service),
            config,
            action_tx,
            action_rx,
            start_page,
        }
    }

    pub async fn run(&mut self, mut tui: crate::tui::Tui) -> Result<()> {
        // A start page on the command line skips the home screen.
        if let Some(page) = self.start_page.take() {
            let _ = self.action_tx.send(Action::OpenList { page });
        }

        let mut event_interval = tokio::time::interval(Duration::from_millis(16));
        let mut countdown = tokio::time::interval_at(
            tokio::time::Instant::now() + Duration::from_secs(1),
            Duration::from_secs(1),
        );

        loop {
            tui.draw(|f| view::draw(self, f))?;

            tokio::select! {
                _ = event_interval.tick() => {
                    if event::poll(Duration::from_millis(0))?
                        && let Event::Key(key) = event::read()?
                        && key.kind == KeyEventKind::Press
                    {
                        self.handle_key_event(key);
                    }
                }
                _ = countdown.tick() => {
                    self.on_countdown_tick();
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            if !self.running {
                break;
            }
        }
        Ok(())
    }

    /// One-second heartbeat for the list view's auto-refresh countdown. The
    /// countdown only runs while the list is mounted; other views leave it
    /// untouched.
    pub fn on_countdown_tick(&mut self) {
        if self.view_mode != ViewMode::List {
            return;
        }
        if self.refresh.tick() {
            tracing::debug!(page = self.page, "auto refresh");
            self.load_page();
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let action = match self.view_mode {
            ViewMode::Home => match key.code {
                KeyCode::Enter => Some(Action::OpenList { page: 1 }),
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            ViewMode::List => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::NavigateDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::NavigateUp),
                KeyCode::Enter => Some(Action::Enter),
                KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
                KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
                KeyCode::Char('r') => Some(Action::Refresh),
                KeyCode::Char('s') => Some(Action::CycleSort),
                KeyCode::Char('o') => Some(Action::OpenBrowser),
                _ => None,
            },
            ViewMode::Detail => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::Back),
                KeyCode::Char('c') => Some(Action::ToggleComments),
                KeyCode::Char('o') => Some(Action::OpenBrowser),
                _ => None,
            },
        };

        if let Some(action) = action {
            let _ = self.action_tx.send(action);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NavigateUp => self.select_prev(),
            Action::NavigateDown => self.select_next(),
            Action::Enter => {
                if self.view_mode == ViewMode::List
                    && let Some(index) = self.list_state.selected()
                {
                    // Selection indices refer to the sorted display order,
                    // not the stored ranked order.
                    let displayed = self.displayed_items();
                    if let Some(item) = displayed.get(index) {
                        self.open_detail(item.id);
                    }
                }
            }
            Action::Back => {
                // Leaving the detail view remounts the list: state is
                // reloaded and the countdown starts fresh.
                self.view_mode = ViewMode::List;
                self.detail = DetailStatus::Idle;
                self.comments.clear();
                self.show_comments = false;
                self.load_page();
            }
            Action::OpenBrowser => {
                if let Some(url) = self.current_url() {
                    let _ = open::that(url);
                }
            }
            Action::OpenList { page } => {
                self.view_mode = ViewMode::List;
                self.page = page.max(1);
                self.load_page();
            }
            Action::NextPage => {
                // Forward pagination is unbounded; a page past the end of
                // the ranking just renders empty.
                self.page += 1;
                self.load_page();
            }
            Action::PrevPage => {
                if self.page > 1 {
                    self.page -= 1;
                    self.load_page();
                }
            }
            Action::Refresh => {
                tracing::debug!(page = self.page, "manual refresh");
                self.load_page();
            }
            Action::CycleSort => {
                self.sort = self.sort.cycle();
            }
            Action::ToggleComments => {
                // Purely local; comments are never re-fetched here.
                self.show_comments = !self.show_comments;
            }
            Action::PageLoaded { generation, items } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "stale page load discarded");
                    return;
                }
                self.items = items;
                self.loading = false;
                self.list_error = None;
                if self.items.is_empty() {
                    self.list_state.select(None);
                } else {
                    self.list_state.select(Some(0));
                }
            }
            Action::PageLoadFailed { generation, message } => {
                if generation != self.generation {
                    return;
                }
                self.items.clear();
                self.list_state.select(None);
                self.loading = false;
                self.list_error = Some(message);
            }
            Action::DetailLoaded { generation, item, comments } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "stale detail load discarded");
                    return;
                }
                self.detail = match item {
                    Some(item) => DetailStatus::Ready(*item),
                    None => DetailStatus::NotFound,
                };
                self.comments = comments;
            }
            Action::DetailLoadFailed { generation, message } => {
                if generation != self.generation {
                    return;
                }
                self.detail = DetailStatus::Failed(message);
                self.comments.clear();
            }
        }
    }

    /// Kick off a full re-fetch of the current page and restart the
    /// auto-refresh countdown. Prior results stay visible until the new
    /// batch lands or fails.
    fn load_page(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.loading = true;
        self.list_error = None;
        self.refresh.reset();

        let api = self.api_service.clone();
        let tx = self.action_tx.clone();
        let page = self.page;

        tokio::spawn(async move {
            match fetch_page(&api, page).await {
                Ok(items) => {
                    let _ = tx.send(Action::PageLoaded { generation, items });
                }
                Err(e) => {
                    tracing::warn!(page, error = %e, "page load failed");
                    let _ = tx.send(Action::PageLoadFailed {
                        generation,
                        message: "Failed to load stories".to_string(),
                    });
                }
            }
        });
    }

    /// Switch to the detail view and resolve the item plus all of its direct
    /// children in one batch. Issued once per entry; toggling comment
    /// visibility later never re-fetches.
    fn open_detail(&mut self, id: u32) {
        self.generation += 1;
        let generation = self.generation;
        self.view_mode = ViewMode::Detail;
        self.detail = DetailStatus::Loading;
        self.comments.clear();
        self.show_comments = false;

        let api = self.api_service.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match fetch_detail(&api, id).await {
                Ok((item, comments)) => {
                    let _ = tx.send(Action::DetailLoaded {
                        generation,
                        item: item.map(Box::new),
                        comments,
                    });
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "detail load failed");
                    let _ = tx.send(Action::DetailLoadFailed {
                        generation,
                        message: "Failed to load story".to_string(),
                    });
                }
            }
        });
    }

    /// The list in its current display order (sorted copy; stored order
    /// stays untouched).
    pub fn displayed_items(&self) -> Vec<Item> {
        sort::sort_items(&self.items, self.sort)
    }

    fn current_url(&self) -> Option<&str> {
        match (&self.view_mode, &self.detail) {
            (ViewMode::Detail, DetailStatus::Ready(item)) => item.url.as_deref(),
            (ViewMode::List, _) => {
                let index = self.list_state.selected()?;
                // Borrow through the stored items: display order only
                // permutes, so map the sorted row back by id.
                let displayed = self.displayed_items();
                let id = displayed.get(index)?.id;
                self.items
                    .iter()
                    .find(|i| i.id == id)
                    .and_then(|i| i.url.as_deref())
            }
            _ => None,
        }
    }

    fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= self.items.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }
}

/// Resolve one list page: ranked ids, the 30-wide window for `page`, then
/// every id in the window concurrently. Untitled and deleted records never
/// reach the caller.
async fn fetch_page(api: &ApiService, page: u32) -> Result<Vec<Item>> {
    let ids = api.fetch_top_ids().await?;
    let window = pager::page_slice(&ids, page);
    let fetched = api.fetch_items(window).await?;
    Ok(models::filter_titled(fetched))
}

/// Resolve a detail view: the root item, then all of its kids in one batch.
/// A null root short-circuits to `(None, [])`. Deleted kids are dropped.
async fn fetch_detail(api: &ApiService, id: u32) -> Result<(Option<Item>, Vec<Item>)> {
    let Some(item) = api.fetch_item(id).await? else {
        return Ok((None, Vec::new()));
    };

    let comments = match &item.kids {
        Some(kids) => api.fetch_items(kids).await?.into_iter().flatten().collect(),
        None => Vec::new(),
    };

    Ok((Some(item), comments))
}
