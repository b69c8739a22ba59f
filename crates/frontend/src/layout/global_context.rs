use contracts::system::auth::{LoginRequest, Session};
use contracts::system::navigation::Page;
use leptos::prelude::*;

use super::page_state::PageState;

/// State shared by every page: the session flag and the page shown in the
/// content area. Each navigation replaces `page_state` with a fresh one.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<Session>,
    pub current_page: RwSignal<Page>,
    pub page_state: RwSignal<PageState>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            current_page: RwSignal::new(Page::default()),
            page_state: RwSignal::new(PageState::default()),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(|s| s.logged_in)
    }

    pub fn login(&self, request: &LoginRequest) {
        log::info!("login: email='{}'", request.email);
        self.session.update(|s| s.login(request));
    }

    /// Signs out and returns to the dashboard, so the next login starts there.
    pub fn logout(&self) {
        log::info!("logout");
        self.session.update(|s| s.logout());
        self.navigate(Page::Dashboard);
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: '{}' -> '{}'", self.current_page.get_untracked().key(), page.key());
        self.current_page.set(page);
        self.page_state.set(PageState::for_page(page));
    }

    /// Sidebar links carry the page key.
    pub fn navigate_by_key(&self, key: &str) {
        self.navigate(Page::from_key_or_default(key));
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
