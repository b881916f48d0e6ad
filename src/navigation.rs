//! Navigation host - the stack of live screens
//!
//! A [`Route`] names a screen and carries exactly the parameters that screen
//! needs. [`Navigator::navigate`] turns a route into a fresh screen instance
//! and pushes it; [`Navigator::back`] pops it again, revealing the previous
//! instance with its state intact.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    CatalogComponent, DetailComponent, InfoComponent, InfoPage, SessionEntryComponent,
};
use crate::model::DetailParams;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// The fixed set of screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenName {
    SessionEntry,
    Catalog,
    Detail,
    About,
    Contact,
    CashOut,
}

impl ScreenName {
    /// Title shown in the header bar
    pub fn title(&self) -> &'static str {
        match self {
            ScreenName::SessionEntry => "Spring Smart",
            ScreenName::Catalog => "Shopping Items",
            ScreenName::Detail => "Item Details",
            ScreenName::About => "About",
            ScreenName::Contact => "Contact",
            ScreenName::CashOut => "Cash Out",
        }
    }
}

/// A navigation request: screen name plus that screen's parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SessionEntry,
    Catalog,
    Detail(DetailParams),
    About,
    Contact,
    CashOut,
}

impl Route {
    pub fn name(&self) -> ScreenName {
        match self {
            Route::SessionEntry => ScreenName::SessionEntry,
            Route::Catalog => ScreenName::Catalog,
            Route::Detail(_) => ScreenName::Detail,
            Route::About => ScreenName::About,
            Route::Contact => ScreenName::Contact,
            Route::CashOut => ScreenName::CashOut,
        }
    }
}

/// A live screen instance on the stack
pub enum Screen {
    SessionEntry(SessionEntryComponent),
    Catalog(CatalogComponent),
    Detail(DetailComponent),
    Info(InfoComponent),
}

impl Screen {
    /// Build a fresh instance for `route`
    pub fn from_route(route: Route) -> Self {
        match route {
            Route::SessionEntry => Screen::SessionEntry(SessionEntryComponent::new()),
            Route::Catalog => Screen::Catalog(CatalogComponent::new()),
            Route::Detail(params) => Screen::Detail(DetailComponent::new(params)),
            Route::About => Screen::Info(InfoComponent::new(InfoPage::About)),
            Route::Contact => Screen::Info(InfoComponent::new(InfoPage::Contact)),
            Route::CashOut => Screen::Info(InfoComponent::new(InfoPage::CashOut)),
        }
    }

    pub fn name(&self) -> ScreenName {
        match self {
            Screen::SessionEntry(_) => ScreenName::SessionEntry,
            Screen::Catalog(_) => ScreenName::Catalog,
            Screen::Detail(_) => ScreenName::Detail,
            Screen::Info(info) => info.page().screen_name(),
        }
    }

    /// Key hints for the help bar
    pub fn help_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Screen::SessionEntry(_) => SessionEntryComponent::HELP,
            Screen::Catalog(_) => CatalogComponent::HELP,
            Screen::Detail(_) | Screen::Info(_) => &[("Esc", "Back")],
        }
    }

    fn component_mut(&mut self) -> &mut dyn Component {
        match self {
            Screen::SessionEntry(c) => c,
            Screen::Catalog(c) => c,
            Screen::Detail(c) => c,
            Screen::Info(c) => c,
        }
    }
}

impl Component for Screen {
    fn init(&mut self) -> Result<()> {
        self.component_mut().init()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.component_mut().handle_key_event(key)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        self.component_mut().update(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.component_mut().draw(frame, area)
    }
}

/// Ordered stack of screens; the last entry is the one on display
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// A stack holding only the session entry screen
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::from_route(Route::SessionEntry)],
        }
    }

    /// Push a new instance of the routed screen
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        let mut screen = Screen::from_route(route);
        screen.init()?;
        self.stack.push(screen);
        tracing::debug!(screen = self.current().name().title(), depth = self.depth(), "navigate");
        Ok(())
    }

    /// Pop the current screen; the root screen is never popped
    pub fn back(&mut self) -> Option<Screen> {
        if !self.can_go_back() {
            return None;
        }
        let popped = self.stack.pop();
        tracing::debug!(stack = ?self.names(), "back");
        popped
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current(&self) -> &Screen {
        // The root is never popped, so the stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    /// Screen names from bottom to top
    pub fn names(&self) -> Vec<ScreenName> {
        self.stack.iter().map(Screen::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_catalog;

    #[test]
    fn test_starts_at_session_entry() {
        let nav = Navigator::new();
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().name(), ScreenName::SessionEntry);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_navigate_pushes_and_back_pops() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Catalog).unwrap();
        nav.navigate(Route::About).unwrap();
        assert_eq!(
            nav.names(),
            vec![ScreenName::SessionEntry, ScreenName::Catalog, ScreenName::About]
        );

        let popped = nav.back().unwrap();
        assert_eq!(popped.name(), ScreenName::About);
        assert_eq!(nav.current().name(), ScreenName::Catalog);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        assert!(nav.back().is_none());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().name(), ScreenName::SessionEntry);
    }

    #[test]
    fn test_same_screen_can_be_pushed_twice() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Catalog).unwrap();
        nav.navigate(Route::Catalog).unwrap();
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_detail_route_carries_params() {
        let item = &build_catalog()[4];
        let mut nav = Navigator::new();
        nav.navigate(Route::Detail(DetailParams::from(item))).unwrap();

        match nav.current() {
            Screen::Detail(detail) => {
                assert_eq!(detail.params.title, "Item 5");
                assert_eq!(detail.params.price, "$25");
            }
            _ => panic!("expected detail screen"),
        }
    }

    #[test]
    fn test_route_names_and_titles() {
        assert_eq!(Route::CashOut.name(), ScreenName::CashOut);
        assert_eq!(Route::Catalog.name().title(), "Shopping Items");
        assert_eq!(ScreenName::SessionEntry.title(), "Spring Smart");
        assert_eq!(ScreenName::Detail.title(), "Item Details");
    }

    #[test]
    fn test_info_routes_build_info_screens() {
        for (route, name) in [
            (Route::About, ScreenName::About),
            (Route::Contact, ScreenName::Contact),
            (Route::CashOut, ScreenName::CashOut),
        ] {
            assert_eq!(Screen::from_route(route).name(), name);
        }
    }
}
