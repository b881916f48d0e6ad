//! Root application component
//!
//! The App owns the navigation stack and the modal stack. Key events go to
//! the top modal if there is one, otherwise to the current screen; the
//! resulting Actions are applied here. App coordinates between screens but
//! holds no screen state itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_screen_layout, render_header, render_help_bar, NotificationDialog, QuitDialog,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::Notification;
use crate::navigation::{Navigator, Screen};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between screens
pub struct App {
    /// Screen stack
    pub navigator: Navigator,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    pub quit_dialog: QuitDialog,
    pub notification_dialog: NotificationDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new() -> App {
        App {
            navigator: Navigator::new(),
            modals: ModalStack::new(),
            should_quit: false,
            quit_dialog: QuitDialog,
            notification_dialog: NotificationDialog::default(),
        }
    }

    /// Apply an action and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current_action = Some(action);
        while let Some(a) = current_action {
            current_action = self.update(a)?;
        }
        Ok(())
    }

    /// Show a notification above the current screen until acknowledged
    pub fn notify(&mut self, notification: Notification) {
        tracing::info!(title = %notification.title, "notification shown");
        self.modals.push(Modal::Notification(notification));
    }

    /// Submit the session form on the current screen
    ///
    /// Returns the navigation the submit asks for, if any.
    fn submit_credentials(&mut self) -> Option<Action> {
        let Screen::SessionEntry(session) = self.navigator.current() else {
            return None;
        };
        let credentials = &session.credentials;
        tracing::info!(
            mode = credentials.mode.label(),
            email_len = credentials.email.len(),
            password_len = credentials.password.len(),
            "credentials submitted"
        );

        let outcome = session.submit();
        self.notify(outcome.notification);
        outcome.next.map(Action::Navigate)
    }

    fn help_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.modals.top() {
            Some(Modal::QuitConfirm) => &[("y", "Quit"), ("n", "Stay")],
            Some(Modal::Notification(_)) => &[("Enter", "OK")],
            None => self.navigator.current().help_hints(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.navigator.current_mut().init()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Notification(_)) => self.notification_dialog.handle_key_event(key),
            None => self.navigator.current_mut().handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(route) => self.navigator.navigate(route)?,
            Action::Back => {
                self.navigator.back();
            }

            // ─────────────────────────────────────────────────────────────────
            // Session Entry
            // ─────────────────────────────────────────────────────────────────
            Action::SubmitCredentials => return Ok(self.submit_credentials()),
            Action::ToggleAuthMode => {
                return self.navigator.current_mut().update(Action::ToggleAuthMode);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_screen_layout(area);

        let screen_name = self.navigator.current().name();
        render_header(
            frame,
            layout.header,
            screen_name.title(),
            self.navigator.can_go_back(),
        );
        self.navigator.current_mut().draw(frame, layout.body)?;
        render_help_bar(frame, layout.help, self.help_hints());

        // Modals are drawn bottom to top over the whole frame
        for modal in self.modals.iter() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Notification(notification) => {
                    self.notification_dialog.set_notification(notification);
                    self.notification_dialog.draw(frame, area)?;
                }
            }
        }
        Ok(())
    }
}
