//! Event controller: turns user events into store calls and redraws.
//!
//! The controller sits idle between events. Each event is translated into an
//! [`Intent`]; edits and deletes ask the [`Prompter`] first and do nothing if
//! the user backs out. Successful mutations re-render from the store, which
//! has already re-read the backend.

mod event;
mod prompt;

pub use event::*;
pub use prompt::Prompter;

use std::sync::Arc;

use crate::backend::MenuBackend;
use crate::error::{MenuError, MenuResult, ValidationError};
use crate::render::{render_view, MenuView};
use crate::store::MenuStore;

pub const EMPTY_NAME_NOTICE: &str = "값을 입력해주세요";
pub const DUPLICATE_NAME_NOTICE: &str = "이미 등록된 메뉴입니다";
pub const COMMUNICATION_NOTICE: &str = "메뉴 서버와 통신하지 못했습니다. 다시 시도해주세요";
pub const STORAGE_NOTICE: &str = "메뉴를 저장하지 못했습니다. 다시 시도해주세요";
pub const EDIT_PROMPT: &str = "메뉴명을 수정하세요";
pub const DELETE_CONFIRM: &str = "정말 삭제하시겠습니까?";

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// State may have changed and the view was redrawn.
    Rendered,
    /// Nothing to do, or the user cancelled.
    Ignored,
    /// The action failed and the user was told.
    Notified,
}

pub struct Controller<B, P> {
    store: Arc<MenuStore<B>>,
    prompter: P,
    input: String,
    view: MenuView,
}

impl<B: MenuBackend, P: Prompter> Controller<B, P> {
    pub fn new(store: Arc<MenuStore<B>>, prompter: P) -> Self {
        let view = render_view(store.current_category(), store.current_items());
        Self {
            store,
            prompter,
            input: String::new(),
            view,
        }
    }

    /// Load the current category and draw it.
    pub async fn start(&mut self) -> Dispatch {
        let category = self.store.current_category();
        let result = self.store.set_current_category(category).await.map(|_| ());
        self.finish(result)
    }

    pub fn view(&self) -> &MenuView {
        &self.view
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn store(&self) -> &Arc<MenuStore<B>> {
        &self.store
    }

    pub async fn handle(&mut self, event: UiEvent) -> Dispatch {
        if let UiEvent::Input(text) = event {
            self.input = text;
            return Dispatch::Ignored;
        }

        match translate(&event, &self.view.items, &self.input) {
            Some(intent) => self.dispatch(intent).await,
            None => Dispatch::Ignored,
        }
    }

    pub async fn dispatch(&mut self, intent: Intent) -> Dispatch {
        tracing::debug!(?intent, "dispatching");
        let result: MenuResult<()> = match intent {
            Intent::Add(name) => match self.store.add(&name).await {
                Ok(_) => {
                    self.input.clear();
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Intent::Edit(id) => {
                let current = self
                    .view
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .map(|item| item.name.clone())
                    .unwrap_or_default();
                let Some(name) = self.prompter.prompt(EDIT_PROMPT, &current) else {
                    return Dispatch::Ignored;
                };
                self.store.rename(&id, &name).await.map(|_| ())
            }
            Intent::Delete(id) => {
                if !self.prompter.confirm(DELETE_CONFIRM) {
                    return Dispatch::Ignored;
                }
                self.store.remove(&id).await.map(|_| ())
            }
            Intent::ToggleSoldOut(id) => self.store.toggle_sold_out(&id).await.map(|_| ()),
            Intent::SwitchCategory(category) => self
                .store
                .set_current_category(category)
                .await
                .map(|_| ()),
        };
        self.finish(result)
    }

    fn finish(&mut self, result: MenuResult<()>) -> Dispatch {
        match result {
            Ok(()) => {
                self.view = render_view(self.store.current_category(), self.store.current_items());
                Dispatch::Rendered
            }
            Err(e) => self.notify(e),
        }
    }

    fn notify(&mut self, error: MenuError) -> Dispatch {
        let notice = match &error {
            MenuError::Validation(ValidationError::EmptyName) => EMPTY_NAME_NOTICE,
            MenuError::Validation(ValidationError::DuplicateName(_)) => DUPLICATE_NAME_NOTICE,
            MenuError::Communication(e) => {
                tracing::error!(error = %e, "menu api call failed");
                COMMUNICATION_NOTICE
            }
            MenuError::Storage(e) => {
                tracing::error!(error = %e, "menu storage write failed");
                STORAGE_NOTICE
            }
            MenuError::NotFound(id) => {
                tracing::warn!(%id, "menu item not found");
                return Dispatch::Ignored;
            }
        };
        self.prompter.alert(notice);
        Dispatch::Notified
    }
}
