#![allow(dead_code)]

pub mod fake_api;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use menu_board::api::ClientError;
use menu_board::backend::{LocalBackend, MenuBackend};
use menu_board::controller::Prompter;
use menu_board::error::{MenuError, MenuResult};
use menu_board::models::{Category, MenuItem, MenuItemId};
use menu_board::storage::{SqliteStorage, StorageAdapter};

pub fn local_backend() -> LocalBackend<SqliteStorage> {
    let storage = SqliteStorage::open_memory().expect("Failed to open storage");
    storage.migrate().expect("Failed to migrate storage");
    LocalBackend::new(storage)
}

/// In-memory storage whose writes can be switched to fail.
#[derive(Default)]
pub struct FailingStorage {
    pub failing: AtomicBool,
    values: Mutex<Vec<(String, String)>>,
}

impl FailingStorage {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl StorageAdapter for FailingStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let values = self.values.lock().unwrap();
        Ok(values.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("disk I/O error");
        }
        let mut values = self.values.lock().unwrap();
        values.retain(|(k, _)| k != key);
        values.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

pub fn failing_backend() -> LocalBackend<FailingStorage> {
    LocalBackend::new(FailingStorage::default())
}

/// Prompter answering from queues and recording every alert.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub answers: VecDeque<Option<String>>,
    pub confirms: VecDeque<bool>,
    pub prompts: Vec<(String, String)>,
    pub alerts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn answering(answer: Option<&str>) -> Self {
        Self {
            answers: VecDeque::from([answer.map(str::to_string)]),
            ..Self::default()
        }
    }

    pub fn confirming(confirm: bool) -> Self {
        Self {
            confirms: VecDeque::from([confirm]),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.prompts.push((message.to_string(), default.to_string()));
        self.answers.pop_front().flatten()
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirms.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// Backend wrapper that fails every call while `offline` is set, or only
/// `list` while `list_offline` is set.
pub struct FlakyBackend<B> {
    pub inner: B,
    pub offline: AtomicBool,
    pub list_offline: AtomicBool,
}

impl<B> FlakyBackend<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            offline: AtomicBool::new(false),
            list_offline: AtomicBool::new(false),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_list_offline(&self, offline: bool) {
        self.list_offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> MenuResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(MenuError::Communication(ClientError::Server(
                "503 Service Unavailable: offline".to_string(),
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<B: MenuBackend> MenuBackend for FlakyBackend<B> {
    async fn list(&self, category: Category) -> MenuResult<Vec<MenuItem>> {
        self.check()?;
        if self.list_offline.load(Ordering::SeqCst) {
            return Err(MenuError::Communication(ClientError::Server(
                "503 Service Unavailable: list offline".to_string(),
            )));
        }
        self.inner.list(category).await
    }

    async fn create(&self, category: Category, name: &str) -> MenuResult<MenuItem> {
        self.check()?;
        self.inner.create(category, name).await
    }

    async fn update(
        &self,
        category: Category,
        id: &MenuItemId,
        name: &str,
    ) -> MenuResult<MenuItem> {
        self.check()?;
        self.inner.update(category, id, name).await
    }

    async fn toggle_sold_out(&self, category: Category, id: &MenuItemId) -> MenuResult<MenuItem> {
        self.check()?;
        self.inner.toggle_sold_out(category, id).await
    }

    async fn delete(&self, category: Category, id: &MenuItemId) -> MenuResult<()> {
        self.check()?;
        self.inner.delete(category, id).await
    }
}
