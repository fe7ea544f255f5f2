use async_trait::async_trait;

use super::MenuBackend;
use crate::api::{ClientError, MenuClient};
use crate::error::{MenuError, MenuResult};
use crate::models::{Category, MenuItem, MenuItemId};

/// Backend that forwards every operation to the menu API.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    client: MenuClient,
}

impl RemoteBackend {
    pub fn new(client: MenuClient) -> Self {
        Self { client }
    }

    /// A 404 on an item route means the id is gone, not that the server is down.
    fn item_err(id: &MenuItemId, e: ClientError) -> MenuError {
        match e {
            ClientError::NotFound(_) => MenuError::NotFound(id.clone()),
            other => MenuError::Communication(other),
        }
    }
}

#[async_trait]
impl MenuBackend for RemoteBackend {
    async fn list(&self, category: Category) -> MenuResult<Vec<MenuItem>> {
        Ok(self.client.list(category).await?)
    }

    async fn create(&self, category: Category, name: &str) -> MenuResult<MenuItem> {
        Ok(self.client.create(category, name).await?)
    }

    async fn update(
        &self,
        category: Category,
        id: &MenuItemId,
        name: &str,
    ) -> MenuResult<MenuItem> {
        self.client
            .update(category, id, name)
            .await
            .map_err(|e| Self::item_err(id, e))
    }

    async fn toggle_sold_out(&self, category: Category, id: &MenuItemId) -> MenuResult<MenuItem> {
        self.client
            .toggle_sold_out(category, id)
            .await
            .map_err(|e| Self::item_err(id, e))
    }

    async fn delete(&self, category: Category, id: &MenuItemId) -> MenuResult<()> {
        self.client
            .delete(category, id)
            .await
            .map_err(|e| Self::item_err(id, e))
    }
}
