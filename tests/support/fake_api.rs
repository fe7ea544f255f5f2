//! In-process stand-in for the menu API, served over real HTTP.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use menu_board::models::{Category, MenuItem, MenuItemId, MenuNameInput, MenuState};

#[derive(Clone, Default)]
pub struct FakeApi {
    pub menu: Arc<Mutex<MenuState>>,
    pub failing: Arc<AtomicBool>,
    next_id: Arc<AtomicU64>,
}

type Reply<T> = Result<T, (StatusCode, String)>;

impl FakeApi {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn items(&self, category: Category) -> Vec<MenuItem> {
        self.menu.lock().unwrap().items(category).to_vec()
    }

    fn check(&self) -> Reply<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err((StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()))
        } else {
            Ok(())
        }
    }

    fn with_item(
        &self,
        category: Category,
        id: &str,
        f: impl FnOnce(&mut MenuItem),
    ) -> Reply<Json<MenuItem>> {
        self.check()?;
        let mut menu = self.menu.lock().unwrap();
        let item = menu
            .items_mut(category)
            .iter_mut()
            .find(|item| item.id.as_str() == id)
            .ok_or((StatusCode::NOT_FOUND, "Menu not found".to_string()))?;
        f(item);
        Ok(Json(item.clone()))
    }
}

async fn list(State(api): State<FakeApi>, Path(category): Path<Category>) -> Reply<Json<Vec<MenuItem>>> {
    api.check()?;
    Ok(Json(api.items(category)))
}

async fn create(
    State(api): State<FakeApi>,
    Path(category): Path<Category>,
    Json(input): Json<MenuNameInput>,
) -> Reply<(StatusCode, Json<MenuItem>)> {
    api.check()?;
    let mut menu = api.menu.lock().unwrap();
    if menu.contains_name(category, &input.name) {
        return Err((StatusCode::BAD_REQUEST, "duplicate".to_string()));
    }
    let id = api.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let item = MenuItem::new(MenuItemId::new(format!("srv-{}", id)), input.name);
    menu.items_mut(category).push(item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update(
    State(api): State<FakeApi>,
    Path((category, id)): Path<(Category, String)>,
    Json(input): Json<MenuNameInput>,
) -> Reply<Json<MenuItem>> {
    api.with_item(category, &id, |item| item.name = input.name)
}

async fn toggle(
    State(api): State<FakeApi>,
    Path((category, id)): Path<(Category, String)>,
) -> Reply<Json<MenuItem>> {
    api.with_item(category, &id, |item| item.is_sold_out = !item.is_sold_out)
}

async fn delete(
    State(api): State<FakeApi>,
    Path((category, id)): Path<(Category, String)>,
) -> Reply<StatusCode> {
    api.check()?;
    let mut menu = api.menu.lock().unwrap();
    let items = menu.items_mut(category);
    let before = items.len();
    items.retain(|item| item.id.as_str() != id);
    if items.len() == before {
        return Err((StatusCode::NOT_FOUND, "Menu not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router(api: FakeApi) -> Router {
    Router::new()
        .route("/api/category/{category}/menu", get(list).post(create))
        .route(
            "/api/category/{category}/menu/{id}",
            put(update).delete(delete),
        )
        .route("/api/category/{category}/menu/{id}/soldout", put(toggle))
        .with_state(api)
}

/// Serve a fresh fake API on an ephemeral port.
pub async fn spawn() -> (FakeApi, String) {
    let api = FakeApi::default();
    let app = router(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    (api, format!("http://{}", addr))
}
