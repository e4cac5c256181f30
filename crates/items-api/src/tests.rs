//! Sync Boundary Tests
//!
//! Drives `ItemListState` through `execute` against an in-memory API,
//! the same way the UI dispatcher does.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::ItemApi;
use crate::domain::{FormMode, Item, ItemId};
use crate::error::{ApiError, ApiResult};
use crate::state::ItemListState;
use crate::sync::{execute, SyncRequest};

/// In-memory items service that records what it was asked to do
#[derive(Default)]
struct FakeApi {
    items: RefCell<Vec<Item>>,
    next_id: Cell<i64>,
    calls: RefCell<Vec<SyncRequest>>,
    failing: Cell<bool>,
}

impl FakeApi {
    fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.len() as i64 + 1;
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    fn fail_from_now_on(&self) {
        self.failing.set(true);
    }

    fn calls(&self) -> Vec<SyncRequest> {
        self.calls.borrow().clone()
    }

    fn record(&self, request: SyncRequest) -> ApiResult<()> {
        self.calls.borrow_mut().push(request);
        if self.failing.get() {
            return Err(ApiError::Status {
                method: "TEST",
                url: "fake://items".to_string(),
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ItemApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        self.record(SyncRequest::LoadAll)?;
        Ok(self.items.borrow().clone())
    }

    async fn create(&self, name: &str) -> ApiResult<Item> {
        self.record(SyncRequest::Create { name: name.to_string() })?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let item = Item::new(id, name);
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &ItemId, name: &str) -> ApiResult<()> {
        self.record(SyncRequest::Update { id: id.clone(), name: name.to_string() })?;
        if let Some(item) = self.items.borrow_mut().iter_mut().find(|i| &i.id == id) {
            item.name = name.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> ApiResult<()> {
        self.record(SyncRequest::Delete { id: id.clone() })?;
        self.items.borrow_mut().retain(|i| &i.id != id);
        Ok(())
    }
}

/// Run one request and apply it on success, like the UI dispatcher
async fn run(api: &FakeApi, state: &mut ItemListState, request: SyncRequest) -> ApiResult<()> {
    let confirmation = execute(api, request).await?;
    state.apply(confirmation);
    Ok(())
}

async fn submit(api: &FakeApi, state: &mut ItemListState) -> Option<ApiResult<()>> {
    let request = state.submit_request()?;
    Some(run(api, state, request).await)
}

async fn loaded(api: &FakeApi) -> ItemListState {
    let mut state = ItemListState::default();
    run(api, &mut state, SyncRequest::LoadAll).await.expect("load failed");
    state
}

#[tokio::test]
async fn test_load_matches_server_order() {
    let api = FakeApi::with_items(vec![
        Item::new(3, "bread"),
        Item::new(1, "milk"),
        Item::new(2, "eggs"),
    ]);
    let state = loaded(&api).await;

    assert_eq!(
        state.items,
        vec![Item::new(3, "bread"), Item::new(1, "milk"), Item::new(2, "eggs")]
    );
}

#[tokio::test]
async fn test_failed_load_leaves_collection_empty() {
    let api = FakeApi::with_items(vec![Item::new(1, "milk")]);
    api.fail_from_now_on();

    let mut state = ItemListState::default();
    let err = run(&api, &mut state, SyncRequest::LoadAll).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(state.is_empty());
}

#[tokio::test]
async fn test_add_appends_server_item() {
    let api = FakeApi::with_items(vec![Item::new(1, "milk")]);
    let mut state = loaded(&api).await;

    state.set_text("eggs");
    submit(&api, &mut state).await.expect("submit disabled").unwrap();

    assert_eq!(
        api.calls(),
        vec![SyncRequest::LoadAll, SyncRequest::Create { name: "eggs".to_string() }]
    );
    assert_eq!(state.items, vec![Item::new(1, "milk"), Item::new(2, "eggs")]);
    assert_eq!(state.form.mode(), FormMode::Adding);
    assert!(state.form.text.is_empty());
}

#[tokio::test]
async fn test_add_sends_trimmed_text() {
    let api = FakeApi::with_items(Vec::new());
    let mut state = loaded(&api).await;

    state.set_text("  eggs  ");
    submit(&api, &mut state).await.unwrap().unwrap();

    assert_eq!(api.calls()[1], SyncRequest::Create { name: "eggs".to_string() });
    assert_eq!(state.items[0].name, "eggs");
}

#[tokio::test]
async fn test_blank_add_sends_nothing() {
    let api = FakeApi::with_items(vec![Item::new(1, "milk")]);
    let mut state = loaded(&api).await;

    state.set_text(" \t ");
    assert!(submit(&api, &mut state).await.is_none());

    assert_eq!(api.calls(), vec![SyncRequest::LoadAll]);
    assert_eq!(state.items, vec![Item::new(1, "milk")]);
}

#[tokio::test]
async fn test_edit_then_submit_updates_original_id() {
    let api = FakeApi::with_items(vec![Item::new(1, "milk")]);
    let mut state = loaded(&api).await;

    let milk = state.items[0].clone();
    state.begin_edit(&milk);
    assert_eq!(state.form.text, "milk");
    assert_eq!(state.form.mode().action_label(), "Update");

    state.set_text("oat milk");
    submit(&api, &mut state).await.unwrap().unwrap();

    assert_eq!(
        api.calls(),
        vec![
            SyncRequest::LoadAll,
            SyncRequest::Update { id: ItemId::Number(1), name: "oat milk".to_string() },
        ]
    );
    assert_eq!(state.items, vec![Item::new(1, "oat milk")]);
    assert_eq!(state.form.mode(), FormMode::Adding);
}

#[tokio::test]
async fn test_delete_removes_only_that_item() {
    let api = FakeApi::with_items(vec![
        Item::new(1, "milk"),
        Item::new(2, "eggs"),
        Item::new(3, "bread"),
    ]);
    let mut state = loaded(&api).await;

    let request = state.delete_request(&ItemId::Number(2));
    run(&api, &mut state, request).await.unwrap();

    assert_eq!(state.items, vec![Item::new(1, "milk"), Item::new(3, "bread")]);
    assert_eq!(api.items.borrow().len(), 2);
}

#[tokio::test]
async fn test_failures_change_nothing() {
    let api = FakeApi::with_items(vec![Item::new(1, "milk")]);
    let mut state = loaded(&api).await;
    api.fail_from_now_on();

    state.set_text("eggs");
    assert!(submit(&api, &mut state).await.unwrap().is_err());
    assert_eq!(state.items, vec![Item::new(1, "milk")]);
    assert_eq!(state.form.text, "eggs");

    let milk = state.items[0].clone();
    state.begin_edit(&milk);
    state.set_text("oat milk");
    assert!(submit(&api, &mut state).await.unwrap().is_err());
    assert_eq!(state.items, vec![Item::new(1, "milk")]);
    assert!(state.form.is_editing());

    let request = state.delete_request(&ItemId::Number(1));
    assert!(run(&api, &mut state, request).await.is_err());
    assert_eq!(state.items, vec![Item::new(1, "milk")]);
}

#[tokio::test]
async fn test_double_submit_creates_twice() {
    let api = FakeApi::with_items(Vec::new());
    let mut state = loaded(&api).await;

    state.set_text("eggs");
    let first = state.submit_request().unwrap();
    let second = state.submit_request().unwrap();

    run(&api, &mut state, first).await.unwrap();
    run(&api, &mut state, second).await.unwrap();

    assert_eq!(state.items, vec![Item::new(1, "eggs"), Item::new(2, "eggs")]);
}
