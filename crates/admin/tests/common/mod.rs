//! Shared fakes for the admin integration tests.
//!
//! `FakeService` stands in for a REST collection and records every
//! mutating call; `RecordingPrompter` records notices and answers
//! confirmations with a fixed reply.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use myron_client::api::ApiError;
use myron_client::resources::ResourceService;
use myron_core::resource::{Payload, Resource};
use myron_core::types::DbId;

use myron_admin::prompt::Prompter;

// ---------------------------------------------------------------------------
// Service fake
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Call {
    List,
    Create(Payload),
    Update(DbId, Payload),
    Delete(DbId),
}

struct FakeState<R> {
    rows: Vec<R>,
    calls: Vec<Call>,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,
}

pub struct FakeService<R> {
    state: Mutex<FakeState<R>>,
}

pub fn server_error() -> ApiError {
    ApiError::Server {
        status: 500,
        body: "boom".to_string(),
    }
}

impl<R: Resource> FakeService<R> {
    pub fn with_rows(rows: Vec<R>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                rows,
                calls: Vec::new(),
                fail_list: false,
                fail_create: false,
                fail_update: false,
                fail_delete: false,
            }),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::with_rows(Vec::new())
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.lock().unwrap().fail_create = fail;
    }

    pub fn fail_update(&self, fail: bool) {
        self.state.lock().unwrap().fail_update = fail;
    }

    pub fn fail_delete(&self, fail: bool) {
        self.state.lock().unwrap().fail_delete = fail;
    }

    pub fn set_rows(&self, rows: Vec<R>) {
        self.state.lock().unwrap().rows = rows;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn creates(&self) -> Vec<Payload> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Create(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> Vec<(DbId, Payload)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Update(id, p) => Some((id, p)),
                _ => None,
            })
            .collect()
    }

    pub fn deletes(&self) -> Vec<DbId> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn list_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::List))
            .count()
    }

    /// Number of calls that would have hit the network, reads included.
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }
}

#[async_trait]
impl<R: Resource> ResourceService<R> for FakeService<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        if state.fail_list {
            return Err(server_error());
        }
        Ok(state.rows.clone())
    }

    async fn create(&self, payload: Payload) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(payload));
        if state.fail_create {
            return Err(server_error());
        }
        Ok(())
    }

    async fn update(&self, id: DbId, payload: Payload) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update(id, payload));
        if state.fail_update {
            return Err(server_error());
        }
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(id));
        if state.fail_delete {
            return Err(server_error());
        }
        state.rows.retain(|r| r.id() != id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Prompter fake
// ---------------------------------------------------------------------------

pub struct RecordingPrompter {
    answer: bool,
    alerts: Mutex<Vec<String>>,
    confirms: Mutex<Vec<String>>,
}

impl RecordingPrompter {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            alerts: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }
}

impl Prompter for RecordingPrompter {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.answer
    }
}
