//! Shared fixtures for router tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tokio::sync::Mutex;
use tower::ServiceExt;

use clinic_server::{build_router, AppState, DbError, Doctor, Patient, ServerConfig, Store};

/// Records the in-memory store knows how to key.
pub trait Keyed: Clone + Send + Sync + 'static {
    const RESOURCE: &'static str;
    fn key(&self) -> i32;
    fn keyed(self, id: i32) -> Self;
}

impl Keyed for Doctor {
    const RESOURCE: &'static str = "doctor";
    fn key(&self) -> i32 {
        self.id
    }
    fn keyed(self, id: i32) -> Self {
        self.with_id(id)
    }
}

impl Keyed for Patient {
    const RESOURCE: &'static str = "patient";
    fn key(&self) -> i32 {
        self.id
    }
    fn keyed(self, id: i32) -> Self {
        self.with_id(id)
    }
}

/// In-memory store with the same semantics as the PostgreSQL repositories.
pub struct MemoryStore<R> {
    rows: Mutex<BTreeMap<i32, R>>,
    next_id: AtomicI32,
    calls: AtomicUsize,
}

impl<R: Keyed> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of store operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    /// Insert a record directly, bypassing the call counter.
    pub async fn seed(&self, record: R) -> R {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = record.keyed(id);
        self.rows.lock().await.insert(id, record.clone());
        record
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<R: Keyed> Store<R> for MemoryStore<R> {
    async fn list(&self) -> Result<Vec<R>, DbError> {
        self.touch();
        Ok(self.rows.lock().await.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<R, DbError> {
        self.touch();
        self.rows
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound {
                resource: R::RESOURCE,
                id,
            })
    }

    async fn create(&self, record: R) -> Result<R, DbError> {
        self.touch();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = record.keyed(id);
        self.rows.lock().await.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, record: R) -> Result<R, DbError> {
        self.touch();
        let record = record.keyed(id);
        let mut rows = self.rows.lock().await;
        if let Some(existing) = rows.get_mut(&id) {
            *existing = record.clone();
        }
        Ok(record)
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        self.touch();
        self.rows
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::NotFound {
                resource: R::RESOURCE,
                id,
            })
    }
}

/// Store whose every operation fails like a lost database connection.
pub struct BrokenStore;

#[async_trait]
impl<R: Send + 'static> Store<R> for BrokenStore {
    async fn list(&self) -> Result<Vec<R>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn get(&self, _id: i32) -> Result<R, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn create(&self, _record: R) -> Result<R, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn update(&self, _id: i32, _record: R) -> Result<R, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _id: i32) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }
}

/// Store that answers only after `delay`, to exercise the request deadline.
pub struct SlowStore {
    pub delay: Duration,
}

#[async_trait]
impl<R: Send + 'static> Store<R> for SlowStore {
    async fn list(&self) -> Result<Vec<R>, DbError> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn get(&self, id: i32) -> Result<R, DbError> {
        tokio::time::sleep(self.delay).await;
        Err(DbError::NotFound {
            resource: "slow",
            id,
        })
    }

    async fn create(&self, record: R) -> Result<R, DbError> {
        tokio::time::sleep(self.delay).await;
        Ok(record)
    }

    async fn update(&self, _id: i32, record: R) -> Result<R, DbError> {
        tokio::time::sleep(self.delay).await;
        Ok(record)
    }

    async fn delete(&self, _id: i32) -> Result<(), DbError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Router whose stores take `delay` per call, with a `deadline` per request.
pub fn slow_app(delay: Duration, deadline: Duration) -> Router {
    let state = AppState::new(
        Arc::new(SlowStore { delay }),
        Arc::new(SlowStore { delay }),
    );
    let config = ServerConfig {
        request_timeout: deadline,
        ..ServerConfig::default()
    };
    build_router(state, &config)
}

/// Router over fresh in-memory stores, returned with handles to both stores.
pub fn memory_app() -> (
    Router,
    Arc<MemoryStore<Doctor>>,
    Arc<MemoryStore<Patient>>,
) {
    let doctors = Arc::new(MemoryStore::<Doctor>::new());
    let patients = Arc::new(MemoryStore::<Patient>::new());
    let state = AppState::new(doctors.clone(), patients.clone());
    (
        build_router(state, &ServerConfig::default()),
        doctors,
        patients,
    )
}

/// Router whose stores always fail.
pub fn broken_app() -> Router {
    let state = AppState::new(Arc::new(BrokenStore), Arc::new(BrokenStore));
    build_router(state, &ServerConfig::default())
}

/// Response captured for assertions
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }
}

/// Send one request through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
