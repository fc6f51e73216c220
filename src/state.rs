//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::judge::JudgeScheduler;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Judge scheduler owning the worker pool
    pub scheduler: Arc<JudgeScheduler>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, scheduler: Arc<JudgeScheduler>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                scheduler,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the judge scheduler
    pub fn scheduler(&self) -> &JudgeScheduler {
        &self.inner.scheduler
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
