//! Shared application state.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::AuthService;
use crate::infrastructure::persistence::{PgRepository, PgResource, PgTokenRepository};

/// State shared by every handler.
///
/// Resource repositories are not stored here; they are cheap to construct,
/// so handlers build them per request via [`AppState::repo`].
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
}

impl AppState {
    /// Wires the state from a connection pool and the token signing secret.
    pub fn new(db: Arc<PgPool>, token_signing_secret: String) -> Self {
        let token_repository = Arc::new(PgTokenRepository::new(db.clone()));
        let auth_service = Arc::new(AuthService::new(token_repository, token_signing_secret));

        Self { db, auth_service }
    }

    /// Repository handle for the given resource type.
    pub fn repo<M: PgResource>(&self) -> PgRepository<M> {
        PgRepository::new(self.db.clone())
    }
}
