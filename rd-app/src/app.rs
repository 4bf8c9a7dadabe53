//! Composition root: one storage handle shared by the user registry, the
//! preference store and the login session.

use crate::{Result as AppErrorResult, logger};

use rd_auth::AuthSession;
use rd_config::{Config, StorageConfig};
use rd_core::{FavoritePaper, FollowedAuthor, UserId};
use rd_store::{FileStorage, KeyValueStorage, PreferenceStore, UserRegistry};

use std::sync::Arc;

use log::info;

pub struct App {
    registry: Arc<UserRegistry>,
    preferences: Arc<PreferenceStore>,
    session: AuthSession,
}

impl App {
    /// Load and validate configuration, install the logger, then open the
    /// configured file storage.
    pub fn start() -> AppErrorResult<Self> {
        let config = Config::load()?;
        config.validate()?;

        logger::initialize(
            config.logging.level,
            config.log_file_path()?,
            config.logging.colored,
        )?;
        config.log_summary();

        Self::open(&config)
    }

    /// Open the file storage described by `config`
    pub fn open(config: &Config) -> AppErrorResult<Self> {
        let storage = FileStorage::open(config.storage_path()?)?;
        info!("User data stored in {}", storage.dir().display());

        Ok(Self::with_storage(Arc::new(storage), &config.storage))
    }

    /// Build the stores over any storage primitive
    pub fn with_storage(storage: Arc<dyn KeyValueStorage>, config: &StorageConfig) -> Self {
        let registry = Arc::new(UserRegistry::with_key(
            Arc::clone(&storage),
            config.users_key.as_str(),
        ));
        let preferences = Arc::new(PreferenceStore::with_key(
            storage,
            config.preferences_key.as_str(),
        ));
        let session = AuthSession::new(Arc::clone(&registry));

        Self {
            registry,
            preferences,
            session,
        }
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    /// Shared handle, for observers that need to read back on notification
    pub fn preferences(&self) -> Arc<PreferenceStore> {
        Arc::clone(&self.preferences)
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut AuthSession {
        &mut self.session
    }

    pub fn current_user_id(&self) -> Option<&UserId> {
        self.session.current_user().map(|user| &user.id)
    }

    /// Favorites of the logged-in user, empty when logged out
    pub fn favorites(&self) -> Vec<FavoritePaper> {
        self.current_user_id()
            .map(|id| self.preferences.get_favorite_papers(id))
            .unwrap_or_default()
    }

    /// Authors followed by the logged-in user, empty when logged out
    pub fn followed_authors(&self) -> Vec<FollowedAuthor> {
        self.current_user_id()
            .map(|id| self.preferences.get_followed_authors(id))
            .unwrap_or_default()
    }
}
