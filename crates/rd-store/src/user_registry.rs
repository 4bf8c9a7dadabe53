//! Durable user records and credential checks.
//!
//! Every mutation reads the whole user collection, changes the in-memory
//! copy and writes the whole collection back. Two mutations that read
//! before either writes will lose one of the updates.

use crate::collection::{CollectionRead, load_collection, write_collection};
use crate::{DEFAULT_USERS_KEY, KeyValueStorage, Result as StoreErrorResult, StoreError};

use rd_core::{NewUser, UserId, UserRecord};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};

pub struct UserRegistry {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl UserRegistry {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, DEFAULT_USERS_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All stored users in registration order
    pub fn users(&self) -> Vec<UserRecord> {
        load_collection(self.storage.as_ref(), &self.key).or_empty()
    }

    #[track_caller]
    fn save(&self, users: &[UserRecord]) -> StoreErrorResult<()> {
        write_collection(self.storage.as_ref(), &self.key, users)
    }

    /// Register a new user.
    ///
    /// Rejects blank required fields, an email already registered under any
    /// casing, and a non-blank ORCID already registered. The record only
    /// exists once the collection write succeeds. A corrupt collection is
    /// started over; one the storage failed to return is left alone.
    #[track_caller]
    pub fn register(&self, profile: NewUser) -> StoreErrorResult<UserRecord> {
        profile.validate()?;

        let mut users = match load_collection::<UserRecord>(self.storage.as_ref(), &self.key) {
            CollectionRead::Unavailable => {
                return Err(StoreError::persistence(
                    self.key.as_str(),
                    "stored users could not be read, refusing to overwrite them",
                ));
            }
            read => read.or_empty(),
        };

        if users.iter().any(|u| u.email_matches(&profile.email)) {
            debug!("Registration rejected, email already registered");
            return Err(StoreError::DuplicateEmail {
                email: profile.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(orcid) = profile.normalized_orcid()
            && users.iter().any(|u| u.orcid_matches(&orcid))
        {
            debug!("Registration rejected, ORCID already registered");
            return Err(StoreError::DuplicateOrcid {
                orcid,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let record = UserRecord::new(Self::fresh_id(&users), profile);
        users.push(record.clone());
        self.save(&users)?;

        info!("Registered user {} <{}>", record.id, record.email);
        Ok(record)
    }

    /// Case-insensitive email and exact secret. `None` covers both an
    /// unknown email and a wrong secret.
    pub fn authenticate(&self, email: &str, secret: &str) -> Option<UserRecord> {
        let user = self
            .users()
            .into_iter()
            .find(|u| u.email_matches(email) && u.credential_secret == secret);

        match &user {
            Some(found) => info!("Authenticated user {}", found.id),
            None => info!("Invalid credentials for {}", email),
        }

        user
    }

    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users().into_iter().find(|u| u.email_matches(email))
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.users().iter().any(|u| u.email_matches(email))
    }

    /// Surrounding whitespace is ignored, as in `register`. Always false
    /// for a blank ORCID.
    pub fn orcid_exists(&self, orcid: &str) -> bool {
        let orcid = orcid.trim();
        if orcid.is_empty() {
            return false;
        }
        self.users().iter().any(|u| u.orcid_matches(orcid))
    }

    /// Pretty-printed JSON of every stored user, for backup
    #[track_caller]
    pub fn export_json(&self) -> StoreErrorResult<String> {
        serde_json::to_string_pretty(&self.users())
            .map_err(|e| StoreError::persistence(self.key.as_str(), e.to_string()))
    }

    /// Replace the stored users with a previously exported collection.
    /// Storage is untouched if the payload does not parse.
    #[track_caller]
    pub fn import_json(&self, json: &str) -> StoreErrorResult<usize> {
        let users: Vec<UserRecord> =
            serde_json::from_str(json).map_err(|source| StoreError::InvalidImport {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.save(&users)?;

        info!("Imported {} users", users.len());
        Ok(users.len())
    }

    fn fresh_id(users: &[UserRecord]) -> UserId {
        loop {
            let id = UserId::generate();
            if !users.iter().any(|u| u.id == id) {
                return id;
            }
        }
    }
}
