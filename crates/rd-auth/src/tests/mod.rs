
use crate::{AuthSession, RegistrationForm};

use rd_store::{KeyValueStorage, MemoryStorage, UserRegistry};

use std::sync::Arc;

pub(crate) fn form(email: &str, password: &str) -> RegistrationForm {
    RegistrationForm {
        given_name: "A".to_string(),
        family_name: "B".to_string(),
        email: email.to_string(),
        orcid: None,
        password: password.to_string(),
        password_confirmation: password.to_string(),
    }
}

pub(crate) fn session() -> (Arc<MemoryStorage>, AuthSession) {
    let storage = Arc::new(MemoryStorage::new());
    let shared: Arc<dyn KeyValueStorage> = storage.clone();
    let registry = Arc::new(UserRegistry::new(shared));
    (storage, AuthSession::new(registry))
}
