//! Sample users inserted into an empty store.

use crate::traits::UserRepository;
use registry_core::{NewUser, RegistryResult};
use tracing::info;

/// The records a fresh deployment starts with.
#[must_use]
pub fn sample_users() -> Vec<NewUser> {
    (1..=3)
        .map(|n| NewUser::new(format!("user{}", n), format!("user{}@example.com", n)))
        .collect()
}

/// Inserts [`sample_users`] if the repository holds no users.
///
/// Returns the number of users inserted.
pub async fn seed_sample_users(repo: &dyn UserRepository) -> RegistryResult<usize> {
    if !repo.list().await?.is_empty() {
        return Ok(0);
    }

    let users = sample_users();
    let count = users.len();
    for user in users {
        repo.add(user).await?;
    }

    info!("Seeded {} sample users", count);
    Ok(count)
}
