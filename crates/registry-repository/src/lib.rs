//! # Registry Repository
//!
//! Storage layer behind the user service:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (storage interface)
//! InMemoryUserRepository         (process-local, used by tests and demos)
//! SqliteUserRepository           (SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! SQLite
//! ```
//!
//! Which implementation is used is decided by configuration when the DI
//! module is assembled; the service only ever sees the trait object.

pub mod memory;
pub mod pool;
pub mod seed;
pub mod sqlite;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use pool::*;
pub use seed::*;
pub use sqlite::SqliteUserRepository;
pub use traits::*;
