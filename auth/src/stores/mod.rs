//! Credential store backends.

#[cfg(feature = "test-utils")]
pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "test-utils")]
pub use memory::MemoryUserStore;

#[cfg(feature = "postgres")]
pub use postgres::PgUserStore;
