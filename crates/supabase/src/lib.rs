//! Supabase (PostgREST) access for hirelink.
//!
//! [`PostgrestClient`] wraps the PostgREST HTTP interface with typed
//! single-row reads and exact counts. [`RestOnboardingStore`] implements the
//! onboarding store on top of it, for deployments that only expose the
//! Supabase REST endpoint to this code.

pub mod client;
pub mod config;
pub mod error;
pub mod store;

pub use client::PostgrestClient;
pub use config::SupabaseConfig;
pub use error::PostgrestError;
pub use store::RestOnboardingStore;
