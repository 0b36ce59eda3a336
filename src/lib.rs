//! # Photokeep - Login Service Library
//!
//! This is a facade crate that re-exports all public APIs from the photokeep
//! login service components. Use this crate to get access to the
//! authentication and registration functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! photokeep = { path = "../photokeep" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Credentials`, `UserAccount`, `Decision`
//! - **Directory port**: `UserDirectory`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`
//! - **Adapters**: `HashMapUserDirectory`, configuration loading
//! - **Service**: `AuthService` - The main entry point for the login service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use photokeep_core::*;
}

// Re-export most commonly used core types at the root level
pub use photokeep_core::{Credentials, Decision, Email, Password, UserAccount, UserError};

// ============================================================================
// Directory Port
// ============================================================================

/// Directory trait definitions
pub mod directories {
    pub use photokeep_core::{UserDirectory, UserDirectoryError};
}

// Re-export the directory port at root level
pub use photokeep_core::{UserDirectory, UserDirectoryError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use photokeep_application::*;
}

// Re-export use cases at root level
pub use photokeep_application::{LoginError, LoginUseCase, RegisterError, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use photokeep_axum::routes::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use photokeep_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use photokeep_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use photokeep_adapters::HashMapUserDirectory;
pub use photokeep_axum::{AuthApiError, ErrorResponse, PHOTO_DISPLAY_PATH};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main login service
pub use photokeep_auth_service::{AuthService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the directory trait
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
