//! Typed payload models for the APIs under verification
//!
//! These types mirror the JSON bodies of the user/resource API and the
//! browser grid status document. Deserialization is tolerant: keys a model
//! does not declare are ignored, never an error. A field absent from the
//! JSON is `None`, distinguishable from a present-but-empty value, and
//! `None` fields are omitted when a model is serialized as a request body.

pub mod colors;
pub mod grid;
pub mod users;

// Re-export main types for convenience
pub use colors::{Color, ColorsListResponse, SingleColorResponse};
pub use grid::{BrowserVersions, GridStatus};
pub use users::{
    AuthRequest, ErrorResponse, LoginResponse, RegistrationResponse, SingleUserResponse, Support,
    UpsertUserRequest, UpsertUserResponse, User, UsersListResponse,
};
