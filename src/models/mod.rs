//! Wire and session models.

pub mod document;
pub mod reference;
pub mod user;

pub use document::{AccessLevel, Document, Uploader};
pub use reference::{Category, Department};
pub use user::{Id, Roles, User};
