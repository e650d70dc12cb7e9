//! Capability traits for Zoom resources.
//!
//! Each trait contributes one conventional CRUD operation with a default
//! implementation built on [`Endpoint`](crate::Endpoint). A resource type
//! implements [`Resource`] and then opts into exactly the capabilities its
//! API exposes.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub use update::Update;

use crate::endpoint::Endpoint;

/// A resource family backed by an [`Endpoint`].
pub trait Resource: Send + Sync {
    /// The endpoint this resource issues requests through.
    fn endpoint(&self) -> &Endpoint;
}
