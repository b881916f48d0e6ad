//! Model layer - plain data behind the screens
//!
//! - `catalog` - The fixed product list and the detail parameters cut from it
//! - `credentials` - Session form state and submit outcome
//! - `modal` - Overlay stack
//! - `notification` - Confirmation content

pub mod catalog;
pub mod credentials;
pub mod modal;
pub mod notification;

pub use catalog::{build_catalog, CatalogItem, DetailParams};
pub use credentials::{CredentialEntry, SubmitOutcome};
pub use notification::Notification;
