//! Browser-independent half of the admin image preview: styling,
//! fixed page identifiers, data URLs and the binder that applies finished reads.

pub mod binder;
pub mod config;
pub mod data_url;
pub mod error;
pub mod style;

pub use binder::{bind, BinderState, PendingRead, PreviewBinder, PreviewSurface, ReadId, TargetOrigin};
pub use data_url::DataUrl;
pub use error::PreviewError;
pub use style::StyleProperty;
