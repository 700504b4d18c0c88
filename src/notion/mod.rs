//! Workspace-database access: wire types, the paginated HTTP client and the
//! data sources the update run reads from.

pub mod client;
pub mod page;
pub mod properties;
pub mod source;

pub use client::NotionClient;
pub use page::{Page, collect_pages};
pub use source::{DataSource, FileSource, NotionSource};
