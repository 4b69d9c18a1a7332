//! Access-matrix projection — modular CMS navigation + permission grants
//! → per-user grant/deny tree.
//!
//! # Resources
//!
//! - **Module** — installed feature unit contributing menus
//! - **Menu / MenuItem** — declarative navigation metadata
//! - **PermissionRecord / PermissionDetail** — persisted grants per
//!   `(module, controller, action)` capability
//! - **ModuleView / MenuGroupView / MenuItemView** — the UI-ready
//!   output tree, one item per navigation entry, annotated with its
//!   grant state
//!
//! # Usage
//!
//! ```ignore
//! use cms_access::{StaticCatalog, project_user};
//!
//! let catalog = StaticCatalog::new(modules);
//! let view = project_user(&catalog, Some(&permission))?;
//! let allowed = view.granted();
//! let denied = view.denied();
//! ```
//!
//! The projection is a pure read: it is recomputed from the catalog
//! snapshot and the (optional) permission record on every call, never
//! cached or persisted. Concurrent calls need no synchronization.

pub mod catalog;
pub mod model;
pub mod service;

pub use catalog::{CatalogError, ModuleCatalog, StaticCatalog};
pub use service::{project, project_user};
