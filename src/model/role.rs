//! Built-in CMS role names.
//!
//! The admin UI assigns exactly one of these to a user alongside the
//! fine-grained permission record. The projection itself does not
//! interpret them; they are exposed for role pickers.

pub const ADMINISTRATOR: &str = "Administrator";
pub const AUTHOR: &str = "Author";
pub const CONTRIBUTOR: &str = "Contributor";
pub const EDITOR: &str = "Editor";
pub const SUBSCRIBER: &str = "Subscriber";
pub const SUPER_ADMIN: &str = "SuperAdmin";

/// All built-in roles, in display order.
pub const ALL: &[&str] = &[
    ADMINISTRATOR,
    AUTHOR,
    CONTRIBUTOR,
    EDITOR,
    SUBSCRIBER,
    SUPER_ADMIN,
];
