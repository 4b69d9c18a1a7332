mod module;
mod permission;
mod view;

pub mod role;

pub use module::*;
pub use permission::*;
pub use view::*;
