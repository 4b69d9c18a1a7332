pub mod capability;
pub mod grouping;
pub mod matcher;
pub mod projection;

pub use capability::{Capability, parse_capability};
pub use grouping::{GroupedMenu, group_menus};
pub use matcher::match_detail;
pub use projection::{project, project_user};
