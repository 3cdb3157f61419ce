//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod last_updated;
pub(crate) mod render;
pub(crate) mod sidebar;

pub(crate) use check::CheckArgs;
pub(crate) use config::ConfigArgs;
pub(crate) use last_updated::LastUpdatedArgs;
pub(crate) use render::RenderArgs;
pub(crate) use sidebar::SidebarArgs;
