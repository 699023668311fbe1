use anyhow::Result;

use gnv_core::GnvConfig;

pub struct RemoveHandler;

impl RemoveHandler {
    pub fn handle_remove(config: &GnvConfig, packages: &[String], peer: bool) -> Result<()> {
        super::print_header("remove", packages);
        gnv_core::remove_deps(config, packages, peer)
    }
}
