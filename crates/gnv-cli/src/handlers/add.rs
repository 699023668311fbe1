use anyhow::Result;

use gnv_core::GnvConfig;

pub struct AddHandler;

impl AddHandler {
    pub fn handle_add(config: &GnvConfig, packages: &[String], peer: bool) -> Result<()> {
        super::print_header("add", packages);
        gnv_core::add_deps(config, packages, peer)
    }
}
