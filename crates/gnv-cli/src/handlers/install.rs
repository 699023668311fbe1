use anyhow::Result;

use gnv_core::GnvConfig;

pub struct InstallHandler;

impl InstallHandler {
    pub fn handle_install(config: &GnvConfig, dev: bool) -> Result<()> {
        let args = if dev {
            vec!["--dev".to_string()]
        } else {
            Vec::new()
        };
        super::print_header("install", &args);
        gnv_core::install(config, dev)
    }
}
