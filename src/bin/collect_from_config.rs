//! Collects the paths listed in `config.yaml` into `collected_code.txt`.

use anyhow::Result;

fn main() -> Result<()> {
    code_collector::app::init_logging();
    code_collector::run_from_config()
}
