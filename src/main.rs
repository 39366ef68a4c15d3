use anyhow::Result;

fn main() -> Result<()> {
    code_collector::app::init_logging();
    code_collector::run()
}
