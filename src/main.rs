use anyhow::Result;
use log::debug;

use eval_order::{demo, trace::StdoutSink};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Trace the canonical demonstration on stdout.
    let mut sink = StdoutSink;
    let result = demo::run(2, 3, &mut sink);
    debug!("combined wrapper holds {}", result.val());

    Ok(())
}
