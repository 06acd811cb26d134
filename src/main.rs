//! BerryLink entry point

use anyhow::Result;
use berrylink::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
