use anyhow::Result;

fn main() -> Result<()> {
    jsonl_repair::cli::run()
}
