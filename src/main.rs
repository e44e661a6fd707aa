use anyhow::Result;
use safekeeper::cli::App;

fn main() -> Result<()> {
    let mut app = App::from_args()?;
    let args = safekeeper::cli::Args::parse_args();

    app.run(args)?;

    Ok(())
}
