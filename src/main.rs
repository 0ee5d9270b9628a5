use anyhow::Result;
use opstub::cli::App;

fn main() -> Result<()> {
    let args = opstub::cli::Args::parse_args();
    let mut app = App::from_args(&args)?;

    app.run(args)?;

    Ok(())
}
