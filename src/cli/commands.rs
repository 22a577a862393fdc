use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tweak-urgency",
    about = "Interactively tune Taskwarrior urgency coefficients",
    version
)]
pub struct Cli {
    /// Only edit coefficients whose key starts with urgency.<CATEGORY>
    #[arg(value_name = "CATEGORY")]
    pub categories: Vec<String>,
}
