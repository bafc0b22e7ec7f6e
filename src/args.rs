use clap::Parser;
use diary_mirror::config::DEFAULT_START_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary-mirror")]
#[command(about = "Crawler that mirrors a my-diary.org journal into local files")]
#[command(version)]
pub struct Args {
    /// Diary entry URL to start crawling from
    #[arg(default_value = DEFAULT_START_URL)]
    pub start_url: String,

    /// Directory the extracted entries are written to
    #[arg(short, long, default_value = "data")]
    pub out_dir: PathBuf,

    /// Upper bound in seconds for the pause after the seed page loads
    #[arg(long, default_value_t = 2.21)]
    pub init_delay: f64,

    /// Upper bound in seconds for the pause between visited entries
    #[arg(long, default_value_t = 0.195)]
    pub entry_delay: f64,

    /// WebDriver server URL (overrides the http://localhost:4444 default)
    #[arg(long)]
    pub webdriver_url: Option<String>,
}
