use clap::Parser;
use diary_mirror::config::CrawlConfig;
use diary_mirror::{Crawl, store};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to crawl configuration file
    #[arg(short, long)]
    config: String,

    /// Override the pause ceiling after the seed page loads (seconds)
    #[arg(short, long)]
    init_delay: Option<f64>,

    /// Override the pause ceiling between entries (seconds)
    #[arg(short, long)]
    entry_delay: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from file
    let config_path = PathBuf::from(&args.config);
    let config = CrawlConfig::from_file(config_path)?;

    // Print the loaded configuration (for debugging)
    println!("Loaded crawl configuration:");
    println!("  Start URL: {}", config.start_url);
    println!("  WebDriver URL: {}", config.webdriver_url);
    println!("  Output directory: {}", config.out_dir);
    println!("  Delay floor: {}s", config.delay_floor_secs);
    println!("  Init delay ceiling: {}s", config.init_delay_secs);
    println!("  Entry delay ceiling: {}s", config.entry_delay_secs);

    let out_dir = PathBuf::from(&config.out_dir);

    // Create a Crawl builder from the configuration
    let mut crawl = Crawl::new(&config.start_url).with_config(config);

    // Apply overrides if specified
    if let Some(init_delay) = args.init_delay {
        println!("Overriding init delay ceiling: {}s", init_delay);
        crawl = crawl.with_init_delay(init_delay);
    }

    if let Some(entry_delay) = args.entry_delay {
        println!("Overriding entry delay ceiling: {}s", entry_delay);
        crawl = crawl.with_entry_delay(entry_delay);
    }

    // Run the crawl
    let start_time = std::time::Instant::now();
    let report = crawl.run().await?;

    for (count, post) in report.posts.iter().enumerate() {
        println!("Collected post {}: {}", count + 1, post.url);
    }

    let duration = start_time.elapsed();
    println!(
        "Crawl complete. Collected {} posts in {:.2} seconds.",
        report.posts.len(),
        duration.as_secs_f64()
    );

    // Persist the collected entries
    let written = store::save_posts(&report, &out_dir)?;
    println!("Wrote {} entries under {}", written.len(), out_dir.display());

    Ok(())
}
