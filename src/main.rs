use clap::Parser;
use diary_mirror::results::Post;
use diary_mirror::{Crawl, store};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting diary crawl from: {}", args.start_url);

    println!("Note: Crawling requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let mut crawl = Crawl::new(&args.start_url)
        .with_init_delay(args.init_delay)
        .with_entry_delay(args.entry_delay);
    if let Some(webdriver_url) = &args.webdriver_url {
        crawl = crawl.with_webdriver_url(webdriver_url);
    }

    let start_time = std::time::Instant::now();

    let report = match crawl.run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            std::process::exit(1);
        }
    };

    for (count, post) in report.posts.iter().enumerate() {
        log_post(post, count + 1);
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Crawling complete - collected {} posts in {:.2} seconds",
        report.posts.len(),
        duration.as_secs_f64()
    );

    match store::save_posts(&report, &args.out_dir) {
        Ok(written) => {
            ::log::info!(
                "Wrote {} entries under {}",
                written.len(),
                args.out_dir.display()
            );
        }
        Err(e) => {
            ::log::error!("Failed to write entries: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log a one-line summary of a collected post
fn log_post(post: &Post, count: usize) {
    ::log::info!("Collected post {}: {}", count, post.url);
    ::log::debug!(
        "Post {} has date: {}, content bytes: {}",
        count,
        post.date.is_some(),
        post.content.as_deref().map(str::len).unwrap_or(0)
    );
}
