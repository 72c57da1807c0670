//! Export a HAR file as a netlog document.
//!
//! ```text
//! cargo run --example export_har -- capture.har '*/api/*'
//! ```

use netlog::capture::HarContentFetcher;
use netlog::har::log::load_har_file;
use netlog::panel::{ActionOutcome, ExportAction, ListView, NetlogPanel, PanelConfig};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let Some(har_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: export_har <file.har> [filter]");
        std::process::exit(2);
    };
    let pattern = args.next().unwrap_or_default();

    let mut panel = NetlogPanel::with_directory_downloads(
        PanelConfig::default(),
        Box::new(|_: &str| false),
    );

    for record in load_har_file(&har_path)? {
        let fetcher = HarContentFetcher::new(&record.response.content);
        panel.on_request_finished(record, Arc::new(fetcher));
    }

    match panel.set_filter(pattern) {
        ListView::Rows(rows) => {
            for row in &rows {
                println!(
                    "{:>4} {:<7} {:<40} {:>6} {:>8} {:>7}",
                    row.status, row.method, row.name, row.kind, row.size, row.time
                );
            }
        }
        ListView::Empty(state) => println!("{}", state.message()),
    }

    match panel.perform(ExportAction::Download).await? {
        ActionOutcome::Saved(path) => println!("Saved {}", path.display()),
        ActionOutcome::Notice(notice) => println!("{}", notice),
        ActionOutcome::Copied(_) => {}
    }

    Ok(())
}
