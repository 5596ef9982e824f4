//! Build the word cloud for a report and list the references of its top word.
//!
//! Usage: cargo run -p standup-report --example word_cloud -- [report.json] [english|thai|any]
//!
//! Without a file a built-in sample report is used. Set `RUST_LOG=debug` to
//! see the engine's tracing output.

use std::env;
use std::fs;

use standup_core::config::Config;
use standup_core::types::StopWordFilter;
use standup_report::{Report, ReportAnalyzer};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"{
    "id": "sample",
    "teamName": "Platform",
    "progress": ["Fixed the **login** bug today.", "Login flow now works.", "ทีมพัฒนาระบบเสร็จแล้ว"],
    "blockers": "Waiting on the API-key for staging.",
    "nextSteps": ["Deploy the login service", "ทดสอบระบบ"]
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = match args.first() {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };
    let report = Report::from_json(&json)?;
    let analyzer = ReportAnalyzer::from_config(&Config::load()?)?;
    let cloud = match args.get(1) {
        Some(mode) => analyzer.word_cloud(&report, mode.parse::<StopWordFilter>()?),
        None => analyzer.default_word_cloud(&report),
    };

    println!("Word cloud for {} ({})", report.team_name, analyzer.engine().tokenizer().segmenter_name());
    for entry in cloud.display_entries() {
        println!("  {:<24} {:>3}  {:?}  {:?}", entry.text, entry.value, entry.source, cloud.tier(&entry));
    }

    if let Some(top) = cloud.entries().first() {
        println!("\nReferences for '{}':", top.text);
        for reference in analyzer.references(&report, &top.text) {
            let marked: String = reference
                .spans
                .iter()
                .map(|s| if s.highlighted { format!("[{}]", s.text) } else { s.text.clone() })
                .collect();
            println!("  {:<10} {}", reference.source, marked);
        }
    }
    Ok(())
}
