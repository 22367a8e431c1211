use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use clap::Parser;
use tracing::{debug, info};

use factgate::config::Config;
use factgate::domain::Fact;
use factgate::observability::init_tracing;
use factgate::policy::PolicyLoader;

fn main() -> anyhow::Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting factgate fact filter"
    );

    // Load and compile the rule policy; a malformed rule fails here
    let loader = PolicyLoader::new(config.rules_path.to_string_lossy());
    let (policy, ruleset) = loader.load()?;

    info!(
        policy = %policy.name,
        rules = ruleset.len(),
        path = %config.rules_path.display(),
        "Policy loaded"
    );

    // Read facts as JSON lines
    let reader: Box<dyn BufRead> = match &config.facts_path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut facts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fact: Fact = serde_json::from_str(&line)?;
        facts.push(fact);
    }
    debug!(count = facts.len(), "Facts read");

    let total = facts.len();
    let allowed = ruleset.apply_rules(facts);

    // Emit surviving facts as JSON lines
    let mut writer: Box<dyn Write> = match &config.output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    for fact in &allowed {
        serde_json::to_writer(&mut writer, fact)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    info!(
        total,
        allowed = allowed.len(),
        denied = total - allowed.len(),
        "Facts filtered"
    );
    Ok(())
}
