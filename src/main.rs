use clap::{Arg, Command};
use log::LevelFilter;
use phish_triage::domain_age;
use phish_triage::engine::RiskEngine;
use phish_triage::header_auth;
use phish_triage::target;
use phish_triage::text_triggers::TriggerScanner;
use phish_triage::ScoringConfig;
use serde::Serialize;
use std::process;

#[derive(Serialize)]
struct TriageReport {
    kind: target::TargetKind,
    #[serde(flatten)]
    result: phish_triage::RiskResult,
    domain_age: domain_age::DomainAgeAssessment,
}

fn main() {
    let matches = Command::new("phish-triage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Phishing-risk triage for URLs, domains, IPs, emails and file hashes")
        .long_about(
            "Scores a suspicious indicator by combining a character n-gram\n\
             classifier with brand-similarity, homograph and entropy analysis,\n\
             then blending in externally fetched reputation signals\n\
             (blacklist hit count, hosting provider, domain age).",
        )
        .arg(
            Arg::new("target")
                .value_name("TARGET")
                .help("URL, domain, IP address, email address or file hash to analyze")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Scoring configuration file path")
                .default_value("/etc/phish-triage.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default scoring configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("blacklist-hits")
                .short('b')
                .long("blacklist-hits")
                .value_name("COUNT")
                .help("Number of reputation engines flagging the target (from your blacklist lookup)")
                .default_value("0"),
        )
        .arg(
            Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("LABEL")
                .help("Hosting provider/ASN label for the target (from your geolocation lookup)")
                .default_value(""),
        )
        .arg(
            Arg::new("age-days")
                .long("age-days")
                .value_name("DAYS")
                .help("Domain registration age in days (from your WHOIS lookup)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("scan-text")
                .long("scan-text")
                .value_name("TEXT")
                .help("Scan message text for known fraud phrases instead of scoring a target")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("check-headers")
                .long("check-headers")
                .value_name("TEXT")
                .help("Validate pasted authentication headers (SPF/DKIM/DMARC) instead of scoring a target")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the verdict as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-signal detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    if let Some(text) = matches.get_one::<String>("scan-text") {
        scan_text(text);
        return;
    }

    if let Some(headers) = matches.get_one::<String>("check-headers") {
        check_headers(headers);
        return;
    }

    let target_input = match matches.get_one::<String>("target") {
        Some(t) => t,
        None => {
            eprintln!("No target given. Pass a URL, domain, IP, email or hash to analyze.");
            process::exit(2);
        }
    };

    let blacklist_hits: u32 = match matches.get_one::<String>("blacklist-hits").unwrap().parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("--blacklist-hits must be a non-negative integer");
            process::exit(2);
        }
    };

    let age_days: Option<u32> = match matches.get_one::<String>("age-days") {
        Some(raw) => match raw.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                eprintln!("--age-days must be a non-negative integer");
                process::exit(2);
            }
        },
        None => None,
    };

    let provider = matches.get_one::<String>("provider").unwrap();

    let config_path = matches.get_one::<String>("config").unwrap();
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }
    };

    let engine = RiskEngine::new(config);
    let kind = target::classify(target_input);
    log::info!("analyzing {} as {}", target_input, kind.label());

    let result = engine.score(target_input, blacklist_hits, provider);
    let age = domain_age::assess(age_days);

    if matches.get_flag("json") {
        let report = TriageReport {
            kind,
            result,
            domain_age: age,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("Target:        {} ({})", result.target, kind.label());
    println!("Domain:        {}", result.features.normalized_domain);
    println!(
        "Verdict:       {} [{}]  score {:.1}%",
        result.status.label(),
        result.color,
        result.final_score * 100.0
    );
    println!("Confidence:    {:.1}%", result.confidence * 100.0);
    println!(
        "Classifier:    {:.1}% phishing probability",
        result.classifier_probability * 100.0
    );
    println!(
        "Brand match:   {}",
        if result.features.brand_similarity_risk > 0.0 {
            "similar to a protected brand domain"
        } else {
            "none"
        }
    );
    if result.features.is_homograph {
        println!(
            "Homograph:     YES ({})",
            result.features.punycode_form
        );
    }
    println!("Entropy:       {:.2}", result.features.entropy);
    println!("Blacklist:     {blacklist_hits} engine(s) flagged this target");
    println!("Domain age:    {}", age.label());
    if age.is_suspicious() {
        println!("               warning: young domains are a common phishing signal");
    }
}

fn scan_text(text: &str) {
    let scanner = TriggerScanner::new();
    let hits = scanner.scan(text);
    if hits.is_empty() {
        println!("No known fraud phrases found.");
    } else {
        println!("Found {} suspicious phrase(s):", hits.len());
        for hit in hits {
            println!("  - {hit}");
        }
        process::exit(1);
    }
}

fn check_headers(headers: &str) {
    let status = header_auth::authenticate(headers);
    println!("{}", status.label());
    if status != header_auth::AuthStatus::Authenticated {
        process::exit(1);
    }
}

fn load_config(path: &str) -> anyhow::Result<ScoringConfig> {
    if std::path::Path::new(path).exists() {
        ScoringConfig::from_file(path)
    } else {
        log::warn!("Configuration file '{path}' not found, using default configuration");
        Ok(ScoringConfig::default())
    }
}

fn generate_default_config(path: &str) {
    let config = ScoringConfig::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}
