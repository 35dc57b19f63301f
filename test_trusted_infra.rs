#![allow(clippy::uninlined_format_args)]

use phish_triage::engine::RiskEngine;
use phish_triage::RiskStatus;

fn main() {
    env_logger::init();

    println!("Testing the trusted-infrastructure suppression path...");
    let engine = RiskEngine::default();

    println!("\n=== google.com hosted on Google infrastructure ===");
    let result = engine.score("google.com", 0, "AS15169 Google LLC");
    println!(
        "score={:.3} status={} confidence={:.2} classifier={:.2}",
        result.final_score,
        result.status.label(),
        result.confidence,
        result.classifier_probability
    );
    if result.final_score == 0.01 && result.confidence == 0.01 && result.status == RiskStatus::Low {
        println!("✅ SUCCESS: trusted infrastructure suppresses the false positive");
    } else {
        println!("❌ MISSED: suppression did not fire");
    }

    println!("\n=== same target once a blacklist engine disagrees ===");
    let result = engine.score("google.com", 1, "AS15169 Google LLC");
    println!(
        "score={:.3} status={} confidence={:.2}",
        result.final_score,
        result.status.label(),
        result.confidence
    );
    if result.final_score > 0.01 && result.status != RiskStatus::Low {
        println!("✅ SUCCESS: corroborated risk overrides the trust filter");
    } else {
        println!("❌ MISSED: trust filter hid corroborated risk");
    }

    println!("\n=== homograph on Cloudflare infrastructure, clean blacklist ===");
    let result = engine.score("p\u{0430}ypal.com", 0, "Cloudflare, Inc.");
    println!(
        "score={:.3} status={} homograph={}",
        result.final_score,
        result.status.label(),
        result.features.is_homograph
    );
    // The suppression happens before the additive penalties, so a homograph
    // alone still raises the score from the floored base
    if result.final_score > 0.01 && result.final_score < 0.7 {
        println!("✅ EXPECTED: homograph penalty applies on top of the trusted base");
    } else {
        println!("❌ UNEXPECTED: {:.3}", result.final_score);
    }
}
