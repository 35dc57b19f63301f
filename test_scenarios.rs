#![allow(clippy::uninlined_format_args)]

use phish_triage::engine::RiskEngine;
use phish_triage::RiskStatus;

fn main() {
    env_logger::init();

    println!("Testing the canonical triage scenarios...");
    let engine = RiskEngine::default();

    // Scenario 1: typosquatted brand domain, no external corroboration
    println!("\n=== go0gle.com (typosquat, clean blacklist) ===");
    let result = engine.score("go0gle.com", 0, "NameCheap, Inc.");
    println!(
        "score={:.3} status={} confidence={:.2}",
        result.final_score,
        result.status.label(),
        result.confidence
    );
    if result.status != RiskStatus::Low && result.final_score >= 0.45 {
        println!("✅ SUCCESS: brand imitation floors the verdict at medium risk");
    } else {
        println!("❌ MISSED: typosquat was not flagged");
    }

    // Scenario 2: adversarial-looking free-TLD domain, classifier-driven
    println!("\n=== itau-seguranca.tk (no brand proximity, no hits) ===");
    let result = engine.score("itau-seguranca.tk", 0, "DigitalOcean, LLC");
    println!(
        "score={:.3} status={} classifier={:.2}",
        result.final_score,
        result.status.label(),
        result.classifier_probability
    );
    if result.classifier_probability > 0.5 {
        println!("✅ SUCCESS: classifier recognizes the adversarial pattern");
    } else {
        println!("❌ MISSED: classifier scored this as legitimate");
    }

    // Scenario 3: the same target once a blacklist engine corroborates
    println!("\n=== itau-seguranca.tk with 1 blacklist hit ===");
    let result = engine.score("itau-seguranca.tk", 1, "DigitalOcean, LLC");
    println!(
        "score={:.3} status={} confidence={:.2}",
        result.final_score,
        result.status.label(),
        result.confidence
    );
    if result.status == RiskStatus::Medium && result.confidence >= 0.80 {
        println!("✅ SUCCESS: corroboration lifts the verdict to medium risk");
    } else {
        println!("❌ MISSED: corroboration had no effect");
    }

    // Scenario 4: heavily blacklisted target is high risk no matter what
    println!("\n=== benign-looking domain with 5 blacklist hits ===");
    let result = engine.score("example.com", 5, "");
    println!(
        "score={:.3} status={} confidence={:.2}",
        result.final_score,
        result.status.label(),
        result.confidence
    );
    if result.status == RiskStatus::High && result.confidence == 0.99 {
        println!("✅ SUCCESS: authoritative blacklist forces high risk");
    } else {
        println!("❌ MISSED: blacklist authority was ignored");
    }

    // Scenario 5: homograph attack stacked on brand similarity
    println!("\n=== g\u{043e}\u{043e}gle.com (Cyrillic homograph) ===");
    let result = engine.score("g\u{043e}\u{043e}gle.com", 0, "");
    println!(
        "score={:.3} status={} homograph={} punycode={}",
        result.final_score,
        result.status.label(),
        result.features.is_homograph,
        result.features.punycode_form
    );
    if result.features.is_homograph && result.status == RiskStatus::High {
        println!("✅ SUCCESS: homograph plus brand similarity is high risk");
    } else {
        println!("❌ MISSED: homograph attack slipped through");
    }
}
