//! bench-runner: headless peer-benchmark runner.
//!
//! Usage:
//!   bench-runner --name "First Bank of Virginia"
//!   bench-runner --cert 3510 --json
//!   bench-runner --name "Community Bank" --state VA --config bench.json

mod fdic;

use anyhow::Result;
use fdic::FdicClient;
use peerbench_core::{
    benchmark::{BenchmarkEngine, PeerGroup, Subject},
    config::BenchConfig,
    ratios::RatioSet,
    report::RawFinancialReport,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let name = arg_value(&args, "--name");
    let cert_arg = arg_value(&args, "--cert");
    let state_override = arg_value(&args, "--state");
    let config_path = arg_value(&args, "--config");
    let json_output = args.iter().any(|a| a == "--json");

    let config = match config_path {
        Some(path) => BenchConfig::load_or_default(&path),
        None => BenchConfig::default(),
    };

    let client = FdicClient::new()?;

    // Resolve the subject bank's identifier: direct flag, or the largest
    // active name match.
    let (cert, searched_state) = if let Some(cert) = cert_arg {
        (cert, None)
    } else if let Some(name) = name {
        let matches = client.search_institutions(&name, 10)?;
        let Some(best) = matches.into_iter().next() else {
            println!("No active institution matches \"{name}\"");
            return Ok(());
        };
        if !json_output {
            println!(
                "Matched: {} ({}, {}) cert {} assets {}",
                best.name,
                best.city,
                best.stname,
                best.cert,
                format_thousands(best.asset)
            );
        }
        (best.cert, Some(best.stalp))
    } else {
        eprintln!("Usage: bench-runner --name \"Bank Name\" [--state XX] [--config path] [--json]");
        eprintln!("       bench-runner --cert 12345    [--state XX] [--config path] [--json]");
        std::process::exit(2);
    };

    let Some(report) = client.latest_financials(&cert)? else {
        println!("No financial reports found for cert {cert}");
        return Ok(());
    };
    log::debug!("Latest report for cert {cert}: as of {}", report.repdte);

    let ratios = RatioSet::from_report(&report);

    let subject_cert = if report.cert.is_empty() {
        cert.clone()
    } else {
        report.cert.clone()
    };
    // First usable state wins: explicit flag, search result, then the
    // report itself.
    let subject_state = [state_override, searched_state, Some(report.stalp.clone())]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty());
    let subject = Subject {
        assets: report.asset,
        state: subject_state,
        cert: Some(subject_cert),
    };

    let benchmark = BenchmarkEngine::new(config).build(&subject, &client);

    if json_output {
        print_json(&report, &ratios, benchmark.as_ref())?;
    } else {
        print_summary(&report, &ratios, benchmark.as_ref());
    }
    Ok(())
}

fn print_summary(report: &RawFinancialReport, ratios: &RatioSet, benchmark: Option<&PeerGroup>) {
    let as_of = report
        .report_date()
        .map(|d| d.to_string())
        .unwrap_or_else(|| report.repdte.clone());

    println!("=== SUBJECT BANK ===");
    println!("  name:     {}", report.name);
    println!("  location: {}, {}", report.city, report.stalp);
    println!("  cert:     {}", report.cert);
    println!("  assets:   {}", format_thousands(report.asset));
    println!("  as of:    {as_of}");

    println!();
    println!("=== RATIOS ===");
    println!("  efficiency ratio:      {:.2}%", ratios.efficiency_ratio);
    println!("  cost of funds:         {:.2}%", ratios.cost_of_funds);
    println!(
        "  non-interest income:   {:.2}%",
        ratios.non_interest_income_percent
    );
    println!("  yield on loans:        {:.2}%", ratios.yield_on_loans);
    println!("  net interest margin:   {:.2}%", ratios.net_interest_margin);
    println!(
        "  assets per employee:   {}",
        format_dollars(ratios.assets_per_employee)
    );
    println!("  return on equity:      {:.2}%", ratios.return_on_equity);
    println!("  return on assets:      {:.2}%", ratios.return_on_assets);
    println!(
        "  non-performing loans:  {:.2}%",
        ratios.non_performing_loans_ratio
    );

    println!();
    let Some(group) = benchmark else {
        println!("=== PEER BENCHMARK ===");
        println!("  (benchmark unavailable)");
        return;
    };

    println!("=== PEER BENCHMARK ({}) ===", group.tier_label);
    println!("  peers used: {}", group.sample_size);
    println!("  {:<28} {:>12} {:>12}", "ratio", "P25", "P75");
    for (name, band) in &group.bands {
        println!("  {:<28} {:>12.2} {:>12.2}", name, band.p25, band.p75);
    }

    println!();
    println!("=== PEERS ===");
    for peer in &group.peers {
        println!(
            "  {} ({}, {}) {}",
            peer.name,
            peer.city,
            peer.state,
            format_thousands(peer.assets)
        );
    }
}

fn print_json(
    report: &RawFinancialReport,
    ratios: &RatioSet,
    benchmark: Option<&PeerGroup>,
) -> Result<()> {
    let doc = serde_json::json!({
        "bank": {
            "name": report.name,
            "city": report.city,
            "state": report.stalp,
            "cert": report.cert,
            "assets": report.asset,
            "report_date": report.report_date().map(|d| d.to_string()),
        },
        "ratios": ratios,
        "benchmark": benchmark,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Render an amount in currency thousands as a short dollar figure.
fn format_thousands(thousands: f64) -> String {
    format_dollars(thousands * 1000.0)
}

fn format_dollars(dollars: f64) -> String {
    if dollars >= 1e9 {
        format!("${:.1}B", dollars / 1e9)
    } else if dollars >= 1e6 {
        format!("${:.1}M", dollars / 1e6)
    } else {
        format!("${dollars:.0}")
    }
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
