use anyhow::{bail, Result};
use std::env;

// Use library instead of local modules
use receipt_processor::{breakdown, load_document, parse, validate};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let valid = match (args.get(1).map(String::as_str), args.get(2)) {
        (Some("validate"), Some(path)) => run_validate(path)?,
        (Some("score"), Some(path)) => run_score(path)?,
        _ => {
            print_usage();
            bail!("expected a command and a receipt file");
        }
    };

    if !valid {
        std::process::exit(1);
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("   receipt-processor validate <receipt.json>");
    eprintln!("   receipt-processor score <receipt.json>");
    eprintln!("\n   HTTP server: cargo run --bin receipt-server");
}

fn run_validate(path: &str) -> Result<bool> {
    let document = load_document(path)?;
    let result = validate(&document);

    if result.is_valid {
        println!("✅ {} is a valid receipt", path);
    } else {
        println!("❌ {} is invalid:", path);
        for error in &result.errors {
            println!("   • {}", error);
        }
    }

    Ok(result.is_valid)
}

fn run_score(path: &str) -> Result<bool> {
    let document = load_document(path)?;

    let receipt = match parse(&document) {
        Ok(receipt) => receipt,
        Err(result) => {
            println!("❌ {} is invalid:", path);
            for error in &result.errors {
                println!("   • {}", error);
            }
            return Ok(false);
        }
    };

    let points = breakdown(&receipt);

    println!("🧾 {} ({} items, total {})", receipt.retailer, receipt.items.len(), receipt.total);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (rule, value) in points.rules() {
        println!("   {:<24} {:>6}", rule, value);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   {:<24} {:>6}", "total", points.total());

    Ok(true)
}
