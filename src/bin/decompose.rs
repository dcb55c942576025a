// Hanzi decomposition CLI tool
// Command-line interface for tiered decomposition and reverse lookup

use clap::Parser;
use hanzi_decomp::HanziDecomposer;

/// Hanzi Decomposer - break characters into components, radicals, strokes
#[derive(Parser, Debug)]
#[command(name = "hanzi-decompose")]
#[command(about = "Decompose Hanzi into components, query the reverse index, score phonetic regularity", long_about = None)]
#[command(version)]
struct Args {
    /// Characters to decompose (every distinct character is processed)
    #[arg(value_name = "TEXT")]
    text: String,

    /// Only print this tier (1 = once, 2 = radical, 3 = graphical)
    #[arg(short, long)]
    tier: Option<u8>,

    /// Also list the characters containing each input character as a component
    #[arg(short, long)]
    reverse: bool,

    /// Also print phonetic regularity per reading
    #[arg(short, long)]
    phonetic: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), hanzi_decomp::TableError> {
    let args = Args::parse();

    if args.verbose {
        println!("🔍 Loading decomposition engine...");
    }

    let engine = HanziDecomposer::new()?;

    if args.verbose {
        let (corpus, components) = engine.stats();
        println!(
            "✅ Tables loaded: {} characters, {} indexed components\n",
            corpus, components
        );
    }

    for ch in distinct_chars(&args.text) {
        let dec = engine.decompose(ch);
        println!("{}", ch);

        let tiers = [
            (1u8, "once", &dec.components1),
            (2, "radical", &dec.components2),
            (3, "graphical", &dec.components3),
        ];
        for (n, label, components) in tiers {
            if args.tier.map_or(true, |t| t == n) {
                let rendered: Vec<String> = components.iter().map(|c| c.to_string()).collect();
                println!("  {:<9} {}", label, rendered.join(" "));
            }
        }

        if let Some(readings) = engine.pinyin(ch) {
            let rendered: Vec<String> = readings.iter().map(|p| p.to_string()).collect();
            println!("  {:<9} {}", "pinyin", rendered.join(", "));
        }

        if args.reverse {
            let owners = engine.characters_with_component(ch);
            if owners.is_empty() {
                println!("  {:<9} (not a component)", "found in");
            } else {
                let rendered: String = owners.iter().collect();
                println!("  {:<9} {}", "found in", rendered);
            }
        }

        if args.phonetic {
            for (reading, result) in engine.determine_phonetic_regularity(ch) {
                let pairs: Vec<String> = result
                    .component
                    .iter()
                    .zip(result.phonetic_pinyin.iter().zip(&result.regularity))
                    .map(|(c, (p, r))| format!("{}:{}={}", c, p, r))
                    .collect();
                println!("  {:<9} {}", reading, pairs.join(" "));
            }
        }

        println!();
    }

    Ok(())
}

/// Distinct characters of the input, first occurrence first
fn distinct_chars(text: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for ch in text.chars() {
        if !seen.contains(&ch) {
            seen.push(ch);
        }
    }
    seen
}
