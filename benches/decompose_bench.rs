// Performance benchmarks for hanzi-decomp query operations

use hanzi_decomp::HanziDecomposer;
use std::time::Instant;

fn main() {
    println!("🏃 hanzi-decomp Performance Benchmarks\n");

    let engine = HanziDecomposer::new().expect("Failed to load engine");

    // Warmup
    let _ = engine.decompose('爱');

    bench_decompose(&engine);
    bench_decompose_many(&engine);
    bench_reverse_index(&engine);
    bench_phonetic(&engine);

    println!("\n✅ Benchmarks completed!");
}

fn bench_decompose(engine: &HanziDecomposer) {
    println!("📍 DECOMPOSE (three tiers per character)");
    println!("─────────────────────────────");

    for ch in ['爱', '愛', '鼎', '焱', 'a'] {
        let start = Instant::now();
        let iterations = 10_000;
        for _ in 0..iterations {
            let _ = engine.decompose(ch);
        }
        let duration = start.elapsed();

        println!(
            "  {:<4} → {:.3}µs/call",
            ch,
            duration.as_secs_f64() * 1_000_000.0 / iterations as f64
        );
    }
    println!();
}

fn bench_decompose_many(engine: &HanziDecomposer) {
    println!("📍 DECOMPOSE MANY (batch over text)");
    println!("─────────────────────────────");

    let text = "和挂爱好热清情请晴低的鼎鼐鼏鐤鼑";
    let start = Instant::now();
    let iterations = 1_000;
    for _ in 0..iterations {
        let _ = engine.decompose_many(text);
    }
    let duration = start.elapsed();

    println!(
        "  {} chars → {:.3}ms/batch",
        text.chars().count(),
        duration.as_secs_f64() * 1000.0 / iterations as f64
    );
    println!();
}

fn bench_reverse_index(engine: &HanziDecomposer) {
    println!("📍 REVERSE INDEX (component lookup)");
    println!("─────────────────────────────");

    for component in ['鼎', '囗', '氵', '$'] {
        let start = Instant::now();
        let iterations = 100_000;
        let mut hits = 0;
        for _ in 0..iterations {
            hits += engine.characters_with_component(component).len();
        }
        let duration = start.elapsed();

        println!(
            "  {:<4} → {} owners in {:.3}ns/lookup",
            component,
            hits / iterations,
            duration.as_secs_f64() * 1_000_000_000.0 / iterations as f64
        );
    }
    println!();
}

fn bench_phonetic(engine: &HanziDecomposer) {
    println!("📍 PHONETIC REGULARITY");
    println!("─────────────────────────────");

    for ch in ['低', '的', '清', '妈'] {
        let start = Instant::now();
        let iterations = 10_000;
        for _ in 0..iterations {
            let _ = engine.determine_phonetic_regularity(ch);
        }
        let duration = start.elapsed();

        println!(
            "  {:<4} → {:.3}µs/call",
            ch,
            duration.as_secs_f64() * 1_000_000.0 / iterations as f64
        );
    }
}
