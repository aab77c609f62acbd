use forge_engine::approximate_fraction;

pub fn run(chance: f64, cap: u64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(format!("chance must be between 0 and 1, got {chance}"));
    }
    if cap == 0 {
        return Err("--cap must be at least 1".into());
    }

    let fraction = approximate_fraction(chance, cap);
    println!("  {fraction}");
    if (fraction.value() - chance).abs() > 1e-8 {
        println!("  ≈ {:.6} (off by {:.2e})", fraction.value(), (fraction.value() - chance).abs());
    }

    Ok(())
}
