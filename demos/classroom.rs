use ferrite_primitives::{
    softmax, BinaryCrossEntropy, CrossEntropyOptions, LengthPolicy, Reduction,
};
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
    {
        eprintln!("failed to initialise logger: {}", e);
    }

    let mut rng = rand::thread_rng();
    let classes = 5;

    // Random logits for one sample, and a random true class.
    let logits: Vec<f64> = (0..classes).map(|_| rng.gen_range(-3.0..3.0)).collect();
    let target = rng.gen_range(0..classes);
    let labels: Vec<f64> = (0..classes)
        .map(|c| if c == target { 1.0 } else { 0.0 })
        .collect();

    let probs = softmax(&logits)?;
    println!("logits:        {:.3?}", logits);
    println!("probabilities: {:.3?}", probs);
    println!("labels:        {:?}", labels);

    let options = CrossEntropyOptions::new(LengthPolicy::Strict, Reduction::Mean);
    println!("options:       {}", serde_json::to_string(&options)?);

    let bce = BinaryCrossEntropy::with_options(options);
    let terms = bce.per_sample(&labels, &probs)?;
    for (class, term) in terms.iter().enumerate() {
        let marker = if class == target { "<- target" } else { "" };
        println!("  class {class}: {term:.4} {marker}");
    }
    println!("mean binary cross-entropy: {:.4}", bce.loss(&labels, &probs)?);

    // Mismatched lengths: strict rejects, truncate pairs up to the shorter side.
    let short = &probs[..classes - 1];
    if let Err(e) = bce.loss(&labels, short) {
        println!("strict:   {e}");
    }
    let lenient = BinaryCrossEntropy::with_options(
        CrossEntropyOptions::new(LengthPolicy::Truncate, Reduction::Mean),
    );
    println!("truncate: {:.4}", lenient.loss(&labels, short)?);

    Ok(())
}
