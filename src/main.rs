// This binary crate is intentionally minimal.
// The loss and activation functions live in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example classroom
use ferrite_primitives::{cross_entropy, softmax};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
    {
        eprintln!("failed to initialise logger: {}", e);
    }

    let ce = cross_entropy(&[1.0, 0.0, 0.0, 1.0], &[0.9, 0.1, 0.2, 0.8])?;
    log::info!("cross_entropy([1, 0, 0, 1], [0.9, 0.1, 0.2, 0.8]) = {ce:.4}");

    for logits in [[1.0, 1.0, 1.0], [1.0, 2.0, 3.0]] {
        let s = softmax(&logits)?;
        log::info!("softmax({logits:?}) = {s:.4?}");
    }

    match cross_entropy(&[1.0], &[0.0]) {
        Ok(ce) => log::info!("cross_entropy([1], [0]) = {ce}"),
        Err(e) => log::info!("cross_entropy([1], [0]) rejected: {e}"),
    }

    Ok(())
}
