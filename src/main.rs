#[cfg(not(any(feature = "cli")))]
fn main() {}

#[cfg(feature = "cli")]
fn main() {
    let cfg = map2sym::prelude::Config::new();
    if let Err(err) = map2sym::cli::init(&cfg) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
