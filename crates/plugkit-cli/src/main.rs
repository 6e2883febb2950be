use plugkit_core::{config, logging};

mod cli;

fn main() {
    // Config first so its log filter applies; a load error is reported after logging is up.
    let cfg = config::load_or_init();
    let filter = cfg.as_ref().ok().and_then(|c| c.log_filter.clone());
    logging::init(filter.as_deref());

    if let Err(err) = cfg.and_then(|cfg| cli::run_from_args(&cfg)) {
        eprintln!("plugkit error: {:#}", err);
        std::process::exit(1);
    }
}
