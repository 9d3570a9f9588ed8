use crate::args::LogLevel;

const WAQT_TARGETS: [&str; 4] = ["waqt", "waqt_engine", "waqt_providers", "waqt_runtime"];

/// Install the stderr logger: dependencies at `warn` or quieter, waqt crates
/// at `level`. `RUST_LOG` directives are applied on top.
pub fn init(level: LogLevel) {
    let my_code_level = level.to_filter();
    let global_level = log::LevelFilter::Warn.min(my_code_level);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .target(env_logger::Target::Stderr);
    for target in WAQT_TARGETS {
        builder.filter(Some(target), my_code_level);
    }

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    let _ = builder.try_init();
}
