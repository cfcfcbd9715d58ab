//! Diagnostic logging setup.
//!
//! User-facing output goes through `println!`; `log` records are diagnostics
//! on stderr and are off unless `-v` or `RUST_LOG` asks for them.

use std::io::Write;

/// Initialise `env_logger` for the process.
///
/// `--verbose` takes precedence over `RUST_LOG`. Without it, `RUST_LOG` is
/// honoured and defaults to `off`.
pub fn init_logging(verbose: u8) {
    let mut builder = if verbose >= 1 {
        let mut b = env_logger::Builder::new();
        b.filter_level(log::LevelFilter::Debug);
        b
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
    };

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[sproutee {}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    // A second init (tests) is harmless.
    let _ = builder.try_init();
}
