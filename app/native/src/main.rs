//! Deskpaper binary.
//!
//! Takes no required arguments: reads `SINGLE_DISPLAY_FOLDER` and
//! `MULTI_DISPLAY_FOLDER`, performs one wallpaper change, and exits.

fn main() {
    deskpaper::logging::init();

    let outcome = deskpaper::cli::run();
    if let Some(err) = outcome.error() {
        tracing::debug!("run ended without a wallpaper change: {err}");
    }

    std::process::exit(outcome.exit_code());
}
