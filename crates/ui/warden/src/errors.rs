use std::{panic::PanicHookInfo, sync::OnceLock};

use color_eyre::{Result, config::PanicHook};
use paths::PathContext;
use tracing::error;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the eyre report hook and the panic hook. Calling it twice is a no-op.
///
/// The panic hook hands the terminal back before anything is printed, so a
/// crash inside the TUI never leaves the shell in raw mode.
pub fn init(paths: &PathContext) -> Result<()> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(panic_section(paths))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;
    std::panic::set_hook(Box::new(move |info| on_panic(&panic_hook, info)));

    let _ = INSTALLED.set(());
    Ok(())
}

fn panic_section(paths: &PathContext) -> String {
    format!(
        "warden crashed. Please report this together with the newest log in {}",
        paths.logs_dir().display()
    )
}

fn on_panic(panic_hook: &PanicHook, info: &PanicHookInfo<'_>) {
    if let Err(err) = crate::tui::restore() {
        error!(%err, "terminal could not be restored");
    }

    let report = panic_hook.panic_report(info).to_string();
    error!(report = %strip_ansi_escapes::strip_str(&report), "panic");

    #[cfg(not(debug_assertions))]
    {
        use human_panic::{handle_dump, metadata, print_msg};
        let metadata = metadata!();
        let dump = handle_dump(&metadata, info);
        if print_msg(dump, &metadata).is_err() {
            eprintln!("{report}");
        }
    }

    #[cfg(debug_assertions)]
    {
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .create_panic_handler()(info);
    }

    std::process::exit(libc::EXIT_FAILURE);
}
