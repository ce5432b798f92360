use create_service_push::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!("{}", format_warning(ui, w));
    }
}

fn format_warning(ui: &UiContext, warning: &ConfigWarning) -> String {
    format!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        warning
    )
}

/// Fatal errors are reported on stdout, alongside the rest of the command's output
pub fn print_fatal(error: &anyhow::Error) {
    println!("ERROR: {}", error);
}
