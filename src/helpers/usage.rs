use clap::error::ErrorKind;
use clap::Parser;
use crate::config::Config;

/// Exit status for argument problems, including a missing city or business type.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Parses the command line, printing the usage and exiting with
/// [`USAGE_EXIT_CODE`] when the arguments are unusable.
pub fn parse_config_or_exit() -> Config {
    match Config::try_parse() {
        Ok(config) => config,
        Err(e) if is_informational(e.kind()) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(USAGE_EXIT_CODE)
        }
    }
}

fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_help_and_version_exit_through_clap() {
        assert!(is_informational(ErrorKind::DisplayHelp));
        assert!(is_informational(ErrorKind::DisplayVersion));
        assert!(!is_informational(ErrorKind::MissingRequiredArgument));
    }

    #[test]
    fn missing_arguments_render_usage() {
        let err = Config::try_parse_from(["places-entries"]).expect_err("no positionals");
        assert!(!is_informational(err.kind()));
        assert!(err.render().to_string().contains("Usage:"));
    }
}
