//! Command-line argument parsing and help for nerd-ls.
//!
//! The surface is `ls [-l] [path]`. Flags are only recognised before the first positional
//! argument; parsing stops there or after `--`. Extra positionals are ignored.

use std::path::PathBuf;

/// Selected rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    Compact,
    Long,
}

/// Outcome of parsing the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List { mode: FormatMode, path: PathBuf },
    Help,
    Unknown(String),
}

/// Parses arguments, not including the program name.
pub fn parse_args<I, S>(args: I) -> CliAction
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut mode = FormatMode::Compact;
    let mut path = None;
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-l" => mode = FormatMode::Long,
            "-h" | "--help" => return CliAction::Help,
            "--" => {
                path = args.next();
                break;
            }
            opt if opt.starts_with('-') && opt != "-" => {
                return CliAction::Unknown(opt.to_string());
            }
            positional => {
                path = Some(positional.to_string());
                break;
            }
        }
    }

    CliAction::List {
        mode,
        path: PathBuf::from(path.unwrap_or_else(|| ".".to_string())),
    }
}

/// Parses the process arguments.
pub fn handle_args() -> CliAction {
    parse_args(std::env::args().skip(1))
}

pub const USAGE: &str = r#"Usage: ls [-l] [PATH]

List the entries of PATH (defaults to the current directory), with an icon for each.

OPTIONS:
  -l                      Use a long listing format
  -h, --help              Print help information

ENVIRONMENT:
  NERD_LS_CONFIG          Override the default config path
  NERD_LS_LOG             Log filter (e.g. "debug"), written to stderr
"#;

pub fn print_help() {
    print!("{}", USAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(mode: FormatMode, path: &str) -> CliAction {
        CliAction::List {
            mode,
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn defaults_to_compact_current_dir() {
        assert_eq!(
            parse_args(Vec::<String>::new()),
            list(FormatMode::Compact, ".")
        );
    }

    #[test]
    fn long_flag_and_path() {
        assert_eq!(parse_args(["-l"]), list(FormatMode::Long, "."));
        assert_eq!(parse_args(["-l", "/tmp"]), list(FormatMode::Long, "/tmp"));
        assert_eq!(parse_args(["/tmp"]), list(FormatMode::Compact, "/tmp"));
    }

    #[test]
    fn flags_after_path_are_not_parsed() {
        assert_eq!(parse_args(["/tmp", "-l"]), list(FormatMode::Compact, "/tmp"));
        assert_eq!(parse_args(["a", "b"]), list(FormatMode::Compact, "a"));
    }

    #[test]
    fn double_dash_ends_flags() {
        assert_eq!(parse_args(["-l", "--", "-weird"]), list(FormatMode::Long, "-weird"));
        assert_eq!(parse_args(["--"]), list(FormatMode::Compact, "."));
    }

    #[test]
    fn help_and_unknown_options() {
        assert_eq!(parse_args(["-h"]), CliAction::Help);
        assert_eq!(parse_args(["--help"]), CliAction::Help);
        assert_eq!(parse_args(["-a"]), CliAction::Unknown("-a".into()));
        assert_eq!(parse_args(["-l", "-la"]), CliAction::Unknown("-la".into()));
    }
}
