//! main.rs
//! Entry point for the nerd-ls `ls` binary

use nerd_ls::config::Config;
use nerd_ls::core::{self, PosixProvider};
use nerd_ls::ui;
use nerd_ls::utils::cli::{CliAction, FormatMode, USAGE, handle_args, print_help};

use std::io::{self, Write};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("NERD_LS_LOG", "warn")).init();

    let (mode, path) = match handle_args() {
        CliAction::List { mode, path } => (mode, path),
        CliAction::Help => {
            print_help();
            return Ok(());
        }
        CliAction::Unknown(opt) => {
            eprintln!("ls: unknown option '{}'", opt);
            eprint!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let config = Config::load();

    let entries = match core::read_listing(&path) {
        Ok(entries) => core::sort_listing(entries),
        Err(e) => {
            eprintln!("ls: {}", e);
            return Ok(());
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = match mode {
        FormatMode::Long => ui::render_long(&mut out, &PosixProvider, &entries, config.display()),
        FormatMode::Compact => {
            let width = core::effective_width(
                core::probe_width(),
                config.display().min_width(),
                config.display().default_width(),
            );
            ui::render_compact(&mut out, &entries, width, config.display())
        }
    };

    match result.and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
