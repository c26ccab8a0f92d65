use std::env;
use std::io::{self, Write};

use linesh::core::commands::builtin;
use linesh::core::config::{ConfigLoader, ConfigPaths, Settings};
use linesh::error::ShellError;
use linesh::flags::Flags;
use linesh::highlight::Palette;
use linesh::platform::StdIo;
use linesh::{Command, Shell};
use log::{debug, warn, LevelFilter};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", Palette::new().error(&format!("linesh: {}", e)));
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("linesh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let level = if flags.is_set("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let paths = match flags.get_value("config") {
        Some(path) => ConfigPaths::with_override(path),
        None => ConfigPaths::new()?,
    };
    let settings = apply_flags(ConfigLoader::new(&paths).load()?, &flags);
    debug!("settings: {:?}", settings);

    let palette = Palette::new();
    let commands: [Command<StdIo>; 5] = builtin::commands();
    if !flags.is_set("quiet") {
        print_banner(&mut io::stdout().lock(), &palette, &commands, &settings)?;
    }

    let _terminal = enter_terminal_mode(&settings)?;

    let mut shell = Shell::new(StdIo::new(), &commands, settings.shell);
    shell.run();
    Ok(())
}

/// `--plain` wins over `raw = on` in the settings file.
fn apply_flags(mut settings: Settings, flags: &Flags) -> Settings {
    if flags.is_set("plain") {
        settings.raw = false;
    }
    settings
}

fn print_banner(
    out: &mut impl Write,
    palette: &Palette,
    commands: &[Command<StdIo>],
    settings: &Settings,
) -> io::Result<()> {
    let names: Vec<String> = commands
        .iter()
        .map(|command| palette.command(command.name))
        .collect();
    // Raw mode is not on yet, so a plain "\n" still returns the carriage.
    writeln!(out, "{}", palette.success(&format!("linesh {}", env!("CARGO_PKG_VERSION"))))?;
    writeln!(out, "{} {}", palette.hint("commands:"), names.join(" "))?;
    if settings.shell.echo {
        writeln!(out, "{}", palette.hint("tab completes, 'exit' or Ctrl-D quits"))?;
    }
    out.flush()
}

#[cfg(unix)]
fn enter_terminal_mode(settings: &Settings) -> Result<Option<linesh::platform::RawMode>, ShellError> {
    use linesh::platform::{keeps_cr_mapping, signal, PlatformError, RawMode};

    if !settings.raw {
        signal::hint_on_interrupt()?;
        return Ok(None);
    }

    match RawMode::enter(keeps_cr_mapping(&settings.shell)) {
        Ok(raw) => {
            signal::restore_terminal_on_exit(raw.saved())?;
            Ok(Some(raw))
        }
        Err(PlatformError::NotATerminal) => {
            warn!("stdin is not a terminal, staying in cooked mode");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(not(unix))]
fn enter_terminal_mode(_settings: &Settings) -> Result<Option<()>, ShellError> {
    warn!("raw mode is only supported on unix, staying in cooked mode");
    Ok(None)
}
