mod commands;
mod context;
mod examples;
mod output;
mod theme;
mod views;

use anyhow::Result;
use clap::{
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Color as ClapColor, RgbColor, Style},
    },
    error::ErrorKind,
};

use colored::{Color as ThemeColor, Colorize, control::ShouldColorize};
use std::fmt::Write;
use std::io::{self, Write as IoWrite};

use commands::{
    chat::{ChatCommands, handle_chat_commands},
    events::{EventsCommands, handle_events_commands},
    explore::{ExploreCommands, handle_explore_commands},
    init::{InitArgs, handle_init},
    locate::handle_locate,
    session::{SessionCommands, handle_session_commands},
    tour::handle_tour,
};
use context::Device;
use examples::{ExampleGroup, command_examples};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{ARROW, ERROR, PALETTE, SUCCESS, WARNING};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("WAYMEET_STORAGE", "Override the storage backend (memory, file, redis)"),
    ("REDIS_URL", "Redis connection URL when the redis backend is used"),
    ("RUST_LOG", "Log filter, e.g. waymeet=debug"),
];

#[derive(Parser)]
#[command(name = "waymeet")]
#[command(version = "0.1.0")]
#[command(
    about = "Session, events and group chat for the WayMeet event-discovery app",
    long_about = r#"Command line driver for the WayMeet client core.

The signed-in session and the onboarding flag persist through the configured
storage backend. Events and chat start from the sample catalogue on every run.

Commands:
  init      Write a default .waymeet/config.toml
  session   Sign in, sign up, onboard and sign out
  events    Browse, filter, create and join events
  chat      Read and post to an event's group chat
  explore   Places, itineraries and categories
  locate    Resolve the device position
  tour      Run a first session end to end
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Device latitude; without it location permission is denied
    #[arg(long, global = true, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Device longitude
    #[arg(long, global = true, allow_negative_numbers = true)]
    lon: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn parse_with_styles() -> Self {
        let command = build_cli_command();
        let parsed = command
            .styles(help_styles())
            .try_get_matches()
            .and_then(|matches| Cli::from_arg_matches(&matches));
        match parsed {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = print_blank_line_stdout();
                    if let Err(print_err) = err.print()
                        && print_err.kind() != io::ErrorKind::BrokenPipe
                    {
                        eprintln!("Failed to display help: {print_err}");
                    }
                    let _ = print_blank_line_stdout();
                    std::process::exit(0);
                }
                ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    handle_missing_subcommand(err);
                }
                _ => {
                    let exit_code = err.exit_code();
                    let _ = print_blank_line_stderr();
                    if let Err(print_err) = err.print()
                        && print_err.kind() != io::ErrorKind::BrokenPipe
                    {
                        eprintln!("Failed to display error: {print_err}");
                    }
                    let _ = print_blank_line_stderr();
                    std::process::exit(exit_code);
                }
            },
        }
    }
}

fn handle_missing_subcommand(error: clap::error::Error) -> ! {
    let mut command = build_cli_command();
    let command_name = command.get_display_name().unwrap_or_else(|| command.get_name()).to_string();

    let _ = print_blank_line_stderr();
    eprintln!("error: '{command_name}' requires a subcommand but one was not provided");
    let _ = print_blank_line_stderr();

    command = command.styles(help_styles());

    let mut stderr = io::stderr();
    if command.write_long_help(&mut stderr).is_ok() {
        let _ = IoWrite::write_all(&mut stderr, b"\n");
        let _ = IoWrite::flush(&mut stderr);
    }

    let _ = print_blank_line_stderr();
    std::process::exit(error.exit_code());
}

fn build_cli_command() -> Command {
    let use_color = detect_color_support();
    let appendix = render_top_level_appendix(use_color);
    let mut command = Cli::command().after_long_help(appendix);
    command = command.color(if use_color { ColorChoice::Auto } else { ColorChoice::Never });
    attach_command_examples(&mut command, use_color);
    command
}

fn attach_command_examples(command: &mut Command, use_color: bool) {
    for example in command_examples() {
        if let Some(subcommand) = command.find_subcommand_mut(example.name) {
            let help_text = render_examples(example.groups, use_color);
            *subcommand = subcommand.clone().after_long_help(help_text);
        }
    }
}

fn render_examples(groups: &[ExampleGroup], use_color: bool) -> String {
    let mut buffer = String::new();

    let heading = stylize("Examples:", PALETTE.heading, true, use_color);
    let _ = writeln!(buffer, "{heading}");

    for (index, group) in groups.iter().enumerate() {
        let title = stylize(group.title, PALETTE.title, true, use_color);
        let _ = writeln!(buffer, "  {title}");

        for command in group.commands {
            let arrow = stylize(ARROW, PALETTE.command, false, use_color);
            let command_text = stylize(command, PALETTE.command, false, use_color);
            let _ = writeln!(buffer, "    {arrow} {command_text}");
        }

        if index + 1 < groups.len() {
            buffer.push('\n');
        }
    }

    buffer
}

fn render_top_level_appendix(use_color: bool) -> String {
    let mut buffer = String::new();

    let env_heading = stylize("Environment Variables:", PALETTE.heading, true, use_color);
    let _ = writeln!(buffer, "{env_heading}");
    for (key, description) in ENVIRONMENT_VARIABLES {
        let key_text = stylize(key, PALETTE.key, true, use_color);
        let value_text = stylize(description, PALETTE.value, false, use_color);
        let _ = writeln!(buffer, "  {key_text}  {value_text}");
    }

    buffer.push('\n');

    let tip_heading = stylize("Tip:", PALETTE.heading, true, use_color);
    let tip_text = stylize(
        "Use 'waymeet <command> --help' to view examples for each command.",
        PALETTE.command,
        false,
        use_color,
    );
    let _ = writeln!(buffer, "{tip_heading} {tip_text}");

    buffer
}

fn print_blank_line_stdout() -> io::Result<()> {
    let mut stdout = io::stdout();
    IoWrite::write_all(&mut stdout, b"\n")?;
    IoWrite::flush(&mut stdout)
}

fn print_blank_line_stderr() -> io::Result<()> {
    let mut stderr = io::stderr();
    IoWrite::write_all(&mut stderr, b"\n")?;
    IoWrite::flush(&mut stderr)
}

fn stylize(text: &str, color: ThemeColor, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let styled = text.color(color);
    if bold { styled.bold().to_string() } else { styled.to_string() }
}

fn detect_color_support() -> bool {
    ShouldColorize::from_env().should_colorize()
}

fn help_styles() -> Styles {
    Styles::styled()
        .usage(style_from_color(PALETTE.title).bold())
        .header(style_from_color(PALETTE.heading).bold())
        .literal(style_from_color(PALETTE.command))
        .placeholder(style_from_color(PALETTE.placeholder))
        .valid(style_from_color(SUCCESS.color))
        .invalid(style_from_color(WARNING.color))
        .error(style_from_color(ERROR.color).bold())
}

fn style_from_color(color: ThemeColor) -> Style {
    Style::new().fg_color(Some(color_to_clap_color(color)))
}

fn color_to_clap_color(color: ThemeColor) -> ClapColor {
    match color {
        ThemeColor::Black => ClapColor::Ansi(AnsiColor::Black),
        ThemeColor::Red => ClapColor::Ansi(AnsiColor::Red),
        ThemeColor::Green => ClapColor::Ansi(AnsiColor::Green),
        ThemeColor::Yellow => ClapColor::Ansi(AnsiColor::Yellow),
        ThemeColor::Blue => ClapColor::Ansi(AnsiColor::Blue),
        ThemeColor::Magenta => ClapColor::Ansi(AnsiColor::Magenta),
        ThemeColor::Cyan => ClapColor::Ansi(AnsiColor::Cyan),
        ThemeColor::White => ClapColor::Ansi(AnsiColor::White),
        ThemeColor::BrightBlack => ClapColor::Ansi(AnsiColor::BrightBlack),
        ThemeColor::BrightRed => ClapColor::Ansi(AnsiColor::BrightRed),
        ThemeColor::BrightGreen => ClapColor::Ansi(AnsiColor::BrightGreen),
        ThemeColor::BrightYellow => ClapColor::Ansi(AnsiColor::BrightYellow),
        ThemeColor::BrightBlue => ClapColor::Ansi(AnsiColor::BrightBlue),
        ThemeColor::BrightMagenta => ClapColor::Ansi(AnsiColor::BrightMagenta),
        ThemeColor::BrightCyan => ClapColor::Ansi(AnsiColor::BrightCyan),
        ThemeColor::BrightWhite => ClapColor::Ansi(AnsiColor::BrightWhite),
        ThemeColor::TrueColor { r, g, b } => ClapColor::Rgb(RgbColor(r, g, b)),
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config in the current directory
    Init(InitArgs),

    /// Sign in, sign up, onboard and sign out
    #[command(subcommand)]
    Session(SessionCommands),

    /// Browse, filter, create and join events
    #[command(subcommand)]
    Events(EventsCommands),

    /// Read and post to an event's group chat
    #[command(subcommand)]
    Chat(ChatCommands),

    /// Places, itineraries and categories
    #[command(subcommand)]
    Explore(ExploreCommands),

    /// Resolve the device position (or the fallback)
    Locate,

    /// Run a first session end to end on throwaway storage
    Tour,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse_with_styles();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let _ = print_blank_line_stdout();

    let quiet = cli.quiet;
    let no_color = cli.no_color;
    match execute(cli).await {
        Ok(()) => {
            let _ = print_blank_line_stdout();
        }
        Err(err) => {
            let output = OutputManager::new(GlobalOptions {
                quiet,
                no_color,
                ..Default::default()
            });
            output.error(&format!("{err:#}"));
            let _ = print_blank_line_stdout();
            std::process::exit(1);
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let global_options = GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    let output = OutputManager::new(global_options);
    let device = Device::from_args(cli.lat, cli.lon)?;

    match cli.command {
        Commands::Init(args) => handle_init(args, &output)?,
        Commands::Session(command) => handle_session_commands(command, device, &output).await?,
        Commands::Events(command) => handle_events_commands(command, device, &output).await?,
        Commands::Chat(command) => handle_chat_commands(command, device, &output).await?,
        Commands::Explore(command) => handle_explore_commands(command, &output)?,
        Commands::Locate => handle_locate(device, &output).await?,
        Commands::Tour => handle_tour(device, &output).await?,
    }

    Ok(())
}
