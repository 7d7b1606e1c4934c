use clap::{Arg, ArgAction, Command};

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

fn tree_arg() -> Arg {
    Arg::new("tree")
        .long("tree")
        .short('t')
        .help("Accessible tree snapshot (JSON) to discover targets in")
        .value_parser(clap::value_parser!(std::path::PathBuf))
        .required(true)
}

fn clients_arg() -> Arg {
    Arg::new("clients")
        .long("clients")
        .help("Saved compositor client list; queries the live compositor when omitted")
        .value_parser(clap::value_parser!(std::path::PathBuf))
}

fn monitors_arg() -> Arg {
    Arg::new("monitors")
        .long("monitors")
        .help("Saved compositor monitor list; queries the live compositor when omitted")
        .value_parser(clap::value_parser!(std::path::PathBuf))
}

pub fn build_cli() -> Command {
    Command::new("wlim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Click on-screen elements by typing short labels")
        .long_about(
            "wlim finds clickable elements through the accessibility tree, repairs their \
             positions against the compositor's window geometry and labels each one with a \
             short letter code. Typing a label clicks the element.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file to apply on top of the user config")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // Targets subcommand
        .subcommand(
            Command::new("targets")
                .about("Discover and list labeled targets")
                .arg(tree_arg())
                .arg(clients_arg())
                .arg(json_arg()),
        )
        // Hint subcommand
        .subcommand(
            Command::new("hint")
                .about("Run a hint session with scripted keys and click the selection")
                .arg(tree_arg())
                .arg(clients_arg())
                .arg(monitors_arg())
                .arg(
                    Arg::new("keys")
                        .long("keys")
                        .short('k')
                        .help(
                            "Key script: a-z type, A-Z shift+letter (secondary click), \
                             <c-x> control+letter (middle click), <bs> backspace, <esc> cancel",
                        )
                        .required(true),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Report the click without injecting pointer input")
                        .action(ArgAction::SetTrue),
                )
                .arg(json_arg()),
        )
        // Bounds subcommand
        .subcommand(
            Command::new("bounds")
                .about("Show the screen extent spanned by all monitors")
                .arg(monitors_arg())
                .arg(json_arg()),
        )
}
