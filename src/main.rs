use clap::Parser;
use std::ffi::OsString;
use std::process;

/// binshim - platform binary launcher
///
/// Picks the pre-built binary for this OS and architecture from the `bin/`
/// directory next to the launcher and runs it. Every argument is passed to
/// that binary untouched; the launcher itself understands no flags.
///
/// Environment:
///   BINSHIM_ROOT      installation directory (defaults to the launcher's directory)
///   BINSHIM_REVISION  set to true to append the current git revision to binary names
///   RUST_LOG          log filter (defaults to binshim=info)
#[derive(Parser, Debug)]
#[command(
    author,
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Arguments forwarded to the selected binary
    #[arg(trailing_var_arg = true, value_name = "ARGS")]
    args: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments so that every one of them, including `--`,
    /// lands in `args` unchanged.
    fn from_passthrough<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| OsString::from("binshim"));
        let escaped = [program, OsString::from("--")].into_iter().chain(argv);
        Self::parse_from(escaped)
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("binshim=info"))
        .init();
    log::debug!("binshim {}", binshim::LAUNCHER_VERSION);

    let cli = Cli::from_passthrough(std::env::args_os());
    let runtime = binshim::runtime::RealRuntime;

    let code = match binshim::launch::launch(runtime, cli.args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            binshim::launch::FALLBACK_EXIT_CODE
        }
    };
    process::exit(code);
}
