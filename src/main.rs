use clap::Parser;
use miette::Result;
use dcc::cli::{Cli, Commands};
use dcc::core::Config;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior so piping to `head` exits quietly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    let config = Config::load();
    dcc::cli::logging::init(&global, config.log_level.as_deref());

    match cli.command {
        Commands::Check(args) => dcc::cli::commands::check::run(args, &global, &config),
        Commands::Rules(args) => dcc::cli::commands::rules::run(args, &global, &config),
        Commands::Config(cmd) => dcc::cli::commands::config::run(cmd, &global, &config),
        Commands::Completions(args) => dcc::cli::commands::completions::run(args),
    }
}
