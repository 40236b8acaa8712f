use clap::Parser;
use rsfetch::config::{load_file_config, Flags, Options};
use rsfetch::{aggregate, classify, display, screenshot, SystemProbe};

/// A fast screenfetch-style system information tool.
#[derive(Parser, Debug)]
#[command(name = "rsfetch", version, about)]
struct Cli {
    /// Print a progress line for every detected fact
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print probe failures as they happen
    #[arg(short = 'd', long)]
    debug: bool,

    /// Suppress non-fatal error output
    #[arg(short = 'E', long)]
    suppress_errors: bool,

    /// Use the older variant of the logo where one exists
    #[arg(short = 'o', long)]
    old_logo: bool,

    /// Print the facts without any logo
    #[arg(short = 'n', long)]
    no_logo: bool,

    /// Pretend to be this distro when picking a logo
    #[arg(short = 'D', long, value_name = "NAME")]
    distro: Option<String>,

    /// Take a screenshot after rendering
    #[arg(short = 's', long)]
    screenshot: bool,
}

fn main() {
    let cli = Cli::parse();
    let flags = Flags {
        verbose: cli.verbose,
        debug: cli.debug,
        suppress_errors: cli.suppress_errors,
        old_logo: cli.old_logo,
        no_logo: cli.no_logo,
        screenshot: cli.screenshot,
        distro_override: cli.distro,
    };
    let opts = Options::merge(load_file_config(), flags);

    let tag = classify();
    let probe = SystemProbe::new(opts.debug);
    let facts = aggregate(&probe, tag);

    if opts.verbose {
        for fact in facts.iter() {
            display::verbose_out(&format!("Found {}: {}", fact.label, fact.value));
        }
    }

    let logo = display::select_logo(&opts, &facts, tag);
    display::render(&facts, &logo, &opts);

    if opts.screenshot {
        match screenshot::take_screenshot(&probe, tag) {
            Ok(filename) => display::verbose_out(&format!("Screenshot saved to {}", filename)),
            Err(err) if !opts.suppress_errors => {
                display::error_out(&format!("Screenshot failed: {}", err));
            }
            Err(_) => {}
        }
    }
}
