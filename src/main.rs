use clap::Parser;

mod args;
mod deck;
mod french;
mod logging;
mod war;
use self::args::{Args, Ui};
#[cfg(feature = "tui")]
use self::war::tui_main;
use self::war::{cli_main, replay_main};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let ui = args.ui.unwrap_or_default();
    // Log lines would corrupt the terminal UI, so it stays quiet unless asked.
    logging::init(match ui {
        Ui::Console => "warn",
        Ui::Tui => "off",
    });
    if let Some(path) = &args.replay {
        return replay_main(path);
    }
    let launch = args.into_launch()?;
    match ui {
        Ui::Console => cli_main(launch),
        #[cfg(feature = "tui")]
        Ui::Tui => tui_main(launch),
        #[cfg(not(feature = "tui"))]
        Ui::Tui => anyhow::bail!("built without the terminal UI; use --ui console"),
    }
}
