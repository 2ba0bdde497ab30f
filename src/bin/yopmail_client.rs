use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use yopmail_client::config::load_config;
use yopmail_client::inbox::Inbox;
use yopmail_client::render::Render;
use yopmail_client::transport::YopmailClient;

#[derive(Parser)]
#[command(name = "yopmail_client")]
#[command(about = "Read and manage YOPmail inboxes from the terminal", long_about = None)]
struct Cli {
    /// Print JSON instead of coloured text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the most recent mails of an inbox
    List {
        name: String,
        #[arg(default_value_t = 10)]
        limit: usize,
    },

    /// Show the mail at a position (1 = most recent)
    Show { name: String, position: usize },

    /// Delete the mail at a position (1 = most recent)
    Delete { name: String, position: usize },

    /// Delete every mail of an inbox
    Flush { name: String },
}

/// Turn a 1-based position into an index, once the inbox holds `count` mails.
fn check_position(position: usize, count: usize) -> Result<usize> {
    if position == 0 {
        return Err(anyhow!("position must be greater than 0"));
    }
    if position > count {
        return Err(anyhow!(
            "position exceeds the number of mails available ({count})"
        ));
    }
    Ok(position - 1)
}

fn print(item: &dyn Render, json: bool) -> Result<()> {
    let out = if json { item.json()? } else { item.coloured()? };
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = load_config().map_err(|e| anyhow!("Configuration error: {e}"))?;
    let open = |name: String| -> Result<Inbox<YopmailClient>> {
        let client = YopmailClient::connect(&cfg)?;
        Ok(Inbox::new(name, client).with_page_delay(cfg.page_delay()))
    };

    match cli.cmd {
        Command::List { name, limit } => {
            let mut inbox = open(name)?;
            inbox.accumulate(limit)?;
            print(&inbox, cli.json)
        }

        Command::Show { name, position } => {
            let mut inbox = open(name)?;
            inbox.accumulate(position)?;
            let index = check_position(position, inbox.count())?;
            let mail = inbox.fetch(index)?;
            print(&mail, cli.json)
        }

        Command::Delete { name, position } => {
            let mut inbox = open(name)?;
            inbox.accumulate(position)?;
            let index = check_position(position, inbox.count())?;
            inbox.delete(index)?;
            println!("Mail {position} deleted");
            Ok(())
        }

        Command::Flush { name } => {
            let mut inbox = open(name)?;
            inbox.accumulate(1)?;
            inbox.flush()?;
            println!("Inbox {} flushed", inbox.name());
            Ok(())
        }
    }
}
