/// Skill Swap Browse - terminal discovery page
use anyhow::Context;
use clap::Parser;
use skillswap_client::{
    ClientConfig, DiscoveryClient, DiscoveryPage, DiscoverySource, PendingRequest,
    ResponseOutcome, DEFAULT_SERVER_URL,
};
use skillswap_core::PublicProfile;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skillswap-browse")]
#[command(about = "Browse public Skill Swap profiles", long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "SWAP_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Initial search term (name or skill)
    #[arg(long, default_value = "")]
    search: String,

    /// Initial skill filter
    #[arg(long, default_value = "")]
    skill: String,

    /// Keep the page open and read filter commands from stdin
    #[arg(short, long)]
    interactive: bool,
}

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Skill(String),
    Clear,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word {
        "search" | "s" => Ok(Command::Search(rest.to_string())),
        "skill" | "k" => Ok(Command::Skill(rest.to_string())),
        "clear" => Ok(Command::Clear),
        "" | "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {other} (type 'help')")),
    }
}

const HELP: &str = "\
Commands:
  search <term>   filter by name or skill (empty term clears it)
  skill <term>    filter by offered or wanted skill (empty term clears it)
  clear           clear both filters
  show            print the current page
  quit            exit";

type Response = (u64, skillswap_client::Result<Vec<PublicProfile>>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillswap_browse=warn,skillswap_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = DiscoveryClient::new(ClientConfig::new(&cli.server))
        .with_context(|| format!("invalid server URL {}", cli.server))?;

    let mut page = DiscoveryPage::new();
    page.set_search_term(cli.search);
    page.set_selected_skill(cli.skill);

    if cli.interactive {
        interactive(client, page).await
    } else {
        one_shot(&client, &mut page).await
    }
}

async fn one_shot(client: &DiscoveryClient, page: &mut DiscoveryPage) -> anyhow::Result<()> {
    let outcome = page.refresh(client).await;
    println!("{}", page.view());

    if outcome == ResponseOutcome::Failed {
        anyhow::bail!("could not load users from {}", client.base_url());
    }
    Ok(())
}

fn dispatch(
    client: &DiscoveryClient,
    request: PendingRequest,
    tx: &mpsc::UnboundedSender<Response>,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.discover_users(&request.filter).await;
        // Receiver only goes away on shutdown
        let _ = tx.send((request.generation, result));
    });
}

async fn interactive(client: DiscoveryClient, mut page: DiscoveryPage) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Response>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}\n");
    println!("{}", page.view());
    dispatch(&client, page.begin_request(), &tx);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };

                let requests = match parse_command(&line) {
                    Ok(Command::Search(term)) => vec![page.set_search_term(term)],
                    Ok(Command::Skill(term)) => vec![page.set_selected_skill(term)],
                    Ok(Command::Clear) => vec![
                        page.set_search_term(String::new()),
                        page.set_selected_skill(String::new()),
                    ],
                    Ok(Command::Show) => {
                        println!("{}", page.view());
                        continue;
                    }
                    Ok(Command::Help) => {
                        println!("{HELP}");
                        continue;
                    }
                    Ok(Command::Quit) => break,
                    Err(message) => {
                        eprintln!("{message}");
                        continue;
                    }
                };

                for request in requests.into_iter().flatten() {
                    dispatch(&client, request, &tx);
                }
            }
            Some((generation, result)) = rx.recv() => {
                match page.apply(generation, result) {
                    ResponseOutcome::Stale => {}
                    ResponseOutcome::Applied { .. } | ResponseOutcome::Failed => {
                        println!("\n{}", page.view());
                    }
                }
            }
        }
    }

    Ok(())
}
