//! Calculator Agent Entry Point
//!
//! Connects to the calculator server, binds its tool catalog to the keyword
//! reasoner, and answers math questions. Two modes:
//!
//! - interactive (default): read-eval loop over standard input
//! - batch (`calculator-agent test`): runs a fixed set of example requests
//!
//! Exits non-zero if the initial connection to the server cannot be
//! established.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, fmt};

use calculator_mcp::agent::{AgentError, AgentSession, KeywordReasoner, McpToolProvider};
use calculator_mcp::core::Config;

/// Predefined requests for batch mode.
const TEST_QUERIES: &[&str] = &[
    "What is 125 plus 375?",
    "If I have 1000 and spend 246, how much do I have left?",
    "What is 16 times 16?",
    "What is 100 divided by 4?",
    "What is 2 to the power of 8?",
    "What is the square root of 144?",
];

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.logging.level);

    let batch = std::env::args().nth(1).is_some_and(|arg| arg == "test");

    let banner = "=".repeat(70);
    println!("{}", banner);
    if batch {
        println!("CALCULATOR AGENT - TEST MODE");
    } else {
        println!("CALCULATOR AGENT");
    }
    println!("{}", banner);
    println!("\nConnecting to calculator server at {}...", config.agent.endpoint);

    let provider = match McpToolProvider::connect(&config.agent.endpoint).await {
        Ok(provider) => provider,
        Err(e) => connection_failure(&config.agent.endpoint, &e),
    };

    let mut session =
        match AgentSession::connect(Box::new(provider), Box::new(KeywordReasoner::new())).await {
            Ok(session) => session,
            Err(e) => connection_failure(&config.agent.endpoint, &e),
        };

    println!("\nConnected! Available tools: {}", session.catalog().len());
    println!("\nTools:");
    for tool in session.catalog().tools() {
        println!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }

    if batch {
        run_batch(&mut session).await;
    } else {
        run_interactive(&mut session).await?;
    }

    session.close().await.ok();
    Ok(())
}

/// Read-eval loop over standard input.
async fn run_interactive(session: &mut AgentSession) -> Result<()> {
    let banner = "=".repeat(70);
    println!("\n{}", banner);
    println!("Ask me math questions! (type 'exit' to quit)");
    println!("{}", banner);
    println!("\nExample questions:");
    println!("  - What is 125 plus 375?");
    println!("  - If I have 1000 and spend 246, how much do I have left?");
    println!("  - What is 16 times 16?");
    println!("  - What is the square root of 144?");
    println!("  - What is 2 to the power of 10?");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "q") {
            break;
        }

        match session.dispatch(input).await {
            Ok(answer) => println!("Answer: {}\n", answer),
            Err(e) => println!("Error: {}\n", e),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Run the predefined requests in sequence.
async fn run_batch(session: &mut AgentSession) {
    let banner = "=".repeat(70);

    for (i, query) in TEST_QUERIES.iter().enumerate() {
        println!("\n{}", banner);
        println!("Test {}/{}: {}", i + 1, TEST_QUERIES.len(), query);
        println!("{}", banner);

        match session.dispatch(query).await {
            Ok(answer) => println!("Answer: {}", answer),
            Err(e) => println!("Error: {}", e),
        }
    }

    println!("\n{}", banner);
    println!("All tests completed!");
    println!("{}", banner);
}

/// Report a startup connection failure and exit non-zero.
fn connection_failure(endpoint: &str, e: &AgentError) -> ! {
    error!("Failed to connect to calculator server: {}", e);
    eprintln!("\nFailed to connect to the calculator server at {}!", endpoint);
    eprintln!("Make sure it is running: MCP_TRANSPORT=http calculator-server");
    std::process::exit(1);
}

/// Initialize the logging subsystem.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
