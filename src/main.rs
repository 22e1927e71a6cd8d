use clap::Parser;
use knot_client::config::cli::{Command, LogFormat};
use knot_client::utils::error::ErrorSeverity;
use knot_client::utils::{logger, validation::Validate};
use knot_client::{CancellationToken, CliConfig, KnotClient, KnotError, ViewRouter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.load_file_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    let verbose = cli.verbose || file_config.verbose();
    match cli.effective_log_format(&file_config) {
        LogFormat::Compact => logger::init_cli_logger(verbose),
        LogFormat::Json => logger::init_json_logger(verbose),
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 路由查詢不需要連線
    match &cli.command {
        Command::Route { path } => {
            return match ViewRouter::new().resolve(path) {
                Ok(entry) => {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                    Ok(())
                }
                Err(e) => fail(e),
            };
        }
        Command::Routes => {
            println!("{}", serde_json::to_string_pretty(ViewRouter::new().entries())?);
            return Ok(());
        }
        _ => {}
    }

    let transport_config = match cli
        .transport_config(&file_config)
        .and_then(|config| config.validate().map(|_| config))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            fail(e)
        }
    };

    tracing::info!(
        "🚀 Using backend {} (timeout {}s)",
        transport_config.resolve_url(""),
        transport_config.timeout_seconds
    );

    let client = match KnotClient::from_config(transport_config) {
        Ok(client) => client,
        Err(e) => fail(e),
    };

    // Ctrl-C 取消進行中的請求
    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            watcher.cancel();
        }
    });
    let client = client.with_cancellation(cancel);

    let result = match cli.command {
        Command::ResolveCompany { name } => client.resolve_company(name).await,
        Command::Graph { company_id } => client.get_ownership_graph(&company_id).await,
        Command::Fto {
            description,
            markets,
            keywords,
        } => client.analyze_fto(description, markets, keywords).await,
        Command::Search {
            query,
            jurisdictions,
        } => client.search_patents(query, jurisdictions).await,
        Command::Patent { id } => client.get_patent(&id).await,
        Command::MatchProducts {
            description,
            keywords,
        } => client.match_products(description, keywords).await,
        Command::Query { text } => client.submit_query(text).await,
        Command::Health => client.health_check().await,
        Command::PriorArt {
            patent_id,
            keywords,
        } => client.find_prior_art(patent_id, keywords).await,
        Command::Landscape { domain, keywords } => {
            client.analyze_landscape(domain, keywords).await
        }
        Command::Route { .. } | Command::Routes => return Ok(()),
    };

    match result {
        Ok(response) => {
            tracing::info!("✅ Backend answered with HTTP {}", response.status);
            println!("{}", serde_json::to_string_pretty(&response.payload)?);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

fn fail(e: KnotError) -> ! {
    tracing::error!(
        "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(exit_code(&e));
}

fn exit_code(e: &KnotError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
