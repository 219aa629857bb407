use chrono::Utc;
use clap::Parser;
use codejinx_site::app::{ContactForm, Difficulty};
use codejinx_site::config::cli::{Command, ContactArgs, PageArgs, SimplifyArgs};
use codejinx_site::core::render::render_page;
use codejinx_site::utils::error::ErrorSeverity;
use codejinx_site::utils::{logger, validation::Validate};
use codejinx_site::{CliConfig, FacetChoice, FacetSelection, SiteConfig, SiteContext, SiteError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match SiteConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    if let Some(path) = &cli.config {
        tracing::debug!("Loaded configuration from {}", path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match config.build_context().await {
        Ok(site) => run(&site, &cli).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 依嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(site: &SiteContext, cli: &CliConfig) -> codejinx_site::Result<()> {
    tracing::info!("Using content source {}", site.crud().source());
    match &cli.command {
        Command::Page(args) => open_page(site, args, cli.json).await,
        Command::Simplify(args) => simplify(site, args, cli.json).await,
        Command::Contact(args) => contact(site, args, cli.json).await,
    }
}

async fn open_page(site: &SiteContext, args: &PageArgs, json: bool) -> codejinx_site::Result<()> {
    let selection = FacetSelection {
        discipline: FacetChoice::from(args.discipline.clone()),
        service_type: FacetChoice::from(args.service_type.clone()),
        skill_category: FacetChoice::from(args.skill.clone()),
    };

    let (route, page) = site.open(&args.path, selection).await;
    tracing::info!("Opened {}", route);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", render_page(&page, site.router()));
    }

    if page.is_not_found() {
        if let Some((collection, id)) = route.record() {
            return Err(SiteError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
    }
    if let Some((message, _)) = page.failure() {
        tracing::warn!("Page rendered without data: {}", message);
    }
    Ok(())
}

async fn simplify(site: &SiteContext, args: &SimplifyArgs, json: bool) -> codejinx_site::Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    tracing::info!("✨ Simplifying at {} difficulty...", difficulty);

    let output = site.simplifier().simplify(&args.text, difficulty).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    println!("Summary\n  {}\n", output.summary);
    println!("Key Points");
    for point in &output.key_points {
        println!("  - {}", point);
    }
    println!("\nDetailed Explanation\n  {}", output.explanation);
    Ok(())
}

async fn contact(site: &SiteContext, args: &ContactArgs, json: bool) -> codejinx_site::Result<()> {
    let mut form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        subject: args.subject.clone(),
        message: args.message.clone(),
    };

    let submission = site.contact_desk().submit(&mut form).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
    } else if submission.is_acknowledged_at(Utc::now()) {
        println!("✅ Message sent! We'll get back to you soon.");
    }
    Ok(())
}
