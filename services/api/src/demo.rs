use crate::infra::FixedFactorEstimator;
use clap::Args;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tasador::catalog::{
    catalog_router, CatalogClient, CatalogSession, CatalogStore, Category, CategoryName,
};
use tasador::config::AppConfig;
use tasador::error::AppError;
use tasador::intake::{PropertyForm, PropertySubmissionService, SubmissionError};

#[derive(Args, Debug)]
pub(crate) struct CatalogShowArgs {
    /// Limit output to one category (label or endpoint spelling)
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Bootstrap from an already-running catalog instead of serving one in-process
    #[arg(long)]
    pub(crate) catalog_url: Option<String>,
    /// Override the operation type selection
    #[arg(long)]
    pub(crate) operation_type: Option<String>,
    /// Override the currency selection (used for the operation and expenses)
    #[arg(long)]
    pub(crate) currency: Option<String>,
    /// Override the requested operation amount
    #[arg(long)]
    pub(crate) operation_amount: Option<f64>,
    /// Override the city selection
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Skip the property submission portion of the demo
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

pub(crate) fn run_catalog_show(args: CatalogShowArgs) -> Result<(), AppError> {
    let store = CatalogStore::standard();

    match args.category {
        Some(name) => render_category(store.get(&name)?),
        None => {
            for name in CategoryName::ordered() {
                render_category(store.category(name));
            }
        }
    }

    Ok(())
}

fn render_category(category: &Category) {
    println!("{} ({} values)", category.name(), category.values().len());
    for value in category.values() {
        println!("  - {value}");
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    println!("Parameter catalog demo");

    match args.catalog_url.clone() {
        Some(url) => {
            println!("Catalog source: {url} (external)");
            config.client.catalog_url = url;
        }
        None => {
            let url = serve_ephemeral_catalog().await?;
            println!("Catalog source: {url} (served in-process)");
            config.client.catalog_url = url;
        }
    }

    let client = CatalogClient::from_config(&config.client)?;
    let session = client.bootstrap().await;

    println!("\nSession categories");
    for category in CategoryName::ordered() {
        let values = session.values(category);
        if values.is_empty() {
            println!("- {category}: no values (degraded)");
            continue;
        }

        let preview = values
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if values.len() > 3 {
            println!("- {category}: {} values ({preview}, ...)", values.len());
        } else {
            println!("- {category}: {} values ({preview})", values.len());
        }
    }

    let degraded = session.degraded();
    if !degraded.is_empty() {
        let labels = degraded
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Degraded categories: {labels} (submissions referencing them will be rejected)");
    }

    if args.skip_submission {
        return Ok(());
    }

    println!("\nProperty submission demo");
    let estimator = Arc::new(FixedFactorEstimator::new(config.valuation.factor));
    let service = PropertySubmissionService::new(session, estimator);

    let form = demo_property_form(&args, service.session());
    println!(
        "- Submitting '{}': {} in {} for {:.2} {}",
        form.name, form.operation_type, form.city, form.operation_amount, form.operation_currency
    );

    match service.submit(&form).await {
        Ok(outcome) => {
            println!(
                "- Estimated price: {:.2} {}",
                outcome.estimate.estimated_price, outcome.estimate.currency
            );
            match serde_json::to_string_pretty(&outcome.record) {
                Ok(json) => println!("  Valued record payload:\n{}", json),
                Err(err) => println!("  Valued record payload unavailable: {}", err),
            }
        }
        Err(SubmissionError::Validation(error)) => {
            println!("- Submission rejected:");
            for violation in error.violations() {
                println!("    - {violation}");
            }
            println!("  Correct the flagged fields and submit again.");
        }
        Err(SubmissionError::Valuation(error)) => {
            println!("- Valuation unavailable: {error}");
            println!("  The entered values are intact; submit again once the collaborator returns.");
        }
    }

    Ok(())
}

async fn serve_ephemeral_catalog() -> Result<String, AppError> {
    let store = Arc::new(CatalogStore::standard());
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, catalog_router(store)).await {
            eprintln!("demo catalog stopped: {err}");
        }
    });

    Ok(format!("http://{addr}"))
}

/// A plausible listing built from the first published value of each
/// category, with any CLI overrides applied verbatim.
fn demo_property_form(args: &DemoArgs, session: &CatalogSession) -> PropertyForm {
    let first = |category: CategoryName| {
        session
            .values(category)
            .first()
            .cloned()
            .unwrap_or_default()
    };

    let currency = args
        .currency
        .clone()
        .unwrap_or_else(|| first(CategoryName::Currency));

    PropertyForm {
        id: "prop-001".to_string(),
        name: "Two bedroom with balcony".to_string(),
        operation_type: args
            .operation_type
            .clone()
            .unwrap_or_else(|| first(CategoryName::OperationType)),
        operation_currency: currency.clone(),
        operation_amount: args.operation_amount.unwrap_or(125_000.0),
        expenses_currency: currency,
        expenses_amount: 180.0,
        total_area: 72.0,
        covered_area: 65.0,
        rooms: 3,
        bedrooms: 2,
        bathrooms: 1,
        garages: 1,
        age: 15,
        floors: 9,
        apartments_per_floor: 4,
        listing_age: 12,
        publisher_id: "pub-204".to_string(),
        publisher_name: "Inmobiliaria Centro".to_string(),
        address: "Av. Santa Fe 3200".to_string(),
        city: args
            .city
            .clone()
            .unwrap_or_else(|| first(CategoryName::City)),
        state: first(CategoryName::State),
        country: first(CategoryName::Country),
        latitude: "-34.5957".to_string(),
        longitude: "-58.4127".to_string(),
        url: "https://example.com/listings/prop-001".to_string(),
    }
}
