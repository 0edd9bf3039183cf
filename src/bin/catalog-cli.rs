use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use car_catalog::query::{PriceRange, QueryInput, SortOrder};

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Query a running car-catalog service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and paginate the catalog
    Query {
        /// Brand to include (repeatable)
        #[arg(long = "brand")]
        brands: Vec<String>,

        /// Fuel type to include (repeatable)
        #[arg(long = "fuel")]
        fuel_types: Vec<String>,

        /// Seating capacity to include (repeatable)
        #[arg(long = "seats")]
        seats: Vec<i64>,

        /// Inclusive price range MIN:MAX (repeatable)
        #[arg(long = "price", value_parser = parse_price_range)]
        prices: Vec<PriceRange>,

        #[arg(long, default_value_t = 1)]
        page: i64,

        #[arg(long, default_value_t = 10)]
        limit: i64,

        #[arg(long, value_enum, default_value_t = SortArg::Asc)]
        sort: SortArg,
    },
    /// Free-text search over make, model and features
    Search {
        term: String,
    },
    /// Check service status
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
    None,
}

impl From<SortArg> for SortOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
            SortArg::None => SortOrder::Unsorted,
        }
    }
}

fn parse_price_range(s: &str) -> Result<PriceRange, String> {
    let (min, max) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MIN:MAX, got '{s}'"))?;
    let min: f64 = min.trim().parse().map_err(|e| format!("bad minimum: {e}"))?;
    let max: f64 = max.trim().parse().map_err(|e| format!("bad maximum: {e}"))?;
    Ok(PriceRange::new(min, max))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Query {
            brands,
            fuel_types,
            seats,
            prices,
            page,
            limit,
            sort,
        } => {
            let input = QueryInput {
                brands: Some(brands),
                prices: Some(prices),
                fuel_type: Some(fuel_types),
                seating_capacity: Some(seats.into_iter().map(Into::into).collect()),
                page: Some(page.into()),
                limit: Some(limit.into()),
                sort: Some(SortOrder::from(sort).to_wire()),
            };
            let res = client.post(format!("{}/", cli.url)).json(&input).send().await?;
            print_response(res).await?;
        }
        Commands::Search { term } => {
            let res = client
                .get(format!("{}/search", cli.url))
                .query(&[("search", term)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Status => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: catalog service returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
