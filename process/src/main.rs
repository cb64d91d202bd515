use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Spreadsheet id holding the organization list
    sheet_id: String,

    /// Tab and cell range to pull
    #[arg(long, default_value = "Organizations!A2:C")]
    range: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let api_key = std::env::var("SHEETS_API_KEY").expect("SHEETS_API_KEY not set");

    process::load_organizations(&args.sheet_id, &args.range, &api_key).await;
}
