//! Storefront Application CLI

#![expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "command line tool reports results on the terminal"
)]

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use storefront_app::{
    commerce::{CommerceArgs, CustomerAccessToken},
    context::AppContext,
    domain::{
        carts::models::CartId,
        line_items::{CartSession, ErrorMessages, LineItemsState, SubmissionResult},
    },
};

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront cart CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    commerce: CommerceArgs,

    /// Customer access token of the shopper to act as
    #[arg(long, env = "COMMERCE_CUSTOMER_ACCESS_TOKEN", hide_env_values = true)]
    customer_access_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(CartCommand),
    LineItem(LineItemArgs),
}

#[derive(Debug, Args)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    Show(ShowCartArgs),
}

#[derive(Debug, Args)]
struct ShowCartArgs {
    /// Cart id
    #[arg(long)]
    cart_id: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IntentArg {
    Increment,
    Decrement,
    Delete,
}

impl IntentArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Args)]
struct LineItemArgs {
    /// Action to apply
    #[arg(value_enum)]
    intent: IntentArg,

    /// Cart id
    #[arg(long)]
    cart_id: String,

    /// Line item id
    #[arg(long)]
    id: String,

    /// Current quantity of the line item
    #[arg(long)]
    quantity: i64,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let app = AppContext::from_commerce_config((&cli.commerce).into(), ErrorMessages::default())
        .map_err(|error| format!("failed to initialize app context: {error}"))?;

    let customer = cli.customer_access_token.and_then(CustomerAccessToken::new);

    match cli.command {
        Commands::Cart(CartCommand {
            command: CartSubcommand::Show(args),
        }) => show_cart(&app, args, customer).await,
        Commands::LineItem(args) => update_line_item(&app, args, customer).await,
    }
}

async fn show_cart(
    app: &AppContext,
    args: ShowCartArgs,
    customer: Option<CustomerAccessToken>,
) -> Result<(), String> {
    let cart = app
        .carts
        .get_cart(CartId::new(args.cart_id), customer)
        .await
        .map_err(|error| format!("failed to fetch cart: {error}"))?
        .ok_or_else(|| "cart not found".to_string())?;

    println!("cart_id: {}", cart.entity_id);
    println!("currency: {}", cart.currency_code);

    for item in cart.line_items() {
        println!(
            "{}\t{}\tqty={}\toptions={}",
            item.entity_id,
            item.name,
            item.quantity,
            item.selected_options.len()
        );
    }

    Ok(())
}

async fn update_line_item(
    app: &AppContext,
    args: LineItemArgs,
    customer: Option<CustomerAccessToken>,
) -> Result<(), String> {
    let session = CartSession::new(Some(CartId::new(args.cart_id)), customer);

    let fields = [
        ("intent", args.intent.as_str().to_string()),
        ("id", args.id),
        ("quantity", args.quantity.to_string()),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect();

    let outcome = app
        .line_items
        .update_line_item(&session, LineItemsState::default(), fields)
        .await;

    if outcome.cart_deleted {
        println!("cart deleted: last line item removed");
    }

    match outcome.state.last_result {
        Some(SubmissionResult::Success { .. }) => {
            println!("ok");

            Ok(())
        }
        Some(SubmissionResult::Error { form_errors, .. }) => Err(form_errors.join("\n")),
        None => Ok(()),
    }
}
