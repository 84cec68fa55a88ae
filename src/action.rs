use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use envconfig::Envconfig;
use log::info;
use mock_checkout::{
    checkout::{CheckoutForm, FormStatus},
    config::CheckoutConfig,
    form::formatter,
    models::{session::SessionContext, submission::PaymentOutcome},
    services::{navigation::LogNavigator, notification::LogNotifier, reporting::WebhookReporter},
};
use std::sync::Arc;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutcomeArg {
    Success,
    Failed,
}

impl From<OutcomeArg> for PaymentOutcome {
    fn from(val: OutcomeArg) -> Self {
        match val {
            OutcomeArg::Success => PaymentOutcome::Success,
            OutcomeArg::Failed => PaymentOutcome::Failed,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FieldKind {
    Card,
    Expiry,
    Cvv,
    Name,
}

#[derive(Args, Debug, Clone)]
pub struct PayArgs {
    /// Payment link, e.g. "https://pay.example/?orderId=42&amount=5000"
    #[arg(short, long)]
    link: String,
    #[arg(long, default_value = "")]
    card: String,
    #[arg(long, default_value = "")]
    expiry: String,
    #[arg(long, default_value = "")]
    cvv: String,
    #[arg(long, default_value = "")]
    name: String,
    /// Accept the payment terms
    #[arg(long)]
    agree: bool,
    #[arg(long, value_enum, default_value_t = OutcomeArg::Success)]
    outcome: OutcomeArg,
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    #[arg(value_enum)]
    field: FieldKind,
    raw: String,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Fill the form and report the chosen outcome
    Pay(PayArgs),
    /// Print how a raw value would be stored
    Format(FormatArgs),
}

/// Sandbox checkout form driver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        match &self.action {
            Action::Pay(args) => pay(args).await,
            Action::Format(FormatArgs { field, raw }) => {
                let formatted = match field {
                    FieldKind::Card => formatter::format_card_number(raw),
                    FieldKind::Expiry => formatter::format_expiry(raw),
                    FieldKind::Cvv => formatter::format_cvv(raw),
                    FieldKind::Name => formatter::format_holder_name(raw),
                };
                println!("{formatted}");
                Ok(())
            }
        }
    }
}

fn print_view(form: &CheckoutForm) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&form.view())?);
    Ok(())
}

async fn pay(args: &PayArgs) -> anyhow::Result<()> {
    let config = CheckoutConfig::init_from_env().context("failed to load checkout config")?;
    let session = SessionContext::parse_link(&args.link)
        .with_context(|| format!("invalid payment link {}", args.link))?;

    let form = CheckoutForm::new(
        config.clone(),
        session,
        Box::new(WebhookReporter::new(config.reporting_endpoint.clone())),
        Arc::new(LogNavigator),
        Box::new(LogNotifier),
    );

    if form.status() == FormStatus::InvalidLink {
        print_view(&form)?;
        bail!("payment link has no orderId");
    }

    form.input_card_number(&args.card);
    form.input_expiry(&args.expiry);
    form.input_cvv(&args.cvv);
    form.input_holder_name(&args.name);
    form.set_agreed(args.agree);
    print_view(&form)?;

    let status = form
        .submit(args.outcome.into())
        .await
        .map_err(|rejected| anyhow::anyhow!("submission rejected: {rejected}"))?;
    info!("form finished as {status}");
    print_view(&form)?;

    if let Some(navigation) = form.take_pending_navigation() {
        navigation.finished().await;
    }

    Ok(())
}
