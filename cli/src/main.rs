use std::io::{self, Write as _};
use std::sync::Arc;

use anyhow::Context as _;
use chrono::NaiveDate;
use travelgen_client::prelude::*;
use travelgen_client::request::DATE_FORMAT;

/// Interactive driver for one generation session: collect the form,
/// generate, then loop on feedback. One request is in flight at a time;
/// each action blocks until its call resolves.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    travelgen_client::init_observability();

    let config = resolve_config()?;
    let gateway = Arc::new(HttpGateway::new(config)?);
    let mut session = Session::new(gateway);
    tracing::debug!(session_id = %session.session_id(), "session started");

    println!("Travel Content Generator");
    loop {
        let model = pick(&ModelChoice::ALL, "Select model")?;
        let content_type = pick(&ContentType::ALL, "Select content type")?;
        let form = collect_form(content_type)?;

        match session.generate(&form, model, content_type).await {
            Ok(output) => {
                print_output("Generated content", &output);
                feedback_loop(&mut session, model).await?;
            }
            Err(e) => eprintln!("Error: {e}"),
        }

        if !confirm("Generate more content? [y/N] ")? {
            return Ok(());
        }
    }
}

/// Env key first, interactive prompt as fallback.
fn resolve_config() -> anyhow::Result<GatewayConfig> {
    if let Ok(config) = GatewayConfig::from_env() {
        return Ok(config);
    }
    let api_key = read_line("Enter your API key: ")?;
    if api_key.trim().is_empty() {
        anyhow::bail!("Please enter your API key.");
    }
    Ok(GatewayConfig::new(api_key))
}

async fn feedback_loop(session: &mut Session, model: ModelChoice) -> anyhow::Result<()> {
    loop {
        let feedback = read_line("Feedback to improve the content (blank to finish): ")?;
        if feedback.trim().is_empty() {
            return Ok(());
        }
        match session.regenerate_with_feedback(&feedback, model).await {
            Ok(output) => print_output("Updated content", &output),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

fn collect_form(content_type: ContentType) -> anyhow::Result<TripForm> {
    let mut form = TripForm::default();

    println!("-- Required information --");
    if content_type.requires(Field::Prompt) {
        form.prompt = read_line("Prompt: ")?;
    }
    if content_type.requires(Field::DestinationName) {
        form.destination_name = read_line("Destination name: ")?;
    } else {
        form.destination_name = read_line("Destination name (optional): ")?;
    }
    let dates_required = content_type.requires(Field::TripStartDate);
    let date_suffix = if dates_required { "" } else { " (optional)" };
    form.trip_start_date = read_date(
        &format!("Trip start date, YYYY-MM-DD{date_suffix}: "),
        dates_required,
    )?;
    form.trip_end_date = read_date(
        &format!("Trip end date, YYYY-MM-DD{date_suffix}: "),
        dates_required,
    )?;

    println!("-- Optional client information (blank or 0 to skip) --");
    form.client_age = read_number("Client age: ")?;
    form.number_of_trips = read_number("Number of previous trips: ")?;
    form.days_to_birthday = read_number("Days to birthday: ")?;
    form.places_visited = read_line("Places visited (comma-separated): ")?;
    form.client_since = read_number("Client since (years): ")?;

    Ok(form)
}

fn print_output(heading: &str, output: &ContentOutput) {
    println!("\n{heading}:\n{}\n", output.text);
    match serde_json::to_string_pretty(output.response.raw()) {
        Ok(raw) => println!("Raw response:\n{raw}\n"),
        Err(_) => println!("Raw response unavailable\n"),
    }
}

fn pick<T: Copy + std::fmt::Display>(choices: &[T], heading: &str) -> anyhow::Result<T> {
    println!("{heading}:");
    for (i, choice) in choices.iter().enumerate() {
        println!("  {}. {choice}", i + 1);
    }
    loop {
        let line = read_line(&format!("Choice [1-{}]: ", choices.len()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(choices[0]);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Ok(choices[n - 1]),
            _ => eprintln!("Please pick a number between 1 and {}.", choices.len()),
        }
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let line = read_line(prompt)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn read_date(prompt: &str, required: bool) -> anyhow::Result<Option<NaiveDate>> {
    loop {
        let line = read_line(prompt)?;
        match date_entry(&line, required) {
            Ok(date) => return Ok(date),
            Err(reason) => eprintln!("{reason}"),
        }
    }
}

/// Interprets one date entry. A blank entry skips an optional date but is
/// rejected for a required one, so the caller re-prompts.
fn date_entry(input: &str, required: bool) -> Result<Option<NaiveDate>, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        if required {
            return Err("This date is required.");
        }
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| "Dates must be YYYY-MM-DD.")
}

fn read_number(prompt: &str) -> anyhow::Result<u32> {
    loop {
        let line = read_line(prompt)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        match trimmed.parse::<u32>() {
            Ok(n) => return Ok(n),
            Err(_) => eprintln!("Please enter a non-negative whole number."),
        }
    }
}
