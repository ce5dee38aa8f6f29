use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use motour::config::Config;
use motour::logging::init_tracing;
use motour::models::Destination;
use motour::services::Services;
use motour::session::{MemoryTokenStore, Session, SessionToken};
use motour::ui::auth::AuthScreen;
use motour::ui::detail::{DetailIntent, DetailScreen};
use motour::ui::home::HomeScreen;
use motour::ui::profile::{EditField, ProfileIntent, ProfileScreen};
use motour::ui::saved::SavedScreen;
use motour::ui::Alert;

/// Token used by `--ephemeral` runs instead of the session file.
const TOKEN_ENV: &str = "MOTOUR_TOKEN";

#[derive(Parser)]
#[command(name = "motour")]
#[command(about = "Motour travel guide client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep the session in memory; seed it from MOTOUR_TOKEN if set
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health,

    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account and store the session token
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Popular and new destinations, as on the home screen
    Home,

    /// Browse destinations
    #[command(subcommand)]
    Destinations(DestinationCommand),

    /// Read and submit ratings
    #[command(subcommand)]
    Ratings(RatingCommand),

    /// Manage saved destinations
    #[command(subcommand)]
    Saved(SavedCommand),

    /// Show and edit the profile
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Subcommand)]
enum DestinationCommand {
    /// Every destination
    List,
    /// Highest rated destinations
    Popular {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Most recently added destinations
    New {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Destinations in a category
    Category { name: String },
    /// One destination with its ratings
    Show { id: String },
}

#[derive(Subcommand)]
enum RatingCommand {
    /// Ratings of a destination
    List { destination_id: String },
    /// Rate a destination from 1 to 5 stars
    Submit {
        destination_id: String,
        #[arg(short, long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
}

#[derive(Subcommand)]
enum SavedCommand {
    /// Saved destinations
    List,
    /// Whether a destination is saved
    Check { destination_id: String },
    /// Save or unsave a destination
    Toggle { destination_id: String },
    /// How many users saved a destination
    Count { destination_id: String },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the profile card
    Show,
    /// Change the email address
    SetEmail { email: String },
    /// Change the phone number
    SetPhone { phone: String },
    /// Upload a JPEG as the profile picture
    UploadImage { file: PathBuf },
    /// Point the profile picture at an already hosted image
    SetImageUrl { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let services = if cli.ephemeral {
        Services::with_session(&config, Arc::new(ephemeral_session()?))?
    } else {
        Services::from_config(&config)?
    };

    match cli.command {
        Commands::Health => {
            services.client.health().await?;
            println!("ok ({})", services.client.base_url());
        }
        Commands::Login { email, password } => {
            let mut screen = AuthScreen::new(services.auth.clone());
            let state = screen.login(&email, &password).await;
            if let Some(error) = state.error() {
                bail!("{error}");
            }
            println!("Logged in as {email}");
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            let mut screen = AuthScreen::new(services.auth.clone());
            let state = screen.register(&name, &email, &password).await;
            if let Some(error) = state.error() {
                bail!("{error}");
            }
            println!("Registered {email}");
        }
        Commands::Logout => {
            AuthScreen::new(services.auth.clone()).logout()?;
            println!("Logged out");
        }
        Commands::Home => home(&services, &config).await?,
        Commands::Destinations(command) => destinations(&services, &config, command).await?,
        Commands::Ratings(command) => ratings(&services, command).await?,
        Commands::Saved(command) => saved(&services, command).await?,
        Commands::Profile(command) => profile(&services, command).await?,
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    config.api.apply_env_override();
    config.validate()?;
    Ok(config)
}

fn ephemeral_session() -> Result<Session> {
    let store = match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => {
            MemoryTokenStore::with_token(SessionToken::new(token.trim()))
        }
        _ => MemoryTokenStore::new(),
    };
    Ok(Session::open(store)?)
}

async fn home(services: &Services, config: &Config) -> Result<()> {
    let mut screen = HomeScreen::new(services.destinations.clone(), config.feed.clone());
    let state = screen.refresh().await;
    if let Some(alert) = &state.alert {
        fail(alert)?;
    }
    println!("Popular");
    print_destinations(&state.popular);
    println!();
    println!("New");
    print_destinations(&state.newest);
    Ok(())
}

async fn destinations(
    services: &Services,
    config: &Config,
    command: DestinationCommand,
) -> Result<()> {
    let service = &services.destinations;
    let list = match command {
        DestinationCommand::List => service.list_all().await?,
        DestinationCommand::Popular { limit } => {
            service
                .list_popular(limit.unwrap_or(config.feed.popular_limit))
                .await?
        }
        DestinationCommand::New { limit } => {
            service
                .list_new(limit.unwrap_or(config.feed.new_limit))
                .await?
        }
        DestinationCommand::Category { name } => {
            let mut screen = HomeScreen::new(service.clone(), config.feed.clone());
            let state = screen.select_category(Some(name)).await;
            if let Some(alert) = &state.alert {
                fail(alert)?;
            }
            state.category_results.clone()
        }
        DestinationCommand::Show { id } => return show_destination(services, &id).await,
    };
    print_destinations(&list);
    Ok(())
}

async fn show_destination(services: &Services, id: &str) -> Result<()> {
    let mut screen = detail_screen(services);
    let state = screen.open(id).await;
    if let Some(alert) = &state.alert {
        fail(alert)?;
    }
    let Some(destination) = &state.destination else {
        bail!("Destination not found");
    };

    println!("{} [{}]", destination.name, destination.category);
    if let Some(address) = &destination.address {
        println!("{address}");
    }
    if let Some(average) = state.average_rating() {
        println!("Rating: {average:.1}");
    }
    if state.saved_known {
        println!("Saved: {}", if state.is_saved { "yes" } else { "no" });
    }
    println!("Map: {}", destination.maps_url());
    if let Some(description) = &destination.description {
        println!();
        println!("{description}");
    }
    if !state.ratings.is_empty() {
        println!();
        for entry in &state.ratings {
            let author = entry
                .rating
                .user_id
                .name
                .as_deref()
                .unwrap_or(&entry.rating.user_id.email);
            println!("{} {}  {}", stars(entry.rating.rating), author, entry.rating.comment);
        }
    }
    Ok(())
}

async fn ratings(services: &Services, command: RatingCommand) -> Result<()> {
    match command {
        RatingCommand::List { destination_id } => {
            for rating in services.ratings.list_for_destination(&destination_id).await? {
                println!("{} {}", stars(rating.rating), rating.comment);
            }
        }
        RatingCommand::Submit {
            destination_id,
            rating,
            comment,
        } => {
            let mut screen = detail_screen(services);
            if let Some(alert) = &screen.open(&destination_id).await.alert {
                fail(alert)?;
            }
            screen.dispatch(DetailIntent::OpenRatingForm);
            screen.dispatch(DetailIntent::SetStars { stars: rating });
            screen.dispatch(DetailIntent::SetComment { comment });
            let state = screen.submit_rating().await;
            report(state.alert.as_ref())?;
            if let Some(average) = state.average_rating() {
                println!("Rating: {average:.1}");
            }
        }
    }
    Ok(())
}

async fn saved(services: &Services, command: SavedCommand) -> Result<()> {
    match command {
        SavedCommand::List => {
            let mut screen = SavedScreen::new(services.saved.clone());
            let state = screen.load().await;
            if let Some(alert) = &state.alert {
                fail(alert)?;
            }
            if state.is_empty() {
                println!("No saved destinations yet");
            }
            print_destinations(&state.items);
        }
        SavedCommand::Check { destination_id } => {
            let saved = services.saved.is_saved(&destination_id).await;
            match saved.reason() {
                Some(reason) => println!("unknown ({})", reason.display_message()),
                None => println!("{}", saved.value()),
            }
        }
        SavedCommand::Toggle { destination_id } => {
            let outcome = services.saved.toggle(&destination_id).await?;
            println!(
                "{} ({})",
                outcome.message,
                if outcome.is_saved { "saved" } else { "not saved" }
            );
        }
        SavedCommand::Count { destination_id } => {
            let count = services.saved.count_for(&destination_id).await;
            println!("{}", count.value());
        }
    }
    Ok(())
}

async fn profile(services: &Services, command: ProfileCommand) -> Result<()> {
    let mut screen = ProfileScreen::new(
        services.profile.clone(),
        services.saved.clone(),
        services.auth.clone(),
    );
    let state = screen.load().await;
    if state.needs_login {
        bail!("Not logged in. Run `motour login` first.");
    }
    if let Some(alert) = &state.alert {
        fail(alert)?;
    }

    let edit = match command {
        ProfileCommand::Show => None,
        ProfileCommand::SetEmail { email } => Some((EditField::Email, email)),
        ProfileCommand::SetPhone { phone } => Some((EditField::Phone, phone)),
        ProfileCommand::UploadImage { file } => {
            let jpeg = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let state = screen.upload_image(jpeg).await;
            return report(state.alert.as_ref());
        }
        ProfileCommand::SetImageUrl { url } => {
            services.profile.set_image_url(&url).await?;
            println!("Profile picture updated successfully!");
            return Ok(());
        }
    };

    if let Some((field, value)) = edit {
        screen.dispatch(ProfileIntent::StartEdit { field });
        screen.dispatch(ProfileIntent::SetDraft { text: value });
        let state = screen.submit_edit().await;
        return report(state.alert.as_ref());
    }

    let Some(view) = &screen.state().view else {
        bail!("Profile unavailable");
    };
    println!("{}", view.name);
    println!("Email:    {}", view.email);
    println!("Phone:    {}", view.phone_display());
    println!("Location: {}", view.location);
    println!("Member since {}", view.member_since);
    println!(
        "Trips: {}  Distance: {}  Saved: {}",
        view.trips_completed, view.total_distance, view.saved_count
    );
    Ok(())
}

fn detail_screen(services: &Services) -> DetailScreen {
    DetailScreen::new(
        services.destinations.clone(),
        services.ratings.clone(),
        services.saved.clone(),
    )
}

fn fail(alert: &Alert) -> Result<()> {
    bail!("{}", alert.message)
}

/// Print a success alert, or turn an error alert into a failure.
fn report(alert: Option<&Alert>) -> Result<()> {
    match alert {
        Some(alert) if alert.title == "Error" => fail(alert),
        Some(alert) => {
            println!("{}", alert.message);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_destinations(destinations: &[Destination]) {
    for d in destinations {
        println!("{:<26} {:<40} {:.1}  {}", d.id, d.name, d.average_rating, d.category);
    }
}

fn stars(count: u8) -> String {
    let filled = usize::from(count.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
