use clap::Parser;
use user_directory::api::{UserClient, UserService};
use user_directory::config::AppConfig;
use user_directory::demo::{demonstrate_sorting, render_country_flags, render_sorting};
use user_directory::form::{SubmitOutcome, UserModal};
use user_directory::helpers::{format_date_of_birth, format_date_str};
use user_directory::reference::{
    extract_country_code, format_phone_with_flag, get_country_by_iso,
    get_country_name_from_phone, get_flag_from_phone, EMPTY_PHONE,
};
use user_directory::users::{UpdateUserRequest, User, UserListResponse, UserSearchParams};
use user_directory::{AppError, Result};

mod args;
use args::{Cli, Commands, DemoCommands, UserCommands};

#[tokio::main]
async fn main() {
    // Initialize logging - default to info level for our crate
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("user_directory=info"),
    )
    .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    match cli.command {
        Commands::Phone { numbers } => {
            for number in &numbers {
                print_phone(number);
            }
            Ok(())
        }
        Commands::Country { iso_codes } => {
            for iso_code in &iso_codes {
                print_country(iso_code);
            }
            Ok(())
        }
        Commands::Demo {
            demo: DemoCommands::Flags,
        } => {
            print!("{}", render_country_flags());
            Ok(())
        }
        Commands::Demo {
            demo: DemoCommands::Sorting,
        } => {
            let client = UserClient::new(&config)?;
            log::info!("Running sorting demo against {}", client.base_url());
            let reports = demonstrate_sorting(&client).await;
            print!("{}", render_sorting(&reports));
            Ok(())
        }
        Commands::Users { action } => {
            let client = UserClient::new(&config)?;
            run_users(client, action, &config).await
        }
    }
}

async fn run_users(client: UserClient, action: UserCommands, config: &AppConfig) -> Result<()> {
    match action {
        UserCommands::List {
            page,
            per_page,
            search,
            sort_by,
            sort_dir,
        } => {
            let params = UserSearchParams {
                page,
                per_page: per_page.unwrap_or(config.default_per_page),
                search,
                sort_by,
                sort_dir,
            };
            let list = client.list_users(&params).await?;
            print_user_list(&list);
            Ok(())
        }
        UserCommands::Get { id } => {
            let user = client.get_user(id).await?;
            print_user(&user);
            Ok(())
        }
        UserCommands::Create {
            name,
            email,
            date_of_birth,
            phone,
            address,
        } => {
            let mut modal = UserModal::new(client);
            modal.open(None);
            let form = modal.form_mut();
            form.set_name(name);
            form.set_email(email);
            form.set_date_of_birth(Some(date_of_birth));
            form.set_phone(phone.unwrap_or_default());
            form.set_address(address.unwrap_or_default());
            report_outcome(modal.submit().await)
        }
        UserCommands::Update {
            id,
            name,
            phone,
            address,
        } => {
            let changes = UpdateUserRequest {
                name,
                phone,
                address,
            };
            if changes.is_empty() {
                return Err(AppError::InvalidInput(
                    "Nothing to update, pass --name, --phone or --address".to_string(),
                ));
            }

            let user = client.get_user(id).await?;
            let mut modal = UserModal::new(client);
            modal.open(Some(user));
            modal.form_mut().apply_changes(changes);
            report_outcome(modal.submit().await)
        }
        UserCommands::Delete { id } => {
            client.delete_user(id).await?;
            println!("User {} deleted", id);
            Ok(())
        }
    }
}

fn report_outcome(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Saved { message, user } => {
            println!("{}", message);
            print_user(&user);
            Ok(())
        }
        SubmitOutcome::Invalid(message) => Err(AppError::InvalidInput(message)),
        SubmitOutcome::Rejected(details) => {
            for (field, message) in &details {
                eprintln!("  {}: {}", field, message);
            }
            Err(AppError::SaveFailed("Validation failed".to_string()))
        }
        SubmitOutcome::Failed(message) => Err(AppError::SaveFailed(message)),
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_phone(number: &str) {
    let code = extract_country_code(number)
        .map(|c| format!("+{}", c))
        .unwrap_or_else(|| "?".to_string());
    println!(
        "{} {} ({}): {}",
        get_flag_from_phone(number),
        get_country_name_from_phone(number),
        code,
        format_phone_with_flag(number)
    );
}

fn print_country(iso_code: &str) {
    match get_country_by_iso(iso_code) {
        Some(country) => println!(
            "{} {} ({}): +{}",
            country.flag, country.name, country.iso_code, country.dialing_prefix
        ),
        None => println!("{}: unknown country code", iso_code),
    }
}

fn print_user_list(list: &UserListResponse) {
    if list.users.is_empty() {
        println!("No users found");
    }
    for user in &list.users {
        let age = user
            .current_age()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<25} {:<30} {:>3}  {}",
            user.id,
            user.name,
            user.email,
            age,
            format_phone_with_flag(user.phone.as_deref())
        );
    }
    println!(
        "Page {} of {} ({} users)",
        list.page,
        list.total_pages.max(1),
        list.total
    );
}

fn print_user(user: &User) {
    println!("#{} {} <{}>", user.id, user.name, user.email);
    println!("  Born:    {}", format_date_of_birth(user.date_of_birth.as_deref()));
    let phone = format_phone_with_flag(user.phone.as_deref());
    if phone != EMPTY_PHONE {
        println!("  Phone:   {}", phone);
    }
    if let Some(address) = user.address.as_deref().filter(|a| !a.is_empty()) {
        println!("  Address: {}", address);
    }
    println!("  Joined:  {}", format_date_str(user.created_at.as_deref()));
}
