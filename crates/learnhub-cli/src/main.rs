use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use learnhub_cli::admin::{AdminInput, create_admin};
use learnhub_cli::seeder::{self, SeedConfig};
use learnhub_config::{DatabaseConfig, PasswordConfig};
use learnhub_db::{init_db_pool, run_migrations};
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "learnhub-cli")]
#[command(about = "LearnHub CLI - Administrative tools for LearnHub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Login
        #[arg(short = 'u', long)]
        login: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        #[arg(short = 'f', long)]
        first_name: Option<String>,

        #[arg(short = 'l', long)]
        last_name: Option<String>,
    },
    /// Seed the database with fake categories, teachers and courses
    Seed {
        #[arg(long, default_value = "5")]
        categories: usize,

        #[arg(long, default_value = "5")]
        teachers: usize,

        #[arg(long, default_value = "20")]
        courses: usize,
    },
    /// Apply pending database migrations
    Migrate,
}

fn prompt(label: &str) -> String {
    match Input::new().with_prompt(label).interact_text() {
        Ok(value) => value,
        Err(e) => fail(&format!("Failed to read {}", label.to_lowercase()), e),
    }
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, err);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let Some(db_config) = DatabaseConfig::from_env() else {
        fail("Missing configuration", "DATABASE_URL must be set");
    };

    let pool = match init_db_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => fail("Failed to connect to database", e),
    };

    match cli.command {
        Commands::CreateAdmin {
            login,
            email,
            password,
            first_name,
            last_name,
        } => handle_create_admin(&pool, login, email, password, first_name, last_name).await,
        Commands::Seed {
            categories,
            teachers,
            courses,
        } => {
            handle_seed(
                &pool,
                SeedConfig {
                    categories,
                    teachers,
                    courses,
                },
            )
            .await
        }
        Commands::Migrate => handle_migrate(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    login: Option<String>,
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
) {
    let login = login.unwrap_or_else(|| prompt("Login"));
    let email = email.unwrap_or_else(|| prompt("Email address"));

    let password = password.unwrap_or_else(|| {
        match Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
        {
            Ok(value) => value,
            Err(e) => fail("Failed to read password", e),
        }
    });

    let input = AdminInput {
        login,
        email,
        password,
        first_name,
        last_name,
    };

    match create_admin(pool, input, PasswordConfig::from_env().bcrypt_cost).await {
        Ok(admin) => {
            println!("\n✅ Admin created successfully!");
            println!("   Login: {}", admin.login);
            println!("   Email: {}", admin.email);
        }
        Err(e) => fail("Error creating admin", e),
    }
}

async fn handle_seed(pool: &PgPool, config: SeedConfig) {
    if let Err(e) = seeder::seed_all(pool, config, PasswordConfig::from_env().bcrypt_cost).await {
        fail("Error seeding database", e);
    }
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => fail("Error applying migrations", e),
    }
}
