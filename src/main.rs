use clap::{Parser, Subcommand};
use omnitools::calc;
use omnitools::config::Config;
use omnitools::convert::{Conversion, Converter};
use omnitools::records::{ActivityLog, NoteBook, NoteDraft, NoteKind, PasswordVault};
use omnitools::store::FileStorage;
use omnitools::tools::{self, GstMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omnitools")]
#[command(about = "Pocket utility suite: converters, calculator, passwords and notes", long_about = None)]
struct Cli {
    /// Config file (default: ./omnitools.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units of the same category
    Convert {
        /// Value to convert (e.g., "12.5", "-40")
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Source unit (e.g., "Meters", "USD", "Celsius")
        from: String,

        /// Target unit
        to: String,

        /// Category (inferred from the units when omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories, or the units of one category
    Units {
        category: Option<String>,
    },

    /// Evaluate a calculator expression (e.g., "2×(3+4)", "sin(π/2)")
    Calc {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Generate random passwords
    Password {
        /// Length, 8 to 32 (default from config)
        #[arg(short, long)]
        length: Option<usize>,

        /// How many passwords to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Split a bill with tip
    Tip {
        #[arg(allow_negative_numbers = true)]
        bill: f64,

        /// Tip percent, 0 to 50
        #[arg(short, long, default_value_t = tools::finance::DEFAULT_TIP_PERCENT)]
        percent: f64,

        /// Number of people sharing the bill
        #[arg(short = 'n', long, default_value_t = 1)]
        people: u32,
    },

    /// Add or remove GST from an amount
    Gst {
        amount: String,

        /// Tax rate in percent
        #[arg(short, long, default_value = "18")]
        rate: String,

        #[arg(short, long, value_enum, default_value_t = GstMode::Add)]
        mode: GstMode,
    },

    /// Body mass index
    Bmi {
        /// Weight in kilograms
        weight: f64,

        /// Height in centimeters
        height: f64,
    },

    /// Age from a date of birth (YYYY-MM-DD)
    Age {
        birth: String,

        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },

    /// Notes and to-do list
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },

    /// Activity tracker
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Password vault
    Vault {
        #[command(subcommand)]
        action: VaultAction,
    },
}

#[derive(Subcommand)]
enum NotesAction {
    /// List notes (or to-dos with --todo)
    List {
        #[arg(long)]
        todo: bool,
    },
    /// Add a note (or a to-do with --todo)
    Add {
        title: String,
        #[arg(default_value = "")]
        content: String,
        #[arg(long)]
        todo: bool,
    },
    /// Replace the title and content of a note
    Edit {
        id: String,
        title: String,
        #[arg(default_value = "")]
        content: String,
    },
    /// Mark a to-do done or not done
    Toggle { id: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum ActivityAction {
    /// List entries with totals
    List,
    /// Log an activity (Walking, Running, Cycling, Gym, Yoga, Swimming)
    Add { kind: String, minutes: u32 },
    Delete { id: String },
}

#[derive(Subcommand)]
enum VaultAction {
    List {
        /// Show passwords instead of a mask
        #[arg(long)]
        reveal: bool,
    },
    /// Save a credential; a password is generated when omitted
    Add {
        title: String,
        password: Option<String>,
        #[arg(short, long)]
        username: Option<String>,
    },
    Delete { id: String },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&Config::empty().logging.filter);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config.logging.filter);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Convert {
            value,
            from,
            to,
            category,
        } => convert_value(config, &value, &from, &to, category.as_deref()),
        Commands::Units { category } => list_units(config, category.as_deref()),
        Commands::Calc { expression } => {
            let expression = expression.join(" ");
            let value = calc::evaluate(&expression)?;
            println!("{}", calc::format_result(value));
            Ok(())
        }
        Commands::Password { length, count } => {
            let length = length.unwrap_or(config.password.length);
            for _ in 0..count {
                println!("{}", tools::generate_password(length)?);
            }
            Ok(())
        }
        Commands::Tip {
            bill,
            percent,
            people,
        } => {
            let split = tools::split_tip(bill, percent, people)?;
            println!("Tip:        {:.2}", split.tip);
            println!("Total:      {:.2}", split.total);
            println!("Per person: {:.2}", split.per_person);
            Ok(())
        }
        Commands::Gst { amount, rate, mode } => {
            let result = tools::gst_from_text(&amount, &rate, mode);
            println!("GST: {:.2}", result.gst);
            println!("Net: {:.2}", result.net);
            Ok(())
        }
        Commands::Bmi { weight, height } => {
            let result = tools::bmi(weight, height)
                .ok_or("Weight and height must be positive numbers")?;
            println!("BMI: {:.1} ({})", result.value, result.band);
            Ok(())
        }
        Commands::Age { birth, on } => {
            let birth = tools::parse_date(&birth)?;
            let age = match on {
                Some(on) => tools::age_on(birth, tools::parse_date(&on)?)?,
                None => tools::age_today(birth)?,
            };
            println!("{} years, {} months, {} days", age.years, age.months, age.days);
            Ok(())
        }
        Commands::Notes { action } => notes_command(config, action),
        Commands::Activity { action } => activity_command(config, action),
        Commands::Vault { action } => vault_command(config, action),
    }
}

fn convert_value(
    config: &Config,
    value: &str,
    from: &str,
    to: &str,
    category: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = config.build_converter()?;

    let category = match category {
        Some(category) => category.to_string(),
        None => converter
            .find_category(from, to)
            .ok_or_else(|| format!("No category contains both '{}' and '{}'", from, to))?
            .to_string(),
    };

    match converter.convert(&category, from, to, value)? {
        Conversion::Unavailable => println!("{}", Conversion::Unavailable),
        result => println!("{} {}", result, to),
    }

    Ok(())
}

fn list_units(config: &Config, category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let converter: Converter = config.build_converter()?;

    match category {
        Some(category) => {
            for unit in converter.units(category)? {
                println!("{}", unit);
            }
        }
        None => {
            for category in converter.categories() {
                println!("{}: {}", category, converter.units(category)?.join(", "));
            }
        }
    }

    Ok(())
}

fn notes_command(config: &Config, action: NotesAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut book = NoteBook::open(FileStorage::open(&config.storage.path)?)?;

    match action {
        NotesAction::List { todo } => {
            let kind = if todo { NoteKind::Todo } else { NoteKind::Note };
            let notes = book.list(kind);
            if notes.is_empty() {
                println!("Nothing here yet");
            }
            for note in notes {
                let mark = match (kind, note.completed) {
                    (NoteKind::Todo, true) => "[x] ",
                    (NoteKind::Todo, false) => "[ ] ",
                    (NoteKind::Note, _) => "",
                };
                println!("{}{} ({}) {}", mark, note.title, note.date, note.id);
                if !note.content.is_empty() {
                    println!("    {}", note.content);
                }
            }
        }
        NotesAction::Add {
            title,
            content,
            todo,
        } => {
            let kind = if todo { NoteKind::Todo } else { NoteKind::Note };
            let note = book.save(
                NoteDraft {
                    title,
                    content,
                    ..Default::default()
                },
                kind,
            )?;
            println!("Saved {}", note.id);
        }
        NotesAction::Edit { id, title, content } => {
            let existing = book
                .get(&id)
                .ok_or_else(|| format!("Note '{}' not found", id))?;
            let (kind, completed) = (existing.kind(), existing.completed);
            book.save(
                NoteDraft {
                    id: Some(id),
                    title,
                    content,
                    completed,
                },
                kind,
            )?;
            println!("Updated");
        }
        NotesAction::Toggle { id } => {
            let done = book.toggle(&id)?;
            println!("{}", if done { "Done" } else { "Not done" });
        }
        NotesAction::Delete { id } => {
            book.delete(&id)?;
            println!("Deleted");
        }
    }

    Ok(())
}

fn activity_command(
    config: &Config,
    action: ActivityAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut log = ActivityLog::open(FileStorage::open(&config.storage.path)?)?;

    match action {
        ActivityAction::List => {
            for entry in log.entries() {
                println!(
                    "{} {} min, {} kcal ({}) {}",
                    entry.kind,
                    entry.duration_minutes,
                    entry.calories.unwrap_or(0),
                    entry.date,
                    entry.id
                );
            }
            let totals = log.totals();
            println!("\nTotal: {} min, {} kcal", totals.minutes, totals.calories);
        }
        ActivityAction::Add { kind, minutes } => {
            let entry = log.add(kind.parse()?, minutes)?;
            println!("Logged {} ({} kcal)", entry.id, entry.calories.unwrap_or(0));
        }
        ActivityAction::Delete { id } => {
            log.delete(&id)?;
            println!("Deleted");
        }
    }

    Ok(())
}

fn vault_command(config: &Config, action: VaultAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut vault = PasswordVault::open(FileStorage::open(&config.storage.path)?)?;

    match action {
        VaultAction::List { reveal } => {
            if vault.entries().is_empty() {
                println!("Vault is empty");
            }
            for entry in vault.entries() {
                println!(
                    "{} [{}] {} {}",
                    entry.title,
                    entry.username.as_deref().unwrap_or("-"),
                    entry.display_password(reveal),
                    entry.id
                );
            }
        }
        VaultAction::Add {
            title,
            password,
            username,
        } => {
            let password = match password {
                Some(password) => password,
                None => tools::generate_password(config.password.length)?,
            };
            let entry = vault.add(&title, username.as_deref(), &password)?;
            println!("Saved {}", entry.id);
        }
        VaultAction::Delete { id } => {
            vault.delete(&id)?;
            println!("Deleted");
        }
    }

    Ok(())
}
