use clap::{Args, Subcommand};
use folio_lib::{Notice, Notifier, Profile, ProfileStore, repository::entities::Result};
use sysexits::ExitCode;
use tracing::error;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the current form and the saved names
    Show,
    /// Save a profile, replacing any saved under the same name
    Save(ProfileArgs),
    /// List saved names
    List {
        /// Only list names where the name or one of its words starts with this
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Delete the name at a position in `folio list`
    Delete {
        /// 1-based position in the list
        position: Option<usize>,
        /// Count positions in the list filtered by this, as `folio list --filter` shows it
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Load the profile saved under a name
    Search { query: Option<String> },
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    about_me: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    skills: String,
    #[arg(long, default_value = "")]
    website: String,
}

impl From<&ProfileArgs> for Profile {
    fn from(args: &ProfileArgs) -> Self {
        Profile {
            name: args.name.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
            about_me: args.about_me.clone(),
            address: args.address.clone(),
            skills: args.skills.clone(),
            website: args.website.clone(),
        }
    }
}

pub fn handle(store: &ProfileStore, notifier: &impl Notifier, cmd: &Command) -> ExitCode {
    match run(store, notifier, cmd) {
        Ok(()) => ExitCode::Ok,
        Err(err) if err.is_user_error() => {
            Notice::error(&err).show(notifier);
            ExitCode::DataErr
        }
        Err(err) => {
            error!("{err}");
            ExitCode::Software
        }
    }
}

fn run(store: &ProfileStore, notifier: &impl Notifier, cmd: &Command) -> Result<()> {
    match cmd {
        Command::Show => {
            let init = store.initialize()?;
            match init.form() {
                Some(profile) => println!("{profile}"),
                None => println!("No profile saved yet"),
            }
            if !init.names().is_empty() {
                println!();
                print_names(init.names());
            }
        }
        Command::Save(args) => {
            let profile = store.save(&Profile::from(args))?;
            Notice::saved(&profile).show(notifier);
        }
        Command::List { filter } => {
            print_names(&displayed_names(store, filter.as_deref())?);
        }
        Command::Delete { position, filter } => {
            // Positions are shown 1-based; anything that doesn't map onto a row is no selection
            let names = displayed_names(store, filter.as_deref())?;
            let position = position.and_then(|p| p.checked_sub(1));
            store.delete_by_position(position, &names)?;
            Notice::deleted().show(notifier);
        }
        Command::Search { query } => {
            let profile = store.search_by_name(query.as_deref().unwrap_or_default())?;
            println!("{profile}");
        }
    }

    Ok(())
}

/// The list `folio list` prints for the same filter, so delete positions line up with it.
fn displayed_names(store: &ProfileStore, filter: Option<&str>) -> Result<Vec<String>> {
    match filter {
        Some(query) => store.filter_names(query),
        None => store.list_names(),
    }
}

fn print_names(names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        println!("{:>3}. {name}", i.saturating_add(1));
    }
}
