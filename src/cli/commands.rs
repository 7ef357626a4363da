// Passforge — CLI Command Handlers
//
// Each function handles one CLI subcommand. `generate` is a complete
// login/derive/logout round trip: nothing survives the process — no key
// file, no cache, no history.

use std::io::{BufRead, Write};

use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::PassforgeError;
use crate::model::{SiteIdentity, SiteType};
use crate::session::Session;
use crate::template::templates_for;

use super::Commands;

/// Execute the parsed CLI command.
pub fn execute(command: Commands) -> Result<(), PassforgeError> {
    match command {
        Commands::Generate {
            user,
            site,
            counter,
            site_type,
            password,
        } => cmd_generate(user, site, counter, site_type, password),
        Commands::Types { json } => cmd_types(json),
    }
}

// ─── Generate ────────────────────────────────────────────────────────────────

fn cmd_generate(
    user: String,
    site: String,
    counter: u32,
    site_type: String,
    password: Option<String>,
) -> Result<(), PassforgeError> {
    let site_type: SiteType = site_type.parse()?;
    let identity = SiteIdentity::new(site, counter, site_type)?;
    let master_password = match password {
        Some(p) => Zeroizing::new(p),
        None => prompt_master_password()?,
    };

    let session = Session::new();
    session.login(&user, master_password.as_bytes())?;
    let derived = session.site_password(&identity)?;
    session.logout();

    println!("{}", derived);
    Ok(())
}

/// Prompt for the master password on stderr and read one line from stdin.
/// The buffer is zeroed when it goes out of scope.
fn prompt_master_password() -> Result<Zeroizing<String>, PassforgeError> {
    eprint!("Master password: ");
    std::io::stderr().flush()?;

    let mut line = Zeroizing::new(String::new());
    std::io::stdin().lock().read_line(&mut line)?;

    // strip the trailing newline without reallocating
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    if line.is_empty() {
        return Err(PassforgeError::Other(
            "empty master password".to_string(),
        ));
    }
    Ok(line)
}

// ─── Types ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TypeInfo {
    site_type: SiteType,
    display_name: String,
    templates: usize,
    min_length: usize,
    max_length: usize,
    example_template: &'static str,
}

fn type_infos() -> Vec<TypeInfo> {
    SiteType::ALL
        .iter()
        .map(|&site_type| {
            let templates = templates_for(site_type);
            let lengths = templates.iter().map(|t| t.chars().count());
            TypeInfo {
                site_type,
                display_name: site_type.to_string(),
                templates: templates.len(),
                min_length: lengths.clone().min().unwrap_or(0),
                max_length: lengths.max().unwrap_or(0),
                example_template: templates[0],
            }
        })
        .collect()
}

fn cmd_types(json: bool) -> Result<(), PassforgeError> {
    let infos = type_infos();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&infos)
                .map_err(|e| PassforgeError::Other(e.to_string()))?
        );
        return Ok(());
    }

    println!("{:<18} {:>9} {:>7}  {}", "Type", "Templates", "Length", "Example template");
    println!("{:-<64}", "");
    for info in infos {
        let length = if info.min_length == info.max_length {
            info.min_length.to_string()
        } else {
            format!("{}-{}", info.min_length, info.max_length)
        };
        println!(
            "{:<18} {:>9} {:>7}  {}",
            info.display_name, info.templates, length, info.example_template
        );
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
