// src/bin/apikeyctl.rs
//! apikeyctl — operational tool for the YouTube API key credential store
//!
//! set/check/show/revoke/purge/validate a single user's credential, or
//! print a store-wide status line. Decrypted keys never reach stdout.

use anyhow::{bail, Context, Result};
use youtube_key_vault::consts::MASTER_SECRET_ENV;
use youtube_key_vault::{
    delete_api_key, delete_credential, derive_master_key, get_credential, get_decrypted_api_key,
    has_api_key, load_config, mark_validated, open_creds_db, save_api_key,
    count_active_credentials, CredentialLookup, MasterKey,
};

fn usage() -> ! {
    eprintln!(
        "usage: apikeyctl <command> [args]\n\
         \n\
         commands:\n\
         \x20 set <user_id> <api_key>   encrypt and store a key\n\
         \x20 check <user_id>           report whether an active, decryptable key exists\n\
         \x20 show <user_id>            print the stored (encrypted) record as JSON\n\
         \x20 revoke <user_id>          deactivate the key (row kept)\n\
         \x20 purge <user_id>           delete the row entirely\n\
         \x20 validate <user_id>        stamp last_validated after an upstream check\n\
         \x20 status                    count active credentials"
    );
    std::process::exit(2);
}

fn master_key() -> Result<MasterKey> {
    let config = load_config();
    if config.features.require_master_secret && config.keys.master_secret_hex.is_none() {
        bail!("require_master_secret is set but no secret is configured; set {MASTER_SECRET_ENV}");
    }
    Ok(derive_master_key(config.keys.master_secret_hex.as_deref())?)
}

fn parse_user_id(arg: Option<&String>) -> Result<i64> {
    arg.context("missing <user_id>")?
        .parse::<i64>()
        .context("<user_id> must be an integer")
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else { usage() };

    let conn = open_creds_db().context("failed to open credential database")?;

    match command.as_str() {
        "set" => {
            let user_id = parse_user_id(args.get(1))?;
            let api_key = args.get(2).context("missing <api_key>")?;
            let master = master_key()?;
            let stored = save_api_key(&conn, &master, user_id, api_key)?;
            println!(
                "stored key for user {user_id} (iv {}, updated {})",
                stored.iv, stored.updated_at
            );
        }
        "check" => {
            let user_id = parse_user_id(args.get(1))?;
            if !has_api_key(&conn, user_id)? {
                println!("user {user_id}: no active key");
                return Ok(());
            }
            let master = master_key()?;
            match get_decrypted_api_key(&conn, &master, user_id) {
                Ok(Some(_)) => println!("user {user_id}: active key, decrypts OK"),
                Ok(None) => println!("user {user_id}: no active key"),
                Err(_) => println!("user {user_id}: active key but NOT decryptable; re-entry needed"),
            }
        }
        "show" => {
            let user_id = parse_user_id(args.get(1))?;
            match get_credential(&conn, user_id)? {
                CredentialLookup::Active(cred) => {
                    println!("{}", serde_json::to_string_pretty(&cred)?)
                }
                CredentialLookup::Inactive => println!("user {user_id}: key exists but inactive"),
                CredentialLookup::Missing => println!("user {user_id}: no key stored"),
            }
        }
        "revoke" => {
            let user_id = parse_user_id(args.get(1))?;
            delete_api_key(&conn, user_id)?;
            println!("revoked key for user {user_id}");
        }
        "purge" => {
            let user_id = parse_user_id(args.get(1))?;
            delete_credential(&conn, user_id)?;
            println!("purged credential row for user {user_id}");
        }
        "validate" => {
            let user_id = parse_user_id(args.get(1))?;
            let master = master_key()?;
            // Local decrypt stands in for the upstream call the web layer makes
            match get_decrypted_api_key(&conn, &master, user_id)? {
                Some(_) => {
                    mark_validated(&conn, user_id)?;
                    println!("validated key for user {user_id}");
                }
                None => println!("user {user_id}: no active key to validate"),
            }
        }
        "status" => {
            let active = count_active_credentials(&conn)?;
            println!("{active} active credential(s)");
        }
        _ => usage(),
    }

    Ok(())
}
