//! Produce an `admin_password_hash` value for `Rocket.toml`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rand::Rng;

const PROGRAM_NAME: &str = "hash-password";

const ABOUT_TEXT: &str = "Hash the coordinator password for the `admin_password_hash` config key.";

const PASSWORD: &str = "PASSWORD";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME).about(ABOUT_TEXT).arg(
        Arg::new(PASSWORD)
            .help("The plaintext password to hash")
            .action(ArgAction::Set)
            .required(true),
    )
}

/// Hash `password` with a fresh random salt.
fn hash(password: &str) -> Result<String, argon2::Error> {
    // 16 bytes is recommended for password hashing:
    //  https://en.wikipedia.org/wiki/Argon2
    let mut salt = [0_u8; 16];
    rand::thread_rng().fill(&mut salt);
    argon2::hash_encoded(password.as_bytes(), &salt, &argon2::Config::default())
}

fn run(args: &ArgMatches) -> u8 {
    let password: &String = args.get_one(PASSWORD).unwrap(); // Required argument is guaranteed to be present.
    if password.is_empty() {
        eprintln!("The password must not be empty");
        return 2;
    }
    match hash(password) {
        Ok(hash) => {
            println!("{hash}");
            0
        }
        Err(e) => {
            eprintln!("Failed to hash password: {e}");
            1
        }
    }
}

fn main() {
    let args = cli().get_matches();
    let exit_code = run(&args);
    std::process::exit(exit_code.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn password_is_required() {
        let err = cli().try_get_matches_from([PROGRAM_NAME]).unwrap_err();
        assert_eq!(clap::error::ErrorKind::MissingRequiredArgument, err.kind());

        let args = cli()
            .try_get_matches_from([PROGRAM_NAME, "pnld-coordinator"])
            .unwrap();
        assert_eq!(
            Some(&"pnld-coordinator".to_string()),
            args.get_one::<String>(PASSWORD)
        );
    }

    #[test]
    fn hash_verifies() {
        let hash = hash("pnld-coordinator").unwrap();
        assert!(argon2::verify_encoded(&hash, b"pnld-coordinator").unwrap());
        assert!(!argon2::verify_encoded(&hash, b"coordinator").unwrap());
    }

    #[test]
    fn empty_password_rejected() {
        let args = cli().try_get_matches_from([PROGRAM_NAME, ""]).unwrap();
        assert_eq!(2, run(&args));
    }
}
