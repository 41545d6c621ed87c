use clap::{Args, Parser, Subcommand};

/// Minimum length of a session signing key, in bytes
pub const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, Parser)]
#[command(name = "hotel-booking", about = "Hotel room booking demo", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the booking page and API
    Web(WebArgs),
    /// Run bookings in the terminal and print the room status
    Demo(DemoArgs),
}

#[derive(Debug, Clone, Args)]
pub struct WebArgs {
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Key used to sign session cookies (at least 64 bytes); random if unset
    #[arg(long, env = "SESSION_KEY", hide_env_values = true)]
    pub session_key: Option<String>,

    /// Only send the session cookie over HTTPS
    #[arg(long, env = "SECURE_COOKIES", default_value_t = false)]
    pub secure_cookies: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// Randomly fill the hotel before booking
    #[arg(long)]
    pub random: bool,

    /// Seed for the random fill
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Number of rooms to book; repeat for several bookings
    #[arg(long = "book", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub bookings: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_web_defaults() {
        let cli = Cli::try_parse_from(["hotel-booking", "web"]).unwrap();
        match cli.command {
            Command::Web(args) => {
                assert_eq!(args.port, 8080);
                assert!(!args.secure_cookies);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_repeated_bookings() {
        let cli = Cli::try_parse_from([
            "hotel-booking", "demo", "--random", "--seed", "3", "--book", "2", "--book", "5",
        ])
        .unwrap();
        match cli.command {
            Command::Demo(args) => {
                assert!(args.random);
                assert_eq!(args.seed, Some(3));
                assert_eq!(args.bookings, vec![2, 5]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_booking_more_than_five() {
        assert!(Cli::try_parse_from(["hotel-booking", "demo", "--book", "6"]).is_err());
    }
}
