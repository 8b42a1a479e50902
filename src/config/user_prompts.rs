//! User interaction and prompts for configuration setup
//!
//! Used on first run, when neither a config file nor `FFL_LEAGUE_ID` exists.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the ESPN league id and parses it.
///
/// The id is the `leagueId` query parameter of the league's ESPN URL.
///
/// # Returns
/// * `Ok(u64)` - The parsed league id
/// * `Err(AppError)` - Error reading from stdin or input is not a number
pub async fn prompt_for_league_id() -> Result<u64, AppError> {
    println!("Please enter your ESPN league id (the leagueId in the league URL): ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    parse_league_id(&input)
}

/// Parses a league id typed by the user.
pub fn parse_league_id(input: &str) -> Result<u64, AppError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| AppError::config_error(format!("League id must be a number, got '{trimmed}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_league_id() {
        assert_eq!(parse_league_id(" 123456\n").unwrap(), 123456);
        assert!(matches!(
            parse_league_id("my-league"),
            Err(AppError::Config(_))
        ));
        assert!(parse_league_id("").is_err());
    }
}
