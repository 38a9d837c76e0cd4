use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::user::errors::DirectoryError;
use crate::user::ports::DirectoryServicePort;

/// Demo records registered at startup when seeding is enabled.
const DEMO_USERS: [(&str, &str, &str, &str); 4] = [
    ("ada@example.com", "Ada", "Lovelace", "Analytical Engines"),
    ("grace@example.com", "Grace", "Hopper", "Eckert-Mauchly"),
    ("alan@example.com", "Alan", "Turing", "NPL"),
    ("edsger@example.com", "Edsger", "Dijkstra", "Burroughs"),
];

/// Register the demo users through the regular registration operation.
///
/// Already-registered emails are skipped; any other failure is logged and
/// the loader moves on to the next user.
pub async fn seed_demo_users<S>(service: &S)
where
    S: DirectoryServicePort,
{
    for (email, first_name, last_name, company) in DEMO_USERS {
        let email_address = match EmailAddress::new(email.to_string()) {
            Ok(address) => address,
            Err(e) => {
                tracing::error!(email, error = %e, "Invalid demo user email");
                continue;
            }
        };

        let command = RegisterUserCommand::new(
            email_address,
            first_name.to_string(),
            last_name.to_string(),
            company.to_string(),
            format!("{}-demo-password", first_name.to_lowercase()),
        );

        match service.register(command).await {
            Ok(user_id) => {
                tracing::info!(email, user_id = %user_id, "Seeded demo user")
            }
            Err(DirectoryError::DuplicateEmail(_)) => {
                tracing::warn!(email, "Demo user already registered, skipping")
            }
            Err(e) => tracing::error!(email, error = %e, "Failed to seed demo user"),
        }
    }
}
