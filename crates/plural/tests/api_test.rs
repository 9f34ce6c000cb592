#![cfg(feature = "api")]

//! Smoke tests against the live API.
//!
//! Opt in with `--features api` and a `PLURAL_TOKEN` in the environment or
//! a `.env` file. These stay out of the default test run so CI never
//! depends on the hosted service.

use anyhow::Result;
use plural::{Application, Intents};

#[tokio::test]
async fn authenticates_and_answers_a_message_lookup() -> Result<()> {
    dotenvy::dotenv().ok();
    let app = Application::from_env(Intents::ALL)?;

    // an id this low predates the service; the lookup exercises auth and
    // the not-found mapping without needing fixture data
    let exists = app.message_exists(1, Some(0.0)).await?;
    assert!(!exists);
    Ok(())
}
