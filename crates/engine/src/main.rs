//! Warband Engine - Main entry point.
//!
//! Loads the configured user's warband from the data directory, logs a
//! summary of every character and writes the normalized document back.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warband_domain::rules::{
    calculate_character_cost, calculate_modified_stats, calculate_total_armour, max_hp,
};
use warband_domain::{Catalog, WarbandData};

use warband_engine::infrastructure::{
    app_settings::EngineSettings,
    auth::StaticAuthAdapter,
    clock::SystemClock,
    persistence::JsonFileWarbandRepository,
    ports::{AuthUser, ClockPort},
};
use warband_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from the working directory, then the repo root.
    let _ = dotenvy::dotenv();
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warband_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Warband Engine");

    let settings = EngineSettings::from_env();
    tracing::info!(
        data_dir = %settings.data_dir.display(),
        user_id = %settings.user_id,
        undo_timeout_ms = settings.undo_timeout_ms,
        "Settings loaded"
    );

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let repo = Arc::new(JsonFileWarbandRepository::new(
        settings.data_dir.clone(),
        clock.clone(),
    ));
    let auth = Arc::new(StaticAuthAdapter::new(AuthUser::new(settings.user_id.clone())));
    let app = App::new(repo, auth, clock, &settings);

    let Some(user) = app.use_cases.auth.sign_in().await? else {
        tracing::warn!("Sign-in returned no user, nothing to load");
        return Ok(());
    };

    let store = &app.stores.warband;
    store.load(&user.uid).await?;
    let state = store.snapshot().await;
    log_summary(&state.data, store.catalog());

    // Write back so older documents pick up the normalized shape.
    app.use_cases.warbands.save(&user.uid, &state.data).await?;
    tracing::info!(user_id = %user.uid, "Warband saved");

    Ok(())
}

fn log_summary(data: &WarbandData, catalog: &Catalog) {
    tracing::info!(
        warband = %data.warband_name,
        characters = data.characters.len(),
        gold = data.gold,
        xp = data.xp,
        "Warband loaded"
    );

    for (index, character) in data.characters.iter().enumerate() {
        let modified = calculate_modified_stats(character, catalog);
        let armour = calculate_total_armour(character.item_names(), catalog) + modified.armour;
        tracing::info!(
            character_index = index,
            name = %character.name,
            cost = calculate_character_cost(character, catalog),
            hp = character.hp,
            max_hp = max_hp(character, catalog),
            armour,
            slots_used = character.item_names().count(),
            slots = character.inventory,
            "Character"
        );
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
