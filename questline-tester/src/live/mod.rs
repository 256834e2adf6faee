//! Checks against a running quest service.

pub mod client;

use anyhow::{Context, Result, bail, ensure};
use chrono::Utc;
use questline_core::{QuestBackend, QuestController, QuestPhase};

pub use client::ReqwestBackend;

pub struct LiveCtx {
    pub backend: ReqwestBackend,
    pub user_id: String,
    pub verbose: bool,
}

/// Run the live half of `key`. `None` when the scenario has no live body.
pub async fn run_live(key: &str, ctx: &LiveCtx) -> Option<Result<()>> {
    let outcome = match key {
        "smoke" => smoke(ctx).await,
        "live-journey" => journey(ctx).await,
        _ => return None,
    };
    Some(outcome)
}

async fn smoke(ctx: &LiveCtx) -> Result<()> {
    let health = ctx
        .backend
        .health()
        .await
        .with_context(|| format!("GET {}", ctx.backend.endpoints().health()))?;
    ensure!(
        health.is_healthy(),
        "service reported {}: {}",
        health.status,
        health.message
    );

    let user_context = ctx
        .backend
        .fetch_user_context(&ctx.user_id)
        .await
        .context("user-stats")?;
    if ctx.verbose {
        println!("   context: {user_context:?}");
    }

    let quest = ctx
        .backend
        .generate_quest(&ctx.user_id)
        .await
        .context("generate-quest")?;
    ensure!(
        !quest.objectives.is_empty(),
        "quest {} came back without objectives",
        quest.quest_id
    );
    Ok(())
}

async fn journey(ctx: &LiveCtx) -> Result<()> {
    let mut controller = QuestController::for_user(ctx.backend.clone(), ctx.user_id.clone());
    controller.load_user_context().await;
    controller.generate_quest().await;
    let session = controller.session();
    if session.phase() != QuestPhase::QuestActive {
        bail!(
            "quest generation failed: {}",
            session.error.as_deref().unwrap_or("no quest returned")
        );
    }
    let Some(first) = session
        .quest
        .as_ref()
        .and_then(|quest| quest.objectives.first())
        .map(|objective| objective.id.clone())
    else {
        bail!("generated quest has no objectives");
    };

    let url = controller.handle_task_click(&first, Utc::now()).await;
    let session = controller.session();
    ensure!(
        url.is_some(),
        "completion of {first} was not recorded: {:?}",
        session.error
    );
    ensure!(session.is_completed(&first));
    ensure!(session.progress.streak == 1);
    if ctx.verbose {
        println!(
            "   completed {first}: {} points, {}% progress",
            session.progress.points,
            session.progress_percent()
        );
    }
    Ok(())
}
