//! Seed binary
//!
//! Inserts a small sample catalog and, when ADMIN_EMAIL and ADMIN_PASSWORD
//! are set, an admin account. Safe to run repeatedly; existing rows are left
//! alone.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shodhcode::{
    config::CONFIG,
    constants::roles,
    db,
    db::repositories::{ProblemRepository, UserRepository},
    services::AuthService,
};

struct SampleProblem {
    problem_id: &'static str,
    title: &'static str,
    tags: &'static [&'static str],
    difficulty: &'static str,
    platform: &'static str,
}

const SAMPLES: &[SampleProblem] = &[
    SampleProblem {
        problem_id: "LC-1",
        title: "Two Sum",
        tags: &["array", "hash-table"],
        difficulty: "Easy",
        platform: "LeetCode",
    },
    SampleProblem {
        problem_id: "LC-3",
        title: "Longest Substring Without Repeating Characters",
        tags: &["string", "sliding-window"],
        difficulty: "Medium",
        platform: "LeetCode",
    },
    SampleProblem {
        problem_id: "CF-4A",
        title: "Watermelon",
        tags: &["math"],
        difficulty: "Easy",
        platform: "Codeforces",
    },
    SampleProblem {
        problem_id: "LC-200",
        title: "Number of Islands",
        tags: &["dfs", "bfs", "grid"],
        difficulty: "Medium",
        platform: "LeetCode",
    },
    SampleProblem {
        problem_id: "LC-297",
        title: "Serialize and Deserialize Binary Tree",
        tags: &["tree", "design"],
        difficulty: "Hard",
        platform: "LeetCode",
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::create_pool(&CONFIG.database).await?;
    db::run_migrations(&pool).await?;

    for sample in SAMPLES {
        if ProblemRepository::find_by_external_id(&pool, sample.problem_id)
            .await?
            .is_none()
        {
            let tags: Vec<String> = sample.tags.iter().map(|t| t.to_string()).collect();
            ProblemRepository::create(
                &pool,
                sample.problem_id,
                sample.title,
                &tags,
                sample.difficulty,
                sample.platform,
                None,
            )
            .await?;
            tracing::info!(problem_id = sample.problem_id, "Sample problem created");
        }
    }

    if let (Some(email), Ok(password)) = (CONFIG.admin.email.clone(), std::env::var("ADMIN_PASSWORD"))
    {
        if UserRepository::find_by_email(&pool, &email).await?.is_none() {
            let password_hash = AuthService::hash_password(&password)?;
            UserRepository::create(&pool, "admin", &email, &password_hash, roles::ADMIN).await?;
            tracing::info!("Admin user created");
        }
    }

    tracing::info!("Seed completed");
    pool.close().await;

    Ok(())
}
