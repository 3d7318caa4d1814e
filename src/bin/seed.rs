//! Loads an admin account and a small sample marketplace.
//!
//! Does nothing when the admin email is already registered.

use anyhow::Context;
use skillswap::{
    auth::{dto::normalize_email, password::hash_password},
    config::AppConfig,
    db::PgStore,
    requests::{
        repo::RequestRepo,
        repo_types::{NewRequest, Priority, RequestStatus},
    },
    skills::{repo::SkillRepo, repo_types::NewSkill},
    users::{
        repo::UserRepo,
        repo_types::{NewUser, Role},
    },
};
use tracing::info;

const SAMPLE_PASSWORD: &str = "password123";

const USERS: [(&str, &str, &str); 3] = [
    (
        "John Doe",
        "john@example.com",
        "Web developer with 5 years of experience",
    ),
    (
        "Jane Smith",
        "jane@example.com",
        "UI/UX designer passionate about creating beautiful interfaces",
    ),
    (
        "Mike Johnson",
        "mike@example.com",
        "Guitar teacher with 10 years of experience",
    ),
];

// (name, description, category, level, owner email)
const SKILLS: [(&str, &str, &str, &str, &str); 6] = [
    (
        "React Development",
        "Learn React.js from basics to advanced concepts including hooks, context, and state management.",
        "programming",
        "intermediate",
        "john@example.com",
    ),
    (
        "UI/UX Design",
        "Master the principles of user interface and user experience design using Figma and other tools.",
        "design",
        "advanced",
        "jane@example.com",
    ),
    (
        "Guitar Lessons",
        "Learn acoustic and electric guitar from basic chords to advanced techniques and music theory.",
        "music",
        "expert",
        "mike@example.com",
    ),
    (
        "Python Programming",
        "Learn Python programming from fundamentals to web development with Django and Flask.",
        "programming",
        "beginner",
        "john@example.com",
    ),
    (
        "Digital Marketing",
        "Learn digital marketing strategies including SEO, social media marketing, and content creation.",
        "marketing",
        "intermediate",
        "jane@example.com",
    ),
    (
        "Spanish Language",
        "Learn Spanish from basic conversation to advanced grammar and cultural understanding.",
        "languages",
        "beginner",
        "mike@example.com",
    ),
];

// (skill name, requester email, message, final status)
const REQUESTS: [(&str, &str, &str, RequestStatus); 3] = [
    (
        "React Development",
        "jane@example.com",
        "I would love to learn React to improve my frontend skills!",
        RequestStatus::Pending,
    ),
    (
        "UI/UX Design",
        "mike@example.com",
        "I want to learn design principles for my music website.",
        RequestStatus::Accepted,
    ),
    (
        "Guitar Lessons",
        "john@example.com",
        "I have always wanted to learn guitar. Can you help?",
        RequestStatus::Pending,
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    skillswap::init_tracing();

    let config = AppConfig::from_env()?;
    let store = PgStore::connect(&config).await?;
    store.migrate().await?;

    let admin_email = normalize_email(
        &std::env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@skillswap.com".into()),
    );
    let admin_password =
        std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());

    if store.find_user_by_email(&admin_email).await?.is_some() {
        info!(email = %admin_email, "admin already present, nothing to seed");
        return Ok(());
    }

    let admin = store
        .insert_user(&NewUser {
            name: "Admin".into(),
            email: admin_email,
            password_hash: hash_password(&admin_password)?,
            bio: "System Administrator".into(),
            role: Role::Admin,
        })
        .await?;
    info!(user_id = admin.id, email = %admin.email, "admin created");

    let sample_hash = hash_password(SAMPLE_PASSWORD)?;
    let mut users = Vec::with_capacity(USERS.len());
    for (name, email, bio) in USERS {
        let user = store
            .insert_user(&NewUser {
                name: name.into(),
                email: email.into(),
                password_hash: sample_hash.clone(),
                bio: bio.into(),
                role: Role::User,
            })
            .await?;
        info!(user_id = user.id, email, "user created");
        users.push(user);
    }
    let user_id = |email: &str| {
        users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.id)
            .with_context(|| format!("sample user {email} missing"))
    };

    let mut skills = Vec::with_capacity(SKILLS.len());
    for (name, description, category, level, owner) in SKILLS {
        let skill = store
            .insert_skill(&NewSkill {
                owner_id: user_id(owner)?,
                name: name.into(),
                description: description.into(),
                category: category.into(),
                level: level.into(),
                tags: Vec::new(),
            })
            .await?;
        info!(skill_id = skill.id, name, owner, "skill created");
        skills.push(skill);
    }

    for (skill_name, requester, message, status) in REQUESTS {
        let skill = skills
            .iter()
            .find(|s| s.name == skill_name)
            .with_context(|| format!("sample skill {skill_name} missing"))?;
        let request = store
            .insert_request(&NewRequest {
                skill_id: skill.id,
                requester_id: user_id(requester)?,
                message: message.into(),
                priority: Priority::Medium,
                preferred_schedule: None,
            })
            .await?;
        if status != RequestStatus::Pending {
            store
                .update_request_status(request.id, RequestStatus::Pending, status, None)
                .await?;
        }
        info!(request_id = request.id, skill = skill_name, requester, %status, "request created");
    }

    info!(
        users = USERS.len() + 1,
        skills = SKILLS.len(),
        requests = REQUESTS.len(),
        "database seeded"
    );
    Ok(())
}
