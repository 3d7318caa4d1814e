use crate::{
    admin::repo::StatsRepo, requests::repo::RequestRepo, reviews::repo::ReviewRepo,
    skills::repo::SkillRepo, users::repo::UserRepo,
};

/// Everything the services need from persistence.
pub trait Store: UserRepo + SkillRepo + RequestRepo + ReviewRepo + StatsRepo {}

impl<T> Store for T where T: UserRepo + SkillRepo + RequestRepo + ReviewRepo + StatsRepo {}
