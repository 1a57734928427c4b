//! Admin operations: user listing, ban management, account deletion and
//! platform-wide stats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{BlogRepository, UserRepository};

/// User row as shown in the admin console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub banned: bool,
    pub banned_at: Option<DateTime<Utc>>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Platform-wide totals for the admin overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: i64,
    pub total_blogs: i64,
    pub total_comments: i64,
    pub total_likes: i64,
}

/// Admin-gated operations
///
/// Every call verifies the acting user's admin flag server-side before
/// touching anything.
pub struct AdminService<U: UserRepository, B: BlogRepository> {
    user_repository: Arc<U>,
    blog_repository: Arc<B>,
}

impl<U: UserRepository, B: BlogRepository> AdminService<U, B> {
    pub fn new(user_repository: Arc<U>, blog_repository: Arc<B>) -> Self {
        Self {
            user_repository,
            blog_repository,
        }
    }

    /// All accounts, newest first
    pub async fn list_users(&self, admin_id: i32) -> DomainResult<Vec<UserSummary>> {
        self.ensure_admin(admin_id).await?;
        let users = self.user_repository.list().await?;
        Ok(users
            .into_iter()
            .map(|user| UserSummary {
                id: user.id,
                name: user.name,
                email: user.email,
                banned: user.banned,
                banned_at: user.banned_at,
                is_admin: user.is_admin,
                created_at: user.created_at,
            })
            .collect())
    }

    /// Ban or unban an account
    pub async fn set_banned(&self, admin_id: i32, user_id: i32, banned: bool) -> DomainResult<()> {
        self.ensure_admin(admin_id).await?;
        if admin_id == user_id {
            return Err(DomainError::validation("Admins cannot ban themselves"));
        }
        let updated = self.user_repository.set_banned(user_id, banned).await?;
        if !updated {
            return Err(DomainError::not_found("User"));
        }
        info!(
            admin_id,
            user_id,
            banned,
            event = "ban_updated",
            "Ban flag changed"
        );
        Ok(())
    }

    /// Delete an account and everything it owns
    ///
    /// The repository performs the removal in one transaction so a
    /// half-deleted account can never be observed.
    pub async fn delete_account(&self, admin_id: i32, user_id: i32) -> DomainResult<()> {
        self.ensure_admin(admin_id).await?;
        if admin_id == user_id {
            return Err(DomainError::validation("Admins cannot delete themselves"));
        }
        let deleted = self.user_repository.delete_account(user_id).await?;
        if !deleted {
            return Err(DomainError::not_found("User"));
        }
        warn!(
            admin_id,
            user_id,
            event = "account_deleted",
            "Account and owned content removed"
        );
        Ok(())
    }

    /// Platform-wide totals
    pub async fn platform_stats(&self, admin_id: i32) -> DomainResult<PlatformStats> {
        self.ensure_admin(admin_id).await?;
        Ok(PlatformStats {
            total_users: self.user_repository.count().await?,
            total_blogs: self.blog_repository.count_posts().await?,
            total_comments: self.blog_repository.count_all_comments().await?,
            total_likes: self.blog_repository.count_all_likes().await?,
        })
    }

    async fn ensure_admin(&self, admin_id: i32) -> DomainResult<()> {
        let actor = self
            .user_repository
            .find_by_id(admin_id)
            .await?
            .ok_or(AuthError::InsufficientPermissions)?;
        if !actor.is_admin || actor.banned {
            return Err(AuthError::InsufficientPermissions.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::User;
    use crate::repositories::{MockBlogRepository, MockUserRepository};

    async fn seed(repo: &MockUserRepository, id: i32, is_admin: bool) {
        repo.insert_raw(User {
            id,
            name: format!("user-{}", id),
            email: format!("user{}@x.com", id),
            password_hash: "hash".to_string(),
            banned: false,
            banned_at: None,
            is_admin,
            created_at: Utc::now(),
        })
        .await;
    }

    async fn fixture() -> (
        Arc<MockUserRepository>,
        AdminService<MockUserRepository, MockBlogRepository>,
    ) {
        let user_repo = Arc::new(MockUserRepository::new());
        let blog_repo = Arc::new(MockBlogRepository::new());
        seed(&user_repo, 1, true).await;
        seed(&user_repo, 2, false).await;
        let service = AdminService::new(Arc::clone(&user_repo), blog_repo);
        (user_repo, service)
    }

    #[tokio::test]
    async fn non_admin_is_rejected() {
        let (_, service) = fixture().await;
        let error = service.list_users(2).await.unwrap_err();
        assert!(matches!(
            error,
            DomainError::Auth(AuthError::InsufficientPermissions)
        ));
    }

    #[tokio::test]
    async fn ban_and_unban_round_trip() {
        let (user_repo, service) = fixture().await;
        service.set_banned(1, 2, true).await.unwrap();
        assert!(user_repo.find_by_id(2).await.unwrap().unwrap().banned);
        service.set_banned(1, 2, false).await.unwrap();
        assert!(!user_repo.find_by_id(2).await.unwrap().unwrap().banned);
    }

    #[tokio::test]
    async fn admins_cannot_target_themselves() {
        let (_, service) = fixture().await;
        assert!(service.set_banned(1, 1, true).await.is_err());
        assert!(service.delete_account(1, 1).await.is_err());
    }

    #[tokio::test]
    async fn delete_account_removes_the_user() {
        let (user_repo, service) = fixture().await;
        service.delete_account(1, 2).await.unwrap();
        assert!(user_repo.find_by_id(2).await.unwrap().is_none());
        let error = service.delete_account(1, 2).await.unwrap_err();
        assert!(matches!(error, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn platform_stats_aggregate_counts() {
        let (_, service) = fixture().await;
        let stats = service.platform_stats(1).await.unwrap();
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_blogs, 0);
    }
}
