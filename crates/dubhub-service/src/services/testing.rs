//! In-memory repositories for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dubhub_common::auth::{JwtService, DEFAULT_AUDIENCE};
use dubhub_core::entities::{
    Comment, LeaderboardEntry, ModeratorAction, Notification, PendingVerification, Post,
    ReputationEntry, User, VerificationUpdate,
};
use dubhub_core::traits::{
    CommentRepository, ModeratorActionRepository, NotificationRepository, PostRepository,
    RepoResult, ReputationRepository, UserRepository,
};
use dubhub_core::value_objects::{UserRole, VerificationStatus};
use mockall::mock;
use uuid::Uuid;

use super::context::ServiceContext;

pub(crate) const TEST_JWT_SECRET: &str = "service-test-secret-service-test-secret";

#[derive(Default)]
pub(crate) struct InMemoryRepos {
    users: Mutex<HashMap<Uuid, User>>,
    posts: Mutex<HashMap<Uuid, Post>>,
    comments: Mutex<HashMap<Uuid, Comment>>,
    reputation: Mutex<HashMap<Uuid, ReputationEntry>>,
    notifications: Mutex<Vec<Notification>>,
    actions: Mutex<Vec<ModeratorAction>>,
    /// Upcoming verification writes that lose to a simulated concurrent writer
    conflicts: AtomicUsize,
}

impl InMemoryRepos {
    pub fn add_user(&self, role: UserRole) -> User {
        let id = Uuid::new_v4();
        let user = User::new(id, format!("user-{}", &id.simple().to_string()[..8]), role);
        self.users.lock().unwrap().insert(id, user.clone());
        user
    }

    pub fn add_post(&self, owner: &User) -> Post {
        let post = Post::new(
            Uuid::new_v4(),
            owner.id,
            "Unknown dub at Outlook".to_string(),
            "https://cdn.example.com/clip.mp4".to_string(),
        );
        self.posts.lock().unwrap().insert(post.id, post.clone());
        post
    }

    pub fn add_comment(&self, post: &Post, author: &User) -> Comment {
        let comment = Comment::new(
            Uuid::new_v4(),
            post.id,
            author.id,
            "This is the VIP mix".to_string(),
        );
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id, comment.clone());
        comment
    }

    pub fn post(&self, id: Uuid) -> Post {
        self.posts.lock().unwrap()[&id].clone()
    }

    pub fn reputation_of(&self, user_id: Uuid) -> Option<ReputationEntry> {
        self.reputation.lock().unwrap().get(&user_id).cloned()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<ModeratorAction> {
        self.actions.lock().unwrap().clone()
    }

    pub fn fail_next_writes(&self, count: usize) {
        self.conflicts.store(count, Ordering::SeqCst);
    }
}

pub(crate) fn jwt() -> Arc<JwtService> {
    Arc::new(JwtService::new(TEST_JWT_SECRET, DEFAULT_AUDIENCE))
}

pub(crate) fn context(repos: &Arc<InMemoryRepos>) -> ServiceContext {
    context_with_notifications(repos, repos.clone())
}

pub(crate) fn context_with_notifications(
    repos: &Arc<InMemoryRepos>,
    notifications: Arc<dyn NotificationRepository>,
) -> ServiceContext {
    ServiceContext::builder()
        .user_repo(repos.clone())
        .post_repo(repos.clone())
        .comment_repo(repos.clone())
        .reputation_repo(repos.clone())
        .notification_repo(notifications)
        .moderator_action_repo(repos.clone())
        .jwt_service(jwt())
        .build()
        .expect("test context")
}

#[async_trait]
impl UserRepository for InMemoryRepos {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_ids_by_role(&self, role: UserRole) -> RepoResult<Vec<Uuid>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| u.role == role)
            .map(|u| u.id)
            .collect())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepos {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.posts.lock().unwrap().insert(post.id, post.clone());
        Ok(())
    }

    async fn update_verification(
        &self,
        id: Uuid,
        update: &VerificationUpdate,
        expected_version: i32,
    ) -> RepoResult<Option<Post>> {
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.get_mut(&id) else {
            return Ok(None);
        };

        let pending = self.conflicts.load(Ordering::SeqCst);
        if pending > 0 {
            self.conflicts.store(pending - 1, Ordering::SeqCst);
            post.version += 1;
        }

        if post.version != expected_version {
            return Ok(None);
        }

        post.apply_verification(update);
        Ok(Some(post.clone()))
    }

    async fn find_pending_verifications(&self) -> RepoResult<Vec<PendingVerification>> {
        let posts = self.posts.lock().unwrap();
        let users = self.users.lock().unwrap();
        let comments = self.comments.lock().unwrap();

        let mut pending: Vec<PendingVerification> = posts
            .values()
            .filter(|p| p.verification_status == VerificationStatus::Community)
            .filter_map(|p| {
                let owner = users.get(&p.owner_id)?.clone();
                let comment = p.verified_comment_id.and_then(|id| comments.get(&id).cloned());
                Some(PendingVerification {
                    post: p.clone(),
                    owner,
                    comment,
                })
            })
            .collect();
        pending.sort_by_key(|p| p.post.updated_at);
        Ok(pending)
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepos {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        Ok(self.comments.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id, comment.clone());
        Ok(())
    }
}

#[async_trait]
impl ReputationRepository for InMemoryRepos {
    async fn find(&self, user_id: Uuid) -> RepoResult<Option<ReputationEntry>> {
        Ok(self.reputation_of(user_id))
    }

    async fn credit(&self, user_id: Uuid, score: i64, correct_ids: i64) -> RepoResult<ReputationEntry> {
        let mut reputation = self.reputation.lock().unwrap();
        let entry = reputation
            .entry(user_id)
            .or_insert_with(|| ReputationEntry::empty(user_id));
        entry.credit(score, correct_ids);
        Ok(entry.clone())
    }

    async fn leaderboard(&self, limit: i64) -> RepoResult<Vec<LeaderboardEntry>> {
        let reputation = self.reputation.lock().unwrap();
        let users = self.users.lock().unwrap();

        let mut rows: Vec<(ReputationEntry, String)> = reputation
            .values()
            .filter_map(|e| users.get(&e.user_id).map(|u| (e.clone(), u.username.clone())))
            .collect();
        rows.sort_by(|(a, an), (b, bn)| {
            b.score
                .cmp(&a.score)
                .then(b.correct_ids.cmp(&a.correct_ids))
                .then(an.cmp(bn))
        });

        Ok(rows
            .into_iter()
            .take(limit as usize)
            .enumerate()
            .map(|(i, (entry, username))| LeaderboardEntry {
                rank: i as i64 + 1,
                user_id: entry.user_id,
                username,
                score: entry.score,
                correct_ids: entry.correct_ids,
            })
            .collect())
    }
}

#[async_trait]
impl NotificationRepository for InMemoryRepos {
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn find_by_recipient(&self, recipient_id: Uuid, limit: i64) -> RepoResult<Vec<Notification>> {
        let mut found: Vec<Notification> = self
            .notifications()
            .into_iter()
            .filter(|n| n.recipient_id == recipient_id)
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn unread_count(&self, recipient_id: Uuid) -> RepoResult<i64> {
        Ok(self
            .notifications()
            .iter()
            .filter(|n| n.recipient_id == recipient_id && !n.read)
            .count() as i64)
    }

    async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> RepoResult<bool> {
        let mut notifications = self.notifications.lock().unwrap();
        match notifications
            .iter_mut()
            .find(|n| n.id == id && n.recipient_id == recipient_id)
        {
            Some(n) => {
                n.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, recipient_id: Uuid) -> RepoResult<u64> {
        let mut updated = 0;
        for n in self.notifications.lock().unwrap().iter_mut() {
            if n.recipient_id == recipient_id && !n.read {
                n.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }
}

#[async_trait]
impl ModeratorActionRepository for InMemoryRepos {
    async fn create(&self, action: &ModeratorAction) -> RepoResult<()> {
        self.actions.lock().unwrap().push(action.clone());
        Ok(())
    }

    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<ModeratorAction>> {
        Ok(self
            .actions()
            .into_iter()
            .filter(|a| a.post_id == post_id)
            .collect())
    }
}

mock! {
    pub NotificationSink {}

    #[async_trait]
    impl NotificationRepository for NotificationSink {
        async fn create(&self, notification: &Notification) -> RepoResult<()>;
        async fn find_by_recipient(&self, recipient_id: Uuid, limit: i64) -> RepoResult<Vec<Notification>>;
        async fn unread_count(&self, recipient_id: Uuid) -> RepoResult<i64>;
        async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> RepoResult<bool>;
        async fn mark_all_read(&self, recipient_id: Uuid) -> RepoResult<u64>;
    }
}
