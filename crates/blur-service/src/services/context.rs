//! Service context - dependency container for services
//!
//! Holds all repositories, the counter lock provider, the board factory
//! registry and the lock timings needed by services.

use std::sync::Arc;

use blur_cache::{LocalLockProvider, RedisLockProvider, RedisPool};
use blur_common::{AppConfig, AppError, LockBackend, LockConfig};
use blur_core::traits::{
    BoardRepository, ChannelRepository, LeagueMemberRepository, LeagueRepository, LikeRepository,
    LockProvider, MemberRepository, MentionRepository,
};
use blur_core::DomainError;
use blur_db::{
    create_pool, run_migrations, PgBoardRepository, PgChannelRepository,
    PgLeagueMemberRepository, PgLeagueRepository, PgLikeRepository, PgMemberRepository,
    PgMentionRepository, PoolConfig,
};
use tracing::info;

use super::board_factory::BoardFactoryRegistry;
use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for members, boards, channels, leagues, likes and mentions
/// - The lock provider serializing board counter updates
/// - The board factory registry
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    board_repo: Arc<dyn BoardRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    league_repo: Arc<dyn LeagueRepository>,
    league_member_repo: Arc<dyn LeagueMemberRepository>,
    like_repo: Arc<dyn LikeRepository>,
    mention_repo: Arc<dyn MentionRepository>,

    // Counter locking
    lock_provider: Arc<dyn LockProvider>,
    lock_config: LockConfig,

    // Board creation
    board_factories: Arc<BoardFactoryRegistry>,
}

impl ServiceContext {
    /// Start building a context
    #[must_use]
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Connect to PostgreSQL (and Redis when it backs the locks) and wire every dependency
    ///
    /// # Errors
    /// Returns an error if a pool cannot be created or migrations fail
    pub async fn connect(config: &AppConfig) -> ServiceResult<Self> {
        let pool = create_pool(&PoolConfig::from(&config.database))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if config.database.run_migrations {
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }

        let lock_provider: Arc<dyn LockProvider> = match config.lock.backend {
            LockBackend::Redis => {
                let redis_config = config.redis.as_ref().ok_or_else(|| {
                    AppError::Config("REDIS_URL is required for the redis lock backend".to_string())
                })?;
                let redis = RedisPool::from_config(redis_config).map_err(DomainError::from)?;
                Arc::new(RedisLockProvider::new(redis, config.lock.retry_interval()))
            }
            LockBackend::Local => Arc::new(LocalLockProvider::new()),
        };

        info!(
            app = %config.app.name,
            lock_backend = ?config.lock.backend,
            "Service context connected"
        );

        Self::builder()
            .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
            .board_repo(Arc::new(PgBoardRepository::new(pool.clone())))
            .channel_repo(Arc::new(PgChannelRepository::new(pool.clone())))
            .league_repo(Arc::new(PgLeagueRepository::new(pool.clone())))
            .league_member_repo(Arc::new(PgLeagueMemberRepository::new(pool.clone())))
            .like_repo(Arc::new(PgLikeRepository::new(pool.clone())))
            .mention_repo(Arc::new(PgMentionRepository::new(pool)))
            .lock_provider(lock_provider)
            .lock_config(config.lock.clone())
            .build()
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the board repository
    pub fn board_repo(&self) -> &dyn BoardRepository {
        self.board_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the league repository
    pub fn league_repo(&self) -> &dyn LeagueRepository {
        self.league_repo.as_ref()
    }

    /// Get the league member repository
    pub fn league_member_repo(&self) -> &dyn LeagueMemberRepository {
        self.league_member_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the mention repository
    pub fn mention_repo(&self) -> &dyn MentionRepository {
        self.mention_repo.as_ref()
    }

    // === Counter Locking ===

    /// Get the lock provider
    pub fn lock_provider(&self) -> &Arc<dyn LockProvider> {
        &self.lock_provider
    }

    /// Get the lock timings
    pub fn lock_config(&self) -> &LockConfig {
        &self.lock_config
    }

    // === Board Creation ===

    /// Get the board factory registry
    pub fn board_factories(&self) -> &BoardFactoryRegistry {
        self.board_factories.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("lock_config", &self.lock_config)
            .field("board_factories", &self.board_factories)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    board_repo: Option<Arc<dyn BoardRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    league_repo: Option<Arc<dyn LeagueRepository>>,
    league_member_repo: Option<Arc<dyn LeagueMemberRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    mention_repo: Option<Arc<dyn MentionRepository>>,
    lock_provider: Option<Arc<dyn LockProvider>>,
    lock_config: LockConfig,
    board_factories: Option<Arc<BoardFactoryRegistry>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            board_repo: None,
            channel_repo: None,
            league_repo: None,
            league_member_repo: None,
            like_repo: None,
            mention_repo: None,
            lock_provider: None,
            lock_config: LockConfig::default(),
            board_factories: None,
        }
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn board_repo(mut self, repo: Arc<dyn BoardRepository>) -> Self {
        self.board_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn league_repo(mut self, repo: Arc<dyn LeagueRepository>) -> Self {
        self.league_repo = Some(repo);
        self
    }

    pub fn league_member_repo(mut self, repo: Arc<dyn LeagueMemberRepository>) -> Self {
        self.league_member_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn mention_repo(mut self, repo: Arc<dyn MentionRepository>) -> Self {
        self.mention_repo = Some(repo);
        self
    }

    pub fn lock_provider(mut self, provider: Arc<dyn LockProvider>) -> Self {
        self.lock_provider = Some(provider);
        self
    }

    pub fn lock_config(mut self, config: LockConfig) -> Self {
        self.lock_config = config;
        self
    }

    pub fn board_factories(mut self, registry: Arc<BoardFactoryRegistry>) -> Self {
        self.board_factories = Some(registry);
        self
    }

    /// Build the ServiceContext
    ///
    /// Uses the default board factory registry unless one was supplied.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let board_factories = match self.board_factories {
            Some(registry) => registry,
            None => Arc::new(BoardFactoryRegistry::with_defaults()?),
        };

        Ok(ServiceContext {
            member_repo: self.member_repo.ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            board_repo: self.board_repo.ok_or_else(|| ServiceError::validation("board_repo is required"))?,
            channel_repo: self.channel_repo.ok_or_else(|| ServiceError::validation("channel_repo is required"))?,
            league_repo: self.league_repo.ok_or_else(|| ServiceError::validation("league_repo is required"))?,
            league_member_repo: self.league_member_repo.ok_or_else(|| ServiceError::validation("league_member_repo is required"))?,
            like_repo: self.like_repo.ok_or_else(|| ServiceError::validation("like_repo is required"))?,
            mention_repo: self.mention_repo.ok_or_else(|| ServiceError::validation("mention_repo is required"))?,
            lock_provider: self.lock_provider.ok_or_else(|| ServiceError::validation("lock_provider is required"))?,
            lock_config: self.lock_config,
            board_factories,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
