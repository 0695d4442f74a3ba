//! Composition of the long-lived services behind the router

use crate::error::{Result as ServerErrorResult, ServerError};

use chat_auth::TokenVerifier;
use chat_cache::{CacheLayer, CacheStore, MemoryStore, RedisStore};
use chat_config::{CacheBackendKind, Config};
use chat_db::ProfileRepository;
use chat_identity::{CacheTtls, HttpIdentityAuthority, IdentityResolver};
use chat_ws::{
    AppState, BroadcastDispatcher, ConnectionConfig, ConnectionLimits, ConnectionRegistry,
    DispatchLoop, Metrics, QueueCapacity, ShutdownCoordinator,
};

use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::info;

/// Application state plus the dispatch loop the caller must spawn.
pub struct Services {
    pub state: AppState,
    pub dispatch_loop: DispatchLoop,
}

/// Wire every service from a validated config.
pub async fn build_services(config: &Config, database_path: &Path) -> ServerErrorResult<Services> {
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ServerError::Startup {
            message: "auth.jwt_secret is not set".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let verifier = Arc::new(TokenVerifier::with_hs256(secret.as_bytes()));

    let pool = chat_db::connect(database_path).await?;
    let profiles = Arc::new(ProfileRepository::new(pool));

    let store = cache_store(config)?;
    let authority =
        HttpIdentityAuthority::new(&config.identity.base_url, config.identity.timeout())?;

    let resolver = IdentityResolver::new(
        CacheLayer::new(store),
        Arc::new(authority),
        profiles,
        CacheTtls {
            identity: config.cache.identity_ttl(),
            profile: config.cache.profile_ttl(),
        },
    );

    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.server.max_connections,
    });
    let metrics = Metrics::new();
    let (dispatcher, dispatch_loop) = BroadcastDispatcher::new(
        registry.clone(),
        QueueCapacity::from_config(config.broadcast.queue_capacity),
        metrics.clone(),
    );

    let state = AppState {
        verifier,
        resolver,
        registry,
        dispatcher,
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig {
            send_buffer_size: config.websocket.send_buffer_size,
        },
    };

    Ok(Services {
        state,
        dispatch_loop,
    })
}

fn cache_store(config: &Config) -> ServerErrorResult<Arc<dyn CacheStore>> {
    match config.cache.backend {
        CacheBackendKind::Memory => {
            info!("Cache: in-process memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
        CacheBackendKind::Redis => {
            let url = config
                .cache
                .redis_url
                .as_deref()
                .ok_or_else(|| ServerError::Startup {
                    message: "cache.redis_url is not set".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            info!("Cache: redis");
            Ok(Arc::new(RedisStore::connect(url)?))
        }
    }
}
