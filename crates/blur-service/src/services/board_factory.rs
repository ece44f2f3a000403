//! Board factories
//!
//! One creation strategy per board type, looked up through a registry that is
//! assembled and checked once at startup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use blur_common::AppError;
use blur_core::entities::{Board, BoardKind, Member};
use blur_core::BoardType;
use validator::Validate;

use crate::dto::BoardCreateRequest;

use super::error::{ServiceError, ServiceResult};

/// Builds an unpersisted board of one type from a creation request
pub trait BoardFactory: Send + Sync {
    /// Board type this factory builds
    fn board_type(&self) -> BoardType;

    /// Validate the request and build the board, with no channel attached.
    ///
    /// A request of another board type is a dispatch bug and fails with
    /// `ServiceError::Internal`.
    fn create_board(&self, request: &BoardCreateRequest, member: &Member) -> ServiceResult<Board>;
}

fn dispatch_mismatch(expected: BoardType, request: &BoardCreateRequest) -> ServiceError {
    ServiceError::internal(format!(
        "{expected} factory received a {} request",
        request.board_type()
    ))
}

// ============================================================================
// Factories
// ============================================================================

/// Builds league-scoped boards
#[derive(Debug, Default, Clone, Copy)]
pub struct LeagueBoardFactory;

impl BoardFactory for LeagueBoardFactory {
    fn board_type(&self) -> BoardType {
        BoardType::League
    }

    fn create_board(&self, request: &BoardCreateRequest, member: &Member) -> ServiceResult<Board> {
        let BoardCreateRequest::League(req) = request else {
            return Err(dispatch_mismatch(self.board_type(), request));
        };
        req.validate()?;

        Ok(Board::new(
            member.id,
            req.title.trim().to_string(),
            req.content.clone(),
            BoardKind::League {
                league_id: req.league_id,
            },
        ))
    }
}

/// Builds vehicle profile boards
#[derive(Debug, Default, Clone, Copy)]
pub struct MyCarBoardFactory;

impl BoardFactory for MyCarBoardFactory {
    fn board_type(&self) -> BoardType {
        BoardType::MyCar
    }

    fn create_board(&self, request: &BoardCreateRequest, member: &Member) -> ServiceResult<Board> {
        let BoardCreateRequest::MyCar(req) = request else {
            return Err(dispatch_mismatch(self.board_type(), request));
        };
        req.validate()?;

        Ok(Board::new(
            member.id,
            req.title.trim().to_string(),
            req.content.clone(),
            BoardKind::MyCar {
                car_name: req.car_name.trim().to_string(),
                thumbnail_url: req.thumbnail_url.clone(),
            },
        ))
    }
}

/// Builds dash camera boards
#[derive(Debug, Default, Clone, Copy)]
pub struct DashcamBoardFactory;

impl BoardFactory for DashcamBoardFactory {
    fn board_type(&self) -> BoardType {
        BoardType::Dashcam
    }

    fn create_board(&self, request: &BoardCreateRequest, member: &Member) -> ServiceResult<Board> {
        let BoardCreateRequest::Dashcam(req) = request else {
            return Err(dispatch_mismatch(self.board_type(), request));
        };
        req.validate()?;

        if req.video_urls.iter().any(|url| url.trim().is_empty()) {
            return Err(ServiceError::validation("Video URLs must not be blank"));
        }

        Ok(Board::new(
            member.id,
            req.title.trim().to_string(),
            req.content.clone(),
            BoardKind::Dashcam {
                video_urls: req.video_urls.clone(),
            },
        ))
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Board type → factory dispatch table
#[derive(Clone)]
pub struct BoardFactoryRegistry {
    factories: HashMap<BoardType, Arc<dyn BoardFactory>>,
}

impl fmt::Debug for BoardFactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.factories.keys().collect();
        types.sort();
        f.debug_struct("BoardFactoryRegistry")
            .field("types", &types)
            .finish()
    }
}

impl BoardFactoryRegistry {
    /// Start assembling a registry
    #[must_use]
    pub fn builder() -> BoardFactoryRegistryBuilder {
        BoardFactoryRegistryBuilder::default()
    }

    /// Registry with the built-in factory for every board type
    pub fn with_defaults() -> ServiceResult<Self> {
        Self::builder()
            .register(LeagueBoardFactory)
            .register(MyCarBoardFactory)
            .register(DashcamBoardFactory)
            .build()
    }

    /// Check if a factory is registered for `board_type`
    #[must_use]
    pub fn supports(&self, board_type: BoardType) -> bool {
        self.factories.contains_key(&board_type)
    }

    /// Build a board through the factory registered for `board_type`
    pub fn create(
        &self,
        board_type: BoardType,
        request: &BoardCreateRequest,
        member: &Member,
    ) -> ServiceResult<Board> {
        let factory = self.factories.get(&board_type).ok_or_else(|| {
            ServiceError::internal(format!("no board factory registered for {board_type}"))
        })?;
        factory.create_board(request, member)
    }
}

/// Builder for [`BoardFactoryRegistry`]
#[derive(Default)]
pub struct BoardFactoryRegistryBuilder {
    factories: Vec<Arc<dyn BoardFactory>>,
}

impl BoardFactoryRegistryBuilder {
    /// Add a factory
    #[must_use]
    pub fn register(mut self, factory: impl BoardFactory + 'static) -> Self {
        self.factories.push(Arc::new(factory));
        self
    }

    /// Build a registry covering every board type.
    ///
    /// # Errors
    /// Returns a configuration error if a type is registered twice or has no factory
    pub fn build(self) -> ServiceResult<BoardFactoryRegistry> {
        let registry = self.build_partial()?;

        let missing: Vec<&str> = BoardType::ALL
            .into_iter()
            .filter(|t| !registry.supports(*t))
            .map(BoardType::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(config_error(format!(
                "no board factory registered for {}",
                missing.join(", ")
            )));
        }

        Ok(registry)
    }

    /// Build a registry that may leave board types unsupported.
    ///
    /// Requests for a missing type fail at call time with `ServiceError::Internal`.
    ///
    /// # Errors
    /// Returns a configuration error if a type is registered twice
    pub fn build_partial(self) -> ServiceResult<BoardFactoryRegistry> {
        let mut factories: HashMap<BoardType, Arc<dyn BoardFactory>> = HashMap::new();
        for factory in self.factories {
            let board_type = factory.board_type();
            if factories.insert(board_type, factory).is_some() {
                return Err(config_error(format!(
                    "board factory for {board_type} registered twice"
                )));
            }
        }
        Ok(BoardFactoryRegistry { factories })
    }
}

fn config_error(msg: String) -> ServiceError {
    ServiceError::App(AppError::Config(msg))
}
