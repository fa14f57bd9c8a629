use rocket::serde::json::Json;
use rocket::{Route, State};

use gomoku_core::PositionState;
use gomoku_engine::{GomokuEngine, SearchOptions};

use crate::config::ServerConfig;
use crate::messages::{ApiResponse, MoveRequest, MoveSuggestion};

pub fn get_routes() -> Vec<Route> {
    routes![suggest_move]
}

// Stateless move suggestion: replay the caller's move list onto a fresh
// board, run the engine for the remaining side, and hand back the chosen
// move plus the move list with it appended. No game is kept on the server
// between requests; the caller is the source of truth for board state.
#[post("/move_suggestion", data = "<request>")]
pub fn suggest_move(
    engine: &State<GomokuEngine>,
    config: &State<ServerConfig>,
    request: Json<MoveRequest>,
) -> ApiResponse {
    let request = request.into_inner();
    let board_size = request.board_size.unwrap_or(config.default_board_size);

    let mut state = match PositionState::new(board_size, request.seed) {
        Ok(state) => state,
        Err(err) => return ApiResponse::from_error(err),
    };
    for mv in &request.moves {
        if let Err(err) = state.apply_move(mv.pos.x, mv.pos.y, mv.side) {
            return ApiResponse::from_error(err);
        }
    }

    let options = SearchOptions {
        max_depth: request.max_depth.unwrap_or(config.default_depth),
        deadline_ms: request.deadline_ms,
    };

    let result = match engine.find_best_move(&mut state, request.side_to_move, options) {
        Ok(result) => result,
        Err(err) => return ApiResponse::from_error(err),
    };

    match MoveSuggestion::from_result(result, request.side_to_move, request.moves) {
        Some(suggestion) => ApiResponse::move_suggestion(&suggestion),
        None => ApiResponse::bad_request("no legal moves available".to_owned()),
    }
}
