use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response;
use rocket::response::{Responder, Response};
use rocket::serde::json::serde_json::json;
use rocket::serde::json::Value;
use rocket::serde::{Deserialize, Serialize};

use gomoku_core::{Color, GomokuError, Move};
use gomoku_engine::SearchResult;

// Generic API response with an arbitrary HTTP status code and json payload.
// kudos to https://stackoverflow.com/a/54867136
pub struct ApiResponse {
    status: Status,
    payload: Value,
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiResponse {
    fn respond_to(self, req: &'r Request) -> response::Result<'o> {
        Response::build_from(self.payload.respond_to(req).unwrap())
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

impl ApiResponse {
    pub fn bad_request(msg: String) -> Self {
        Self { status: Status::BadRequest, payload: json!({"msg": msg}) }
    }

    pub fn move_suggestion(suggestion: &MoveSuggestion) -> Self {
        Self { status: Status::Ok, payload: json!(suggestion) }
    }

    // Maps the core's value-returned error taxonomy onto HTTP statuses, the
    // way the teacher's ApiResponse maps its own string errors.
    pub fn from_error(err: GomokuError) -> Self {
        let status = match err {
            GomokuError::IllegalMove => Status::BadRequest,
            GomokuError::GameOver => Status::Conflict,
            GomokuError::NothingToUndo => Status::BadRequest,
            GomokuError::ResourceExhausted => Status::InternalServerError,
        };
        Self { status, payload: json!({"msg": err.to_string()}) }
    }
}

// A single request: replay `moves` onto a fresh board of `board_size`
// seeded by `seed`, then find the best move for `side_to_move`. Stateless
// by construction - no game is persisted between requests.
#[derive(Deserialize)]
pub struct MoveRequest {
    pub board_size: Option<u8>,
    pub seed: u64,
    #[serde(default)]
    pub moves: Vec<Move>,
    pub side_to_move: Color,
    pub max_depth: Option<u8>,
    pub deadline_ms: Option<u64>,
}

// Mirrors the core API's MoveResult (spec.md sec 6), plus the updated move
// list the stateless caller needs to carry forward to its next request.
#[derive(Serialize)]
pub struct MoveSuggestion {
    pub r#move: Move,
    pub score: i32,
    pub depth_reached: u8,
    pub nodes_evaluated: u64,
    pub timed_out: bool,
    pub winning_move: bool,
    pub moves: Vec<Move>,
}

impl MoveSuggestion {
    pub fn from_result(result: SearchResult, side: Color, mut moves: Vec<Move>) -> Option<Self> {
        let pos = result.best_move?;
        let mv = Move::new(pos, side);
        moves.push(mv);

        Some(Self {
            r#move: mv,
            score: result.score.score(),
            depth_reached: result.depth_reached,
            nodes_evaluated: result.nodes_evaluated,
            timed_out: result.timed_out,
            winning_move: result.winning_move,
            moves,
        })
    }
}
