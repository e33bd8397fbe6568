pub mod json_api;

pub use json_api::{
    mark_notification_read_json, new_game_json, recruit_player_json, simulate_week_json,
    train_player_json, transfer_player_json, NewGameRequest, OutcomeResponse, RecruitRequest,
    TrainRequest, TransferRequest, WeekRequest, WeekResponse,
};
