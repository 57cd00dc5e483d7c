use serde::{Deserialize, Serialize};

use crate::scores::repo_types::TopScorer;

#[derive(Debug, Deserialize)]
pub struct TopScorersQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TopScorersResponse {
    pub top_scorers: Vec<TopScorer>,
}
