//! Request and response bodies shared by the relay server and its clients.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::portfolio::{Project, TechCategory, TechItem};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatRequest {
    pub prompt: String,
}

/// JSON error envelope returned with every non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
}

/// A project as listed by `GET /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectEntry {
    pub slug: String,
    pub project: Project,
}

/// One category of the tech stack, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TechGroup {
    pub category: TechCategory,
    pub label: String,
    pub items: Vec<TechItem>,
}
