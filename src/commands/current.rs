use serde::Serialize;

use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct CurrentProfile {
    profile: String,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let current = CurrentProfile {
        profile: config::current_profile(),
    };

    let text = current.profile.clone();
    ctx.output.emit(&text, &current)
}
