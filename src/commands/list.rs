use serde::Serialize;

use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ProfileEntry {
    name: String,
    current: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let current = config::current_profile();
    let entries: Vec<ProfileEntry> = config::discover_profiles(&ctx.paths)
        .into_iter()
        .map(|name| {
            let current = name == current;
            ProfileEntry { name, current }
        })
        .collect();

    let text = entries
        .iter()
        .map(|entry| {
            if entry.current {
                format!("{} [current]", entry.name)
            } else {
                entry.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    ctx.output.emit(&text, &entries)
}
