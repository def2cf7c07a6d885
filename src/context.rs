use crate::config::AwsPaths;
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: AwsPaths,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(json: bool, verbose: u8) -> AppResult<Self> {
        let paths = AwsPaths::discover()?;
        let output = Output::new(json);

        Ok(Self {
            verbose,
            paths,
            output,
        })
    }
}
