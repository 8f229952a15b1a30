pub mod api;

use std::error::Error;
use std::sync::Arc;

use crate::chains::ResponseChain;
use crate::cli::Args;
use crate::session::SessionRegistry;

pub struct Server {
    addr: String,
    chain: Arc<ResponseChain>,
    sessions: SessionRegistry,
    args: Args,
}

impl Server {
    pub fn new(addr: String, chain: Arc<ResponseChain>, args: Args) -> Self {
        Self {
            addr,
            chain,
            sessions: SessionRegistry::new(),
            args,
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(
            &self.addr,
            Arc::clone(&self.chain),
            self.sessions.clone(),
            self.args.clone(),
        ).await
    }
}
