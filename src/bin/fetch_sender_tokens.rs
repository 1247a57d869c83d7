use anyhow::Result;
use nftmarket::TokenQuery;
use tokenview::app::handler;

#[tokio::main]
async fn main() -> Result<()> {
    handler::init(TokenQuery::Sender).await
}
