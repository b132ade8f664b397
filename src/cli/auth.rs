use crate::config::SitePaths;
use crate::error::Result;
use crate::google::{clear_tokens, verify_authentication};

pub async fn execute(paths: &SitePaths, reset: bool) -> Result<()> {
    if reset {
        clear_tokens()?;
    }

    verify_authentication(paths).await
}
