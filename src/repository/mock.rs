//! Mock transport for isolating the fetcher and services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use url::Url;

use crate::repository::ContentSource;
use crate::repository::errors::FetchResult;

mock! {
    pub ContentApi {}

    #[async_trait]
    impl ContentSource for ContentApi {
        async fn get_json(&self, url: &Url) -> FetchResult<Value>;
    }
}
