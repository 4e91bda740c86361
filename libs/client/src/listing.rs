//! ARM collection paging adapted to [`PagedListing`].

use std::marker::PhantomData;

use arm_lookup::{DisplayNamed, LookupError, Page, PagedListing};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};

use crate::ArmClient;

/// One page of an ARM collection: `{"value": [...], "nextLink": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

/// A collection endpoint read page by page through `nextLink`.
#[derive(Debug, Clone)]
pub struct ArmListing<T> {
    client: ArmClient,
    path: String,
    api_version: &'static str,
    label: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> ArmListing<T> {
    pub fn new(
        client: ArmClient,
        path: impl Into<String>,
        api_version: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            client,
            path: path.into(),
            api_version,
            label,
            _item: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl<T> PagedListing for ArmListing<T>
where
    T: DeserializeOwned + DisplayNamed + Send + 'static,
{
    type Item = T;

    fn label(&self) -> &'static str {
        self.label
    }

    async fn list_page(&self, cursor: Option<&str>) -> Result<Page<T>, LookupError> {
        let target = cursor.unwrap_or(&self.path);
        let response: ListResponse<T> = self
            .client
            .get_json(target, self.api_version)
            .await
            .map_err(LookupError::listing)?;

        Ok(Page {
            items: response.value,
            next_cursor: response.next_link.filter(|link| !link.is_empty()),
        })
    }
}
