use std::marker::PhantomData;

use reqwest::{Client, Method, RequestBuilder, Url, header};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use types::{DashboardStats, Product, ProductDraft, Supplier, SupplierDraft};

use crate::Result;
use crate::resource::{Products, Resource, Suppliers, Users};

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        // A create may answer 201 with no body at all.
        let body: &[u8] = if body.is_empty() { b"null" } else { &body };

        match serde_json::from_slice(body) {
            Ok(r) => Ok(r),
            Err(error) => {
                tracing::debug!(%error, "failed to parse response");
                Err(error.into())
            }
        }
    }
}

/// Thin client over the admin REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Resource paths are joined relative to the base, which only keeps
        // the last segment when it ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "api request");

        Ok(self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json"))
    }

    fn get(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::GET, path.as_ref())
    }

    fn post(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::POST, path.as_ref())
    }

    pub fn users(&self) -> ResourceClient<Users> {
        ResourceClient::new(self.clone())
    }

    pub fn products(&self) -> ResourceClient<Products> {
        ResourceClient::new(self.clone())
    }

    pub fn suppliers(&self) -> ResourceClient<Suppliers> {
        ResourceClient::new(self.clone())
    }

    /// Fetch all three collections concurrently and count them.
    ///
    /// All or nothing: if any fetch fails the whole call fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let users = self.users();
        let products = self.products();
        let suppliers = self.suppliers();

        let (users, products, suppliers) =
            futures::try_join!(users.count(), products.count(), suppliers.count())?;

        Ok(DashboardStats {
            users,
            products,
            suppliers,
        })
    }
}

/// List/create access to a single backend collection.
pub struct ResourceClient<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<R> ResourceClient<R> {
    fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    /// The whole collection, in backend order.
    pub async fn get_all(&self) -> Result<Vec<R::Record>> {
        self.api.get(R::PATH)?.try_send().await
    }

    /// Number of records in the collection. Record contents are not decoded.
    pub async fn count(&self) -> Result<usize> {
        let records: Vec<IgnoredAny> = self.api.get(R::PATH)?.try_send().await?;
        Ok(records.len())
    }

    /// POST `record` as-is and return whatever the backend answers with.
    pub async fn create(&self, record: &R::New) -> Result<Value> {
        self.api.post(R::PATH)?.json(record).try_send().await
    }

    /// Create `record`, then fetch the collection again.
    ///
    /// Only a failed create is an error. A failed reload is handed back in
    /// [`Created::reload`] so the caller can keep its current list.
    pub async fn create_and_reload(&self, record: &R::New) -> Result<Created<R::Record>> {
        let response = self.create(record).await?;
        let reload = self.get_all().await;
        if let Err(error) = &reload {
            tracing::warn!(%error, resource = R::PATH, "reload after create failed");
        }

        Ok(Created { response, reload })
    }
}

/// Outcome of [`ResourceClient::create_and_reload`].
#[derive(Debug)]
pub struct Created<T> {
    /// The backend's answer to the POST (`null` for an empty body).
    pub response: Value,
    pub reload: Result<Vec<T>>,
}

impl ResourceClient<Products> {
    pub async fn create_from_draft(&self, draft: &ProductDraft) -> Result<Created<Product>> {
        let product = draft.to_new_product()?;
        self.create_and_reload(&product).await
    }
}

impl ResourceClient<Suppliers> {
    pub async fn create_from_draft(&self, draft: &SupplierDraft) -> Result<Created<Supplier>> {
        draft.validate()?;
        self.create_and_reload(draft).await
    }
}
